use std::fmt;
use std::sync::Arc;
use log::{debug, error, info};
use parking_lot::Mutex;
use tokio::sync::{watch, OnceCell};
use crate::backend::errors::ConnectError;
use crate::backend::structs::descriptor::{Connection, Descriptor};
use crate::backend::traits::backend_settings::BackendSettings;
use crate::common::common::process_env;

impl<S: BackendSettings> fmt::Debug for Descriptor<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = match self.slot.get() {
            Some(Ok(_)) => "connected",
            Some(Err(_)) => "failed",
            None if self.attempt.lock().is_some() => "connecting",
            None => "pending",
        };
        f.debug_struct("Descriptor")
            .field("kind", &S::KIND)
            .field("id", &self.settings.id())
            .field("expand_env", &self.expand_env)
            .field("state", &state)
            .finish()
    }
}

impl<S: BackendSettings> Descriptor<S> {
    pub fn new(settings: S, expand_env: bool) -> Self {
        Self {
            settings,
            expand_env,
            slot: Arc::new(OnceCell::new()),
            attempt: Mutex::new(None),
        }
    }

    pub fn id(&self) -> &str {
        self.settings.id()
    }

    /// Settings as declared in the document.
    pub fn settings(&self) -> &S {
        &self.settings
    }

    /// Settings after expansion and defaults, once a connect succeeded.
    pub fn resolved(&self) -> Option<&S> {
        match self.slot.get() {
            Some(Ok(connection)) => Some(&connection.resolved),
            _ => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.slot.initialized()
    }

    /// Recorded outcome without triggering a connect.
    pub fn outcome(&self) -> Option<Result<S::Handle, ConnectError>> {
        self.slot.get().map(clone_outcome)
    }

    /// Returns the live handle, connecting on first use.
    ///
    /// The connect sequence runs at most once per descriptor, on a task of
    /// its own: callers only wait for it, so dropping a caller never cancels
    /// or restarts the attempt. Every caller observes the same handle or
    /// error, and a failure is permanent for this descriptor.
    pub async fn ensure_connected(&self) -> Result<S::Handle, ConnectError> {
        if let Some(outcome) = self.slot.get() {
            return clone_outcome(outcome);
        }
        let mut done = self.start();
        let _ = done.wait_for(|finished| *finished).await;
        match self.slot.get() {
            Some(outcome) => clone_outcome(outcome),
            None => Err(self.settings.connect_error("connect task ended without an outcome")),
        }
    }

    /// Expanded, validated and defaulted copy of the declared settings.
    pub fn prepare(&self) -> Result<S, ConnectError> {
        prepare(&self.settings, self.expand_env)
    }

    fn start(&self) -> watch::Receiver<bool> {
        let mut attempt = self.attempt.lock();
        if let Some(done) = attempt.as_ref() {
            return done.clone();
        }
        let (finished, done) = watch::channel(false);
        let settings = self.settings.clone();
        let expand_env = self.expand_env;
        let slot = self.slot.clone();
        tokio::spawn(async move {
            let outcome = connect(settings, expand_env).await;
            let _ = slot.set(outcome);
            finished.send_replace(true);
        });
        *attempt = Some(done.clone());
        done
    }
}

fn clone_outcome<S: BackendSettings>(outcome: &Result<Connection<S>, ConnectError>) -> Result<S::Handle, ConnectError> {
    match outcome {
        Ok(connection) => Ok(connection.handle.clone()),
        Err(error) => Err(error.clone()),
    }
}

fn prepare<S: BackendSettings>(declared: &S, expand_env: bool) -> Result<S, ConnectError> {
    let mut settings = declared.clone();
    if expand_env {
        settings.expand_env(&process_env);
    }
    settings.validate().map_err(|reason| settings.validation_error(reason))?;
    settings.apply_defaults();
    Ok(settings)
}

async fn connect<S: BackendSettings>(declared: S, expand_env: bool) -> Result<Connection<S>, ConnectError> {
    let label = S::KIND.label();
    let resolved = match prepare(&declared, expand_env) {
        Ok(resolved) => resolved,
        Err(error) => {
            error!("[{}] {}", label, error);
            return Err(error);
        }
    };
    debug!("[{}] Connecting {} using {}", label, declared.id(), resolved.redacted_connection_string());
    match resolved.open().await {
        Ok(handle) => {
            info!("[{}] Connected {}", label, declared.id());
            Ok(Connection { resolved, handle })
        }
        Err(error) => {
            error!("[{}] {}", label, error);
            Err(error)
        }
    }
}
