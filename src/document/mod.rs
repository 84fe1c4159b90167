//! MongoDB document-store backend.
//!
//! A `mongo` descriptor hands out a `mongodb::Client`. Unlike the SQL kinds
//! the connect step does not stop at building the client: it pings the
//! `admin` database, and a failed ping is recorded as the descriptor's
//! outcome (`ConnectError::Probe`).
//!
//! When `connectionString` is set it is used verbatim and the host, port
//! and credential fields are ignored.

/// Implementation blocks for the mongo settings.
pub mod impls;

#[cfg(test)]
mod tests;
