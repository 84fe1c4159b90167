use std::fs::File;
use std::io::Write;
use std::path::Path;
use log::debug;
use crate::config::enums::config_format::ConfigFormat;
use crate::config::enums::configuration_error::ConfigurationError;
use crate::config::structs::configuration::Configuration;

impl Configuration {
    pub fn load(data: &[u8], format: ConfigFormat) -> Result<Configuration, ConfigurationError> {
        format.decode(data)
    }

    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Configuration, ConfigurationError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let data = std::fs::read(path)?;
        let config = Self::load(data.as_slice(), format)?;
        debug!(
            "[CONFIG] Loaded {} ({} redis, {} pq, {} cockroachdb, {} mongo)",
            path.display(),
            config.redis.len(),
            config.pq.len(),
            config.cockroachdb.len(),
            config.mongo.len()
        );
        Ok(config)
    }

    pub fn save_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigurationError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)?;
        let data = format.encode(self)?;
        let mut file = File::create(path)?;
        file.write_all(data.as_bytes())?;
        Ok(())
    }

    pub fn expand_env_enabled(&self) -> bool {
        self.expand_env.unwrap_or(true)
    }

    pub fn is_empty(&self) -> bool {
        self.redis.is_empty() && self.pq.is_empty() && self.mongo.is_empty() && self.cockroachdb.is_empty()
    }
}
