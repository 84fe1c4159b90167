use std::fmt;
use std::path::Path;
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::enums::config_format::ConfigFormat;
use crate::config::enums::configuration_error::ConfigurationError;

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigFormat::json => write!(f, "json"),
            ConfigFormat::toml => write!(f, "toml"),
        }
    }
}

impl ConfigFormat {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<ConfigFormat, ConfigurationError> {
        match path.as_ref().extension().and_then(|extension| extension.to_str()) {
            Some("json") => Ok(ConfigFormat::json),
            Some("toml") => Ok(ConfigFormat::toml),
            Some(other) => Err(ConfigurationError::UnsupportedExtension(format!(".{}", other))),
            None => Err(ConfigurationError::UnsupportedExtension(String::new())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ConfigFormat::json => ".json",
            ConfigFormat::toml => ".toml",
        }
    }

    pub fn decode<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T, ConfigurationError> {
        match self {
            ConfigFormat::json => Ok(serde_json::from_slice(data)?),
            ConfigFormat::toml => Ok(toml::from_str(std::str::from_utf8(data)?)?),
        }
    }

    pub fn encode<T: Serialize>(&self, value: &T) -> Result<String, ConfigurationError> {
        match self {
            ConfigFormat::json => serde_json::to_string_pretty(value)
                .map_err(|e| ConfigurationError::EncodeError(e.to_string())),
            ConfigFormat::toml => toml::to_string(value)
                .map_err(|e| ConfigurationError::EncodeError(e.to_string())),
        }
    }
}
