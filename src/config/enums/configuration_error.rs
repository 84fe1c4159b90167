use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("{0}")]
    IOError(#[from] std::io::Error),

    #[error("invalid JSON document: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("invalid UTF-8 in document: {0}")]
    Utf8Error(#[from] std::str::Utf8Error),

    #[error("invalid TOML document: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("unable to encode configuration: {0}")]
    EncodeError(String),

    #[error("invalid extension: \"{0}\"")]
    UnsupportedExtension(String),
}
