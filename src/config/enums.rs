//! Configuration enumeration types.

/// Supported document encodings (json, toml).
pub mod config_format;

/// Errors raised while reading, decoding or encoding configuration.
pub mod configuration_error;
