//! Implementation blocks for configuration types.

/// ConfigFormat implementation: extension detection, decode, encode.
pub mod config_format;

/// Configuration implementation: load and save.
pub mod configuration;
