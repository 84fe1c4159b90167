//! Configuration management module.
//!
//! Loads the connection document that lists every named backend instance.
//! The same in-memory shape is decoded from either JSON or TOML; the file
//! extension picks the decoder.
//!
//! # Configuration Structure
//!
//! - **redis**: cache-store instances
//! - **pq**: PostgreSQL instances
//! - **cockroachdb**: CockroachDB instances
//! - **mongo**: MongoDB instances
//! - **expand_env**: whether `$NAME` placeholders are expanded (default on)
//! - **log_level**: optional level for [`crate::logging::setup_logging`]
//!
//! # Example
//!
//! ```rust,ignore
//! use dbconnect::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_file("databases.toml")?;
//! println!("{} redis instances", config.redis.len());
//! ```

/// Configuration enumerations (document format, errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
