//! Implementation blocks for the SQL backends.

/// BackendSettings implementation for PqConfig.
pub mod pq_config;

/// BackendSettings implementation for RoachConfig.
pub mod roach_config;
