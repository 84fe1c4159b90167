//! Implementation blocks for the Redis backend.

/// BackendSettings implementation for RedisConfig.
pub mod redis_config;

/// RedisPool implementation: checkout, dial, idle bookkeeping.
pub mod redis_pool;

/// RedisPoolSettings implementation: conversion from settings, staleness.
pub mod redis_pool_settings;

/// PooledConnection implementation: commands and release on drop.
pub mod pooled_connection;
