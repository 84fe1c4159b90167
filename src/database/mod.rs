//! PostgreSQL and CockroachDB backends.
//!
//! Both kinds hand out a `sqlx::PgPool`; they differ in the accepted
//! `sslmode` values, their defaults and the connection string convention.
//! PostgreSQL descriptors render a libpq key/value DSN, CockroachDB
//! descriptors a `postgresql://` URL carrying the cluster `options`.
//!
//! | Kind        | Default port | Default sslmode | Accepted sslmode                                    |
//! |-------------|--------------|-----------------|-----------------------------------------------------|
//! | pq          | 5432         | disable         | disable, verify-ca, verify-full                     |
//! | cockroachdb | 26257        | verify-full     | disable, allow, prefer, require, verify-ca, verify-full |

/// Shared constants and helpers for both SQL kinds.
pub mod helpers;

/// Implementation blocks for the SQL settings.
pub mod impls;

#[cfg(test)]
mod tests;
