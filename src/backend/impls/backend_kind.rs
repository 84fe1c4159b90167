use std::fmt;
use crate::backend::enums::backend_kind::BackendKind;

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendKind::redis => write!(f, "redis"),
            BackendKind::pq => write!(f, "pq"),
            BackendKind::cockroachdb => write!(f, "cockroachdb"),
            BackendKind::mongo => write!(f, "mongo"),
        }
    }
}

impl BackendKind {
    pub const ALL: [BackendKind; 4] = [
        BackendKind::redis,
        BackendKind::pq,
        BackendKind::cockroachdb,
        BackendKind::mongo,
    ];

    /// Log prefix, e.g. `[PgSQL]`.
    pub fn label(&self) -> &'static str {
        match self {
            BackendKind::redis => "Redis",
            BackendKind::pq => "PgSQL",
            BackendKind::cockroachdb => "CockroachDB",
            BackendKind::mongo => "MongoDB",
        }
    }

    pub fn role(&self) -> &'static str {
        match self {
            BackendKind::redis => "cache-store",
            BackendKind::pq => "relational",
            BackendKind::cockroachdb => "distributed-SQL",
            BackendKind::mongo => "document-store",
        }
    }
}
