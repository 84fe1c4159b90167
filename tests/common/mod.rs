#![allow(dead_code)]
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use dbconnect::config::enums::config_format::ConfigFormat;
use dbconnect::registry::structs::registry::Registry;

/// Port nothing listens on; connects are refused immediately.
pub const UNREACHABLE_PORT: u16 = 1;

pub const TOML_DOCUMENT: &str = r#"
[[redis]]
id = "main"
host = "127.0.0.1"
port = 6379

[[redis]]
id = "main"
host = "127.0.0.1"
port = 6380

[[pq]]
id = "db1"
host = "localhost"
user = "u"
db = "app"

[[cockroachdb]]
id = "crdb"
host = "localhost"
user = "root"
db = "defaultdb"
sslmode = "require"

[[mongo]]
id = "docs"
db = "events"
"#;

pub const JSON_DOCUMENT: &str = r#"{
    "redis": [
        { "id": "main", "host": "127.0.0.1", "port": 6379 },
        { "id": "main", "host": "127.0.0.1", "port": 6380 }
    ],
    "pq": [ { "id": "db1", "host": "localhost", "user": "u", "db": "app" } ],
    "cockroachdb": [ { "id": "crdb", "host": "localhost", "user": "root", "db": "defaultdb", "sslmode": "require" } ],
    "mongo": [ { "id": "docs", "db": "events" } ]
}"#;

/// Writes `content` to `name` inside a fresh temporary directory. Keep the
/// directory alive for as long as the file is needed.
pub fn write_config(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(name);
    fs::write(&path, content).unwrap();
    (temp_dir, path)
}

pub fn create_test_registry(document: &str, format: ConfigFormat) -> Registry {
    Registry::load(document.as_bytes(), format).unwrap()
}

pub fn unreachable_pq(id: &str) -> String {
    format!(
        r#"{{ "pq": [ {{ "id": "{}", "host": "127.0.0.1", "port": {}, "user": "u", "db": "app", "connect_timeout": 1 }} ] }}"#,
        id, UNREACHABLE_PORT
    )
}
