use once_cell::sync::Lazy;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::{Captures, Regex};

/// Everything but RFC 3986 unreserved characters gets escaped.
pub const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

static ENV_PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\{([^}]*)\}|\$([A-Za-z0-9_]+)").expect("static placeholder pattern")
});

pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

pub fn process_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Replaces `$NAME` and `${NAME}` with the looked-up value. Unknown names
/// expand to an empty string.
pub fn expand_env(value: &str, lookup: EnvLookup) -> String {
    if !value.contains('$') {
        return value.to_string();
    }
    ENV_PLACEHOLDER
        .replace_all(value, |caps: &Captures| {
            let name = caps
                .get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str())
                .unwrap_or_default();
            lookup(name).unwrap_or_default()
        })
        .into_owned()
}

pub fn expand_env_in_place(field: &mut String, lookup: EnvLookup) {
    if field.contains('$') {
        *field = expand_env(field, lookup);
    }
}

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URL_COMPONENT).to_string()
}

/// Masks a secret inside a connection string, both verbatim and in its
/// percent-encoded form.
pub fn redact(connection_string: &str, secret: &str) -> String {
    if secret.is_empty() {
        return connection_string.to_string();
    }
    connection_string
        .replace(secret, "****")
        .replace(&encode_component(secret), "****")
}

pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "DB_HOST" => Some("db.internal".to_string()),
            "DB_USER" => Some("svc".to_string()),
            _ => None,
        }
    }

    #[test]
    fn test_expand_env_braced_and_bare() {
        assert_eq!(expand_env("${DB_HOST}", &lookup), "db.internal");
        assert_eq!(expand_env("$DB_USER@$DB_HOST", &lookup), "svc@db.internal");
    }

    #[test]
    fn test_expand_env_unknown_is_empty() {
        assert_eq!(expand_env("pre-${MISSING}-post", &lookup), "pre--post");
        assert_eq!(expand_env("$MISSING", &lookup), "");
    }

    #[test]
    fn test_expand_env_leaves_plain_text() {
        assert_eq!(expand_env("localhost", &lookup), "localhost");
        assert_eq!(expand_env("cost: 5$", &lookup), "cost: 5$");
    }

    #[test]
    fn test_expand_env_in_place() {
        let mut host = String::from("$DB_HOST");
        expand_env_in_place(&mut host, &lookup);
        assert_eq!(host, "db.internal");
    }

    #[test]
    fn test_redact_plain_and_encoded() {
        assert_eq!(redact("user=u password=s3cret", "s3cret"), "user=u password=****");
        assert_eq!(
            redact("postgresql://u:p%40ss@h:1/db", "p@ss"),
            "postgresql://u:****@h:1/db"
        );
        assert_eq!(redact("redis://h:1/0", ""), "redis://h:1/0");
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("a b/c"), "a%20b%2Fc");
        assert_eq!(encode_component("safe-._~"), "safe-._~");
    }

    #[test]
    fn test_is_default() {
        assert!(is_default(&0u16));
        assert!(is_default(&String::new()));
        assert!(!is_default(&5u64));
    }
}
