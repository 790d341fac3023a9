//! Key normalization

/// Build the canonical lookup key for `key` under `prefix`.
///
/// Both parts are trimmed; a non-empty prefix is joined with `_`; the result
/// is upper-cased.
///
/// # Example
///
/// ```rust
/// use envkit::normalize;
///
/// assert_eq!(normalize(" app ", " port "), "APP_PORT");
/// assert_eq!(normalize("", "debug"), "DEBUG");
/// ```
pub fn normalize(prefix: &str, key: &str) -> String {
    let prefix = prefix.trim();
    let key = key.trim();

    if prefix.is_empty() {
        key.to_uppercase()
    } else {
        format!("{}_{}", prefix, key).to_uppercase()
    }
}
