//! The environment accessor
//!
//! [`EnvAccessor`] owns an [`EnvSource`] and is the receiver for every check
//! and getter in this crate. The checks live in [`crate::check`] and the
//! typed getters in [`crate::getters`].

use crate::source::{EnvSource, SystemEnv};

/// Typed, prefix-aware access to an environment source.
///
/// # Example
///
/// ```rust
/// use envkit::{EnvAccessor, MemoryEnv};
///
/// let env = EnvAccessor::new(MemoryEnv::new().with_var("APP_PORT", "8080"));
///
/// assert_eq!(env.get_int("app", "port", 80), 8080);
/// assert_eq!(env.get_int("app", "workers", 4), 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct EnvAccessor<S = SystemEnv> {
    source: S,
}

impl EnvAccessor<SystemEnv> {
    /// Accessor over the real process environment
    pub fn system() -> Self {
        Self { source: SystemEnv }
    }
}

impl<S: EnvSource> EnvAccessor<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Borrow the underlying source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Consume the accessor and return its source
    pub fn into_source(self) -> S {
        self.source
    }

    /// Look up `key` under `prefix`, treating empty values as unset.
    ///
    /// Returns the normalized key alongside the value.
    pub(crate) fn lookup(&self, prefix: &str, key: &str) -> (String, Option<String>) {
        let key = crate::normalize(prefix, key);
        let value = self.source.get_non_empty(&key);
        (key, value)
    }
}
