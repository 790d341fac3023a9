//! Environment sources
//!
//! Everything in this crate reads and writes through [`EnvSource`] so that
//! callers (and tests) can swap the real process environment for an
//! in-memory map.

use crate::{EnvError, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::env;

/// Minimal get/set capability over an environment table.
pub trait EnvSource: Send + Sync {
    /// Get a variable by its already-normalized key.
    ///
    /// Returns `None` if the variable is not set.
    fn get(&self, key: &str) -> Option<String>;

    /// Set a variable by its already-normalized key.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Get a variable, treating the empty string as unset.
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|value| !value.is_empty())
    }
}

impl<S: EnvSource + ?Sized> EnvSource for &S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}

/// The real process environment.
///
/// Writes are not synchronized; concurrent checks racing on the same key
/// must be coordinated by the caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    pub fn new() -> Self {
        Self
    }
}

impl EnvSource for SystemEnv {
    fn get(&self, key: &str) -> Option<String> {
        if key.is_empty() || key.contains(['=', '\0']) {
            return None;
        }
        // Non-UTF-8 values still count as set.
        env::var_os(key).map(|value| value.to_string_lossy().into_owned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let reason = if key.is_empty() {
            Some("key is empty")
        } else if key.contains('=') {
            Some("key contains '='")
        } else if key.contains('\0') {
            Some("key contains a NUL byte")
        } else if value.contains('\0') {
            Some("value contains a NUL byte")
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(EnvError::SetFailed {
                key: key.to_string(),
                reason: reason.to_string(),
            });
        }

        env::set_var(key, value);
        Ok(())
    }
}

/// In-memory environment table, mainly for tests.
#[derive(Debug, Default)]
pub struct MemoryEnv {
    vars: RwLock<HashMap<String, String>>,
}

impl MemoryEnv {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable, builder style
    pub fn with_var(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.write().insert(key.into(), value.into());
        self
    }

    /// Remove a variable, returning its previous value
    pub fn remove(&self, key: &str) -> Option<String> {
        self.vars.write().remove(key)
    }

    /// Whether `key` is present (even if empty)
    pub fn contains(&self, key: &str) -> bool {
        self.vars.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.vars.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.read().is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = iter
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            vars: RwLock::new(vars),
        }
    }
}

impl EnvSource for MemoryEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.vars.write().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
