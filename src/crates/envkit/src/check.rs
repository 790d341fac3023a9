//! Required-variable checks
//!
//! A check makes sure a variable resolves to a value, writing a default into
//! the environment when one is supplied. [`Directive`]s describe checks
//! declaratively so a whole service's environment can be validated at
//! startup with [`EnvAccessor::check_many`].
//!
//! # Example
//!
//! ```rust
//! use envkit::{Directive, EnvAccessor, EnvSource, MemoryEnv};
//!
//! let env = EnvAccessor::new(MemoryEnv::new().with_var("APP_DATABASE_URL", "postgres://db"));
//!
//! let directives = vec![
//!     Directive::required("database_url"),
//!     Directive::optional("log_level").with_default("info"),
//! ];
//! env.check_many("app", &directives, false).unwrap();
//!
//! assert_eq!(env.source().get("APP_LOG_LEVEL"), Some("info".to_string()));
//! ```

use crate::accessor::EnvAccessor;
use crate::source::EnvSource;
use crate::{EnvError, Result};
use serde::{Deserialize, Serialize};
use tracing::{error, info};

/// Rule describing how one variable is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    /// Variable name, before prefixing and normalization
    pub name: String,
    /// Fail the check when the variable resolves to nothing
    #[serde(default)]
    pub required: bool,
    /// Value written into the environment when unset; empty means none
    #[serde(default)]
    pub default_value: String,
}

impl Directive {
    pub fn new(name: impl Into<String>, required: bool, default_value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required,
            default_value: default_value.into(),
        }
    }

    /// A required variable with no default
    pub fn required(name: impl Into<String>) -> Self {
        Self::new(name, true, "")
    }

    /// An optional variable with no default
    pub fn optional(name: impl Into<String>) -> Self {
        Self::new(name, false, "")
    }

    /// Set the default value
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }
}

impl<S: EnvSource> EnvAccessor<S> {
    /// Verify that `key` under `prefix` is set.
    ///
    /// If the variable is unset or empty and `default_value` is non-empty,
    /// the default is written into the source and the check passes. An unset
    /// required variable without a default fails with
    /// [`EnvError::RequiredNotSet`]. With `verbose` each step is logged at
    /// info level.
    pub fn check(
        &self,
        prefix: &str,
        key: &str,
        default_value: &str,
        required: bool,
        verbose: bool,
    ) -> Result<()> {
        let (key, value) = self.lookup(prefix, key);

        if verbose {
            info!(key = %key, "checking env var {} ...", key);
        }

        if value.is_none() {
            if !default_value.is_empty() {
                if let Err(e) = self.source().set(&key, default_value) {
                    error!(key = %key, error = %e, "failed to set default value");
                    return Err(e);
                }

                if verbose {
                    info!(key = %key, "set with default value");
                }
                return Ok(());
            }

            if required {
                if verbose {
                    info!(key = %key, "required but not set");
                }
                return Err(EnvError::RequiredNotSet { key });
            }
        }

        if verbose {
            info!(key = %key, "ok");
        }

        Ok(())
    }

    /// Run [`check`](Self::check) for each directive in order.
    ///
    /// Stops at the first failure; later directives are not evaluated.
    pub fn check_many(&self, prefix: &str, directives: &[Directive], verbose: bool) -> Result<()> {
        for directive in directives {
            self.check(
                prefix,
                &directive.name,
                &directive.default_value,
                directive.required,
                verbose,
            )?;
        }

        Ok(())
    }
}
