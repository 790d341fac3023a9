//! Configuration structs loaded from the environment
//!
//! Provides a common trait for configuration structures that read
//! themselves through an [`EnvAccessor`], so every service validates and
//! loads its settings the same way.

use crate::accessor::EnvAccessor;
use crate::check::Directive;
use crate::source::EnvSource;
use crate::Result;

/// Trait for configuration structures loaded from environment variables
///
/// # Example
///
/// ```rust
/// use envkit::{Directive, EnvAccessor, EnvError, EnvSource, FromEnv, MemoryEnv};
///
/// struct ServerConfig {
///     host: String,
///     port: isize,
/// }
///
/// impl FromEnv for ServerConfig {
///     fn directives() -> Vec<Directive> {
///         vec![Directive::optional("host").with_default("localhost")]
///     }
///
///     fn from_env<S: EnvSource>(env: &EnvAccessor<S>, prefix: &str) -> envkit::Result<Self> {
///         Ok(Self {
///             host: env.get_string(prefix, "host", ""),
///             port: env.get_int(prefix, "port", 8080),
///         })
///     }
///
///     fn validate(&self) -> envkit::Result<()> {
///         if self.port <= 0 {
///             return Err(EnvError::Invalid("port must be positive".into()));
///         }
///         Ok(())
///     }
/// }
///
/// let env = EnvAccessor::new(MemoryEnv::new());
/// let config = ServerConfig::load(&env, "server", false).unwrap();
/// assert_eq!(config.host, "localhost");
/// assert_eq!(config.port, 8080);
/// ```
pub trait FromEnv: Sized {
    /// Variables checked before loading
    ///
    /// Defaults declared here are written into the environment first, so
    /// `from_env` sees them.
    fn directives() -> Vec<Directive> {
        Vec::new()
    }

    /// Read the configuration from `env` under `prefix`
    fn from_env<S: EnvSource>(env: &EnvAccessor<S>, prefix: &str) -> Result<Self>;

    /// Validate the loaded configuration
    ///
    /// Returns an error if values are out of range or inconsistent.
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Check directives, load, and validate
    fn load<S: EnvSource>(env: &EnvAccessor<S>, prefix: &str, verbose: bool) -> Result<Self> {
        env.check_many(prefix, &Self::directives(), verbose)?;
        let config = Self::from_env(env, prefix)?;
        config.validate()?;
        Ok(config)
    }
}
