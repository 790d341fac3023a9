//! Environment variable validation and typed lookup helpers
//!
//! This crate centralizes the boilerplate services repeat when reading their
//! configuration from the environment.
//!
//! # Modules
//!
//! - `key` - Key normalization (`prefix` + `key`, trimmed and upper-cased)
//! - `source` - Environment sources: the process environment or an in-memory map
//! - `check` - Required-variable checks and batch validation with [`Directive`]s
//! - `getters` - Typed getters that fall back to defaults
//! - `manifest` - Loading directive lists from YAML or JSON
//! - `from_env` - The [`FromEnv`] trait for configuration structs
//! - `process` - Free-function shorthands over the process environment
//!
//! # Example
//!
//! ```rust
//! use envkit::{Directive, EnvAccessor, MemoryEnv};
//!
//! let env = EnvAccessor::new(
//!     MemoryEnv::new()
//!         .with_var("APP_PORT", "7")
//!         .with_var("APP_PEERS", "1,x,3"),
//! );
//!
//! env.check_many("app", &[Directive::required("port")], false).unwrap();
//!
//! assert_eq!(env.get_int("app", "port", 42), 7);
//! assert_eq!(env.get_int_list("app", "peers", ",", &[]), vec![1, 0, 3]);
//! assert!(!env.get_bool("app", "debug", false));
//! ```

pub mod accessor;
pub mod check;
pub mod error;
pub mod from_env;
pub mod getters;
pub mod key;
pub mod manifest;
pub mod parse;
pub mod process;
pub mod source;

pub use accessor::EnvAccessor;
pub use check::Directive;
pub use error::{EnvError, Result};
pub use from_env::FromEnv;
pub use key::normalize;
pub use manifest::{load_directives, parse_directives_json, parse_directives_yaml};
pub use source::{EnvSource, MemoryEnv, SystemEnv};

/// Get version information
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
