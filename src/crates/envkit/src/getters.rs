//! Typed getters
//!
//! Every lenient getter normalizes the key, looks it up and parses it. An
//! absent, empty or malformed value resolves to the supplied default; list
//! getters resolve to an empty list when the default is empty too. None of
//! them fail.
//!
//! The `try_` variants surface parse failures instead.

use crate::accessor::EnvAccessor;
use crate::parse::{parse_bool, parse_list_lenient, parse_list_strict, split_list};
use crate::source::EnvSource;
use crate::{EnvError, Result};
use std::str::FromStr;
use tracing::debug;

impl<S: EnvSource> EnvAccessor<S> {
    fn get_parsed<T>(&self, prefix: &str, key: &str, default: T) -> T
    where
        T: FromStr,
    {
        let (key, value) = self.lookup(prefix, key);
        let Some(raw) = value else {
            return default;
        };

        match raw.parse::<T>() {
            Ok(parsed) => parsed,
            Err(_) => {
                debug!(key = %key, value = %raw, "unparsable value, using default");
                default
            }
        }
    }

    fn get_list<T>(
        &self,
        prefix: &str,
        key: &str,
        default: &[T],
        parse: impl Fn(&str) -> Vec<T>,
    ) -> Vec<T>
    where
        T: Clone,
    {
        match self.lookup(prefix, key).1 {
            Some(raw) => parse(&raw),
            None => default.to_vec(),
        }
    }

    /// Get a string, or `default` when unset
    pub fn get_string(&self, prefix: &str, key: &str, default: &str) -> String {
        self.lookup(prefix, key)
            .1
            .unwrap_or_else(|| default.to_string())
    }

    /// Get a list of strings split on `separator`.
    ///
    /// When unset, returns `default` (which may itself be empty).
    pub fn get_string_list(
        &self,
        prefix: &str,
        key: &str,
        separator: &str,
        default: &[String],
    ) -> Vec<String> {
        self.get_list(prefix, key, default, |raw| split_list(raw, separator))
    }

    /// Get a base-10 pointer-width integer
    pub fn get_int(&self, prefix: &str, key: &str, default: isize) -> isize {
        self.get_parsed(prefix, key, default)
    }

    /// Get a base-10 64-bit integer
    pub fn get_int64(&self, prefix: &str, key: &str, default: i64) -> i64 {
        self.get_parsed(prefix, key, default)
    }

    /// Get a list of integers split on `separator`.
    ///
    /// Elements that fail to parse become `0` rather than being dropped, so
    /// positions are preserved. Use [`try_get_int_list`](Self::try_get_int_list)
    /// to reject such values instead.
    pub fn get_int_list(
        &self,
        prefix: &str,
        key: &str,
        separator: &str,
        default: &[isize],
    ) -> Vec<isize> {
        self.get_list(prefix, key, default, |raw| parse_list_lenient(raw, separator))
    }

    /// Get a floating point number
    pub fn get_float(&self, prefix: &str, key: &str, default: f64) -> f64 {
        self.get_parsed(prefix, key, default)
    }

    /// Get a boolean.
    ///
    /// See [`parse_bool`](crate::parse::parse_bool) for accepted forms.
    pub fn get_bool(&self, prefix: &str, key: &str, default: bool) -> bool {
        let (key, value) = self.lookup(prefix, key);
        let Some(raw) = value else {
            return default;
        };

        parse_bool(&raw).unwrap_or_else(|| {
            debug!(key = %key, value = %raw, "invalid boolean, using default");
            default
        })
    }

    /// Load and parse a variable, surfacing parse errors.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(value))` if the variable is set and parses
    /// * `Ok(None)` if the variable is unset or empty
    /// * `Err(EnvError::Parse)` if the variable is set but fails to parse
    ///
    /// # Example
    ///
    /// ```rust
    /// use envkit::{EnvAccessor, MemoryEnv};
    ///
    /// let env = EnvAccessor::new(MemoryEnv::new().with_var("APP_PORT", "http"));
    /// assert!(env.try_get::<u16>("app", "port").is_err());
    /// assert_eq!(env.try_get::<u16>("app", "timeout").unwrap(), None);
    /// ```
    pub fn try_get<T>(&self, prefix: &str, key: &str) -> Result<Option<T>>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let (key, value) = self.lookup(prefix, key);
        let Some(raw) = value else {
            return Ok(None);
        };

        raw.parse::<T>()
            .map(Some)
            .map_err(|e| EnvError::Parse {
                key,
                reason: e.to_string(),
                value: raw,
            })
    }

    /// Strict counterpart of [`get_int_list`](Self::get_int_list).
    ///
    /// Fails on the first element that is not a base-10 integer.
    pub fn try_get_int_list(
        &self,
        prefix: &str,
        key: &str,
        separator: &str,
    ) -> Result<Option<Vec<isize>>> {
        let (key, value) = self.lookup(prefix, key);
        let Some(raw) = value else {
            return Ok(None);
        };

        parse_list_strict(&raw, separator)
            .map(Some)
            .map_err(|(item, reason)| EnvError::Parse {
                key,
                value: item,
                reason,
            })
    }
}
