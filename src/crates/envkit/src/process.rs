//! Shorthands over the process environment.
//!
//! Each function builds an [`EnvAccessor::system`] and forwards to the
//! method of the same name.

use crate::accessor::EnvAccessor;
use crate::check::Directive;
use crate::Result;
use std::str::FromStr;

/// Check one variable, writing `default_value` into the process if unset
pub fn check(
    prefix: &str,
    key: &str,
    default_value: &str,
    required: bool,
    verbose: bool,
) -> Result<()> {
    EnvAccessor::system().check(prefix, key, default_value, required, verbose)
}

/// Check each directive in order, stopping at the first failure
pub fn check_many(prefix: &str, directives: &[Directive], verbose: bool) -> Result<()> {
    EnvAccessor::system().check_many(prefix, directives, verbose)
}

/// Load a variable as a string, or `default` when unset
pub fn get_string(prefix: &str, key: &str, default: &str) -> String {
    EnvAccessor::system().get_string(prefix, key, default)
}

/// Load a variable as a list of strings split on `separator`
pub fn get_string_list(
    prefix: &str,
    key: &str,
    separator: &str,
    default: &[String],
) -> Vec<String> {
    EnvAccessor::system().get_string_list(prefix, key, separator, default)
}

/// Load a variable as an integer, or `default` when unset or invalid
pub fn get_int(prefix: &str, key: &str, default: isize) -> isize {
    EnvAccessor::system().get_int(prefix, key, default)
}

/// Load a variable as a 64-bit integer, or `default` when unset or invalid
pub fn get_int64(prefix: &str, key: &str, default: i64) -> i64 {
    EnvAccessor::system().get_int64(prefix, key, default)
}

/// Load a variable as a list of integers; bad elements become `0`
pub fn get_int_list(prefix: &str, key: &str, separator: &str, default: &[isize]) -> Vec<isize> {
    EnvAccessor::system().get_int_list(prefix, key, separator, default)
}

/// Load a variable as a float, or `default` when unset or invalid
pub fn get_float(prefix: &str, key: &str, default: f64) -> f64 {
    EnvAccessor::system().get_float(prefix, key, default)
}

/// Load a variable as a boolean, or `default` when unset or invalid
pub fn get_bool(prefix: &str, key: &str, default: bool) -> bool {
    EnvAccessor::system().get_bool(prefix, key, default)
}

/// Load and parse a variable, surfacing parse errors
pub fn try_get<T>(prefix: &str, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    EnvAccessor::system().try_get(prefix, key)
}

/// Load a list of integers, failing on the first bad element
pub fn try_get_int_list(prefix: &str, key: &str, separator: &str) -> Result<Option<Vec<isize>>> {
    EnvAccessor::system().try_get_int_list(prefix, key, separator)
}
