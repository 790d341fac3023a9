//! Directive manifests
//!
//! Services can keep their environment contract in a YAML or JSON file
//! instead of building [`Directive`] lists in code:
//!
//! ```yaml
//! - name: database_url
//!   required: true
//! - name: log_level
//!   default_value: info
//! ```

use crate::check::Directive;
use crate::{EnvError, Result};
use std::path::Path;

/// Parse a directive list from YAML text.
pub fn parse_directives_yaml(content: &str) -> Result<Vec<Directive>> {
    Ok(serde_yaml::from_str(content)?)
}

/// Parse a directive list from JSON text.
pub fn parse_directives_json(content: &str) -> Result<Vec<Directive>> {
    Ok(serde_json::from_str(content)?)
}

/// Load a directive list from a file (format detected from extension).
pub fn load_directives(path: impl AsRef<Path>) -> Result<Vec<Directive>> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| {
            EnvError::Manifest(format!("Unable to determine file extension for {:?}", path))
        })?;

    let parse: fn(&str) -> Result<Vec<Directive>> = match extension.to_lowercase().as_str() {
        "yaml" | "yml" => parse_directives_yaml,
        "json" => parse_directives_json,
        other => {
            return Err(EnvError::Manifest(format!(
                "Unsupported manifest format: {}",
                other
            )))
        }
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| EnvError::Manifest(format!("Failed to read {:?}: {}", path, e)))?;

    parse(&content)
}
