//! Configuration file migrations.
//!
//! Older config files lack keys added in later releases, and the first
//! releases called the data directory `csv_dir`. Loading already tolerates
//! both (serde defaults); these helpers rewrite the file so it shows every
//! key explicitly.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys renamed across releases: `(old, new)`.
const RENAMED_KEYS: [(&str, &str); 1] = [("csv_dir", "data_dir")];

/// Keys of the current configuration layout, in file order.
fn expected_keys() -> AppResult<Mapping> {
    let value = serde_yaml::to_value(Config::default()).map_err(|e| AppError::Config(e.to_string()))?;
    match value {
        Value::Mapping(m) => Ok(m),
        _ => Err(AppError::Config("default configuration is not a mapping".into())),
    }
}

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }
    match serde_yaml::from_str::<Value>(&content) {
        Ok(Value::Mapping(m)) => Ok(m),
        Ok(_) => Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        ))),
        Err(e) => Err(AppError::Config(format!("{}: {}", path.display(), e))),
    }
}

/// Names of current keys missing from the file at `path`.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let expected = expected_keys()?;

    Ok(expected
        .keys()
        .filter_map(Value::as_str)
        .filter(|k| !current.contains_key(*k))
        .map(str::to_string)
        .collect())
}

/// Rename legacy keys and add missing ones with their default values.
/// Existing values are never overwritten. Returns the applied actions;
/// the file is only rewritten when the list is not empty.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let expected = expected_keys()?;
    let mut actions = Vec::new();

    for (old, new) in RENAMED_KEYS {
        if current.contains_key(old) && !current.contains_key(new) {
            if let Some(v) = current.remove(old) {
                current.insert(Value::String(new.to_string()), v);
                actions.push(format!("renamed '{}' to '{}'", old, new));
            }
        }
    }

    for (key, default) in &expected {
        if !current.contains_key(key) {
            current.insert(key.clone(), default.clone());
            if let Some(k) = key.as_str() {
                actions.push(format!("added '{}'", k));
            }
        }
    }

    if !actions.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(current))
            .map_err(|e| AppError::Config(format!("Failed to serialize {:?}: {}", path, e)))?;
        fs::write(path, serialized)?;
    }

    Ok(actions)
}
