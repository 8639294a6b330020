//! Bring an older configuration file up to date with the current fields.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys present in a default configuration but absent from `yaml`.
pub fn missing_fields(yaml: &Mapping) -> AppResult<Vec<String>> {
    let defaults = serde_yaml::to_value(Config::default())?;
    let Value::Mapping(defaults) = defaults else {
        return Err(AppError::Config("default configuration is not a mapping".into()));
    };

    Ok(defaults
        .keys()
        .filter(|k| !yaml.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Read the YAML file at `path`, add any missing field with its default
/// value and write it back. Existing values are never touched.
///
/// Returns the names of the fields that were added.
pub fn fill_missing_fields(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let mut yaml: Value = serde_yaml::from_str(&content)?;

    let Some(map) = yaml.as_mapping_mut() else {
        return Err(AppError::Config(format!(
            "{} does not contain a YAML mapping",
            path.display()
        )));
    };

    let missing = missing_fields(map)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    let Value::Mapping(defaults) = serde_yaml::to_value(Config::default())? else {
        return Err(AppError::Config("default configuration is not a mapping".into()));
    };

    for key in &missing {
        let k = Value::String(key.clone());
        if let Some(v) = defaults.get(&k) {
            map.insert(k, v.clone());
        }
    }

    fs::write(path, serde_yaml::to_string(&yaml)?)?;
    Ok(missing)
}
