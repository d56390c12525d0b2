use crate::config::Config;
use crate::errors::AppResult;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys known to the current Config, in declaration order.
fn known_keys() -> AppResult<Vec<String>> {
    let yaml = serde_yaml::to_value(Config::default())?;
    Ok(yaml
        .as_mapping()
        .map(|m| {
            m.keys()
                .filter_map(|k| k.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default())
}

/// Report of a config file against the current schema.
#[derive(Debug, Default)]
pub struct ConfigReport {
    /// Keys absent from the file; their defaults are used.
    pub missing: Vec<String>,
    /// Keys present in the file but unknown to this version.
    pub unknown: Vec<String>,
}

impl ConfigReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unknown.is_empty()
    }
}

pub fn check_file(path: &Path) -> AppResult<ConfigReport> {
    let content = fs::read_to_string(path)?;
    check_str(&content)
}

pub fn check_str(content: &str) -> AppResult<ConfigReport> {
    let known = known_keys()?;
    let yaml: Value = serde_yaml::from_str(content)?;

    let present: Vec<String> = yaml
        .as_mapping()
        .map(|m| {
            m.keys()
                .filter_map(|k| k.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default();

    Ok(ConfigReport {
        missing: known
            .iter()
            .filter(|k| !present.contains(k))
            .cloned()
            .collect(),
        unknown: present
            .iter()
            .filter(|k| !known.contains(k))
            .cloned()
            .collect(),
    })
}
