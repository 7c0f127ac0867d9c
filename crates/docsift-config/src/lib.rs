use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// User overrides for the built-in section catalog.
///
/// ```toml
/// default_sections = ["purpose_scope", "document_history"]
///
/// [sections.risks]
/// score_threshold = 30
/// top_n = 2
///
/// [sections.glossary]
/// enabled = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Sections `parse` runs when none are named explicitly.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_sections: Option<Vec<String>>,
    pub sections: BTreeMap<String, SectionConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionConfig {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_elements: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_paragraphs: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_scan_length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_threshold: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_n: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_table_matches: Option<usize>,
}

impl Default for SectionConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_elements: None,
            max_paragraphs: None,
            min_scan_length: None,
            score_threshold: None,
            top_n: None,
            min_table_matches: None,
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        let config_path = Self::expand_path(config_path).unwrap_or_else(|| config_path.into());
        if !config_path.exists() {
            return Ok(None);
        }

        let content =
            std::fs::read_to_string(&config_path).map_err(|source| ConfigError::ConfigReadError {
                config_path: config_path.clone(),
                source,
            })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.clone(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/docsift");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// A section runs unless its table says `enabled = false`.
    pub fn is_enabled(&self, key: &str) -> bool {
        self.sections.get(key).is_none_or(|s| s.enabled)
    }

    /// Section keys named anywhere in the file that `known` does not contain.
    pub fn unknown_sections<'a>(&'a self, known: &[&str]) -> Vec<&'a str> {
        let mut unknown: Vec<&str> = self
            .sections
            .keys()
            .map(String::as_str)
            .chain(self.default_sections.iter().flatten().map(String::as_str))
            .filter(|key| !known.contains(key))
            .collect();
        unknown.sort_unstable();
        unknown.dedup();
        unknown
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
