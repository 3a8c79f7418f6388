use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Config {
    pub template: TemplateConfig,
    pub site: SiteConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TemplateConfig {
    /// Page template file. The built-in page is used when unset.
    pub path: Option<PathBuf>,
    pub title_placeholder: String,
    pub content_placeholder: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SiteConfig {
    /// Prefix substituted for the leading `/` of root-relative links.
    pub base_path: String,
}

impl Config {
    /// The bundled defaults from `default_config.toml`.
    pub fn compiled_default() -> Self {
        // Syntax is checked by build.rs; the shape by the tests below.
        toml::from_str(DEFAULT_CONFIG).expect("bundled default_config.toml is valid")
    }

    /// Load config from a TOML file layered over the defaults.
    /// A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults", path.display());
                return Ok(Self::compiled_default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        log::debug!("Using config from: {}", path.display());
        Self::from_toml_over_defaults(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn from_toml_over_defaults(content: &str) -> Result<Self, toml::de::Error> {
        let mut merged: toml::Table = toml::from_str(DEFAULT_CONFIG)?;
        let user: toml::Table = toml::from_str(content)?;
        merge_tables(&mut merged, user);
        toml::Value::Table(merged).try_into()
    }
}

/// Overlay `overlay` onto `base`, recursing into tables present in both.
fn merge_tables(base: &mut toml::Table, overlay: toml::Table) {
    for (key, value) in overlay {
        if let toml::Value::Table(nested) = value {
            if let Some(toml::Value::Table(existing)) = base.get_mut(&key) {
                merge_tables(existing, nested);
                continue;
            }
            base.insert(key, toml::Value::Table(nested));
        } else {
            base.insert(key, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn compiled_default_parses() {
        let config = Config::compiled_default();
        assert_eq!(config.template.path, None);
        assert_eq!(config.template.title_placeholder, "{{ Title }}");
        assert_eq!(config.template.content_placeholder, "{{ Content }}");
        assert_eq!(config.site.base_path, "/");
    }

    #[test]
    fn user_values_override_defaults_key_by_key() {
        let config = Config::from_toml_over_defaults(
            "[site]\nbase_path = \"/docs/\"\n\n[template]\npath = \"page.html\"\n",
        )
        .unwrap();
        assert_eq!(config.site.base_path, "/docs/");
        assert_eq!(config.template.path, Some(PathBuf::from("page.html")));
        assert_eq!(config.template.title_placeholder, "{{ Title }}");
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::compiled_default());
    }

    #[test]
    fn invalid_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mdhtml.toml");
        fs::write(&path, "[site]\nbase_path = 3\n").unwrap();
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("mdhtml.toml"));
    }
}
