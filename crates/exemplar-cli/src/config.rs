//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Config file (`--config` path, else the default location)
//! 3. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CliError, CliResult};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new examples.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
    /// Template settings.
    pub templates: TemplateConfig,
}

/// Pre-selected answers for the `new` prompts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    /// Default template kind ("full-stack-framework" or "bundler-only").
    pub template: Option<String>,
    /// Default scope folder ("server-rendered-demos" or "ui-demos").
    pub scope: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    /// Template root directory, checked before the built-in candidates.
    pub local_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration, starting from defaults.
    ///
    /// `config_file` is the path the user passed via `--config` (or `None`
    /// for the default location).  An explicitly named file must exist; a
    /// missing default file silently yields the built-in defaults.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        match config_file {
            Some(path) => Self::from_file(path),
            None => {
                let path = Self::config_path();
                if path.is_file() {
                    Self::from_file(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Read and parse a TOML config file.
    fn from_file(path: &Path) -> CliResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| CliError::ConfigError {
            message: format!("cannot read {}", path.display()),
            source: Some(Box::new(e)),
        })?;

        toml::from_str(&raw).map_err(|e| CliError::ConfigError {
            message: format!("cannot parse {}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Serialise to TOML and write to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> CliResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CliError::ConfigError {
                message: format!("cannot create {}", parent.display()),
                source: Some(Box::new(e)),
            })?;
        }

        let rendered = toml::to_string_pretty(self).map_err(|e| CliError::ConfigError {
            message: "cannot serialise configuration".into(),
            source: Some(Box::new(e)),
        })?;

        std::fs::write(path, rendered).map_err(|e| CliError::ConfigError {
            message: format!("cannot write {}", path.display()),
            source: Some(Box::new(e)),
        })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.exemplar.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "exemplar-tools", "exemplar")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".exemplar.toml"))
    }

    // ── Dotted-key access for `config get` / `config set` ─────────────────

    /// Look up a value by dotted key. `None` means the key is unknown.
    pub fn get_key(&self, key: &str) -> Option<String> {
        match key {
            "defaults.template" => Some(self.defaults.template.clone().unwrap_or_default()),
            "defaults.scope" => Some(self.defaults.scope.clone().unwrap_or_default()),
            "output.no_color" => Some(self.output.no_color.to_string()),
            "output.format" => Some(self.output.format.clone().unwrap_or_default()),
            "templates.local_path" => Some(
                self.templates
                    .local_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    /// Set a value by dotted key.
    pub fn set_key(&mut self, key: &str, value: &str) -> CliResult<()> {
        match key {
            "defaults.template" => self.defaults.template = Some(value.into()),
            "defaults.scope" => self.defaults.scope = Some(value.into()),
            "output.no_color" => {
                self.output.no_color = value.parse().map_err(|_| CliError::InvalidInput {
                    message: format!("'{value}' is not a boolean (true/false)"),
                })?;
            }
            "output.format" => self.output.format = Some(value.into()),
            "templates.local_path" => self.templates.local_path = Some(PathBuf::from(value)),
            _ => return Err(CliError::UnknownConfigKey { key: key.into() }),
        }
        Ok(())
    }

    /// All known dotted keys with their current values, for `config list`.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        const KEYS: [&str; 5] = [
            "defaults.template",
            "defaults.scope",
            "output.no_color",
            "output.format",
            "templates.local_path",
        ];
        KEYS.iter()
            .map(|k| (*k, self.get_key(k).unwrap_or_default()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_empty() {
        let cfg = AppConfig::default();
        assert!(cfg.defaults.template.is_none());
        assert!(cfg.defaults.scope.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_default_file_yields_defaults() {
        // config_path() almost certainly doesn't exist in a test sandbox,
        // but guard against a dev machine that has one.
        if !AppConfig::config_path().is_file() {
            let cfg = AppConfig::load(None).unwrap();
            assert!(cfg.defaults.template.is_none());
        }
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let path = PathBuf::from("/nonexistent/exemplar-config.toml");
        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn round_trips_through_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut cfg = AppConfig::default();
        cfg.defaults.template = Some("bundler-only".into());
        cfg.defaults.scope = Some("ui-demos".into());
        cfg.output.no_color = true;
        cfg.save(&path).unwrap();

        let loaded = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(loaded.defaults.template.as_deref(), Some("bundler-only"));
        assert_eq!(loaded.defaults.scope.as_deref(), Some("ui-demos"));
        assert!(loaded.output.no_color);
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[defaults]\ntemplate = \"bundler-only\"\n").unwrap();

        let cfg = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(cfg.defaults.template.as_deref(), Some("bundler-only"));
        assert!(cfg.defaults.scope.is_none());
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "defaults = not valid toml [").unwrap();

        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(CliError::ConfigError { .. })
        ));
    }

    // ── dotted keys ───────────────────────────────────────────────────────

    #[test]
    fn get_and_set_dotted_keys() {
        let mut cfg = AppConfig::default();
        cfg.set_key("defaults.scope", "ui-demos").unwrap();
        assert_eq!(cfg.get_key("defaults.scope").as_deref(), Some("ui-demos"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        let mut cfg = AppConfig::default();
        assert!(matches!(
            cfg.set_key("bogus.key", "x"),
            Err(CliError::UnknownConfigKey { .. })
        ));
        assert!(cfg.get_key("bogus.key").is_none());
    }

    #[test]
    fn no_color_requires_boolean() {
        let mut cfg = AppConfig::default();
        assert!(cfg.set_key("output.no_color", "yes").is_err());
        assert!(cfg.set_key("output.no_color", "true").is_ok());
        assert!(cfg.output.no_color);
    }

    #[test]
    fn entries_cover_all_keys() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.entries().len(), 5);
    }
}
