//! Configuration management for Pagecast.
//!
//! Parses `pagecast.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String configuration values support environment variable expansion:
//!
//! - `${VAR}` - expands to the value of VAR, errors if unset
//! - `${VAR:-default}` - expands to VAR if set, otherwise uses default
//!
//! Expanded fields:
//! - `api.base_url`

mod expand;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override CMS API base URL.
    pub base_url: Option<String>,
    /// Override request timeout in seconds.
    pub timeout_secs: Option<u64>,
    /// Override the sitemap root id.
    pub sitemap_id: Option<String>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "pagecast.toml";

/// Application configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CMS API configuration.
    pub api: ApiConfig,

    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

/// CMS API configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the CMS content API (e.g. `https://host/api/cms`).
    pub base_url: String,
    /// Global HTTP request timeout in seconds.
    pub timeout_secs: u64,
    /// Root id passed to the sitemap fetch, if the site is not the
    /// CMS default.
    pub sitemap_id: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/api/cms".to_owned(),
            timeout_secs: 30,
            sitemap_id: None,
        }
    }
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`api.base_url`").
        field: String,
        /// Error message (e.g., "${`PAGECAST_API`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `pagecast.toml` in current directory and
    /// parents, falling back to defaults when nothing is found.
    ///
    /// CLI settings are applied after loading, so CLI arguments take
    /// precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if an explicit `config_path` doesn't exist or parsing
    /// or validation fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        config.validate()?;

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(base_url) = &settings.base_url {
            self.api.base_url.clone_from(base_url);
        }
        if let Some(timeout_secs) = settings.timeout_secs {
            self.api.timeout_secs = timeout_secs;
        }
        if let Some(sitemap_id) = &settings.sitemap_id {
            self.api.sitemap_id = Some(sitemap_id.clone());
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        config.expand_env_vars()?;
        config.config_path = Some(path.to_path_buf());

        Ok(config)
    }

    /// Expand environment variable references in configuration strings.
    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        self.api.base_url = expand::expand_env(&self.api.base_url, "api.base_url")?;
        Ok(())
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.api.base_url, "api.base_url")?;
        require_http_url(&self.api.base_url, "api.base_url")?;

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "api.timeout_secs cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.api.base_url, "http://127.0.0.1:8080/api/cms");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.api.sitemap_id.is_none());
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.api.base_url, "http://127.0.0.1:8080/api/cms");
    }

    #[test]
    fn test_parse_api_config() {
        let toml = r#"
[api]
base_url = "https://site.example/api/cms"
timeout_secs = 5
sitemap_id = "root-1"
"#;
        let config: Config = toml::from_str(toml).unwrap();

        assert_eq!(config.api.base_url, "https://site.example/api/cms");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.sitemap_id.as_deref(), Some("root-1"));
    }

    #[test]
    fn test_load_explicit_missing_file_errors() {
        let result = Config::load(Some(Path::new("/does/not/exist/pagecast.toml")), None);

        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagecast.toml");
        std::fs::write(&path, "[api]\nbase_url = \"https://site.example/api/cms\"\n").unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.api.base_url, "https://site.example/api/cms");
        assert_eq!(config.config_path.as_deref(), Some(path.as_path()));
    }

    #[test]
    fn test_cli_settings_override_file_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagecast.toml");
        std::fs::write(&path, "[api]\nbase_url = \"https://site.example/api/cms\"\n").unwrap();

        let settings = CliSettings {
            base_url: Some("https://other.example/api/cms".to_owned()),
            timeout_secs: Some(3),
            sitemap_id: Some("alt".to_owned()),
        };
        let config = Config::load(Some(&path), Some(&settings)).unwrap();

        assert_eq!(config.api.base_url, "https://other.example/api/cms");
        assert_eq!(config.api.timeout_secs, 3);
        assert_eq!(config.api.sitemap_id.as_deref(), Some("alt"));
    }

    #[test]
    fn test_validate_rejects_non_http_url() {
        let (_dir, path) = write_minimal_config();
        let settings = CliSettings {
            base_url: Some("ftp://site.example".to_owned()),
            ..CliSettings::default()
        };

        let result = Config::load(Some(&path), Some(&settings));

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let (_dir, path) = write_minimal_config();
        let settings = CliSettings {
            timeout_secs: Some(0),
            ..CliSettings::default()
        };

        let result = Config::load(Some(&path), Some(&settings));

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_env_expansion_in_base_url() {
        // SAFETY: test runs single-threaded per test function
        unsafe {
            std::env::set_var("PAGECAST_CONFIG_HOST", "cms.example");
        }
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagecast.toml");
        std::fs::write(
            &path,
            "[api]\nbase_url = \"https://${PAGECAST_CONFIG_HOST}/api/cms\"\n",
        )
        .unwrap();

        let config = Config::load(Some(&path), None).unwrap();

        assert_eq!(config.api.base_url, "https://cms.example/api/cms");
        unsafe {
            std::env::remove_var("PAGECAST_CONFIG_HOST");
        }
    }

    /// Write a minimal valid config to a temp file.
    fn write_minimal_config() -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pagecast.toml");
        std::fs::write(&path, "").unwrap();
        (dir, path)
    }
}
