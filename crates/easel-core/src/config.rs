//! Application configuration loaded from a TOML file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Top-level application configuration.
///
/// All fields have sensible defaults so the kiosk works without a config
/// file. Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub repos: RepoConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
    #[serde(default)]
    pub provider: ProviderConfig,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => CoreError::PermissionDenied(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }
}

/// Where generation results are stored and which repository to open first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoConfig {
    #[serde(default = "default_base_path")]
    pub base_path: PathBuf,
    #[serde(default = "default_starting_repo")]
    pub starting_repo: String,
}

impl Default for RepoConfig {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            starting_repo: default_starting_repo(),
        }
    }
}

/// Gallery browsing preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

/// Image generation provider settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_key_file")]
    pub key_file: PathBuf,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            key_file: default_key_file(),
        }
    }
}

fn default_base_path() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
        .join(".local/share/easel/repos")
}

fn default_starting_repo() -> String {
    "default".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_key_file() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
        .join(".config/easel/provider.key")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_config_is_usable() {
        let config = Config::default();
        assert_eq!(config.repos.starting_repo, "default");
        assert_eq!(config.gallery.page_size, 10);
        assert!(config.repos.base_path.ends_with("easel/repos"));
    }

    #[test]
    fn load_full_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r#"
[repos]
base_path = "/var/lib/easel"
starting_repo = "gallery"

[gallery]
page_size = 6

[provider]
key_file = "/etc/easel/provider.key"
"#,
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.repos.base_path, PathBuf::from("/var/lib/easel"));
        assert_eq!(config.repos.starting_repo, "gallery");
        assert_eq!(config.gallery.page_size, 6);
        assert_eq!(
            config.provider.key_file,
            PathBuf::from("/etc/easel/provider.key")
        );
    }

    #[test]
    fn load_partial_config_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[gallery]\npage_size = 4\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.gallery.page_size, 4);
        assert_eq!(config.repos.starting_repo, "default");
    }

    #[test]
    fn load_missing_file_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let err = Config::load(&tmp.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, CoreError::NotFound(_)));
    }

    #[test]
    fn load_malformed_toml_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[repos\nbase_path = ").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, CoreError::ConfigParse(_)));
    }
}
