//! Config file discovery and layered merging.
//!
//! Resolution order (later overrides earlier):
//! 1. `~/.config/mushaf/config.toml` (user config)
//! 2. `./mushaf.toml` (project-local)
//! 3. `QURAN_*` environment variables
//! 4. CLI arguments (handled externally)

use std::path::{Path, PathBuf};

use crate::{ConfigError, MushafConfig, Result};

/// Default config filename for project-local config.
const PROJECT_CONFIG_FILE: &str = "mushaf.toml";

/// Default config filename within the user config directory.
const USER_CONFIG_FILE: &str = "config.toml";

/// Application name for config directory resolution.
const APP_NAME: &str = "mushaf";

/// Environment variable to override the config directory.
const CONFIG_DIR_ENV: &str = "MUSHAF_CONFIG_DIR";

/// Tracks where each config layer was loaded from.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the config file.
    pub path: PathBuf,
    /// Whether the file was found and loaded.
    pub loaded: bool,
}

/// Result of config discovery and loading.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    /// The merged configuration.
    pub config: MushafConfig,
    /// Sources that were checked, in order of precedence (lowest first).
    pub sources: Vec<ConfigSource>,
    /// Warnings generated during loading (e.g., plaintext secrets).
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    /// Get paths of sources that were actually loaded.
    pub fn loaded_from(&self) -> Vec<&Path> {
        self.sources
            .iter()
            .filter(|s| s.loaded)
            .map(|s| s.path.as_path())
            .collect()
    }
}

/// Load configuration by discovering and merging all config layers.
pub fn load_config(project_dir: Option<&Path>) -> Result<LoadedConfig> {
    load_config_with_options(project_dir, None)
}

/// Load configuration with explicit control over the user config directory.
///
/// `config_dir` overrides both `MUSHAF_CONFIG_DIR` and the platform default.
pub fn load_config_with_options(
    project_dir: Option<&Path>,
    config_dir: Option<&Path>,
) -> Result<LoadedConfig> {
    let user_config_path = match config_dir {
        Some(dir) => Some(dir.join(USER_CONFIG_FILE)),
        None => xdg_config_path(),
    };
    load_layers(user_config_path, project_dir, |name| std::env::var(name).ok())
}

fn load_layers<F>(
    user_config_path: Option<PathBuf>,
    project_dir: Option<&Path>,
    env: F,
) -> Result<LoadedConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = MushafConfig::new();
    let mut sources = Vec::new();
    let mut warnings = Vec::new();

    // 1. User config
    if let Some(path) = user_config_path {
        sources.push(load_layer(&mut config, &path, &mut warnings));
    }

    // 2. Project-local config
    let project_path = project_dir
        .map(|d| d.join(PROJECT_CONFIG_FILE))
        .unwrap_or_else(|| PathBuf::from(PROJECT_CONFIG_FILE));
    sources.push(load_layer(&mut config, &project_path, &mut warnings));

    // Only file-borne secrets are worth a warning
    if config.auth.client_secret.is_some() {
        warnings.push(
            "[auth] client_secret is stored in plaintext in a config file. \
             Consider setting QURAN_CLIENT_SECRET instead."
                .to_string(),
        );
    }

    // 3. Environment
    config.apply_env(env);
    config.validate()?;

    Ok(LoadedConfig {
        config,
        sources,
        warnings,
    })
}

/// Load config from a specific file path (no discovery).
pub fn load_config_file(path: &Path) -> Result<MushafConfig> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
        path: path.display().to_string(),
        source: e,
    })?;
    MushafConfig::from_toml(&contents)
}

/// Get the user config file path.
pub fn xdg_config_path() -> Option<PathBuf> {
    xdg_config_dir().map(|d| d.join(USER_CONFIG_FILE))
}

/// Get the user config directory for mushaf.
///
/// Checks `MUSHAF_CONFIG_DIR` first, then falls back to the platform default.
pub fn xdg_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV)
        && !dir.is_empty()
    {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|d| d.join(APP_NAME))
}

/// Try to load a config file and merge it into the existing config.
///
/// Unreadable or invalid files become warnings, not errors.
fn load_layer(config: &mut MushafConfig, path: &Path, warnings: &mut Vec<String>) -> ConfigSource {
    if !path.is_file() {
        return ConfigSource {
            path: path.to_path_buf(),
            loaded: false,
        };
    }

    match load_config_file(path) {
        Ok(layer) => {
            config.merge(layer);
            ConfigSource {
                path: path.to_path_buf(),
                loaded: true,
            }
        }
        Err(e) => {
            warnings.push(format!("Failed to load {}: {}", path.display(), e));
            ConfigSource {
                path: path.to_path_buf(),
                loaded: false,
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_xdg_config_path_shape() {
        if let Some(p) = xdg_config_path() {
            assert!(p.ends_with("config.toml"));
        }
    }

    #[test]
    fn test_load_config_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[auth]\nclient_id = \"abc\"\n").unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.auth.client_id.as_deref(), Some("abc"));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let err = load_config_file(Path::new("/nonexistent/mushaf.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::ReadFile { .. }));
    }

    #[test]
    fn test_project_overrides_user() {
        let user = TempDir::new().unwrap();
        let project = TempDir::new().unwrap();
        fs::write(
            user.path().join("config.toml"),
            "[auth]\nclient_id = \"user\"\n\n[api]\ntimeout_secs = 5\n",
        )
        .unwrap();
        fs::write(
            project.path().join("mushaf.toml"),
            "[auth]\nclient_id = \"project\"\n",
        )
        .unwrap();

        let loaded = load_layers(
            Some(user.path().join("config.toml")),
            Some(project.path()),
            no_env,
        )
        .unwrap();

        assert_eq!(loaded.config.auth.client_id.as_deref(), Some("project"));
        assert_eq!(loaded.config.api.timeout_secs, Some(5));
        assert_eq!(loaded.loaded_from().len(), 2);
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn test_env_overrides_files() {
        let project = TempDir::new().unwrap();
        fs::write(
            project.path().join("mushaf.toml"),
            "[api]\nbase_url = \"http://file.example\"\n",
        )
        .unwrap();

        let loaded = load_layers(None, Some(project.path()), |name| {
            (name == "QURAN_API_BASE_URL").then(|| "http://env.example".to_string())
        })
        .unwrap();

        assert_eq!(
            loaded.config.api.base_url.as_deref(),
            Some("http://env.example")
        );
    }

    #[test]
    fn test_plaintext_secret_warning() {
        let project = TempDir::new().unwrap();
        fs::write(
            project.path().join("mushaf.toml"),
            "[auth]\nclient_secret = \"hunter2\"\n",
        )
        .unwrap();

        let loaded = load_layers(None, Some(project.path()), no_env).unwrap();
        assert_eq!(loaded.warnings.len(), 1);
        assert!(loaded.warnings[0].contains("QURAN_CLIENT_SECRET"));
    }

    #[test]
    fn test_secret_from_env_is_not_warned() {
        let project = TempDir::new().unwrap();
        let loaded = load_layers(None, Some(project.path()), |name| {
            (name == "QURAN_CLIENT_SECRET").then(|| "s3cret".to_string())
        })
        .unwrap();

        assert!(loaded.warnings.is_empty());
        assert_eq!(loaded.config.auth.client_secret.as_deref(), Some("s3cret"));
    }

    #[test]
    fn test_invalid_file_becomes_warning() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("mushaf.toml"), "not = [valid").unwrap();

        let loaded = load_layers(None, Some(project.path()), no_env).unwrap();
        assert!(loaded.loaded_from().is_empty());
        assert!(loaded.warnings[0].contains("Failed to load"));
    }

    #[test]
    fn test_missing_files_yield_empty_config() {
        let project = TempDir::new().unwrap();
        let loaded = load_layers(None, Some(project.path()), no_env).unwrap();
        assert_eq!(loaded.config, MushafConfig::default());
        assert_eq!(loaded.sources.len(), 1);
    }
}
