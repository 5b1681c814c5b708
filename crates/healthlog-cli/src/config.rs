use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a config file when `--config` is absent.
pub const CONFIG_ENV: &str = "HEALTHLOG_CONFIG";

const DEFAULT_LOG_FILE: &str = "~/system_health.log";
const DEFAULT_OUTPUT_FILE: &str = "~/system_health_data.csv";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathsConfig {
    #[serde(default = "default_log_file")]
    pub log_file: String,
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            log_file: default_log_file(),
            output_file: default_output_file(),
        }
    }
}

fn default_log_file() -> String {
    DEFAULT_LOG_FILE.to_string()
}

fn default_output_file() -> String {
    DEFAULT_OUTPUT_FILE.to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_hints")]
    pub hints: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            hints: default_hints(),
        }
    }
}

fn default_hints() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load from the explicit path, else `$HEALTHLOG_CONFIG`, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from))
        {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn log_file(&self) -> PathBuf {
        expand_tilde(&self.paths.log_file)
    }

    pub fn output_file(&self) -> PathBuf {
        expand_tilde(&self.paths.output_file)
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.output.hints);
        assert_eq!(config.paths.log_file, "~/system_health.log");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("healthlog.toml");
        std::fs::write(&path, "[paths]\nlog_file = \"/var/log/health.log\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.log_file(), PathBuf::from("/var/log/health.log"));
        assert_eq!(config.paths.output_file, "~/system_health_data.csv");
        assert!(config.output.hints);
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("healthlog.toml");
        std::fs::write(&path, "[paths\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_expand_tilde_leaves_plain_paths() {
        assert_eq!(expand_tilde("/tmp/x.csv"), PathBuf::from("/tmp/x.csv"));
        assert_eq!(expand_tilde("relative.csv"), PathBuf::from("relative.csv"));
    }
}
