use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::llm::gemini::{DEFAULT_API_KEY_ENV, DEFAULT_MODEL, GEMINI_API_URL};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: Option<String>,
    pub provider: ProviderConfig,
    pub export: ExportConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub model: String,
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    /// Per-request timeout; unset means wait for the provider
    pub timeout_ms: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            base_url: GEMINI_API_URL.to_string(),
            api_key_env: DEFAULT_API_KEY_ENV.to_string(),
            timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory the CSV file is written into
    pub directory: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            directory: dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self { tick_rate_ms: 250 }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: Some("info".to_string()),
            provider: ProviderConfig::default(),
            export: ExportConfig::default(),
            tui: TuiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain.
    ///
    /// An explicit path must load. Fallback files that exist but don't parse
    /// are handed to `on_skip` and the chain moves on.
    pub fn load<F>(config_path: Option<&PathBuf>, on_skip: F) -> Result<Self>
    where
        F: FnMut(&Path, &eyre::Report),
    {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let project_name = env!("CARGO_PKG_NAME");
        let mut candidates = Vec::new();

        // Primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            candidates.push(config_dir.join(project_name).join(format!("{}.yml", project_name)));
        }

        // Fallback location: ./<project>.yml
        candidates.push(PathBuf::from(format!("{}.yml", project_name)));

        Ok(Self::load_first(&candidates, on_skip))
    }

    /// First candidate that exists and parses, else defaults
    fn load_first<F>(candidates: &[PathBuf], mut on_skip: F) -> Self
    where
        F: FnMut(&Path, &eyre::Report),
    {
        for candidate in candidates.iter().filter(|p| p.exists()) {
            match Self::load_from_file(candidate) {
                Ok(config) => return config,
                Err(e) => on_skip(candidate, &e),
            }
        }

        // No usable config file found, use defaults
        log::info!("No config file found, using defaults");
        Self::default()
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.provider.model, "gemini-2.5-flash");
        assert_eq!(config.provider.api_key_env, "API_KEY");
        assert!(config.provider.timeout_ms.is_none());
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_load_explicit_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "provider:\n  model: gemini-2.5-pro\n  timeout_ms: 5000\nexport:\n  directory: /tmp/out").unwrap();

        let config = Config::load(Some(&file.path().to_path_buf()), |_, _| {}).unwrap();
        assert_eq!(config.provider.model, "gemini-2.5-pro");
        assert_eq!(config.provider.timeout_ms, Some(5000));
        // Unspecified fields keep their defaults
        assert_eq!(config.provider.api_key_env, "API_KEY");
        assert_eq!(config.export.directory, PathBuf::from("/tmp/out"));
        assert_eq!(config.tui.tick_rate_ms, 250);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let path = PathBuf::from("/definitely/not/here/tooldex.yml");
        assert!(Config::load(Some(&path), |_, _| {}).is_err());
    }

    #[test]
    fn test_load_invalid_yaml_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "provider: [unclosed").unwrap();
        assert!(Config::load(Some(&file.path().to_path_buf()), |_, _| {}).is_err());
    }

    #[test]
    fn test_broken_fallback_is_reported_and_skipped() {
        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "provider: [unclosed").unwrap();
        let mut good = tempfile::NamedTempFile::new().unwrap();
        writeln!(good, "tui:\n  tick_rate_ms: 100").unwrap();

        let candidates = vec![
            PathBuf::from("/definitely/not/here/tooldex.yml"),
            broken.path().to_path_buf(),
            good.path().to_path_buf(),
        ];
        let mut skipped = Vec::new();
        let config = Config::load_first(&candidates, |path, _| skipped.push(path.to_path_buf()));

        assert_eq!(config.tui.tick_rate_ms, 100);
        assert_eq!(skipped, vec![broken.path().to_path_buf()]);
    }

    #[test]
    fn test_all_fallbacks_broken_uses_defaults() {
        let mut broken = tempfile::NamedTempFile::new().unwrap();
        writeln!(broken, "log_level: [").unwrap();

        let mut reasons = Vec::new();
        let config = Config::load_first(&[broken.path().to_path_buf()], |_, e| reasons.push(format!("{:#}", e)));

        assert_eq!(config.tui.tick_rate_ms, 250);
        assert_eq!(reasons.len(), 1);
        assert!(reasons[0].contains("Failed to parse config file"));
    }
}
