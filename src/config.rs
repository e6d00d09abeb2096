use crate::error::{ArticError, Result};
use artic_common::ARTWORKS_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// エンドポイントを上書きする環境変数
pub const ENDPOINT_ENV: &str = "ARTIC_ENDPOINT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    /// 未設定ならタイムアウトなし
    pub timeout_seconds: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: ARTWORKS_ENDPOINT.into(),
            timeout_seconds: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| ArticError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("artic-browser").join("config.json"))
    }

    /// 実際に使うエンドポイント（環境変数を優先）
    pub fn resolved_endpoint(&self) -> String {
        match std::env::var(ENDPOINT_ENV) {
            Ok(endpoint) if !endpoint.trim().is_empty() => endpoint.trim().to_string(),
            _ => self.endpoint.clone(),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.filter(|s| *s > 0).map(Duration::from_secs)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        let endpoint = endpoint.trim().to_string();
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ArticError::Config(format!(
                "エンドポイントはhttp(s)のURLで指定してください: {}",
                endpoint
            )));
        }
        self.endpoint = endpoint;
        self.save()
    }

    pub fn set_timeout(&mut self, seconds: u64) -> Result<()> {
        self.timeout_seconds = if seconds == 0 { None } else { Some(seconds) };
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.endpoint, "https://api.artic.edu/api/v1/artworks");
        assert_eq!(config.timeout(), None);
    }

    #[test]
    fn test_timeout_zero_means_none() {
        let config = Config { timeout_seconds: Some(0), ..Default::default() };
        assert_eq!(config.timeout(), None);

        let config = Config { timeout_seconds: Some(15), ..Default::default() };
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"timeout_seconds": 30}"#).unwrap();
        assert_eq!(config.endpoint, ARTWORKS_ENDPOINT);
        assert_eq!(config.timeout_seconds, Some(30));
    }

    #[test]
    fn test_old_rows_per_page_key_is_ignored() {
        let config: Config =
            serde_json::from_str(r#"{"endpoint": "http://localhost/a", "rows_per_page": 50}"#).unwrap();
        assert_eq!(config.endpoint, "http://localhost/a");
        assert!(!serde_json::to_string(&config).unwrap().contains("rows_per_page"));
    }
}
