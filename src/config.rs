use crate::error::{DocExtractError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 接続先の環境変数（設定ファイルより優先）
pub const ENDPOINT_ENV: &str = "DOC_EXTRACT_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 抽出サービスのオリジン（`/upload` は付けない）
    pub endpoint: String,
    /// エクスポートの既定出力先
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            output_dir: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| DocExtractError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("doc-extract").join("config.json"))
    }

    /// 接続先を決定（引数 > 環境変数 > 設定ファイル）
    pub fn resolve_endpoint(&self, cli_endpoint: Option<&str>) -> Result<String> {
        let env_endpoint = std::env::var(ENDPOINT_ENV).ok();
        let endpoint = cli_endpoint
            .map(str::to_string)
            .or(env_endpoint)
            .unwrap_or_else(|| self.endpoint.clone());
        normalize_endpoint(&endpoint)
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> Result<()> {
        self.endpoint = normalize_endpoint(&endpoint)?;
        self.save()
    }
}

/// 末尾の `/` を除き、スキームを検証
pub fn normalize_endpoint(endpoint: &str) -> Result<String> {
    let trimmed = endpoint.trim().trim_end_matches('/');
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(DocExtractError::Config(format!(
            "接続先は http:// または https:// で始めてください: {}",
            endpoint
        )));
    }
    Ok(trimmed.to_string())
}
