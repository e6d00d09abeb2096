//! エラー型定義

use thiserror::Error;

/// カタログ取得エラー
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("catalog fetch failed: HTTP {0}")]
    Status(u16),

    #[error("catalog fetch failed: {0}")]
    Network(String),

    #[error("catalog fetch failed: malformed response: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("catalog fetch failed: could not decode response: {0}")]
    Decode(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, FetchError>;
