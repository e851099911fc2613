//! Export core modules shared across CLI and WASM wrappers.
//!
//! ネットワークは使わない。生成した内容を `DownloadFile` として返し、
//! 保存方法（ファイル書き込み / ブラウザダウンロード）は呼び出し側に任せる。

pub mod json;
pub mod csv;

pub use self::csv::to_csv;
pub use self::json::to_json;

use crate::error::Result;
use crate::types::FieldMap;

pub const JSON_FILE_NAME: &str = "data.json";
pub const CSV_FILE_NAME: &str = "data.csv";

/// ローカル保存用のファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    pub file_name: String,
    pub mime_type: String,
    pub content: String,
}

impl DownloadFile {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            content: content.into(),
        }
    }

    /// `data.json`（4スペースインデント）
    pub fn json(fields: &FieldMap) -> Result<Self> {
        Ok(Self::new(JSON_FILE_NAME, "application/json", to_json(fields)?))
    }

    /// `data.csv`
    pub fn csv(fields: &FieldMap) -> Self {
        Self::new(CSV_FILE_NAME, "text/csv", to_csv(fields))
    }
}
