//! 抽出クライアントの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - PendingFile: 送信待ちの選択ファイル
//! - FieldMap: 抽出されたパラメータ名 → 値（受信順を保持）
//! - ExtractionPayload: 正常レスポンスを正規化した結果

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// パラメータ名 → 値のマップ（受信順）
pub type FieldMap = IndexMap<String, String>;

/// ファイル選択ダイアログのフィルタ（ヒントのみ、強制しない）
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".pdf", ".txt", ".doc", ".docx"];

/// 選択済みファイル
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl PendingFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let content_type = guess_content_type(&file_name).map(str::to_string);
        Self {
            file_name,
            content_type,
            bytes,
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }

    /// multipart送信時のContent-Type（不明ならoctet-stream）
    pub fn mime_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or("application/octet-stream")
    }
}

/// 正常レスポンスの正規化結果
///
/// フィールドとページ画像は常にセットで置き換えられる。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionPayload {
    pub fields: FieldMap,
    pub pages: Vec<String>,
}

/// `<input type="file" accept=...>` 用の文字列
pub fn accept_attribute() -> String {
    ACCEPTED_EXTENSIONS.join(",")
}

/// 拡張子がフィルタに含まれるか（大文字小文字無視）
pub fn has_accepted_extension(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    ACCEPTED_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

fn guess_content_type(file_name: &str) -> Option<&'static str> {
    let lower = file_name.to_lowercase();
    let ext = lower.rsplit_once('.').map(|(_, ext)| ext)?;
    match ext {
        "pdf" => Some("application/pdf"),
        "txt" => Some("text/plain"),
        "doc" => Some("application/msword"),
        "docx" => Some("application/vnd.openxmlformats-officedocument.wordprocessingml.document"),
        _ => None,
    }
}
