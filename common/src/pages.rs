//! ページ画像ユーティリティ

use crate::error::Result;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Base64ページ画像を `<img src>` 用のData URLに変換
pub fn page_data_url(payload: &str) -> String {
    format!("data:image/png;base64,{}", payload)
}

/// Base64ページ画像をPNGバイト列にデコード
pub fn decode_page(payload: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(payload.trim())?)
}

/// 保存用ファイル名（1始まり）
pub fn page_file_name(index: usize) -> String {
    format!("page-{}.png", index + 1)
}
