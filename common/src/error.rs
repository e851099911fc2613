//! エラー型定義

use thiserror::Error;

/// 共通エラー型
///
/// Display文字列がそのまま画面に表示されるエラーメッセージになる。
#[derive(Error, Debug)]
pub enum ExtractError {
    /// 接続失敗などの送信エラー
    #[error("{0}")]
    Transport(String),

    /// 2xx以外のステータス
    #[error("{message}")]
    Server { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Base64 decode error: {0}")]
    Decode(#[from] base64::DecodeError),
}

impl ExtractError {
    /// サーバーエラーのステータスコード
    pub fn status(&self) -> Option<u16> {
        match self {
            ExtractError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, ExtractError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_server_is_message_only() {
        let error = ExtractError::Server {
            status: 422,
            message: "bad file".to_string(),
        };
        assert_eq!(format!("{}", error), "bad file");
        assert_eq!(error.status(), Some(422));
    }

    #[test]
    fn test_error_display_transport() {
        let error = ExtractError::Transport("connection refused".to_string());
        assert_eq!(format!("{}", error), "connection refused");
        assert_eq!(error.status(), None);
    }

    #[test]
    fn test_error_from_json() {
        let json_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: ExtractError = json_error.into();
        assert!(matches!(error, ExtractError::Json(_)));
        assert!(format!("{}", error).contains("JSON error"));
    }

    #[test]
    fn test_error_from_utf8() {
        let utf8_error = String::from_utf8(vec![0xFF, 0xFE]).unwrap_err();
        let error: ExtractError = utf8_error.into();
        assert!(matches!(error, ExtractError::Utf8(_)));
        assert!(format!("{}", error).contains("UTF-8 error"));
    }
}
