use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocExtractError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("項目の指定が不正です: {0}（KEY=VALUE 形式で指定してください）")]
    InvalidFieldEdit(String),

    #[error("ページ番号が範囲外です: {requested}（全{count}ページ）")]
    PageOutOfRange { requested: usize, count: usize },

    #[error("アップロード失敗: {0}")]
    UploadFailed(String),

    #[error("入力JSONが不正: {0}")]
    InvalidInput(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] doc_extract_common::ExtractError),
}

pub type Result<T> = std::result::Result<T, DocExtractError>;
