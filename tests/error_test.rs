//! エラーケーステスト

use doc_extract::error::DocExtractError;
use doc_extract_common::ExtractError;

#[test]
fn test_error_display() {
    let errors = vec![
        DocExtractError::Config("テスト設定エラー".to_string()),
        DocExtractError::FileNotFound("invoice.pdf".to_string()),
        DocExtractError::InvalidFieldEdit("A".to_string()),
        DocExtractError::PageOutOfRange { requested: 3, count: 2 },
        DocExtractError::UploadFailed("bad file".to_string()),
        DocExtractError::InvalidInput("data.json".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

#[test]
fn test_upload_failed_contains_server_message() {
    let err = DocExtractError::UploadFailed("bad file".to_string());
    assert!(format!("{}", err).contains("bad file"));
}

#[test]
fn test_page_out_of_range_message() {
    let err = DocExtractError::PageOutOfRange { requested: 5, count: 2 };
    let display = format!("{}", err);
    assert!(display.contains('5'));
    assert!(display.contains("全2ページ"));
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: DocExtractError = io_err.into();

    assert!(matches!(err, DocExtractError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: DocExtractError = json_err.into();

    assert!(matches!(err, DocExtractError::JsonParse(_)));
}

/// common::ExtractErrorは透過的に表示される
#[test]
fn test_common_error_transparent() {
    let common_err = ExtractError::Server {
        status: 422,
        message: "bad file".to_string(),
    };
    let err: DocExtractError = common_err.into();

    assert!(matches!(err, DocExtractError::Common(_)));
    assert_eq!(format!("{}", err), "bad file");
}
