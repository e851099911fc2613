//! Document Extraction Common Library
//!
//! CLIとWeb(WASM)で共有される状態・型・ユーティリティ

pub mod types;
pub mod error;
pub mod response;
pub mod state;
pub mod export;
pub mod pages;

pub use types::{ExtractionPayload, FieldMap, PendingFile, accept_attribute, has_accepted_extension};
pub use error::{ExtractError, Result};
pub use response::{fields_from_object, parse_upload_response, RawResponse, ResponseShape};
pub use state::{Action, AppState, Status};
pub use export::{to_csv, to_json, DownloadFile};
pub use pages::{decode_page, page_data_url, page_file_name};
