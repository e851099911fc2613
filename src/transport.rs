//! アップロード送信
//!
//! `UploadTransport` は1回のPOSTを送り、ステータスとボディ文字列を返すだけ。
//! レスポンスの解釈は `doc_extract_common::parse_upload_response` が行う。

use async_trait::async_trait;
use doc_extract_common::{ExtractError, PendingFile, RawResponse};
use reqwest::multipart::{Form, Part};

/// multipartのフィールド名
pub const UPLOAD_FIELD: &str = "file";
/// アップロード先のパス
pub const UPLOAD_PATH: &str = "/upload";

#[async_trait]
pub trait UploadTransport: Send + Sync {
    /// ファイルを送信し、ステータスに関係なくボディ全体をテキストで返す
    async fn post_upload(&self, file: &PendingFile) -> Result<RawResponse, ExtractError>;
}

/// reqwestによるHTTP送信
pub struct HttpTransport {
    client: reqwest::Client,
    upload_url: String,
}

impl HttpTransport {
    pub fn new(endpoint: &str) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: &str) -> Self {
        Self {
            client,
            upload_url: upload_url(endpoint),
        }
    }

    pub fn upload_url(&self) -> &str {
        &self.upload_url
    }
}

/// オリジンから `/upload` のURLを組み立てる
pub fn upload_url(endpoint: &str) -> String {
    format!("{}{}", endpoint.trim_end_matches('/'), UPLOAD_PATH)
}

fn transport_error(e: reqwest::Error) -> ExtractError {
    ExtractError::Transport(e.to_string())
}

#[async_trait]
impl UploadTransport for HttpTransport {
    async fn post_upload(&self, file: &PendingFile) -> Result<RawResponse, ExtractError> {
        let part = Part::bytes(file.bytes.clone())
            .file_name(file.file_name.clone())
            .mime_str(file.mime_type())
            .map_err(transport_error)?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        tracing::debug!(url = %self.upload_url, file = %file.file_name, bytes = file.bytes.len(), "POST upload");

        let response = self
            .client
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport_error)?;

        tracing::debug!(status, body_len = body.len(), "upload response");

        Ok(RawResponse { status, body })
    }
}
