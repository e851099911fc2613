//! 抽出セッション
//!
//! `AppState` を保持し、Actionのディスパッチと送信処理を行う。
//! 送信の失敗はすべてここで捕捉し、エラーメッセージとして状態に保存する。

use crate::transport::UploadTransport;
use doc_extract_common::{
    parse_upload_response, Action, AppState, DownloadFile, FieldMap, PendingFile,
};

#[derive(Debug, Clone, Default)]
pub struct Session {
    state: AppState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn fields(&self) -> Option<&FieldMap> {
        self.state.result.as_ref()
    }

    pub fn dispatch(&mut self, action: Action) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(action);
    }

    pub fn select_file(&mut self, file: Option<PendingFile>) {
        self.dispatch(Action::SelectFile(file));
    }

    /// 選択中のファイルを送信
    ///
    /// 未選択または送信中なら何もせず `false` を返す。
    /// 成功・失敗に関わらず、戻った時点で送信中フラグは下りている。
    pub async fn submit<T>(&mut self, transport: &T) -> bool
    where
        T: UploadTransport + ?Sized,
    {
        let Some(file) = self.state.submission().cloned() else {
            tracing::debug!("submit skipped: no file or already in flight");
            return false;
        };

        self.dispatch(Action::SubmitStarted);

        let outcome = match transport.post_upload(&file).await {
            Ok(response) => parse_upload_response(&response),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(payload) => {
                tracing::info!(
                    file = %file.file_name,
                    fields = payload.fields.len(),
                    pages = payload.pages.len(),
                    "extraction succeeded"
                );
                self.dispatch(Action::SubmitSucceeded(payload));
            }
            Err(e) => {
                tracing::warn!(file = %file.file_name, error = %e, "extraction failed");
                self.dispatch(Action::SubmitFailed(e.to_string()));
            }
        }

        true
    }

    /// 既存の項目を上書き（存在しないキーは `false`）
    pub fn edit_field(&mut self, key: &str, value: &str) -> bool {
        let exists = self.fields().is_some_and(|fields| fields.contains_key(key));
        self.dispatch(Action::EditField {
            key: key.to_string(),
            value: value.to_string(),
        });
        exists
    }

    /// ページ選択（範囲外は `false` で選択は変わらない）
    pub fn select_page(&mut self, index: usize) -> bool {
        self.dispatch(Action::SelectPage(index));
        self.state.selected_page == index && index < self.state.page_count()
    }

    pub fn zoom_in(&mut self) {
        self.dispatch(Action::ZoomIn);
    }

    pub fn zoom_out(&mut self) {
        self.dispatch(Action::ZoomOut);
    }

    pub fn export_json(&self) -> doc_extract_common::Result<Option<DownloadFile>> {
        self.fields().map(DownloadFile::json).transpose()
    }

    pub fn export_csv(&self) -> Option<DownloadFile> {
        self.fields().map(DownloadFile::csv)
    }
}
