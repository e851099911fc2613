//! クライアント状態とリデューサー
//!
//! 画面の状態はすべて `AppState` 1つにまとめ、`Action` を受けて
//! 新しい状態を返す純粋関数 `AppState::reduce` だけで遷移させる。
//! 描画環境なしで遷移をテストできる。
//!
//! 状態遷移:
//! Idle → Selected → Submitting → {Succeeded | Failed}
//! Succeeded / Failed はファイル再選択で Selected に戻る。
//!
//! ブラウザではファイル内容の読み込みが非同期になるため、選択は
//! `SelectionStarted`（即時リセット）と `FileLoaded`（読み込み完了）の2段階で行う。
//! 各選択には世代番号が振られ、古い選択の読み込み結果は捨てられる。

use crate::types::{ExtractionPayload, FieldMap, PendingFile};

/// ズームの増減幅
pub const ZOOM_STEP: f64 = 0.1;
/// ズームの下限
pub const MIN_ZOOM: f64 = 0.1;
/// 失敗メッセージが空だった場合の表示
pub const GENERIC_ERROR: &str = "Upload failed";

/// 状態遷移のトリガー
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// ファイル選択（None = ダイアログで何も選ばれなかった）
    SelectFile(Option<PendingFile>),
    /// 非同期読み込みの開始（選択を解除し、世代を進める）
    SelectionStarted,
    /// 非同期読み込みの完了（世代が最新の場合のみ反映）
    FileLoaded { selection: u64, file: PendingFile },
    SubmitStarted,
    SubmitSucceeded(ExtractionPayload),
    SubmitFailed(String),
    EditField { key: String, value: String },
    SelectPage(usize),
    ZoomIn,
    ZoomOut,
}

/// 画面ステータス（状態から導出）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Idle,
    Selected,
    Submitting,
    Succeeded,
    Failed,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Idle => "idle",
            Status::Selected => "selected",
            Status::Submitting => "submitting",
            Status::Succeeded => "succeeded",
            Status::Failed => "failed",
        }
    }
}

/// アプリケーションの状態
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    pub file: Option<PendingFile>,
    pub result: Option<FieldMap>,
    pub pages: Vec<String>,
    pub selected_page: usize,
    pub zoom: f64,
    pub in_flight: bool,
    pub error: String,
    /// ファイル選択の世代番号
    pub selection: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            file: None,
            result: None,
            pages: Vec::new(),
            selected_page: 0,
            zoom: 1.0,
            in_flight: false,
            error: String::new(),
            selection: 0,
        }
    }
}

impl AppState {
    /// Actionを適用して次の状態を返す
    pub fn reduce(mut self, action: Action) -> Self {
        match action {
            Action::SelectFile(None) => {}
            Action::SelectFile(Some(file)) => {
                self.begin_selection();
                self.file = Some(file);
            }
            Action::SelectionStarted => {
                self.begin_selection();
            }
            Action::FileLoaded { selection, file } => {
                if selection == self.selection {
                    self.file = Some(file);
                }
            }
            Action::SubmitStarted => {
                if self.submission().is_some() {
                    self.error.clear();
                    self.in_flight = true;
                }
            }
            Action::SubmitSucceeded(payload) => {
                self.result = Some(payload.fields);
                self.pages = payload.pages;
                self.selected_page = 0;
                self.in_flight = false;
            }
            Action::SubmitFailed(message) => {
                self.in_flight = false;
                self.error = if message.is_empty() {
                    GENERIC_ERROR.to_string()
                } else {
                    message
                };
            }
            Action::EditField { key, value } => {
                if let Some(slot) = self.result.as_mut().and_then(|fields| fields.get_mut(&key)) {
                    *slot = value;
                }
            }
            Action::SelectPage(index) => {
                if index < self.pages.len() {
                    self.selected_page = index;
                }
            }
            Action::ZoomIn => {
                if self.has_pages() {
                    self.zoom = round_zoom(self.zoom + ZOOM_STEP);
                }
            }
            Action::ZoomOut => {
                if self.has_pages() {
                    self.zoom = round_zoom(self.zoom - ZOOM_STEP).max(MIN_ZOOM);
                }
            }
        }
        self
    }

    /// 新しい選択を始める（ファイルと導出状態を消し、世代を進める）
    fn begin_selection(&mut self) {
        self.selection = self.selection.wrapping_add(1);
        self.file = None;
        self.result = None;
        self.pages = Vec::new();
        self.selected_page = 0;
        self.error.clear();
    }

    /// 送信可能ならファイルを返す（未選択・送信中は None）
    pub fn submission(&self) -> Option<&PendingFile> {
        if self.in_flight {
            return None;
        }
        self.file.as_ref()
    }

    pub fn can_submit(&self) -> bool {
        self.submission().is_some()
    }

    pub fn status(&self) -> Status {
        if self.file.is_none() {
            Status::Idle
        } else if self.in_flight {
            Status::Submitting
        } else if !self.error.is_empty() {
            Status::Failed
        } else if self.result.is_some() {
            Status::Succeeded
        } else {
            Status::Selected
        }
    }

    pub fn has_pages(&self) -> bool {
        !self.pages.is_empty()
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// 選択中ページのBase64データ
    pub fn current_page(&self) -> Option<&str> {
        self.pages.get(self.selected_page).map(String::as_str)
    }

    pub fn error_message(&self) -> Option<&str> {
        if self.error.is_empty() {
            None
        } else {
            Some(&self.error)
        }
    }
}

fn round_zoom(zoom: f64) -> f64 {
    (zoom * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf() -> PendingFile {
        PendingFile::new("sample.pdf", b"%PDF-1.4".to_vec())
    }

    fn payload() -> ExtractionPayload {
        let mut fields = FieldMap::new();
        fields.insert("A".to_string(), "1".to_string());
        fields.insert("B".to_string(), "2".to_string());
        ExtractionPayload {
            fields,
            pages: vec!["img1".to_string(), "img2".to_string()],
        }
    }

    fn succeeded() -> AppState {
        AppState::default()
            .reduce(Action::SelectFile(Some(pdf())))
            .reduce(Action::SubmitStarted)
            .reduce(Action::SubmitSucceeded(payload()))
    }

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.status(), Status::Idle);
        assert_eq!(state.zoom, 1.0);
        assert_eq!(state.selected_page, 0);
        assert!(!state.can_submit());
    }

    #[test]
    fn test_select_file_resets_derived_state() {
        let state = succeeded()
            .reduce(Action::SelectPage(1))
            .reduce(Action::SubmitFailed("later failure".to_string()));
        assert!(state.result.is_some());

        let state = state.reduce(Action::SelectFile(Some(PendingFile::new("next.txt", Vec::new()))));
        assert_eq!(state.result, None);
        assert!(state.pages.is_empty());
        assert_eq!(state.selected_page, 0);
        assert_eq!(state.error, "");
        assert_eq!(state.file.as_ref().map(|f| f.file_name.as_str()), Some("next.txt"));
        assert_eq!(state.status(), Status::Selected);
    }

    #[test]
    fn test_selection_started_clears_immediately() {
        let state = succeeded().reduce(Action::SelectionStarted);
        assert_eq!(state.file, None);
        assert_eq!(state.result, None);
        assert!(state.pages.is_empty());
        assert!(!state.can_submit());
        assert_eq!(state.status(), Status::Idle);
    }

    #[test]
    fn test_out_of_order_loads_keep_latest_selection() {
        // A を選択 → B を選択 → B の読み込み完了 → A の読み込み完了
        let state = AppState::default().reduce(Action::SelectionStarted);
        let selection_a = state.selection;
        let state = state.reduce(Action::SelectionStarted);
        let selection_b = state.selection;
        assert_ne!(selection_a, selection_b);

        let state = state
            .reduce(Action::FileLoaded {
                selection: selection_b,
                file: PendingFile::new("small.txt", b"b".to_vec()),
            })
            .reduce(Action::FileLoaded {
                selection: selection_a,
                file: PendingFile::new("large.pdf", vec![0; 1024]),
            });

        assert_eq!(state.file.as_ref().map(|f| f.file_name.as_str()), Some("small.txt"));
        assert_eq!(state.submission().map(|f| f.bytes.as_slice()), Some(&b"b"[..]));
    }

    #[test]
    fn test_stale_load_after_sync_select_is_ignored() {
        let state = AppState::default().reduce(Action::SelectionStarted);
        let pending = state.selection;
        let state = state
            .reduce(Action::SelectFile(Some(pdf())))
            .reduce(Action::FileLoaded {
                selection: pending,
                file: PendingFile::new("old.txt", Vec::new()),
            });
        assert_eq!(state.file, Some(pdf()));
    }

    #[test]
    fn test_load_after_result_keeps_reset() {
        let state = succeeded().reduce(Action::SelectionStarted);
        let selection = state.selection;
        let state = state.reduce(Action::FileLoaded {
            selection,
            file: PendingFile::new("next.docx", Vec::new()),
        });
        assert_eq!(state.result, None);
        assert_eq!(state.status(), Status::Selected);
        assert!(state.can_submit());
    }

    #[test]
    fn test_select_nothing_is_noop() {
        let before = succeeded();
        let after = before.clone().reduce(Action::SelectFile(None));
        assert_eq!(before, after);
    }

    #[test]
    fn test_submit_started_requires_file() {
        let state = AppState::default().reduce(Action::SubmitStarted);
        assert!(!state.in_flight);
        assert_eq!(state.status(), Status::Idle);
    }

    #[test]
    fn test_submit_started_clears_error() {
        let state = AppState::default()
            .reduce(Action::SelectFile(Some(pdf())))
            .reduce(Action::SubmitStarted)
            .reduce(Action::SubmitFailed("bad file".to_string()))
            .reduce(Action::SubmitStarted);
        assert!(state.in_flight);
        assert_eq!(state.error, "");
        assert_eq!(state.status(), Status::Submitting);
        assert!(!state.can_submit());
    }

    #[test]
    fn test_submit_succeeded() {
        let state = succeeded();
        let fields = state.result.as_ref().unwrap();
        assert_eq!(fields.len(), 2);
        assert_eq!(fields["A"], "1");
        assert_eq!(fields["B"], "2");
        assert_eq!(state.page_count(), 2);
        assert_eq!(state.selected_page, 0);
        assert!(!state.in_flight);
        assert_eq!(state.status(), Status::Succeeded);
    }

    #[test]
    fn test_new_result_replaces_not_merges() {
        let mut fields = FieldMap::new();
        fields.insert("C".to_string(), "3".to_string());
        let state = succeeded()
            .reduce(Action::SelectPage(1))
            .reduce(Action::SubmitStarted)
            .reduce(Action::SubmitSucceeded(ExtractionPayload {
                fields,
                pages: vec!["only".to_string()],
            }));
        let keys: Vec<&str> = state.result.as_ref().unwrap().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["C"]);
        assert_eq!(state.pages, vec!["only"]);
        assert_eq!(state.selected_page, 0);
    }

    #[test]
    fn test_submit_failed_keeps_previous_result() {
        let state = succeeded()
            .reduce(Action::SubmitStarted)
            .reduce(Action::SubmitFailed("oops".to_string()));
        assert!(!state.in_flight);
        assert_eq!(state.error_message(), Some("oops"));
        assert_eq!(state.result.as_ref().unwrap()["A"], "1");
        assert_eq!(state.status(), Status::Failed);
        assert!(state.can_submit());
    }

    #[test]
    fn test_submit_failed_empty_message_uses_fallback() {
        let state = AppState::default()
            .reduce(Action::SelectFile(Some(pdf())))
            .reduce(Action::SubmitStarted)
            .reduce(Action::SubmitFailed(String::new()));
        assert_eq!(state.error, GENERIC_ERROR);
    }

    #[test]
    fn test_edit_field_preserves_order() {
        let state = succeeded().reduce(Action::EditField {
            key: "A".to_string(),
            value: "99".to_string(),
        });
        let fields: Vec<(&str, &str)> = state
            .result
            .as_ref()
            .unwrap()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(fields, vec![("A", "99"), ("B", "2")]);
    }

    #[test]
    fn test_edit_unknown_key_does_not_add() {
        let state = succeeded().reduce(Action::EditField {
            key: "Z".to_string(),
            value: "new".to_string(),
        });
        assert_eq!(state.result.as_ref().unwrap().len(), 2);
        assert!(!state.result.as_ref().unwrap().contains_key("Z"));
    }

    #[test]
    fn test_edit_without_result_is_noop() {
        let state = AppState::default().reduce(Action::EditField {
            key: "A".to_string(),
            value: "1".to_string(),
        });
        assert_eq!(state.result, None);
    }

    #[test]
    fn test_select_page_bounds() {
        let state = succeeded().reduce(Action::SelectPage(1));
        assert_eq!(state.selected_page, 1);
        assert_eq!(state.current_page(), Some("img2"));

        let state = state.reduce(Action::SelectPage(2));
        assert_eq!(state.selected_page, 1);

        let state = state.reduce(Action::SelectPage(usize::MAX));
        assert_eq!(state.selected_page, 1);
    }

    #[test]
    fn test_select_page_without_pages() {
        let state = AppState::default().reduce(Action::SelectPage(0));
        assert_eq!(state.selected_page, 0);
        assert_eq!(state.current_page(), None);
    }

    #[test]
    fn test_zoom_floor() {
        let mut state = succeeded();
        for _ in 0..50 {
            state = state.reduce(Action::ZoomOut);
            assert!(state.zoom >= MIN_ZOOM);
        }
        assert_eq!(state.zoom, MIN_ZOOM);
    }

    #[test]
    fn test_zoom_floor_from_any_start() {
        for start in [0.1, 0.15, 0.2, 0.35, 1.0, 2.7] {
            let mut state = succeeded();
            state.zoom = start;
            for _ in 0..40 {
                state = state.reduce(Action::ZoomOut);
                assert!(state.zoom >= MIN_ZOOM, "start={} zoom={}", start, state.zoom);
            }
        }
    }

    #[test]
    fn test_zoom_in_unbounded() {
        let mut state = succeeded();
        for _ in 0..30 {
            state = state.reduce(Action::ZoomIn);
        }
        assert_eq!(state.zoom, 4.0);
    }

    #[test]
    fn test_zoom_requires_pages() {
        let state = AppState::default()
            .reduce(Action::ZoomIn)
            .reduce(Action::ZoomIn);
        assert_eq!(state.zoom, 1.0);

        let state = state.reduce(Action::ZoomOut);
        assert_eq!(state.zoom, 1.0);
    }
}
