//! 端末表示

use doc_extract_common::{AppState, FieldMap, Status};
use unicode_width::UnicodeWidthStr;

/// 項目一覧を `キー : 値` 形式で整形（キー幅を揃える）
///
/// 幅は端末の表示幅で数える（全角は2桁）。
pub fn render_fields(fields: &FieldMap) -> String {
    let width = fields.keys().map(|k| k.width()).max().unwrap_or(0);
    fields
        .iter()
        .map(|(key, value)| {
            let pad = width - key.width();
            format!("  {}{} : {}", key, " ".repeat(pad), value)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// ステータス1行表示
pub fn render_status(state: &AppState) -> String {
    match state.status() {
        Status::Idle => "ファイル未選択".to_string(),
        Status::Selected => match &state.file {
            Some(file) => format!("選択中: {} ({} bytes)", file.file_name, file.bytes.len()),
            None => "ファイル未選択".to_string(),
        },
        Status::Submitting => "送信中...".to_string(),
        Status::Succeeded => format!(
            "抽出完了: {}項目 / {}ページ",
            state.result.as_ref().map_or(0, |f| f.len()),
            state.page_count()
        ),
        Status::Failed => format!("エラー: {}", state.error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use doc_extract_common::{Action, ExtractionPayload, PendingFile};

    #[test]
    fn test_render_fields_aligns_keys() {
        let mut fields = FieldMap::new();
        fields.insert("A".to_string(), "1".to_string());
        fields.insert("Total".to_string(), "200".to_string());
        assert_eq!(render_fields(&fields), "  A     : 1\n  Total : 200");
    }

    #[test]
    fn test_render_fields_aligns_full_width_keys() {
        let mut fields = FieldMap::new();
        fields.insert("請求番号".to_string(), "INV-001".to_string());
        fields.insert("Total".to_string(), "200".to_string());
        fields.insert("日付".to_string(), "2024-01-31".to_string());
        assert_eq!(
            render_fields(&fields),
            "  請求番号 : INV-001\n  Total    : 200\n  日付     : 2024-01-31"
        );
    }

    #[test]
    fn test_render_fields_empty() {
        assert_eq!(render_fields(&FieldMap::new()), "");
    }

    #[test]
    fn test_render_status_transitions() {
        let state = AppState::default();
        assert_eq!(render_status(&state), "ファイル未選択");

        let state = state.reduce(Action::SelectFile(Some(PendingFile::new("a.pdf", vec![0; 4]))));
        assert_eq!(render_status(&state), "選択中: a.pdf (4 bytes)");

        let state = state.reduce(Action::SubmitStarted);
        assert_eq!(render_status(&state), "送信中...");

        let state = state.reduce(Action::SubmitSucceeded(ExtractionPayload {
            fields: FieldMap::new(),
            pages: vec!["p".to_string()],
        }));
        assert_eq!(render_status(&state), "抽出完了: 0項目 / 1ページ");

        let state = state
            .reduce(Action::SubmitStarted)
            .reduce(Action::SubmitFailed("bad file".to_string()));
        assert_eq!(render_status(&state), "エラー: bad file");
    }
}
