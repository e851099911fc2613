//! ページ画像の保存

use crate::error::Result;
use doc_extract_common::{decode_page, page_file_name, AppState};
use std::path::{Path, PathBuf};

/// 全ページをPNGとして保存
pub fn save_all_pages(state: &AppState, dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    state
        .pages
        .iter()
        .enumerate()
        .map(|(index, payload)| save_page(payload, index, dir))
        .collect()
}

/// 選択中のページだけ保存（ページが無ければ None）
pub fn save_selected_page(state: &AppState, dir: &Path) -> Result<Option<PathBuf>> {
    let Some(payload) = state.current_page() else {
        return Ok(None);
    };
    std::fs::create_dir_all(dir)?;
    save_page(payload, state.selected_page, dir).map(Some)
}

fn save_page(payload: &str, index: usize, dir: &Path) -> Result<PathBuf> {
    let bytes = decode_page(payload)?;
    let path = dir.join(page_file_name(index));
    std::fs::write(&path, bytes)?;
    Ok(path)
}
