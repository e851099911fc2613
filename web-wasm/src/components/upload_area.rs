//! アップロードエリアコンポーネント
//!
//! ファイル選択と送信ボタン。拡張子フィルタはヒントのみ。

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use doc_extract_common::{accept_attribute, Action, AppState};
use crate::api::upload::read_file;

#[component]
pub fn UploadArea<FA, FS>(
    state: ReadSignal<AppState>,
    on_action: FA,
    on_submit: FS,
) -> impl IntoView
where
    FA: Fn(Action) + 'static + Clone + Send + Sync,
    FS: Fn(()) + 'static + Clone + Send + Sync,
{
    let on_change = move |ev: web_sys::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let Some(file) = file else {
            on_action(Action::SelectFile(None));
            return;
        };

        // 選択時点で前の結果を消し、この選択の世代を控えておく
        on_action(Action::SelectionStarted);
        let selection = state.with_untracked(|s| s.selection);

        let on_action = on_action.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match read_file(&file).await {
                Ok(pending) => on_action(Action::FileLoaded { selection, file: pending }),
                Err(message) => web_sys::console::error_1(&message.into()),
            }
        });
    };

    let selected_name = move || {
        state.with(|s| s.file.as_ref().map(|f| f.file_name.clone()))
    };

    view! {
        <div class="upload-area">
            <input
                type="file"
                id="document"
                accept=accept_attribute()
                on:change=on_change
            />
            <p class="text-muted">
                {move || match selected_name() {
                    Some(name) => format!("選択中: {}", name),
                    None => "対応形式: PDF, TXT, DOC, DOCX".to_string(),
                }}
            </p>
            <button
                class="btn btn-primary"
                disabled=move || !state.with(|s| s.can_submit())
                on:click={
                    let on_submit = on_submit.clone();
                    move |_| on_submit(())
                }
            >
                {move || if state.with(|s| s.in_flight) { "抽出中..." } else { "アップロードして抽出" }}
            </button>
        </div>
    }
}
