//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use crate::api::upload::{self, API_ORIGIN};
use crate::components::{
    header::Header,
    upload_area::UploadArea,
    field_table::FieldTable,
    page_viewer::PageViewer,
    export_buttons::ExportButtons,
};
use crate::export::download;
use doc_extract_common::{parse_upload_response, Action, AppState, DownloadFile};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態（Actionでのみ更新）
    let (state, set_state) = signal(AppState::default());

    let dispatch = move |action: Action| {
        set_state.update(|s| {
            let current = std::mem::take(s);
            *s = current.reduce(action);
        });
    };

    // 送信ハンドラ
    let on_submit = move |_| {
        let Some(file) = state.with_untracked(|s| s.submission().cloned()) else {
            return;
        };
        dispatch(Action::SubmitStarted);

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = match upload::post_upload(API_ORIGIN, &file).await {
                Ok(response) => parse_upload_response(&response),
                Err(e) => Err(e),
            };
            match outcome {
                Ok(payload) => dispatch(Action::SubmitSucceeded(payload)),
                Err(e) => {
                    let message = e.to_string();
                    web_sys::console::error_1(&format!("upload failed: {}", message).into());
                    dispatch(Action::SubmitFailed(message));
                }
            }
        });
    };

    // JSON出力ハンドラ
    let on_export_json = move |_| {
        let file = state.with_untracked(|s| s.result.as_ref().map(DownloadFile::json));
        match file {
            Some(Ok(file)) => report_download(download::download(&file)),
            Some(Err(e)) => web_sys::console::error_1(&e.to_string().into()),
            None => {}
        }
    };

    // CSV出力ハンドラ
    let on_export_csv = move |_| {
        if let Some(file) = state.with_untracked(|s| s.result.as_ref().map(DownloadFile::csv)) {
            report_download(download::download(&file));
        }
    };

    view! {
        <div class="container">
            <Header />

            <UploadArea state=state on_action=dispatch on_submit=on_submit />

            <Show when=move || state.with(|s| s.error_message().is_some())>
                <p class="error">{move || state.with(|s| s.error.clone())}</p>
            </Show>

            <Show when=move || state.with(|s| s.result.is_some())>
                <FieldTable state=state on_action=dispatch />
                <ExportButtons
                    state=state
                    on_export_json=on_export_json
                    on_export_csv=on_export_csv
                />
            </Show>

            <Show when=move || state.with(|s| s.has_pages())>
                <PageViewer state=state on_action=dispatch />
            </Show>
        </div>
    }
}

fn report_download(result: Result<(), wasm_bindgen::JsValue>) {
    if let Err(e) = result {
        web_sys::console::error_2(&"download failed".into(), &e);
    }
}
