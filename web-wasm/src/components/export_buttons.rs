//! エクスポートボタンコンポーネント

use leptos::prelude::*;
use doc_extract_common::AppState;

#[component]
pub fn ExportButtons<FJ, FC>(
    state: ReadSignal<AppState>,
    on_export_json: FJ,
    on_export_csv: FC,
) -> impl IntoView
where
    FJ: Fn(()) + 'static + Clone + Send + Sync,
    FC: Fn(()) + 'static + Clone + Send + Sync,
{
    let has_result = move || state.with(|s| s.result.is_some());

    view! {
        <div class="export-buttons">
            <button
                class="btn btn-secondary"
                disabled=move || !has_result()
                on:click={
                    let on_export_json = on_export_json.clone();
                    move |_| on_export_json(())
                }
            >
                "JSON出力"
            </button>

            <button
                class="btn btn-secondary"
                disabled=move || !has_result()
                on:click={
                    let on_export_csv = on_export_csv.clone();
                    move |_| on_export_csv(())
                }
            >
                "CSV出力"
            </button>
        </div>
    }
}
