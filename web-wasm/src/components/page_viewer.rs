//! ページ画像ビューア（ページ切替・ズーム）

use leptos::prelude::*;
use doc_extract_common::{page_data_url, Action, AppState};

#[component]
pub fn PageViewer<F>(state: ReadSignal<AppState>, on_action: F) -> impl IntoView
where
    F: Fn(Action) + 'static + Clone + Send + Sync,
{
    // ボタンは有効なページ番号に対してだけ生成する
    let indices = move || state.with(|s| (0..s.page_count()).collect::<Vec<_>>());
    let src = move || state.with(|s| s.current_page().map(page_data_url).unwrap_or_default());
    let zoom = move || state.with(|s| s.zoom);

    view! {
        <div class="page-viewer">
            <div class="page-nav">
                <For
                    each=indices
                    key=|index| *index
                    children={
                        let on_action = on_action.clone();
                        move |index| {
                            let on_action = on_action.clone();
                            view! {
                                <button
                                    class="btn btn-small"
                                    class:active=move || state.with(|s| s.selected_page == index)
                                    on:click=move |_| on_action(Action::SelectPage(index))
                                >
                                    {format!("{}", index + 1)}
                                </button>
                            }
                        }
                    }
                />
            </div>
            <div class="zoom-controls">
                <button
                    class="btn btn-small btn-secondary"
                    on:click={
                        let on_action = on_action.clone();
                        move |_| on_action(Action::ZoomOut)
                    }
                >
                    "−"
                </button>
                <span class="zoom-label">{move || format!("{:.0}%", zoom() * 100.0)}</span>
                <button
                    class="btn btn-small btn-secondary"
                    on:click={
                        let on_action = on_action.clone();
                        move |_| on_action(Action::ZoomIn)
                    }
                >
                    "+"
                </button>
            </div>
            <div class="page-frame">
                <img
                    src=src
                    alt=move || format!("page {}", state.with(|s| s.selected_page + 1))
                    style=move || format!("transform: scale({}); transform-origin: top left;", zoom())
                />
            </div>
        </div>
    }
}
