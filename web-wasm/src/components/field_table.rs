//! 抽出項目テーブル（値のみ編集可）

use leptos::prelude::*;
use doc_extract_common::{Action, AppState};

#[component]
pub fn FieldTable<F>(state: ReadSignal<AppState>, on_action: F) -> impl IntoView
where
    F: Fn(Action) + 'static + Clone + Send + Sync,
{
    let keys = move || {
        state.with(|s| {
            s.result
                .as_ref()
                .map(|fields| fields.keys().cloned().collect::<Vec<_>>())
                .unwrap_or_default()
        })
    };

    view! {
        <table class="field-table">
            <thead>
                <tr>
                    <th>"Parameter"</th>
                    <th>"Value"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=keys
                    key=|key| key.clone()
                    children=move |key| {
                        let on_action = on_action.clone();
                        let value = {
                            let key = key.clone();
                            move || {
                                state.with(|s| {
                                    s.result
                                        .as_ref()
                                        .and_then(|fields| fields.get(&key).cloned())
                                        .unwrap_or_default()
                                })
                            }
                        };
                        view! {
                            <tr>
                                <td class="field-key">{key.clone()}</td>
                                <td>
                                    <input
                                        type="text"
                                        prop:value=value
                                        on:input={
                                            let key = key.clone();
                                            move |ev| {
                                                on_action(Action::EditField {
                                                    key: key.clone(),
                                                    value: event_target_value(&ev),
                                                });
                                            }
                                        }
                                    />
                                </td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
