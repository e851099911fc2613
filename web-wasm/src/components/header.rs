//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Doc Extract - 文書項目抽出"</h1>
        </header>
    }
}
