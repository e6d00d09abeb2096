//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h2>"Art Institute of Chicago - Artworks"</h2>
        </header>
    }
}
