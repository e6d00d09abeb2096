//! 選択数表示

use leptos::prelude::*;

#[component]
pub fn SelectionSummary(count: Signal<usize>) -> impl IntoView {
    view! {
        <p class="selection-summary">
            {move || format!("Total Selected: {}", count.get())}
        </p>
    }
}
