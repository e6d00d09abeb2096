//! ページャコンポーネント
//!
//! ページ番号は0始まりで通知する（コントローラ側で1始まりに変換）。

use leptos::prelude::*;

/// 番号ボタンとして表示するページ数
const PAGE_LINKS: u32 = 5;

/// 現在ページを中心にした表示ページ番号（1始まり）
pub fn page_window(current: u32, total_pages: u32, width: u32) -> Vec<u32> {
    if total_pages == 0 || width == 0 {
        return vec![current.max(1)];
    }
    let current = current.clamp(1, total_pages);
    let width = width.min(total_pages);
    let half = width / 2;
    let start = current.saturating_sub(half).max(1).min(total_pages - width + 1);
    (start..start + width).collect()
}

/// 「Showing a to b of n」表示
pub fn range_label(first: u64, rows: usize, total: u64) -> String {
    if rows == 0 {
        return format!("Showing 0 of {}", total);
    }
    format!("Showing {} to {} of {}", first + 1, first + rows as u64, total)
}

#[component]
pub fn Paginator<F>(
    page: Signal<u32>,
    total_pages: Signal<u32>,
    first: Signal<u64>,
    rows: Signal<usize>,
    total_records: Signal<u64>,
    on_page: F,
) -> impl IntoView
where
    F: Fn(u32) + 'static + Clone + Send + Sync,
{
    let has_previous = move || page.get() > 1;
    let has_next = move || {
        let total = total_pages.get();
        total == 0 || page.get() < total
    };

    view! {
        <div class="paginator">
            <button
                class="btn btn-small"
                disabled=move || !has_previous()
                on:click={
                    let on_page = on_page.clone();
                    move |_| on_page(0)
                }
            >
                "«"
            </button>
            <button
                class="btn btn-small"
                disabled=move || !has_previous()
                on:click={
                    let on_page = on_page.clone();
                    move |_| on_page(page.get_untracked().saturating_sub(2))
                }
            >
                "‹"
            </button>

            {
                let on_page = on_page.clone();
                move || {
                    page_window(page.get(), total_pages.get(), PAGE_LINKS)
                        .into_iter()
                        .map(|n| {
                            let on_page = on_page.clone();
                            view! {
                                <button
                                    class="btn btn-small page-link"
                                    class:active=move || page.get() == n
                                    on:click=move |_| on_page(n - 1)
                                >
                                    {n}
                                </button>
                            }
                        })
                        .collect_view()
                }
            }

            <button
                class="btn btn-small"
                disabled=move || !has_next()
                on:click={
                    let on_page = on_page.clone();
                    move |_| on_page(page.get_untracked())
                }
            >
                "›"
            </button>
            <button
                class="btn btn-small"
                disabled=move || !has_next() || total_pages.get() == 0
                on:click={
                    let on_page = on_page.clone();
                    move |_| on_page(total_pages.get_untracked().saturating_sub(1))
                }
            >
                "»"
            </button>

            <span class="page-report">
                {move || range_label(first.get(), rows.get(), total_records.get())}
            </span>
        </div>
    }
}
