//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use artic_common::{ArtworkId, PageRequest, ViewController};
use crate::api::catalog;
use crate::components::{
    header::Header,
    selection_summary::SelectionSummary,
    bulk_select::BulkSelectPopover,
    artworks_table::ArtworksTable,
    paginator::Paginator,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // 表示状態と選択状態
    let controller = RwSignal::new(ViewController::new());

    // ポップオーバーの状態
    let (popover_open, set_popover_open) = signal(false);
    let (pending_count, set_pending_count) = signal(None::<i64>);

    // 取得して結果を反映（古い依頼の結果はコントローラが破棄する）
    let load = move |request: PageRequest| {
        spawn_local(async move {
            let outcome = catalog::fetch_page(request.page).await;
            if let Err(err) = &outcome {
                gloo::console::error!(format!("page {}: {}", request.page, err));
            }
            controller.update(|c| {
                c.complete(request, outcome);
            });
        });
    };

    // 初回読み込み
    if let Some(request) = controller.try_update(|c| c.mount()) {
        load(request);
    }

    // ページ移動ハンドラ（0始まり）
    let on_page = move |zero_based: u32| {
        if let Some(request) = controller.try_update(|c| c.on_page_turn(zero_based)) {
            load(request);
        }
    };

    // チェックボックスハンドラ
    let on_toggle_row = move |id: ArtworkId| controller.update(|c| c.toggle_row(id));
    let on_toggle_page = move |checked: bool| controller.update(|c| c.set_page_checked(checked));

    // 先頭N行選択ハンドラ
    let on_apply = move |_: ()| {
        let count = pending_count.get_untracked();
        controller.update(|c| {
            c.apply_bulk_select(count);
        });
        set_popover_open.set(false);
    };

    let artworks = Signal::derive(move || controller.with(|c| c.artworks().to_vec()));
    let checked_ids = Signal::derive(move || {
        controller.with(|c| {
            c.current_page_selection()
                .iter()
                .map(|a| a.id)
                .collect::<Vec<ArtworkId>>()
        })
    });
    let loading = Signal::derive(move || controller.with(|c| c.is_loading()));
    let selected_count = Signal::derive(move || controller.with(|c| c.selection().len()));
    let page = Signal::derive(move || controller.with(|c| c.page()));
    let total_pages = Signal::derive(move || controller.with(|c| c.total_pages()));
    let total_records = Signal::derive(move || controller.with(|c| c.total_records()));
    let first = Signal::derive(move || controller.with(|c| c.first_record_index()));
    let row_count = Signal::derive(move || controller.with(|c| c.artworks().len()));
    let last_error = Signal::derive(move || controller.with(|c| c.last_error().map(str::to_string)));

    view! {
        <div class="container">
            <Header />

            <SelectionSummary count=selected_count />

            <div class="toolbar">
                <h3>"Artworks"</h3>
                <BulkSelectPopover
                    open=popover_open
                    set_open=set_popover_open
                    count=pending_count
                    set_count=set_pending_count
                    on_apply=on_apply
                />
            </div>

            <Show when=move || last_error.get().is_some() && !loading.get()>
                <p class="load-error">{move || last_error.get().unwrap_or_default()}</p>
            </Show>

            <ArtworksTable
                artworks=artworks
                checked_ids=checked_ids
                loading=loading
                on_toggle_row=on_toggle_row
                on_toggle_page=on_toggle_page
            />

            <Paginator
                page=page
                total_pages=total_pages
                first=first
                rows=row_count
                total_records=total_records
                on_page=on_page
            />
        </div>
    }
}

