//! 作品テーブルコンポーネント

use leptos::prelude::*;
use artic_common::layout::{row_cells, COLUMNS};
use artic_common::{ArtworkId, ArtworkRecord};

#[component]
pub fn ArtworksTable<FR, FP>(
    artworks: Signal<Vec<ArtworkRecord>>,
    checked_ids: Signal<Vec<ArtworkId>>,
    loading: Signal<bool>,
    on_toggle_row: FR,
    on_toggle_page: FP,
) -> impl IntoView
where
    FR: Fn(ArtworkId) + 'static + Clone + Send + Sync,
    FP: Fn(bool) + 'static + Clone + Send + Sync,
{
    let all_checked = move || {
        let rows = artworks.get();
        let checked = checked_ids.get();
        !rows.is_empty() && rows.iter().all(|r| checked.contains(&r.id))
    };

    view! {
        <div class="table-wrapper" class:loading=move || loading.get()>
            <table class="artworks-table">
                <thead>
                    <tr>
                        <th class="select-col">
                            <input
                                type="checkbox"
                                prop:checked=all_checked
                                on:change=move |ev| on_toggle_page(event_target_checked(&ev))
                            />
                        </th>
                        {COLUMNS.iter().map(|c| view! { <th>{c.label}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || artworks.get()
                        key=|artwork| artwork.id
                        children=move |artwork| {
                            let on_toggle_row = on_toggle_row.clone();
                            let id = artwork.id;
                            let is_checked = move || checked_ids.get().contains(&id);
                            view! {
                                <tr class:selected=is_checked>
                                    <td class="select-col">
                                        <input
                                            type="checkbox"
                                            prop:checked=is_checked
                                            on:change=move |_| on_toggle_row(id)
                                        />
                                    </td>
                                    {row_cells(&artwork)
                                        .into_iter()
                                        .map(|cell| view! { <td>{cell}</td> })
                                        .collect_view()}
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <Show when=move || loading.get()>
                <div class="loading-overlay">"Loading..."</div>
            </Show>
        </div>
    }
}
