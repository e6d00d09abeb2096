//! 先頭N行選択ポップオーバー

use leptos::prelude::*;

/// 入力欄の文字列を件数に変換（空・数値以外は未入力扱い）
pub fn parse_count(input: &str) -> Option<i64> {
    input.trim().parse::<i64>().ok()
}

#[component]
pub fn BulkSelectPopover<FA>(
    open: ReadSignal<bool>,
    set_open: WriteSignal<bool>,
    count: ReadSignal<Option<i64>>,
    set_count: WriteSignal<Option<i64>>,
    on_apply: FA,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="bulk-select">
            <button
                class="btn btn-primary"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                "Select Rows"
            </button>

            <Show when=move || open.get()>
                <div class="popover">
                    <input
                        type="number"
                        min="1"
                        placeholder="Enter count"
                        prop:value=move || count.get().map(|n| n.to_string()).unwrap_or_default()
                        on:input=move |ev| {
                            set_count.set(parse_count(&event_target_value(&ev)));
                        }
                    />
                    <button
                        class="btn btn-secondary"
                        on:click={
                            let on_apply = on_apply.clone();
                            move |_| on_apply(())
                        }
                    >
                        "Apply"
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        assert_eq!(parse_count("5"), Some(5));
        assert_eq!(parse_count(" 12 "), Some(12));
        assert_eq!(parse_count("-3"), Some(-3));
        assert_eq!(parse_count(""), None);
        assert_eq!(parse_count("abc"), None);
    }
}
