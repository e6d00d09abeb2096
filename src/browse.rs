//! 対話式閲覧モジュール
//!
//! 操作: [Enter/n]次 [p]前 [g N]ページ移動 [t]行の選択 [b N]先頭N行選択
//! [s]選択一覧 [r]再読込 [q]終了

use crate::catalog::CatalogSource;
use crate::error::{ArticError, Result};
use crate::render::{render_page, render_summary, row_label};
use crate::session::BrowseSession;
use artic_common::layout::row_cells;
use artic_common::{ArtworkId, LoadOutcome};
use dialoguer::{Input, MultiSelect};
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

const HELP: &str =
    "操作: [Enter/n]次 [p]前 [g N]ページ移動 [t]行の選択 [b N]先頭N行選択 [s]選択一覧 [r]再読込 [q]終了";

/// 対話アクション
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseAction {
    Next,
    Previous,
    /// 指定ページへ移動（1始まり）
    Goto(u32),
    /// 表示中ページのチェックを編集
    Toggle,
    /// 先頭N行を選択。件数未指定ならプロンプトで聞く
    BulkSelect(Option<i64>),
    ShowSelection,
    Reload,
    Help,
    Quit,
}

/// 入力文字列をアクションに変換
pub fn parse_browse_action(input: &str) -> Option<BrowseAction> {
    let trimmed = input.trim();
    let mut parts = trimmed.split_whitespace();
    let head = parts.next().unwrap_or("");
    let arg = parts.next();

    match head {
        "" | "n" => Some(BrowseAction::Next),
        "p" => Some(BrowseAction::Previous),
        "g" => arg
            .and_then(|a| a.parse::<u32>().ok())
            .filter(|p| *p >= 1)
            .map(BrowseAction::Goto),
        "t" => Some(BrowseAction::Toggle),
        "b" => match arg {
            Some(a) => a.parse::<i64>().ok().map(|n| BrowseAction::BulkSelect(Some(n))),
            None => Some(BrowseAction::BulkSelect(None)),
        },
        "s" => Some(BrowseAction::ShowSelection),
        "r" => Some(BrowseAction::Reload),
        "h" | "?" => Some(BrowseAction::Help),
        "q" | "Q" => Some(BrowseAction::Quit),
        _ => trimmed
            .parse::<u32>()
            .ok()
            .filter(|p| *p >= 1)
            .map(BrowseAction::Goto),
    }
}

/// 対話式閲覧を開始
pub async fn run_browse<S: CatalogSource>(
    session: &mut BrowseSession<S>,
    start_page: u32,
) -> Result<()> {
    println!("{}\n", HELP);
    let outcome = with_spinner(start_page, session.open(start_page)).await;
    show_outcome(session, outcome);

    loop {
        let input: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| ArticError::Prompt(e.to_string()))?;

        let Some(action) = parse_browse_action(&input) else {
            println!("不明な操作です: {}\n{}", input.trim(), HELP);
            continue;
        };

        match action {
            BrowseAction::Next => {
                let page = session.controller().page().saturating_add(1);
                let outcome = with_spinner(page, session.next_page()).await;
                match outcome {
                    Some(outcome) => show_outcome(session, outcome),
                    None => println!("最終ページです"),
                }
            }
            BrowseAction::Previous => {
                let page = session.controller().page().saturating_sub(1);
                let outcome = with_spinner(page, session.previous_page()).await;
                match outcome {
                    Some(outcome) => show_outcome(session, outcome),
                    None => println!("先頭ページです"),
                }
            }
            BrowseAction::Goto(page) => {
                let outcome = with_spinner(page, session.open(page)).await;
                show_outcome(session, outcome);
            }
            BrowseAction::Reload => {
                let page = session.controller().page();
                let outcome = with_spinner(page, session.reload()).await;
                show_outcome(session, outcome);
            }
            BrowseAction::Toggle => {
                prompt_toggle_rows(session)?;
                print_page(session);
            }
            BrowseAction::BulkSelect(count) => {
                let count = match count {
                    Some(n) => Some(n),
                    None => prompt_bulk_count()?,
                };
                let added = session.bulk_select(count);
                println!("✔ {}件追加", added);
                print_page(session);
            }
            BrowseAction::ShowSelection => {
                let ids: Vec<String> = session
                    .controller()
                    .selection()
                    .iter()
                    .map(|id| id.to_string())
                    .collect();
                println!("Total Selected: {}", ids.len());
                if !ids.is_empty() {
                    println!("  {}", ids.join(", "));
                }
            }
            BrowseAction::Help => println!("{}", HELP),
            BrowseAction::Quit => break,
        }
    }

    println!("\nTotal Selected: {}", session.controller().selection().len());
    Ok(())
}

/// 読み込み中はスピナーを表示する
async fn with_spinner<T>(page: u32, load: impl Future<Output = T>) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Loading page {}...", page));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = load.await;
    spinner.finish_and_clear();
    result
}

fn show_outcome<S: CatalogSource>(session: &BrowseSession<S>, outcome: LoadOutcome) {
    if outcome == LoadOutcome::Failed {
        if let Some(err) = session.controller().last_error() {
            eprintln!("⚠ {}", err);
        }
    }
    print_page(session);
}

fn print_page<S: CatalogSource>(session: &BrowseSession<S>) {
    let controller = session.controller();
    println!("{}", render_summary(controller));
    if !controller.artworks().is_empty() {
        println!("{}", render_page(controller));
    }
}

fn prompt_toggle_rows<S: CatalogSource>(session: &mut BrowseSession<S>) -> Result<()> {
    let controller = session.controller();
    if controller.artworks().is_empty() {
        println!("表示中の行がありません");
        return Ok(());
    }

    let labels: Vec<String> = controller
        .artworks()
        .iter()
        .map(|a| row_label(&row_cells(a)))
        .collect();
    let defaults: Vec<bool> = controller
        .artworks()
        .iter()
        .map(|a| controller.is_row_checked(a.id))
        .collect();
    let ids: Vec<ArtworkId> = controller.artworks().iter().map(|a| a.id).collect();

    let picked = MultiSelect::new()
        .with_prompt("Space: 選択切替 / Enter: 確定")
        .items(&labels)
        .defaults(&defaults)
        .interact()
        .map_err(|e| ArticError::Prompt(e.to_string()))?;

    let checked = picked.into_iter().filter_map(|i| ids.get(i).copied()).collect();
    session.set_checked_rows(checked);
    Ok(())
}

fn prompt_bulk_count() -> Result<Option<i64>> {
    let input: String = Input::new()
        .with_prompt("Select how many rows?")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ArticError::Prompt(e.to_string()))?;
    Ok(input.trim().parse::<i64>().ok())
}
