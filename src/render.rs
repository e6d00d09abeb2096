//! ターミナル向けのテーブル表示

use artic_common::layout::{row_cells, COLUMNS};
use artic_common::{LoadState, ViewController};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{ContentArrangement, Table};

/// セルの最大表示文字数
const MAX_CELL_CHARS: usize = 40;

pub const CHECKED: &str = "[x]";
pub const UNCHECKED: &str = "[ ]";

/// 表示中ページをテーブル文字列にする
pub fn render_page(controller: &ViewController) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = vec![String::new()];
    header.extend(COLUMNS.iter().map(|c| c.label.to_string()));
    table.set_header(header);

    for artwork in controller.artworks() {
        let mark = if controller.is_row_checked(artwork.id) { CHECKED } else { UNCHECKED };
        let mut row = vec![mark.to_string()];
        row.extend(row_cells(artwork).iter().map(|c| truncate(c, MAX_CELL_CHARS)));
        table.add_row(row);
    }

    table.to_string()
}

/// 選択数とページ位置の1行サマリ
pub fn render_summary(controller: &ViewController) -> String {
    let pages = if controller.total_pages() > 0 {
        format!("Page {} of {}", controller.page(), controller.total_pages())
    } else {
        format!("Page {}", controller.page())
    };
    let mut line = format!(
        "Total Selected: {} | {} | {} records",
        controller.selection().len(),
        pages,
        controller.total_records()
    );
    if controller.state() == LoadState::Failed {
        if let Some(err) = controller.last_error() {
            line.push_str(&format!(" | last load failed: {}", err));
        }
    }
    line
}

/// 行表示用ラベル（MultiSelectの項目に使う）
pub fn row_label(cells: &[String]) -> String {
    let title = cells.first().map(String::as_str).unwrap_or("-");
    let artist = cells.get(2).map(String::as_str).unwrap_or("-");
    format!("{} / {}", truncate(title, MAX_CELL_CHARS), truncate(artist, MAX_CELL_CHARS))
}

/// 改行を畳み、文字数で切り詰める
pub fn truncate(text: &str, max_chars: usize) -> String {
    let flat = text.replace(['\r', '\n'], " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let kept: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use artic_common::{ArtworkRecord, PageResult};

    fn loaded() -> ViewController {
        let mut controller = ViewController::new();
        let request = controller.mount();
        controller.complete(
            request,
            Ok(PageResult {
                rows: vec![
                    ArtworkRecord {
                        id: 1,
                        title: Some("Water Lilies".into()),
                        artist_display: Some("Claude Monet\nFrench, 1840-1926".into()),
                        date_start: Some(1906),
                        ..Default::default()
                    },
                    ArtworkRecord { id: 2, title: Some("Untitled".into()), ..Default::default() },
                ],
                total: 2,
                total_pages: 1,
                current_page: 1,
            }),
        );
        controller
    }

    #[test]
    fn test_render_page_marks_checked_rows() {
        let mut controller = loaded();
        controller.toggle_all_on_page([2]);

        let out = render_page(&controller);

        assert!(out.contains("Title"));
        assert!(out.contains("End Date"));
        assert!(out.contains("Water Lilies"));
        assert_eq!(out.matches(CHECKED).count(), 1);
        assert_eq!(out.matches(UNCHECKED).count(), 1);
    }

    #[test]
    fn test_render_summary() {
        let mut controller = loaded();
        controller.set_page_checked(true);
        assert_eq!(
            render_summary(&controller),
            "Total Selected: 2 | Page 1 of 1 | 2 records"
        );
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a\nb", 10), "a b");
        assert_eq!(truncate("abcdefghijkl", 5), "abcd…");
    }

    #[test]
    fn test_row_label() {
        let cells = vec!["Nighthawks".to_string(), "-".to_string(), "Edward Hopper".to_string()];
        assert_eq!(row_label(&cells), "Nighthawks / Edward Hopper");
    }
}
