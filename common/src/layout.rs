//! テーブルレイアウト定義
//!
//! 各シェル（Web・デスクトップ・CLI）で共通の列定義。

use crate::types::ArtworkRecord;

/// 1ページあたりの行数（カタログAPIの既定ページサイズ）
pub const ROWS_PER_PAGE: u32 = 12;

/// 値がない場合の表示
pub const EMPTY_CELL: &str = "-";

/// 列定義
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub key: &'static str,
    pub label: &'static str,
}

/// 選択チェックボックス列に続くデータ列
pub const COLUMNS: &[ColumnDef] = &[
    ColumnDef { key: "title", label: "Title" },
    ColumnDef { key: "place_of_origin", label: "Origin" },
    ColumnDef { key: "artist_display", label: "Artist" },
    ColumnDef { key: "inscriptions", label: "Inscriptions" },
    ColumnDef { key: "date_start", label: "Start Date" },
    ColumnDef { key: "date_end", label: "End Date" },
];

/// 列キーに対応するセルの表示文字列
pub fn cell_value(record: &ArtworkRecord, key: &str) -> String {
    let text = match key {
        "title" => record.title.clone(),
        "place_of_origin" => record.place_of_origin.clone(),
        "artist_display" => record.artist_display.clone(),
        "inscriptions" => record.inscriptions.clone(),
        "date_start" => record.date_start.map(|y| y.to_string()),
        "date_end" => record.date_end.map(|y| y.to_string()),
        _ => None,
    };
    match text {
        Some(s) if !s.trim().is_empty() => s,
        _ => EMPTY_CELL.to_string(),
    }
}

/// セルの値を全列分まとめて返す
pub fn row_cells(record: &ArtworkRecord) -> Vec<String> {
    COLUMNS.iter().map(|c| cell_value(record, c.key)).collect()
}
