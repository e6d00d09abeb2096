//! カタログデータの型定義
//!
//! - ArtworkRecord: 1作品分の行データ（APIの値をそのまま保持）
//! - PageResult: 1ページ分の取得結果

use serde::{Deserialize, Serialize};

/// 作品ID（カタログ側で一意・不変）
pub type ArtworkId = u64;

/// 作品レコード
///
/// APIは多くのフィールドに `null` を返すため、`id` 以外は省略可能として扱う。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ArtworkRecord {
    pub id: ArtworkId,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub place_of_origin: Option<String>,

    #[serde(default)]
    pub artist_display: Option<String>,

    #[serde(default)]
    pub inscriptions: Option<String>,

    #[serde(default)]
    pub date_start: Option<i32>,

    #[serde(default)]
    pub date_end: Option<i32>,
}

/// 1ページ分の取得結果
///
/// 取得のたびに新しく作られ、前のページの結果を丸ごと置き換える。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageResult {
    pub rows: Vec<ArtworkRecord>,
    pub total: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

impl PageResult {
    pub fn ids(&self) -> Vec<ArtworkId> {
        self.rows.iter().map(|r| r.id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artwork_record_deserialize_nulls() {
        let json = r#"{
            "id": 27992,
            "title": "A Sunday on La Grande Jatte, 1884",
            "place_of_origin": "France",
            "artist_display": "Georges Seurat\nFrench, 1859-1891",
            "inscriptions": null,
            "date_start": 1884,
            "date_end": 1886
        }"#;

        let record: ArtworkRecord = serde_json::from_str(json).expect("デシリアライズ失敗");
        assert_eq!(record.id, 27992);
        assert_eq!(record.place_of_origin.as_deref(), Some("France"));
        assert_eq!(record.inscriptions, None);
        assert_eq!(record.date_start, Some(1884));
    }

    #[test]
    fn test_artwork_record_deserialize_missing_fields() {
        // idのみでもデシリアライズできる
        let record: ArtworkRecord = serde_json::from_str(r#"{"id": 1}"#).expect("デシリアライズ失敗");
        assert_eq!(record.id, 1);
        assert_eq!(record.title, None);
        assert_eq!(record.date_end, None);
    }

    #[test]
    fn test_artwork_record_requires_id() {
        let result = serde_json::from_str::<ArtworkRecord>(r#"{"title": "no id"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_page_result_ids_keep_order() {
        let page = PageResult {
            rows: vec![
                ArtworkRecord { id: 9, ..Default::default() },
                ArtworkRecord { id: 3, ..Default::default() },
                ArtworkRecord { id: 5, ..Default::default() },
            ],
            ..Default::default()
        };
        assert_eq!(page.ids(), vec![9, 3, 5]);
    }
}
