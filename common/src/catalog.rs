//! カタログAPIのワイヤフォーマット
//!
//! 各シェルが通信手段（web-sys fetch / reqwest）を持ち、
//! URL生成とレスポンス解析はここで共通化する。

use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::types::{ArtworkRecord, PageResult};

/// 作品一覧エンドポイント
pub const ARTWORKS_ENDPOINT: &str = "https://api.artic.edu/api/v1/artworks";

/// APIレスポンス全体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub data: Vec<ArtworkRecord>,
    pub pagination: Pagination,
}

/// ページ情報
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Pagination {
    pub total: u64,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub current_page: u32,
}

impl From<CatalogResponse> for PageResult {
    fn from(response: CatalogResponse) -> Self {
        PageResult {
            rows: response.data,
            total: response.pagination.total,
            total_pages: response.pagination.total_pages,
            current_page: response.pagination.current_page,
        }
    }
}

/// ページ番号付きのURLを生成（ページ番号は1以上に丸める）
pub fn page_url(endpoint: &str, page: u32) -> String {
    format!("{}?page={}", endpoint.trim_end_matches('/'), page.max(1))
}

/// レスポンスボディを解析してPageResultを返す
pub fn parse_page_response(body: &str) -> Result<PageResult> {
    let response: CatalogResponse = serde_json::from_str(body)?;
    Ok(response.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FetchError;

    const SAMPLE: &str = r#"{
        "pagination": {
            "total": 129884,
            "limit": 12,
            "offset": 12,
            "total_pages": 10824,
            "current_page": 2,
            "next_url": "https://api.artic.edu/api/v1/artworks?page=3"
        },
        "data": [
            {
                "id": 4,
                "title": "Priest and Boy",
                "place_of_origin": "United States",
                "artist_display": "Lawrence Carmichael Earle\nAmerican, 1845-1921",
                "inscriptions": null,
                "date_start": 1880,
                "date_end": 1880,
                "image_id": "abc"
            },
            {
                "id": 14,
                "title": "Auvers, Panoramic View",
                "place_of_origin": "France",
                "artist_display": "Paul Cézanne",
                "inscriptions": "signed lower left",
                "date_start": 1873,
                "date_end": 1875
            }
        ],
        "info": { "version": "1.13" }
    }"#;

    #[test]
    fn test_page_url() {
        assert_eq!(
            page_url(ARTWORKS_ENDPOINT, 3),
            "https://api.artic.edu/api/v1/artworks?page=3"
        );
        assert_eq!(page_url("http://localhost:8080/", 1), "http://localhost:8080?page=1");
    }

    #[test]
    fn test_page_url_clamps_zero() {
        assert!(page_url(ARTWORKS_ENDPOINT, 0).ends_with("?page=1"));
    }

    #[test]
    fn test_parse_page_response() {
        let page = parse_page_response(SAMPLE).expect("解析失敗");
        assert_eq!(page.rows.len(), 2);
        assert_eq!(page.rows[0].id, 4);
        assert_eq!(page.rows[1].inscriptions.as_deref(), Some("signed lower left"));
        assert_eq!(page.total, 129884);
        assert_eq!(page.total_pages, 10824);
        assert_eq!(page.current_page, 2);
    }

    #[test]
    fn test_parse_page_response_without_pagination_fails() {
        let result = parse_page_response(r#"{"data": []}"#);
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }

    #[test]
    fn test_parse_page_response_garbage() {
        let result = parse_page_response("<html>Bad Gateway</html>");
        assert!(matches!(result, Err(FetchError::Malformed(_))));
    }
}
