//! 閲覧セッション
//!
//! ViewControllerとデータ取得元を束ねる。対話UIから独立しているのでテスト可能。

use crate::catalog::CatalogSource;
use artic_common::{ArtworkId, LoadOutcome, ViewController};

pub struct BrowseSession<S> {
    source: S,
    controller: ViewController,
}

impl<S: CatalogSource> BrowseSession<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            controller: ViewController::new(),
        }
    }

    pub fn controller(&self) -> &ViewController {
        &self.controller
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// 指定ページ（1始まり）を読み込む
    pub async fn open(&mut self, page: u32) -> LoadOutcome {
        let request = self.controller.request_page(page);
        let outcome = self.source.fetch_page(request.page).await;
        self.controller.complete(request, outcome)
    }

    pub async fn reload(&mut self) -> LoadOutcome {
        self.open(self.controller.page()).await
    }

    /// 次ページ。最終ページなら何もしない
    pub async fn next_page(&mut self) -> Option<LoadOutcome> {
        if !self.controller.has_next() {
            return None;
        }
        let next = self.controller.page().checked_add(1)?;
        Some(self.open(next).await)
    }

    /// 前ページ。先頭ページなら何もしない
    pub async fn previous_page(&mut self) -> Option<LoadOutcome> {
        if !self.controller.has_previous() {
            return None;
        }
        let previous = self.controller.page().checked_sub(1)?;
        Some(self.open(previous).await)
    }

    /// 表示中ページのチェック状態を置き換える
    pub fn set_checked_rows(&mut self, checked: Vec<ArtworkId>) {
        self.controller.toggle_all_on_page(checked);
    }

    pub fn bulk_select(&mut self, count: Option<i64>) -> usize {
        self.controller.apply_bulk_select(count)
    }
}
