//! ページ表示コントローラ
//!
//! 状態遷移: Idle / Loaded / Failed → Loading → Loaded | Failed
//!
//! 取得処理そのものは各シェルが行う。コントローラは `PageRequest`（ページ番号と世代番号）
//! を発行し、完了時に `complete` で結果を受け取る。世代が古い結果は破棄する。

use tracing::{debug, warn};
use crate::error::FetchError;
use crate::layout::ROWS_PER_PAGE;
use crate::selection::SelectionSet;
use crate::types::{ArtworkId, ArtworkRecord, PageResult};

/// 読み込み状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

impl LoadState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoadState::Idle => "idle",
            LoadState::Loading => "loading",
            LoadState::Loaded => "loaded",
            LoadState::Failed => "failed",
        }
    }
}

/// 取得依頼チケット
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub generation: u64,
}

/// `complete` の結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    /// より新しい依頼があるため破棄した
    Stale,
}

/// ページ表示状態と選択状態を持つコントローラ
#[derive(Debug, Clone)]
pub struct ViewController {
    page: u32,
    state: LoadState,
    generation: u64,
    artworks: Vec<ArtworkRecord>,
    total_records: u64,
    total_pages: u32,
    selection: SelectionSet,
    last_error: Option<String>,
}

impl ViewController {
    pub fn new() -> Self {
        Self {
            page: 1,
            state: LoadState::Idle,
            generation: 0,
            artworks: Vec::new(),
            total_records: 0,
            total_pages: 0,
            selection: SelectionSet::new(),
            last_error: None,
        }
    }

    /// 初回表示時の読み込み
    pub fn mount(&mut self) -> PageRequest {
        self.request_page(self.page)
    }

    /// 1始まりのページ番号で読み込みを開始する
    pub fn request_page(&mut self, page: u32) -> PageRequest {
        self.page = page.max(1);
        self.generation += 1;
        self.state = LoadState::Loading;
        debug!(page = self.page, generation = self.generation, "page load started");
        PageRequest {
            page: self.page,
            generation: self.generation,
        }
    }

    /// ページャの0始まりのページ番号から読み込みを開始する
    pub fn on_page_turn(&mut self, zero_based: u32) -> PageRequest {
        self.request_page(zero_based.saturating_add(1))
    }

    /// 取得結果を反映する
    pub fn complete(
        &mut self,
        request: PageRequest,
        outcome: std::result::Result<PageResult, FetchError>,
    ) -> LoadOutcome {
        if request.generation != self.generation {
            debug!(
                page = request.page,
                generation = request.generation,
                latest = self.generation,
                "discarding stale page response"
            );
            return LoadOutcome::Stale;
        }

        match outcome {
            Ok(result) => {
                self.artworks = result.rows;
                self.total_records = result.total;
                self.total_pages = result.total_pages;
                self.state = LoadState::Loaded;
                self.last_error = None;
                debug!(page = request.page, rows = self.artworks.len(), "page loaded");
                LoadOutcome::Applied
            }
            Err(err) => {
                // 前回のデータは表示したまま残す
                warn!(page = request.page, error = %err, "page load failed");
                self.state = LoadState::Failed;
                self.last_error = Some(err.to_string());
                LoadOutcome::Failed
            }
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    pub fn artworks(&self) -> &[ArtworkRecord] {
        &self.artworks
    }

    pub fn total_records(&self) -> u64 {
        self.total_records
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    /// ページャ用の先頭レコード位置（0始まり）
    pub fn first_record_index(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(ROWS_PER_PAGE)
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// 総ページ数が未取得の場合も、ページ番号の上限では次ページなし
    pub fn has_next(&self) -> bool {
        self.page < u32::MAX && (self.total_pages == 0 || self.page < self.total_pages)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// 表示中ページのうち選択済みの行
    pub fn current_page_selection(&self) -> Vec<&ArtworkRecord> {
        self.artworks
            .iter()
            .filter(|a| self.selection.is_selected(a.id))
            .collect()
    }

    pub fn is_row_checked(&self, id: ArtworkId) -> bool {
        self.selection.is_selected(id)
    }

    /// 表示中ページのチェック状態を `checked` に置き換える
    ///
    /// 表示中ページに無いIDは無視する。
    pub fn toggle_all_on_page<I>(&mut self, checked: I)
    where
        I: IntoIterator<Item = ArtworkId>,
    {
        let page_ids: Vec<ArtworkId> = self.artworks.iter().map(|a| a.id).collect();
        let checked: Vec<ArtworkId> = checked
            .into_iter()
            .filter(|id| page_ids.contains(id))
            .collect();
        self.selection.toggle_all_on_page(page_ids, checked);
    }

    /// 1行分のチェックを反転する
    pub fn toggle_row(&mut self, id: ArtworkId) {
        let mut checked: Vec<ArtworkId> = self
            .current_page_selection()
            .iter()
            .map(|a| a.id)
            .collect();
        if let Some(pos) = checked.iter().position(|c| *c == id) {
            checked.remove(pos);
        } else {
            checked.push(id);
        }
        self.toggle_all_on_page(checked);
    }

    /// ヘッダのチェックボックス（全選択 / 全解除）
    pub fn set_page_checked(&mut self, checked: bool) {
        let ids: Vec<ArtworkId> = if checked {
            self.artworks.iter().map(|a| a.id).collect()
        } else {
            Vec::new()
        };
        self.toggle_all_on_page(ids);
    }

    pub fn is_page_fully_checked(&self) -> bool {
        !self.artworks.is_empty()
            && self.artworks.iter().all(|a| self.selection.is_selected(a.id))
    }

    /// 表示中ページの先頭 `count` 行を選択に追加する
    pub fn apply_bulk_select(&mut self, count: Option<i64>) -> usize {
        let added = self.selection.apply_bulk_select(&self.artworks, count);
        debug!(?count, added, total = self.selection.len(), "bulk select applied");
        added
    }
}

impl Default for ViewController {
    fn default() -> Self {
        Self::new()
    }
}
