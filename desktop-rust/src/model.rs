use artic_common::{FetchError, PageRequest, PageResult};

/// ワーカースレッドからUIスレッドへの通知
pub enum UiMessage {
    PageLoaded {
        request: PageRequest,
        outcome: Result<PageResult, FetchError>,
    },
}

/// 「Select Rows」ポップアップの状態
#[derive(Debug, Clone, Default)]
pub struct BulkSelectState {
    pub open: bool,
    pub count: i64,
}
