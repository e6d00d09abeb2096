//! カタログAPI連携（fetch API）

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};
use artic_common::{page_url, parse_page_response, FetchError, PageResult, ARTWORKS_ENDPOINT};

/// JsValueのエラーをFetchErrorに変換
fn network_error(value: JsValue) -> FetchError {
    FetchError::Network(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
}

/// 1ページ分の作品一覧を取得
pub async fn fetch_page(page: u32) -> Result<PageResult, FetchError> {
    let url = page_url(ARTWORKS_ENDPOINT, page);

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(&url, &opts).map_err(network_error)?;

    let window = web_sys::window()
        .ok_or_else(|| FetchError::Network("window is not available".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(network_error)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| FetchError::Decode("fetch did not return a Response".to_string()))?;

    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }

    let text = JsFuture::from(resp.text().map_err(network_error)?)
        .await
        .map_err(network_error)?;
    let body = text
        .as_string()
        .ok_or_else(|| FetchError::Decode("response body is not text".to_string()))?;

    parse_page_response(&body)
}
