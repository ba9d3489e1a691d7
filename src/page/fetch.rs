//! Catalog loading over `fetch`, degrading to the built-in fallback catalog.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, window};

use crate::catalog::Catalog;
use crate::logging::{log_info, log_warn};

async fn fetch_text(url: &str) -> Result<String, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp: Response = JsFuture::from(win.fetch_with_str(url)).await?.dyn_into()?;
    if !resp.ok() {
        return Err(JsValue::from_str(&format!("HTTP {} for {url}", resp.status())));
    }
    let body = JsFuture::from(resp.text()?).await?;
    body.as_string()
        .ok_or_else(|| JsValue::from_str("response body is not text"))
}

/// Fetches and parses the catalog at `url`. Any failure is logged and replaced
/// by [`Catalog::fallback`]; there are no retries.
pub async fn load_catalog(url: &str, fallback_count: usize) -> Catalog {
    let fetched = fetch_text(url).await.map_err(|err| format!("{err:?}"));
    catalog_or_fallback(url, fetched, fallback_count)
}

/// Parses a fetched document, substituting the fallback catalog when the fetch
/// failed or the document is malformed.
fn catalog_or_fallback(
    url: &str,
    fetched: Result<String, String>,
    fallback_count: usize,
) -> Catalog {
    let parsed = fetched.and_then(|text| Catalog::from_json(&text).map_err(|e| e.to_string()));
    match parsed {
        Ok(catalog) => {
            log_info!("loaded {} catalog keys from {url}", catalog.len());
            catalog
        }
        Err(err) => {
            log_warn!("unable to load wishes from {url} ({err}), using fallback wishes");
            Catalog::fallback(fallback_count)
        }
    }
}
