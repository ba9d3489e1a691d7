//! Browser front-end for both page variants.
//!
//! Each page keeps its state in a `thread_local!` slot that event closures
//! borrow one at a time; the catalog arrives asynchronously after start-up and
//! actions taken before then render a "still loading" message instead.
//!
//! Expected markup:
//! - wish page: `#age-input`, `#wish-btn`, `#new-wish-btn`, `#wish-display`
//! - envelope page: `#envelopes`, `#random-btn`, `#next-btn`, `#reset-btn`,
//!   `#wish-display`, `#completion`

use wasm_bindgen::JsValue;

use crate::config::WishConfig;

mod dom;
mod envelope_page;
mod fetch;
mod wish_page;

pub use envelope_page::start_envelope_page;
pub use fetch::load_catalog;
pub use wish_page::{current_share_text, start_wish_page};

fn page_config(config_json: Option<String>) -> Result<WishConfig, JsValue> {
    match config_json {
        Some(json) => Ok(WishConfig::from_json(&json)?),
        None => Ok(WishConfig::default()),
    }
}
