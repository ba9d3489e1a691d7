// Browser-only checks, run with `wasm-pack test --headless --firefox`.
#![cfg(target_arch = "wasm32")]

use birthday_wishes::{Catalog, EntropySource, EnvelopeSession, IndexSource};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn browser_entropy_in_range() {
    let mut rng = EntropySource::new();
    for len in 1..64 {
        assert!(rng.next_index(len) < len);
    }
}

#[wasm_bindgen_test]
fn envelopes_work_in_browser() {
    let mut session = EnvelopeSession::new(24, Catalog::fallback(24).resolve(24).unwrap());
    let mut rng = EntropySource::new();
    let first = session.reveal_random(&mut rng).unwrap();
    let second = session.reveal_random(&mut rng).unwrap();
    assert_ne!(first.index, second.index);
}

#[wasm_bindgen_test]
async fn missing_catalog_loads_fallback_wishes() {
    let catalog = birthday_wishes::page::load_catalog("does-not-exist.json", 24).await;
    assert_eq!(catalog, Catalog::fallback(24));
    assert_eq!(catalog.resolve(24).unwrap().len(), 24);
}

#[wasm_bindgen_test]
fn page_start_without_markup_errors() {
    assert!(birthday_wishes::page::start_wish_page(None).is_err());
}
