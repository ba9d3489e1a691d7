//! Birthday Wishes core crate.
//!
//! Two pages share one engine: the wish catalog resolves an age to its list of
//! greetings (exact age, then narrowest age range, then `default`), and the
//! envelope session tracks which of a fixed pool of envelopes have been opened.
//! The `page` module wires both into the DOM; everything else is plain Rust and
//! runs natively under `cargo test`.

use wasm_bindgen::prelude::*;

mod logging;

pub mod catalog;
pub mod config;
pub mod error;
pub mod greeting;
pub mod page;
pub mod rng;
pub mod session;

pub use catalog::{AgeRange, Catalog, CatalogKey, ResolvedWishList, WishSource};
pub use config::WishConfig;
pub use error::{WishError, WishResult};
pub use greeting::{AgeGreeting, share_text};
pub use rng::{EntropySource, IndexSource, SeededSource, draw_avoiding};
pub use session::{DEFAULT_ENVELOPES, EnvelopeSession, Reveal, SlotState};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
