//! Age-based wish page: type an age, get a wish, ask for another.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, HtmlInputElement, KeyboardEvent};

use super::dom::{document, element_by_id, on_click, render_error, render_wish};
use super::fetch::load_catalog;
use super::page_config;
use crate::catalog::Catalog;
use crate::config::WishConfig;
use crate::greeting::AgeGreeting;
use crate::logging::{log_error, log_warn};
use crate::rng::EntropySource;

struct WishPage {
    config: WishConfig,
    // None until the fetch settles
    catalog: Option<Catalog>,
    greeting: Option<AgeGreeting>,
    rng: EntropySource,
    doc: Document,
    input: HtmlInputElement,
    display: Element,
    new_wish_btn: Element,
}

thread_local! {
    static WISH_PAGE: std::cell::RefCell<Option<WishPage>> =
        const { std::cell::RefCell::new(None) };
}

fn with_page(action: impl FnOnce(&mut WishPage) -> Result<(), JsValue>) {
    WISH_PAGE.with(|cell| {
        if let Some(page) = cell.borrow_mut().as_mut() {
            if let Err(err) = action(page) {
                log_error!("wish page action failed: {err:?}");
            }
        }
    });
}

impl WishPage {
    fn get_wish(&mut self) -> Result<(), JsValue> {
        let age = match self.config.parse_age(&self.input.value()) {
            Ok(age) => age,
            Err(err) => return self.show_error(&err.to_string()),
        };
        let Some(catalog) = self.catalog.as_ref() else {
            return self.show_error("Birthday wishes are still loading, try again in a moment.");
        };
        let wishes = match catalog.resolve(age) {
            Ok(wishes) => wishes,
            Err(err) => return self.show_error(&err.to_string()),
        };

        let mut greeting = AgeGreeting::new(wishes);
        let wish = greeting.draw(&mut self.rng).to_owned();
        self.greeting = Some(greeting);
        render_wish(&self.doc, &self.display, &format!("{age} Years"), &wish)?;
        self.new_wish_btn.remove_attribute("disabled")?;
        Ok(())
    }

    fn new_wish(&mut self) -> Result<(), JsValue> {
        let Some(greeting) = self.greeting.as_mut() else {
            return self.show_error("Please get a wish first by entering your age");
        };
        let age = greeting.age();
        let wish = greeting.draw(&mut self.rng).to_owned();
        render_wish(&self.doc, &self.display, &format!("{age} Years"), &wish)
    }

    fn show_error(&self, message: &str) -> Result<(), JsValue> {
        log_warn!("{message}");
        render_error(&self.doc, &self.display, message)
    }
}

/// Binds the wish page to `#age-input`, `#wish-btn`, `#new-wish-btn` and
/// `#wish-display`, then starts loading the catalog.
#[wasm_bindgen]
pub fn start_wish_page(config_json: Option<String>) -> Result<(), JsValue> {
    let config = page_config(config_json)?;
    let doc = document()?;
    let input: HtmlInputElement = element_by_id(&doc, "age-input")?.dyn_into()?;
    let display = element_by_id(&doc, "wish-display")?;
    let wish_btn = element_by_id(&doc, "wish-btn")?;
    let new_wish_btn = element_by_id(&doc, "new-wish-btn")?;
    new_wish_btn.set_attribute("disabled", "")?;

    let url = config.catalog_url.clone();
    let fallback_count = config.fallback_wish_count;
    WISH_PAGE.with(|cell| {
        *cell.borrow_mut() = Some(WishPage {
            config,
            catalog: None,
            greeting: None,
            rng: EntropySource::new(),
            doc,
            input: input.clone(),
            display,
            new_wish_btn: new_wish_btn.clone(),
        });
    });

    on_click(&wish_btn, || with_page(WishPage::get_wish))?;
    on_click(&new_wish_btn, || with_page(WishPage::new_wish))?;
    {
        let closure = Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                with_page(WishPage::get_wish);
            }
        }) as Box<dyn FnMut(_)>);
        input.add_event_listener_with_callback("keypress", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    input.focus()?;

    spawn_local(async move {
        let catalog = load_catalog(&url, fallback_count).await;
        WISH_PAGE.with(|cell| {
            if let Some(page) = cell.borrow_mut().as_mut() {
                page.catalog = Some(catalog);
            }
        });
    });
    Ok(())
}

/// Share string for the wish currently on screen, for the JS share / clipboard
/// layer. `undefined` until a wish has been drawn.
#[wasm_bindgen]
pub fn current_share_text() -> Option<String> {
    WISH_PAGE.with(|cell| {
        cell.borrow()
            .as_ref()
            .and_then(|page| page.greeting.as_ref())
            .and_then(AgeGreeting::share_text)
    })
}
