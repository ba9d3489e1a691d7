//! Themed 24th-birthday page: a grid of envelopes, each hiding one wish.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element};

use super::dom::{document, element_by_id, on_click, render_error, render_wish};
use super::fetch::load_catalog;
use super::page_config;
use crate::catalog::Catalog;
use crate::config::WishConfig;
use crate::error::WishResult;
use crate::logging::{log_error, log_warn};
use crate::rng::EntropySource;
use crate::session::{EnvelopeSession, Reveal};

const ENVELOPE_CLASS: &str = "envelope";
const OPENED_CLASS: &str = "envelope opened";
const COMPLETION_HIDDEN: &str = "completion";
const COMPLETION_VISIBLE: &str = "completion visible";

struct EnvelopePage {
    config: WishConfig,
    session: Option<EnvelopeSession>,
    rng: EntropySource,
    doc: Document,
    display: Element,
    completion: Element,
    envelopes: Vec<Element>,
}

thread_local! {
    static ENVELOPE_PAGE: std::cell::RefCell<Option<EnvelopePage>> =
        const { std::cell::RefCell::new(None) };
}

fn with_page(action: impl FnOnce(&mut EnvelopePage) -> Result<(), JsValue>) {
    ENVELOPE_PAGE.with(|cell| {
        if let Some(page) = cell.borrow_mut().as_mut() {
            if let Err(err) = action(page) {
                log_error!("envelope page action failed: {err:?}");
            }
        }
    });
}

/// Resolves the envelope wishes, falling back to placeholder wishes when the
/// catalog has neither a match nor a default.
fn build_session(config: &WishConfig, catalog: &Catalog) -> WishResult<EnvelopeSession> {
    let wishes = catalog.resolve(config.envelope_age).or_else(|err| {
        log_warn!("{err}; filling envelopes with fallback wishes");
        Catalog::fallback(config.fallback_wish_count).resolve(config.envelope_age)
    })?;
    Ok(EnvelopeSession::new(config.envelope_count, wishes))
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

impl EnvelopePage {
    fn apply(
        &mut self,
        op: impl FnOnce(&mut EnvelopeSession, &mut EntropySource) -> WishResult<Reveal>,
    ) -> Result<(), JsValue> {
        let Some(session) = self.session.as_mut() else {
            return render_error(
                &self.doc,
                &self.display,
                "The envelopes are still being sealed, try again in a moment.",
            );
        };
        let reveal = op(session, &mut self.rng)?;
        self.show(&reveal)
    }

    fn show(&self, reveal: &Reveal) -> Result<(), JsValue> {
        if let Some(envelope) = self.envelopes.get(reveal.index) {
            envelope.set_class_name(OPENED_CLASS);
        }
        render_wish(
            &self.doc,
            &self.display,
            &format!("Envelope #{}", reveal.index + 1),
            &reveal.message,
        )?;
        if reveal.completed {
            self.completion.set_text_content(Some(&format!(
                "All {} envelopes are open. Happy {} birthday!",
                self.envelopes.len(),
                ordinal(self.config.envelope_age)
            )));
            self.completion.set_class_name(COMPLETION_VISIBLE);
        }
        Ok(())
    }

    fn reset(&mut self) -> Result<(), JsValue> {
        if let Some(session) = self.session.as_mut() {
            session.reset();
        }
        for envelope in &self.envelopes {
            envelope.set_class_name(ENVELOPE_CLASS);
        }
        self.display.set_inner_html("");
        self.completion.set_text_content(None);
        self.completion.set_class_name(COMPLETION_HIDDEN);
        Ok(())
    }
}

/// Builds the envelope grid inside `#envelopes`, binds `#random-btn`,
/// `#next-btn` and `#reset-btn`, then starts loading the catalog.
#[wasm_bindgen]
pub fn start_envelope_page(config_json: Option<String>) -> Result<(), JsValue> {
    let config = page_config(config_json)?;
    let doc = document()?;
    let container = element_by_id(&doc, "envelopes")?;
    let display = element_by_id(&doc, "wish-display")?;
    let completion = element_by_id(&doc, "completion")?;
    completion.set_class_name(COMPLETION_HIDDEN);

    container.set_inner_html("");
    let mut envelopes = Vec::with_capacity(config.envelope_count);
    for index in 0..config.envelope_count {
        let el = doc.create_element("div")?;
        el.set_class_name(ENVELOPE_CLASS);
        el.set_attribute("data-index", &index.to_string())?;
        el.set_text_content(Some(&(index + 1).to_string()));
        container.append_child(&el)?;
        on_click(&el, move || with_page(|page| page.apply(|s, _| s.reveal(index))))?;
        envelopes.push(el);
    }

    let random_btn = element_by_id(&doc, "random-btn")?;
    let next_btn = element_by_id(&doc, "next-btn")?;
    let reset_btn = element_by_id(&doc, "reset-btn")?;
    on_click(&random_btn, || with_page(|page| page.apply(|s, rng| s.reveal_random(rng))))?;
    on_click(&next_btn, || with_page(|page| page.apply(|s, _| s.advance_next())))?;
    on_click(&reset_btn, || with_page(EnvelopePage::reset))?;

    let url = config.catalog_url.clone();
    let fallback_count = config.fallback_wish_count;
    ENVELOPE_PAGE.with(|cell| {
        *cell.borrow_mut() = Some(EnvelopePage {
            config,
            session: None,
            rng: EntropySource::new(),
            doc,
            display,
            completion,
            envelopes,
        });
    });

    spawn_local(async move {
        let catalog = load_catalog(&url, fallback_count).await;
        with_page(|page| match build_session(&page.config, &catalog) {
            Ok(session) => {
                page.session = Some(session);
                Ok(())
            }
            Err(err) => render_error(&page.doc, &page.display, &err.to_string()),
        });
    });
    Ok(())
}
