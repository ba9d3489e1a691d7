//! Small DOM helpers shared by both pages.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, MouseEvent, window};

pub(crate) fn document() -> Result<Document, JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    win.document().ok_or_else(|| JsValue::from_str("no document"))
}

pub(crate) fn element_by_id(doc: &Document, id: &str) -> Result<Element, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing element #{id}")))
}

/// Replaces the display contents with a heading line and the wish text.
/// Text is set through `textContent`; catalog strings never reach `innerHTML`.
pub(crate) fn render_wish(
    doc: &Document,
    display: &Element,
    heading: &str,
    text: &str,
) -> Result<(), JsValue> {
    let wish = doc.create_element("div")?;
    wish.set_class_name("wish-text");
    let label = doc.create_element("span")?;
    label.set_class_name("wish-age");
    label.set_text_content(Some(heading));
    let body = doc.create_element("span")?;
    body.set_class_name("wish-body");
    body.set_text_content(Some(text));
    wish.append_child(&label)?;
    wish.append_child(&body)?;

    display.set_inner_html("");
    display.append_child(&wish)?;
    Ok(())
}

pub(crate) fn render_error(
    doc: &Document,
    display: &Element,
    message: &str,
) -> Result<(), JsValue> {
    let el = doc.create_element("div")?;
    el.set_class_name("wish-text error-message");
    el.set_text_content(Some(message));
    display.set_inner_html("");
    display.append_child(&el)?;
    Ok(())
}

/// Attaches a click handler for the lifetime of the page.
pub(crate) fn on_click(
    target: &Element,
    mut handler: impl FnMut() + 'static,
) -> Result<(), JsValue> {
    let closure = Closure::wrap(Box::new(move |_e: MouseEvent| handler()) as Box<dyn FnMut(_)>);
    target.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
