use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, EventTarget, HtmlDocument, HtmlInputElement, HtmlTextAreaElement, Window};

fn get_window() -> Option<Window> {
    web_sys::window()
}

fn get_document() -> Option<Document> {
    get_window().and_then(|w| w.document())
}

fn get_html_document() -> Option<HtmlDocument> {
    get_document().and_then(|d|d.dyn_into::<HtmlDocument>().ok())
}

fn get_value_from_input(element: JsValue) -> String {
    if let Some(element) = element.dyn_ref::<HtmlInputElement>() {
        element.value()
    } else if let Some(element) = element.dyn_ref::<HtmlTextAreaElement>() {
        element.value()
    } else {
        "".to_string()
    }
}

pub fn get_value_from_target(target: Option<EventTarget>) -> String {
    target.map(|target| get_value_from_input(JsValue::from(target))).unwrap_or_default()
}

pub fn get_cookie_string() -> Option<String> {
    get_html_document().and_then(|d| d.cookie().ok())
}

pub fn get_text_by_id(id: &str) -> Option<String> {
    get_document()
        .and_then(|d| d.get_element_by_id(id))
        .and_then(|element| element.text_content())
}
