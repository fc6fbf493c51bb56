use web_sys as web;

/// Element carrying the active demo's key help.
const HINT_ID: &str = "hint";

fn hint(document: &web::Document) -> Option<web::Element> {
    document.get_element_by_id(HINT_ID)
}

/// Flip the hint's `hidden` attribute. Returns whether the hint is now shown.
pub fn toggle(document: &web::Document) -> bool {
    hint(document)
        .and_then(|el| el.toggle_attribute("hidden").ok())
        .map(|hidden| !hidden)
        .unwrap_or(false)
}

pub fn set_text(document: &web::Document, text: &str) {
    if let Some(el) = hint(document) {
        el.set_text_content(Some(text));
    }
}
