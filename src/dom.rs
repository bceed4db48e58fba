use log::{debug, warn};
use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CssStyleDeclaration, Document, HtmlElement, ScrollBehavior, ScrollToOptions, Window};

use crate::config;
use crate::content::SectionId;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("no global window")]
    NoWindow,

    #[error("window has no document")]
    NoDocument,

    #[error("document has no body")]
    NoBody,

    #[error("no element with id `{0}`")]
    MissingElement(String),

    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(format!("{:?}", value))
    }
}

pub type Result<T> = std::result::Result<T, DomError>;

pub fn window() -> Result<Window> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn body() -> Result<HtmlElement> {
    document()?.body().ok_or(DomError::NoBody)
}

pub fn body_style() -> Result<CssStyleDeclaration> {
    Ok(body()?.style())
}

/// Document-relative scroll offset that leaves `offset` pixels between the
/// viewport top and the element. Both tops are viewport-relative rect values.
pub fn scroll_target(element_top: f64, body_top: f64, offset: f64) -> f64 {
    element_top - body_top - offset
}

pub fn scroll_to_section(section: SectionId) -> Result<()> {
    let window = window()?;
    let document = window.document().ok_or(DomError::NoDocument)?;
    let element = document
        .get_element_by_id(section.id())
        .ok_or_else(|| DomError::MissingElement(section.id().to_string()))?;
    let body = document.body().ok_or(DomError::NoBody)?;

    let top = scroll_target(
        element.get_bounding_client_rect().top(),
        body.get_bounding_client_rect().top(),
        config::NAV_SCROLL_OFFSET,
    );
    debug!("Scrolling to #{} at {}", section.id(), top);

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

/// Scrolls on the next animation frame so that state changes made by the
/// caller (closing the mobile menu and releasing its lock) land first.
pub fn scroll_next_frame(section: SectionId) {
    let result = window().and_then(|window| {
        let callback = Closure::once_into_js(move || {
            if let Err(e) = scroll_to_section(section) {
                warn!("Scroll to #{} failed: {}", section.id(), e);
            }
        });
        window
            .request_animation_frame(callback.unchecked_ref())
            .map(|_| ())
            .map_err(DomError::from)
    });

    if let Err(e) = result {
        warn!("Could not schedule scroll to #{}: {}", section.id(), e);
    }
}

/// Immediate variant for call sites that have nothing to settle first.
pub fn scroll_now(section: SectionId) {
    if let Err(e) = scroll_to_section(section) {
        warn!("Scroll to #{} failed: {}", section.id(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_subtracts_offset_from_document_position() {
        // body scrolled 300px down, element 500px below the viewport top
        assert_eq!(scroll_target(500.0, -300.0, 80.0), 720.0);
    }

    #[test]
    fn target_at_page_top() {
        assert_eq!(scroll_target(0.0, 0.0, config::NAV_SCROLL_OFFSET), -80.0);
    }

    #[test]
    fn target_is_independent_of_current_scroll() {
        // the same element seen from two scroll positions maps to one target
        let before = scroll_target(1200.0, 0.0, 80.0);
        let after = scroll_target(1200.0 - 450.0, -450.0, 80.0);
        assert_eq!(before, after);
    }

    #[test]
    fn error_messages_name_the_element() {
        let err = DomError::MissingElement("contact".into());
        assert_eq!(err.to_string(), "no element with id `contact`");
    }
}
