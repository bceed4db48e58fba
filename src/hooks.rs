use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config;
use crate::content::SectionId;
use crate::dom::{self, DomError};
use crate::scroll_lock::{LockProfile, ScrollLock};

/// Holds a scroll lock on the page body for as long as `active` is true.
/// The lock is dropped by the effect cleanup, which also runs on unmount.
#[hook]
pub fn use_scroll_lock(active: bool, profile: LockProfile) {
    use_effect_with_deps(
        move |active| {
            let lock = if *active {
                match dom::body_style() {
                    Ok(style) => Some(ScrollLock::acquire(style, profile)),
                    Err(e) => {
                        warn!("Cannot lock scroll: {}", e);
                        None
                    }
                }
            } else {
                None
            };

            move || {
                if let Some(lock) = lock {
                    lock.release();
                }
            }
        },
        active,
    );
}

type ObserverCallback = Closure<dyn FnMut(Array, JsValue)>;

/// Tracks which of `sections` was most recently scrolled into the upper band
/// of the viewport.
#[hook]
pub fn use_active_section(sections: &'static [SectionId]) -> SectionId {
    let active = use_state_eq(|| SectionId::Home);

    {
        let active = active.clone();
        use_effect_with_deps(
            move |_| {
                let registration = match observe_sections(sections, active) {
                    Ok(registration) => Some(registration),
                    Err(e) => {
                        warn!("Section observer unavailable: {}", e);
                        None
                    }
                };

                move || {
                    if let Some((observer, _callback)) = registration {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    *active
}

fn observe_sections(
    sections: &'static [SectionId],
    active: UseStateHandle<SectionId>,
) -> Result<(IntersectionObserver, ObserverCallback), DomError> {
    let callback = Closure::wrap(Box::new(move |entries: Array, _observer: JsValue| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if !entry.is_intersecting() {
                continue;
            }
            if let Some(section) = SectionId::from_id(&entry.target().id()) {
                active.set(section);
            }
        }
    }) as Box<dyn FnMut(Array, JsValue)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(config::OBSERVER_ROOT_MARGIN);
    options.set_threshold(&JsValue::from_f64(config::OBSERVER_THRESHOLD));

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

    let document = dom::document()?;
    for section in sections {
        match document.get_element_by_id(section.id()) {
            Some(element) => observer.observe(&element),
            None => debug!("Section #{} not rendered, not observed", section.id()),
        }
    }

    Ok((observer, callback))
}

/// True once the page has scrolled past `threshold` pixels.
#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = dom::window().ok();
                let listener = window.as_ref().map(|window| {
                    let window_clone = window.clone();
                    let callback = Closure::wrap(Box::new(move || {
                        let y = window_clone.scroll_y().unwrap_or(0.0);
                        scrolled.set(y > threshold);
                    }) as Box<dyn FnMut()>);

                    if let Err(e) = window
                        .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())
                    {
                        warn!("Failed to attach scroll listener: {:?}", e);
                    }
                    callback
                });

                move || {
                    if let (Some(window), Some(callback)) = (window, listener) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    *scrolled
}
