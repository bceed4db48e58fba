//! Page scroll locking as a scoped resource.
//!
//! A [`ScrollLock`] snapshots the inline style properties it is about to
//! override and writes the snapshot back when dropped. Dropping happens on
//! every exit path (effect cleanup, unmount, early release), so the page can
//! never be left unscrollable by an overlay that went away.
//!
//! Overlapping locks restore correctly only when released in reverse order
//! of acquisition. The menu and the project modal rely on stacking for
//! this: the modal (z-index 150) covers the burger button (z-index 130), so
//! the menu lock cannot be released while the modal lock is held. Keep the
//! modal above the nav bar if either z-index changes.

use log::{debug, warn};
use web_sys::CssStyleDeclaration;

/// Something with inline style properties, normally `document.body.style`.
pub trait StyleTarget {
    fn get(&self, property: &str) -> String;
    fn set(&self, property: &str, value: &str);
}

impl StyleTarget for CssStyleDeclaration {
    fn get(&self, property: &str) -> String {
        self.get_property_value(property).unwrap_or_default()
    }

    fn set(&self, property: &str, value: &str) {
        let result = if value.is_empty() {
            self.remove_property(property).map(|_| ())
        } else {
            self.set_property(property, value)
        };
        if let Err(e) = result {
            warn!("Failed to set style {}: {:?}", property, e);
        }
    }
}

/// Property values written while the lock is held.
pub type LockProfile = &'static [(&'static str, &'static str)];

/// Full-screen menu: pins the page in place as well as hiding overflow.
pub const MENU_LOCK: LockProfile = &[
    ("overflow", "hidden"),
    ("position", "fixed"),
    ("width", "100%"),
];

pub const MODAL_LOCK: LockProfile = &[("overflow", "hidden")];

#[must_use = "the page unlocks as soon as the guard is dropped"]
pub struct ScrollLock<T: StyleTarget> {
    target: T,
    saved: Vec<(&'static str, String)>,
}

impl<T: StyleTarget> ScrollLock<T> {
    pub fn acquire(target: T, profile: LockProfile) -> Self {
        let saved = profile
            .iter()
            .map(|(property, _)| (*property, target.get(property)))
            .collect();
        for (property, value) in profile {
            target.set(property, value);
        }
        debug!("Scroll lock acquired ({} properties)", profile.len());
        ScrollLock { target, saved }
    }

    pub fn release(self) {
        drop(self);
    }
}

impl<T: StyleTarget> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        for (property, value) in self.saved.iter().rev() {
            self.target.set(property, value);
        }
        debug!("Scroll lock released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    #[derive(Clone, Default)]
    struct FakeStyle(Rc<RefCell<HashMap<String, String>>>);

    impl FakeStyle {
        fn snapshot(&self) -> HashMap<String, String> {
            self.0.borrow().clone()
        }
    }

    impl StyleTarget for FakeStyle {
        fn get(&self, property: &str) -> String {
            self.0.borrow().get(property).cloned().unwrap_or_default()
        }

        fn set(&self, property: &str, value: &str) {
            let mut map = self.0.borrow_mut();
            if value.is_empty() {
                map.remove(property);
            } else {
                map.insert(property.to_string(), value.to_string());
            }
        }
    }

    #[test]
    fn lock_applies_profile() {
        let style = FakeStyle::default();
        let _lock = ScrollLock::acquire(style.clone(), MENU_LOCK);
        assert_eq!(style.get("overflow"), "hidden");
        assert_eq!(style.get("position"), "fixed");
        assert_eq!(style.get("width"), "100%");
    }

    #[test]
    fn drop_restores_unset_properties() {
        let style = FakeStyle::default();
        let before = style.snapshot();
        {
            let _lock = ScrollLock::acquire(style.clone(), MENU_LOCK);
        }
        assert_eq!(style.snapshot(), before);
    }

    #[test]
    fn drop_restores_preexisting_values() {
        let style = FakeStyle::default();
        style.set("overflow", "auto");
        style.set("width", "50%");
        let before = style.snapshot();

        let lock = ScrollLock::acquire(style.clone(), MENU_LOCK);
        assert_eq!(style.get("width"), "100%");
        lock.release();

        assert_eq!(style.snapshot(), before);
    }

    #[test]
    fn nested_locks_unwind_to_original_state() {
        let style = FakeStyle::default();
        let before = style.snapshot();

        let menu = ScrollLock::acquire(style.clone(), MENU_LOCK);
        let modal = ScrollLock::acquire(style.clone(), MODAL_LOCK);
        drop(modal);
        assert_eq!(style.get("overflow"), "hidden");
        assert_eq!(style.get("position"), "fixed");
        drop(menu);

        assert_eq!(style.snapshot(), before);
    }

    #[test]
    fn repeated_cycles_are_idempotent() {
        let style = FakeStyle::default();
        style.set("overflow", "scroll");
        let before = style.snapshot();
        for _ in 0..5 {
            let _lock = ScrollLock::acquire(style.clone(), MODAL_LOCK);
        }
        assert_eq!(style.snapshot(), before);
    }

    #[test]
    fn unwinding_still_restores() {
        let style = FakeStyle::default();
        let inner = style.clone();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _lock = ScrollLock::acquire(inner, MENU_LOCK);
            panic!("teardown interrupted");
        }));
        assert!(result.is_err());
        assert!(style.snapshot().is_empty());
    }
}
