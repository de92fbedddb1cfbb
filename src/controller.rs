//! Theme preference controller.
//!
//! Reads the persisted preference once at page load, mirrors it onto the
//! document, and advances it on each activation of the toggle control.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here fails from the caller's point of view. A store read error
//! resolves like an absent value, a store write error still updates the
//! page, and DOM write errors are logged and skipped.

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

use crate::consts::STORAGE_KEY;
use crate::host::{PreferenceStore, ThemeDocument};
use crate::theme::Theme;

/// Outcome of [`ThemeController::claim_toggle`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Binding {
    /// The page has no toggle control; the theme cannot change.
    NoControl,
    /// The control already has a click handler.
    AlreadyBound,
    /// The control was unhandled and is now marked; the caller must attach
    /// the click handler.
    Claimed,
}

/// Owns the injected store and document for one page.
#[derive(Debug)]
pub struct ThemeController<S, D> {
    store: S,
    document: D,
}

impl<S: PreferenceStore, D: ThemeDocument> ThemeController<S, D> {
    pub fn new(store: S, document: D) -> Self {
        Self { store, document }
    }

    /// Resolve the persisted preference and apply it.
    pub fn initialize(&mut self) -> Theme {
        let stored = match self.store.get(STORAGE_KEY) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("theme: reading preference failed, using auto: {e}");
                None
            }
        };
        let theme = Theme::resolve(stored.as_deref());
        log::debug!("theme: initialized to {theme} (stored {stored:?})");
        self.apply_theme(theme);
        theme
    }

    /// Mirror `theme` onto the root element and the toggle control.
    pub fn apply_theme(&mut self, theme: Theme) {
        if let Err(e) = self.document.set_root_theme(theme) {
            log::warn!("theme: setting root attribute failed: {e}");
        }
        if !self.document.has_toggle() {
            return;
        }
        if let Err(e) = self.document.set_toggle_pressed(theme) {
            log::warn!("theme: setting pressed state failed: {e}");
        }
    }

    /// Advance the cycle from the theme currently on the document, persist
    /// it, and apply it.
    ///
    /// `auto` is persisted verbatim. On reload the stored `"auto"` is not a
    /// recognized preference and resolves to `auto` by fallback.
    pub fn on_toggle_activated(&mut self) -> Theme {
        let current = Theme::resolve(self.document.root_theme().as_deref());
        let next = current.next();
        if let Err(e) = self.store.set(STORAGE_KEY, next.as_str()) {
            log::warn!("theme: persisting {next} failed: {e}");
        }
        log::debug!("theme: toggled {current} -> {next}");
        self.apply_theme(next);
        next
    }

    /// Decide whether the current toggle control needs a click handler.
    ///
    /// Binding is tracked on the control itself, so a control replaced by a
    /// fresh element is claimed again while one that is already handled is
    /// left alone.
    pub fn claim_toggle(&mut self) -> Binding {
        if !self.document.has_toggle() {
            return Binding::NoControl;
        }
        if self.document.toggle_bound() {
            return Binding::AlreadyBound;
        }
        if let Err(e) = self.document.mark_toggle_bound() {
            log::warn!("theme: marking toggle failed: {e}");
        }
        Binding::Claimed
    }

    /// Theme currently mirrored on the document.
    pub fn current(&self) -> Theme {
        Theme::resolve(self.document.root_theme().as_deref())
    }

    pub fn has_toggle(&self) -> bool {
        self.document.has_toggle()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn document(&self) -> &D {
        &self.document
    }
}
