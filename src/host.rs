//! Injected seams for the two ambient resources the controller touches.
//!
//! DESIGN
//! ======
//! The browser's `localStorage` and `document` are global mutable state.
//! The controller only sees them through [`PreferenceStore`] and
//! [`ThemeDocument`], so tests (and a page with storage disabled) can swap
//! in the in-memory versions defined here.

#[cfg(test)]
#[path = "host_test.rs"]
mod host_test;

use std::collections::HashMap;

use crate::theme::Theme;

/// Failures reported by a host resource.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("storage unavailable")]
    StorageUnavailable,
    #[error("storage error: {0}")]
    Storage(String),
    #[error("dom error: {0}")]
    Dom(String),
}

/// Synchronous string key-value store scoped to the page origin.
pub trait PreferenceStore {
    /// Read the value for `key`, `None` when unset.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the backing store rejects the read.
    fn get(&self, key: &str) -> Result<Option<String>, HostError>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`HostError`] if the backing store rejects the write
    /// (quota, disabled storage).
    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError>;
}

/// The slice of the document the controller reads and writes.
pub trait ThemeDocument {
    /// Current value of the theme attribute on the root element.
    fn root_theme(&self) -> Option<String>;

    /// Set the theme attribute on the root element.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Dom`] if the attribute cannot be written.
    fn set_root_theme(&mut self, theme: Theme) -> Result<(), HostError>;

    /// Whether the optional toggle control is present.
    fn has_toggle(&self) -> bool;

    /// Set the control's pressed indicator for `theme`. A no-op when the
    /// control is absent.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Dom`] if the attribute cannot be written.
    fn set_toggle_pressed(&mut self, theme: Theme) -> Result<(), HostError>;

    /// Whether the current control already has a click handler. `false`
    /// when the control is absent.
    fn toggle_bound(&self) -> bool;

    /// Mark the current control as handled. A no-op when the control is
    /// absent.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Dom`] if the marker cannot be written.
    fn mark_toggle_bound(&mut self) -> Result<(), HostError>;
}

// =============================================================================
// IN-MEMORY STORE
// =============================================================================

/// Page-lifetime store. Used when `localStorage` is unavailable and as the
/// test double.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries }
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================================
// IN-MEMORY DOCUMENT
// =============================================================================

/// Detached document model: a root attribute and an optional control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryDocument {
    /// Raw `data-theme` value on the root, `None` when the attribute is
    /// absent.
    pub root: Option<String>,
    /// `None` when the page has no toggle control.
    pub toggle: Option<MemoryToggle>,
}

/// In-memory toggle control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryToggle {
    /// `aria-pressed` value, `None` until first written.
    pub pressed: Option<String>,
    /// Whether a click handler is attached.
    pub bound: bool,
}

impl MemoryDocument {
    /// Document without a toggle control.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Document with a toggle control whose pressed state is unset.
    #[must_use]
    pub fn with_toggle() -> Self {
        Self {
            root: None,
            toggle: Some(MemoryToggle::default()),
        }
    }

    /// The control's `aria-pressed` value, if the control exists and has
    /// one.
    #[must_use]
    pub fn pressed(&self) -> Option<&str> {
        self.toggle.as_ref().and_then(|t| t.pressed.as_deref())
    }
}

impl ThemeDocument for MemoryDocument {
    fn root_theme(&self) -> Option<String> {
        self.root.clone()
    }

    fn set_root_theme(&mut self, theme: Theme) -> Result<(), HostError> {
        self.root = Some(theme.as_str().to_owned());
        Ok(())
    }

    fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    fn set_toggle_pressed(&mut self, theme: Theme) -> Result<(), HostError> {
        if let Some(toggle) = self.toggle.as_mut() {
            toggle.pressed = Some(theme.pressed_attr().to_owned());
        }
        Ok(())
    }

    fn toggle_bound(&self) -> bool {
        self.toggle.as_ref().is_some_and(|t| t.bound)
    }

    fn mark_toggle_bound(&mut self) -> Result<(), HostError> {
        if let Some(toggle) = self.toggle.as_mut() {
            toggle.bound = true;
        }
        Ok(())
    }
}
