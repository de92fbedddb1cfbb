//! Browser bindings for the controller seams.
//!
//! `localStorage` backs [`PreferenceStore`] and the live `document` backs
//! [`ThemeDocument`]. [`install`] wires both to a [`ThemeController`] and
//! subscribes the toggle control's `click` event. Requires a browser
//! environment.

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Storage, Window};

use crate::consts::{BOUND_ATTRIBUTE, PRESSED_ATTRIBUTE, ROOT_ATTRIBUTE, TOGGLE_ID};
use crate::controller::{Binding, ThemeController};
use crate::host::{HostError, MemoryStore, PreferenceStore, ThemeDocument};
use crate::theme::Theme;

fn js_error(err: &JsValue) -> String {
    format!("{err:?}")
}

// =============================================================================
// STORE
// =============================================================================

/// `localStorage`, or a page-lifetime fallback when storage is disabled.
pub enum PageStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl PageStore {
    /// Open `localStorage` for `window`, degrading to memory if the host
    /// refuses it.
    pub fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => Self::Local(storage),
            Ok(None) => {
                log::warn!(
                    "theme: {}, preference will not survive reload",
                    HostError::StorageUnavailable
                );
                Self::Memory(MemoryStore::new())
            }
            Err(e) => {
                log::warn!(
                    "theme: {}, preference will not survive reload",
                    HostError::Storage(js_error(&e))
                );
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for PageStore {
    fn get(&self, key: &str) -> Result<Option<String>, HostError> {
        match self {
            Self::Local(storage) => storage
                .get_item(key)
                .map_err(|e| HostError::Storage(js_error(&e))),
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), HostError> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|e| HostError::Storage(js_error(&e))),
            Self::Memory(store) => store.set(key, value),
        }
    }
}

// =============================================================================
// DOCUMENT
// =============================================================================

/// The page's `<html>` element and the optional `#theme-toggle` control.
pub struct BrowserDocument {
    root: Element,
    toggle: Option<Element>,
}

impl BrowserDocument {
    /// Locate the root element and the toggle control in `window`'s
    /// document.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Dom`] if the window has no document or the
    /// document has no root element.
    pub fn locate(window: &Window) -> Result<Self, HostError> {
        let document = window
            .document()
            .ok_or_else(|| HostError::Dom("window has no document".into()))?;
        let root = document
            .document_element()
            .ok_or_else(|| HostError::Dom("document has no root element".into()))?;
        let toggle = document.get_element_by_id(TOGGLE_ID);
        Ok(Self { root, toggle })
    }

    pub fn toggle(&self) -> Option<&Element> {
        self.toggle.as_ref()
    }
}

impl ThemeDocument for BrowserDocument {
    fn root_theme(&self) -> Option<String> {
        self.root.get_attribute(ROOT_ATTRIBUTE)
    }

    fn set_root_theme(&mut self, theme: Theme) -> Result<(), HostError> {
        self.root
            .set_attribute(ROOT_ATTRIBUTE, theme.as_str())
            .map_err(|e| HostError::Dom(js_error(&e)))
    }

    fn has_toggle(&self) -> bool {
        self.toggle.is_some()
    }

    fn set_toggle_pressed(&mut self, theme: Theme) -> Result<(), HostError> {
        let Some(toggle) = &self.toggle else {
            return Ok(());
        };
        toggle
            .set_attribute(PRESSED_ATTRIBUTE, theme.pressed_attr())
            .map_err(|e| HostError::Dom(js_error(&e)))
    }

    fn toggle_bound(&self) -> bool {
        self.toggle
            .as_ref()
            .is_some_and(|t| t.has_attribute(BOUND_ATTRIBUTE))
    }

    fn mark_toggle_bound(&mut self) -> Result<(), HostError> {
        let Some(toggle) = &self.toggle else {
            return Ok(());
        };
        toggle
            .set_attribute(BOUND_ATTRIBUTE, "true")
            .map_err(|e| HostError::Dom(js_error(&e)))
    }
}

// =============================================================================
// PAGE WIRING
// =============================================================================

/// Controller over the current page's `localStorage` and document.
///
/// # Errors
///
/// Returns [`HostError::Dom`] if there is no window or document.
pub fn page_controller() -> Result<ThemeController<PageStore, BrowserDocument>, HostError> {
    let window = web_sys::window().ok_or_else(|| HostError::Dom("no window".into()))?;
    let document = BrowserDocument::locate(&window)?;
    let store = PageStore::open(&window);
    Ok(ThemeController::new(store, document))
}

/// Advance the current page's theme, as a click on the control would.
///
/// # Errors
///
/// Returns [`HostError::Dom`] if there is no window or document.
pub fn toggle_page() -> Result<Theme, HostError> {
    Ok(page_controller()?.on_toggle_activated())
}

/// Apply the persisted theme to the current page and, if the toggle control
/// exists and is not yet handled, subscribe it to advance the theme on
/// click.
///
/// Safe to call more than once: the theme is re-applied each time and a
/// listener is attached at most once per control element.
///
/// # Errors
///
/// Returns [`HostError::Dom`] if there is no window or document, or if the
/// listener cannot be attached.
pub fn install() -> Result<Theme, HostError> {
    let mut controller = page_controller()?;
    let theme = controller.initialize();

    match controller.claim_toggle() {
        Binding::NoControl => {
            log::debug!("theme: no #{TOGGLE_ID} control, toggling disabled");
            return Ok(theme);
        }
        Binding::AlreadyBound => return Ok(theme),
        Binding::Claimed => {}
    }
    let Some(toggle) = controller.document().toggle().cloned() else {
        return Ok(theme);
    };

    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        controller.on_toggle_activated();
    });
    toggle
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .map_err(|e| HostError::Dom(js_error(&e)))?;
    // The listener lives as long as the page.
    on_click.forget();
    Ok(theme)
}
