//! Fixed names shared by the controller and the browser bindings.

// ── Storage ─────────────────────────────────────────────────────

/// `localStorage` key holding the persisted theme preference.
pub const STORAGE_KEY: &str = "theme";

// ── DOM ─────────────────────────────────────────────────────────

/// Attribute on `<html>` mirroring the resolved theme.
pub const ROOT_ATTRIBUTE: &str = "data-theme";

/// Element id of the optional toggle control.
pub const TOGGLE_ID: &str = "theme-toggle";

/// Pressed-state attribute written on the toggle control.
pub const PRESSED_ATTRIBUTE: &str = "aria-pressed";

/// Marker on a toggle control whose clicks are already handled.
pub const BOUND_ATTRIBUTE: &str = "data-theme-bound";
