//! # theme-toggle
//!
//! Light/dark/auto theme preference for the browser, built as a Leptos +
//! WASM crate.
//!
//! The persisted preference lives in `localStorage` under `"theme"` and is
//! mirrored onto `<html data-theme="...">`. An optional `#theme-toggle`
//! control cycles `dark → light → auto` on click. What each theme looks
//! like is left to the page's stylesheet.
//!
//! The behavior lives in [`controller::ThemeController`], which is generic
//! over the [`host`] seams so it runs natively under `cargo test`; the
//! `hydrate` feature adds the `web-sys` bindings in `browser`.

#[cfg(feature = "hydrate")]
pub mod browser;
pub mod components;
pub mod consts;
pub mod controller;
pub mod host;
pub mod theme;

/// Console log level for the browser build.
#[cfg(feature = "hydrate")]
const LOG_LEVEL: log::Level = log::Level::Info;

/// WASM entry point: install the panic hook and console logger, then apply
/// the persisted theme and bind the toggle control.
///
/// Runs automatically on module load with the `autostart` feature;
/// otherwise call it from the host page.
#[cfg(feature = "hydrate")]
#[cfg_attr(feature = "autostart", wasm_bindgen::prelude::wasm_bindgen(start))]
#[cfg_attr(not(feature = "autostart"), wasm_bindgen::prelude::wasm_bindgen)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(LOG_LEVEL) {
        log::debug!("console logger already installed: {e}");
    }
    match browser::install() {
        Ok(theme) => log::info!("theme: applied {theme}"),
        Err(e) => log::warn!("theme: {e}"),
    }
}
