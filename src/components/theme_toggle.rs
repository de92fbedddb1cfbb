//! Theme toggle button for Leptos-rendered pages.

use leptos::prelude::*;

use crate::consts::TOGGLE_ID;
use crate::theme::Theme;

/// Accessible name of the toggle control.
const LABEL: &str = "Toggle color theme";

/// Renders the `#theme-toggle` control.
///
/// Clicks go through the component's own `on:click`. The button is rendered
/// with the `data-theme-bound` marker so `start()` on the same page
/// leaves it alone. On mount the persisted theme is applied, which also
/// writes `aria-pressed`. Server-rendered markup starts in the `auto` state.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    Effect::new(move || match crate::browser::page_controller() {
        Ok(mut controller) => {
            controller.initialize();
        }
        Err(e) => log::warn!("theme: applying preference failed: {e}"),
    });

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        {
            if let Err(e) = crate::browser::toggle_page() {
                log::warn!("theme: toggle failed: {e}");
            }
        }
    };

    view! {
        <button
            id=TOGGLE_ID
            type="button"
            class="theme-toggle"
            aria-label=LABEL
            title=LABEL
            aria-pressed=Theme::default().pressed_attr()
            data-theme-bound="true"
            on:click=on_click
        >
            <span class="theme-toggle__icon" aria-hidden="true"></span>
        </button>
    }
}
