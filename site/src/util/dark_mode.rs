//! Dark mode initialization and toggle.
//!
//! Reads the viewer's preference from `localStorage` and applies a
//! `data-theme` attribute to the `<html>` element. Toggle writes back to
//! `localStorage` and updates that attribute.
//!
//! TRADE-OFFS
//! ==========
//! The site renders dark first. Preference persistence is best-effort
//! browser-only behavior; SSR paths no-op to keep server rendering
//! deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::util::storage;

const STORAGE_KEY: &str = "initiative_theme_dark";

/// Read the dark mode preference. Defaults to dark when nothing is stored.
pub fn read_preference() -> bool {
    storage::load_raw(STORAGE_KEY).map_or(true, |val| val != "false")
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                if el.set_attribute("data-theme", theme_name(enabled)).is_err() {
                    leptos::logging::warn!("could not apply theme attribute");
                }
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}

/// Toggle dark mode and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    storage::save_raw(STORAGE_KEY, if next { "true" } else { "false" });
    next
}

/// Theme attribute value for the `<html>` element.
pub fn theme_name(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

/// Label for the toggle button: names the mode a click switches to.
pub fn toggle_label(dark: bool) -> &'static str {
    if dark { "MODE:LIGHT" } else { "MODE:DARK" }
}
