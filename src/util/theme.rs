//! Theme initialization and toggle.
//!
//! Reads the preference from `localStorage` and applies it as a `data-theme`
//! attribute on `<body>`. Toggle writes back to `localStorage` and reapplies.
//! Requires a browser environment; native builds are no-ops.

use crate::state::ui::Theme;

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "theme";

/// Read the persisted theme preference, defaulting to light.
pub fn read_preference() -> Theme {
    #[cfg(feature = "csr")]
    {
        let stored = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        match stored {
            Some(value) => Theme::from_str_or_default(&value),
            None => Theme::Light,
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        Theme::Light
    }
}

/// Set `data-theme` on `<body>` so the stylesheet picks up the palette.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
            let _ = body.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, next.as_str());
        }
    }
    next
}
