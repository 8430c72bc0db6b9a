//! Language preference persistence.
//!
//! Only the persisted locale code is modeled here; the string tables
//! themselves are outside this crate's scope.

#[cfg(feature = "csr")]
const STORAGE_KEY: &str = "language";

/// Locales the language menu offers, as (code, native name).
pub const LANGUAGES: [(&str, &str); 4] = [
    ("es", "Español"),
    ("en", "English"),
    ("fr", "Français"),
    ("pt", "Português"),
];

/// Default locale when nothing is stored.
pub const DEFAULT_LANGUAGE: &str = "es";

/// Read the persisted locale code, defaulting to Spanish.
pub fn read_preference() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(STORAGE_KEY).ok().flatten())
            .filter(|code| LANGUAGES.iter().any(|(c, _)| *c == code.as_str()))
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_owned())
    }
    #[cfg(not(feature = "csr"))]
    {
        DEFAULT_LANGUAGE.to_owned()
    }
}

/// Persist a locale choice.
pub fn save_preference(code: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.set_item(STORAGE_KEY, code);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = code;
    }
}
