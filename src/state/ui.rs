//! UI state for the auth modal, theme, and language.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Which form the auth surface shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

/// Color theme, persisted under the `theme` storage key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a persisted value; anything unrecognized falls back to light.
    pub fn from_str_or_default(value: &str) -> Self {
        match value {
            "dark" => Self::Dark,
            _ => Self::Light,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Ephemeral UI state: auth modal intent plus the active theme and language.
///
/// The modal intent is never persisted; it resets on every completed or
/// cancelled flow.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub auth_open: bool,
    pub auth_mode: AuthMode,
    pub theme: Theme,
    pub language: String,
}

impl UiState {
    /// Open the auth surface in the given mode.
    pub fn open_auth(&mut self, mode: AuthMode) {
        self.auth_mode = mode;
        self.auth_open = true;
    }

    /// Close the auth surface and reset its mode.
    pub fn close_auth(&mut self) {
        self.auth_open = false;
        self.auth_mode = AuthMode::default();
    }

    /// Keep the surface open but switch which form it shows.
    pub fn switch_auth_mode(&mut self, mode: AuthMode) {
        self.auth_mode = mode;
    }
}
