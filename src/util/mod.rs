//! Process-wide preference helpers (theme, language).
//!
//! These share the storage medium with the session keys but are independent
//! of it; key names must not collide with `token`/`usuario`.

pub mod language;
pub mod theme;
