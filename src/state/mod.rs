//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `ui`, `validation`) so individual
//! components can depend on small focused models. Fields are plain data;
//! components hold them in `RwSignal`s provided via context.

pub mod auth;
pub mod ui;
pub mod validation;
