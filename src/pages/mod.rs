//! Top-level routed pages.

pub mod dashboard;
pub mod focus;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod tasks;
