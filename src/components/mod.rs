//! Reusable UI components: navigation, route guards, and the auth surface.

pub mod auth_modal;
pub mod guards;
pub mod login_form;
pub mod navbar;
pub mod register_form;
