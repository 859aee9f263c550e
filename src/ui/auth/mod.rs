//! Authentication UI module
//!
//! Components and client plumbing for the login and registration flows.

pub mod client;
mod login_button;
mod login_form;
mod register_form;
mod social;

pub use login_button::{LoginButton, LoginButtonMode};
pub use login_form::LoginForm;
pub use register_form::RegisterForm;
pub use social::Social;
