//! Common reusable UI components
//!
//! Shared building blocks used across the auth forms and pages.

pub mod button;
pub mod form;
pub mod message;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use form::FormField;
pub use message::FormFeedback;
