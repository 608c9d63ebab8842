//! Contact-form notification relay.
//!
//! Accepts a contact submission over HTTP, sends a confirmation email to
//! the submitter synchronously, and delivers an operator notification in
//! the background, best-effort.

pub mod background;
pub mod config;
pub mod dispatch;
pub mod i18n;
pub mod mailer;
pub mod render;
pub mod server;
