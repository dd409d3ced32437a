//! Client-side core of the event portal: translated UI strings and the
//! signed-in user.

pub mod config;
pub mod error;
pub mod i18n;
pub mod session;
