//! Usage: Tauri command handlers invoked by the storefront page.

mod app;

pub(crate) use app::*;
