//! Usage: Application layer (Tauri-managed state, window/menu lifecycle, startup wiring).

pub(crate) mod app_state;
pub(crate) mod events;
mod host;
pub(crate) mod lifecycle;
pub(crate) mod logging;
pub(crate) mod menu;
