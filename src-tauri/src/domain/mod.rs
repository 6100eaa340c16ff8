//! Usage: Pure lifecycle rules (content selection, platform policy, window configuration).

pub(crate) mod content;
pub(crate) mod platform;
pub(crate) mod window;
