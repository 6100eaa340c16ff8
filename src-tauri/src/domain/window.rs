//! Usage: Fixed main-window configuration and the handle the lifecycle manager keeps for it.

use crate::content::{ContentMode, ContentSource};

pub const MAIN_WINDOW_LABEL: &str = "main";
pub const MAIN_WINDOW_WIDTH: f64 = 1400.0;
pub const MAIN_WINDOW_HEIGHT: f64 = 900.0;

/// What the host needs to open the main window.
///
/// Content always runs isolated: the webview gets no ambient host access and can
/// only reach the commands registered in `lib.rs` and allowed by `capabilities/`.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSpec {
    pub label: &'static str,
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub content: ContentSource,
    pub devtools: bool,
}

impl WindowSpec {
    pub fn main(title: &str, mode: ContentMode, content: ContentSource) -> Self {
        Self {
            label: MAIN_WINDOW_LABEL,
            title: title.to_string(),
            width: MAIN_WINDOW_WIDTH,
            height: MAIN_WINDOW_HEIGHT,
            content,
            devtools: mode.opens_devtools(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WindowHandle {
    pub label: &'static str,
    pub width: f64,
    pub height: f64,
    pub content: ContentSource,
}

impl From<&WindowSpec> for WindowHandle {
    fn from(spec: &WindowSpec) -> Self {
        Self {
            label: spec.label,
            width: spec.width,
            height: spec.height,
            content: spec.content.clone(),
        }
    }
}
