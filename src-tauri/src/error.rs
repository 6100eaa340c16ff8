//! Usage: Typed errors raised while driving the host window/menu lifecycle.
//!
//! Errors serialize as their display string so bridge commands can return them to the page.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("failed to build window `{label}`: {message}")]
    WindowBuild { label: String, message: String },

    #[error("failed to install application menu: {0}")]
    Menu(String),

    #[error("failed to resolve install directory: {0}")]
    InstallDir(String),

    #[error("invalid content url for {0}")]
    InvalidContentUrl(String),
}

impl Serialize for LifecycleError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_display_string() {
        let err = LifecycleError::WindowBuild {
            label: "main".to_string(),
            message: "no display".to_string(),
        };
        let json = serde_json::to_string(&err).expect("serialize");
        assert_eq!(json, "\"failed to build window `main`: no display\"");
    }
}
