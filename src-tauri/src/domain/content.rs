//! Usage: Content source selection (dev server vs packaged bundle) and in-window navigation policy.

use crate::error::LifecycleError;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tauri::Url;

pub const DEV_SERVER_URL: &str = "http://localhost:5173";
pub const RENDERER_DIR: &str = "renderer";
pub const RENDERER_ENTRY: &str = "index.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentMode {
    Development,
    Production,
}

impl ContentMode {
    pub fn from_build_profile() -> Self {
        if cfg!(debug_assertions) {
            Self::Development
        } else {
            Self::Production
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Some(Self::Development),
            "production" | "prod" => Some(Self::Production),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }

    pub fn opens_devtools(self) -> bool {
        matches!(self, Self::Development)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationDecision {
    Allow,
    OpenExternally,
    Deny,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    DevServer(Url),
    Packaged { entry: PathBuf, url: Url },
}

impl ContentSource {
    pub fn resolve(mode: ContentMode, install_dir: &Path) -> Result<Self, LifecycleError> {
        match mode {
            ContentMode::Development => Url::parse(DEV_SERVER_URL)
                .map(Self::DevServer)
                .map_err(|_| LifecycleError::InvalidContentUrl(DEV_SERVER_URL.to_string())),
            ContentMode::Production => {
                let entry = packaged_entry(install_dir);
                let url = Url::from_file_path(&entry).map_err(|_| {
                    LifecycleError::InvalidContentUrl(entry.display().to_string())
                })?;
                Ok(Self::Packaged { entry, url })
            }
        }
    }

    pub fn url(&self) -> &Url {
        match self {
            Self::DevServer(url) => url,
            Self::Packaged { url, .. } => url,
        }
    }

    pub fn navigation_decision(&self, target: &Url) -> NavigationDecision {
        let same_content = match self {
            Self::DevServer(url) => target.origin() == url.origin(),
            Self::Packaged { entry, .. } => is_inside_bundle(entry, target),
        };
        if same_content || target.as_str() == "about:blank" {
            return NavigationDecision::Allow;
        }

        match target.scheme() {
            "http" | "https" => NavigationDecision::OpenExternally,
            _ => NavigationDecision::Deny,
        }
    }
}

fn is_inside_bundle(entry: &Path, target: &Url) -> bool {
    if target.scheme() != "file" {
        return false;
    }
    let (Ok(path), Some(root)) = (target.to_file_path(), entry.parent()) else {
        return false;
    };
    path.starts_with(root)
}

pub fn packaged_entry(install_dir: &Path) -> PathBuf {
    install_dir.join(RENDERER_DIR).join(RENDERER_ENTRY)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn install_dir() -> PathBuf {
        std::env::temp_dir().join("goolle_shop_install")
    }

    fn url(raw: &str) -> Url {
        Url::parse(raw).expect("valid url")
    }

    #[test]
    fn development_uses_dev_server() {
        let source = ContentSource::resolve(ContentMode::Development, &install_dir())
            .expect("resolve");
        assert_eq!(source.url().as_str(), "http://localhost:5173/");
        assert!(matches!(source, ContentSource::DevServer(_)));
    }

    #[test]
    fn production_uses_packaged_index_under_install_dir() {
        let dir = install_dir();
        let source = ContentSource::resolve(ContentMode::Production, &dir).expect("resolve");
        let ContentSource::Packaged { entry, url } = &source else {
            panic!("expected packaged source, got {source:?}");
        };
        assert_eq!(entry, &dir.join("renderer").join("index.html"));
        assert_eq!(url.scheme(), "file");
        assert_eq!(url.to_file_path().expect("file path"), *entry);
    }

    #[test]
    fn switching_mode_only_switches_source() {
        let dir = install_dir();
        let dev = ContentSource::resolve(ContentMode::Development, &dir).expect("dev");
        let prod = ContentSource::resolve(ContentMode::Production, &dir).expect("prod");
        assert_ne!(dev, prod);
        assert_eq!(
            ContentSource::resolve(ContentMode::Development, &dir).expect("dev again"),
            dev
        );
    }

    #[test]
    fn production_rejects_relative_install_dir() {
        let err = ContentSource::resolve(ContentMode::Production, Path::new("relative/dir"))
            .unwrap_err();
        assert!(matches!(err, LifecycleError::InvalidContentUrl(_)));
    }

    #[test]
    fn parse_accepts_long_and_short_names_case_insensitively() {
        assert_eq!(ContentMode::parse("Development"), Some(ContentMode::Development));
        assert_eq!(ContentMode::parse(" dev "), Some(ContentMode::Development));
        assert_eq!(ContentMode::parse("PROD"), Some(ContentMode::Production));
        assert_eq!(ContentMode::parse("production"), Some(ContentMode::Production));
        assert_eq!(ContentMode::parse("staging"), None);
        assert_eq!(ContentMode::parse(""), None);
    }

    #[test]
    fn only_development_opens_devtools() {
        assert!(ContentMode::Development.opens_devtools());
        assert!(!ContentMode::Production.opens_devtools());
    }

    #[test]
    fn dev_server_navigation_stays_on_origin() {
        let source = ContentSource::DevServer(url(DEV_SERVER_URL));
        assert_eq!(
            source.navigation_decision(&url("http://localhost:5173/thank-you")),
            NavigationDecision::Allow
        );
        assert_eq!(
            source.navigation_decision(&url("https://buy.stripe.com/test_123")),
            NavigationDecision::OpenExternally
        );
        assert_eq!(
            source.navigation_decision(&url("http://localhost:8080/")),
            NavigationDecision::OpenExternally
        );
        assert_eq!(
            source.navigation_decision(&url("javascript:alert(1)")),
            NavigationDecision::Deny
        );
    }

    #[test]
    fn packaged_navigation_allows_bundle_files_only() {
        let dir = install_dir();
        let source = ContentSource::resolve(ContentMode::Production, &dir).expect("resolve");
        let sibling = Url::from_file_path(dir.join("renderer").join("assets").join("app.js"))
            .expect("file url");
        let outside = Url::from_file_path(dir.join("secrets.txt")).expect("file url");
        assert_eq!(
            source.navigation_decision(source.url()),
            NavigationDecision::Allow
        );
        assert_eq!(source.navigation_decision(&sibling), NavigationDecision::Allow);
        assert_eq!(source.navigation_decision(&outside), NavigationDecision::Deny);
        assert_eq!(
            source.navigation_decision(&url("file:///etc/passwd")),
            NavigationDecision::Deny
        );
        assert_eq!(
            source.navigation_decision(&url("about:blank")),
            NavigationDecision::Allow
        );
        assert_eq!(
            source.navigation_decision(&url("http://localhost:5173/")),
            NavigationDecision::OpenExternally
        );
        assert_eq!(
            source.navigation_decision(&url("mailto:shop@example.com")),
            NavigationDecision::Deny
        );
    }
}
