//! Usage: Startup configuration resolved once from the host (product name, content mode, paths).

use crate::content::ContentMode;
use crate::error::LifecycleError;
use crate::platform::PlatformPolicy;
use std::path::PathBuf;
use tauri::{Manager, Runtime};

pub const DEFAULT_PRODUCT_NAME: &str = "Goolle Shop";
const CONTENT_MODE_ENV: &str = "GOOLLE_SHOP_CONTENT_MODE";

#[derive(Debug, Clone)]
pub struct LaunchConfig {
    pub product_name: String,
    pub mode: ContentMode,
    pub platform: PlatformPolicy,
    pub install_dir: PathBuf,
}

impl LaunchConfig {
    pub fn resolve<R: Runtime>(app: &tauri::AppHandle<R>) -> Result<Self, LifecycleError> {
        let product_name = normalize_product_name(app.config().product_name.as_deref());
        let mode = content_mode_from_env(std::env::var(CONTENT_MODE_ENV).ok().as_deref());
        let install_dir = resolve_install_dir(app)?;

        if devtools_unavailable(mode, cfg!(any(debug_assertions, feature = "devtools"))) {
            tracing::warn!(
                "开发模式已启用，但当前构建不含 devtools（需要 `devtools` feature），检查面板不会打开"
            );
        }

        Ok(Self {
            product_name,
            mode,
            platform: PlatformPolicy::current(),
            install_dir,
        })
    }
}

fn normalize_product_name(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(DEFAULT_PRODUCT_NAME)
        .to_string()
}

fn content_mode_from_env(raw: Option<&str>) -> ContentMode {
    let fallback = ContentMode::from_build_profile();
    let Some(raw) = raw else {
        return fallback;
    };

    match ContentMode::parse(raw) {
        Some(mode) => mode,
        None => {
            tracing::warn!(
                value = %raw,
                fallback = fallback.as_str(),
                "{CONTENT_MODE_ENV} 无法识别，使用构建默认值"
            );
            fallback
        }
    }
}

/// Development mode asks for the inspection panel, which only exists in debug builds or with
/// the `devtools` feature.
fn devtools_unavailable(mode: ContentMode, devtools_supported: bool) -> bool {
    mode.opens_devtools() && !devtools_supported
}

fn resolve_install_dir<R: Runtime>(app: &tauri::AppHandle<R>) -> Result<PathBuf, LifecycleError> {
    match app.path().resource_dir() {
        Ok(dir) => Ok(dir),
        Err(err) => {
            tracing::warn!("resource dir 不可用，回退到可执行文件目录: {}", err);
            let exe = std::env::current_exe()
                .map_err(|e| LifecycleError::InstallDir(format!("current_exe: {e}")))?;
            exe.parent().map(|dir| dir.to_path_buf()).ok_or_else(|| {
                LifecycleError::InstallDir(format!("{} has no parent", exe.display()))
            })
        }
    }
}
