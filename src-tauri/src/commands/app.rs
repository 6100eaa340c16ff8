//! Usage: App-level Tauri commands (about info, exit). This is the whole bridge exposed to the page.

use crate::app_state::LifecycleState;
use crate::content::ContentMode;
use crate::launch_config::LaunchConfig;
use crate::shared::mutex_ext::MutexExt;

#[derive(Debug, Clone, serde::Serialize)]
pub(crate) struct AppAboutInfo {
    product_name: String,
    app_version: String,
    os: String,
    arch: String,
    profile: String,
    content_mode: ContentMode,
}

fn about_info(config: &LaunchConfig) -> AppAboutInfo {
    AppAboutInfo {
        product_name: config.product_name.clone(),
        app_version: env!("CARGO_PKG_VERSION").to_string(),
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        profile: if cfg!(debug_assertions) {
            "debug".to_string()
        } else {
            "release".to_string()
        },
        content_mode: config.mode,
    }
}

#[tauri::command]
pub(crate) fn app_about_get(state: tauri::State<'_, LifecycleState>) -> AppAboutInfo {
    let manager = state.0.lock_or_recover();
    about_info(manager.config())
}

#[tauri::command]
pub(crate) fn app_exit(app: tauri::AppHandle) -> Result<bool, String> {
    std::thread::spawn(move || {
        std::thread::sleep(std::time::Duration::from_millis(200));
        app.exit(0);
    });
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::PlatformPolicy;

    #[test]
    fn about_info_reports_product_and_mode() {
        let config = LaunchConfig {
            product_name: "Goolle Shop".to_string(),
            mode: ContentMode::Production,
            platform: PlatformPolicy::QuitWhenEmpty,
            install_dir: std::env::temp_dir(),
        };

        let value = serde_json::to_value(about_info(&config)).expect("serialize");
        assert_eq!(value["product_name"], "Goolle Shop");
        assert_eq!(value["content_mode"], "production");
        assert_eq!(value["app_version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(value["os"], std::env::consts::OS);
    }
}
