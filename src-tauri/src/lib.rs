mod app;
mod commands;
mod domain;
mod error;
mod infra;
mod shared;

pub(crate) use app::{app_state, events, lifecycle, menu};
pub(crate) use domain::{content, platform, window};
pub(crate) use infra::launch_config;

use app_state::LifecycleState;
use commands::*;
use launch_config::LaunchConfig;
use lifecycle::LifecycleManager;
use shared::mutex_ext::MutexExt;
use tauri::Manager;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default().plugin(tauri_plugin_opener::init());

    #[cfg(desktop)]
    let builder = builder
        .plugin(tauri_plugin_single_instance::init(|app, _argv, _cwd| {
            events::on_second_instance(app);
        }))
        .on_menu_event(events::on_menu_event);

    let app = builder
        .on_window_event(events::on_window_event)
        .setup(|app| {
            crate::app::logging::init(app.handle());

            let config = LaunchConfig::resolve(app.handle())?;
            tracing::info!(
                product_name = %config.product_name,
                mode = config.mode.as_str(),
                platform = ?config.platform,
                install_dir = %config.install_dir.display(),
                "启动配置"
            );

            app.manage(LifecycleState::new(LifecycleManager::new(config)));

            let state = app.state::<LifecycleState>();
            let mut manager = state.0.lock_or_recover();
            if let Err(err) = manager.on_ready(app.handle()) {
                tracing::error!("主窗口创建失败: {}", err);
            }

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![app_about_get, app_exit])
        .build(tauri::generate_context!())
        .expect("error while building tauri application");

    app.run(events::on_run_event);
}
