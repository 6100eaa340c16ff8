//! Usage: Route host events (window, run loop, menu, second instance) into the lifecycle manager.

use super::app_state::LifecycleState;
use crate::lifecycle::AllWindowsClosed;
use crate::shared::mutex_ext::MutexExt;
use crate::window::MAIN_WINDOW_LABEL;
use tauri::{AppHandle, Manager, RunEvent, Runtime};

pub fn on_window_event<R: Runtime>(window: &tauri::Window<R>, event: &tauri::WindowEvent) {
    if window.label() != MAIN_WINDOW_LABEL {
        return;
    }

    let tauri::WindowEvent::Destroyed = event else {
        return;
    };

    let Some(state) = window.try_state::<LifecycleState>() else {
        return;
    };
    state.0.lock_or_recover().on_window_closed(window.label());
}

/// Whether an exit request must be vetoed. Only the implicit "last window closed" request
/// (no exit code) can be vetoed, and only on a platform that stays resident.
pub(crate) fn keep_running(code: Option<i32>, decision: AllWindowsClosed) -> bool {
    code.is_none() && decision == AllWindowsClosed::StayResident
}

pub fn on_run_event<R: Runtime>(app: &AppHandle<R>, event: RunEvent) {
    match event {
        // `code: None` is the runtime's "last window closed" exit; explicit exits carry a code.
        RunEvent::ExitRequested { api, code, .. } => {
            let Some(state) = app.try_state::<LifecycleState>() else {
                return;
            };
            let decision = match code {
                Some(code) => {
                    tracing::info!(code, "收到退出请求");
                    AllWindowsClosed::Quit
                }
                None => state.0.lock_or_recover().on_all_windows_closed(),
            };
            if keep_running(code, decision) {
                api.prevent_exit();
            }
        }
        #[cfg(target_os = "macos")]
        RunEvent::Reopen { .. } => activate(app),
        _ => {}
    }
}

#[cfg(desktop)]
pub fn on_menu_event<R: Runtime>(app: &AppHandle<R>, event: tauri::menu::MenuEvent) {
    let Some(state) = app.try_state::<LifecycleState>() else {
        return;
    };
    let manager = state.0.lock_or_recover();
    manager.on_menu_event(app, event.id().as_ref());
}

pub fn activate<R: Runtime>(app: &AppHandle<R>) {
    let Some(state) = app.try_state::<LifecycleState>() else {
        return;
    };
    let mut manager = state.0.lock_or_recover();
    if let Err(err) = manager.on_activate(app) {
        tracing::error!("重新激活时创建窗口失败: {}", err);
    }
}

/// A second launch counts as reactivation; an already open window is brought to front.
#[cfg(desktop)]
pub fn on_second_instance<R: Runtime>(app: &AppHandle<R>) {
    activate(app);

    let Some(window) = app.get_webview_window(MAIN_WINDOW_LABEL) else {
        return;
    };
    let _ = window.show();
    let _ = window.unminimize();
    let _ = window.set_focus();
}
