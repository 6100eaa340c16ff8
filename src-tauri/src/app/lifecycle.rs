//! Usage: Lifecycle manager for the single storefront window.
//!
//! Every host signal (`ready`, window destroyed, last window closed, reactivate, menu click)
//! is a method here. The host itself sits behind [`LifecycleHost`], implemented for
//! `tauri::AppHandle` in `app::host` and by a recording fake in tests.

use crate::content::ContentSource;
use crate::error::LifecycleError;
use crate::launch_config::LaunchConfig;
use crate::menu::{MenuAction, MenuTemplate};
use crate::platform::PlatformPolicy;
use crate::window::{WindowHandle, WindowSpec};

pub(crate) trait LifecycleHost {
    /// Create the window and start loading its content. Must not block on the load.
    fn open_window(&self, spec: &WindowSpec) -> Result<(), LifecycleError>;

    fn install_menu(&self, template: &MenuTemplate) -> Result<(), LifecycleError>;

    fn quit(&self, code: i32);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AllWindowsClosed {
    Quit,
    StayResident,
}

pub(crate) struct LifecycleManager {
    config: LaunchConfig,
    window: Option<WindowHandle>,
}

impl LifecycleManager {
    pub(crate) fn new(config: LaunchConfig) -> Self {
        Self {
            config,
            window: None,
        }
    }

    pub(crate) fn config(&self) -> &LaunchConfig {
        &self.config
    }

    pub(crate) fn window(&self) -> Option<&WindowHandle> {
        self.window.as_ref()
    }

    /// Startup: install the menu, then open the main window.
    ///
    /// A menu failure is logged and does not keep the window from opening.
    pub(crate) fn on_ready<H: LifecycleHost>(&mut self, host: &H) -> Result<(), LifecycleError> {
        if let Err(err) = self.build_menu(host) {
            tracing::error!("应用菜单初始化失败: {}", err);
        }
        self.create_window(host).map(|_| ())
    }

    /// Open the main window unless one is already live, in which case the live handle is returned.
    pub(crate) fn create_window<H: LifecycleHost>(
        &mut self,
        host: &H,
    ) -> Result<WindowHandle, LifecycleError> {
        if let Some(existing) = self.window() {
            tracing::debug!(label = existing.label, "主窗口已存在，跳过创建");
            return Ok(existing.clone());
        }

        let content = ContentSource::resolve(self.config.mode, &self.config.install_dir)?;
        let spec = WindowSpec::main(&self.config.product_name, self.config.mode, content);
        host.open_window(&spec)?;

        let handle = WindowHandle::from(&spec);
        tracing::info!(
            label = handle.label,
            width = handle.width,
            height = handle.height,
            mode = self.config.mode.as_str(),
            url = %handle.content.url(),
            devtools = spec.devtools,
            "主窗口已创建"
        );
        self.window = Some(handle.clone());
        Ok(handle)
    }

    pub(crate) fn on_window_closed(&mut self, label: &str) {
        let is_main = self.window.as_ref().is_some_and(|w| w.label == label);
        if !is_main {
            return;
        }
        self.window = None;
        tracing::info!(label = %label, "主窗口已关闭");
    }

    pub(crate) fn on_all_windows_closed(&self) -> AllWindowsClosed {
        match self.config.platform {
            PlatformPolicy::QuitWhenEmpty => {
                tracing::info!("所有窗口已关闭，退出应用");
                AllWindowsClosed::Quit
            }
            PlatformPolicy::StayResident => {
                tracing::info!("所有窗口已关闭，保持驻留");
                AllWindowsClosed::StayResident
            }
        }
    }

    /// Reactivation. Returns the new handle when a window had to be created, `None` otherwise.
    pub(crate) fn on_activate<H: LifecycleHost>(
        &mut self,
        host: &H,
    ) -> Result<Option<WindowHandle>, LifecycleError> {
        if self.window.is_some() {
            return Ok(None);
        }
        self.create_window(host).map(Some)
    }

    pub(crate) fn build_menu<H: LifecycleHost>(&self, host: &H) -> Result<(), LifecycleError> {
        host.install_menu(&MenuTemplate::for_product(&self.config.product_name))
    }

    pub(crate) fn on_menu_event<H: LifecycleHost>(&self, host: &H, id: &str) {
        match MenuAction::from_id(id) {
            Some(MenuAction::Exit) => {
                tracing::info!("菜单退出");
                host.quit(0);
            }
            // Placeholder: the page owns any about view.
            Some(MenuAction::About) => tracing::debug!("菜单 About"),
            None => {}
        }
    }
}
