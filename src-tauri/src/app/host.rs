//! Usage: `LifecycleHost` backed by the real Tauri app handle (webview window, menu bar, exit).

use crate::content::NavigationDecision;
use crate::error::LifecycleError;
use crate::lifecycle::LifecycleHost;
use crate::menu::MenuTemplate;
use crate::window::WindowSpec;
use tauri::{AppHandle, Runtime, Url, WebviewUrl, WebviewWindow, WebviewWindowBuilder};

impl<R: Runtime> LifecycleHost for AppHandle<R> {
    fn open_window(&self, spec: &WindowSpec) -> Result<(), LifecycleError> {
        let content = spec.content.clone();
        let builder = WebviewWindowBuilder::new(
            self,
            spec.label,
            WebviewUrl::External(spec.content.url().clone()),
        )
        .on_navigation(move |target| match content.navigation_decision(target) {
            NavigationDecision::Allow => true,
            NavigationDecision::OpenExternally => {
                open_external(target);
                false
            }
            NavigationDecision::Deny => {
                tracing::warn!(url = %target, "拒绝窗口内导航");
                false
            }
        });

        #[cfg(desktop)]
        let builder = builder
            .title(&spec.title)
            .inner_size(spec.width, spec.height)
            .center();

        let window = builder.build().map_err(|e| LifecycleError::WindowBuild {
            label: spec.label.to_string(),
            message: e.to_string(),
        })?;

        if spec.devtools {
            open_devtools(&window);
        }
        Ok(())
    }

    #[cfg(desktop)]
    fn install_menu(&self, template: &MenuTemplate) -> Result<(), LifecycleError> {
        let menu = crate::menu::build(self, template)?;
        self.set_menu(menu)
            .map_err(|e| LifecycleError::Menu(format!("failed to set app menu: {e}")))?;
        Ok(())
    }

    #[cfg(not(desktop))]
    fn install_menu(&self, _template: &MenuTemplate) -> Result<(), LifecycleError> {
        Ok(())
    }

    fn quit(&self, code: i32) {
        self.exit(code);
    }
}

fn open_external(target: &Url) {
    if let Err(err) = tauri_plugin_opener::open_url(target.as_str(), None::<&str>) {
        tracing::warn!(url = %target, "外部链接打开失败: {}", err);
    }
}

#[cfg(any(debug_assertions, feature = "devtools"))]
fn open_devtools<R: Runtime>(window: &WebviewWindow<R>) {
    window.open_devtools();
}

#[cfg(not(any(debug_assertions, feature = "devtools")))]
fn open_devtools<R: Runtime>(window: &WebviewWindow<R>) {
    tracing::warn!(
        label = %window.label(),
        "当前构建未启用 devtools（需要 `devtools` feature）"
    );
}
