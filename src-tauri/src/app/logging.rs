//! Usage: Tracing setup (console + daily rolling file under the app log dir, `log` bridged in).

use std::sync::OnceLock;
use tauri::{AppHandle, Manager, Runtime};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILTER_ENV: &str = "GOOLLE_SHOP_LOG";
const LOG_FILE_PREFIX: &str = "goolle-shop.log";

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn default_directive() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn env_filter(raw: Option<&str>) -> EnvFilter {
    raw.map(str::trim)
        .filter(|v| !v.is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive()))
}

pub(crate) fn init<R: Runtime>(app: &AppHandle<R>) {
    let filter = env_filter(std::env::var(LOG_FILTER_ENV).ok().as_deref());

    let file_layer = match app.path().app_log_dir() {
        Ok(dir) => match std::fs::create_dir_all(&dir) {
            Ok(()) => {
                let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let _ = FILE_GUARD.set(guard);
                Some(fmt::layer().with_ansi(false).with_writer(writer))
            }
            Err(err) => {
                eprintln!("failed to create log dir {}: {err}", dir.display());
                None
            }
        },
        Err(err) => {
            eprintln!("failed to resolve log dir: {err}");
            None
        }
    };

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return;
    }
    let _ = tracing_log::LogTracer::init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_filter_uses_valid_override() {
        let filter = env_filter(Some("warn,goolle_shop_lib=trace")).to_string();
        assert!(filter.contains("goolle_shop_lib=trace"));
        assert!(filter.contains("warn"));
    }

    #[test]
    fn env_filter_falls_back_on_blank_or_invalid() {
        assert_eq!(env_filter(None).to_string(), default_directive());
        assert_eq!(env_filter(Some("  ")).to_string(), default_directive());
        assert_eq!(env_filter(Some("goolle_shop_lib=loud")).to_string(), default_directive());
    }
}
