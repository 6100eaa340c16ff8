//! Usage: Tauri-managed state holding the lifecycle manager.

use crate::lifecycle::LifecycleManager;
use std::sync::Mutex;

pub(crate) struct LifecycleState(pub(crate) Mutex<LifecycleManager>);

impl LifecycleState {
    pub(crate) fn new(manager: LifecycleManager) -> Self {
        Self(Mutex::new(manager))
    }
}
