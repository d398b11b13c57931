use serde::Serialize;
use tauri::{AppHandle, Emitter};

/// Hands snapshots to the webview after a state mutation. Controllers
/// built in tests run detached, with no window to notify.
#[derive(Clone, Default)]
pub struct EventChannel {
    handle: Option<AppHandle>,
}

impl EventChannel {
    pub fn new(handle: AppHandle) -> Self {
        Self {
            handle: Some(handle),
        }
    }

    #[cfg(test)]
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn emit<P: Serialize + Clone>(&self, event: &str, payload: P) {
        if let Some(handle) = &self.handle {
            let _ = handle.emit(event, payload);
        }
    }
}
