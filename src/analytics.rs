//! Thin analytics recorder.
//!
//! Explicitly constructed and passed by reference, never a process-wide
//! singleton. When enabled it emits structured `tracing` events under the
//! `analytics` target for downstream collection; disabled it is a no-op.
//! It performs no network calls of its own.

use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Analytics {
    enabled: bool,
}

impl Analytics {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn page_view(&self, page: &str) {
        if !self.enabled {
            return;
        }
        tracing::info!(target: "analytics", event = "page_view", page);
    }

    pub fn event(&self, name: &str, params: Value) {
        if !self.enabled {
            return;
        }
        tracing::info!(target: "analytics", event = name, params = %params);
    }

    pub fn signup(&self, method: &str) {
        self.event("sign_up", serde_json::json!({ "method": method }));
    }

    pub fn login(&self, method: &str) {
        self.event("login", serde_json::json!({ "method": method }));
    }
}
