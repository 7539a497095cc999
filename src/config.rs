//! App Configuration
//!
//! Startup settings, optionally overridden by a `window.__TODO_VIEW_CONFIG__`
//! object injected by the host page. Every field has a default.

use std::time::Duration;

use serde::Deserialize;

use crate::reconcile::{FilterMode, SortMode};

/// Name of the global holding config overrides
pub const CONFIG_GLOBAL: &str = "__TODO_VIEW_CONFIG__";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub bridge: BridgeConfig,
    pub default_filter: FilterMode,
    pub default_sort: SortMode,
    pub limits: InputLimits,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bridge: BridgeConfig::default(),
            default_filter: FilterMode::All,
            default_sort: SortMode::Created,
            limits: InputLimits::default(),
            log_level: "info".to_string(),
        }
    }
}

/// Readiness polling for the host bridge
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct BridgeConfig {
    pub timeout_ms: u32,
    pub poll_interval_ms: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 3000,
            poll_interval_ms: 50,
        }
    }
}

impl BridgeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(u64::from(self.timeout_ms))
    }

    /// Never zero, so polling always advances
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.poll_interval_ms.max(1)))
    }
}

/// Client-side length checks, mirroring the host's validation
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct InputLimits {
    pub title_max: usize,
    pub description_max: usize,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            title_max: 200,
            description_max: 1000,
        }
    }
}

impl AppConfig {
    /// Read overrides from the host page. Falls back to defaults.
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let Some(window) = web_sys::window() else {
            return Self::default();
        };
        let value = match js_sys::Reflect::get(&window, &CONFIG_GLOBAL.into()) {
            Ok(value) if !value.is_undefined() && !value.is_null() => value,
            _ => return Self::default(),
        };
        match serde_wasm_bindgen::from_value(value) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("[app] ignoring malformed {}: {}", CONFIG_GLOBAL, e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
