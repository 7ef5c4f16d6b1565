//! Portal configuration: build-time defaults with an optional runtime override.
//!
//! Defaults come from `option_env!` at build time. In the browser, values found
//! on `window.PORTAL_CONFIG` replace them so a static deployment can tune mock
//! latency or the storage key without rebuilding. Empty or unparsable values
//! are ignored.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_STORAGE_KEY: &str = "user";
pub const DEFAULT_AUTH_LATENCY_MS: u64 = 1000;
pub const DEFAULT_REQUEST_LATENCY_MS: u64 = 1000;
pub const DEFAULT_RECOMMENDATIONS_LATENCY_MS: u64 = 1500;
pub const DEFAULT_ALLOCATION_LATENCY_MS: u64 = 3000;
pub const DEFAULT_NOTICE_TTL_MS: u64 = 5000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    /// `localStorage` key holding the cached identity.
    pub storage_key: String,
    pub auth_latency_ms: u64,
    pub request_latency_ms: u64,
    pub recommendations_latency_ms: u64,
    pub allocation_latency_ms: u64,
    /// How long a notice stays on screen.
    pub notice_ttl_ms: u64,
    /// Whether the mocked allotment lookup finds an allocation.
    pub allotment_available: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            auth_latency_ms: DEFAULT_AUTH_LATENCY_MS,
            request_latency_ms: DEFAULT_REQUEST_LATENCY_MS,
            recommendations_latency_ms: DEFAULT_RECOMMENDATIONS_LATENCY_MS,
            allocation_latency_ms: DEFAULT_ALLOCATION_LATENCY_MS,
            notice_ttl_ms: DEFAULT_NOTICE_TTL_MS,
            allotment_available: true,
        }
    }
}

impl PortalConfig {
    /// Build-time values, then runtime overrides when running in a browser.
    pub fn load() -> Self {
        let mut config = Self::from_build_env();
        if let Some(runtime) = runtime_overrides() {
            runtime.apply(&mut config);
        }
        config
    }

    fn from_build_env() -> Self {
        let build = Overrides {
            storage_key: option_env!("PORTAL_STORAGE_KEY").and_then(normalize_value),
            auth_latency_ms: option_env!("PORTAL_AUTH_LATENCY_MS").and_then(parse_millis),
            request_latency_ms: option_env!("PORTAL_REQUEST_LATENCY_MS").and_then(parse_millis),
            recommendations_latency_ms: option_env!("PORTAL_RECOMMENDATIONS_LATENCY_MS").and_then(parse_millis),
            allocation_latency_ms: option_env!("PORTAL_ALLOCATION_LATENCY_MS").and_then(parse_millis),
            notice_ttl_ms: option_env!("PORTAL_NOTICE_TTL_MS").and_then(parse_millis),
            allotment_available: option_env!("PORTAL_ALLOTMENT_AVAILABLE").and_then(parse_flag),
        };
        let mut config = Self::default();
        build.apply(&mut config);
        config
    }

    pub fn auth_latency(&self) -> Duration {
        Duration::from_millis(self.auth_latency_ms)
    }

    pub fn request_latency(&self) -> Duration {
        Duration::from_millis(self.request_latency_ms)
    }

    pub fn recommendations_latency(&self) -> Duration {
        Duration::from_millis(self.recommendations_latency_ms)
    }

    pub fn allocation_latency(&self) -> Duration {
        Duration::from_millis(self.allocation_latency_ms)
    }

    pub fn notice_ttl(&self) -> Duration {
        Duration::from_millis(self.notice_ttl_ms)
    }
}

/// Partial config; `None` keeps the current value.
#[derive(Debug, Default)]
struct Overrides {
    storage_key: Option<String>,
    auth_latency_ms: Option<u64>,
    request_latency_ms: Option<u64>,
    recommendations_latency_ms: Option<u64>,
    allocation_latency_ms: Option<u64>,
    notice_ttl_ms: Option<u64>,
    allotment_available: Option<bool>,
}

impl Overrides {
    fn apply(self, config: &mut PortalConfig) {
        if let Some(value) = self.storage_key {
            config.storage_key = value;
        }
        if let Some(value) = self.auth_latency_ms {
            config.auth_latency_ms = value;
        }
        if let Some(value) = self.request_latency_ms {
            config.request_latency_ms = value;
        }
        if let Some(value) = self.recommendations_latency_ms {
            config.recommendations_latency_ms = value;
        }
        if let Some(value) = self.allocation_latency_ms {
            config.allocation_latency_ms = value;
        }
        if let Some(value) = self.notice_ttl_ms {
            config.notice_ttl_ms = value;
        }
        if let Some(value) = self.allotment_available {
            config.allotment_available = value;
        }
    }
}

fn normalize_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned()) }
}

fn parse_millis(value: &str) -> Option<u64> {
    value.trim().parse().ok()
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(feature = "csr")]
fn runtime_overrides() -> Option<Overrides> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let raw = Reflect::get(&window, &JsValue::from_str("PORTAL_CONFIG")).ok()?;
    if raw.is_null() || raw.is_undefined() {
        return None;
    }
    let object = Object::from(raw);
    let read = |key: &str| -> Option<String> {
        let value = Reflect::get(&object, &JsValue::from_str(key)).ok()?;
        if let Some(flag) = value.as_bool() {
            return Some(flag.to_string());
        }
        if let Some(number) = value.as_f64() {
            return Some(number.to_string());
        }
        value.as_string()
    };

    Some(Overrides {
        storage_key: read("storage_key").as_deref().and_then(normalize_value),
        auth_latency_ms: read("auth_latency_ms").as_deref().and_then(parse_millis),
        request_latency_ms: read("request_latency_ms").as_deref().and_then(parse_millis),
        recommendations_latency_ms: read("recommendations_latency_ms").as_deref().and_then(parse_millis),
        allocation_latency_ms: read("allocation_latency_ms").as_deref().and_then(parse_millis),
        notice_ttl_ms: read("notice_ttl_ms").as_deref().and_then(parse_millis),
        allotment_available: read("allotment_available").as_deref().and_then(parse_flag),
    })
}

#[cfg(not(feature = "csr"))]
fn runtime_overrides() -> Option<Overrides> {
    None
}
