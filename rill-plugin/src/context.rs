//! Compile-time context handed to extensions

use std::collections::HashMap;

/// Read-only view of extension configuration properties.
///
/// Part of the uniform `validate` signature; most scalar functions never
/// consult it.
#[derive(Debug, Clone, Default)]
pub struct ConfigReader {
    properties: HashMap<String, String>,
}

impl ConfigReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    pub fn get_or(&self, key: &str, default: &'static str) -> &str {
        self.get(key).unwrap_or(default)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        self.get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }

    pub fn get_i64(&self, key: &str, default: i64) -> i64 {
        self.get(key)
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}

/// Context of the owning streaming application
#[derive(Debug, Clone)]
pub struct AppContext {
    pub app_name: String,
    pub config: ConfigReader,
}

impl AppContext {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            config: ConfigReader::new(),
        }
    }

    pub fn with_config(mut self, config: ConfigReader) -> Self {
        self.config = config;
        self
    }
}
