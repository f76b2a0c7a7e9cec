use serde::{Deserialize, Serialize};

use crate::forms::MAX_TYPE_NAME_LEN;

/// Minimum severity the frontend logger forwards to the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parse a level name, case-insensitively. Unknown names yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Configuration shared by every screen of the admin panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Base URL of the REST backend, without trailing slash
    pub api_base_url: String,
    /// Rows requested per table page
    pub page_size: u32,
    /// Maximum number of flow types an account may hold
    pub max_flow_types: usize,
    /// Maximum length of a flow type name
    pub max_type_name_len: usize,
    /// Maximum length of the remark search keyword
    pub max_keyword_len: usize,
    pub log_level: LogLevel,
    /// Where users fix a missing public email address
    pub profile_settings_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:3000".to_string(),
            page_size: 20,
            max_flow_types: 100,
            max_type_name_len: MAX_TYPE_NAME_LEN,
            max_keyword_len: 300,
            log_level: LogLevel::Info,
            profile_settings_url: "https://github.com/settings/profile".to_string(),
        }
    }
}

impl AppConfig {
    /// Apply optional overrides on top of the defaults.
    ///
    /// Blank or malformed values are ignored so a bad build variable never
    /// leaves the panel without a backend URL.
    pub fn with_overrides(mut self, api_base_url: Option<&str>, log_level: Option<&str>) -> Self {
        if let Some(url) = api_base_url.map(str::trim).filter(|url| !url.is_empty()) {
            self.api_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(level) = log_level.and_then(LogLevel::parse) {
            self.log_level = level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.max_flow_types, 100);
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_overrides_trim_and_ignore_garbage() {
        let config = AppConfig::default().with_overrides(Some(" https://api.example.com/ "), Some("DEBUG"));
        assert_eq!(config.api_base_url, "https://api.example.com");
        assert_eq!(config.log_level, LogLevel::Debug);

        let config = AppConfig::default().with_overrides(Some("   "), Some("loud"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert_eq!(LogLevel::parse("warning"), Some(LogLevel::Warn));
    }
}
