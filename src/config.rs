//! Console Configuration
//!
//! Read once at startup from an optional JSON block in the host page:
//! `<script id="console-config" type="application/json">{...}</script>`.

use serde::Deserialize;

/// Element id of the embedded JSON config block
pub const CONFIG_ELEMENT_ID: &str = "console-config";

/// Server-side bounds of the `limit` query parameter on `/logs`
const LOG_LIMIT_RANGE: (u32, u32) = (1, 500);

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Prefix of every backend path
    pub api_base: String,
    pub scheduler_interval_ms: u32,
    pub dashboard_interval_ms: u32,
    pub logs_interval_ms: u32,
    /// Number of log lines requested per poll
    pub log_limit: u32,
    /// Per-request timeout, `0` disables it
    pub request_timeout_ms: u32,
    pub log_level: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: "/api".to_string(),
            scheduler_interval_ms: 8_000,
            dashboard_interval_ms: 10_000,
            logs_interval_ms: 12_000,
            log_limit: 200,
            request_timeout_ms: 30_000,
            log_level: "info".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Parse and normalize a JSON config block
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        let mut config: ConsoleConfig = serde_json::from_str(raw)?;
        config.normalize();
        Ok(config)
    }

    /// Load from the host page, falling back to defaults
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => match Self::from_json(&raw) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring malformed #{}: {}", CONFIG_ELEMENT_ID, e);
                    Self::default()
                }
            },
            _ => Self::default(),
        }
    }

    pub fn request_timeout(&self) -> Option<u32> {
        (self.request_timeout_ms > 0).then_some(self.request_timeout_ms)
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    fn normalize(&mut self) {
        self.api_base = self.api_base.trim_end_matches('/').to_string();
        self.log_limit = self.log_limit.clamp(LOG_LIMIT_RANGE.0, LOG_LIMIT_RANGE.1);
        // a zero interval would spin the poll loop
        for interval in [
            &mut self.scheduler_interval_ms,
            &mut self.dashboard_interval_ms,
            &mut self.logs_interval_ms,
        ] {
            *interval = (*interval).max(1_000);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = ConsoleConfig::from_json(r#"{"logs_interval_ms": 5000}"#).unwrap();
        assert_eq!(config.logs_interval_ms, 5_000);
        assert_eq!(config.dashboard_interval_ms, 10_000);
        assert_eq!(config.scheduler_interval_ms, 8_000);
        assert_eq!(config.api_base, "/api");
    }

    #[test]
    fn normalizes_out_of_range_values() {
        let config = ConsoleConfig::from_json(
            r#"{"api_base": "http://host/api/", "log_limit": 9000, "dashboard_interval_ms": 0}"#,
        )
        .unwrap();
        assert_eq!(config.api_base, "http://host/api");
        assert_eq!(config.log_limit, 500);
        assert_eq!(config.dashboard_interval_ms, 1_000);
    }

    #[test]
    fn timeout_zero_disables() {
        let config = ConsoleConfig::from_json(r#"{"request_timeout_ms": 0}"#).unwrap();
        assert_eq!(config.request_timeout(), None);
        assert_eq!(ConsoleConfig::default().request_timeout(), Some(30_000));
    }

    #[test]
    fn level_filter_falls_back_to_info() {
        let mut config = ConsoleConfig::default();
        config.log_level = "debug".into();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        config.log_level = "loud".into();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(ConsoleConfig::from_json("{not json").is_err());
    }
}
