use anyhow::Context;

use crate::api::Latency;

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub latency: Latency,
    pub log_filter: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let latency = std::env::var("FITNESS_MOCK_LATENCY").ok();
        let log_filter = std::env::var("RUST_LOG").ok();
        Self::from_values(latency.as_deref(), log_filter.as_deref())
    }

    fn from_values(latency: Option<&str>, log_filter: Option<&str>) -> anyhow::Result<Self> {
        let latency = match latency {
            None => Latency::Simulated,
            Some(value) => parse_latency(value)
                .with_context(|| format!("FITNESS_MOCK_LATENCY must be on or off, got {value:?}"))?,
        };

        Ok(Self {
            latency,
            log_filter: log_filter
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(DEFAULT_LOG_FILTER)
                .to_string(),
        })
    }
}

fn parse_latency(value: &str) -> Option<Latency> {
    match value.trim().to_ascii_lowercase().as_str() {
        "on" | "true" | "1" => Some(Latency::Simulated),
        "off" | "false" | "0" => Some(Latency::Disabled),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_simulate_latency() {
        let config = Config::from_values(None, None).unwrap();
        assert_eq!(config.latency, Latency::Simulated);
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn latency_can_be_disabled() {
        let config = Config::from_values(Some("OFF"), Some("debug")).unwrap();
        assert_eq!(config.latency, Latency::Disabled);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn unknown_latency_value_fails() {
        assert!(Config::from_values(Some("sometimes"), None).is_err());
    }

    #[test]
    fn blank_log_filter_falls_back() {
        let config = Config::from_values(None, Some("  ")).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }
}
