//! Configuration for the seating service

use crate::domain::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::env;

/// Seating configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeatingConfig {
    /// Enforce dislikes on the first attempt
    pub enforce_preferences: bool,
    /// Retry once with dislikes ignored when the first attempt fails
    pub fallback_without_preferences: bool,
    /// What the retry does with state left by the failed attempt
    pub retry_policy: RetryPolicy,
    /// Reject duplicate names, zero sizes and self-dislikes at registration
    pub validate_registrations: bool,
}

impl Default for SeatingConfig {
    fn default() -> Self {
        Self {
            enforce_preferences: true,
            fallback_without_preferences: true,
            retry_policy: RetryPolicy::ResetBeforeRetry,
            validate_registrations: false,
        }
    }
}

impl SeatingConfig {
    /// Create config for testing.
    pub fn for_testing() -> Self {
        Self {
            validate_registrations: true,
            ..Self::default()
        }
    }

    /// Apply environment overrides on top of this config.
    ///
    /// # Environment Variables
    ///
    /// - `WS_ENFORCE_PREFERENCES`: enforce dislikes on the first attempt
    /// - `WS_FALLBACK`: retry without preferences on failure
    /// - `WS_RETRY_POLICY`: `reset_before_retry` or `continue_from_partial`
    /// - `WS_VALIDATE`: validate registrations
    ///
    /// Unparseable values are ignored.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(v) = env_flag("WS_ENFORCE_PREFERENCES") {
            self.enforce_preferences = v;
        }
        if let Some(v) = env_flag("WS_FALLBACK") {
            self.fallback_without_preferences = v;
        }
        if let Some(policy) = env::var("WS_RETRY_POLICY")
            .ok()
            .and_then(|v| RetryPolicy::parse(&v))
        {
            self.retry_policy = policy;
        }
        if let Some(v) = env_flag("WS_VALIDATE") {
            self.validate_registrations = v;
        }
        self
    }
}

fn env_flag(key: &str) -> Option<bool> {
    env::var(key).ok().and_then(|v| parse_flag(&v))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SeatingConfig::default();
        assert!(config.enforce_preferences);
        assert!(config.fallback_without_preferences);
        assert_eq!(config.retry_policy, RetryPolicy::ResetBeforeRetry);
        assert!(!config.validate_registrations);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: SeatingConfig =
            serde_json::from_str(r#"{ "retry_policy": "continue_from_partial" }"#).unwrap();
        assert_eq!(config.retry_policy, RetryPolicy::ContinueFromPartial);
        assert!(config.enforce_preferences);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
