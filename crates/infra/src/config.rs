//! Configuration loading and representation.
//!
//! Settings come from environment variables with defaults; a bad value falls
//! back to the default with a warning rather than aborting the run.

use std::path::PathBuf;

use catering_observability::LogFormat;
use catering_registry::ReassignPolicy;

pub const STATE_PATH_VAR: &str = "CATERING_STATE_PATH";
pub const REASSIGN_POLICY_VAR: &str = "CATERING_REASSIGN_POLICY";
pub const REASSIGN_PROMPT_VAR: &str = "CATERING_REASSIGN_PROMPT";
pub const LOG_FORMAT_VAR: &str = "CATERING_LOG_FORMAT";

pub const DEFAULT_STATE_PATH: &str = "cateringData.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the registry snapshot lives between runs.
    pub state_path: PathBuf,
    pub reassign_policy: ReassignPolicy,
    /// Offer a reassignment round after the initial assignments.
    pub reassign_prompt: bool,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(DEFAULT_STATE_PATH),
            reassign_policy: ReassignPolicy::default(),
            reassign_prompt: false,
            log_format: LogFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(path) = lookup(STATE_PATH_VAR).filter(|p| !p.trim().is_empty()) {
            config.state_path = PathBuf::from(path.trim());
        }

        if let Some(raw) = lookup(REASSIGN_POLICY_VAR) {
            match raw.parse::<ReassignPolicy>() {
                Ok(policy) => config.reassign_policy = policy,
                Err(err) => tracing::warn!(
                    "{REASSIGN_POLICY_VAR}: {err}; using {}",
                    config.reassign_policy
                ),
            }
        }

        if let Some(raw) = lookup(REASSIGN_PROMPT_VAR) {
            match parse_flag(&raw) {
                Some(flag) => config.reassign_prompt = flag,
                None => tracing::warn!("{REASSIGN_PROMPT_VAR}: unrecognized value '{raw}'; ignoring"),
            }
        }

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse::<LogFormat>() {
                Ok(format) => config.log_format = format,
                Err(err) => tracing::warn!("{LOG_FORMAT_VAR}: {err}"),
            }
        }

        config
    }

    /// Override the state path (e.g. from the first CLI argument).
    pub fn with_state_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.state_path = path.into();
        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
