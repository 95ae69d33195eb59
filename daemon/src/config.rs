//! Gate console configuration, loaded from TOML.

use serde::{Deserialize, Serialize};
use society_types::{DecisionPolicy, GateParams, MatchScope, Role};
use society_utils::LogFormat;
use society_verification::DirectoryError;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(String),

    #[error("invalid visitor directory: {0}")]
    Directory(#[from] DirectoryError),

    #[error("{0}")]
    Invalid(String),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateConfig {
    /// Role of the signed-in operator.
    #[serde(default = "default_operator_role")]
    pub operator_role: Role,

    /// TOML file of pre-authorized visitors. The demo directory is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory_path: Option<PathBuf>,

    #[serde(default = "default_notification_ttl_secs")]
    pub notification_ttl_secs: u64,

    #[serde(default = "default_alert_ttl_secs")]
    pub alert_ttl_secs: u64,

    #[serde(default)]
    pub match_scope: MatchScope,

    #[serde(default)]
    pub decision_policy: DecisionPolicy,

    /// Whether the simulated camera starts successfully.
    #[serde(default = "default_true")]
    pub camera_available: bool,

    /// Code the simulated camera "detects".
    #[serde(default = "default_demo_code")]
    pub demo_code: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_operator_role() -> Role {
    Role::Security
}

fn default_notification_ttl_secs() -> u64 {
    GateParams::DEFAULT_NOTIFICATION_TTL_SECS
}

fn default_alert_ttl_secs() -> u64 {
    GateParams::DEFAULT_ALERT_TTL_SECS
}

fn default_true() -> bool {
    true
}

fn default_demo_code() -> String {
    "VP-2024-001".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl GateConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.notification_ttl_secs == 0 {
            return Err(ConfigError::Invalid(
                "notification_ttl_secs must be at least 1".into(),
            ));
        }
        if self.alert_ttl_secs == 0 {
            return Err(ConfigError::Invalid("alert_ttl_secs must be at least 1".into()));
        }
        Ok(())
    }

    pub fn gate_params(&self) -> GateParams {
        GateParams {
            notification_ttl_secs: self.notification_ttl_secs,
            alert_ttl_secs: self.alert_ttl_secs,
            match_scope: self.match_scope,
            decision_policy: self.decision_policy,
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            operator_role: default_operator_role(),
            directory_path: None,
            notification_ttl_secs: default_notification_ttl_secs(),
            alert_ttl_secs: default_alert_ttl_secs(),
            match_scope: MatchScope::default(),
            decision_policy: DecisionPolicy::default(),
            camera_available: default_true(),
            demo_code: default_demo_code(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}
