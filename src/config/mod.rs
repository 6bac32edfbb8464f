#[cfg(feature = "cli")]
pub mod cli;
pub mod model_file;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use model_file::ServiceModelFile;

use crate::utils::error::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::env;

pub const ENV_CLIENT_VALIDATION: &str = "SSM_MODEL_CLIENT_VALIDATION";
pub const ENV_REJECT_UNKNOWN_FIELDS: &str = "SSM_MODEL_REJECT_UNKNOWN_FIELDS";
pub const ENV_LOG_PAYLOADS: &str = "SSM_MODEL_LOG_PAYLOADS";

/// Switches for the marshaller. All off by default: payloads are sent as built,
/// unknown response fields are skipped and payload bodies are not logged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarshallerConfig {
    pub client_side_validation: bool,
    pub reject_unknown_fields: bool,
    pub log_payloads: bool,
}

impl MarshallerConfig {
    pub fn with_client_side_validation(mut self, enabled: bool) -> Self {
        self.client_side_validation = enabled;
        self
    }

    pub fn with_reject_unknown_fields(mut self, enabled: bool) -> Self {
        self.reject_unknown_fields = enabled;
        self
    }

    pub fn with_log_payloads(mut self, enabled: bool) -> Self {
        self.log_payloads = enabled;
        self
    }

    /// Reads the `SSM_MODEL_*` variables; unset variables keep the default.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let flag = |name: &str| -> Result<bool> {
            match lookup(name) {
                None => Ok(false),
                Some(raw) => parse_flag(name, &raw),
            }
        };

        Ok(Self {
            client_side_validation: flag(ENV_CLIENT_VALIDATION)?,
            reject_unknown_fields: flag(ENV_REJECT_UNKNOWN_FIELDS)?,
            log_payloads: flag(ENV_LOG_PAYLOADS)?,
        })
    }
}

fn parse_flag(name: &str, raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" | "" => Ok(false),
        _ => Err(ModelError::InvalidConfigValueError {
            field: name.to_string(),
            value: raw.to_string(),
            reason: "expected true, false, 1 or 0".to_string(),
        }),
    }
}
