/*!
 * Handler Configuration
 * Assembled once by the host and passed by reference into constructors
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{MAX_AUDIT_EVENTS, MAX_AUDIT_EVENTS_PER_PRINCIPAL};
use crate::permissions::resolver::Precedence;
use crate::permissions::types::{CapabilityFlag, CapabilitySet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Decision audit settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuditConfig {
    pub enabled: bool,
    pub max_events: usize,
    pub max_events_per_principal: usize,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_events: MAX_AUDIT_EVENTS,
            max_events_per_principal: MAX_AUDIT_EVENTS_PER_PRINCIPAL,
        }
    }
}

/// Configuration of a permission handler
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HandlerConfig {
    /// Declared capabilities, fixed for the handler's lifetime
    pub capabilities: CapabilitySet,
    /// Combination rule for explicit settings along the chain
    pub precedence: Precedence,
    pub audit: AuditConfig,
}

impl HandlerConfig {
    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.capabilities.contains(CapabilityFlag::OnlinePermissions) {
            return Err(ConfigError::Invalid {
                reason: "capabilities must include ONLINE_PERMISSIONS".to_string(),
            });
        }
        if self.capabilities.supports_offline() {
            return Err(ConfigError::Invalid {
                reason: "OFFLINE_PERMISSIONS cannot be declared: offline principals have no live backend"
                    .to_string(),
            });
        }
        if self.audit.enabled && (self.audit.max_events == 0 || self.audit.max_events_per_principal == 0) {
            return Err(ConfigError::Invalid {
                reason: "audit buffers must hold at least one event".to_string(),
            });
        }
        Ok(())
    }
}
