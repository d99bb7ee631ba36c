/*!
 * Explicit Settings
 * Tri-state value a backend reports for a node string
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a node is explicitly configured, and to what
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplicitSetting {
    Granted,
    Denied,
    #[default]
    Unset,
}

impl ExplicitSetting {
    /// Build from a backend that answers "is it set" and "what is it" separately
    pub fn from_flags(is_set: bool, value: bool) -> Self {
        match (is_set, value) {
            (false, _) => ExplicitSetting::Unset,
            (true, true) => ExplicitSetting::Granted,
            (true, false) => ExplicitSetting::Denied,
        }
    }

    pub fn is_set(self) -> bool {
        !matches!(self, ExplicitSetting::Unset)
    }

    pub fn is_granted(self) -> bool {
        matches!(self, ExplicitSetting::Granted)
    }

    /// Boolean value of an explicit setting, `None` when unset
    pub fn value(self) -> Option<bool> {
        match self {
            ExplicitSetting::Granted => Some(true),
            ExplicitSetting::Denied => Some(false),
            ExplicitSetting::Unset => None,
        }
    }
}

impl From<Option<bool>> for ExplicitSetting {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => ExplicitSetting::Granted,
            Some(false) => ExplicitSetting::Denied,
            None => ExplicitSetting::Unset,
        }
    }
}

impl From<bool> for ExplicitSetting {
    fn from(value: bool) -> Self {
        Some(value).into()
    }
}

impl fmt::Display for ExplicitSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ExplicitSetting::Granted => "granted",
            ExplicitSetting::Denied => "denied",
            ExplicitSetting::Unset => "unset",
        };
        f.write_str(label)
    }
}
