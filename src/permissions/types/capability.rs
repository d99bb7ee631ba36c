/*!
 * Handler Capabilities
 * Static declaration of what a permission backend supports
 */

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Feature a permission backend may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapabilityFlag {
    /// Permissions of connected principals can be resolved
    OnlinePermissions,
    /// Permissions of offline principals can be resolved
    OfflinePermissions,
}

impl fmt::Display for CapabilityFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CapabilityFlag::OnlinePermissions => "ONLINE_PERMISSIONS",
            CapabilityFlag::OfflinePermissions => "OFFLINE_PERMISSIONS",
        };
        f.write_str(name)
    }
}

/// Immutable set of capability flags fixed at handler construction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapabilitySet {
    flags: BTreeSet<CapabilityFlag>,
}

impl CapabilitySet {
    pub fn new(flags: impl IntoIterator<Item = CapabilityFlag>) -> Self {
        Self {
            flags: flags.into_iter().collect(),
        }
    }

    /// Capabilities of a backend that only sees connected principals
    pub fn online_only() -> Self {
        Self::new([CapabilityFlag::OnlinePermissions])
    }

    pub fn contains(&self, flag: CapabilityFlag) -> bool {
        self.flags.contains(&flag)
    }

    /// Whether offline principals can be resolved at all
    pub fn supports_offline(&self) -> bool {
        self.contains(CapabilityFlag::OfflinePermissions)
    }

    pub fn iter(&self) -> impl Iterator<Item = CapabilityFlag> + '_ {
        self.flags.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}

impl Default for CapabilitySet {
    fn default() -> Self {
        Self::online_only()
    }
}

impl FromIterator<CapabilityFlag> for CapabilitySet {
    fn from_iter<I: IntoIterator<Item = CapabilityFlag>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl fmt::Display for CapabilitySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.iter().map(|flag| flag.to_string()).collect();
        write!(f, "[{}]", names.join(", "))
    }
}
