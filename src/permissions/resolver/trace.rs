/*!
 * Resolution Trace
 * Explains how a decision was reached
 */

use crate::permissions::types::ExplicitSetting;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which branch of resolution produced the decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionPath {
    /// Literal node explicitly granted, hierarchy skipped
    FastPath,
    /// Single-segment node, direct check only
    NoHierarchy,
    /// Node with empty segments, no chain could be built
    Malformed,
    /// Wildcard chain walked
    Chain,
    /// Console principal, no backend consulted
    AlwaysGrant,
    /// Principal disconnected before the check
    Expired,
}

impl fmt::Display for ResolutionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ResolutionPath::FastPath => "fast path",
            ResolutionPath::NoHierarchy => "direct check",
            ResolutionPath::Malformed => "malformed node",
            ResolutionPath::Chain => "wildcard chain",
            ResolutionPath::AlwaysGrant => "console",
            ResolutionPath::Expired => "expired principal",
        };
        f.write_str(label)
    }
}

/// One backend probe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionStep {
    pub candidate: String,
    pub setting: ExplicitSetting,
}

/// Decision plus every probe that led to it, in probe order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub node: String,
    pub allowed: bool,
    pub path: ResolutionPath,
    pub steps: Vec<ResolutionStep>,
    /// Index into `steps` of the setting that fixed the decision
    pub decided_by: Option<usize>,
}

impl Resolution {
    pub(crate) fn new(node: &str, path: ResolutionPath, allowed: bool) -> Self {
        Self {
            node: node.to_string(),
            allowed,
            path,
            steps: Vec::new(),
            decided_by: None,
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    /// Step whose explicit setting decided the outcome, if any
    pub fn deciding_step(&self) -> Option<&ResolutionStep> {
        self.decided_by.and_then(|index| self.steps.get(index))
    }

    /// Candidates consulted, in order
    pub fn candidates(&self) -> impl Iterator<Item = &str> + '_ {
        self.steps.iter().map(|step| step.candidate.as_str())
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.allowed { "allowed" } else { "denied" };
        write!(f, "{}: {} via {}", self.node, verdict, self.path)?;
        match self.deciding_step() {
            Some(step) => write!(f, " ({} = {})", step.candidate, step.setting),
            None if self.path == ResolutionPath::Chain => f.write_str(" (no explicit setting)"),
            None => Ok(()),
        }
    }
}
