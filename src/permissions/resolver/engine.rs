/*!
 * Resolution Engine
 * Walks a node's wildcard chain against a tri-state backend
 */

use super::trace::{Resolution, ResolutionPath, ResolutionStep};
use crate::core::limits::NODE_SEPARATOR;
use crate::permissions::types::{ExplicitSetting, PermissionNode, TriStateLookup};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// How explicit settings met along the chain combine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Precedence {
    /// Every explicit setting overwrites the running decision. The chain runs
    /// specific to general, so the most general explicit setting wins.
    #[default]
    LastExplicit,
    /// The first explicit setting met wins
    MostSpecific,
}

/// Outcome of one walk, without the probe list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Outcome {
    pub allowed: bool,
    pub path: ResolutionPath,
    pub decided_by: Option<usize>,
}

impl Outcome {
    fn new(allowed: bool, path: ResolutionPath, decided_by: Option<usize>) -> Self {
        Self {
            allowed,
            path,
            decided_by,
        }
    }
}

/// Stateless resolver shared by every profile of a handler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolutionEngine {
    precedence: Precedence,
}

impl ResolutionEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_precedence(precedence: Precedence) -> Self {
        Self { precedence }
    }

    pub fn precedence(&self) -> Precedence {
        self.precedence
    }

    /// Decide `node` for the principal behind `lookup`
    ///
    /// Never fails: malformed nodes and missing settings deny.
    pub fn resolve<L>(&self, lookup: &L, scope: Option<&str>, node: &str) -> bool
    where
        L: TriStateLookup + ?Sized,
    {
        self.evaluate(lookup, scope, node, |_, _| {}).allowed
    }

    /// Same decision as [`resolve`](Self::resolve), with every probe recorded
    pub fn explain<L>(&self, lookup: &L, scope: Option<&str>, node: &str) -> Resolution
    where
        L: TriStateLookup + ?Sized,
    {
        let mut steps = Vec::new();
        let outcome = self.evaluate(lookup, scope, node, |candidate, setting| {
            steps.push(ResolutionStep {
                candidate: candidate.to_string(),
                setting,
            });
        });

        let mut resolution = Resolution::new(node, outcome.path, outcome.allowed);
        resolution.steps = steps;
        resolution.decided_by = outcome.decided_by;
        resolution
    }

    pub(crate) fn outcome<L>(&self, lookup: &L, scope: Option<&str>, node: &str) -> Outcome
    where
        L: TriStateLookup + ?Sized,
    {
        self.evaluate(lookup, scope, node, |_, _| {})
    }

    /// Step indices handed to `record` match `Outcome::decided_by`
    fn evaluate<L, F>(&self, lookup: &L, scope: Option<&str>, node: &str, mut record: F) -> Outcome
    where
        L: TriStateLookup + ?Sized,
        F: FnMut(&str, ExplicitSetting),
    {
        let direct = lookup.query(scope, node);
        record(node, direct);

        if direct.is_granted() {
            trace!(node, "literal node granted, skipping hierarchy");
            return Outcome::new(true, ResolutionPath::FastPath, Some(0));
        }

        if !node.contains(NODE_SEPARATOR) {
            return Outcome::new(false, ResolutionPath::NoHierarchy, direct.is_set().then_some(0));
        }

        let chain = match PermissionNode::parse(node).map(|parsed| parsed.wildcard_chain()) {
            Ok(Some(chain)) => chain,
            Ok(None) => {
                return Outcome::new(false, ResolutionPath::NoHierarchy, direct.is_set().then_some(0))
            }
            Err(err) => {
                debug!(node, error = %err, "malformed node, denying");
                return Outcome::new(false, ResolutionPath::Malformed, None);
            }
        };

        let mut allowed = false;
        let mut decided_by = None;
        for (index, candidate) in chain.iter().enumerate() {
            // The chain starts with the literal node, already probed above
            let setting = if index == 0 {
                direct
            } else {
                let setting = lookup.query(scope, candidate);
                record(candidate, setting);
                setting
            };
            trace!(node, candidate, %setting, "probed candidate");

            if let Some(value) = setting.value() {
                allowed = value;
                decided_by = Some(index);
                if self.precedence == Precedence::MostSpecific {
                    break;
                }
            }
        }

        debug!(node, allowed, ?decided_by, "resolved through wildcard chain");
        Outcome::new(allowed, ResolutionPath::Chain, decided_by)
    }
}
