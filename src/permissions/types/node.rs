/*!
 * Permission Nodes
 * Dotted node parsing and wildcard chain construction
 */

use crate::core::errors::NodeError;
use crate::core::limits::{GLOBAL_WILDCARD, NODE_SEPARATOR, WILDCARD_SUFFIX};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A validated, non-empty sequence of dot-separated segments
///
/// Keeps the raw string plus the byte offset of every separator so ancestor
/// paths can be sliced out without re-joining segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PermissionNode {
    raw: String,
    separators: Vec<usize>,
}

impl PermissionNode {
    /// Parse a raw node string, rejecting empty nodes and empty segments
    pub fn parse(raw: &str) -> Result<Self, NodeError> {
        if raw.is_empty() {
            return Err(NodeError::Empty);
        }

        let mut separators = Vec::new();
        let mut segment_start = 0;
        for (offset, ch) in raw.char_indices() {
            if ch != NODE_SEPARATOR {
                continue;
            }
            if offset == segment_start {
                return Err(NodeError::InvalidNodeFormat {
                    node: raw.to_string(),
                    position: separators.len(),
                });
            }
            separators.push(offset);
            segment_start = offset + NODE_SEPARATOR.len_utf8();
        }

        if segment_start == raw.len() {
            return Err(NodeError::InvalidNodeFormat {
                node: raw.to_string(),
                position: separators.len(),
            });
        }

        Ok(Self {
            raw: raw.to_string(),
            separators,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Number of segments (always at least one)
    pub fn depth(&self) -> usize {
        self.separators.len() + 1
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> + '_ {
        self.raw.split(NODE_SEPARATOR)
    }

    /// First segment
    pub fn root(&self) -> &str {
        self.ancestor(1)
    }

    /// Whether the node has ancestors to consult
    pub fn has_hierarchy(&self) -> bool {
        !self.separators.is_empty()
    }

    /// Path made of the first `depth` segments
    fn ancestor(&self, depth: usize) -> &str {
        match self.separators.get(depth.saturating_sub(1)) {
            Some(&end) => &self.raw[..end],
            None => &self.raw,
        }
    }

    /// Candidate chain for this node, most specific first
    ///
    /// Single-segment nodes have no chain. Candidates are not deduplicated:
    /// a node that is itself a wildcard, such as `plots.*`, yields
    /// `plots.*, plots.*, *` and its first ancestor is probed twice.
    pub fn wildcard_chain(&self) -> Option<WildcardChain> {
        if !self.has_hierarchy() {
            return None;
        }

        let mut candidates = Vec::with_capacity(self.depth() + 1);
        candidates.push(self.raw.clone());
        for depth in (1..self.depth()).rev() {
            candidates.push(format!("{}{}", self.ancestor(depth), WILDCARD_SUFFIX));
        }
        candidates.push(GLOBAL_WILDCARD.to_string());

        Some(WildcardChain { candidates })
    }
}

impl FromStr for PermissionNode {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for PermissionNode {
    type Error = NodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<PermissionNode> for String {
    fn from(node: PermissionNode) -> Self {
        node.raw
    }
}

impl AsRef<str> for PermissionNode {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for PermissionNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Ordered list of node strings to probe, most specific first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WildcardChain {
    candidates: Vec<String>,
}

impl WildcardChain {
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.candidates.iter().map(String::as_str)
    }
}

impl<'a> IntoIterator for &'a WildcardChain {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.iter()
    }
}

impl IntoIterator for WildcardChain {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.candidates.into_iter()
    }
}

impl fmt::Display for WildcardChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.candidates.join(", "))
    }
}

/// Parse `raw` and build its wildcard chain
///
/// `Ok(None)` for single-segment nodes, which only get a direct check.
pub fn wildcard_chain(raw: &str) -> Result<Option<WildcardChain>, NodeError> {
    Ok(PermissionNode::parse(raw)?.wildcard_chain())
}
