/*!
 * Permission Audit Trail
 * Records resolved decisions for security monitoring
 *
 * Write-only: nothing here is consulted when deciding.
 */

use crate::config::AuditConfig;
use crate::core::types::PrincipalId;
use crate::permissions::resolver::ResolutionPath;
use ahash::RandomState;
use dashmap::DashMap;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, TimestampSeconds};
use std::collections::VecDeque;
use std::time::SystemTime;

/// Audit event severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSeverity {
    Info,
    Warning,
}

/// One resolved permission check
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AuditEvent {
    pub principal: PrincipalId,
    pub node: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    pub allowed: bool,
    pub path: ResolutionPath,
    pub severity: AuditSeverity,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub logged_at: SystemTime,
}

impl AuditEvent {
    pub fn new(
        principal: PrincipalId,
        scope: Option<&str>,
        node: &str,
        allowed: bool,
        path: ResolutionPath,
    ) -> Self {
        let severity = if allowed {
            AuditSeverity::Info
        } else {
            AuditSeverity::Warning
        };

        Self {
            principal,
            node: node.to_string(),
            scope: scope.map(str::to_string),
            allowed,
            path,
            severity,
            logged_at: SystemTime::now(),
        }
    }
}

/// Bounded audit log with per-principal views
///
/// Each principal's buffer is bounded, but one buffer and one denial
/// counter are kept per distinct principal until `clear_principal` or
/// `clear_all` is called. Hosts should clear a principal when it disconnects.
pub struct AuditLogger {
    max_events: usize,
    max_events_per_principal: usize,
    /// Global event log (ring buffer)
    events: RwLock<VecDeque<AuditEvent>>,
    principal_events: DashMap<PrincipalId, VecDeque<AuditEvent>, RandomState>,
    denial_counts: DashMap<PrincipalId, u64, RandomState>,
}

impl AuditLogger {
    pub fn new(max_events: usize, max_events_per_principal: usize) -> Self {
        Self {
            max_events,
            max_events_per_principal,
            events: RwLock::new(VecDeque::with_capacity(max_events.min(1024))),
            principal_events: DashMap::with_hasher(RandomState::new()),
            denial_counts: DashMap::with_hasher(RandomState::new()),
        }
    }

    pub fn with_config(config: &AuditConfig) -> Self {
        Self::new(config.max_events, config.max_events_per_principal)
    }

    /// Log a decision
    pub fn log(&self, event: AuditEvent) {
        let principal = event.principal;
        let is_denied = !event.allowed;

        {
            let mut events = self.events.write();
            if events.len() >= self.max_events {
                events.pop_front();
            }
            events.push_back(event.clone());
        }

        {
            let mut entry = self.principal_events.entry(principal).or_default();
            if entry.len() >= self.max_events_per_principal {
                entry.pop_front();
            }
            entry.push_back(event);
        }

        if is_denied {
            *self.denial_counts.entry(principal).or_insert(0) += 1;
        }
    }

    /// Most recent events, newest first
    pub fn recent(&self, limit: usize) -> Vec<AuditEvent> {
        self.events.read().iter().rev().take(limit).cloned().collect()
    }

    /// Most recent events of one principal, newest first
    pub fn for_principal(&self, principal: PrincipalId, limit: usize) -> Vec<AuditEvent> {
        self.principal_events
            .get(&principal)
            .map(|entry| entry.iter().rev().take(limit).cloned().collect())
            .unwrap_or_default()
    }

    pub fn denial_count(&self, principal: PrincipalId) -> u64 {
        self.denial_counts.get(&principal).map(|e| *e).unwrap_or(0)
    }

    /// Clear logs for a principal, releasing its buffer and counter
    pub fn clear_principal(&self, principal: PrincipalId) {
        self.principal_events.remove(&principal);
        self.denial_counts.remove(&principal);
    }

    pub fn clear_all(&self) {
        self.events.write().clear();
        self.principal_events.clear();
        self.denial_counts.clear();
    }

    pub fn stats(&self) -> AuditStats {
        AuditStats {
            total_events: self.events.read().len(),
            total_denials: self.denial_counts.iter().map(|e| *e.value()).sum(),
            principals_tracked: self.principal_events.len(),
        }
    }
}

impl Default for AuditLogger {
    fn default() -> Self {
        Self::with_config(&AuditConfig::default())
    }
}

/// Audit statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStats {
    pub total_events: usize,
    pub total_denials: u64,
    pub principals_tracked: usize,
}
