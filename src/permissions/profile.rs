/*!
 * Permission Profiles
 * Binds one principal to the resolver for the duration of a query context
 */

use crate::core::types::PrincipalId;
use crate::permissions::audit::{AuditEvent, AuditLogger};
use crate::permissions::resolver::{Resolution, ResolutionEngine, ResolutionPath};
use crate::permissions::types::{PrincipalRef, TriStateLookup};
use std::fmt;
use std::sync::Arc;
use tracing::warn;

/// Profile of a connected principal
///
/// Holds the principal weakly and caches nothing: every check re-queries the
/// backend.
pub struct ConnectedProfile<P: ?Sized> {
    principal: PrincipalRef<P>,
    engine: ResolutionEngine,
    audit: Option<Arc<AuditLogger>>,
}

impl<P: TriStateLookup + ?Sized> ConnectedProfile<P> {
    pub fn principal(&self) -> &PrincipalRef<P> {
        &self.principal
    }

    fn has_permission(&self, scope: Option<&str>, node: &str) -> bool {
        let (allowed, path) = match self.principal.upgrade() {
            Some(principal) => {
                let outcome = self.engine.outcome(principal.as_ref(), scope, node);
                (outcome.allowed, outcome.path)
            }
            None => {
                warn!(principal = %self.principal.id(), node, "principal disconnected, denying");
                (false, ResolutionPath::Expired)
            }
        };

        if let Some(ref audit) = self.audit {
            audit.log(AuditEvent::new(self.principal.id(), scope, node, allowed, path));
        }
        allowed
    }

    fn explain(&self, scope: Option<&str>, node: &str) -> Resolution {
        match self.principal.upgrade() {
            Some(principal) => self.engine.explain(principal.as_ref(), scope, node),
            None => Resolution::new(node, ResolutionPath::Expired, false),
        }
    }
}

/// Permission view of a single principal
pub enum PermissionProfile<P: ?Sized> {
    /// Connected principal resolved through the wildcard chain
    Connected(ConnectedProfile<P>),
    /// Console / system actor, every node granted without a backend query
    Console,
}

impl<P: TriStateLookup + ?Sized> PermissionProfile<P> {
    pub fn connected(
        principal: PrincipalRef<P>,
        engine: ResolutionEngine,
        audit: Option<Arc<AuditLogger>>,
    ) -> Self {
        PermissionProfile::Connected(ConnectedProfile {
            principal,
            engine,
            audit,
        })
    }

    pub fn console() -> Self {
        PermissionProfile::Console
    }

    pub fn is_console(&self) -> bool {
        matches!(self, PermissionProfile::Console)
    }

    pub fn principal_id(&self) -> Option<PrincipalId> {
        match self {
            PermissionProfile::Connected(profile) => Some(profile.principal.id()),
            PermissionProfile::Console => None,
        }
    }

    /// Whether the principal holds `node` in `scope`
    ///
    /// An expired principal always denies.
    pub fn has_permission(&self, scope: Option<&str>, node: &str) -> bool {
        match self {
            PermissionProfile::Connected(profile) => profile.has_permission(scope, node),
            PermissionProfile::Console => true,
        }
    }

    /// Check several nodes independently, in order
    pub fn has_permissions<I, S>(&self, scope: Option<&str>, nodes: I) -> Vec<bool>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        nodes
            .into_iter()
            .map(|node| self.has_permission(scope, node.as_ref()))
            .collect()
    }

    /// Decision for `node` with the probes that produced it
    pub fn explain(&self, scope: Option<&str>, node: &str) -> Resolution {
        match self {
            PermissionProfile::Connected(profile) => profile.explain(scope, node),
            PermissionProfile::Console => Resolution::new(node, ResolutionPath::AlwaysGrant, true),
        }
    }
}

impl<P: ?Sized> Clone for PermissionProfile<P> {
    fn clone(&self) -> Self {
        match self {
            PermissionProfile::Connected(profile) => PermissionProfile::Connected(ConnectedProfile {
                principal: profile.principal.clone(),
                engine: profile.engine,
                audit: profile.audit.clone(),
            }),
            PermissionProfile::Console => PermissionProfile::Console,
        }
    }
}

impl<P: ?Sized> fmt::Debug for PermissionProfile<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PermissionProfile::Connected(profile) => f
                .debug_struct("Connected")
                .field("principal", &profile.principal)
                .field("engine", &profile.engine)
                .field("audited", &profile.audit.is_some())
                .finish(),
            PermissionProfile::Console => f.write_str("Console"),
        }
    }
}
