/*!
 * Permissions Module
 * Hierarchical, wildcard-aware permission resolution
 *
 * A node such as `plots.admin.destroy.other` is decided by probing the
 * principal's tri-state backend for the node itself and then for every
 * wildcard ancestor (`plots.admin.destroy.*`, `plots.admin.*`, `plots.*`, `*`).
 *
 * ## Features
 * - Literal grant fast path
 * - Wildcard chain walk over a tri-state backend
 * - Weakly held principals, denying once disconnected
 * - Closed principal variants (connected, console, offline)
 * - Optional decision audit trail
 *
 * ## Usage
 * ```ignore
 * use node_perms::permissions::{OnlinePermissionHandler, PermissionHandler, PrincipalRegistry};
 *
 * let handler = OnlinePermissionHandler::new(&config)?;
 * let reference = registry.connect(id, player);
 *
 * if let Some(profile) = handler.permission_profile(&registry.principal(id)) {
 *     if profile.has_permission(Some("world"), "plots.admin.destroy.other") {
 *         // Perform operation
 *     }
 * }
 * ```
 */

pub mod audit;
pub mod handler;
pub mod profile;
pub mod resolver;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use audit::{AuditEvent, AuditLogger, AuditSeverity, AuditStats};
pub use handler::{OnlinePermissionHandler, PrincipalRegistry};
pub use profile::{ConnectedProfile, PermissionProfile};
pub use resolver::{Precedence, Resolution, ResolutionEngine, ResolutionPath, ResolutionStep};
pub use types::{
    wildcard_chain, CapabilityFlag, CapabilitySet, ExplicitSetting, PermissionHandler,
    PermissionNode, Principal, PrincipalKind, PrincipalRef, TriStateLookup, WildcardChain,
};
