/*!
 * Node Permissions
 * Hierarchical, wildcard-aware permission resolution over a tri-state backend
 */

pub mod config;
pub mod core;
pub mod monitoring;
pub mod permissions;

// Re-exports
pub use config::{AuditConfig, HandlerConfig};
pub use crate::core::errors::{ConfigError, NodeError, PermissionError, PermissionResult};
pub use crate::core::types::PrincipalId;
pub use monitoring::init_tracing;
pub use permissions::{
    CapabilityFlag, CapabilitySet, ExplicitSetting, OnlinePermissionHandler, PermissionHandler,
    PermissionNode, PermissionProfile, Principal, PrincipalRef, PrincipalRegistry, Resolution,
    ResolutionEngine, TriStateLookup,
};
