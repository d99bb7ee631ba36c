/*!
 * Limits and Constants
 *
 * Node syntax and bounded buffer sizes used across the crate.
 */

// =============================================================================
// NODE SYNTAX
// =============================================================================

/// Separator between node segments
pub const NODE_SEPARATOR: char = '.';

/// Suffix appended to an ancestor path to cover everything beneath it
pub const WILDCARD_SUFFIX: &str = ".*";

/// Global wildcard, always the last candidate of a chain
pub const GLOBAL_WILDCARD: &str = "*";

// =============================================================================
// AUDIT LIMITS
// =============================================================================

/// Maximum audit events kept in the global ring buffer
pub const MAX_AUDIT_EVENTS: usize = 10_000;

/// Maximum audit events kept per principal
pub const MAX_AUDIT_EVENTS_PER_PRINCIPAL: usize = 256;
