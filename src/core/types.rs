/*!
 * Core Types
 * Common types used across the crate
 */

use uuid::Uuid;

/// Stable identity of a principal, whether connected or offline
pub type PrincipalId = Uuid;

/// Generate a fresh principal id
pub fn new_principal_id() -> PrincipalId {
    Uuid::new_v4()
}
