/*!
 * Permission Types Module
 * Core types and traits for permission resolution
 */

mod capability;
mod node;
mod principal;
mod setting;
mod traits;

pub use capability::{CapabilityFlag, CapabilitySet};
pub use node::{wildcard_chain, PermissionNode, WildcardChain};
pub use principal::{Principal, PrincipalKind, PrincipalRef};
pub use setting::ExplicitSetting;
pub use traits::{PermissionHandler, TriStateLookup};
