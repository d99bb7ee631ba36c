/*!
 * Permission Traits
 * Seams between the resolver and the host platform
 */

use super::capability::{CapabilityFlag, CapabilitySet};
use super::principal::Principal;
use super::setting::ExplicitSetting;
use crate::permissions::profile::PermissionProfile;
use std::sync::Arc;

/// Tri-state permission backend for one principal
///
/// Implemented by the host for whatever object carries a principal's explicit
/// settings. Must be safe for concurrent reads.
pub trait TriStateLookup: Send + Sync {
    /// Explicit setting for `node` (plain, `.*`-suffixed, or `*`)
    ///
    /// `scope` is the optional world name, passed through untouched.
    fn query(&self, scope: Option<&str>, node: &str) -> ExplicitSetting;
}

impl<T: TriStateLookup + ?Sized> TriStateLookup for &T {
    fn query(&self, scope: Option<&str>, node: &str) -> ExplicitSetting {
        (**self).query(scope, node)
    }
}

impl<T: TriStateLookup + ?Sized> TriStateLookup for Arc<T> {
    fn query(&self, scope: Option<&str>, node: &str) -> ExplicitSetting {
        (**self).query(scope, node)
    }
}

/// Facade handing out permission profiles for principals
pub trait PermissionHandler: Send + Sync {
    /// Backend type carried by connected principals
    type Principal: TriStateLookup + ?Sized;

    /// One-time startup hook
    fn initialize(&self);

    /// Profile for `principal`, or `None` when this handler cannot resolve it
    ///
    /// `None` means "unsupported", never "denied".
    fn permission_profile(
        &self,
        principal: &Principal<Self::Principal>,
    ) -> Option<PermissionProfile<Self::Principal>>;

    /// Statically declared capabilities
    fn capabilities(&self) -> &CapabilitySet;

    fn has_capability(&self, flag: CapabilityFlag) -> bool {
        self.capabilities().contains(flag)
    }
}
