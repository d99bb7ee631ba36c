/*!
 * Principals
 * Closed set of principal variants and the non-owning handle to a live one
 */

use crate::core::types::PrincipalId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, Weak};

/// Non-owning handle to a connected principal
///
/// Never keeps the principal alive. Once the owner drops it (disconnect) the
/// handle reports expired, and every permission check through it denies.
pub struct PrincipalRef<P: ?Sized> {
    id: PrincipalId,
    handle: Weak<P>,
}

impl<P: ?Sized> PrincipalRef<P> {
    pub fn new(id: PrincipalId, principal: &Arc<P>) -> Self {
        Self {
            id,
            handle: Arc::downgrade(principal),
        }
    }

    pub fn id(&self) -> PrincipalId {
        self.id
    }

    /// Lock-free validity check
    pub fn is_live(&self) -> bool {
        self.handle.strong_count() > 0
    }

    /// Borrow the principal for the duration of one check
    pub fn upgrade(&self) -> Option<Arc<P>> {
        self.handle.upgrade()
    }
}

impl<P: ?Sized> Clone for PrincipalRef<P> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            handle: Weak::clone(&self.handle),
        }
    }
}

impl<P: ?Sized> fmt::Debug for PrincipalRef<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrincipalRef")
            .field("id", &self.id)
            .field("live", &self.is_live())
            .finish()
    }
}

/// Principal variant classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrincipalKind {
    Connected,
    Console,
    Offline,
}

/// Entity whose permissions are being resolved
pub enum Principal<P: ?Sized> {
    /// Live connected principal, held weakly
    Connected(PrincipalRef<P>),
    /// Console / system actor with full trust
    Console,
    /// Known identity with no live session
    Offline(PrincipalId),
}

impl<P: ?Sized> Principal<P> {
    pub fn connected(id: PrincipalId, principal: &Arc<P>) -> Self {
        Principal::Connected(PrincipalRef::new(id, principal))
    }

    pub fn kind(&self) -> PrincipalKind {
        match self {
            Principal::Connected(_) => PrincipalKind::Connected,
            Principal::Console => PrincipalKind::Console,
            Principal::Offline(_) => PrincipalKind::Offline,
        }
    }

    /// Identity, if the principal has one
    pub fn id(&self) -> Option<PrincipalId> {
        match self {
            Principal::Connected(reference) => Some(reference.id()),
            Principal::Console => None,
            Principal::Offline(id) => Some(*id),
        }
    }
}

impl<P: ?Sized> Clone for Principal<P> {
    fn clone(&self) -> Self {
        match self {
            Principal::Connected(reference) => Principal::Connected(reference.clone()),
            Principal::Console => Principal::Console,
            Principal::Offline(id) => Principal::Offline(*id),
        }
    }
}

impl<P: ?Sized> fmt::Debug for Principal<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Principal::Connected(reference) => f.debug_tuple("Connected").field(reference).finish(),
            Principal::Console => f.write_str("Console"),
            Principal::Offline(id) => f.debug_tuple("Offline").field(id).finish(),
        }
    }
}
