/*!
 * Principal Registry
 * Owns connected principals and hands out weak references to them
 */

use crate::core::types::PrincipalId;
use crate::permissions::types::{Principal, PrincipalRef};
use ahash::RandomState;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::{debug, info};

/// Concurrent map of connected principals
///
/// The registry holds the only strong handle the crate ever keeps.
/// Disconnecting drops it, expiring every outstanding [`PrincipalRef`].
pub struct PrincipalRegistry<P: ?Sized> {
    connected: Arc<DashMap<PrincipalId, Arc<P>, RandomState>>,
}

impl<P: ?Sized> PrincipalRegistry<P> {
    pub fn new() -> Self {
        Self {
            connected: Arc::new(DashMap::with_hasher(RandomState::new())),
        }
    }

    /// Register a connected principal
    ///
    /// Replacing an existing session expires references to the old one.
    pub fn connect(&self, id: PrincipalId, principal: Arc<P>) -> PrincipalRef<P> {
        let reference = PrincipalRef::new(id, &principal);
        if self.connected.insert(id, principal).is_some() {
            debug!(principal = %id, "replaced existing session");
        }
        info!(principal = %id, "principal connected");
        reference
    }

    /// Drop the session of `id`, returning whether one existed
    pub fn disconnect(&self, id: PrincipalId) -> bool {
        let removed = self.connected.remove(&id).is_some();
        if removed {
            info!(principal = %id, "principal disconnected");
        }
        removed
    }

    /// Current variant of `id`: connected when a session exists, offline otherwise
    pub fn principal(&self, id: PrincipalId) -> Principal<P> {
        match self.connected.get(&id) {
            Some(entry) => Principal::connected(id, entry.value()),
            None => Principal::Offline(id),
        }
    }

    pub fn is_connected(&self, id: PrincipalId) -> bool {
        self.connected.contains_key(&id)
    }

    pub fn connected_ids(&self) -> Vec<PrincipalId> {
        self.connected.iter().map(|entry| *entry.key()).collect()
    }

    pub fn len(&self) -> usize {
        self.connected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connected.is_empty()
    }
}

impl<P: ?Sized> Clone for PrincipalRegistry<P> {
    fn clone(&self) -> Self {
        Self {
            connected: Arc::clone(&self.connected),
        }
    }
}

impl<P: ?Sized> Default for PrincipalRegistry<P> {
    fn default() -> Self {
        Self::new()
    }
}
