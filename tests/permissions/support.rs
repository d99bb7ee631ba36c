/*!
 * Shared fixtures for permission integration tests
 */

use node_perms::{ExplicitSetting, TriStateLookup};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Connected player with global and per-world explicit settings
#[derive(Default)]
pub struct Player {
    pub name: String,
    global: RwLock<HashMap<String, bool>>,
    worlds: RwLock<HashMap<String, HashMap<String, bool>>>,
    queries: AtomicUsize,
}

impl Player {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with(self, node: &str, value: bool) -> Self {
        self.set(node, value);
        self
    }

    pub fn set(&self, node: &str, value: bool) {
        self.global.write().insert(node.to_string(), value);
    }

    pub fn unset(&self, node: &str) {
        self.global.write().remove(node);
    }

    pub fn set_in_world(&self, world: &str, node: &str, value: bool) {
        self.worlds
            .write()
            .entry(world.to_string())
            .or_default()
            .insert(node.to_string(), value);
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::Relaxed)
    }
}

impl TriStateLookup for Player {
    fn query(&self, scope: Option<&str>, node: &str) -> ExplicitSetting {
        self.queries.fetch_add(1, Ordering::Relaxed);

        if let Some(world) = scope {
            if let Some(value) = self
                .worlds
                .read()
                .get(world)
                .and_then(|settings| settings.get(node))
            {
                return (*value).into();
            }
        }
        self.global.read().get(node).copied().into()
    }
}
