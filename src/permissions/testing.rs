/*!
 * Test Backends
 * In-memory tri-state lookups for unit tests
 */

use crate::permissions::types::{ExplicitSetting, TriStateLookup};
use ahash::HashMap;
use parking_lot::{Mutex, RwLock};

/// Lookup over a mutable node table that records every query
#[derive(Default)]
pub(crate) struct TableLookup {
    settings: RwLock<HashMap<String, bool>>,
    queries: Mutex<Vec<String>>,
}

impl TableLookup {
    pub(crate) fn new(settings: &[(&str, bool)]) -> Self {
        let lookup = Self::default();
        for (node, value) in settings {
            lookup.set(node, *value);
        }
        lookup
    }

    pub(crate) fn set(&self, node: &str, value: bool) {
        self.settings.write().insert(node.to_string(), value);
    }

    pub(crate) fn queries(&self) -> Vec<String> {
        self.queries.lock().clone()
    }

    pub(crate) fn query_count(&self) -> usize {
        self.queries.lock().len()
    }
}

impl TriStateLookup for TableLookup {
    fn query(&self, _scope: Option<&str>, node: &str) -> ExplicitSetting {
        self.queries.lock().push(node.to_string());
        self.settings.read().get(node).copied().into()
    }
}
