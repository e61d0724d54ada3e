//! Binding of interface elements to actions.
//!
//! Each element (a cell widget, a button, a key) is mapped to its
//! [`Action`] once when the interface is bound, so input handling is a
//! single lookup.

use crate::action::Action;
use crate::types::Position;
use std::collections::HashMap;
use std::hash::Hash;
use tracing::{debug, instrument};

/// Lookup table from interface element to action.
#[derive(Debug, Clone)]
pub struct ControlMap<K> {
    bindings: HashMap<K, Action>,
}

impl<K> Default for ControlMap<K> {
    fn default() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash + std::fmt::Debug> ControlMap<K> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `element` to `action`, replacing any earlier binding.
    #[instrument(skip(self))]
    pub fn bind(&mut self, element: K, action: Action) -> &mut Self {
        debug!(?element, %action, "Binding control");
        self.bindings.insert(element, action);
        self
    }

    /// Binds nine cell elements in row-major order.
    pub fn bind_cells(&mut self, cells: impl IntoIterator<Item = K>) -> &mut Self {
        for (element, pos) in cells.into_iter().zip(Position::ALL) {
            self.bind(element, Action::Select(pos));
        }
        self
    }

    /// Returns the action bound to `element`.
    pub fn resolve(&self, element: &K) -> Option<Action> {
        self.bindings.get(element).copied()
    }
}
