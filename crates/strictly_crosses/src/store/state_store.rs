//! Typed access to the persisted game document.

use super::{KeyValueStore, StoreError, StoreErrorKind};
use crate::state::GameState;
use crate::types::Step;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, instrument, warn};

/// Key the game document is stored under unless configured otherwise.
pub const DEFAULT_KEY: &str = "AppState";

/// Partial document merged into the stored state.
///
/// Fields left as `None` keep whatever the stored document already holds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatePatch {
    /// Replacement step list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
    /// Replacement history.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<Vec<Step>>,
}

impl StatePatch {
    /// Patch carrying both steps and history.
    pub fn full(state: &GameState) -> Self {
        Self {
            steps: Some(state.steps().to_vec()),
            history: Some(state.history().to_vec()),
        }
    }

    /// Patch carrying only the step list (undo and redo leave history alone).
    pub fn steps_only(state: &GameState) -> Self {
        Self {
            steps: Some(state.steps().to_vec()),
            history: None,
        }
    }
}

/// Game document stored under a single key of a [`KeyValueStore`].
#[derive(Debug, Clone)]
pub struct StateStore<B> {
    backend: B,
    key: String,
}

impl<B: KeyValueStore> StateStore<B> {
    /// Wraps `backend`, storing under [`DEFAULT_KEY`].
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_KEY)
    }

    /// Wraps `backend`, storing under `key`.
    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    /// Returns the storage key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Returns true if a document is stored.
    pub fn exists(&self) -> Result<bool, StoreError> {
        self.backend.contains(&self.key)
    }

    /// Reads the stored document, or `None` if nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend fails, or a
    /// [`StoreErrorKind::Corrupt`] error if the document does not parse or
    /// breaks the step invariants.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn get(&self) -> Result<Option<GameState>, StoreError> {
        let Some(raw) = self.backend.get(&self.key)? else {
            debug!("No stored document");
            return Ok(None);
        };
        let state: GameState = serde_json::from_str(&raw)
            .map_err(|e| StoreError::corrupt(format!("Game document does not parse: {}", e)))?;
        state
            .validate()
            .map_err(|e| StoreError::corrupt(format!("Game document is inconsistent: {}", e)))?;
        debug!(steps = state.steps().len(), history = state.history().len(), "Document loaded");
        Ok(Some(state))
    }

    /// Merges `patch` into the stored document and writes it back whole.
    ///
    /// Unknown top-level fields already in the document are preserved. A
    /// stored value that is not a JSON object is replaced.
    #[instrument(skip(self, patch), fields(key = %self.key))]
    pub fn set(&mut self, patch: StatePatch) -> Result<(), StoreError> {
        let mut document = match self.backend.get(&self.key)? {
            Some(raw) => match serde_json::from_str::<Value>(&raw) {
                Ok(Value::Object(map)) => map,
                Ok(_) | Err(_) => {
                    warn!("Stored document is not a JSON object, replacing it");
                    Map::new()
                }
            },
            None => Map::new(),
        };

        if let Value::Object(fields) = serde_json::to_value(&patch)? {
            document.extend(fields);
        }

        let raw = serde_json::to_string(&Value::Object(document))?;
        self.backend.set(&self.key, raw)?;
        debug!(
            steps = patch.steps.as_ref().map(Vec::len),
            history = patch.history.as_ref().map(Vec::len),
            "Document merged"
        );
        Ok(())
    }

    /// Removes the stored document entirely.
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.backend.remove(&self.key)
    }
}
