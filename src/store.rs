//! Persistence of field values between sessions.
//!
//! The host supplies a [`FieldStore`]; values are kept as text under
//! `"<group>.<var>"` keys, the same text a form field would hold.
//! [`MemoryStore`] covers tests and JSON session snapshots.

use crate::error::CalcError;
use crate::group::FormulaGroup;
use crate::inputs::Inputs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Key-value storage for field texts.
pub trait FieldStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&mut self, key: &str, value: String);

    fn remove(&mut self, key: &str);
}

/// In-memory [`FieldStore`].
///
/// # Examples
///
/// ```rust
/// use crashcalc::store::{FieldStore, MemoryStore};
///
/// let mut store = MemoryStore::new();
/// store.set("deceleration.rate", "7.5".to_string());
///
/// let snapshot = store.to_json().unwrap();
/// let restored = MemoryStore::from_json(&snapshot).unwrap();
/// assert_eq!(restored.get("deceleration.rate").as_deref(), Some("7.5"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemoryStore {
    fields: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize all fields as a JSON object.
    pub fn to_json(&self) -> Result<String, CalcError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Restore a snapshot written by [`MemoryStore::to_json`].
    pub fn from_json(json: &str) -> Result<Self, CalcError> {
        Ok(serde_json::from_str(json)?)
    }
}

impl FieldStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.fields.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.fields.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.fields.remove(key);
    }
}

/// Write the fields of `group` to `store`. Unset fields are removed.
pub fn save_inputs(group: &FormulaGroup, inputs: &Inputs, store: &mut dyn FieldStore) {
    for spec in group.vars() {
        let key = spec.id.qualified(group.name());
        match inputs.get(&spec.id) {
            Some(value) => store.set(&key, value.to_string()),
            None => store.remove(&key),
        }
    }
}

/// Read the fields of `group` from `store`.
///
/// Stored text that no longer parses is dropped.
pub fn load_inputs(group: &FormulaGroup, store: &dyn FieldStore) -> Inputs {
    let mut inputs = Inputs::new();
    for spec in group.vars() {
        let key = spec.id.qualified(group.name());
        if let Some(text) = store.get(&key) {
            inputs.set_text(spec.id.clone(), &text);
            if inputs.get(&spec.id).is_none() {
                debug!(key = %key, "stored field ignored");
            }
        }
    }
    inputs
}
