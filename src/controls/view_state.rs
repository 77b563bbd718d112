use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Round-trip snapshot of per-item attributes: one name→value map per list
/// item, in item order. Transported as JSON in a hidden form field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemAttributeState(pub Vec<BTreeMap<String, String>>);

#[derive(Debug, thiserror::Error)]
pub enum ViewStateError {
    #[error("Malformed item state snapshot: {0}")]
    Malformed(#[from] serde_json::Error),
}

impl ItemAttributeState {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether any item in the snapshot carries at least one attribute.
    pub fn has_any_attributes(&self) -> bool {
        self.0.iter().any(|attrs| !attrs.is_empty())
    }

    pub fn from_json(raw: &str) -> Result<Self, ViewStateError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json(&self) -> Result<String, ViewStateError> {
        Ok(serde_json::to_string(self)?)
    }
}
