//! Identifiers of variables and formulas.
//!
//! Variable ids and formula keys are shared `Arc<str>` strings: the rule
//! tables, the input record and every outcome hold clones of the same few
//! names. Both serialize as plain JSON strings through `interned`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Serde adapter for `Arc<str>` fields, used with `#[serde(with = ...)]`.
pub(crate) mod interned {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::sync::Arc;

    pub fn serialize<S: Serializer>(value: &Arc<str>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Arc<str>, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Arc::from(text))
    }
}

/// Name of one variable of a formula group, e.g. `v_start`.
///
/// The same id may appear in several groups (`distance`, `duration`); the
/// group name qualifies it wherever it leaves the group.
///
/// # Examples
///
/// ```rust
/// use crashcalc::VarId;
///
/// let rate = VarId::from_str("rate");
/// assert_eq!(rate, "rate".into());
/// assert_eq!(rate.qualified("deceleration"), "deceleration.rate");
/// ```
#[derive(Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VarId(#[serde(with = "interned")] Arc<str>);

impl VarId {
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(name: &str) -> Self {
        Self(Arc::from(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `"<group>.<name>"`, the key a field is stored under.
    pub fn qualified(&self, group: &str) -> String {
        format!("{}.{}", group, self.0)
    }
}

impl From<&str> for VarId {
    fn from(name: &str) -> Self {
        Self::from_str(name)
    }
}

impl From<&VarId> for VarId {
    fn from(id: &VarId) -> Self {
        id.clone()
    }
}

impl std::fmt::Display for VarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_qualified_key() {
        let id = VarId::from_str("lateral_accel");
        assert_eq!(id.qualified("lane_change_sharp"), "lane_change_sharp.lateral_accel");
    }

    #[test]
    fn test_inputs_map_serializes_by_name() {
        let mut fields = BTreeMap::new();
        fields.insert(VarId::from_str("v_start"), 50.0);
        fields.insert(VarId::from_str("duration"), 2.5);

        let json = serde_json::to_string(&fields).unwrap();
        assert_eq!(json, r#"{"duration":2.5,"v_start":50.0}"#);

        let back: BTreeMap<VarId, f64> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, fields);
    }

    #[test]
    fn test_rejects_non_string() {
        assert!(serde_json::from_str::<VarId>("42").is_err());
    }
}
