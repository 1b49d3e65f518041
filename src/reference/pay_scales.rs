//! Pre-6th-PC scale tables and the explicit cross-commission scale mappings.
//!
//! The source engine maps a scale across a commission transition by matching
//! identifier suffixes. Per the design note in §9 ("a correct implementation
//! should use an explicit mapping table; if ambiguous, fail fatally rather
//! than pick one") this engine uses an explicit `HashMap` keyed on the old
//! scale id instead of parsing suffixes — see `DESIGN.md` for the rationale.

use std::collections::HashMap;

use crate::error::EngineError;
use crate::scale::Scale;

/// All scales defined for one pre-6th-PC commission, keyed by scale id.
#[derive(Debug, Clone, Default)]
pub struct PayScaleTable {
    scales: HashMap<String, Scale>,
}

impl PayScaleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, scale: Scale) {
        self.scales.insert(scale.id.clone(), scale);
    }

    pub fn get(&self, id: &str) -> Result<&Scale, EngineError> {
        self.scales
            .get(id)
            .ok_or_else(|| EngineError::UnknownScale { scale_id: id.to_string() })
    }
}

/// Explicit old-scale-id -> new-scale-id mapping used at a commission
/// transition (3rd->4th, 4th->5th), or at a selection/special grade event
/// (ordinary 5th-PC scale -> SG/SpG scale).
#[derive(Debug, Clone, Default)]
pub struct ScaleTransitionMap {
    map: HashMap<String, String>,
}

impl ScaleTransitionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from_id: impl Into<String>, to_id: impl Into<String>) {
        self.map.insert(from_id.into(), to_id.into());
    }

    /// Resolve the mapped target scale id. `commission` is the *source*
    /// commission, carried only for a more informative error message.
    pub fn target(&self, from_id: &str, commission: u8) -> Result<&str, EngineError> {
        self.map
            .get(from_id)
            .map(String::as_str)
            .ok_or_else(|| EngineError::ScaleMappingFailed {
                from_scale: from_id.to_string(),
                commission,
            })
    }

    pub fn contains(&self, from_id: &str) -> bool {
        self.map.contains_key(from_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_scale_is_an_error() {
        let table = PayScaleTable::new();
        assert!(table.get("9999-1").is_err());
    }

    #[test]
    fn transition_map_roundtrip() {
        let mut map = ScaleTransitionMap::new();
        map.insert("1200-30-1440-40-1800", "1400-40-1800-50-2300");
        assert_eq!(
            map.target("1200-30-1440-40-1800", 3).unwrap(),
            "1400-40-1800-50-2300"
        );
        assert!(map.target("missing", 3).is_err());
    }
}
