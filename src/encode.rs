//! Purpose: Map panorama records to the JSON envelope the web API emits.
//! Exports: `JsonMapping`, `encode`.
//! Role: The one seam between domain records and generic JSON emission.
//! Invariants: Stable key names for the panorama payload; clients parse by key.
//! Invariants: Identifier fields are emitted as strings; all others keep their type.
//! Invariants: Values without an encoding path fail; nothing is silently dropped.

use crate::error::EncodeError;
use crate::panorama::{Panorama, ProjectionEntry};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value, json};
use std::any::{self, Any};

/// Capability for domain types that encode to a plain JSON mapping.
pub trait JsonMapping {
    fn json_mapping(&self) -> Map<String, Value>;
}

impl JsonMapping for Panorama {
    fn json_mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("panoid".to_string(), json!(self.panoid.to_string()));
        map.insert("region_id".to_string(), json!(self.region_id.to_string()));
        map.insert("lat".to_string(), json!(self.lat));
        map.insert("lon".to_string(), json!(self.lon));
        map.insert("date".to_string(), json!(self.date));
        map.insert("north".to_string(), json!(self.north));
        map.insert(
            "coverageType".to_string(),
            json!(self.coverage_type.as_str()),
        );
        map.insert("rawElevation".to_string(), json!(self.raw_elevation));
        map.insert("projection".to_string(), projection_json(&self.projection));
        map
    }
}

fn projection_json(entries: &[ProjectionEntry]) -> Value {
    let sizes: Vec<u32> = entries.iter().map(|entry| entry.latitude_size).collect();
    json!({ "latitude_size": sizes })
}

/// Encode an arbitrary value for JSON emission.
///
/// Values with a known mapping become a JSON object; anything else is the
/// fallback path and fails with [`EncodeError`] naming the rejected type.
pub fn encode<T: Any>(value: &T) -> Result<Value, EncodeError> {
    if let Some(pano) = (value as &dyn Any).downcast_ref::<Panorama>() {
        return Ok(Value::Object(pano.json_mapping()));
    }
    let type_name = any::type_name::<T>();
    tracing::debug!(type_name, "no JSON encoding path for value");
    Err(EncodeError::unsupported(type_name))
}

impl Serialize for Panorama {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Value::Object(self.json_mapping()).serialize(serializer)
    }
}
