//! Purpose: Read-only view types for panorama records supplied by the data source.
//! Exports: `Panorama`, `ProjectionEntry`, `CoverageType`.
//! Role: Plain-data shapes consumed by the encode adapter; no behavior beyond accessors.
//! Invariants: Fields mirror the upstream record; this crate never fills them itself.
//! Invariants: Coverage tags stringify lowercase and stay stable across releases.

use serde::Deserialize;
use std::fmt;

/// How the imagery for a panorama was captured.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum CoverageType {
    Car,
    Backpack,
}

impl CoverageType {
    pub fn as_str(self) -> &'static str {
        match self {
            CoverageType::Car => "car",
            CoverageType::Backpack => "backpack",
        }
    }
}

impl fmt::Display for CoverageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One item of a panorama's projection descriptor.
///
/// Upstream metadata payloads carry more per-face detail; the serving contract
/// only consumes `latitude_size`, so that is all this view keeps.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
pub struct ProjectionEntry {
    pub latitude_size: u32,
}

/// A geo-located panorama record, as handed over by the data source.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Panorama {
    /// Panorama identifiers exceed 2^53, so JSON output emits them as strings
    /// to keep precision in JS clients.
    pub panoid: u64,
    pub region_id: u64,
    pub lat: f64,
    pub lon: f64,
    pub date: String,
    /// Heading toward true north, in degrees.
    pub north: f64,
    pub coverage_type: CoverageType,
    pub raw_elevation: f64,
    pub projection: Vec<ProjectionEntry>,
}

#[cfg(test)]
mod tests {
    use super::{CoverageType, ProjectionEntry};

    #[test]
    fn coverage_tags_stringify_lowercase() {
        assert_eq!(CoverageType::Car.as_str(), "car");
        assert_eq!(CoverageType::Backpack.as_str(), "backpack");
        assert_eq!(CoverageType::Backpack.to_string(), "backpack");
    }

    #[test]
    fn coverage_tag_deserializes_from_lowercase() {
        let tag: CoverageType = serde_json::from_str("\"car\"").expect("decode");
        assert_eq!(tag, CoverageType::Car);
    }

    #[test]
    fn projection_entry_decodes_from_upstream_shape() {
        let entry: ProjectionEntry =
            serde_json::from_str(r#"{"latitude_size": 128}"#).expect("decode");
        assert_eq!(entry, ProjectionEntry { latitude_size: 128 });
    }
}
