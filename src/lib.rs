//! Purpose: JSON encoding layer for panorama records served by the panomap web API.
//! Exports: `panorama` (domain view types), `encode` (mapping adapter), `error`.
//! Role: Pure serialization seam between the panorama data source and HTTP emission.
//! Invariants: This crate reads records; it never creates, mutates, or stores them.
//! Invariants: Output key names are part of the client contract and stay stable.
pub mod encode;
pub mod error;
pub mod panorama;

pub use encode::{JsonMapping, encode};
pub use error::EncodeError;
pub use panorama::{CoverageType, Panorama, ProjectionEntry};
