//! Body and garment zone detection module
//!
//! This module locates the person horizontally with an edge-density
//! heuristic and lays out the top, bottom and shoes sampling zones.

pub mod body;
pub mod zones;

pub use body::{BodyColumn, BodyColumnDetector};
pub use zones::{Zone, ZoneDetector, ZoneOptions};
