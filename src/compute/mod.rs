//! Compute layer for geographic math.
//!
//! This module holds everything that works on raw latitude/longitude:
//! - Great-circle distance and the planar projection around a hub
//! - Coordinate validation for ingestion
//!
//! The tree never sees latitude/longitude; it only consumes projected
//! locations produced here.

pub mod projection;
pub mod validation;

pub use projection::{Projection, haversine_miles};
pub use validation::{validate_lat_lon, validate_point};
