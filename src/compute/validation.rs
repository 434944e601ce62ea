//! Validation for geographic coordinates.

use crate::error::{IndexError, Result};
use geo::Point;

/// Validates a latitude/longitude pair.
///
/// Latitude: [-90.0, 90.0], Longitude: [-180.0, 180.0]
///
/// # Examples
///
/// ```
/// use transit_index::compute::validation::validate_lat_lon;
///
/// // Madison, WI
/// assert!(validate_lat_lon(43.074683, -89.384261).is_ok());
///
/// // Invalid latitude
/// assert!(validate_lat_lon(95.0, -89.0).is_err());
///
/// // Invalid longitude
/// assert!(validate_lat_lon(43.0, 200.0).is_err());
/// ```
pub fn validate_lat_lon(lat: f64, lon: f64) -> Result<()> {
    if !lat.is_finite() {
        return Err(IndexError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            lat
        )));
    }

    if !lon.is_finite() {
        return Err(IndexError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            lon
        )));
    }

    if !(-90.0..=90.0).contains(&lat) {
        return Err(IndexError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            lat
        )));
    }

    if !(-180.0..=180.0).contains(&lon) {
        return Err(IndexError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            lon
        )));
    }

    Ok(())
}

/// Validates a `geo::Point` whose x is longitude and y is latitude.
pub fn validate_point(point: &Point) -> Result<()> {
    validate_lat_lon(point.y(), point.x())
}
