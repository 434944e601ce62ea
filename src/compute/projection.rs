//! Planar projection of latitude/longitude around a reference hub.
//!
//! A 2-D partitioning tree needs roughly isotropic distances, which raw
//! degrees do not give away from the equator. Each coordinate is instead
//! mapped to signed great-circle displacements from the hub: `x` measured
//! along the hub's parallel, `y` along the hub's meridian.

use crate::config::{Config, ReferencePoint};
use geo::Point;
use transit_index_types::Location;

/// Mean earth radius used by the Madison Metro tooling, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3956.0;

/// Great-circle distance in miles using the haversine formula.
///
/// The argument to `asin` is clamped to [-1, 1]; rounding can push it just
/// past 1 for coincident or near-antipodal points.
///
/// # Examples
///
/// ```rust
/// use transit_index::compute::haversine_miles;
///
/// let d = haversine_miles(43.074683, -89.384261, 43.074683, -89.384261);
/// assert_eq!(d, 0.0);
/// ```
pub fn haversine_miles(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    haversine(EARTH_RADIUS_MILES, lat1, lon1, lat2, lon2)
}

#[inline]
fn haversine(radius: f64, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lat2) = (lat1.to_radians(), lat2.to_radians());
    let delta_lat = lat2 - lat1;
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().clamp(-1.0, 1.0).asin();

    radius * c
}

/// Maps latitude/longitude onto the planar frame centred on a hub.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    reference: ReferencePoint,
    earth_radius_miles: f64,
}

impl Projection {
    pub fn new(reference: ReferencePoint, earth_radius_miles: f64) -> Self {
        Self {
            reference,
            earth_radius_miles,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.reference, config.earth_radius_miles)
    }

    pub fn reference(&self) -> ReferencePoint {
        self.reference
    }

    /// Great-circle distance in miles between two lat/lon pairs.
    pub fn distance(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
        haversine(self.earth_radius_miles, lat1, lon1, lat2, lon2)
    }

    /// Project a latitude/longitude pair.
    ///
    /// `x` is positive east of the hub and `y` positive north of it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use transit_index::compute::Projection;
    ///
    /// let projection = Projection::default();
    /// let east = projection.project(43.074683, -89.374261);
    /// assert!(east.x > 0.0);
    /// assert!(east.y.abs() < 1e-9);
    /// ```
    pub fn project(&self, lat: f64, lon: f64) -> Location {
        let ReferencePoint {
            lat: ref_lat,
            lon: ref_lon,
        } = self.reference;

        let mut x = self.distance(ref_lat, ref_lon, ref_lat, lon);
        let mut y = self.distance(ref_lat, ref_lon, lat, ref_lon);

        if lon < ref_lon {
            x = -x;
        }
        if lat < ref_lat {
            y = -y;
        }

        Location::new(x, y)
    }

    /// Project a `geo::Point` whose x is longitude and y is latitude.
    pub fn project_point(&self, point: &Point) -> Location {
        self.project(point.y(), point.x())
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
