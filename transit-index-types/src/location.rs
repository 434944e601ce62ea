use geo::{Coord, Distance, Euclidean, Point};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A position on the local planar frame centred on the reference hub.
///
/// Both coordinates are in miles. `x` grows eastward and `y` grows
/// northward, so the hub itself sits at the origin.
///
/// # Examples
///
/// ```
/// use transit_index_types::Location;
///
/// let a = Location::new(3.0, 0.0);
/// let b = Location::new(0.0, 4.0);
/// assert_eq!(a.distance(&b), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Location {
    /// East-west displacement from the hub, in miles
    pub x: f64,
    /// North-south displacement from the hub, in miles
    pub y: f64,
}

impl Location {
    /// Create a location from already-projected coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The hub itself.
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// Straight-line distance on the planar frame.
    #[inline]
    pub fn distance(&self, other: &Location) -> f64 {
        Euclidean.distance(Point::from(*self), Point::from(*other))
    }

    /// Whether both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<Location> for Coord<f64> {
    fn from(loc: Location) -> Self {
        geo::coord! { x: loc.x, y: loc.y }
    }
}

impl From<Location> for Point<f64> {
    fn from(loc: Location) -> Self {
        Point::new(loc.x, loc.y)
    }
}

impl From<Coord<f64>> for Location {
    fn from(coord: Coord<f64>) -> Self {
        Self::new(coord.x, coord.y)
    }
}

impl From<Point<f64>> for Location {
    fn from(point: Point<f64>) -> Self {
        Self::new(point.x(), point.y())
    }
}

impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Location(xy=({:.2}, {:.2}))", self.x, self.y)
    }
}
