use crate::location::Location;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// An axis-aligned box on the planar frame.
///
/// This is a wrapper around `geo::Rect`, whose corners are always
/// normalized. Inclusion tests are inclusive on every edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    /// The underlying geometric rectangle
    pub rect: Rect,
}

impl Bounds {
    /// Create bounds from minimum and maximum coordinates.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_index_types::Bounds;
    ///
    /// let view = Bounds::new(-8.0, -8.0, 8.0, 8.0);
    /// assert_eq!(view.width(), 16.0);
    /// ```
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::from_rect(Rect::new(
            geo::coord! { x: min_x, y: min_y },
            geo::coord! { x: max_x, y: max_y },
        ))
    }

    /// Wraps an existing `geo::Rect`, e.g. a viewport computed with `geo`.
    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    /// Smallest box holding every location, or `None` for an empty input.
    ///
    /// # Examples
    ///
    /// ```
    /// use transit_index_types::{Bounds, Location};
    ///
    /// let locs = [Location::new(1.0, -2.0), Location::new(-3.0, 4.0)];
    /// let b = Bounds::from_locations(locs.iter()).unwrap();
    /// assert_eq!((b.min_x(), b.min_y(), b.max_x(), b.max_y()), (-3.0, -2.0, 1.0, 4.0));
    /// assert!(Bounds::from_locations(std::iter::empty()).is_none());
    /// ```
    pub fn from_locations<'a, I>(locations: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a Location>,
    {
        let mut iter = locations.into_iter();
        let first = iter.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (first.x, first.y, first.x, first.y);
        for loc in iter {
            min_x = min_x.min(loc.x);
            min_y = min_y.min(loc.y);
            max_x = max_x.max(loc.x);
            max_y = max_y.max(loc.y);
        }
        Some(Self::new(min_x, min_y, max_x, max_y))
    }

    pub fn min_x(&self) -> f64 {
        self.rect.min().x
    }

    pub fn min_y(&self) -> f64 {
        self.rect.min().y
    }

    pub fn max_x(&self) -> f64 {
        self.rect.max().x
    }

    pub fn max_y(&self) -> f64 {
        self.rect.max().y
    }

    pub fn width(&self) -> f64 {
        self.rect.width()
    }

    pub fn height(&self) -> f64 {
        self.rect.height()
    }

    /// Inclusive containment test.
    pub fn contains(&self, loc: &Location) -> bool {
        self.min_x() <= loc.x && loc.x <= self.max_x() && self.min_y() <= loc.y && loc.y <= self.max_y()
    }

    /// Whether the box overlaps the closed ranges `x` and `y`.
    ///
    /// A range whose lower end exceeds its upper end overlaps nothing.
    pub fn intersects_ranges(&self, x: (f64, f64), y: (f64, f64)) -> bool {
        x.0 <= x.1
            && y.0 <= y.1
            && x.0 <= self.max_x()
            && x.1 >= self.min_x()
            && y.0 <= self.max_y()
            && y.1 >= self.min_y()
    }

    /// Copy of this box with the x-extent replaced.
    pub fn with_x(&self, min_x: f64, max_x: f64) -> Self {
        Self::new(min_x, self.min_y(), max_x, self.max_y())
    }

    /// Copy of this box with the y-extent replaced.
    pub fn with_y(&self, min_y: f64, max_y: f64) -> Self {
        Self::new(self.min_x(), min_y, self.max_x(), max_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_is_inclusive() {
        let b = Bounds::new(0.0, 0.0, 1.0, 1.0);
        assert!(b.contains(&Location::new(0.0, 1.0)));
        assert!(b.contains(&Location::new(1.0, 0.0)));
        assert!(!b.contains(&Location::new(1.0000001, 0.5)));
    }

    #[test]
    fn test_intersects_ranges() {
        let b = Bounds::new(-1.0, -1.0, 1.0, 1.0);
        assert!(b.intersects_ranges((0.5, 3.0), (-5.0, -1.0)));
        assert!(b.intersects_ranges((1.0, 1.0), (1.0, 1.0)));
        assert!(!b.intersects_ranges((1.5, 3.0), (0.0, 0.0)));
        assert!(!b.intersects_ranges((0.0, 0.0), (-3.0, -1.5)));
    }

    #[test]
    fn test_malformed_range_intersects_nothing() {
        let b = Bounds::new(-10.0, -10.0, 10.0, 10.0);
        assert!(!b.intersects_ranges((1.0, -1.0), (-1.0, 1.0)));
        assert!(!b.intersects_ranges((-1.0, 1.0), (1.0, -1.0)));
    }

    #[test]
    fn test_single_location_bounds_is_degenerate() {
        let loc = Location::new(2.0, 3.0);
        let b = Bounds::from_locations([loc].iter()).unwrap();
        assert_eq!(b.width(), 0.0);
        assert_eq!(b.height(), 0.0);
        assert!(b.contains(&loc));
    }

    #[test]
    fn test_from_rect_keeps_geo_extent() {
        let rect = Rect::new(geo::coord! { x: 3.0, y: -1.0 }, geo::coord! { x: -2.0, y: 4.0 });
        let bounds = Bounds::from_rect(rect);
        assert_eq!(bounds, Bounds::new(-2.0, -1.0, 3.0, 4.0));
        assert_eq!((bounds.width(), bounds.height()), (5.0, 5.0));
    }

    #[test]
    fn test_with_axis_replacements() {
        let b = Bounds::new(-8.0, -8.0, 8.0, 8.0);
        let left = b.with_x(-8.0, 0.5);
        assert_eq!((left.min_x(), left.max_x(), left.min_y(), left.max_y()), (-8.0, 0.5, -8.0, 8.0));
        let top = b.with_y(2.0, 8.0);
        assert_eq!((top.min_y(), top.max_y()), (2.0, 8.0));
    }
}
