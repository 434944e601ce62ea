//! Rectangle and radius queries.
//!
//! Traversal is depth-first, left subtree before right, and a subtree is
//! entered only when its recorded bounds overlap the query rectangle.
//! Leaves test each stop exactly, so the pruning can only skip work.

use super::{KdTree, Node};
use transit_index_types::{Bounds, Location, Stop};

#[inline]
fn within(value: f64, (lo, hi): (f64, f64)) -> bool {
    lo <= value && value <= hi
}

impl KdTree {
    /// Stops with `x` in `x_range` and `y` in `y_range`, both inclusive.
    ///
    /// Results follow traversal order, not identifier order. A range whose
    /// lower end exceeds its upper end matches nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use transit_index::{KdTree, Location, Stop};
    ///
    /// let tree = KdTree::build(vec![
    ///     Stop::new("a", Location::new(0.5, 0.5), true),
    ///     Stop::new("b", Location::new(2.0, 0.5), false),
    /// ]);
    /// let hits = tree.query_rect((0.0, 1.0), (0.0, 1.0));
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].id, "a");
    /// ```
    pub fn query_rect(&self, x_range: (f64, f64), y_range: (f64, f64)) -> Vec<&Stop> {
        let mut results = Vec::new();
        self.query_rect_into(x_range, y_range, &mut results);
        results
    }

    /// Like [`KdTree::query_rect`], appending to a caller-owned buffer.
    pub fn query_rect_into<'a>(
        &'a self,
        x_range: (f64, f64),
        y_range: (f64, f64),
        results: &mut Vec<&'a Stop>,
    ) {
        if [x_range.0, x_range.1, y_range.0, y_range.1]
            .iter()
            .any(|v| v.is_nan())
        {
            log::warn!("Rejecting rectangle query with NaN bounds");
            return;
        }

        if x_range.0 > x_range.1 || y_range.0 > y_range.1 {
            return;
        }

        if self
            .root
            .bounds
            .is_some_and(|b| b.intersects_ranges(x_range, y_range))
        {
            self.visit_rect(&self.root, x_range, y_range, results);
        }
    }

    fn visit_rect<'a>(
        &'a self,
        node: &'a Node,
        x_range: (f64, f64),
        y_range: (f64, f64),
        results: &mut Vec<&'a Stop>,
    ) {
        if node.is_leaf() {
            results.extend(
                self.stops_of(node)
                    .iter()
                    .filter(|stop| within(stop.x(), x_range) && within(stop.y(), y_range)),
            );
            return;
        }

        for child in node.children() {
            if child
                .bounds
                .is_some_and(|b| b.intersects_ranges(x_range, y_range))
            {
                self.visit_rect(child, x_range, y_range, results);
            }
        }
    }

    /// Stops inside `bounds`, inclusive.
    pub fn query_bounds(&self, bounds: &Bounds) -> Vec<&Stop> {
        self.query_rect(
            (bounds.min_x(), bounds.max_x()),
            (bounds.min_y(), bounds.max_y()),
        )
    }

    /// Stops whose planar distance to `center` is at most `radius`.
    ///
    /// Candidates come from the rectangle circumscribing the circle and are
    /// then filtered by exact distance. A negative radius matches nothing.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use transit_index::{KdTree, Location, Stop};
    ///
    /// let tree = KdTree::build(vec![
    ///     Stop::new("near", Location::new(0.6, 0.6), true),
    ///     Stop::new("corner", Location::new(0.9, 0.9), false),
    /// ]);
    /// // (0.9, 0.9) is inside the bounding square but outside the circle
    /// let hits = tree.query_circle(Location::origin(), 1.0);
    /// assert_eq!(hits.len(), 1);
    /// assert_eq!(hits[0].id, "near");
    /// ```
    pub fn query_circle(&self, center: Location, radius: f64) -> Vec<&Stop> {
        if !center.is_finite() || radius.is_nan() {
            log::warn!("Rejecting circle query with non-finite center or NaN radius");
            return Vec::new();
        }

        let x_range = (center.x - radius, center.x + radius);
        let y_range = (center.y - radius, center.y + radius);

        let mut candidates = self.query_rect(x_range, y_range);
        candidates.retain(|stop| stop.location.distance(&center) <= radius);
        candidates
    }

    pub fn count_rect(&self, x_range: (f64, f64), y_range: (f64, f64)) -> usize {
        self.query_rect(x_range, y_range).len()
    }

    pub fn count_circle(&self, center: Location, radius: f64) -> usize {
        self.query_circle(center, radius).len()
    }
}
