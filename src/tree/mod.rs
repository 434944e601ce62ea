//! Fixed-depth k-d tree over projected stops.
//!
//! The tree is built once, breadth-first, and never changes afterwards.
//! Every node splits its stops at the median of one axis, alternating x
//! then y by level, until [`MAX_DEPTH`] is reached. Nodes at that depth are
//! leaves and hold the stops as they were left by their parent's sort.
//!
//! ## Storage
//!
//! The tree owns a single `Vec<Stop>`. Each node owns a contiguous range of
//! it, and a parent's range is exactly the concatenation of its children's,
//! so the union of leaf ranges covers every stop once. Each non-empty node
//! also records the bounding box of its stops, which queries use for
//! pruning instead of relying on any particular sort order.
//!
//! ```rust
//! use transit_index::{KdTree, Location, Stop};
//!
//! let stops = (0..10)
//!     .map(|i| Stop::new(format!("s{}", i), Location::new(i as f64, -(i as f64)), i % 2 == 0))
//!     .collect();
//! let tree = KdTree::build(stops);
//!
//! let hits = tree.query_rect((2.0, 4.0), (-10.0, 10.0));
//! assert_eq!(hits.len(), 3);
//! ```

mod query;
mod view;


pub use view::{NodeView, Nodes, SplitLine};

use std::collections::VecDeque;
use std::ops::Range;
use transit_index_types::{Bounds, Location, Stop};

/// Level of every leaf. Nodes above it are internal.
pub const MAX_DEPTH: u8 = 6;

/// Coordinate a node splits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// x on even levels, y on odd ones.
    pub const fn for_level(level: u8) -> Self {
        if level % 2 == 0 { Axis::X } else { Axis::Y }
    }

    #[inline]
    pub fn coord(self, loc: &Location) -> f64 {
        match self {
            Axis::X => loc.x,
            Axis::Y => loc.y,
        }
    }
}

#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) level: u8,
    pub(crate) label: usize,
    pub(crate) range: Range<usize>,
    pub(crate) bounds: Option<Bounds>,
    pub(crate) median: Option<Stop>,
    pub(crate) left: Option<Box<Node>>,
    pub(crate) right: Option<Box<Node>>,
}

impl Node {
    fn new(level: u8, label: usize, range: Range<usize>) -> Self {
        Self {
            level,
            label,
            range,
            bounds: None,
            median: None,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) fn is_leaf(&self) -> bool {
        self.level >= MAX_DEPTH
    }

    pub(crate) fn children(&self) -> impl Iterator<Item = &Node> {
        [self.left.as_deref(), self.right.as_deref()].into_iter().flatten()
    }
}

/// Immutable spatial index over a batch of stops.
#[derive(Debug)]
pub struct KdTree {
    stops: Vec<Stop>,
    root: Node,
    node_count: usize,
}

impl KdTree {
    /// Build the tree in one breadth-first pass.
    ///
    /// A node at level `L` sorts its stops on [`Axis::for_level`]`(L)`,
    /// gives the first `n / 2` to its left child and the rest to its right
    /// child, and remembers the first stop of the right half as its median.
    /// Empty nodes are still expanded, so every leaf sits at [`MAX_DEPTH`].
    pub fn build(stops: Vec<Stop>) -> Self {
        let mut stops = stops;
        let mut root = Node::new(0, 0, 0..stops.len());
        let mut next_label = 1;

        {
            let mut queue: VecDeque<&mut Node> = VecDeque::new();
            queue.push_back(&mut root);

            while let Some(node) = queue.pop_front() {
                let subset = &mut stops[node.range.clone()];
                node.bounds = Bounds::from_locations(subset.iter().map(Stop::location));

                if node.is_leaf() {
                    continue;
                }

                let axis = Axis::for_level(node.level);
                subset.sort_by(|a, b| axis.coord(&a.location).total_cmp(&axis.coord(&b.location)));

                let split = subset.len() / 2;
                node.median = subset.get(split).cloned();

                let mid = node.range.start + split;
                let level = node.level + 1;
                node.left = Some(Box::new(Node::new(level, next_label, node.range.start..mid)));
                node.right = Some(Box::new(Node::new(level, next_label + 1, mid..node.range.end)));
                next_label += 2;

                let Node { left, right, .. } = node;
                queue.extend(left.as_deref_mut());
                queue.extend(right.as_deref_mut());
            }
        }

        log::debug!(
            "Built k-d tree over {} stops with {} nodes",
            stops.len(),
            next_label
        );

        Self {
            stops,
            root,
            node_count: next_label,
        }
    }

    /// Number of stops held.
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// Total node count, internal and leaf.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Every stop, in leaf order.
    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Bounding box of every stop, or `None` when the tree is empty.
    pub fn bounds(&self) -> Option<Bounds> {
        self.root.bounds
    }

    pub(crate) fn stops_of(&self, node: &Node) -> &[Stop] {
        &self.stops[node.range.clone()]
    }
}

impl FromIterator<Stop> for KdTree {
    fn from_iter<I: IntoIterator<Item = Stop>>(iter: I) -> Self {
        Self::build(iter.into_iter().collect())
    }
}
