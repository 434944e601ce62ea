//! Read-only traversal of a built tree, for renderers and diagnostics.

use super::{Axis, KdTree, Node};
use std::fmt;
use transit_index_types::{Bounds, Stop};

/// Borrowed handle on one node of a [`KdTree`].
///
/// Exposes everything a renderer needs (level, label, median, children,
/// stops) and nothing that can change the tree.
#[derive(Clone, Copy)]
pub struct NodeView<'a> {
    tree: &'a KdTree,
    node: &'a Node,
}

impl<'a> NodeView<'a> {
    fn new(tree: &'a KdTree, node: &'a Node) -> Self {
        Self { tree, node }
    }

    /// Depth of the node, 0 at the root.
    pub fn level(&self) -> u8 {
        self.node.level
    }

    /// Breadth-first creation index: 0 for the root, then 1, 2, ... for
    /// children in the order they were created.
    pub fn label(&self) -> usize {
        self.node.label
    }

    pub fn is_leaf(&self) -> bool {
        self.node.is_leaf()
    }

    /// Axis this node splits on, `None` for leaves.
    pub fn split_axis(&self) -> Option<Axis> {
        (!self.is_leaf()).then(|| Axis::for_level(self.node.level))
    }

    /// First stop of the right half at the moment of the split.
    ///
    /// `None` for leaves and for empty nodes.
    pub fn median(&self) -> Option<&'a Stop> {
        self.node.median.as_ref()
    }

    /// Split coordinate on [`NodeView::split_axis`].
    pub fn split_value(&self) -> Option<f64> {
        let axis = self.split_axis()?;
        self.median().map(|m| axis.coord(&m.location))
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.node.bounds
    }

    /// Stops assigned to this node.
    pub fn stops(&self) -> &'a [Stop] {
        self.tree.stops_of(self.node)
    }

    pub fn len(&self) -> usize {
        self.node.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node.range.is_empty()
    }

    pub fn left(&self) -> Option<NodeView<'a>> {
        self.node.left.as_deref().map(|n| NodeView::new(self.tree, n))
    }

    pub fn right(&self) -> Option<NodeView<'a>> {
        self.node.right.as_deref().map(|n| NodeView::new(self.tree, n))
    }
}

impl fmt::Debug for NodeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeView")
            .field("level", &self.level())
            .field("label", &self.label())
            .field("len", &self.len())
            .field("median", &self.median().map(Stop::id))
            .finish_non_exhaustive()
    }
}

/// Pre-order iterator over every node, left subtree first.
#[derive(Debug)]
pub struct Nodes<'a> {
    stack: Vec<NodeView<'a>>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = NodeView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let view = self.stack.pop()?;
        self.stack.extend(view.right());
        self.stack.extend(view.left());
        Some(view)
    }
}

/// One partition boundary, clipped to the cell of the node that made it.
///
/// For [`Axis::X`] the line is vertical at `x = at` from `y = from` to
/// `y = to`; for [`Axis::Y`] it is horizontal at `y = at` from `x = from`
/// to `x = to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitLine {
    pub level: u8,
    pub axis: Axis,
    pub at: f64,
    pub from: f64,
    pub to: f64,
}

impl KdTree {
    pub fn root(&self) -> NodeView<'_> {
        NodeView::new(self, &self.root)
    }

    /// Every node in pre-order.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            stack: vec![self.root()],
        }
    }

    /// Leaves in left-to-right order.
    pub fn leaves(&self) -> impl Iterator<Item = NodeView<'_>> {
        self.nodes().filter(NodeView::is_leaf)
    }

    /// Partition boundaries inside `viewport`, shallowest first per branch.
    ///
    /// Each internal node's line spans the cell left over by its ancestors'
    /// splits; children then inherit the half on their side of the line.
    /// A split value outside the current cell draws no line, and the
    /// children's cells are clamped to the cell instead. A NaN split value
    /// (from a stop with a NaN coordinate) ends its branch, and a NaN
    /// viewport draws nothing.
    pub fn split_lines(&self, viewport: Bounds) -> Vec<SplitLine> {
        let mut lines = Vec::new();
        if [viewport.min_x(), viewport.min_y(), viewport.max_x(), viewport.max_y()]
            .iter()
            .any(|edge| edge.is_nan())
        {
            log::warn!("Rejecting split line request with a NaN viewport");
            return lines;
        }
        collect_split_lines(self.root(), viewport, &mut lines);
        lines
    }
}

fn collect_split_lines(view: NodeView<'_>, cell: Bounds, lines: &mut Vec<SplitLine>) {
    let (Some(axis), Some(at)) = (view.split_axis(), view.split_value()) else {
        return;
    };
    if at.is_nan() {
        return;
    }

    let (lo, hi) = match axis {
        Axis::X => (cell.min_x(), cell.max_x()),
        Axis::Y => (cell.min_y(), cell.max_y()),
    };

    if lo <= at && at <= hi {
        let (from, to) = match axis {
            Axis::X => (cell.min_y(), cell.max_y()),
            Axis::Y => (cell.min_x(), cell.max_x()),
        };
        lines.push(SplitLine {
            level: view.level(),
            axis,
            at,
            from,
            to,
        });
    }

    let cut = at.clamp(lo, hi);
    let (left_cell, right_cell) = match axis {
        Axis::X => (cell.with_x(lo, cut), cell.with_x(cut, hi)),
        Axis::Y => (cell.with_y(lo, cut), cell.with_y(cut, hi)),
    };

    if let Some(left) = view.left() {
        collect_split_lines(left, left_cell, lines);
    }
    if let Some(right) = view.right() {
        collect_split_lines(right, right_cell, lines);
    }
}
