use std::collections::HashMap;

use crate::geometry::BoundingBox;

/// A circular node on the canvas.
///
/// `index` is the node's stable identity (its position in the node array).
/// The centre and bounding box are mutated in place by the relaxation
/// engine; `links` is filled once by the link generator and never touched
/// by relaxation.
#[derive(Debug, Clone)]
pub struct Node {
    pub index: usize,
    /// Display name, `N{index}`.
    pub name: String,
    /// CSS colour string, e.g. `rgb(12,200,31)`. Opaque to this crate; the
    /// renderer decides what to do with it.
    pub color: String,
    pub centre_x: f64,
    pub centre_y: f64,
    pub radius: f64,
    pub bounding_box: BoundingBox,
    /// Neighbour index -> weight. Weights are reserved for future use and
    /// always 1 today.
    pub links: HashMap<usize, u32>,
}

impl Node {
    pub fn new(
        index: usize,
        centre_x: f64,
        centre_y: f64,
        radius: f64,
        color: impl Into<String>,
    ) -> Node {
        Node {
            index,
            name: format!("N{}", index),
            color: color.into(),
            centre_x,
            centre_y,
            radius,
            bounding_box: BoundingBox::from_centre(centre_x, centre_y, radius),
            links: HashMap::new(),
        }
    }

    /// Recompute the bounding box from the current centre and radius.
    /// Must be called after any centre mutation.
    pub fn sync_bounding_box(&mut self) {
        self.bounding_box = BoundingBox::from_centre(self.centre_x, self.centre_y, self.radius);
    }
}

/// An edge between two nodes. Directed for rendering (arrowheads),
/// undirected as far as collisions are concerned. Immutable once generated;
/// rebuilding the graph discards and regenerates all edges.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from_node: usize,
    pub to_node: usize,
}
