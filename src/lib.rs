//! Core geometry and layout for the graphpaper canvas visualizer.
//!
//! Generates a randomly jittered grid of circular nodes, wires random
//! edges between them, and relaxes bounding-box collisions one damped step
//! per animation frame until the layout settles. Rendering and UI live in
//! the frontend; this crate only produces and mutates geometry.

mod geometry;
mod graph;
mod layout;
mod output;
mod wasm;

pub use geometry::{BoundingBox, Size, Vector};
pub use graph::{Edge, GraphError, Node, generate, link_nodes, node_at};
pub use layout::{LayoutConfig, Relaxation, detect_collision, move_node, settle};
pub use output::{EdgeOutput, ErrorInfo, GraphOutput, NodeOutput};
pub use wasm::Graph;
