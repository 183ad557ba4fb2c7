// Bounded move primitive.
//
// All node displacement funnels through `move_node`, which is what keeps
// the canvas-containment invariant: no bounding box ever exits
// [0, canvas] on either axis.

use crate::geometry::{Size, Vector};
use crate::graph::Node;

/// Displace a node by `vector * factor`, bouncing inward off the canvas
/// edges, and re-sync its bounding box.
///
/// Returns the unit direction actually applied. A step that would cross a
/// canvas edge is redirected inward, so callers that keep stepping with the
/// returned vector observe the bounce instead of the original direction.
pub fn move_node(node: &mut Node, vector: Vector, canvas: Size, factor: f64) -> Vector {
    let bbox = node.bounding_box;

    let dir_x = bounce(vector.x, bbox.left, bbox.right, canvas.width, factor);
    let dir_y = bounce(vector.y, bbox.top, bbox.bottom, canvas.height, factor);

    node.centre_x = clamp_centre(node.centre_x + dir_x * factor, node.radius, canvas.width);
    node.centre_y = clamp_centre(node.centre_y + dir_y * factor, node.radius, canvas.height);
    node.sync_bounding_box();

    Vector { x: dir_x, y: dir_y }
}

/// Redirect one axis of the requested direction when the step would push
/// the box past either canvas edge.
fn bounce(dir: f64, near: f64, far: f64, extent: f64, factor: f64) -> f64 {
    let step = dir * factor;
    if near + step < 0.0 {
        1.0
    } else if far + step > extent {
        -1.0
    } else {
        dir
    }
}

/// Centre position at which the box stays inside [0, extent]. When the
/// canvas is narrower than the node the near edge wins.
fn clamp_centre(centre: f64, radius: f64, extent: f64) -> f64 {
    centre.min(extent - radius).max(radius)
}
