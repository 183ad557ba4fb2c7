// Jittered-grid node generator.
//
// Nodes are laid out in rows: each row holds floor(sqrt(count)) nodes, the
// horizontal step is two radius seeds plus the minimum spacing, and both
// the step and the row baseline pick up a random jitter so the grid reads
// as organic rather than regular. The canvas is sized to the furthest box
// extents plus a fixed margin.

use rand::Rng;

use super::{GraphError, Node};
use crate::geometry::Size;
use crate::layout::LayoutConfig;

/// Generate `count` nodes on a jittered grid and the canvas that holds
/// them.
///
/// Intentionally randomized: the same `count`/`radius_seed` always produce
/// a non-degenerate layout (no negative coordinates) but not the same one.
/// `count = 0` yields an empty node list and the minimum-size canvas.
pub fn generate<R: Rng>(
    count: usize,
    radius_seed: f64,
    cfg: &LayoutConfig,
    rng: &mut R,
) -> Result<(Vec<Node>, Size), GraphError> {
    if !radius_seed.is_finite() || radius_seed <= 0.0 {
        return Err(GraphError::InvalidParameter {
            param: "radius_seed",
            message: format!("must be a positive number, got {}", radius_seed),
        });
    }

    let increment = 2.0 * radius_seed + cfg.min_space;
    let random_variable = cfg.max_space - cfg.min_space;
    // Row width; 1 for tiny graphs, which degrade to a vertical strip.
    let row_len = (count as f64).sqrt().floor() as usize;

    let mut nodes: Vec<Node> = Vec::with_capacity(count);
    let mut centre_x = increment;
    let mut centre_y = increment;
    let mut line_y = increment;
    let mut max_right = increment;
    let mut max_bottom = increment;

    for index in 0..count {
        let radius = radius_seed + radius_seed * rng.gen_range(0.0..1.0);
        let node = Node::new(index, centre_x, centre_y, radius, random_color(rng));

        max_right = max_right.max(node.bounding_box.right);
        max_bottom = max_bottom.max(node.bounding_box.bottom);
        nodes.push(node);

        // Walk the grid: every `row_len`-th node wraps to a new row.
        if (index + 1) % row_len != 0 {
            centre_x += increment + random_variable * rng.gen_range(0.0..1.0);
            centre_y = line_y + random_variable * rng.gen_range(0.0..1.0);
        } else {
            centre_x = increment + random_variable * rng.gen_range(0.0..1.0);
            line_y += increment;
            centre_y = line_y + random_variable * rng.gen_range(0.0..1.0);
        }
    }

    let canvas = Size {
        width: max_right + cfg.max_space,
        height: max_bottom + cfg.max_space,
    };
    Ok((nodes, canvas))
}

fn random_color<R: Rng>(rng: &mut R) -> String {
    format!(
        "rgb({},{},{})",
        rng.gen_range(0..256),
        rng.gen_range(0..256),
        rng.gen_range(0..256)
    )
}
