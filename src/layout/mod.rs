// Collision-driven layout relaxation.
//
// The generator drops nodes on a jittered grid, which leaves overlapping
// pairs. The modules here detect those overlaps, push each pair apart one
// damped step per animation frame, and keep every node inside the canvas.
//
// Submodules:
// - collision: bounding-box overlap test producing a push direction
// - movement: bounded move primitive that clamps against the canvas
// - relax: moving-pair bookkeeping, the per-frame step, the settle driver
//
// The relaxation engine is the only writer of node geometry; the renderer
// receives read-only snapshots between frames.

mod collision;
mod movement;
mod relax;

pub use collision::detect_collision;
pub use movement::move_node;
pub use relax::{Relaxation, settle};

/// Tuning constants for grid spacing and relaxation effort.
#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Minimum spacing between grid columns and rows.
    pub min_space: f64,
    /// Upper bound of the random spacing jitter; also the canvas margin.
    pub max_space: f64,
    /// Initial displacement scale and per-pair step budget.
    pub elastic_force: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_space: 10.0,
            max_space: 200.0,
            elastic_force: 10.0,
        }
    }
}
