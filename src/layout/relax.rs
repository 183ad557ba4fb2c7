// Relaxation engine.
//
// Colliding node pairs are pushed apart one damped step per animation
// frame. Each side of a pair carries its own push vector and a shared step
// budget (the amplitude); a pair leaves the moving set when it separates or
// when the budget runs out. After every frame a full pairwise re-scan picks
// up collisions created by that frame's movement, so a displaced node can
// start pushing a previously untouched neighbour.
//
// Overcrowded layouts (more nodes than the canvas can hold without overlap)
// may never fully settle. Per-pair budgets keep the work per frame bounded,
// so that shows up as residual overlap, not as a hang.

use std::collections::HashMap;

use super::{LayoutConfig, detect_collision, move_node};
use crate::geometry::{Size, Vector};
use crate::graph::Node;

/// Bookkeeping for one side of a colliding pair.
#[derive(Debug, Clone)]
struct MovingPair {
    /// Index of the node this one is separating from.
    partner: usize,
    /// Current push direction; replaced with the effective vector after
    /// each move so bounces off the canvas edges carry into later frames.
    vector: Vector,
    /// Remaining step budget, decremented every frame.
    amplitude: f64,
}

/// Owns the moving-pair set. All node displacement goes through this
/// engine via `move_node`; everything else sees read-only snapshots.
#[derive(Debug, Default)]
pub struct Relaxation {
    moving: HashMap<usize, MovingPair>,
}

impl Relaxation {
    pub fn new() -> Relaxation {
        Relaxation {
            moving: HashMap::new(),
        }
    }

    /// True when no pair is in motion.
    pub fn settled(&self) -> bool {
        self.moving.is_empty()
    }

    /// Indices of the nodes currently in motion, ascending. The renderer
    /// paints these above the static layer.
    pub fn moving_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self.moving.keys().copied().collect();
        indices.sort_unstable();
        indices
    }

    /// Drop all moving state. Regenerating the graph reseeds from scratch.
    pub fn clear(&mut self) {
        self.moving.clear();
    }

    /// Scan every ordered node pair and set the colliding ones in motion.
    ///
    /// Each side of a new pair gets one immediate displacement scaled by
    /// the elastic force and enters the moving set keyed by its own index
    /// with a full amplitude budget. Nodes already in motion are skipped.
    /// Returns the number of pairs seeded.
    pub fn seed(&mut self, nodes: &mut [Node], canvas: Size, cfg: &LayoutConfig) -> usize {
        let mut seeded = 0;
        for i in 0..nodes.len() {
            for j in 0..nodes.len() {
                if i == j || self.moving.contains_key(&i) || self.moving.contains_key(&j) {
                    continue;
                }
                let push = detect_collision(&nodes[j], &nodes[i]);
                if push.is_zero() {
                    continue;
                }
                // j moves along the push, i takes the inverse.
                let applied_j = move_node(&mut nodes[j], push, canvas, cfg.elastic_force);
                let applied_i = move_node(&mut nodes[i], push.inverted(), canvas, cfg.elastic_force);
                self.moving.insert(
                    j,
                    MovingPair {
                        partner: i,
                        vector: applied_j,
                        amplitude: cfg.elastic_force,
                    },
                );
                self.moving.insert(
                    i,
                    MovingPair {
                        partner: j,
                        vector: applied_i,
                        amplitude: cfg.elastic_force,
                    },
                );
                seeded += 1;
            }
        }
        seeded
    }

    /// Advance every moving pair by one damped step, then re-scan all
    /// nodes for collisions created by this frame's movement. Returns the
    /// number of entries still in motion.
    ///
    /// A pair whose re-test comes back clean is removed even if amplitude
    /// remains; a pair that is still colliding when its amplitude runs out
    /// is dropped anyway, so no single pair consumes effort forever.
    pub fn step(&mut self, nodes: &mut [Node], canvas: Size, cfg: &LayoutConfig) -> usize {
        let mut order: Vec<usize> = self.moving.keys().copied().collect();
        order.sort_unstable();

        for index in order {
            // Each pair is registered once per side; drive it from the
            // lower index. The entry may also be gone already if an
            // earlier pair removed it this frame.
            let (partner, vector, amplitude) = match self.moving.get(&index) {
                Some(pair) => (pair.partner, pair.vector, pair.amplitude),
                None => continue,
            };
            if partner < index {
                continue;
            }
            if amplitude <= 0.0 {
                self.moving.remove(&index);
                self.moving.remove(&partner);
                continue;
            }
            let partner_vector = match self.moving.get(&partner) {
                Some(pair) => pair.vector,
                None => vector.inverted(),
            };

            let applied = move_node(&mut nodes[index], vector, canvas, amplitude);
            let partner_applied = move_node(&mut nodes[partner], partner_vector, canvas, amplitude);

            let resolved = detect_collision(&nodes[index], &nodes[partner]).is_zero();
            if resolved || amplitude - 1.0 <= 0.0 {
                self.moving.remove(&index);
                self.moving.remove(&partner);
                continue;
            }
            if let Some(pair) = self.moving.get_mut(&index) {
                pair.vector = applied;
                pair.amplitude = amplitude - 1.0;
            }
            if let Some(pair) = self.moving.get_mut(&partner) {
                pair.vector = partner_applied;
                pair.amplitude = amplitude - 1.0;
            }
        }

        // Movement may have produced fresh overlaps with untouched nodes.
        self.seed(nodes, canvas, cfg);
        self.moving.len()
    }
}

/// Drive the relaxation until the layout settles or `max_frames` elapses.
/// Returns true when settled.
///
/// This is the renderer-free frame driver used by tests and native
/// consumers; the wasm layer instead calls `Relaxation::step` once per
/// animation tick.
pub fn settle(nodes: &mut [Node], canvas: Size, cfg: &LayoutConfig, max_frames: usize) -> bool {
    let mut relax = Relaxation::new();
    relax.seed(nodes, canvas, cfg);
    for _ in 0..max_frames {
        if relax.settled() {
            return true;
        }
        relax.step(nodes, canvas, cfg);
    }
    relax.settled()
}
