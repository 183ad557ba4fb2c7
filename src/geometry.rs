// Geometry primitives shared by the graph model and the layout algorithms.
//
// All values are canvas pixels. A Vector is a displacement or direction,
// never a location; node locations live on the node as centre coordinates.

use serde::Serialize;

/// A displacement or push direction.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    /// Flip both components. The static side of a colliding pair takes the
    /// inverse of the moving side's push.
    pub fn inverted(self) -> Vector {
        Vector {
            x: -self.x,
            y: -self.y,
        }
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }
}

/// Axis-aligned box enclosing a node's circle. Stands in for circle-circle
/// distance during collision testing.
///
/// Invariant: `left < right`, `top < bottom`, and the box stays consistent
/// with the owning node's centre + radius after every move.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundingBox {
    pub fn from_centre(cx: f64, cy: f64, radius: f64) -> BoundingBox {
        BoundingBox {
            left: cx - radius,
            top: cy - radius,
            right: cx + radius,
            bottom: cy + radius,
        }
    }

    /// Inclusive point containment, used for click hit-testing.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.top && y <= self.bottom
    }

    /// Finite and non-inverted. Collision treats anything else as
    /// "not colliding" since the node may still be mid-construction.
    pub fn is_valid(&self) -> bool {
        self.left.is_finite()
            && self.top.is_finite()
            && self.right.is_finite()
            && self.bottom.is_finite()
            && self.left < self.right
            && self.top < self.bottom
    }
}

/// Canvas extent. Every bounding box must stay inside
/// `[0, width] x [0, height]`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}
