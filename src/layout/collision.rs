// Bounding-box collision detector.
//
// Overlap is tested per axis on the node bounding boxes, X first. A box
// pair only truly collides when both axes overlap, so a miss on X
// short-circuits before Y is looked at.

use crate::geometry::Vector;
use crate::graph::Node;

/// Direction `a` should move to separate from `b`, or zero when the pair
/// is not colliding.
///
/// On a true collision both components are non-zero, each `+1` or `-1`.
/// A node with an invalid box on either side never collides.
pub fn detect_collision(a: &Node, b: &Node) -> Vector {
    let abox = &a.bounding_box;
    let bbox = &b.bounding_box;
    if !abox.is_valid() || !bbox.is_valid() {
        return Vector::ZERO;
    }

    let x = axis_push(abox.left, abox.right, bbox.left, bbox.right);
    if x == 0.0 {
        return Vector::ZERO;
    }
    let y = axis_push(abox.top, abox.bottom, bbox.top, bbox.bottom);
    if y == 0.0 {
        return Vector::ZERO;
    }
    Vector { x, y }
}

/// Overlap test for one axis given the box extents of both nodes. Returns
/// the push direction for `a`, or 0 when the intervals are disjoint.
fn axis_push(a_lo: f64, a_hi: f64, b_lo: f64, b_hi: f64) -> f64 {
    if a_lo >= b_lo && a_lo <= b_hi {
        // a starts inside b: push towards the far side.
        1.0
    } else if a_hi >= b_lo && a_hi <= b_hi {
        // a ends inside b: push back.
        -1.0
    } else if a_lo < b_lo && a_hi > b_hi {
        // a swallows b whole. Fixed -1 tie-break.
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_node(index: usize, cx: f64, cy: f64, radius: f64) -> Node {
        Node::new(index, cx, cy, radius, "red")
    }

    #[test]
    fn test_diagonal_overlap_pushes_up_right() {
        let node1 = make_node(1, 1.0, 1.0, 1.0);
        let node2 = make_node(2, 2.0, 2.0, 2.0);

        let push = detect_collision(&node2, &node1);
        assert_eq!(push.x, 1.0);
        assert_eq!(push.y, 1.0);
    }

    #[test]
    fn test_disjoint_boxes_do_not_collide() {
        let node1 = make_node(1, 6.0, 6.0, 1.0);
        let node2 = make_node(2, 2.0, 2.0, 2.0);

        let push = detect_collision(&node2, &node1);
        assert!(push.is_zero());
    }

    #[test]
    fn test_overlap_from_lower_left_pushes_down_left() {
        let node1 = make_node(1, 6.0, 6.0, 1.0);
        let node2 = make_node(2, 5.0, 5.0, 1.0);

        let push = detect_collision(&node2, &node1);
        assert_eq!(push.x, -1.0);
        assert_eq!(push.y, -1.0);
    }

    #[test]
    fn test_mixed_axis_directions() {
        let node1 = make_node(1, 6.0, 6.0, 1.0);

        let node2 = make_node(2, 7.0, 5.0, 1.0);
        let push = detect_collision(&node2, &node1);
        assert_eq!(push.x, 1.0);
        assert_eq!(push.y, -1.0);

        let node3 = make_node(3, 5.0, 7.0, 1.0);
        let push = detect_collision(&node3, &node1);
        assert_eq!(push.x, -1.0);
        assert_eq!(push.y, 1.0);
    }

    #[test]
    fn test_push_vectors_are_antiparallel() {
        // Boxes {0,0,2,2} and {1,1,3,3}: a genuine partial overlap.
        let node1 = make_node(1, 1.0, 1.0, 1.0);
        let node2 = make_node(2, 2.0, 2.0, 1.0);

        let forward = detect_collision(&node2, &node1);
        let backward = detect_collision(&node1, &node2);

        assert_eq!(forward, Vector { x: 1.0, y: 1.0 });
        assert_eq!(backward, forward.inverted());
    }

    #[test]
    fn test_single_axis_overlap_is_not_a_collision() {
        // Boxes share X range but are vertically apart.
        let node1 = make_node(1, 5.0, 2.0, 2.0);
        let node2 = make_node(2, 5.0, 20.0, 2.0);

        assert!(detect_collision(&node1, &node2).is_zero());
        assert!(detect_collision(&node2, &node1).is_zero());
    }

    #[test]
    fn test_containment_uses_fixed_tie_break() {
        // node2's box fully contains node1's on both axes.
        let node1 = make_node(1, 10.0, 10.0, 1.0);
        let node2 = make_node(2, 10.0, 10.0, 5.0);

        let push = detect_collision(&node2, &node1);
        assert_eq!(push.x, -1.0);
        assert_eq!(push.y, -1.0);
    }

    #[test]
    fn test_invalid_box_never_collides() {
        let node1 = make_node(1, 5.0, 5.0, 2.0);
        let mut node2 = make_node(2, 5.0, 5.0, 2.0);
        node2.bounding_box.left = f64::NAN;

        assert!(detect_collision(&node1, &node2).is_zero());
        assert!(detect_collision(&node2, &node1).is_zero());
    }
}
