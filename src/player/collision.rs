//! Proximity collision queries against the viewport edges and stage
//! obstacles.
//!
//! All three queries are margin-based: contact means the relevant edges
//! sit within `margin` pixels of each other while the perpendicular
//! spans overlap. Horizontal checks are directional so the actor never
//! sticks to a wall it is moving away from.

use crate::stage::{Bounds, WindowBounds};

use super::components::Facing;

/// Is the actor within `margin` of a wall it is moving toward?
pub fn horizontal_blocked(
    bounds: &Bounds,
    window: &WindowBounds,
    obstacles: &[Bounds],
    facing: Facing,
    margin: f32,
) -> bool {
    if bounds.is_degenerate() {
        return false;
    }

    let play = &window.playable;
    if !play.is_degenerate() {
        let left_distance = (play.left - bounds.left).abs();
        let right_distance = (play.right - bounds.right).abs();
        let edge_hit = match facing {
            Facing::Left => left_distance <= margin,
            Facing::Right => right_distance <= margin,
        };
        if edge_hit {
            return true;
        }
    }

    for object in obstacles {
        if object.is_degenerate() {
            continue;
        }
        if !bounds.overlaps_y(object, margin) {
            continue;
        }
        let hit = match facing {
            Facing::Left => (object.right - bounds.left).abs() <= margin,
            Facing::Right => (object.left - bounds.right).abs() <= margin,
        };
        if hit {
            return true;
        }
    }

    false
}

/// Is the actor's top edge within `margin` of the viewport top or an
/// obstacle underside it is rising into?
pub fn hit_ceiling(
    bounds: &Bounds,
    window: &WindowBounds,
    obstacles: &[Bounds],
    margin: f32,
) -> bool {
    if bounds.is_degenerate() {
        return false;
    }

    let play = &window.playable;
    if !play.is_degenerate() && (play.top - bounds.top).abs() <= margin {
        return true;
    }

    for object in obstacles {
        if object.is_degenerate() {
            continue;
        }
        // Only undersides: the actor must hang below the object.
        if bounds.bottom < object.bottom {
            continue;
        }
        if !bounds.overlaps_x(object, margin) {
            continue;
        }
        if (object.bottom - bounds.top).abs() <= margin {
            return true;
        }
    }

    false
}

/// Ground contact query. Returns the signed vertical gap to close so
/// the actor rests exactly on the supporting surface; `None` when
/// nothing is underfoot. The caller applies the snap, keeping this a
/// pure read.
pub fn ground_hit(
    bounds: &Bounds,
    window: &WindowBounds,
    obstacles: &[Bounds],
    margin: f32,
) -> Option<f32> {
    if bounds.is_degenerate() {
        return None;
    }

    let play = &window.playable;
    if !play.is_degenerate() && (play.bottom - bounds.bottom).abs() <= margin {
        return Some(play.bottom - bounds.bottom);
    }

    for object in obstacles {
        if object.is_degenerate() {
            continue;
        }
        // Only tops: the actor must be above the object's surface.
        if bounds.bottom > object.top {
            continue;
        }
        if !bounds.overlaps_x(object, margin) {
            continue;
        }
        let gap = object.top - bounds.bottom;
        if gap.abs() <= margin {
            return Some(gap);
        }
    }

    None
}
