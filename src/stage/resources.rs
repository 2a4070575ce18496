use bevy::prelude::*;

use super::bounds::Bounds;

/// Current viewport, in the same top-left screen space everything else
/// uses. `playable` is the raw size with the collision margin trimmed
/// off the right and bottom edges, so actors resting flush against
/// those edges still register contact.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct WindowBounds {
    pub width: f32,
    pub height: f32,
    pub playable: Bounds,
}

impl WindowBounds {
    pub fn from_size(width: f32, height: f32, margin: f32) -> Self {
        Self {
            width,
            height,
            playable: Bounds {
                left: 0.0,
                top: 0.0,
                right: (width - margin).max(0.0),
                bottom: (height - margin).max(0.0),
            },
        }
    }

    /// Past any edge of the playable area. A rect that merely pokes
    /// over an edge counts: the viewport no longer accommodates it.
    pub fn is_off_screen(&self, rect: &Bounds) -> bool {
        rect.left < self.playable.left
            || rect.right > self.playable.right
            || rect.top < self.playable.top
            || rect.bottom > self.playable.bottom
    }
}

/// Resolved respawn point. `x` is the actor's left edge, `top` the rest
/// position its drop-in settles at.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SpawnAnchor {
    pub x: f32,
    pub top: f32,
}
