use bevy::prelude::*;

use crate::content::ObstacleDef;

/// A solid stage element the actor collides with.
#[derive(Component, Debug)]
pub struct Obstacle;

/// The authored placement rule for an obstacle, kept so the rect can be
/// re-resolved against the new viewport on every resize.
#[derive(Component, Debug, Clone)]
pub struct ObstacleAnchor(pub ObstacleDef);
