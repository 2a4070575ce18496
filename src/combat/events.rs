use bevy::ecs::message::Message;

use crate::player::Facing;
use crate::stage::Bounds;

use super::components::ChargeTier;

/// The actor wants a shot fired. Subject to the rate limit; a dropped
/// request is a silent no-op.
#[derive(Debug, Clone, Copy)]
pub struct FireBullet {
    pub charge: f32,
    pub facing: Facing,
    pub origin: Bounds,
}

impl Message for FireBullet {}

#[derive(Debug, Clone, Copy)]
pub struct BulletSpawned {
    pub tier: ChargeTier,
}

impl Message for BulletSpawned {}

/// A projectile left the viewport and was retired.
#[derive(Debug, Clone, Copy)]
pub struct BulletExpired {
    pub tier: ChargeTier,
}

impl Message for BulletExpired {}
