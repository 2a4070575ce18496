//! Lifecycle messages shared across domains.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// The spawn teleport-in sequence finished; the actor is now live and
/// accepts input.
#[derive(Debug, Clone, Copy)]
pub struct SpawnCompleted;

impl Message for SpawnCompleted {}

/// The player left the playable area and died. `center` is where the
/// death burst should originate.
#[derive(Debug, Clone, Copy)]
pub struct PlayerDied {
    pub center: Vec2,
}

impl Message for PlayerDied {}

/// A respawn drop has begun after the death delay elapsed.
#[derive(Debug, Clone, Copy)]
pub struct PlayerRespawned;

impl Message for PlayerRespawned {}

/// A death burst was emitted.
#[derive(Debug, Clone, Copy)]
pub struct ParticleBurstSpawned {
    pub count: usize,
}

impl Message for ParticleBurstSpawned {}
