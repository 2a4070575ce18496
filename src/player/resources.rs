use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Logical button snapshot for the current tick. Refreshed from the raw
/// keyboard and mouse state before the locomotion pass runs, so every
/// step in the pass sees the same inputs.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub attack: bool,
}

/// Movement and spawn tuning, loaded from `assets/data/tuning.ron`.
/// Speeds are px/s; limits are px.
#[derive(Resource, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MovementTuning {
    pub walk_speed: f32,
    pub slide_speed: f32,
    /// Slide travel distance before it ends on its own.
    pub slide_limit: f32,
    pub jump_speed: f32,
    /// Rise distance before a jump stops on its own.
    pub jump_limit: f32,
    pub gravity: f32,
    /// Spawn drop descent, px per tick.
    pub spawn_drop_speed: f32,
    /// Proximity window for all collision queries, px.
    pub collision_margin: f32,
    /// Delay before the first respawn attempt, seconds.
    pub respawn_delay: f32,
    /// Delay between follow-up attempts when the spawn point is off
    /// screen, seconds.
    pub respawn_retry_delay: f32,
    /// Attempts before the respawn parks and waits for a resize.
    pub respawn_retry_cap: u32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            walk_speed: 500.0,
            slide_speed: 650.0,
            slide_limit: 300.0,
            jump_speed: 650.0,
            jump_limit: 300.0,
            gravity: 900.0,
            spawn_drop_speed: 15.0,
            collision_margin: 10.0,
            respawn_delay: 10.0,
            respawn_retry_delay: 0.5,
            respawn_retry_cap: 20,
        }
    }
}

/// Pending respawn, armed when the player dies. Ticks on wall-clock
/// time so tab throttling does not stretch the delay further than the
/// browser already would.
#[derive(Resource, Debug)]
pub struct RespawnTimer {
    pub timer: Timer,
    pub retries: u32,
    /// Retry cap was hit; waits for a window resize to re-arm.
    pub parked: bool,
}

impl RespawnTimer {
    pub fn new(delay: f32) -> Self {
        Self {
            timer: Timer::from_seconds(delay, TimerMode::Once),
            retries: 0,
            parked: false,
        }
    }

    /// Wake a parked respawn with a fresh short fuse. A live countdown
    /// is left alone. Returns whether anything changed.
    pub fn rearm(&mut self, delay: f32) -> bool {
        if !self.parked {
            return false;
        }
        self.parked = false;
        self.retries = 0;
        self.timer = Timer::from_seconds(delay, TimerMode::Once);
        true
    }
}
