use bevy::prelude::*;

pub const PLAYER_WIDTH: f32 = 48.0;
pub const PLAYER_HEIGHT: f32 = 96.0;

/// Marker for the one controllable actor.
#[derive(Component, Debug)]
pub struct Player;

/// Which way the actor faces. Movement and muzzle placement key off the
/// sign; the renderer mirrors the sprite.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Left => -1.0,
            Facing::Right => 1.0,
        }
    }
}

/// Mutable actor state driven by the per-tick locomotion pass.
///
/// `grounded` and `jumping` are mutually exclusive: landing clears
/// `jumping`, leaving the ground clears `grounded`.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PlayerState {
    /// Spawn drop finished; input is live.
    pub spawned: bool,
    pub grounded: bool,
    pub walking: bool,
    pub sliding: bool,
    /// Upward phase of a jump is in progress.
    pub jumping: bool,
    /// Jump key has been seen released since the last jump, so the next
    /// press is a fresh edge.
    pub jump_released: bool,
    /// Distance travelled in the current slide, px.
    pub slide_distance: f32,
    /// Slide re-trigger is blocked until the trigger keys release.
    pub slide_locked: bool,
    /// Distance risen in the current jump, px.
    pub jump_distance: f32,
    /// Attack key is held and charge is accumulating.
    pub charging: bool,
    /// Accumulated charge value; compared against the combat tuning
    /// thresholds to pick a shot tier.
    pub charge: f32,
    /// Simulated time since the charge animation last advanced.
    pub charge_interval: f32,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            spawned: false,
            grounded: false,
            walking: false,
            sliding: false,
            jumping: false,
            jump_released: false,
            slide_distance: 0.0,
            slide_locked: false,
            jump_distance: 0.0,
            charging: false,
            charge: 0.0,
            charge_interval: 0.0,
        }
    }
}

/// Attached while the actor is falling in from the top of the screen.
/// Removed once the teleport-in animation completes.
#[derive(Component, Debug)]
pub struct SpawnSequence {
    /// Rest position for the actor's top edge.
    pub target_top: f32,
    /// Still descending; once false we are waiting on the materialize
    /// animation.
    pub dropping: bool,
}
