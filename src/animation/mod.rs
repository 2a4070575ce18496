//! Animation domain: the layered per-actor rig and the systems that
//! advance its timers each tick.

use bevy::prelude::*;

pub mod rig;
pub mod systems;

#[cfg(test)]
mod tests;

pub use rig::{ActiveLayers, AnimationRig, FrameStyle};

use crate::core::{GameState, SimSet};

pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                systems::tick_spawn_sequences,
                systems::tick_attack_timeouts,
                systems::tick_walk_wind_downs,
                systems::tick_idles,
                systems::publish_frames,
            )
                .chain()
                .in_set(SimSet::Animation)
                .run_if(in_state(GameState::Running)),
        )
        .add_systems(
            Update,
            systems::apply_facing
                .in_set(SimSet::Present)
                .run_if(in_state(GameState::Running)),
        );
    }
}
