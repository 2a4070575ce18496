//! Player domain: the controllable actor, its collision queries, and
//! its spawn/death lifecycle.

use bevy::prelude::*;

pub mod collision;
pub mod components;
pub mod resources;
pub mod systems;

#[cfg(test)]
mod tests;

pub use components::{Facing, Player, PlayerState, SpawnSequence, PLAYER_HEIGHT, PLAYER_WIDTH};
pub use resources::{ControlInput, MovementTuning, RespawnTimer};

use crate::core::{GameState, SimSet};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControlInput>()
            .init_resource::<MovementTuning>()
            .add_systems(
                Update,
                (
                    systems::input::sample_input,
                    systems::spawn::bootstrap_player,
                    systems::spawn::handle_resize_fall,
                    systems::spawn::run_spawn_drop,
                    systems::spawn::finish_spawn,
                    systems::locomotion::update_actor,
                    systems::spawn::handle_player_death,
                    systems::spawn::tick_respawn,
                    systems::spawn::rearm_respawn_on_resize,
                )
                    .chain()
                    .in_set(SimSet::Actor)
                    .run_if(in_state(GameState::Running)),
            );
    }
}
