//! Particles domain: the radial death burst.

use bevy::prelude::*;

pub mod components;
pub mod resources;
pub mod systems;

#[cfg(test)]
mod tests;

pub use components::DeathParticle;
pub use resources::ParticleTuning;

use crate::core::{GameState, SimSet};

pub struct ParticlesPlugin;

impl Plugin for ParticlesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ParticleTuning>().add_systems(
            Update,
            (systems::spawn_bursts, systems::update_particles)
                .chain()
                .in_set(SimSet::Particles)
                .run_if(in_state(GameState::Running)),
        );
    }
}
