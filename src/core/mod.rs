//! Core domain: app states, simulation ordering, and lifecycle messages.

use bevy::prelude::*;

pub mod events;
pub mod state;
pub mod systems;

pub use events::{ParticleBurstSpawned, PlayerDied, PlayerRespawned, SpawnCompleted};
pub use state::GameState;

/// Fixed per-tick ordering for the simulation. Every gameplay plugin
/// hangs its systems off one of these sets so cross-domain reads see a
/// consistent world: the stage resolves the viewport first, the actor
/// moves against it, projectiles and particles follow, and presentation
/// paints whatever the tick produced.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SimSet {
    Stage,
    Actor,
    Combat,
    Particles,
    Animation,
    Present,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_message::<SpawnCompleted>()
            .add_message::<PlayerDied>()
            .add_message::<PlayerRespawned>()
            .add_message::<ParticleBurstSpawned>()
            .configure_sets(
                Update,
                (
                    SimSet::Stage,
                    SimSet::Actor,
                    SimSet::Combat,
                    SimSet::Particles,
                    SimSet::Animation,
                    SimSet::Present,
                )
                    .chain(),
            )
            .add_systems(Startup, systems::setup_camera);
    }
}
