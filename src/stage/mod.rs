//! Stage domain: viewport tracking, obstacle layout, and the screen to
//! world transform sync.

use bevy::prelude::*;

pub mod bounds;
pub mod components;
pub mod resources;
pub mod systems;


pub use bounds::Bounds;
pub use components::{Obstacle, ObstacleAnchor};
pub use resources::{SpawnAnchor, WindowBounds};

use crate::core::{GameState, SimSet};

pub struct StagePlugin;

impl Plugin for StagePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<WindowBounds>()
            .add_systems(OnEnter(GameState::Running), systems::setup_stage)
            .add_systems(
                Update,
                systems::apply_window_resize
                    .in_set(SimSet::Stage)
                    .run_if(in_state(GameState::Running)),
            )
            .add_systems(
                Update,
                systems::sync_transforms
                    .in_set(SimSet::Present)
                    .run_if(in_state(GameState::Running)),
            );
    }
}
