//! Debug domain: dev-tools overlay showing live actor and projectile
//! state. Compiled only with the `dev-tools` feature.

use bevy::prelude::*;

pub mod systems;
pub mod ui;

use crate::core::{GameState, SimSet};

/// Overlay visibility, toggled at runtime.
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub visible: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>().add_systems(
            Update,
            (systems::toggle_overlay, systems::update_overlay)
                .chain()
                .in_set(SimSet::Present)
                .run_if(in_state(GameState::Running)),
        );
    }
}
