//! Content domain: RON tuning and stage layout loaded from
//! `assets/data/` before gameplay starts.

use bevy::prelude::*;
use std::path::Path;

pub mod data;
pub mod loader;


pub use data::{
    AnchorX, AnchorY, DataFile, ObstacleDef, SpawnDef, StageDef, TuningFile,
    STAGE_SCHEMA_VERSION, TUNING_SCHEMA_VERSION,
};
pub use loader::{ContentErrorKind, ContentLoadError};

use crate::core::GameState;

const DATA_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

/// Load tuning and the stage layout, falling back to built-in defaults
/// when a file is missing or malformed, then hand off to gameplay.
fn load_content(mut commands: Commands, mut next: ResMut<NextState<GameState>>) {
    let base = Path::new(DATA_DIR);

    let tuning = match loader::load_data_file::<TuningFile>(
        &base.join("tuning.ron"),
        TUNING_SCHEMA_VERSION,
    ) {
        Ok(tuning) => tuning,
        Err(e) => {
            warn!("{}; using built-in tuning defaults", e);
            TuningFile::default()
        }
    };
    commands.insert_resource(tuning.movement);
    commands.insert_resource(tuning.combat);
    commands.insert_resource(tuning.particles);

    let stage = resolve_stage(loader::load_data_file::<StageDef>(
        &base.join("stage.ron"),
        STAGE_SCHEMA_VERSION,
    ));
    info!("Content loaded: {} stage obstacles", stage.obstacles.len());
    commands.insert_resource(stage);

    next.set(GameState::Running);
}

/// A missing stage file runs on the built-in layout. A stage file that
/// exists but cannot be used is a hard startup error: the spawn anchor
/// is the one precondition the game cannot invent a value for.
fn resolve_stage(loaded: Result<StageDef, ContentLoadError>) -> StageDef {
    match loaded {
        Ok(stage) => stage,
        Err(e) if e.kind == ContentErrorKind::Missing => {
            warn!("{}; using built-in default stage", e);
            StageDef::default()
        }
        Err(e) => panic!("Stage layout rejected: {}", e),
    }
}
