use bevy::prelude::*;

/// Top-level app state. `Boot` covers content loading; everything
/// gameplay-facing runs in `Running`.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    #[default]
    Boot,
    Running,
}
