//! Combat domain: charged projectiles and their rate limiting.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod resources;
pub mod systems;


pub use components::{Bullet, ChargeTier};
pub use events::{BulletExpired, BulletSpawned, FireBullet};
pub use resources::{CombatTuning, ShotClock};

use crate::core::{GameState, SimSet};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CombatTuning>()
            .init_resource::<ShotClock>()
            .add_message::<FireBullet>()
            .add_message::<BulletSpawned>()
            .add_message::<BulletExpired>()
            .add_systems(
                Update,
                (systems::fire_bullets, systems::move_bullets)
                    .chain()
                    .in_set(SimSet::Combat)
                    .run_if(in_state(GameState::Running)),
            );
    }
}
