use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Charge and projectile tuning, loaded from `assets/data/tuning.ron`.
/// Charge values are abstract units accumulated at `charge_rate` per
/// second of held attack.
#[derive(Resource, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CombatTuning {
    /// Below this a release fires nothing.
    pub min_charge: f32,
    /// At or above this the shot upgrades from the basic tier.
    pub low_charge: f32,
    /// At or above this the shot is fully charged.
    pub max_charge: f32,
    /// Charge gained per second of held attack.
    pub charge_rate: f32,
    /// Simulated time between charge animation advances, seconds.
    pub charge_interval: f32,
    /// Concurrent projectile cap.
    pub max_bullets: usize,
    /// Wall-clock spacing between shots, seconds.
    pub shot_spacing: f32,
    /// Projectile travel, px per tick.
    pub bullet_speed: f32,
    /// Muzzle offset below the actor's top edge, px.
    pub top_offset: f32,
    /// Muzzle offset from the actor's left edge when firing left, px.
    pub left_offset: f32,
    /// Muzzle offset from the actor's right edge when firing right, px.
    pub right_offset: f32,
    /// Distance from the viewport edge at which a projectile retires.
    pub edge_margin: f32,
}

impl Default for CombatTuning {
    fn default() -> Self {
        Self {
            min_charge: 250.0,
            low_charge: 500.0,
            max_charge: 1000.0,
            charge_rate: 2250.0,
            charge_interval: 0.02,
            max_bullets: 3,
            shot_spacing: 0.1,
            bullet_speed: 10.0,
            top_offset: 60.0,
            left_offset: -32.0,
            right_offset: 0.0,
            edge_margin: 20.0,
        }
    }
}

/// Wall-clock moment of the last successful shot, for spacing.
#[derive(Resource, Debug, Default)]
pub struct ShotClock {
    pub last_shot: Option<f32>,
}
