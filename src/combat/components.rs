use bevy::prelude::*;

use super::resources::CombatTuning;

/// Display tier of a shot, decided by the charge it was fired with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChargeTier {
    #[default]
    Basic,
    Charged,
    Max,
}

impl ChargeTier {
    pub fn for_charge(charge: f32, tuning: &CombatTuning) -> Self {
        if charge >= tuning.max_charge {
            ChargeTier::Max
        } else if charge >= tuning.low_charge {
            ChargeTier::Charged
        } else {
            ChargeTier::Basic
        }
    }

    pub fn size(self) -> Vec2 {
        match self {
            ChargeTier::Basic => Vec2::new(12.0, 12.0),
            ChargeTier::Charged => Vec2::new(24.0, 24.0),
            ChargeTier::Max => Vec2::new(40.0, 40.0),
        }
    }

    pub fn color(self) -> Color {
        match self {
            ChargeTier::Basic => Color::srgb(0.95, 0.9, 0.3),
            ChargeTier::Charged => Color::srgb(0.4, 0.8, 1.0),
            ChargeTier::Max => Color::srgb(0.3, 0.55, 1.0),
        }
    }
}

/// A live projectile. Travels horizontally at a fixed per-tick speed
/// until it nears a viewport edge.
#[derive(Component, Debug)]
pub struct Bullet {
    /// -1 left, +1 right.
    pub direction: f32,
    pub tier: ChargeTier,
}
