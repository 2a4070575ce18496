use bevy::prelude::*;

use super::resources::ParticleTuning;

pub const PARTICLE_SIZE: f32 = 10.0;

/// One fragment of the death burst, moving radially out from where the
/// actor died.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct DeathParticle {
    pub center: Vec2,
    /// Unit direction of travel.
    pub vector: Vec2,
    /// Radial distance from the center, px.
    pub distance: f32,
    /// Second-ring particles hold still for a beat before spreading.
    pub waiting: bool,
    pub wait_ticks: u32,
    pub ticks_moved: u32,
}

impl DeathParticle {
    /// A burst member at `angle_deg` degrees, on ring 0 (launches
    /// immediately) or ring 1 (starts further out and delayed).
    pub fn new(center: Vec2, angle_deg: f32, ring: u32, tuning: &ParticleTuning) -> Self {
        let radians = angle_deg.to_radians();
        Self {
            center,
            vector: Vec2::new(radians.cos(), radians.sin()),
            distance: ring as f32 * tuning.ring_spacing,
            waiting: ring > 0,
            wait_ticks: 0,
            ticks_moved: 0,
        }
    }

    /// Advance one tick. Returns true once the particle has used up its
    /// travel allowance, which shrinks by however long it waited.
    pub fn step(&mut self, tuning: &ParticleTuning) -> bool {
        if self.waiting {
            self.wait_ticks += 1;
            if self.wait_ticks >= tuning.ring_delay {
                self.waiting = false;
            }
            return false;
        }

        self.distance += tuning.speed;
        self.ticks_moved += 1;
        self.ticks_moved >= tuning.max_ticks.saturating_sub(self.wait_ticks)
    }

    pub fn position(&self) -> Vec2 {
        self.center + self.vector * self.distance
    }
}
