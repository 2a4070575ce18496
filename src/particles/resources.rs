use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Death burst tuning, loaded from `assets/data/tuning.ron`.
#[derive(Resource, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ParticleTuning {
    /// Particles in one burst.
    pub burst_count: u32,
    /// Radial travel, px per tick.
    pub speed: f32,
    /// Travel allowance in ticks before a particle retires.
    pub max_ticks: u32,
    /// Hold, in ticks, before the second ring launches.
    pub ring_delay: u32,
    /// Extra starting distance for the second ring, px.
    pub ring_spacing: f32,
}

impl Default for ParticleTuning {
    fn default() -> Self {
        Self {
            burst_count: 16,
            speed: 1.0,
            max_ticks: 2000,
            ring_delay: 50,
            ring_spacing: 300.0,
        }
    }
}
