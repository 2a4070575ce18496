use bevy::prelude::*;

use crate::core::{ParticleBurstSpawned, PlayerDied};
use crate::stage::Bounds;

use super::components::{DeathParticle, PARTICLE_SIZE};
use super::resources::ParticleTuning;

const PARTICLE_COLOR: Color = Color::srgb(0.45, 0.75, 1.0);
const PARTICLE_Z: f32 = 8.0;

/// Build the burst at the death point: eight directions at 45 degree
/// spacing, doubled into an inner ring that flies immediately and an
/// outer ring that starts further out after a short hold.
pub(crate) fn burst(center: Vec2, tuning: &ParticleTuning) -> Vec<DeathParticle> {
    (0..tuning.burst_count)
        .map(|i| DeathParticle::new(center, 45.0 * (i % 8) as f32, i / 8, tuning))
        .collect()
}

pub fn spawn_bursts(
    mut commands: Commands,
    mut deaths: MessageReader<PlayerDied>,
    tuning: Res<ParticleTuning>,
    mut spawned: MessageWriter<ParticleBurstSpawned>,
) {
    for death in deaths.read() {
        let particles = burst(death.center, &tuning);
        let count = particles.len();
        for particle in particles {
            let position = particle.position();
            commands.spawn((
                bounds_at(position),
                particle,
                Sprite {
                    color: PARTICLE_COLOR,
                    custom_size: Some(Vec2::splat(PARTICLE_SIZE)),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, PARTICLE_Z),
            ));
        }
        spawned.write(ParticleBurstSpawned { count });
        info!("Death burst spawned with {} particles", count);
    }
}

pub fn update_particles(
    mut commands: Commands,
    tuning: Res<ParticleTuning>,
    mut particles: Query<(Entity, &mut DeathParticle, &mut Bounds)>,
) {
    for (entity, mut particle, mut rect) in &mut particles {
        if particle.step(&tuning) {
            commands.entity(entity).despawn();
            continue;
        }
        *rect = bounds_at(particle.position());
    }
}

fn bounds_at(position: Vec2) -> Bounds {
    Bounds::new(
        position.x - PARTICLE_SIZE * 0.5,
        position.y - PARTICLE_SIZE * 0.5,
        PARTICLE_SIZE,
        PARTICLE_SIZE,
    )
}
