use bevy::prelude::*;

use super::components::DeathParticle;
use super::resources::ParticleTuning;
use super::systems::burst;

#[test]
fn burst_has_sixteen_members_in_two_rings() {
    let tuning = ParticleTuning::default();
    let members = burst(Vec2::new(300.0, 400.0), &tuning);
    assert_eq!(members.len(), 16);

    let waiting = members.iter().filter(|p| p.waiting).count();
    assert_eq!(waiting, 8, "second ring holds at the start");

    // First ring starts at the center, second ring further out.
    assert!(members[..8].iter().all(|p| p.distance == 0.0));
    assert!(
        members[8..]
            .iter()
            .all(|p| p.distance == tuning.ring_spacing)
    );
}

#[test]
fn directions_cover_the_compass_at_45_degrees() {
    let tuning = ParticleTuning::default();
    let members = burst(Vec2::ZERO, &tuning);
    for (i, particle) in members.iter().enumerate() {
        let expected = (45.0 * (i % 8) as f32).to_radians();
        assert!((particle.vector.x - expected.cos()).abs() < 1e-5);
        assert!((particle.vector.y - expected.sin()).abs() < 1e-5);
        assert!((particle.vector.length() - 1.0).abs() < 1e-5);
    }
}

#[test]
fn second_ring_waits_before_moving() {
    let tuning = ParticleTuning::default();
    let mut particle = DeathParticle::new(Vec2::ZERO, 90.0, 1, &tuning);
    let start = particle.distance;

    for _ in 0..tuning.ring_delay {
        assert!(!particle.step(&tuning));
    }
    assert_eq!(particle.distance, start, "no travel during the hold");
    assert!(!particle.waiting);

    particle.step(&tuning);
    assert_eq!(particle.distance, start + tuning.speed);
}

#[test]
fn particle_travels_radially() {
    let tuning = ParticleTuning::default();
    let center = Vec2::new(100.0, 200.0);
    let mut particle = DeathParticle::new(center, 0.0, 0, &tuning);
    for _ in 0..50 {
        particle.step(&tuning);
    }
    let position = particle.position();
    assert!((position.y - center.y).abs() < 1e-3, "0 degrees is horizontal");
    assert_eq!(position.x, center.x + 50.0 * tuning.speed);
}

#[test]
fn every_member_retires_within_the_allowance() {
    let tuning = ParticleTuning::default();
    let mut members = burst(Vec2::ZERO, &tuning);
    let allowance = tuning.max_ticks + tuning.ring_delay;

    for particle in &mut members {
        let mut retired = false;
        for _ in 0..allowance {
            if particle.step(&tuning) {
                retired = true;
                break;
            }
        }
        assert!(retired, "particle must self-destroy inside the allowance");
    }
}

#[test]
fn waiting_shortens_the_travel_allowance() {
    let tuning = ParticleTuning::default();
    let mut delayed = DeathParticle::new(Vec2::ZERO, 0.0, 1, &tuning);

    let mut ticks = 0u32;
    while !delayed.step(&tuning) {
        ticks += 1;
    }
    ticks += 1;
    // Hold plus (allowance minus hold) of travel.
    assert_eq!(ticks, tuning.max_ticks);
}
