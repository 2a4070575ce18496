use bevy::prelude::*;

use crate::player::Facing;
use crate::stage::{Bounds, WindowBounds};

use super::components::{Bullet, ChargeTier};
use super::events::{BulletExpired, BulletSpawned, FireBullet};
use super::resources::{CombatTuning, ShotClock};

const BULLET_Z: f32 = 5.0;

/// Rate-limit gate: a shot needs a free slot under the cap and enough
/// wall-clock distance from the previous shot.
pub(crate) fn can_spawn(
    live: usize,
    last_shot: Option<f32>,
    now: f32,
    tuning: &CombatTuning,
) -> bool {
    if live >= tuning.max_bullets {
        return false;
    }
    match last_shot {
        Some(at) => now - at >= tuning.shot_spacing,
        None => true,
    }
}

/// Place a fresh projectile at the actor's muzzle for the direction it
/// is firing.
pub(crate) fn muzzle_bounds(
    origin: &Bounds,
    facing: Facing,
    tier: ChargeTier,
    tuning: &CombatTuning,
) -> Bounds {
    let size = tier.size();
    let top = origin.top + tuning.top_offset;
    // Both offsets place the bullet's left edge.
    let left = match facing {
        Facing::Left => origin.left + tuning.left_offset,
        Facing::Right => origin.right + tuning.right_offset,
    };
    Bounds::new(left, top, size.x, size.y)
}

/// Has the projectile reached the retire margin at either edge?
pub(crate) fn past_edge(bounds: &Bounds, direction: f32, view_width: f32, margin: f32) -> bool {
    if direction > 0.0 {
        bounds.right >= view_width - margin
    } else {
        bounds.left <= margin
    }
}

/// Advance one projectile a tick. Past the retire margin it reports
/// its expiry, carrying the shot's tier, instead of moving on.
pub(crate) fn step_bullet(
    bullet: &Bullet,
    bounds: &mut Bounds,
    speed: f32,
    view_width: f32,
    margin: f32,
) -> Option<BulletExpired> {
    bounds.translate_x(speed * bullet.direction);
    if past_edge(bounds, bullet.direction, view_width, margin) {
        Some(BulletExpired { tier: bullet.tier })
    } else {
        None
    }
}

pub fn fire_bullets(
    mut commands: Commands,
    mut requests: MessageReader<FireBullet>,
    real_time: Res<Time<Real>>,
    tuning: Res<CombatTuning>,
    mut clock: ResMut<ShotClock>,
    live: Query<(), With<Bullet>>,
    mut spawned: MessageWriter<BulletSpawned>,
) {
    let now = real_time.elapsed_secs();
    let mut count = live.iter().count();

    for request in requests.read() {
        if !can_spawn(count, clock.last_shot, now, &tuning) {
            debug!("Shot dropped by rate limit");
            continue;
        }
        clock.last_shot = Some(now);
        count += 1;

        let tier = ChargeTier::for_charge(request.charge, &tuning);
        let bounds = muzzle_bounds(&request.origin, request.facing, tier, &tuning);
        commands.spawn((
            Bullet {
                direction: request.facing.sign(),
                tier,
            },
            bounds,
            Sprite {
                color: tier.color(),
                custom_size: Some(tier.size()),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, BULLET_Z),
        ));
        spawned.write(BulletSpawned { tier });
    }
}

pub fn move_bullets(
    mut commands: Commands,
    tuning: Res<CombatTuning>,
    window: Res<WindowBounds>,
    mut bullets: Query<(Entity, &Bullet, &mut Bounds)>,
    mut expired: MessageWriter<BulletExpired>,
) {
    for (entity, bullet, mut bounds) in &mut bullets {
        if let Some(event) = step_bullet(
            bullet,
            &mut bounds,
            tuning.bullet_speed,
            window.width,
            tuning.edge_margin,
        ) {
            commands.entity(entity).despawn();
            expired.write(event);
        }
    }
}
