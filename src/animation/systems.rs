use bevy::prelude::*;

use crate::core::SpawnCompleted;
use crate::player::{Facing, Player};

use super::rig::{AnimationRig, FrameStyle};

/// Drive the materialize sequence; announce the tick it finishes.
pub fn tick_spawn_sequences(
    mut rigs: Query<&mut AnimationRig>,
    mut completed: MessageWriter<SpawnCompleted>,
) {
    for mut rig in &mut rigs {
        if rig.tick_spawn() {
            completed.write(SpawnCompleted);
        }
    }
}

/// Attack poses end on wall-clock time, not simulation time.
pub fn tick_attack_timeouts(real_time: Res<Time<Real>>, mut rigs: Query<&mut AnimationRig>) {
    let dt = real_time.delta_secs();
    for mut rig in &mut rigs {
        rig.tick_attack(dt);
    }
}

pub fn tick_walk_wind_downs(mut rigs: Query<&mut AnimationRig>) {
    for mut rig in &mut rigs {
        rig.tick_walk_wind_down();
    }
}

pub fn tick_idles(mut rigs: Query<&mut AnimationRig>) {
    for mut rig in &mut rigs {
        rig.tick_idle();
    }
}

/// Publish each rig's frame indices for whatever paints them.
pub fn publish_frames(mut rigs: Query<(&AnimationRig, &mut FrameStyle)>) {
    for (rig, mut style) in &mut rigs {
        let frames = rig.frames();
        if *style != frames {
            *style = frames;
        }
    }
}

/// Mirror the actor sprite to match its facing.
pub fn apply_facing(mut players: Query<(&Facing, &mut Sprite), With<Player>>) {
    for (facing, mut sprite) in &mut players {
        sprite.flip_x = *facing == Facing::Left;
    }
}
