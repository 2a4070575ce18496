use bevy::prelude::*;

use crate::animation::AnimationRig;
use crate::combat::Bullet;
use crate::particles::DeathParticle;
use crate::player::{Player, PlayerState};
use crate::stage::Bounds;

use super::ui::{spawn_overlay, DebugInfoOverlay};
use super::DebugState;

pub fn toggle_overlay(
    mut commands: Commands,
    keys: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !keys.just_pressed(KeyCode::F1) && !keys.just_pressed(KeyCode::Backquote) {
        return;
    }
    state.visible = !state.visible;

    for entity in existing.iter() {
        commands.entity(entity).despawn();
    }
    if state.visible {
        spawn_overlay(&mut commands);
    }
}

pub fn update_overlay(
    state: Res<DebugState>,
    players: Query<(&PlayerState, &Bounds, &AnimationRig), With<Player>>,
    bullets: Query<(), With<Bullet>>,
    particles: Query<(), With<DeathParticle>>,
    mut overlay: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !state.visible {
        return;
    }
    let Ok(mut text) = overlay.single_mut() else {
        return;
    };

    let mut lines = String::new();
    if let Ok((player, bounds, rig)) = players.single() {
        lines.push_str(&format!(
            "pos: ({:.0}, {:.0})\n",
            bounds.left, bounds.top
        ));
        lines.push_str(&format!(
            "spawned: {} grounded: {} jumping: {}\n",
            player.spawned, player.grounded, player.jumping
        ));
        lines.push_str(&format!(
            "walking: {} sliding: {} locked: {}\n",
            player.walking, player.sliding, player.slide_locked
        ));
        lines.push_str(&format!(
            "charge: {:.0} charging: {}\n",
            player.charge, player.charging
        ));
        lines.push_str(&format!(
            "layers: {:?} idle: {}\n",
            rig.layers, rig.idle
        ));
    } else {
        lines.push_str("no player\n");
    }
    lines.push_str(&format!(
        "bullets: {} particles: {}",
        bullets.iter().count(),
        particles.iter().count()
    ));

    **text = lines;
}
