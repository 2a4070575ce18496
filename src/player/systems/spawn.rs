//! Spawn, death, and respawn lifecycle.

use bevy::prelude::*;
use bevy::window::WindowResized;

use crate::animation::{AnimationRig, FrameStyle};
use crate::core::{PlayerDied, PlayerRespawned, SpawnCompleted};
use crate::stage::{Bounds, SpawnAnchor, WindowBounds};

use super::super::components::{
    Facing, Player, PlayerState, SpawnSequence, PLAYER_HEIGHT, PLAYER_WIDTH,
};
use super::super::resources::{MovementTuning, RespawnTimer};

const PLAYER_COLOR: Color = Color::srgb(0.2, 0.5, 0.9);
const PLAYER_Z: f32 = 10.0;

fn spawn_bounds(anchor: &SpawnAnchor) -> Bounds {
    // The drop-in starts at the top of the screen, above the anchor.
    Bounds::new(anchor.x, 0.0, PLAYER_WIDTH, PLAYER_HEIGHT)
}

/// What happens to the actor when a resize moves the world under it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ResizeOutcome {
    Dies,
    Falls,
}

pub(crate) fn resize_outcome(window: &WindowBounds, bounds: &Bounds) -> ResizeOutcome {
    if window.is_off_screen(bounds) {
        ResizeOutcome::Dies
    } else {
        ResizeOutcome::Falls
    }
}

/// What a finished respawn timer does next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RespawnStep {
    Begin,
    Retry,
    Park,
}

/// An on-screen spawn point begins the drop-in immediately. An
/// off-screen one retries on the short fuse until the cap, then parks.
pub(crate) fn respawn_step(candidate_off_screen: bool, retries: u32, cap: u32) -> RespawnStep {
    if !candidate_off_screen {
        RespawnStep::Begin
    } else if retries + 1 >= cap {
        RespawnStep::Park
    } else {
        RespawnStep::Retry
    }
}

/// Create the actor once the stage has resolved a spawn point.
pub fn bootstrap_player(
    mut commands: Commands,
    anchor: Option<Res<SpawnAnchor>>,
    existing: Query<(), With<Player>>,
) {
    let Some(anchor) = anchor else {
        return;
    };
    if !existing.is_empty() {
        return;
    }

    commands.spawn((
        Player,
        Facing::default(),
        PlayerState::default(),
        AnimationRig::default(),
        FrameStyle::default(),
        SpawnSequence {
            target_top: anchor.top,
            dropping: true,
        },
        spawn_bounds(&anchor),
        Sprite {
            color: PLAYER_COLOR,
            custom_size: Some(Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, PLAYER_Z),
    ));
    info!(
        "Player drop-in started at x={}, rest top={}",
        anchor.x, anchor.top
    );
}

/// Descend at a fixed rate per tick until the rest position, then snap
/// exact and start the materialize animation.
pub fn run_spawn_drop(
    tuning: Res<MovementTuning>,
    mut players: Query<(&mut Bounds, &mut AnimationRig, &mut SpawnSequence), With<Player>>,
) {
    for (mut bounds, mut rig, mut sequence) in &mut players {
        if !sequence.dropping {
            continue;
        }
        if bounds.top < sequence.target_top {
            bounds.translate_y(tuning.spawn_drop_speed);
        } else {
            let gap = sequence.target_top - bounds.top;
            bounds.translate_y(gap);
            sequence.dropping = false;
            rig.enable_spawn();
        }
    }
}

/// The materialize animation finished: input goes live.
pub fn finish_spawn(
    mut commands: Commands,
    mut completed: MessageReader<SpawnCompleted>,
    mut players: Query<(Entity, &mut PlayerState), (With<Player>, With<SpawnSequence>)>,
) {
    if completed.is_empty() {
        return;
    }
    completed.clear();

    for (entity, mut state) in &mut players {
        state.spawned = true;
        commands.entity(entity).remove::<SpawnSequence>();
    }
}

/// A resize moved the world under the actor. Entirely outside the
/// playable area is death; otherwise the ground may have moved away, so
/// force a fall and let gravity re-settle things.
pub fn handle_resize_fall(
    mut resized: MessageReader<WindowResized>,
    window: Res<WindowBounds>,
    mut players: Query<(&mut PlayerState, &Bounds, &mut AnimationRig), With<Player>>,
    mut died: MessageWriter<PlayerDied>,
) {
    if resized.is_empty() {
        return;
    }
    resized.clear();

    for (mut state, bounds, mut rig) in &mut players {
        if !state.spawned {
            continue;
        }
        match resize_outcome(&window, bounds) {
            ResizeOutcome::Dies => {
                died.write(PlayerDied {
                    center: bounds.center(),
                });
            }
            ResizeOutcome::Falls => {
                state.grounded = false;
                super::locomotion::enable_falling(&mut state, &mut rig);
            }
        }
    }
}

pub fn handle_player_death(
    mut commands: Commands,
    mut deaths: MessageReader<PlayerDied>,
    tuning: Res<MovementTuning>,
    mut players: Query<(Entity, &mut PlayerState, &mut AnimationRig), With<Player>>,
) {
    if deaths.is_empty() {
        return;
    }
    deaths.clear();

    for (entity, mut state, mut rig) in &mut players {
        *state = PlayerState::default();
        *rig = AnimationRig::default();
        commands
            .entity(entity)
            .insert(Visibility::Hidden)
            .remove::<SpawnSequence>();
    }
    commands.insert_resource(RespawnTimer::new(tuning.respawn_delay));
    info!("Player died, respawn armed");
}

/// Count down the respawn delay on wall-clock time. If the spawn point
/// is off screen, retry on a short interval up to the cap, then park
/// until the window changes.
pub fn tick_respawn(
    mut commands: Commands,
    real_time: Res<Time<Real>>,
    tuning: Res<MovementTuning>,
    anchor: Option<Res<SpawnAnchor>>,
    window: Res<WindowBounds>,
    respawn: Option<ResMut<RespawnTimer>>,
    mut players: Query<(Entity, &mut Bounds), With<Player>>,
    mut respawned: MessageWriter<PlayerRespawned>,
) {
    let (Some(anchor), Some(mut respawn)) = (anchor, respawn) else {
        return;
    };
    if respawn.parked {
        return;
    }

    respawn.timer.tick(real_time.delta());
    if !respawn.timer.is_finished() {
        return;
    }

    let candidate = Bounds::new(anchor.x, anchor.top, PLAYER_WIDTH, PLAYER_HEIGHT);
    match respawn_step(
        window.is_off_screen(&candidate),
        respawn.retries,
        tuning.respawn_retry_cap,
    ) {
        RespawnStep::Park => {
            respawn.retries += 1;
            respawn.parked = true;
            warn!(
                "Spawn point stayed off screen after {} attempts, respawn parked until resize",
                respawn.retries
            );
            return;
        }
        RespawnStep::Retry => {
            respawn.retries += 1;
            respawn.timer = Timer::from_seconds(tuning.respawn_retry_delay, TimerMode::Once);
            return;
        }
        RespawnStep::Begin => {}
    }

    for (entity, mut bounds) in &mut players {
        *bounds = spawn_bounds(&anchor);
        commands.entity(entity).insert((
            SpawnSequence {
                target_top: anchor.top,
                dropping: true,
            },
            Visibility::Visible,
        ));
    }
    commands.remove_resource::<RespawnTimer>();
    respawned.write(PlayerRespawned);
    info!("Player respawn drop-in started");
}

/// A resize may bring a parked spawn point back on screen; give the
/// respawn a fresh short fuse.
pub fn rearm_respawn_on_resize(
    mut resized: MessageReader<WindowResized>,
    tuning: Res<MovementTuning>,
    respawn: Option<ResMut<RespawnTimer>>,
) {
    if resized.is_empty() {
        return;
    }
    resized.clear();

    let Some(mut respawn) = respawn else {
        return;
    };
    if respawn.rearm(tuning.respawn_retry_delay) {
        debug!("Respawn re-armed after resize");
    }
}
