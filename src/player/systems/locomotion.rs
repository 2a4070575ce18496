//! The per-tick locomotion pass.
//!
//! Steps run in a strict order: walk, slide, jump, gravity, charge.
//! Later steps read flags the earlier ones set this tick (sliding
//! suppresses walk movement, jump and slide both claim `grounded`
//! before gravity runs), so the order is part of the semantics, not an
//! implementation detail.

use bevy::prelude::*;

use crate::animation::AnimationRig;
use crate::combat::{CombatTuning, FireBullet};
use crate::stage::{Bounds, Obstacle, WindowBounds};

use super::super::collision;
use super::super::components::{Facing, Player, PlayerState};
use super::super::resources::{ControlInput, MovementTuning};

/// Everything a locomotion step reads but never writes.
pub(crate) struct StepCtx<'a> {
    pub input: &'a ControlInput,
    pub tuning: &'a MovementTuning,
    pub combat: &'a CombatTuning,
    pub window: &'a WindowBounds,
    pub obstacles: &'a [Bounds],
    pub dt: f32,
}

/// A shot the charge step wants fired this tick. The projectile
/// manager may still drop it against the rate limit; the actor's charge
/// is spent either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct FireRequest {
    pub charge: f32,
}

/// Ground query with the snap applied: when a surface is within the
/// collision margin, close the gap so the actor rests flush on it.
fn snap_to_ground(ctx: &StepCtx, bounds: &mut Bounds, margin: f32) -> bool {
    match collision::ground_hit(bounds, ctx.window, ctx.obstacles, margin) {
        Some(gap) => {
            bounds.translate_y(gap);
            true
        }
        None => false,
    }
}

/// Landing: clear the jump, claim the ground, drop the jump pose.
pub(crate) fn land(state: &mut PlayerState, rig: &mut AnimationRig) {
    state.jumping = false;
    state.grounded = true;
    state.jump_distance = 0.0;
    rig.set_jump(false);
}

/// Leaving the ground without a jump: falling pose on, ground layers
/// off, and the slide re-trigger locked until the keys release.
pub(crate) fn enable_falling(state: &mut PlayerState, rig: &mut AnimationRig) {
    state.grounded = false;
    state.slide_locked = true;
    rig.set_jump(true);
    rig.set_walk(false);
    rig.set_slide(false);
    rig.set_attack(false);
}

fn disable_slide(state: &mut PlayerState, rig: &mut AnimationRig) {
    rig.set_slide(false);
    state.sliding = false;
    state.slide_distance = 0.0;
}

/// The slide lock opens when both trigger keys are up, or when jump is
/// up and the previous slide ran to completion.
fn unlock_slide(ctx: &StepCtx, state: &mut PlayerState) {
    let both_released = !ctx.input.down && !ctx.input.jump;
    let completed = state.slide_distance == 0.0;
    if both_released || (!ctx.input.jump && completed) {
        state.slide_locked = false;
    }
}

pub(crate) fn walk_step(
    ctx: &StepCtx,
    state: &mut PlayerState,
    facing: &mut Facing,
    bounds: &mut Bounds,
    rig: &mut AnimationRig,
) {
    let left = ctx.input.left;
    let right = ctx.input.right;

    // Neither or both directions: no intent, wind the animation down.
    if (!left && !right) || (left && right) {
        if state.walking {
            rig.set_walk(false);
            state.walking = false;
        }
        return;
    }

    if state.sliding {
        return;
    }

    state.walking = true;
    *facing = if left { Facing::Left } else { Facing::Right };
    rig.set_walk(true);

    if collision::horizontal_blocked(
        bounds,
        ctx.window,
        ctx.obstacles,
        *facing,
        ctx.tuning.collision_margin,
    ) {
        return;
    }

    bounds.translate_x(ctx.tuning.walk_speed * facing.sign() * ctx.dt);

    // Walked off a ledge.
    if !state.jumping && !snap_to_ground(ctx, bounds, ctx.tuning.collision_margin) {
        land(state, rig);
        enable_falling(state, rig);
    }
}

pub(crate) fn slide_step(
    ctx: &StepCtx,
    state: &mut PlayerState,
    facing: &Facing,
    bounds: &mut Bounds,
    rig: &mut AnimationRig,
) {
    if state.sliding {
        advance_slide(ctx, state, facing, bounds, rig);
    } else {
        trigger_slide(ctx, state, facing, bounds, rig);
    }
}

fn trigger_slide(
    ctx: &StepCtx,
    state: &mut PlayerState,
    facing: &Facing,
    bounds: &mut Bounds,
    rig: &mut AnimationRig,
) {
    unlock_slide(ctx, state);

    if state.slide_locked {
        return;
    }

    if state.grounded && ctx.input.down && ctx.input.jump {
        state.sliding = true;
        state.slide_locked = true;
        state.slide_distance = 0.0;
        rig.set_slide(true);
        advance_slide(ctx, state, facing, bounds, rig);
    }
}

fn advance_slide(
    ctx: &StepCtx,
    state: &mut PlayerState,
    facing: &Facing,
    bounds: &mut Bounds,
    rig: &mut AnimationRig,
) {
    unlock_slide(ctx, state);

    state.slide_distance += ctx.tuning.slide_speed * ctx.dt;
    if state.slide_distance >= ctx.tuning.slide_limit {
        disable_slide(state, rig);
        return;
    }

    if collision::horizontal_blocked(
        bounds,
        ctx.window,
        ctx.obstacles,
        *facing,
        ctx.tuning.collision_margin,
    ) {
        disable_slide(state, rig);
        return;
    }

    bounds.translate_x(ctx.tuning.slide_speed * facing.sign() * ctx.dt);

    // Slid off a ledge.
    if !snap_to_ground(ctx, bounds, ctx.tuning.collision_margin) {
        land(state, rig);
        disable_slide(state, rig);
        enable_falling(state, rig);
        return;
    }

    rig.set_slide(true);
}

pub(crate) fn jump_step(
    ctx: &StepCtx,
    state: &mut PlayerState,
    bounds: &mut Bounds,
    rig: &mut AnimationRig,
) {
    if !ctx.input.jump {
        state.jumping = false;
        state.jump_released = true;
        return;
    }

    // A jump starts only on a fresh press while grounded.
    if !state.jumping && state.jump_released && state.grounded {
        start_jump(ctx, state, rig);
    }

    if !state.jumping {
        return;
    }

    if collision::hit_ceiling(bounds, ctx.window, ctx.obstacles, ctx.tuning.collision_margin)
        || state.jump_distance >= ctx.tuning.jump_limit
    {
        state.jumping = false;
        return;
    }

    let velocity = ctx.tuning.jump_speed * ctx.dt;
    state.jump_distance += velocity;
    bounds.translate_y(-velocity);
    state.grounded = false;
}

fn start_jump(ctx: &StepCtx, state: &mut PlayerState, rig: &mut AnimationRig) {
    // Down+jump is the slide chord, and a locked slide blocks the jump
    // until its keys release.
    if ctx.input.down || state.slide_locked {
        return;
    }

    if state.sliding {
        disable_slide(state, rig);
    }

    enable_falling(state, rig);

    state.jumping = true;
    state.jump_released = false;
}

pub(crate) fn gravity_step(
    ctx: &StepCtx,
    state: &mut PlayerState,
    bounds: &mut Bounds,
    rig: &mut AnimationRig,
) {
    if state.jumping || state.grounded {
        return;
    }

    if snap_to_ground(ctx, bounds, ctx.tuning.collision_margin) {
        land(state, rig);
        return;
    }

    bounds.translate_y(ctx.tuning.gravity * ctx.dt);
}

/// Fire if possible: blocked while sliding, and a non-forced release
/// below the minimum charge keeps the charge for later instead of
/// wasting it.
fn try_attack(
    state: &mut PlayerState,
    rig: &mut AnimationRig,
    combat: &CombatTuning,
    force: bool,
) -> Option<FireRequest> {
    if state.sliding {
        return None;
    }

    state.charging = force;

    if state.charge < combat.min_charge && !force {
        return None;
    }

    rig.set_attack(true);

    let request = FireRequest {
        charge: state.charge,
    };
    state.charge = 0.0;
    Some(request)
}

pub(crate) fn charge_step(
    ctx: &StepCtx,
    state: &mut PlayerState,
    rig: &mut AnimationRig,
) -> Option<FireRequest> {
    if !ctx.input.attack {
        if state.charging {
            return try_attack(state, rig, ctx.combat, false);
        }
        return None;
    }

    // A fresh press always fires an uncharged shot immediately.
    let fired = if !state.charging {
        try_attack(state, rig, ctx.combat, true)
    } else {
        None
    };

    state.charging = true;

    state.charge_interval += ctx.dt;
    if state.charge_interval < ctx.combat.charge_interval {
        return fired;
    }
    state.charge_interval = 0.0;

    state.charge += ctx.combat.charge_rate * ctx.dt;
    rig.update_charge(state.charge, ctx.combat.min_charge, ctx.combat.max_charge);

    fired
}

/// One simulation tick for the actor, in the fixed step order.
pub fn update_actor(
    time: Res<Time>,
    input: Res<ControlInput>,
    tuning: Res<MovementTuning>,
    combat: Res<CombatTuning>,
    window: Res<WindowBounds>,
    obstacles: Query<&Bounds, (With<Obstacle>, Without<Player>)>,
    mut players: Query<
        (&mut PlayerState, &mut Facing, &mut Bounds, &mut AnimationRig),
        With<Player>,
    >,
    mut fire: MessageWriter<FireBullet>,
) {
    let solids: Vec<Bounds> = obstacles.iter().copied().collect();

    for (mut state, mut facing, mut bounds, mut rig) in &mut players {
        if !state.spawned {
            continue;
        }

        let ctx = StepCtx {
            input: &input,
            tuning: &tuning,
            combat: &combat,
            window: &window,
            obstacles: &solids,
            dt: time.delta_secs(),
        };

        walk_step(&ctx, &mut state, &mut facing, &mut bounds, &mut rig);
        slide_step(&ctx, &mut state, &facing, &mut bounds, &mut rig);
        jump_step(&ctx, &mut state, &mut bounds, &mut rig);
        gravity_step(&ctx, &mut state, &mut bounds, &mut rig);
        if let Some(request) = charge_step(&ctx, &mut state, &mut rig) {
            fire.write(FireBullet {
                charge: request.charge,
                facing: *facing,
                origin: *bounds,
            });
        }
    }
}
