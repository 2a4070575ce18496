use crate::animation::AnimationRig;
use crate::combat::CombatTuning;
use crate::stage::{Bounds, WindowBounds};

use super::collision;
use super::components::{Facing, PlayerState, PLAYER_HEIGHT, PLAYER_WIDTH};
use super::resources::{ControlInput, MovementTuning, RespawnTimer};
use super::systems::locomotion::{self, FireRequest, StepCtx};
use super::systems::spawn::{resize_outcome, respawn_step, ResizeOutcome, RespawnStep};

const DT: f32 = 1.0 / 60.0;

/// A spawned actor standing on the viewport floor of a 1280x720 window.
struct Fixture {
    input: ControlInput,
    tuning: MovementTuning,
    combat: CombatTuning,
    window: WindowBounds,
    obstacles: Vec<Bounds>,
    state: PlayerState,
    facing: Facing,
    bounds: Bounds,
    rig: AnimationRig,
}

impl Fixture {
    fn new() -> Self {
        let tuning = MovementTuning::default();
        let window = WindowBounds::from_size(1280.0, 720.0, tuning.collision_margin);
        let floor = window.playable.bottom;
        let mut state = PlayerState::default();
        state.spawned = true;
        state.grounded = true;
        state.jump_released = true;
        Self {
            input: ControlInput::default(),
            tuning,
            combat: CombatTuning::default(),
            window,
            obstacles: Vec::new(),
            state,
            facing: Facing::Right,
            bounds: Bounds::new(200.0, floor - PLAYER_HEIGHT, PLAYER_WIDTH, PLAYER_HEIGHT),
            rig: AnimationRig::default(),
        }
    }

    /// One simulation tick in the fixed step order.
    fn tick(&mut self) -> Option<FireRequest> {
        let Fixture {
            input,
            tuning,
            combat,
            window,
            obstacles,
            state,
            facing,
            bounds,
            rig,
        } = self;
        let ctx = StepCtx {
            input,
            tuning,
            combat,
            window,
            obstacles: obstacles.as_slice(),
            dt: DT,
        };
        locomotion::walk_step(&ctx, state, facing, bounds, rig);
        locomotion::slide_step(&ctx, state, facing, bounds, rig);
        locomotion::jump_step(&ctx, state, bounds, rig);
        locomotion::gravity_step(&ctx, state, bounds, rig);
        locomotion::charge_step(&ctx, state, rig)
    }
}

// --- collision queries ---

#[test]
fn ground_hit_snaps_to_viewport_floor() {
    let fx = Fixture::new();
    // Actor bottom at 540, floor at 545: within the 10px margin.
    let bounds = Bounds::new(200.0, 540.0 - PLAYER_HEIGHT, PLAYER_WIDTH, PLAYER_HEIGHT);
    let window = WindowBounds::from_size(1280.0, 555.0, fx.tuning.collision_margin);
    let gap = collision::ground_hit(&bounds, &window, &[], fx.tuning.collision_margin);
    assert_eq!(gap, Some(5.0));
}

#[test]
fn ground_hit_ignores_surfaces_outside_margin() {
    let fx = Fixture::new();
    let bounds = Bounds::new(200.0, 400.0, PLAYER_WIDTH, PLAYER_HEIGHT);
    let gap = collision::ground_hit(&bounds, &fx.window, &[], fx.tuning.collision_margin);
    assert_eq!(gap, None);
}

#[test]
fn ground_hit_snaps_to_obstacle_top() {
    let fx = Fixture::new();
    let platform = Bounds::new(100.0, 503.0, 200.0, 40.0);
    let bounds = Bounds::new(150.0, 500.0 - PLAYER_HEIGHT, PLAYER_WIDTH, PLAYER_HEIGHT);
    let gap = collision::ground_hit(&bounds, &fx.window, &[platform], fx.tuning.collision_margin);
    assert_eq!(gap, Some(3.0));
}

#[test]
fn degenerate_actor_collides_with_nothing() {
    let fx = Fixture::new();
    let bounds = Bounds::default();
    assert!(!collision::horizontal_blocked(
        &bounds,
        &fx.window,
        &[],
        Facing::Left,
        fx.tuning.collision_margin
    ));
    assert!(!collision::hit_ceiling(&bounds, &fx.window, &[], fx.tuning.collision_margin));
    assert_eq!(
        collision::ground_hit(&bounds, &fx.window, &[], fx.tuning.collision_margin),
        None
    );
}

#[test]
fn wall_only_blocks_motion_toward_it() {
    let fx = Fixture::new();
    let bounds = fx.bounds;
    // Wall 2px right of the actor, overlapping vertically.
    let wall = Bounds::new(bounds.right + 2.0, bounds.top, 100.0, 200.0);
    assert!(collision::horizontal_blocked(
        &bounds,
        &fx.window,
        &[wall],
        Facing::Right,
        fx.tuning.collision_margin
    ));
    assert!(!collision::horizontal_blocked(
        &bounds,
        &fx.window,
        &[wall],
        Facing::Left,
        fx.tuning.collision_margin
    ));
}

#[test]
fn ceiling_only_counts_undersides() {
    let fx = Fixture::new();
    let bounds = Bounds::new(200.0, 300.0, PLAYER_WIDTH, PLAYER_HEIGHT);
    let overhead = Bounds::new(180.0, 200.0, 100.0, bounds.top - 200.0 + 5.0);
    assert!(collision::hit_ceiling(
        &bounds,
        &fx.window,
        &[overhead],
        fx.tuning.collision_margin
    ));
    // The same slab positioned below the actor's top is not a ceiling.
    let beneath = Bounds::new(180.0, bounds.bottom + 50.0, 100.0, 40.0);
    assert!(!collision::hit_ceiling(
        &bounds,
        &fx.window,
        &[beneath],
        fx.tuning.collision_margin
    ));
}

// --- walk ---

#[test]
fn walking_moves_and_turns() {
    let mut fx = Fixture::new();
    fx.input.left = true;
    let before = fx.bounds.left;
    fx.tick();
    assert_eq!(fx.facing, Facing::Left);
    assert!(fx.state.walking);
    assert!(fx.rig.layers.walk);
    assert!(fx.bounds.left < before);
}

#[test]
fn opposing_directions_cancel() {
    let mut fx = Fixture::new();
    fx.input.left = true;
    fx.input.right = true;
    let before = fx.bounds;
    fx.tick();
    assert!(!fx.state.walking);
    assert_eq!(fx.bounds, before);
}

#[test]
fn wall_stops_movement_but_not_the_animation() {
    let mut fx = Fixture::new();
    let wall = Bounds::new(fx.bounds.right + 2.0, fx.bounds.top, 100.0, 200.0);
    fx.obstacles.push(wall);
    fx.input.right = true;
    let before = fx.bounds.left;
    fx.tick();
    assert_eq!(fx.bounds.left, before);
    assert!(fx.state.walking);
    assert!(fx.rig.layers.walk);
}

#[test]
fn walking_off_a_ledge_starts_a_fall() {
    let mut fx = Fixture::new();
    let platform = Bounds::new(100.0, 500.0, 200.0, 40.0);
    fx.obstacles.push(platform);
    fx.bounds = Bounds::new(296.0, 500.0 - PLAYER_HEIGHT, PLAYER_WIDTH, PLAYER_HEIGHT);
    fx.input.right = true;
    fx.tick();
    assert!(!fx.state.grounded);
    assert!(fx.rig.layers.jump, "falling shows the jump pose");
}

// --- jump ---

#[test]
fn jump_needs_a_fresh_press() {
    let mut fx = Fixture::new();
    fx.state.jump_released = false;
    fx.input.jump = true;
    fx.tick();
    assert!(!fx.state.jumping, "held-over jump key must not trigger");

    fx.input.jump = false;
    fx.tick();
    fx.input.jump = true;
    fx.tick();
    assert!(fx.state.jumping);
}

#[test]
fn holding_jump_does_not_chain_jumps() {
    let mut fx = Fixture::new();
    fx.input.jump = true;
    fx.tick();
    assert!(fx.state.jumping);

    // Ride the full jump and fall back down with the key still held.
    for _ in 0..600 {
        fx.tick();
        assert!(
            !(fx.state.grounded && fx.state.jumping),
            "grounded and jumping are mutually exclusive"
        );
    }
    assert!(fx.state.grounded);
    assert!(!fx.state.jumping, "no second jump without a release");
}

#[test]
fn jump_rises_until_the_limit() {
    let mut fx = Fixture::new();
    let start_top = fx.bounds.top;
    fx.input.jump = true;
    let mut peak = start_top;
    for _ in 0..120 {
        fx.tick();
        peak = peak.min(fx.bounds.top);
    }
    let rise = start_top - peak;
    assert!(rise > 0.0);
    // One tick of overshoot past the limit at most.
    assert!(rise <= fx.tuning.jump_limit + fx.tuning.jump_speed * DT);
}

#[test]
fn releasing_jump_cuts_the_rise() {
    let mut fx = Fixture::new();
    fx.input.jump = true;
    fx.tick();
    fx.tick();
    assert!(fx.state.jumping);
    fx.input.jump = false;
    fx.tick();
    assert!(!fx.state.jumping);
}

#[test]
fn landing_resets_jump_state() {
    let mut fx = Fixture::new();
    fx.input.jump = true;
    for _ in 0..600 {
        fx.tick();
    }
    assert!(fx.state.grounded);
    assert_eq!(fx.state.jump_distance, 0.0);
    assert!(!fx.rig.layers.jump);
}

// --- slide ---

#[test]
fn slide_triggers_on_the_ground_chord() {
    let mut fx = Fixture::new();
    fx.input.down = true;
    fx.input.jump = true;
    fx.tick();
    assert!(fx.state.sliding);
    assert!(fx.state.slide_locked);
    assert!(fx.rig.layers.slide);
    assert!(!fx.state.jumping, "the chord slides, it does not jump");
}

#[test]
fn slide_refused_in_the_air() {
    let mut fx = Fixture::new();
    fx.state.grounded = false;
    fx.input.down = true;
    fx.input.jump = true;
    fx.tick();
    assert!(!fx.state.sliding);
}

#[test]
fn slide_travel_is_capped() {
    let mut fx = Fixture::new();
    let start = fx.bounds.left;
    fx.input.down = true;
    fx.input.jump = true;
    for _ in 0..120 {
        fx.tick();
    }
    let travelled = fx.bounds.left - start;
    assert!(travelled > 0.0);
    assert!(travelled <= fx.tuning.slide_limit);
    assert!(!fx.state.sliding, "slide ends on its own");
}

#[test]
fn held_chord_cannot_retrigger_slide() {
    let mut fx = Fixture::new();
    fx.input.down = true;
    fx.input.jump = true;
    for _ in 0..120 {
        fx.tick();
    }
    assert!(!fx.state.sliding);
    assert!(fx.state.slide_locked);

    fx.tick();
    assert!(!fx.state.sliding, "still locked while the chord is held");

    fx.input.down = false;
    fx.input.jump = false;
    fx.tick();
    assert!(!fx.state.slide_locked);
}

#[test]
fn walls_end_a_slide() {
    let mut fx = Fixture::new();
    let wall = Bounds::new(fx.bounds.right + 2.0, fx.bounds.top, 100.0, 200.0);
    fx.obstacles.push(wall);
    fx.input.down = true;
    fx.input.jump = true;
    fx.tick();
    assert!(!fx.state.sliding);
    assert_eq!(fx.state.slide_distance, 0.0);
}

#[test]
fn sliding_suppresses_walk_movement() {
    let mut fx = Fixture::new();
    fx.input.down = true;
    fx.input.jump = true;
    fx.tick();
    assert!(fx.state.sliding);

    fx.input.left = true;
    let facing_before = fx.facing;
    fx.tick();
    // Walk neither moves nor turns while the slide runs.
    assert_eq!(fx.facing, facing_before);
    assert!(!fx.state.walking);
}

// --- death and respawn ---

#[test]
fn resize_kills_an_actor_pushed_past_an_edge() {
    let fx = Fixture::new();
    // Top still visible, bottom shoved below the playable floor.
    let sunk = Bounds::new(200.0, 700.0, PLAYER_WIDTH, PLAYER_HEIGHT);
    assert_eq!(resize_outcome(&fx.window, &sunk), ResizeOutcome::Dies);

    let inside = Bounds::new(200.0, 300.0, PLAYER_WIDTH, PLAYER_HEIGHT);
    assert_eq!(resize_outcome(&fx.window, &inside), ResizeOutcome::Falls);
}

#[test]
fn off_screen_respawn_retries_to_the_cap_then_parks() {
    let cap = MovementTuning::default().respawn_retry_cap;
    let mut retries = 0;
    loop {
        match respawn_step(true, retries, cap) {
            RespawnStep::Retry => retries += 1,
            RespawnStep::Park => break,
            RespawnStep::Begin => panic!("an off-screen spawn point must not admit a respawn"),
        }
    }
    assert_eq!(retries + 1, cap, "the park attempt is the cap-th attempt");
}

#[test]
fn on_screen_spawn_point_respawns_regardless_of_retries() {
    let cap = MovementTuning::default().respawn_retry_cap;
    assert_eq!(respawn_step(false, 0, cap), RespawnStep::Begin);
    assert_eq!(respawn_step(false, cap - 1, cap), RespawnStep::Begin);
}

#[test]
fn rearm_only_wakes_a_parked_respawn() {
    let tuning = MovementTuning::default();
    let mut respawn = RespawnTimer::new(tuning.respawn_delay);
    assert!(!respawn.rearm(tuning.respawn_retry_delay), "a live countdown is left alone");

    respawn.parked = true;
    respawn.retries = tuning.respawn_retry_cap;
    assert!(respawn.rearm(tuning.respawn_retry_delay));
    assert!(!respawn.parked);
    assert_eq!(respawn.retries, 0);
}

// --- charge and fire ---

#[test]
fn pressing_attack_fires_an_instant_uncharged_shot() {
    let mut fx = Fixture::new();
    fx.input.attack = true;
    let shot = fx.tick();
    assert_eq!(shot, Some(FireRequest { charge: 0.0 }));
    assert!(fx.state.charging);
    assert!(fx.rig.layers.attack);
}

#[test]
fn release_below_minimum_fires_nothing_and_keeps_charge() {
    let mut fx = Fixture::new();
    fx.input.attack = true;
    fx.tick();
    // A couple more held ticks: some charge, but well under the minimum.
    fx.tick();
    fx.tick();
    let charge = fx.state.charge;
    assert!(charge < fx.combat.min_charge);

    fx.input.attack = false;
    let shot = fx.tick();
    assert_eq!(shot, None);
    assert_eq!(fx.state.charge, charge, "charge is kept, not wasted");
    assert!(!fx.state.charging);
}

#[test]
fn full_hold_fires_a_charged_shot_and_resets() {
    let mut fx = Fixture::new();
    fx.input.attack = true;
    fx.tick();
    while fx.state.charge < fx.combat.max_charge {
        fx.tick();
    }
    fx.input.attack = false;
    let shot = fx.tick();
    let request = shot.expect("charged release must fire");
    assert!(request.charge >= fx.combat.max_charge);
    assert_eq!(fx.state.charge, 0.0);
}

#[test]
fn sliding_blocks_the_shot_until_the_slide_ends() {
    let mut fx = Fixture::new();
    // Accumulate a full charge first.
    fx.input.attack = true;
    fx.tick();
    while fx.state.charge < fx.combat.max_charge {
        fx.tick();
    }
    let banked = fx.state.charge;

    // Release the trigger on the same tick the slide starts.
    fx.input.down = true;
    fx.input.jump = true;
    fx.input.attack = false;
    let shot = fx.tick();
    assert!(fx.state.sliding);
    assert_eq!(shot, None);
    assert!(fx.state.charging, "the release retries once the slide ends");
    assert_eq!(fx.state.charge, banked);

    // The slide runs out; the pending release then fires.
    let mut fired = None;
    for _ in 0..120 {
        if let Some(request) = fx.tick() {
            fired = Some(request);
            break;
        }
    }
    let request = fired.expect("shot must fire after the slide ends");
    assert!(request.charge >= fx.combat.max_charge);
}

#[test]
fn charge_accumulates_only_past_the_interval_gate() {
    let mut fx = Fixture::new();
    fx.input.attack = true;
    fx.tick();
    assert_eq!(fx.state.charge, 0.0, "first held tick is gated");
    fx.tick();
    assert!(fx.state.charge > 0.0);
}
