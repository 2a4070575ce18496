use super::rig::{
    AnimationRig, ATTACK_TIMEOUT_SECS, IDLE_BLINK_TICKS, IDLE_DELAY_TICKS, KNEE_BEND_FRAME,
    KNEE_BEND_TICKS, SPAWN_TICKS,
};

#[test]
fn fresh_rig_is_blank() {
    let rig = AnimationRig::default();
    assert!(!rig.layers.any());
    assert!(!rig.idle);
    assert_eq!(rig.frames(), Default::default());
}

#[test]
fn idle_iff_no_layers_active() {
    let mut rig = AnimationRig::default();
    rig.tick_idle();
    assert!(rig.idle);

    // Run through every layer: activation kills idle, deactivation of
    // the last layer re-arms it.
    let toggles: [(fn(&mut AnimationRig, bool), &str); 4] = [
        (AnimationRig::set_walk, "walk"),
        (AnimationRig::set_jump, "jump"),
        (AnimationRig::set_slide, "slide"),
        (AnimationRig::set_attack, "attack"),
    ];
    for (toggle, name) in toggles {
        toggle(&mut rig, true);
        rig.tick_idle();
        assert!(!rig.idle, "idle must drop while {name} is active");
        assert_eq!(rig.frames().idle, 0);

        toggle(&mut rig, false);
        // Walk may still be winding down; flush it.
        for _ in 0..KNEE_BEND_TICKS {
            rig.tick_walk_wind_down();
        }
        rig.tick_idle();
        assert!(rig.idle, "idle must re-arm after {name} clears");
    }
}

#[test]
fn layer_combinations_never_leave_idle_on() {
    let mut rig = AnimationRig::default();
    // Pseudo-random activation sequence over all layers.
    let mut seed: u32 = 0x2545_f491;
    for _ in 0..500 {
        seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        let layer = seed % 4;
        let on = seed & 0x10 != 0;
        match layer {
            0 => rig.set_walk(on),
            1 => rig.set_jump(on),
            2 => rig.set_slide(on),
            _ => rig.set_attack(on),
        }
        rig.tick_idle();
        assert_eq!(rig.idle, !rig.layers.any());
    }
}

#[test]
fn spawn_sequence_runs_two_frames_then_completes() {
    let mut rig = AnimationRig::default();
    rig.enable_spawn();
    assert!(rig.layers.spawn);
    assert_eq!(rig.frames().spawn, 1);

    let mut seen = Vec::new();
    let mut completed_at = None;
    for tick in 0..=SPAWN_TICKS {
        let done = rig.tick_spawn();
        seen.push(rig.frames().spawn);
        if done {
            completed_at = Some(tick);
            break;
        }
    }
    assert_eq!(completed_at, Some(SPAWN_TICKS));
    assert!(!rig.layers.spawn);
    assert_eq!(rig.frames().spawn, 0);
    // Both materialize frames were shown on the way through.
    assert!(seen.contains(&1));
    assert!(seen.contains(&2));
}

#[test]
fn enable_spawn_is_idempotent_while_running() {
    let mut rig = AnimationRig::default();
    rig.enable_spawn();
    rig.tick_spawn();
    rig.tick_spawn();
    let frames_before = rig.frames();
    rig.enable_spawn();
    assert_eq!(rig.frames(), frames_before, "restart must be a no-op");
}

#[test]
fn walk_cycle_starts_past_the_reserved_cells() {
    let mut rig = AnimationRig::default();
    rig.set_walk(true);
    // Fresh rig: straight into the stride band (3+).
    assert!(rig.frames().walk >= 3);
}

#[test]
fn stopping_a_stride_plays_the_knee_bend() {
    let mut rig = AnimationRig::default();
    for _ in 0..8 {
        rig.set_walk(true);
    }
    rig.set_walk(false);
    assert!(!rig.layers.walk);

    for _ in 0..KNEE_BEND_TICKS {
        rig.tick_walk_wind_down();
        if rig.frames().walk != 0 {
            assert_eq!(rig.frames().walk, KNEE_BEND_FRAME);
        }
    }
    rig.tick_walk_wind_down();
    assert_eq!(rig.frames().walk, 0);

    // The next walk starts from the knee bend, not the stride.
    rig.set_walk(true);
    assert_eq!(rig.frames().walk, KNEE_BEND_FRAME);
}

#[test]
fn jump_cuts_walk_without_wind_down() {
    let mut rig = AnimationRig::default();
    for _ in 0..8 {
        rig.set_walk(true);
    }
    assert!(rig.frames().walk >= 3);
    rig.set_jump(true);
    assert!(!rig.layers.walk);
    assert_eq!(rig.frames().walk, 0);
    assert_eq!(rig.frames().jump, 1);
}

#[test]
fn attack_frame_depends_on_concurrent_layers() {
    let mut rig = AnimationRig::default();
    rig.set_attack(true);
    assert_eq!(rig.frames().attack, 6, "bare attack uses the idle row");
    rig.set_attack(false);

    rig.set_walk(true);
    rig.set_attack(true);
    assert_eq!(rig.frames().attack, 4, "walking attack");
    rig.set_attack(false);

    rig.set_jump(true);
    rig.set_attack(true);
    assert_eq!(rig.frames().attack, 1, "jumping attack wins over walk");
}

#[test]
fn attack_times_out_on_wall_clock() {
    let mut rig = AnimationRig::default();
    rig.set_attack(true);

    // Fast ticks: plenty of them, little real time.
    for _ in 0..10 {
        rig.tick_attack(0.01);
    }
    assert!(rig.layers.attack, "100ms of real time is not enough");

    rig.tick_attack(ATTACK_TIMEOUT_SECS);
    assert!(!rig.layers.attack);
    assert_eq!(rig.frames().attack, 0);
    assert_eq!(rig.frames().charge, 0, "charge glow clears with the pose");
}

#[test]
fn charge_glow_has_two_bands() {
    let mut rig = AnimationRig::default();
    // Below minimum: nothing shows.
    rig.update_charge(100.0, 250.0, 1000.0);
    assert_eq!(rig.frames().charge, 0);

    // Charged but not maxed: frames 1-3.
    for _ in 0..10 {
        rig.update_charge(600.0, 250.0, 1000.0);
        assert!((1..=3).contains(&rig.frames().charge));
    }

    // Maxed: frames 4-6.
    for _ in 0..10 {
        rig.update_charge(1000.0, 250.0, 1000.0);
        assert!((4..=6).contains(&rig.frames().charge));
    }

    rig.update_charge(0.0, 250.0, 1000.0);
    assert_eq!(rig.frames().charge, 0);
}

#[test]
fn idle_blinks_after_the_delay() {
    let mut rig = AnimationRig::default();
    for _ in 0..IDLE_DELAY_TICKS - 1 {
        rig.tick_idle();
        assert_eq!(rig.frames().idle, 0);
    }
    rig.tick_idle();
    assert_eq!(rig.frames().idle, 1, "blink starts at the delay");

    for _ in 0..IDLE_BLINK_TICKS {
        rig.tick_idle();
    }
    assert_eq!(rig.frames().idle, 0, "blink ends and the cycle restarts");
}
