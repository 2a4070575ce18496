//! Layered animation state for the actor.
//!
//! Layers (spawn, walk, jump, slide, attack, charge) toggle
//! independently and combine; each combination maps to a fixed frame
//! index per layer. `idle` is derived: it is armed only while every
//! layer is inactive, and any activation cancels it.
//!
//! Frame pacing constants are content-defined offsets into the sprite
//! tables, so they live here rather than in the tuning file.

use bevy::prelude::*;

pub const SPAWN_TICKS: u32 = 20;
pub const SPAWN_FRAME_PAUSE: u32 = 10;

pub const IDLE_DELAY_TICKS: u32 = 150;
pub const IDLE_BLINK_TICKS: u32 = 10;

pub const WALK_CYCLE_TICKS: i32 = 30;
pub const WALK_FRAME_PAUSE: i32 = 10;
pub const KNEE_BEND_TICKS: i32 = 5;
pub const KNEE_BEND_FRAME: u8 = 2;

/// Wall-clock attack pose duration, independent of the tick rate.
pub const ATTACK_TIMEOUT_SECS: f32 = 0.25;

pub const CHARGE_CYCLE_TICKS: u32 = 40;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveLayers {
    pub spawn: bool,
    pub walk: bool,
    pub jump: bool,
    pub slide: bool,
    pub attack: bool,
}

impl ActiveLayers {
    pub fn any(&self) -> bool {
        self.spawn || self.walk || self.jump || self.slide || self.attack
    }
}

/// Per-layer frame indices published for presentation. This is the
/// whole rendering contract: a painter maps each non-zero index to a
/// sprite cell, zero means the layer is not drawn.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStyle {
    pub spawn: u8,
    pub idle: u8,
    pub walk: u8,
    pub jump: u8,
    pub slide: u8,
    pub attack: u8,
    pub charge: u8,
}

#[derive(Component, Debug, Default)]
pub struct AnimationRig {
    pub layers: ActiveLayers,
    pub idle: bool,
    frames: FrameStyle,
    idle_ticks: u32,
    spawn_ticks: u32,
    /// Negative while the knee-bend frame plays, then cycles 0..30.
    walk_ticks: i32,
    /// Knee-bend wind-down is playing out after a stride stopped.
    winding_down: bool,
    charge_ticks: u32,
    attack_elapsed: f32,
}

impl AnimationRig {
    pub fn frames(&self) -> FrameStyle {
        self.frames
    }

    /// Begin the materialize sequence. No-op if already running.
    pub fn enable_spawn(&mut self) {
        if self.layers.spawn {
            return;
        }
        self.layers.spawn = true;
        self.spawn_ticks = 0;
        self.frames = FrameStyle::default();
        self.frames.spawn = 1;
    }

    /// Advance the materialize sequence one tick. Returns true on the
    /// tick the sequence completes.
    pub fn tick_spawn(&mut self) -> bool {
        if !self.layers.spawn {
            return false;
        }
        self.frames.spawn = (self.spawn_ticks / SPAWN_FRAME_PAUSE) as u8 + 1;
        self.spawn_ticks += 1;
        if self.spawn_ticks > SPAWN_TICKS {
            self.layers.spawn = false;
            self.spawn_ticks = 0;
            self.frames.spawn = 0;
            return true;
        }
        false
    }

    /// Toggle the walk layer. While jump or slide hold the pose, the
    /// walk frame stays blank and its cycle is reset so the next walk
    /// starts from the knee bend. Disabling mid-stride queues the
    /// knee-bend wind-down instead of cutting straight to blank.
    pub fn set_walk(&mut self, active: bool) {
        self.layers.walk = active;

        if self.layers.jump || self.layers.slide {
            self.frames.walk = 0;
            self.walk_ticks = -KNEE_BEND_TICKS;
            self.winding_down = false;
            return;
        }

        if !active {
            if self.walk_ticks > 0 {
                self.walk_ticks = -KNEE_BEND_TICKS;
                self.winding_down = true;
            } else if self.walk_ticks == 0 {
                self.frames.walk = 0;
                self.walk_ticks = -KNEE_BEND_TICKS;
                self.winding_down = false;
            }
            return;
        }

        self.winding_down = false;
        if self.walk_ticks < 0 {
            self.frames.walk = KNEE_BEND_FRAME;
            self.walk_ticks += 1;
        } else {
            // Stride frames sit past the idle and knee-bend cells.
            self.frames.walk = (self.walk_ticks / WALK_FRAME_PAUSE) as u8 + 3;
            self.walk_ticks = (self.walk_ticks + 1) % WALK_CYCLE_TICKS;
        }
    }

    /// Play out the knee bend after walking stopped. One frame of bend
    /// per tick, then blank.
    pub fn tick_walk_wind_down(&mut self) {
        if !self.winding_down {
            return;
        }
        if self.layers.walk || self.layers.jump || self.layers.slide {
            self.winding_down = false;
            return;
        }
        self.frames.walk = KNEE_BEND_FRAME;
        self.walk_ticks += 1;
        if self.walk_ticks >= 0 {
            self.frames.walk = 0;
            self.walk_ticks = -KNEE_BEND_TICKS;
            self.winding_down = false;
        }
    }

    /// Toggle the jump pose. Entering it cuts walk off with no
    /// wind-down.
    pub fn set_jump(&mut self, active: bool) {
        self.layers.jump = active;
        if active {
            self.frames.jump = 1;
            self.layers.walk = false;
            self.frames.walk = 0;
            self.walk_ticks = -KNEE_BEND_TICKS;
            self.winding_down = false;
        } else {
            self.frames.jump = 0;
        }
    }

    /// Toggle the slide pose, cutting walk off the same way jump does.
    pub fn set_slide(&mut self, active: bool) {
        self.layers.slide = active;
        if active {
            self.frames.slide = 1;
            self.layers.walk = false;
            self.frames.walk = 0;
            self.walk_ticks = -KNEE_BEND_TICKS;
            self.winding_down = false;
        } else {
            self.frames.slide = 0;
        }
    }

    /// Trigger or clear the attack pose. The frame depends on what else
    /// is active when the shot fires; clearing also resets the charge
    /// glow.
    pub fn set_attack(&mut self, active: bool) {
        self.layers.attack = active;
        if active {
            self.frames.attack = if self.layers.jump {
                1
            } else if self.layers.walk {
                4
            } else {
                6
            };
            self.attack_elapsed = 0.0;
        } else {
            self.frames.attack = 0;
            self.charge_ticks = 0;
            self.frames.charge = 0;
        }
    }

    /// Advance the wall-clock attack timer. The pose auto-clears after
    /// a fixed real-time duration regardless of tick rate.
    pub fn tick_attack(&mut self, real_dt: f32) {
        if !self.layers.attack {
            return;
        }
        self.attack_elapsed += real_dt;
        if self.attack_elapsed >= ATTACK_TIMEOUT_SECS {
            self.set_attack(false);
        }
    }

    /// Advance the charge glow. Silent below the minimum charge; the
    /// frame band switches once the charge maxes out.
    pub fn update_charge(&mut self, charge: f32, min_charge: f32, max_charge: f32) {
        if charge == 0.0 {
            self.charge_ticks = 0;
            self.frames.charge = 0;
            return;
        }
        if charge < min_charge {
            return;
        }

        self.charge_ticks = (self.charge_ticks + 1) % CHARGE_CYCLE_TICKS;
        let band = if charge < max_charge { 1 } else { 4 };
        self.frames.charge = (self.charge_ticks % 3) as u8 + band;
    }

    /// Derive idle from the layers and advance the blink cycle: a long
    /// still delay, a short blink, repeat.
    pub fn tick_idle(&mut self) {
        if self.layers.any() {
            if self.idle {
                self.idle = false;
                self.frames.idle = 0;
            }
            return;
        }

        if !self.idle {
            self.idle = true;
            self.idle_ticks = 0;
            self.frames.idle = 0;
        }

        self.idle_ticks += 1;
        if self.idle_ticks < IDLE_DELAY_TICKS {
            return;
        }
        if self.idle_ticks == IDLE_DELAY_TICKS {
            self.frames.idle = 1;
        }
        if self.idle_ticks >= IDLE_DELAY_TICKS + IDLE_BLINK_TICKS {
            self.idle_ticks = 0;
            self.frames.idle = 0;
        }
    }
}
