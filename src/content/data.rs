//! Serde-facing shapes for the RON content files under `assets/data/`.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::combat::CombatTuning;
use crate::particles::ParticleTuning;
use crate::player::MovementTuning;
use crate::stage::Bounds;

/// Wrapper for versioned data files so old content fails loudly instead
/// of deserializing into nonsense.
#[derive(Debug, Deserialize)]
pub struct DataFile<T> {
    pub schema_version: u32,
    pub data: T,
}

pub const TUNING_SCHEMA_VERSION: u32 = 1;
pub const STAGE_SCHEMA_VERSION: u32 = 1;

/// All numeric tuning in one file, split by domain.
#[derive(Debug, Default, Deserialize)]
pub struct TuningFile {
    pub movement: MovementTuning,
    pub combat: CombatTuning,
    pub particles: ParticleTuning,
}

/// Horizontal placement rule: offset measured from the named viewport
/// edge, so layouts keep their shape across resizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorX {
    #[default]
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnchorY {
    #[default]
    Top,
    Bottom,
}

/// An authored obstacle: a fixed-size rect whose position re-resolves
/// against the current viewport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObstacleDef {
    pub name: String,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub anchor_x: AnchorX,
    #[serde(default)]
    pub anchor_y: AnchorY,
}

impl ObstacleDef {
    pub fn resolve(&self, view_width: f32, view_height: f32) -> Bounds {
        let left = match self.anchor_x {
            AnchorX::Left => self.x,
            AnchorX::Right => view_width - self.x - self.width,
        };
        let top = match self.anchor_y {
            AnchorY::Top => self.y,
            AnchorY::Bottom => view_height - self.y - self.height,
        };
        Bounds::new(left, top, self.width, self.height)
    }
}

/// Where the actor materializes. Resolution needs the actor's own size
/// so right/bottom anchors measure from its far edge.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpawnDef {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub anchor_x: AnchorX,
    #[serde(default)]
    pub anchor_y: AnchorY,
}

impl SpawnDef {
    pub fn resolve(&self, view_width: f32, view_height: f32, actor_size: Vec2) -> (f32, f32) {
        let x = match self.anchor_x {
            AnchorX::Left => self.x,
            AnchorX::Right => view_width - self.x - actor_size.x,
        };
        let top = match self.anchor_y {
            AnchorY::Top => self.y,
            AnchorY::Bottom => view_height - self.y - actor_size.y,
        };
        (x, top)
    }
}

/// Stage layout: the spawn point plus every solid element.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct StageDef {
    pub spawn: SpawnDef,
    pub obstacles: Vec<ObstacleDef>,
}

impl Default for StageDef {
    fn default() -> Self {
        Self {
            spawn: SpawnDef {
                x: 120.0,
                y: 40.0,
                anchor_x: AnchorX::Left,
                anchor_y: AnchorY::Bottom,
            },
            obstacles: Vec::new(),
        }
    }
}
