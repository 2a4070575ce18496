use bevy::prelude::*;
use bevy::window::{PrimaryWindow, WindowResized};

use crate::content::StageDef;
use crate::player::{MovementTuning, PLAYER_HEIGHT, PLAYER_WIDTH};

use super::bounds::Bounds;
use super::components::{Obstacle, ObstacleAnchor};
use super::resources::{SpawnAnchor, WindowBounds};

const OBSTACLE_COLOR: Color = Color::srgb(0.25, 0.27, 0.32);

pub fn setup_stage(
    mut commands: Commands,
    stage: Res<StageDef>,
    tuning: Res<MovementTuning>,
    windows: Query<&Window, With<PrimaryWindow>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let (width, height) = (window.resolution.width(), window.resolution.height());
    commands.insert_resource(WindowBounds::from_size(
        width,
        height,
        tuning.collision_margin,
    ));

    let (x, top) = stage
        .spawn
        .resolve(width, height, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT));
    commands.insert_resource(SpawnAnchor { x, top });

    for def in &stage.obstacles {
        let rect = def.resolve(width, height);
        commands.spawn((
            Obstacle,
            ObstacleAnchor(def.clone()),
            rect,
            Sprite {
                color: OBSTACLE_COLOR,
                custom_size: Some(Vec2::new(rect.width(), rect.height())),
                ..default()
            },
            Transform::from_xyz(0.0, 0.0, 0.0),
        ));
    }
    info!(
        "Stage laid out: {} obstacles in a {}x{} viewport",
        stage.obstacles.len(),
        width,
        height
    );
}

/// Re-derive everything placement-related from the new viewport. Runs
/// first in the tick so actor collision sees the settled layout.
pub fn apply_window_resize(
    mut resized: MessageReader<WindowResized>,
    tuning: Res<MovementTuning>,
    mut window: ResMut<WindowBounds>,
    mut anchor: ResMut<SpawnAnchor>,
    stage: Res<StageDef>,
    mut obstacles: Query<(&ObstacleAnchor, &mut Bounds), With<Obstacle>>,
) {
    let Some(last) = resized.read().last() else {
        return;
    };
    *window = WindowBounds::from_size(last.width, last.height, tuning.collision_margin);
    let (x, top) = stage
        .spawn
        .resolve(last.width, last.height, Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT));
    *anchor = SpawnAnchor { x, top };
    for (placement, mut rect) in &mut obstacles {
        *rect = placement.0.resolve(last.width, last.height);
    }
    debug!("Stage re-anchored to {}x{}", last.width, last.height);
}

/// Map screen-space rects to Bevy world transforms. The z coordinate is
/// owned by whoever spawned the entity and is left alone.
pub fn sync_transforms(window: Res<WindowBounds>, mut query: Query<(&Bounds, &mut Transform)>) {
    for (rect, mut transform) in &mut query {
        let center = rect.center();
        transform.translation.x = center.x - window.width * 0.5;
        transform.translation.y = window.height * 0.5 - center.y;
    }
}
