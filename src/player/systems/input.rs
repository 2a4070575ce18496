use bevy::prelude::*;

use super::super::resources::ControlInput;

/// Refresh the logical button snapshot from the raw devices. Arrows and
/// WASD move, space or Z jumps, shift, X, or the left mouse button
/// attacks.
pub fn sample_input(
    keys: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    mut input: ResMut<ControlInput>,
) {
    input.up = keys.pressed(KeyCode::ArrowUp) || keys.pressed(KeyCode::KeyW);
    input.down = keys.pressed(KeyCode::ArrowDown) || keys.pressed(KeyCode::KeyS);
    input.left = keys.pressed(KeyCode::ArrowLeft) || keys.pressed(KeyCode::KeyA);
    input.right = keys.pressed(KeyCode::ArrowRight) || keys.pressed(KeyCode::KeyD);
    input.jump = keys.pressed(KeyCode::Space) || keys.pressed(KeyCode::KeyZ);
    input.attack = keys.pressed(KeyCode::ShiftLeft)
        || keys.pressed(KeyCode::ShiftRight)
        || keys.pressed(KeyCode::KeyX)
        || mouse.pressed(MouseButton::Left);
}
