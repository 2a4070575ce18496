use bevy::prelude::*;

mod animation;
mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod particles;
mod player;
mod stage;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Blue Bomber".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        stage::StagePlugin,
        player::PlayerPlugin,
        animation::AnimationPlugin,
        combat::CombatPlugin,
        particles::ParticlesPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
