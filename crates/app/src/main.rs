use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::WinitSettings;

use electoral::ElectoralPlugin;
use ui::dashboard::PAGE_TITLE;
use ui::UiPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: PAGE_TITLE.to_string(),
            resolution: (1200.0, 900.0).into(),
            present_mode: PresentMode::AutoVsync,
            // Render into the page's <canvas> on the web build.
            fit_canvas_to_parent: true,
            ..default()
        }),
        ..default()
    }))
    // Static page: only redraw on input.
    .insert_resource(WinitSettings::desktop_app())
    .insert_resource(ClearColor(Color::WHITE))
    .add_plugins((ElectoralPlugin, UiPlugin))
    .add_systems(Startup, spawn_camera);

    app.run();
}

fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
