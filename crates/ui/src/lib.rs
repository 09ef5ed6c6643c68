use bevy::prelude::*;
use bevy_egui::EguiPlugin;

mod bar_view;
pub mod controls;
pub mod dashboard;
mod drawing;
mod flaws_overlay;
mod formatting;
mod legend;
mod summary;
pub mod theme;
mod treemap_view;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Startup, theme::apply_report_theme)
            .add_systems(
                Update,
                (controls::view_keybinds, dashboard::dashboard_ui)
                    .chain()
                    .after(electoral::view_state::refresh_treemap_layout),
            );
    }
}
