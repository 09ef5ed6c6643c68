//! View toggle buttons and their keyboard shortcuts.
//!
//! T = treemap, B = bar chart, F = show/hide the flaws overlay.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use electoral::view_state::{OverlayVisible, ViewMode};

use crate::theme::{RED_SOFT, RED_STRONG};

pub const KEY_TREEMAP: KeyCode = KeyCode::KeyT;
pub const KEY_BAR: KeyCode = KeyCode::KeyB;
pub const KEY_OVERLAY: KeyCode = KeyCode::KeyF;

/// Label for the overlay button given its current state.
pub(crate) fn overlay_button_label(visible: bool) -> &'static str {
    if visible {
        "Hide Flaws of the Original"
    } else {
        "Show Flaws of the Original"
    }
}

/// Two view buttons and the overlay toggle, centered in one row.
pub(crate) fn view_controls(
    ui: &mut egui::Ui,
    mode: &mut ResMut<ViewMode>,
    overlay: &mut ResMut<OverlayVisible>,
) {
    ui.horizontal(|ui| {
        for candidate in ViewMode::ALL {
            if ui
                .selectable_label(**mode == candidate, candidate.label())
                .clicked()
            {
                mode.set_if_neq(candidate);
            }
        }

        ui.add_space(12.0);

        let (fill, text) = if overlay.0 {
            (RED_STRONG, egui::Color32::WHITE)
        } else {
            (RED_SOFT, RED_STRONG)
        };
        let button = egui::Button::new(
            egui::RichText::new(overlay_button_label(overlay.0)).color(text),
        )
        .fill(fill);
        if ui.add(button).clicked() {
            overlay.toggle();
            debug!("Flaws overlay visible: {}", overlay.0);
        }
    });
}

/// Keyboard shortcuts for the view toggles.
/// Keys are ignored when egui has keyboard focus.
pub fn view_keybinds(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mode: ResMut<ViewMode>,
    mut overlay: ResMut<OverlayVisible>,
    mut contexts: EguiContexts,
) {
    if contexts.ctx_mut().wants_keyboard_input() {
        return;
    }

    if keyboard.just_pressed(KEY_TREEMAP) {
        mode.set_if_neq(ViewMode::Treemap);
    }
    if keyboard.just_pressed(KEY_BAR) {
        mode.set_if_neq(ViewMode::Bar);
    }
    if keyboard.just_pressed(KEY_OVERLAY) {
        overlay.toggle();
        debug!("Flaws overlay visible: {}", overlay.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_label_reflects_state() {
        assert!(overlay_button_label(false).starts_with("Show"));
        assert!(overlay_button_label(true).starts_with("Hide"));
    }

    #[test]
    fn shortcuts_are_distinct() {
        assert_ne!(KEY_TREEMAP, KEY_BAR);
        assert_ne!(KEY_BAR, KEY_OVERLAY);
        assert_ne!(KEY_TREEMAP, KEY_OVERLAY);
    }
}
