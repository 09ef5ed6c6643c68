use bevy_egui::{egui, EguiContexts};

pub(crate) const TEXT_DARK: egui::Color32 = egui::Color32::from_rgb(31, 41, 55);
pub(crate) const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(75, 85, 99);

pub(crate) const RED_SOFT: egui::Color32 = egui::Color32::from_rgb(254, 226, 226);
pub(crate) const RED_STRONG: egui::Color32 = egui::Color32::from_rgb(185, 28, 28);
pub(crate) const BLUE_SOFT: egui::Color32 = egui::Color32::from_rgb(219, 234, 254);
pub(crate) const BLUE_STRONG: egui::Color32 = egui::Color32::from_rgb(29, 78, 216);
pub(crate) const GRAY_SOFT: egui::Color32 = egui::Color32::from_rgb(243, 244, 246);
pub(crate) const GREEN_STRONG: egui::Color32 = egui::Color32::from_rgb(21, 128, 61);
pub(crate) const PURPLE_STRONG: egui::Color32 = egui::Color32::from_rgb(126, 34, 206);
pub(crate) const AMBER_SOFT: egui::Color32 = egui::Color32::from_rgb(254, 243, 199);
pub(crate) const AMBER_STRONG: egui::Color32 = egui::Color32::from_rgb(146, 64, 14);

/// Light report-style theme: white page, gray widgets, blue selection.
pub fn apply_report_theme(mut contexts: EguiContexts) {
    let ctx = contexts.ctx_mut();
    let mut style = (*ctx.style()).clone();
    style.visuals = egui::Visuals::light();

    let panel = egui::Color32::WHITE;
    let inactive = egui::Color32::from_rgb(229, 231, 235);
    let hover = egui::Color32::from_rgb(209, 213, 219);
    let active = egui::Color32::from_rgb(37, 99, 235);

    style.visuals.widgets.noninteractive.bg_fill = panel;
    style.visuals.widgets.inactive.bg_fill = inactive;
    style.visuals.widgets.hovered.bg_fill = hover;
    style.visuals.widgets.active.bg_fill = active;
    style.visuals.widgets.inactive.weak_bg_fill = inactive;
    style.visuals.widgets.hovered.weak_bg_fill = hover;
    style.visuals.widgets.active.weak_bg_fill = active;

    style.visuals.window_fill = panel;
    style.visuals.panel_fill = panel;
    style.visuals.extreme_bg_color = egui::Color32::from_rgb(249, 250, 251);
    style.visuals.faint_bg_color = GRAY_SOFT;

    // Selected toggle buttons read as filled blue with white text.
    style.visuals.selection.bg_fill = active;
    style.visuals.selection.stroke = egui::Stroke::new(1.0, egui::Color32::WHITE);

    let widget_rounding = egui::CornerRadius::same(4);
    style.visuals.widgets.noninteractive.corner_radius = widget_rounding;
    style.visuals.widgets.inactive.corner_radius = widget_rounding;
    style.visuals.widgets.hovered.corner_radius = widget_rounding;
    style.visuals.widgets.active.corner_radius = widget_rounding;

    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}
