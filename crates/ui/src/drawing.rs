//! Shared drawing helpers: color conversion, swatches, and summary cards.

use bevy::color::Srgba;
use bevy_egui::egui;

/// Convert a model color to egui, rounding each channel.
pub(crate) fn srgba_to_egui(color: Srgba) -> egui::Color32 {
    let to_u8 = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
    egui::Color32::from_rgba_unmultiplied(
        to_u8(color.red),
        to_u8(color.green),
        to_u8(color.blue),
        to_u8(color.alpha),
    )
}

pub(crate) fn legend_item(ui: &mut egui::Ui, color: egui::Color32, text: &str) {
    ui.horizontal(|ui| {
        let (rect, _) = ui.allocate_exact_size(egui::vec2(14.0, 14.0), egui::Sense::hover());
        ui.painter().rect_filled(rect, 3.0, color);
        ui.label(text);
    });
}

/// Row of equally sized swatches, e.g. an intensity ramp.
pub(crate) fn swatch_ramp(ui: &mut egui::Ui, swatches: &[(egui::Color32, String)]) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 2.0;
        for (color, hint) in swatches {
            let (rect, response) =
                ui.allocate_exact_size(egui::vec2(24.0, 12.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 2.0, *color);
            response.on_hover_text(hint);
        }
    });
}

/// Big-number card used by the totals summary.
pub(crate) fn stat_card(
    ui: &mut egui::Ui,
    value: &str,
    caption: &str,
    fill: egui::Color32,
    accent: egui::Color32,
) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_min_width(180.0);
            ui.vertical_centered(|ui| {
                ui.label(egui::RichText::new(value).size(24.0).strong().color(accent));
                ui.label(egui::RichText::new(caption).small().color(accent));
            });
        });
}

/// Bordered section with a colored heading.
pub(crate) fn section(
    ui: &mut egui::Ui,
    title: &str,
    accent: egui::Color32,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    egui::Frame::group(ui.style())
        .stroke(egui::Stroke::new(1.0, accent.gamma_multiply(0.5)))
        .inner_margin(egui::Margin::same(10))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(title).heading().color(accent));
            ui.add_space(4.0);
            add_contents(ui);
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_colors_convert_exactly() {
        let c = srgba_to_egui(Srgba::rgba_u8(220, 38, 38, 255));
        assert_eq!(c, egui::Color32::from_rgb(220, 38, 38));
    }

    #[test]
    fn alpha_is_rounded_not_truncated() {
        let c = srgba_to_egui(Srgba::new(0.0, 0.0, 0.0, 0.3));
        // 0.3 * 255 = 76.5
        assert_eq!(c.a(), 77);
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        let c = srgba_to_egui(Srgba::new(1.5, -0.2, 0.0, 1.0));
        assert_eq!(c, egui::Color32::from_rgb(255, 0, 0));
    }
}
