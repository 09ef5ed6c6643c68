//! Treemap painter: draws the cached [`TreemapLayout`] on the fixed
//! 800x400 surface, scaled down when the panel is narrower.

use bevy_egui::egui;

use electoral::color::margin_color;
use electoral::config::{CONTAINER_HEIGHT, CONTAINER_WIDTH};
use electoral::treemap::{TreemapCell, TreemapLayout};

use crate::drawing::srgba_to_egui;
use crate::formatting::{fmt_margin, fmt_population, fmt_votes};
use crate::theme::TEXT_DARK;

/// Cell under a point given in layout units, if any.
pub(crate) fn cell_at(layout: &TreemapLayout, x: f64, y: f64) -> Option<&TreemapCell> {
    layout
        .cells
        .iter()
        .find(|c| x >= c.x && x <= c.right() && y >= c.y && y <= c.bottom())
}

/// Surface scale so the fixed-width container fits `available_width`. Never enlarges.
pub(crate) fn surface_scale(available_width: f32) -> f32 {
    (available_width / CONTAINER_WIDTH as f32).clamp(0.1, 1.0)
}

/// Screen position of a cell's center, for a surface whose origin is `origin`.
pub(crate) fn label_anchor(origin: egui::Pos2, cell: &TreemapCell, scale: f32) -> egui::Pos2 {
    let (cx, cy) = cell.center();
    origin + egui::vec2(cx as f32 * scale, cy as f32 * scale)
}

pub(crate) fn draw_treemap(ui: &mut egui::Ui, layout: &TreemapLayout) {
    if layout.cells.is_empty() {
        ui.label("No data to display.");
        return;
    }

    let scale = surface_scale(ui.available_width());
    let size = egui::vec2(
        CONTAINER_WIDTH as f32 * scale,
        CONTAINER_HEIGHT as f32 * scale,
    );
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    painter.rect_filled(rect, 0.0, egui::Color32::WHITE);
    painter.rect_stroke(
        rect,
        0.0,
        egui::Stroke::new(1.0, egui::Color32::from_gray(209)),
        egui::StrokeKind::Inside,
    );

    let to_screen = |x: f64, y: f64| rect.min + egui::vec2(x as f32 * scale, y as f32 * scale);

    let hovered = response.hover_pos().and_then(|pos| {
        let local = (pos - rect.min) / scale;
        cell_at(layout, local.x as f64, local.y as f64)
    });

    for cell in &layout.cells {
        let min = to_screen(cell.x, cell.y);
        let max = to_screen(cell.right(), cell.bottom());
        let cell_rect = egui::Rect::from_min_max(min, max);

        let mut fill = srgba_to_egui(margin_color(&cell.result));
        if hovered.is_some_and(|h| std::ptr::eq(h, cell)) {
            fill = fill.gamma_multiply(0.8);
        }
        painter.rect_filled(cell_rect, 0.0, fill);
        painter.rect_stroke(
            cell_rect,
            0.0,
            egui::Stroke::new(1.0, egui::Color32::WHITE),
            egui::StrokeKind::Inside,
        );

        draw_cell_labels(&painter, cell, label_anchor(rect.min, cell, scale), scale);
    }

    if let Some(cell) = hovered {
        response.on_hover_ui_at_pointer(|ui| {
            let r = &cell.result;
            ui.strong(&r.state);
            ui.label(format!("{} electoral votes", r.electoral_votes));
            ui.label(format!("{} +{}", r.winner.label(), fmt_margin(r.margin)));
            ui.small(format!("Population {}", fmt_population(r.population)));
        });
    }
}

/// Name, votes, and margin lines, sized by cell width.
fn draw_cell_labels(painter: &egui::Painter, cell: &TreemapCell, center: egui::Pos2, scale: f32) {
    let sizes = cell.label_sizes();
    let r = &cell.result;
    let lines = [
        (-8.0, r.state.clone(), sizes.name, true),
        (6.0, fmt_votes(r.electoral_votes), sizes.votes, false),
        (18.0, fmt_margin(r.margin), sizes.margin, false),
    ];
    for (dy, text, size, bold) in lines {
        let font = egui::FontId::proportional(size * scale);
        let pos = center + egui::vec2(0.0, dy * scale);
        let color = if bold {
            TEXT_DARK
        } else {
            TEXT_DARK.gamma_multiply(0.85)
        };
        painter.text(pos, egui::Align2::CENTER_CENTER, text, font, color);
    }
}

#[cfg(test)]
mod tests {
    use electoral::dataset::ElectionData;

    use super::*;

    fn builtin_layout() -> TreemapLayout {
        TreemapLayout::compute(ElectionData::builtin().records(), CONTAINER_WIDTH)
    }

    #[test]
    fn hit_test_finds_the_largest_cell() {
        let layout = builtin_layout();
        let (cx, cy) = layout.cells[0].center();
        let hit = cell_at(&layout, cx, cy).expect("center of first cell");
        assert_eq!(hit.result.state, "California");
    }

    #[test]
    fn hit_test_misses_gaps_and_margins() {
        let layout = builtin_layout();
        assert!(cell_at(&layout, 2.0, 2.0).is_none());
        let first = &layout.cells[0];
        // Inside the column gap between the first two cells.
        assert!(cell_at(&layout, first.right() + 2.5, first.y + 1.0).is_none());
    }

    #[test]
    fn labels_anchor_at_scaled_cell_center() {
        let layout = builtin_layout();
        let cell = &layout.cells[0];
        let origin = egui::pos2(100.0, 50.0);
        let anchor = label_anchor(origin, cell, 0.5);
        let expected = egui::Rect::from_min_max(
            origin + egui::vec2(cell.x as f32 * 0.5, cell.y as f32 * 0.5),
            origin + egui::vec2(cell.right() as f32 * 0.5, cell.bottom() as f32 * 0.5),
        )
        .center();
        assert!((anchor - expected).length() < 1e-3);
    }

    #[test]
    fn hit_test_on_empty_layout() {
        assert!(cell_at(&TreemapLayout::default(), 100.0, 20.0).is_none());
    }

    #[test]
    fn surface_never_upscales() {
        assert_eq!(surface_scale(1600.0), 1.0);
        assert_eq!(surface_scale(800.0), 1.0);
        assert_eq!(surface_scale(400.0), 0.5);
    }
}
