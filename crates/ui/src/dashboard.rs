//! Main page: title, controls, totals, optional overlay, the active chart,
//! then the legend panels.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use electoral::dataset::ElectionData;
use electoral::totals::ElectoralTotals;
use electoral::treemap::TreemapLayout;
use electoral::view_state::{OverlayVisible, ViewMode};

use crate::bar_view::draw_bar_chart;
use crate::controls::view_controls;
use crate::flaws_overlay::draw_flaws_overlay;
use crate::legend::draw_legend_panels;
use crate::summary::results_summary;
use crate::treemap_view::draw_treemap;

pub const PAGE_TITLE: &str = "Visualization Redesign: 2016 Presidential Election";
const MAX_PAGE_WIDTH: f32 = 1100.0;

pub fn dashboard_ui(
    mut contexts: EguiContexts,
    data: Res<ElectionData>,
    totals: Res<ElectoralTotals>,
    layout: Res<TreemapLayout>,
    mut mode: ResMut<ViewMode>,
    mut overlay: ResMut<OverlayVisible>,
) {
    egui::CentralPanel::default().show(contexts.ctx_mut(), |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.set_max_width(MAX_PAGE_WIDTH);

                ui.add_space(8.0);
                ui.heading(egui::RichText::new(PAGE_TITLE).size(26.0).strong());
                ui.add_space(12.0);

                view_controls(ui, &mut mode, &mut overlay);
                ui.add_space(12.0);

                results_summary(ui, &totals);
                ui.add_space(12.0);

                if overlay.0 {
                    draw_flaws_overlay(ui, &data);
                    ui.add_space(12.0);
                }

                egui::Frame::new()
                    .fill(egui::Color32::from_rgb(249, 250, 251))
                    .corner_radius(egui::CornerRadius::same(8))
                    .inner_margin(egui::Margin::same(16))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new(mode.heading()).size(18.0).strong());
                        ui.add_space(8.0);
                        match *mode {
                            ViewMode::Treemap => draw_treemap(ui, &layout),
                            ViewMode::Bar => draw_bar_chart(ui, data.records()),
                        }
                    });
                ui.add_space(12.0);

                draw_legend_panels(ui);
                ui.add_space(8.0);
                ui.small("Shortcuts: [T] treemap · [B] bar chart · [F] flaws overlay");
            });
        });
    });
}
