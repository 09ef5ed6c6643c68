//! Bar chart view, delegated to `egui_plot`.

use bevy_egui::egui;
use egui_plot::{Bar, BarChart, GridMark, Plot};

use electoral::bar_chart::{bar_chart_data, BarDatum};
use electoral::dataset::StateResult;

use crate::drawing::srgba_to_egui;

const BAR_WIDTH: f64 = 0.7;
const PLOT_HEIGHT: f32 = 400.0;

/// Label for an x-axis grid mark: the state at that integer position, if any.
pub(crate) fn axis_label(labels: &[String], value: f64) -> String {
    if value < 0.0 || (value - value.round()).abs() > 1e-6 {
        return String::new();
    }
    labels
        .get(value.round() as usize)
        .cloned()
        .unwrap_or_default()
}

fn to_bars(data: &[BarDatum]) -> Vec<Bar> {
    data.iter()
        .enumerate()
        .map(|(i, d)| {
            Bar::new(i as f64, d.value as f64)
                .name(&d.label)
                .fill(srgba_to_egui(d.color))
                .width(BAR_WIDTH)
        })
        .collect()
}

pub(crate) fn draw_bar_chart(ui: &mut egui::Ui, records: &[StateResult]) {
    let data = bar_chart_data(records);
    if data.is_empty() {
        ui.label("No data to display.");
        return;
    }

    let labels: Vec<String> = data.iter().map(|d| d.label.clone()).collect();
    let tooltips: Vec<String> = data
        .iter()
        .map(|d| format!("{}\n{}", d.label, d.tooltip))
        .collect();

    let chart = BarChart::new(to_bars(&data)).element_formatter(Box::new(
        move |bar: &Bar, _chart: &BarChart| {
            tooltips
                .get(bar.argument.round() as usize)
                .cloned()
                .unwrap_or_else(|| bar.name.clone())
        },
    ));

    Plot::new("electoral_votes_bar_chart")
        .height(PLOT_HEIGHT)
        .allow_scroll(false)
        .allow_drag(false)
        .allow_zoom(false)
        .include_y(0.0)
        .show_grid(egui::Vec2b::new(false, true))
        .y_axis_label("Electoral votes")
        .x_axis_formatter(move |mark: GridMark, _range| axis_label(&labels, mark.value))
        .show(ui, |plot_ui| plot_ui.bar_chart(chart));
}
