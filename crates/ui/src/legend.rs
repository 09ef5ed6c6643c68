//! Legend, "improvements" and "guidelines" panels below the chart.

use bevy_egui::egui;

use electoral::color::{party_margin_color, to_css};
use electoral::config::MARGIN_SATURATION;
use electoral::dataset::Party;

use crate::drawing::{legend_item, section, srgba_to_egui, swatch_ramp};
use crate::theme::{BLUE_STRONG, GREEN_STRONG, PURPLE_STRONG, TEXT_MUTED};

const RAMP_STEPS: usize = 4;

/// Margins sampled evenly from 0 up to the saturation point.
pub(crate) fn ramp_margins() -> [f64; RAMP_STEPS] {
    let mut margins = [0.0; RAMP_STEPS];
    for (i, m) in margins.iter_mut().enumerate() {
        *m = MARGIN_SATURATION * i as f64 / (RAMP_STEPS - 1) as f64;
    }
    margins
}

/// Ramp swatches with a hover hint naming the margin and its CSS color.
pub(crate) fn intensity_ramp(party: Party) -> Vec<(egui::Color32, String)> {
    ramp_margins()
        .iter()
        .map(|&m| {
            let color = srgba_to_egui(party_margin_color(party, m));
            (color, format!("{m:.0}% margin: {}", to_css(party, m)))
        })
        .collect()
}

const IMPROVEMENTS: [(&str, &str); 5] = [
    ("Proportionality", "size = actual electoral weight"),
    ("Visible margin", "color intensity shows competitiveness"),
    ("Complete information", "electoral vote counts are visible"),
    ("Clear context", "national totals are highlighted"),
    ("Multiple perspectives", "treemap + bar chart"),
];

const REPRESENTATION_GUIDELINES: [&str; 3] = [
    "Visual proportionality preserved",
    "Geography does not distort perception",
    "Population context considered",
];

const ENCODING_GUIDELINES: [&str; 3] = [
    "Gradients show nuance",
    "Numeric scales are visible",
    "Multiple dimensions represented",
];

pub(crate) fn draw_legend_panels(ui: &mut egui::Ui) {
    ui.columns(2, |cols| {
        section(&mut cols[0], "Improvements", GREEN_STRONG, |ui| {
            for (title, detail) in IMPROVEMENTS {
                ui.horizontal_wrapped(|ui| {
                    ui.label(egui::RichText::new(format!("{title}:")).strong().color(GREEN_STRONG));
                    ui.label(detail);
                });
            }
        });

        section(&mut cols[1], "Legend", BLUE_STRONG, |ui| {
            for party in Party::ALL {
                let swatch = srgba_to_egui(party_margin_color(party, MARGIN_SATURATION / 2.0));
                let hue = match party {
                    Party::Republican => "red",
                    Party::Democrat => "blue",
                };
                legend_item(ui, swatch, &format!("{} ({hue})", party.label()));
            }
            ui.add_space(6.0);
            ui.small(egui::RichText::new("Color intensity:").color(TEXT_MUTED));
            swatch_ramp(ui, &intensity_ramp(Party::Republican));
            ui.small(
                egui::RichText::new(format!("Margin: 0% → {MARGIN_SATURATION:.0}%+"))
                    .color(TEXT_MUTED),
            );
        });
    });

    ui.add_space(8.0);

    section(ui, "Guidelines Applied", PURPLE_STRONG, |ui| {
        ui.columns(2, |cols| {
            for (col, (title, items)) in cols.iter_mut().zip([
                ("Representation", REPRESENTATION_GUIDELINES),
                ("Encoding", ENCODING_GUIDELINES),
            ]) {
                col.strong(title);
                for item in items {
                    col.label(format!("• {item}"));
                }
            }
        });
    });
}
