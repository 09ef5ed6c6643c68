//! "Flaws of the original map" overlay.
//!
//! Contrasts what a geographic map emphasises (land area, flat party colors)
//! with what actually matters (electoral votes, margins), using states from
//! the loaded dataset.

use bevy_egui::egui;

use electoral::color::margin_color;
use electoral::dataset::{ElectionData, StateResult};

use crate::drawing::{section, srgba_to_egui};
use crate::formatting::{fmt_area, fmt_margin, fmt_votes};
use crate::theme::{AMBER_SOFT, AMBER_STRONG, RED_STRONG, TEXT_MUTED};

/// The two states in a misleading comparison.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Contrast<'a> {
    pub first: &'a StateResult,
    pub second: &'a StateResult,
}

/// Two states with equal electoral votes and the largest land-area ratio.
pub(crate) fn area_dominance(data: &ElectionData) -> Option<Contrast<'_>> {
    let records = data.records();
    let mut best: Option<(f64, Contrast<'_>)> = None;
    for (i, a) in records.iter().enumerate() {
        for b in &records[i + 1..] {
            if a.electoral_votes != b.electoral_votes || a.area_sq_mi == 0 || b.area_sq_mi == 0 {
                continue;
            }
            let (big, small) = if a.area_sq_mi >= b.area_sq_mi { (a, b) } else { (b, a) };
            let ratio = big.area_sq_mi as f64 / small.area_sq_mi as f64;
            if best.as_ref().map_or(true, |(r, _)| ratio > *r) {
                best = Some((ratio, Contrast { first: big, second: small }));
            }
        }
    }
    best.map(|(_, c)| c)
}

/// Closest and widest-margin states won by the same party.
pub(crate) fn margin_loss(data: &ElectionData) -> Option<Contrast<'_>> {
    let records = data.records();
    let mut best: Option<(f64, Contrast<'_>)> = None;
    for a in records {
        for b in records {
            if a.winner != b.winner || a.margin.abs() >= b.margin.abs() {
                continue;
            }
            let spread = b.margin.abs() - a.margin.abs();
            if best.as_ref().map_or(true, |(s, _)| spread > *s) {
                best = Some((spread, Contrast { first: a, second: b }));
            }
        }
    }
    best.map(|(_, c)| c)
}

fn chip(ui: &mut egui::Ui, text: String, fill: egui::Color32) {
    egui::Frame::new()
        .fill(fill)
        .inner_margin(egui::Margin::symmetric(6, 2))
        .show(ui, |ui| {
            ui.small(text);
        });
}

pub(crate) fn draw_flaws_overlay(ui: &mut egui::Ui, data: &ElectionData) {
    section(ui, "Demonstrating the Flaws of the Original Map", RED_STRONG, |ui| {
        ui.columns(2, |cols| {
            cols[0].strong("Flaw: Misleading Visual Dominance");
            match area_dominance(data) {
                Some(Contrast { first, second }) => {
                    cols[0].label(format!(
                        "{} ({}) has only {} electoral votes, yet visually dominates {} ({}), \
                         which also has {}.",
                        first.state,
                        fmt_area(first.area_sq_mi),
                        first.electoral_votes,
                        second.state,
                        fmt_area(second.area_sq_mi),
                        fmt_votes(second.electoral_votes),
                    ));
                    cols[0].horizontal_wrapped(|ui| {
                        for r in [first, second] {
                            let text = format!(
                                "{}: {} = {}",
                                r.state,
                                fmt_area(r.area_sq_mi),
                                fmt_votes(r.electoral_votes)
                            );
                            chip(ui, text, srgba_to_egui(margin_color(r)).gamma_multiply(0.6));
                        }
                    });
                }
                None => {
                    cols[0].label("Land area says nothing about electoral weight.");
                }
            }

            cols[1].strong("Flaw: Loss of Information");
            match margin_loss(data) {
                Some(Contrast { first, second }) => {
                    cols[1].label(format!(
                        "Margins of victory are lost. {} ({}) looks the same as {} ({}).",
                        first.state,
                        fmt_margin(first.margin),
                        second.state,
                        fmt_margin(second.margin),
                    ));
                    cols[1].vertical(|ui| {
                        for r in [first, second] {
                            let text = format!(
                                "{}: {} ({})",
                                r.state,
                                fmt_margin(r.margin),
                                fmt_votes(r.electoral_votes)
                            );
                            chip(ui, text, srgba_to_egui(margin_color(r)));
                        }
                    });
                }
                None => {
                    cols[1].label("Flat party colors hide how close each race was.");
                }
            }
        });

        ui.add_space(6.0);
        egui::Frame::new()
            .fill(AMBER_SOFT)
            .corner_radius(egui::CornerRadius::same(4))
            .inner_margin(egui::Margin::same(8))
            .show(ui, |ui| {
                ui.label(
                    egui::RichText::new(
                        "Result: the traditional map can make it look like a Republican \
                         landslide when the election was in fact very close in key states.",
                    )
                    .color(AMBER_STRONG),
                );
            });
        ui.small(egui::RichText::new("Press [F] to toggle").color(TEXT_MUTED));
    });
}
