//! Results summary: Republican, total, and Democrat electoral votes.

use bevy_egui::egui;

use electoral::dataset::Party;
use electoral::totals::ElectoralTotals;

use crate::drawing::stat_card;
use crate::formatting::fmt_share;
use crate::theme::{BLUE_SOFT, BLUE_STRONG, GRAY_SOFT, RED_SOFT, RED_STRONG, TEXT_MUTED};

pub(crate) fn party_caption(party: Party) -> &'static str {
    match party {
        Party::Republican => "Republican Electoral Votes",
        Party::Democrat => "Democrat Electoral Votes",
    }
}

pub(crate) fn results_summary(ui: &mut egui::Ui, totals: &ElectoralTotals) {
    ui.horizontal(|ui| {
        stat_card(
            ui,
            &totals.republican.to_string(),
            party_caption(Party::Republican),
            RED_SOFT,
            RED_STRONG,
        );
        stat_card(
            ui,
            &totals.overall.to_string(),
            "Total Electoral Votes",
            GRAY_SOFT,
            TEXT_MUTED,
        );
        stat_card(
            ui,
            &totals.democrat.to_string(),
            party_caption(Party::Democrat),
            BLUE_SOFT,
            BLUE_STRONG,
        );
    });
    ui.small(format!(
        "Republican {} · Democrat {} of the states shown",
        fmt_share(totals.share(Party::Republican)),
        fmt_share(totals.share(Party::Democrat)),
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captions_name_the_party() {
        for party in Party::ALL {
            assert!(party_caption(party).starts_with(party.label()));
        }
    }
}
