//! Data prepared for the bar chart view: one bar per state, sorted by votes.

use bevy::color::Srgba;

use crate::color::margin_color;
use crate::dataset::StateResult;

#[derive(Debug, Clone, PartialEq)]
pub struct BarDatum {
    pub label: String,
    pub value: u32,
    pub color: Srgba,
    pub tooltip: BarTooltip,
}

/// Two-line hover text: the value, then winner and margin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarTooltip {
    pub value_line: String,
    pub winner_line: String,
}

impl BarTooltip {
    pub fn for_result(result: &StateResult) -> Self {
        Self {
            value_line: format!("{} electoral votes", result.electoral_votes),
            winner_line: format!("{} +{:.1}%", result.winner.label(), result.margin),
        }
    }
}

impl std::fmt::Display for BarTooltip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.value_line, self.winner_line)
    }
}

/// Bars sorted by descending electoral votes (ties keep input order),
/// colored with the margin encoding.
pub fn bar_chart_data(records: &[StateResult]) -> Vec<BarDatum> {
    let mut sorted: Vec<&StateResult> = records.iter().collect();
    sorted.sort_by(|a, b| b.electoral_votes.cmp(&a.electoral_votes));
    sorted
        .into_iter()
        .map(|r| BarDatum {
            label: r.state.clone(),
            value: r.electoral_votes,
            color: margin_color(r),
            tooltip: BarTooltip::for_result(r),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::ElectionData;
    use crate::treemap::layout;

    #[test]
    fn one_bar_per_state_sorted_descending() {
        let data = ElectionData::builtin();
        let bars = bar_chart_data(data.records());
        assert_eq!(bars.len(), data.len());
        assert_eq!(bars[0].label, "California");
        assert_eq!(bars[0].value, 55);
        for pair in bars.windows(2) {
            assert!(pair[0].value >= pair[1].value);
        }
    }

    #[test]
    fn bar_order_matches_treemap_order() {
        let data = ElectionData::builtin();
        let bars = bar_chart_data(data.records());
        let cells = layout(data.records(), 800.0);
        let bar_names: Vec<&str> = bars.iter().map(|b| b.label.as_str()).collect();
        let cell_names: Vec<&str> = cells.iter().map(|c| c.result.state.as_str()).collect();
        assert_eq!(bar_names, cell_names);
    }

    #[test]
    fn colors_follow_margin_encoding() {
        let data = ElectionData::builtin();
        let bars = bar_chart_data(data.records());
        for bar in &bars {
            let record = data.find(&bar.label).unwrap();
            assert_eq!(bar.color, margin_color(record));
        }
    }

    #[test]
    fn tooltip_shows_winner_and_one_decimal_margin() {
        let data = ElectionData::builtin();
        let tip = BarTooltip::for_result(data.find("Texas").unwrap());
        assert_eq!(tip.value_line, "38 electoral votes");
        assert_eq!(tip.winner_line, "Republican +9.0%");
        assert_eq!(tip.to_string(), "38 electoral votes\nRepublican +9.0%");
    }

    #[test]
    fn empty_records_give_no_bars() {
        assert!(bar_chart_data(&[]).is_empty());
    }
}
