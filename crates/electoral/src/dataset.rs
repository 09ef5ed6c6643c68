//! Election records and the built-in 2016 dataset.
//!
//! [`ElectionData`] is inserted once at startup and never mutated. Views that
//! need a different order (treemap, bar chart) sort their own copies.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dataset_error::DatasetError;

/// The winning party of a state. Exactly two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Party {
    Republican,
    Democrat,
}

impl Party {
    pub fn label(self) -> &'static str {
        match self {
            Party::Republican => "Republican",
            Party::Democrat => "Democrat",
        }
    }

    /// Parse the winner field used by external data. Exact match only.
    pub fn from_winner(winner: &str) -> Option<Party> {
        match winner {
            "Republican" => Some(Party::Republican),
            "Democrat" => Some(Party::Democrat),
            _ => None,
        }
    }

    pub const ALL: [Party; 2] = [Party::Republican, Party::Democrat];
}

/// One state's result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateResult {
    pub state: String,
    /// Always > 0.
    pub electoral_votes: u32,
    pub winner: Party,
    /// Margin of victory in percentage points.
    pub margin: f64,
    pub population: u64,
    pub area_sq_mi: u32,
}

impl StateResult {
    fn new(
        state: &str,
        electoral_votes: u32,
        winner: Party,
        margin: f64,
        population: u64,
        area_sq_mi: u32,
    ) -> Self {
        Self {
            state: state.to_string(),
            electoral_votes,
            winner,
            margin,
            population,
            area_sq_mi,
        }
    }
}

/// External record shape, using the camelCase field names of the JSON data file.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStateResult {
    state: String,
    electoral_votes: i64,
    winner: String,
    margin: f64,
    #[serde(default)]
    population: u64,
    #[serde(default)]
    area: u32,
}

impl TryFrom<RawStateResult> for StateResult {
    type Error = DatasetError;

    fn try_from(raw: RawStateResult) -> Result<Self, Self::Error> {
        let electoral_votes = match u32::try_from(raw.electoral_votes) {
            Ok(v) if v > 0 => v,
            _ => {
                return Err(DatasetError::InvalidWeight {
                    state: raw.state,
                    votes: raw.electoral_votes,
                })
            }
        };
        let Some(winner) = Party::from_winner(&raw.winner) else {
            return Err(DatasetError::UnknownCategory {
                state: raw.state,
                winner: raw.winner,
            });
        };
        Ok(StateResult {
            state: raw.state,
            electoral_votes,
            winner,
            margin: raw.margin,
            population: raw.population,
            area_sq_mi: raw.area,
        })
    }
}

/// The immutable record set every view reads from.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ElectionData {
    records: Vec<StateResult>,
}

impl Default for ElectionData {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ElectionData {
    pub fn new(records: Vec<StateResult>) -> Self {
        Self { records }
    }

    /// The 2016 presidential election, 18 selected states, in source order.
    pub fn builtin() -> Self {
        use Party::{Democrat as D, Republican as R};
        Self::new(vec![
            StateResult::new("California", 55, D, 30.1, 39_538_223, 163_696),
            StateResult::new("Texas", 38, R, 9.0, 29_145_505, 268_596),
            StateResult::new("Florida", 29, R, 1.2, 21_538_187, 65_758),
            StateResult::new("New York", 29, D, 22.5, 20_201_249, 54_555),
            StateResult::new("Pennsylvania", 20, R, 0.7, 13_002_700, 46_054),
            StateResult::new("Illinois", 20, D, 17.1, 12_812_508, 57_914),
            StateResult::new("Ohio", 18, R, 8.1, 11_799_448, 44_826),
            StateResult::new("Georgia", 16, R, 5.1, 10_711_908, 59_425),
            StateResult::new("Michigan", 16, R, 0.3, 10_037_261, 96_714),
            StateResult::new("North Carolina", 15, R, 3.6, 10_439_388, 53_819),
            StateResult::new("Arizona", 11, R, 3.5, 7_151_502, 113_990),
            StateResult::new("Wisconsin", 10, R, 0.8, 5_893_718, 65_496),
            StateResult::new("Colorado", 9, D, 4.9, 5_773_714, 104_094),
            StateResult::new("Minnesota", 10, D, 1.5, 5_737_915, 86_936),
            StateResult::new("Nevada", 6, D, 2.4, 3_104_614, 110_572),
            StateResult::new("Wyoming", 3, R, 46.3, 576_851, 97_813),
            StateResult::new("Vermont", 3, D, 26.4, 643_077, 9_616),
            StateResult::new("Delaware", 3, D, 11.4, 989_948, 2_489),
        ])
    }

    /// Load and validate a JSON array of state records.
    ///
    /// Field names are camelCase: `state`, `electoralVotes`,
    /// `winner`, `margin`, and optionally `population` and `area`.
    pub fn from_json(json: &str) -> Result<Self, DatasetError> {
        let raw: Vec<RawStateResult> = serde_json::from_str(json)?;
        let records = raw
            .into_iter()
            .map(StateResult::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(records))
    }

    pub fn records(&self) -> &[StateResult] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn find(&self, state: &str) -> Option<&StateResult> {
        self.records.iter().find(|r| r.state == state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_18_states_with_positive_votes() {
        let data = ElectionData::builtin();
        assert_eq!(data.len(), 18);
        for r in data.records() {
            assert!(r.electoral_votes > 0, "{} has no votes", r.state);
            assert!(r.margin.is_finite());
            assert!((-100.0..=100.0).contains(&r.margin));
        }
    }

    #[test]
    fn builtin_keeps_source_order() {
        let data = ElectionData::builtin();
        let names: Vec<&str> = data.records().iter().map(|r| r.state.as_str()).collect();
        assert_eq!(names[0], "California");
        assert_eq!(names[12], "Colorado");
        assert_eq!(names[13], "Minnesota");
        assert_eq!(names[17], "Delaware");
    }

    #[test]
    fn find_looks_up_by_name() {
        let data = ElectionData::builtin();
        let wy = data.find("Wyoming").expect("Wyoming present");
        assert_eq!(wy.electoral_votes, 3);
        assert_eq!(wy.winner, Party::Republican);
        assert!(data.find("Atlantis").is_none());
    }

    #[test]
    fn from_json_accepts_valid_records() {
        let json = r#"[
            {"state": "Ohio", "electoralVotes": 18, "winner": "Republican", "margin": 8.1,
             "population": 11799448, "area": 44826},
            {"state": "Vermont", "electoralVotes": 3, "winner": "Democrat", "margin": 26.4}
        ]"#;
        let data = ElectionData::from_json(json).unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.records()[0].area_sq_mi, 44_826);
        assert_eq!(data.records()[1].winner, Party::Democrat);
        assert_eq!(data.records()[1].population, 0);
    }

    #[test]
    fn from_json_rejects_zero_votes() {
        let json = r#"[{"state": "Nowhere", "electoralVotes": 0, "winner": "Democrat", "margin": 1.0}]"#;
        let err = ElectionData::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidWeight { ref state, votes: 0 } if state == "Nowhere"
        ));
    }

    #[test]
    fn from_json_rejects_negative_votes() {
        let json = r#"[{"state": "Nowhere", "electoralVotes": -4, "winner": "Democrat", "margin": 1.0}]"#;
        let err = ElectionData::from_json(json).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidWeight { votes: -4, .. }));
    }

    #[test]
    fn from_json_rejects_unknown_winner() {
        let json = r#"[{"state": "Maine", "electoralVotes": 4, "winner": "Green", "margin": 2.0}]"#;
        let err = ElectionData::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::UnknownCategory { ref winner, .. } if winner == "Green"
        ));
    }

    #[test]
    fn from_json_reports_malformed_input() {
        let err = ElectionData::from_json("{ not an array").unwrap_err();
        assert!(matches!(err, DatasetError::Parse(_)));
    }

    #[test]
    fn from_json_empty_array_is_valid() {
        let data = ElectionData::from_json("[]").unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn party_from_winner_is_exact() {
        assert_eq!(Party::from_winner("Republican"), Some(Party::Republican));
        assert_eq!(Party::from_winner("Democrat"), Some(Party::Democrat));
        assert_eq!(Party::from_winner("democrat"), None);
    }
}
