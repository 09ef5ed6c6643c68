//! Electoral vote totals, overall and per winning party.

use bevy::prelude::*;

use crate::dataset::{Party, StateResult};

/// Sum of electoral votes, partitioned by winner.
///
/// `republican + democrat == overall` always holds since every record has
/// exactly one of the two winners. Sums are `u64` so any number of valid
/// `u32` weights adds up without overflow.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ElectoralTotals {
    pub overall: u64,
    pub republican: u64,
    pub democrat: u64,
}

impl ElectoralTotals {
    pub fn from_records(records: &[StateResult]) -> Self {
        records.iter().fold(Self::default(), |mut totals, r| {
            let votes = u64::from(r.electoral_votes);
            totals.overall += votes;
            match r.winner {
                Party::Republican => totals.republican += votes,
                Party::Democrat => totals.democrat += votes,
            }
            totals
        })
    }

    pub fn for_party(&self, party: Party) -> u64 {
        match party {
            Party::Republican => self.republican,
            Party::Democrat => self.democrat,
        }
    }

    /// Fraction of all votes won by `party`, 0.0 for an empty dataset.
    pub fn share(&self, party: Party) -> f64 {
        if self.overall == 0 {
            return 0.0;
        }
        self.for_party(party) as f64 / self.overall as f64
    }
}

#[cfg(test)]
mod tests {
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::dataset::ElectionData;

    #[test]
    fn builtin_totals() {
        let totals = ElectoralTotals::from_records(ElectionData::builtin().records());
        assert_eq!(totals.overall, 311);
        assert_eq!(totals.republican, 176);
        assert_eq!(totals.democrat, 135);
    }

    #[test]
    fn empty_records_sum_to_zero() {
        let totals = ElectoralTotals::from_records(&[]);
        assert_eq!(totals, ElectoralTotals::default());
        assert_eq!(totals.share(Party::Democrat), 0.0);
    }

    #[test]
    fn party_totals_partition_overall_for_random_sets() {
        let mut rng = ChaCha8Rng::seed_from_u64(0xE1EC7);
        for _ in 0..200 {
            let n = rng.gen_range(0..40);
            let records: Vec<StateResult> = (0..n)
                .map(|i| StateResult {
                    state: format!("S{i}"),
                    electoral_votes: rng.gen_range(1..=60),
                    winner: if rng.gen_bool(0.5) {
                        Party::Republican
                    } else {
                        Party::Democrat
                    },
                    margin: rng.gen_range(-100.0..100.0),
                    population: 0,
                    area_sq_mi: 0,
                })
                .collect();
            let totals = ElectoralTotals::from_records(&records);
            let sum: u64 = records.iter().map(|r| u64::from(r.electoral_votes)).sum();
            assert_eq!(totals.overall, sum);
            assert_eq!(totals.republican + totals.democrat, totals.overall);
        }
    }

    #[test]
    fn large_loaded_weights_do_not_overflow() {
        let json = r#"[
            {"state": "Big A", "electoralVotes": 3000000000, "winner": "Democrat", "margin": 5.0},
            {"state": "Big B", "electoralVotes": 3000000000, "winner": "Democrat", "margin": 5.0}
        ]"#;
        let data = ElectionData::from_json(json).unwrap();
        let totals = ElectoralTotals::from_records(data.records());
        assert_eq!(totals.overall, 6_000_000_000);
        assert_eq!(totals.democrat, 6_000_000_000);
        assert_eq!(totals.republican, 0);
        assert_eq!(totals.share(Party::Democrat), 1.0);
    }

    #[test]
    fn u32_max_weights_sum_exactly() {
        let record = |state: &str, winner| StateResult {
            state: state.to_string(),
            electoral_votes: u32::MAX,
            winner,
            margin: 1.0,
            population: 0,
            area_sq_mi: 0,
        };
        let records = vec![
            record("A", Party::Republican),
            record("B", Party::Republican),
            record("C", Party::Democrat),
        ];
        let totals = ElectoralTotals::from_records(&records);
        assert_eq!(totals.overall, 3 * u64::from(u32::MAX));
        assert_eq!(totals.republican, 2 * u64::from(u32::MAX));
        assert_eq!(totals.republican + totals.democrat, totals.overall);
    }

    #[test]
    fn shares_sum_to_one() {
        let totals = ElectoralTotals::from_records(ElectionData::builtin().records());
        let total_share: f64 = Party::ALL.iter().map(|&p| totals.share(p)).sum();
        assert!((total_share - 1.0).abs() < 1e-12);
        assert_eq!(totals.for_party(Party::Republican), 176);
    }
}
