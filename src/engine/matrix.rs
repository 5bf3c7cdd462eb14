//! Weighted decision matrix over candidate directions.
//!
//! Each candidate is scored 1-5 on four dimensions (value fit, skill use,
//! personal energy, opportunity/resources); the weighted total makes the
//! candidates comparable. Weights come from config and must sum to 1.0, so
//! totals stay in [1.0, 5.0] for valid scores.

use crate::config::MatrixWeights;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Fully resolved per-dimension scores. An unscored dimension is a neutral 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DimensionScores {
    pub value: u8,
    pub skill: u8,
    pub energy: u8,
    pub opp: u8,
}

impl Default for DimensionScores {
    fn default() -> Self {
        Self {
            value: 3,
            skill: 3,
            energy: 3,
            opp: 3,
        }
    }
}

/// Scores as the host holds them: any dimension may still be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PartialScores {
    pub value: Option<u8>,
    pub skill: Option<u8>,
    pub energy: Option<u8>,
    pub opp: Option<u8>,
}

impl PartialScores {
    pub fn resolve(&self) -> DimensionScores {
        let neutral = DimensionScores::default();
        DimensionScores {
            value: self.value.unwrap_or(neutral.value),
            skill: self.skill.unwrap_or(neutral.skill),
            energy: self.energy.unwrap_or(neutral.energy),
            opp: self.opp.unwrap_or(neutral.opp),
        }
    }
}

impl From<DimensionScores> for PartialScores {
    fn from(scores: DimensionScores) -> Self {
        Self {
            value: Some(scores.value),
            skill: Some(scores.skill),
            energy: Some(scores.energy),
            opp: Some(scores.opp),
        }
    }
}

/// One ranked candidate
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MatrixEntry {
    pub direction: String,
    pub scores: DimensionScores,
    pub total: f64,
}

/// Rank `directions` by weighted total, highest first. Prior scores are
/// looked up by candidate index; missing entries or missing dimensions
/// default to 3. The sort is stable, so equal totals keep input order.
/// Recomputing with unchanged input yields an identical ranking.
pub fn compute(
    directions: &[String],
    prior_scores: &BTreeMap<usize, PartialScores>,
    weights: &MatrixWeights,
) -> Vec<MatrixEntry> {
    let mut entries: Vec<MatrixEntry> = directions
        .iter()
        .enumerate()
        .map(|(index, direction)| {
            let scores = prior_scores
                .get(&index)
                .map(PartialScores::resolve)
                .unwrap_or_default();
            MatrixEntry {
                direction: direction.clone(),
                scores,
                total: weighted_total(scores, weights),
            }
        })
        .collect();
    entries.sort_by(|a, b| b.total.total_cmp(&a.total));
    entries
}

fn weighted_total(scores: DimensionScores, weights: &MatrixWeights) -> f64 {
    f64::from(scores.value) * weights.value
        + f64::from(scores.skill) * weights.skill
        + f64::from(scores.energy) * weights.energy
        + f64::from(scores.opp) * weights.opp
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directions(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    fn uniform(score: u8) -> PartialScores {
        PartialScores::from(DimensionScores {
            value: score,
            skill: score,
            energy: score,
            opp: score,
        })
    }

    #[test]
    fn extremes_rank_as_expected() {
        let dirs = directions(&["D1", "D2"]);
        let prior = BTreeMap::from([(0, uniform(5)), (1, uniform(1))]);
        let ranked = compute(&dirs, &prior, &MatrixWeights::default());
        assert_eq!(ranked[0].direction, "D1");
        assert_eq!(ranked[0].total, 5.0);
        assert_eq!(ranked[1].direction, "D2");
        assert_eq!(ranked[1].total, 1.0);
    }

    #[test]
    fn missing_scores_default_to_neutral() {
        let dirs = directions(&["only"]);
        let ranked = compute(&dirs, &BTreeMap::new(), &MatrixWeights::default());
        assert_eq!(ranked[0].scores, DimensionScores::default());
        assert_eq!(ranked[0].total, 3.0);
    }

    #[test]
    fn partial_scores_fill_per_dimension() {
        let prior = BTreeMap::from([(
            0,
            PartialScores {
                value: Some(5),
                ..Default::default()
            },
        )]);
        let ranked = compute(&directions(&["d"]), &prior, &MatrixWeights::default());
        assert_eq!(ranked[0].scores.value, 5);
        assert_eq!(ranked[0].scores.skill, 3);
    }

    #[test]
    fn ties_keep_input_order() {
        let dirs = directions(&["first", "second", "third"]);
        let ranked = compute(&dirs, &BTreeMap::new(), &MatrixWeights::default());
        let order: Vec<&str> = ranked.iter().map(|e| e.direction.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
    }

    #[test]
    fn empty_directions_yield_empty_ranking() {
        assert!(compute(&[], &BTreeMap::new(), &MatrixWeights::default()).is_empty());
    }

    #[test]
    fn recompute_is_idempotent() {
        let dirs = directions(&["a", "b"]);
        let prior = BTreeMap::from([(0, uniform(2)), (1, uniform(4))]);
        let first = compute(&dirs, &prior, &MatrixWeights::default());
        let second = compute(&dirs, &prior, &MatrixWeights::default());
        assert_eq!(first, second);
    }

    #[test]
    fn totals_stay_within_score_range() {
        let weights = MatrixWeights::default();
        for score in 1..=5u8 {
            let prior = BTreeMap::from([(0, uniform(score))]);
            let ranked = compute(&directions(&["d"]), &prior, &weights);
            assert!(ranked[0].total >= 1.0 && ranked[0].total <= 5.0);
        }
    }
}
