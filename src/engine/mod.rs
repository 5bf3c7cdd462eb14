//! Analysis engine: value scoring, keyword extraction, direction synthesis,
//! the experiment card, and the decision matrix.
//! Deterministic, synchronous heuristics over in-memory text; no I/O.

pub mod direction;
pub mod experiment;
pub mod keywords;
pub mod matrix;
pub mod values;

use crate::answers::AnswerSet;
use crate::config::Config;
use crate::error::Result;
use experiment::ExperimentTemplate;
use matrix::{MatrixEntry, PartialScores};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use values::ValueScore;

/// Everything one analysis run produces. Recomputed wholesale per run; the
/// only state folded back in is the manual-selection prefix of
/// `combined_values` and, as a side effect, the answer set's direction list.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisResult {
    pub value_scores: Vec<ValueScore>,
    pub combined_values: Vec<String>,
    pub skill_keywords: Vec<String>,
    pub variants: Vec<String>,
    pub experiment_template: ExperimentTemplate,
}

/// The engine holds validated, immutable configuration and nothing else, so
/// every call is a pure function of its arguments (plus that config).
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn with_defaults() -> Self {
        Self {
            config: Config::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run the full analysis over the current answers.
    ///
    /// Side effect (the only one in the engine): the three synthesized
    /// variants replace `answers.direction_variants`; candidates from a
    /// previous run are overwritten, never merged.
    pub fn run_analysis(&self, answers: &mut AnswerSet) -> AnalysisResult {
        let value_pool = answers.value_text_pool();
        let (value_scores, combined_values) =
            values::score(&value_pool, &self.config.lexicon, &answers.selected_values);

        let talent_pool = answers.talent_text_pool();
        let skill_keywords = keywords::extract(&talent_pool, &self.config.extraction);

        let variants = direction::synthesize(
            &skill_keywords,
            &combined_values,
            &answers.target_group,
            &answers.pain_points,
            &self.config.templates,
        );
        let first_variant = variants.first().map(String::as_str).unwrap_or_default();
        let experiment_template = experiment::build(first_variant, &self.config.experiment);

        debug!(
            matched_values = combined_values.len(),
            skill_keywords = skill_keywords.len(),
            "analysis run complete"
        );

        answers.direction_variants = variants.clone();

        AnalysisResult {
            value_scores,
            combined_values,
            skill_keywords,
            variants,
            experiment_template,
        }
    }

    /// Rank candidate directions with this engine's weights. Pure; see
    /// [`matrix::compute`].
    pub fn compute_matrix(
        &self,
        directions: &[String],
        prior_scores: &BTreeMap<usize, PartialScores>,
    ) -> Vec<MatrixEntry> {
        matrix::compute(directions, prior_scores, &self.config.weights)
    }

    /// Recompute the decision matrix from the answer set and write the
    /// ranking back into it. Elevator pitches take precedence over the raw
    /// direction variants as the scored candidates; the previous ranking's
    /// scores seed the recompute by index.
    pub fn rescore_matrix(&self, answers: &mut AnswerSet) -> Vec<MatrixEntry> {
        let directions: Vec<String> = if answers.elevator_pitches.is_empty() {
            answers.direction_variants.clone()
        } else {
            answers.elevator_pitches.clone()
        };
        let prior_scores: BTreeMap<usize, PartialScores> = answers
            .matrix_scores
            .iter()
            .enumerate()
            .map(|(index, entry)| (index, PartialScores::from(entry.scores)))
            .collect();
        let ranked = self.compute_matrix(&directions, &prior_scores);
        answers.matrix_scores = ranked.clone();
        ranked
    }
}
