//! The answer set: the complete user-editable state of the questionnaire.
//!
//! Every field is optional on the wire; `#[serde(default)]` makes an absent
//! field an empty string/vec/map, which the engine treats as "not answered".
//! The engine never owns this state — the host passes it into each call and
//! persists it afterwards.

use crate::engine::experiment::ExperimentTemplate;
use crate::engine::matrix::MatrixEntry;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnswerSet {
    // Values: highlight/low moments and the manually chosen value-words
    pub satisfying_moments: Vec<String>,
    pub low_moments: Vec<String>,
    /// Manual value-word picks, kept in selection order; these lead the
    /// combined value list ahead of anything derived from text
    pub selected_values: Vec<String>,
    /// Forced-choice tradeoff answers (pair label -> chosen side / reason)
    pub tradeoff_choices: BTreeMap<String, String>,
    pub bottom_lines: String,
    pub no_do_list: String,
    /// Current-life match score (1-5) per selected value-word
    pub alignment_scores: BTreeMap<String, u8>,

    // Talents
    pub fast_learning: Vec<String>,
    pub flow_moments: Vec<String>,
    pub help_requests: String,
    pub optimize_tendencies: String,
    pub plus_energy: String,
    pub minus_energy: String,
    pub hard_to_master: Vec<String>,
    pub transferable_assets: Vec<String>,

    // Vision
    pub ideal_day: String,
    pub target_group: String,
    pub pain_points: String,
    /// Importance score (1-5) per return/constraint dimension
    pub return_scores: BTreeMap<String, u8>,
    pub not_want: String,
    pub one_year_left: String,
    pub fears: String,

    // Decision
    /// Candidate direction sentences; overwritten by each analysis run
    pub direction_variants: Vec<String>,
    pub chosen_direction_index: usize,
    /// One-line elevator pitches per candidate; when present these are what
    /// the decision matrix scores instead of the raw variants
    pub elevator_pitches: Vec<String>,
    /// Last computed ranking; seeds the dimension scores of the next recompute
    pub matrix_scores: Vec<MatrixEntry>,

    // Experiments (user-edited copies of generated templates)
    pub experiments: Vec<ExperimentTemplate>,
}

impl AnswerSet {
    /// Concatenation of every value-relevant free-text answer, used as the
    /// scoring input for the value lexicon. Empty fields are skipped.
    pub fn value_text_pool(&self) -> String {
        let mut parts: Vec<&str> = Vec::new();
        for field in self
            .satisfying_moments
            .iter()
            .chain(self.low_moments.iter())
            .chain(self.fast_learning.iter())
            .chain(self.flow_moments.iter())
            .chain(std::iter::once(&self.help_requests))
            .chain(std::iter::once(&self.optimize_tendencies))
            .chain(self.transferable_assets.iter())
            .chain(std::iter::once(&self.ideal_day))
            .chain(std::iter::once(&self.target_group))
            .chain(std::iter::once(&self.pain_points))
        {
            if !field.trim().is_empty() {
                parts.push(field);
            }
        }
        parts.join(" \n ")
    }

    /// Concatenation of the talent/asset answers only; feeds the keyword
    /// extractor rather than the value scorer.
    pub fn talent_text_pool(&self) -> String {
        let parts: Vec<&str> = self
            .fast_learning
            .iter()
            .chain(self.flow_moments.iter())
            .chain(self.transferable_assets.iter())
            .filter(|s| !s.trim().is_empty())
            .map(String::as_str)
            .collect();
        parts.join(" , ")
    }
}
