//! Default two-week validation-experiment card, seeded from the first
//! synthesized direction. Regenerated on every analysis run; the host keeps
//! user-edited copies in the answer set.

use crate::config::ExperimentConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExperimentMetrics {
    pub target_feedback: u32,
    pub target_reads: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ExperimentTemplate {
    pub title: String,
    pub goal: String,
    /// Ordered plan steps
    pub steps: Vec<String>,
    pub metrics: ExperimentMetrics,
}

impl Default for ExperimentTemplate {
    fn default() -> Self {
        Self {
            title: String::new(),
            goal: String::new(),
            steps: Vec::new(),
            metrics: ExperimentMetrics {
                target_feedback: ExperimentConfig::default().target_feedback,
                target_reads: ExperimentConfig::default().target_reads,
            },
        }
    }
}

/// Build the default experiment card for `first_variant`. Deterministic; the
/// title quotes the variant truncated to the configured char budget.
pub fn build(first_variant: &str, cfg: &ExperimentConfig) -> ExperimentTemplate {
    let quoted: String = first_variant.chars().take(cfg.title_budget).collect();
    ExperimentTemplate {
        title: format!("{}「{}...」", cfg.title_prefix, quoted),
        goal: format!(
            "验证是否能在14天内拿到至少 {} 次来自目标用户的直接反馈或 {} 次阅读/曝光。",
            cfg.target_feedback, cfg.target_reads
        ),
        steps: cfg.steps.clone(),
        metrics: ExperimentMetrics {
            target_feedback: cfg.target_feedback,
            target_reads: cfg.target_reads,
        },
    }
}
