//! Engine configuration: the value-word lexicon, keyword-extraction settings,
//! the direction sentence templates, the experiment-card defaults, and the
//! decision-matrix weights.
//!
//! All of these are data, not code: the templates are a structured slot table
//! so they can be swapped or localized from `lifepath.toml` without touching
//! the algorithms.

use crate::error::{LifepathError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Candidate value-words scored against the user's free-text answers.
/// Fixed, ordered catalog; ties in scoring keep this declaration order.
pub const DEFAULT_LEXICON: [&str; 30] = [
    "自由", "成长", "影响", "稳定", "好奇", "审美", "创造", "贡献", "专业", "诚信",
    "学习", "健康", "家庭", "朋友", "效率", "秩序", "探索", "冒险", "服务", "领导",
    "独立", "合作", "成就", "安全", "尊重", "公平", "乐趣", "意义", "财富", "平衡",
];

/// Main configuration structure loaded from lifepath.toml with built-in defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Ordered catalog of candidate value-words
    pub lexicon: Vec<String>,
    pub extraction: ExtractionConfig,
    pub templates: TemplatesConfig,
    pub experiment: ExperimentConfig,
    pub weights: MatrixWeights,
}

/// Settings for the talent-keyword frequency extractor
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Characters treated as token delimiters (in addition to whitespace)
    pub delimiters: String,
    /// Tokens shorter than this (in chars) are discarded
    pub min_token_chars: usize,
    /// Number of highest-frequency tokens to keep
    pub top_k: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            delimiters: "，。,.".to_string(),
            min_token_chars: 2,
            top_k: 8,
        }
    }
}

/// One direction-sentence template: a text with `{slot}` markers and the
/// placeholder used for each slot whose input is missing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DirectionTemplate {
    pub text: String,
    #[serde(default)]
    pub fallbacks: BTreeMap<String, String>,
}

/// The three direction templates plus the slot-joining/fallback strings
/// shared across them.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TemplatesConfig {
    /// Placeholder when the user never named a target group
    pub group_fallback: String,
    /// Placeholder when the user never named a pain point
    pub pain_fallback: String,
    /// Separator used when joining top values into one slot
    pub value_join: String,
    /// Separator used when joining the top two skills into one slot
    pub skill_join: String,
    /// Exactly three templates, rendered in order
    pub variants: Vec<DirectionTemplate>,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        let fb = |pairs: &[(&str, &str)]| -> BTreeMap<String, String> {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        };
        Self {
            group_fallback: "某一群体/行业".to_string(),
            pain_fallback: "具体痛点/问题".to_string(),
            value_join: "、".to_string(),
            skill_join: "/".to_string(),
            variants: vec![
                DirectionTemplate {
                    text: "我想用【{skill_a}】和【{skill_b}】在【{group}】解决【{pain}】，\
                           因为我重视【{values}】，目标是实现可持续的影响与可见成果。"
                        .to_string(),
                    fallbacks: fb(&[
                        ("skill_a", "我的能力"),
                        ("skill_b", "系统化方法"),
                        ("values", "成长、影响"),
                    ]),
                },
                DirectionTemplate {
                    text: "基于我的【{skill_a}】和对【{value_a}】的追求，我愿意在【{group}】\
                           通过【小规模实验/试点】验证解决【{pain}】的路径，并优先保证时间与学习的平衡。"
                        .to_string(),
                    fallbacks: fb(&[("skill_a", "经验"), ("value_a", "自由")]),
                },
                DirectionTemplate {
                    text: "用我的【{skill_pair}】聚焦在【{group}】的【{pain}】，\
                           先做一个两周小实验（最小可验证成果：X），如果验证成功就扩大化。"
                        .to_string(),
                    fallbacks: fb(&[("skill_pair", "擅长技能")]),
                },
            ],
        }
    }
}

/// Defaults for the generated two-week experiment card
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ExperimentConfig {
    pub title_prefix: String,
    /// Chars of the first direction variant quoted in the title
    pub title_budget: usize,
    pub target_feedback: u32,
    pub target_reads: u32,
    pub steps: Vec<String>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            title_prefix: "两周小实验：验证方向".to_string(),
            title_budget: 40,
            target_feedback: 3,
            target_reads: 100,
            steps: vec![
                "第1-3天：明确最小可验证假设（MVP）并做出样品或文案。".to_string(),
                "第4-9天：将样品/文案投放给目标人群（社群、朋友圈、小范围广告、信任联系人等），收集定性反馈。"
                    .to_string(),
                "第10-14天：整理反馈，量化结果（阅读数/人次/反馈次数），决定放大/迭代/放弃。"
                    .to_string(),
            ],
        }
    }
}

/// Per-dimension weights for the decision matrix. Must sum to 1.0.
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
#[serde(default)]
pub struct MatrixWeights {
    pub value: f64,
    pub skill: f64,
    pub energy: f64,
    pub opp: f64,
}

impl Default for MatrixWeights {
    fn default() -> Self {
        Self {
            value: 0.35,
            skill: 0.30,
            energy: 0.20,
            opp: 0.15,
        }
    }
}

impl MatrixWeights {
    pub fn sum(&self) -> f64 {
        self.value + self.skill + self.energy + self.opp
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon: DEFAULT_LEXICON.iter().map(|w| w.to_string()).collect(),
            extraction: ExtractionConfig::default(),
            templates: TemplatesConfig::default(),
            experiment: ExperimentConfig::default(),
            weights: MatrixWeights::default(),
        }
    }
}

impl Config {
    /// Load configuration from `lifepath.toml` (or `$LIFEPATH_CONFIG`) if the
    /// file exists, otherwise fall back to built-in defaults.
    pub fn load() -> Result<Self> {
        let path =
            std::env::var("LIFEPATH_CONFIG").unwrap_or_else(|_| "lifepath.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let config = if path.exists() {
            let raw = std::fs::read_to_string(path)?;
            toml::from_str(&raw)?
        } else {
            Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.lexicon.is_empty() {
            return Err(LifepathError::Validation {
                message: "lexicon must not be empty".to_string(),
            });
        }
        if self.extraction.top_k == 0 || self.extraction.min_token_chars == 0 {
            return Err(LifepathError::Validation {
                message: "extraction.top_k and extraction.min_token_chars must be >= 1"
                    .to_string(),
            });
        }
        if self.templates.variants.len() != 3 {
            return Err(LifepathError::Validation {
                message: format!(
                    "templates.variants must contain exactly 3 entries, got {}",
                    self.templates.variants.len()
                ),
            });
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > 1e-9 {
            return Err(LifepathError::Validation {
                message: format!("matrix weights must sum to 1.0, got {sum}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        Config::default().validate().unwrap();
    }

    #[test]
    fn default_weights_sum_to_one() {
        assert_eq!(MatrixWeights::default().sum(), 1.0);
    }

    #[test]
    fn unbalanced_weights_are_rejected() {
        let mut config = Config::default();
        config.weights.value = 0.5;
        assert!(matches!(
            config.validate(),
            Err(LifepathError::Validation { .. })
        ));
    }

    #[test]
    fn wrong_template_count_is_rejected() {
        let mut config = Config::default();
        config.templates.variants.pop();
        assert!(matches!(
            config.validate(),
            Err(LifepathError::Validation { .. })
        ));
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str("[extraction]\ntop_k = 5\n").unwrap();
        assert_eq!(config.extraction.top_k, 5);
        assert_eq!(config.extraction.min_token_chars, 2);
        assert_eq!(config.lexicon.len(), 30);
        config.validate().unwrap();
    }
}
