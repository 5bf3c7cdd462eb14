//! Direction-sentence synthesis from the extracted signals.
//!
//! Three fixed templates (configuration data, see [`TemplatesConfig`]) are
//! filled positionally from the top skills, top values, and the user's target
//! group / pain point. Every slot has a human-readable placeholder, so the
//! output is always three complete sentences even for a blank questionnaire.

use crate::config::{DirectionTemplate, TemplatesConfig};

/// Render the three candidate direction sentences, in template order.
///
/// `top_skills` and `top_values` are consulted up to their first three
/// entries; anything missing falls back to the slot's placeholder text.
pub fn synthesize(
    top_skills: &[String],
    top_values: &[String],
    target_group: &str,
    pain_point: &str,
    cfg: &TemplatesConfig,
) -> Vec<String> {
    let skills: Vec<&String> = top_skills.iter().take(3).collect();
    let values: Vec<&String> = top_values.iter().take(3).collect();

    let non_empty = |s: &str| -> Option<String> {
        let trimmed = s.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    };
    let joined = |items: &[&String], sep: &str| -> Option<String> {
        let text = items
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(sep);
        (!text.is_empty()).then_some(text)
    };

    // Group and pain use one shared placeholder across all templates
    let group = non_empty(target_group).unwrap_or_else(|| cfg.group_fallback.clone());
    let pain = non_empty(pain_point).unwrap_or_else(|| cfg.pain_fallback.clone());

    let pair_end = skills.len().min(2);
    let slots: [(&str, Option<String>); 7] = [
        ("skill_a", skills.first().map(|s| s.to_string())),
        ("skill_b", skills.get(1).map(|s| s.to_string())),
        ("skill_pair", joined(&skills[..pair_end], &cfg.skill_join)),
        ("value_a", values.first().map(|s| s.to_string())),
        ("values", joined(values.as_slice(), &cfg.value_join)),
        ("group", Some(group)),
        ("pain", Some(pain)),
    ];

    cfg.variants
        .iter()
        .map(|template| render(template, &slots))
        .collect()
}

fn render(template: &DirectionTemplate, slots: &[(&str, Option<String>)]) -> String {
    let mut out = template.text.clone();
    for (name, value) in slots {
        let marker = format!("{{{name}}}");
        if !out.contains(&marker) {
            continue;
        }
        let filled = value
            .clone()
            .or_else(|| template.fallbacks.get(*name).cloned())
            .unwrap_or_default();
        out = out.replace(&marker, &filled);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn always_three_non_empty_sentences() {
        let cfg = TemplatesConfig::default();
        let variants = synthesize(&[], &[], "", "", &cfg);
        assert_eq!(variants.len(), 3);
        assert!(variants.iter().all(|v| !v.is_empty()));
    }

    #[test]
    fn empty_input_uses_every_placeholder() {
        let cfg = TemplatesConfig::default();
        let variants = synthesize(&[], &[], "", "", &cfg);
        assert_eq!(
            variants[0],
            "我想用【我的能力】和【系统化方法】在【某一群体/行业】解决【具体痛点/问题】，\
             因为我重视【成长、影响】，目标是实现可持续的影响与可见成果。"
        );
        assert!(variants[1].contains("【经验】"));
        assert!(variants[1].contains("【自由】"));
        assert!(variants[2].contains("【擅长技能】"));
    }

    #[test]
    fn fills_skills_values_group_and_pain() {
        let cfg = TemplatesConfig::default();
        let variants = synthesize(
            &strings(&["写作", "做课程"]),
            &strings(&["自由", "成长"]),
            "独立开发者",
            "不会做内容营销",
            &cfg,
        );
        assert!(variants[0].contains("【写作】"));
        assert!(variants[0].contains("【做课程】"));
        assert!(variants[0].contains("【独立开发者】"));
        assert!(variants[0].contains("【不会做内容营销】"));
        assert!(variants[0].contains("【自由、成长】"));
        assert!(variants[2].contains("【写作/做课程】"));
    }

    #[test]
    fn single_skill_pair_is_just_that_skill() {
        let cfg = TemplatesConfig::default();
        let variants = synthesize(&strings(&["写作"]), &[], "", "", &cfg);
        assert!(variants[2].contains("【写作】"));
    }
}
