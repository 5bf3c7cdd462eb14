use lifepath::engine::matrix::{DimensionScores, MatrixEntry, PartialScores};
use lifepath::engine::Engine;
use lifepath::AnswerSet;
use std::collections::BTreeMap;

fn uniform(score: u8) -> PartialScores {
    PartialScores::from(DimensionScores {
        value: score,
        skill: score,
        energy: score,
        opp: score,
    })
}

#[test]
fn engine_ranks_with_configured_weights() {
    let engine = Engine::with_defaults();
    let directions = vec!["做课程".to_string(), "做咨询".to_string()];
    let prior = BTreeMap::from([
        (
            0,
            PartialScores::from(DimensionScores {
                value: 5,
                skill: 4,
                energy: 4,
                opp: 2,
            }),
        ),
        (1, uniform(3)),
    ]);
    let ranked = engine.compute_matrix(&directions, &prior);
    assert_eq!(ranked[0].direction, "做课程");
    // 5*0.35 + 4*0.30 + 4*0.20 + 2*0.15 = 4.05
    assert!((ranked[0].total - 4.05).abs() < 1e-9);
    assert_eq!(ranked[1].total, 3.0);
}

#[test]
fn rescore_prefers_elevator_pitches_over_variants() {
    let engine = Engine::with_defaults();
    let mut answers = AnswerSet {
        direction_variants: vec!["原始方向句".to_string()],
        elevator_pitches: vec!["电梯陈述A".to_string(), "电梯陈述B".to_string()],
        ..Default::default()
    };
    let ranked = engine.rescore_matrix(&mut answers);
    assert_eq!(ranked.len(), 2);
    assert!(ranked.iter().all(|e| e.direction.starts_with("电梯陈述")));
}

#[test]
fn rescore_falls_back_to_direction_variants() {
    let engine = Engine::with_defaults();
    let mut answers = AnswerSet {
        direction_variants: vec!["方向一".to_string(), "方向二".to_string()],
        ..Default::default()
    };
    let ranked = engine.rescore_matrix(&mut answers);
    assert_eq!(ranked.len(), 2);
    assert_eq!(answers.matrix_scores, ranked);
}

#[test]
fn previous_ranking_seeds_the_next_recompute() {
    let engine = Engine::with_defaults();
    let mut answers = AnswerSet {
        direction_variants: vec!["唯一方向".to_string()],
        matrix_scores: vec![MatrixEntry {
            direction: "唯一方向".to_string(),
            scores: DimensionScores {
                value: 5,
                skill: 5,
                energy: 5,
                opp: 5,
            },
            total: 5.0,
        }],
        ..Default::default()
    };
    let ranked = engine.rescore_matrix(&mut answers);
    assert_eq!(ranked[0].total, 5.0);
    assert_eq!(ranked[0].scores.value, 5);
}

#[test]
fn rescore_with_no_candidates_is_empty() {
    let engine = Engine::with_defaults();
    let mut answers = AnswerSet::default();
    assert!(engine.rescore_matrix(&mut answers).is_empty());
    assert!(answers.matrix_scores.is_empty());
}

#[test]
fn rescore_twice_yields_identical_ranking() {
    let engine = Engine::with_defaults();
    let mut answers = AnswerSet {
        elevator_pitches: vec!["甲".repeat(2), "乙".repeat(2)],
        ..Default::default()
    };
    let first = engine.rescore_matrix(&mut answers);
    let second = engine.rescore_matrix(&mut answers);
    assert_eq!(first, second);
}
