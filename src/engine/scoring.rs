//! Scoring and rating
//!
//! Pure functions, callable at any round. The score is the weighted state
//! total scaled by mean stakeholder trust and a progress floor: even a
//! zero-progress run keeps 60% of its otherwise-earned score, and a fully
//! progressed run keeps all of it.

use crate::data::{Rating, RatingTier, ScenarioConfig, StakeholderRelationship};
use std::collections::BTreeMap;

/// Share of the score that survives at zero progress.
const PROGRESS_FLOOR: f64 = 0.6;
const PROGRESS_SPAN: f64 = 0.4;

pub fn score(
    state: &BTreeMap<String, f64>,
    stakeholders: &BTreeMap<String, StakeholderRelationship>,
    metrics: &BTreeMap<String, f64>,
    config: &ScenarioConfig,
) -> u32 {
    let weighted_total: f64 = config
        .dimensions
        .iter()
        .map(|dim| state.get(&dim.name).copied().unwrap_or(0.0) * dim.weight)
        .sum();
    let weighted_max: f64 = config.dimensions.iter().map(|dim| 100.0 * dim.weight).sum();
    if weighted_max <= 0.0 || stakeholders.is_empty() {
        return 0;
    }

    let trust_mean =
        stakeholders.values().map(|r| r.trust).sum::<f64>() / stakeholders.len() as f64;
    let stakeholder_factor = trust_mean / 100.0;
    let progress_factor = metrics
        .get(&config.progress_metric)
        .copied()
        .unwrap_or(0.0)
        / 100.0;

    let raw = weighted_total / weighted_max
        * 100.0
        * stakeholder_factor
        * (PROGRESS_FLOOR + progress_factor * PROGRESS_SPAN);
    raw.round().clamp(0.0, 100.0) as u32
}

/// Resolve a score against the family's descending tier table.
pub fn rating(score: u32, tiers: &[RatingTier]) -> Rating {
    let tier = tiers
        .iter()
        .find(|tier| score >= tier.min_score)
        .or_else(|| tiers.last())
        .expect("validated configs always carry at least one rating tier");
    Rating {
        grade: tier.grade.clone(),
        title: tier.title.clone(),
        description: tier.description.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{
        seed_relationships, DimensionSpec, EventTemplate, MetricShape, MetricSpec, OptionSpec,
        RelationshipGraph, RoundSpec, SnapshotSource, StakeholderSpec,
    };

    fn config() -> ScenarioConfig {
        ScenarioConfig {
            key: "scoring_test".into(),
            title: "Scoring".into(),
            dimensions: vec![
                DimensionSpec { name: "a".into(), initial: 50.0, weight: 0.5 },
                DimensionSpec { name: "b".into(), initial: 50.0, weight: 0.5 },
            ],
            stakeholders: vec![StakeholderSpec {
                id: "s".into(),
                name: "S".into(),
                influence: 50.0,
                trust: 50.0,
                alignment: 50.0,
            }],
            graph: RelationshipGraph::default(),
            rounds: vec![RoundSpec {
                id: 1,
                phase: "Only".into(),
                situation: "One call.".into(),
                options: vec![
                    OptionSpec {
                        id: "x".into(),
                        text: "X".into(),
                        impact: BTreeMap::new(),
                        risk: 0.0,
                        reactions: BTreeMap::new(),
                    },
                    OptionSpec {
                        id: "y".into(),
                        text: "Y".into(),
                        impact: BTreeMap::new(),
                        risk: 0.0,
                        reactions: BTreeMap::new(),
                    },
                ],
            }],
            event_catalog: vec![EventTemplate {
                label: "setback".into(),
                impact: BTreeMap::new(),
            }],
            metrics: vec![MetricSpec {
                name: "confidence".into(),
                shape: MetricShape::Snapshot(SnapshotSource::StakeholderTrustMean),
            }],
            progress_metric: "confidence".into(),
            rating_tiers: vec![
                RatingTier {
                    min_score: 90,
                    grade: "A".into(),
                    title: "Exceptional".into(),
                    description: "Top tier.".into(),
                },
                RatingTier {
                    min_score: 70,
                    grade: "B".into(),
                    title: "Solid".into(),
                    description: "Good.".into(),
                },
                RatingTier {
                    min_score: 0,
                    grade: "F".into(),
                    title: "Failed".into(),
                    description: "Bottom tier.".into(),
                },
            ],
        }
    }

    fn table(trust: f64) -> BTreeMap<String, StakeholderRelationship> {
        let mut roster = config().stakeholders;
        roster[0].trust = trust;
        seed_relationships(&roster, &RelationshipGraph::default())
    }

    #[test]
    fn all_zero_state_scores_zero() {
        let state = BTreeMap::from([("a".into(), 0.0), ("b".into(), 0.0)]);
        let metrics = BTreeMap::from([("confidence".into(), 0.0)]);
        assert_eq!(score(&state, &table(0.0), &metrics, &config()), 0);
    }

    #[test]
    fn perfect_run_scores_one_hundred() {
        let state = BTreeMap::from([("a".into(), 100.0), ("b".into(), 100.0)]);
        let metrics = BTreeMap::from([("confidence".into(), 100.0)]);
        assert_eq!(score(&state, &table(100.0), &metrics, &config()), 100);
    }

    #[test]
    fn zero_progress_keeps_sixty_percent() {
        let state = BTreeMap::from([("a".into(), 100.0), ("b".into(), 100.0)]);
        let metrics = BTreeMap::from([("confidence".into(), 0.0)]);
        // 100 * 1.0 * (0.6 + 0) = 60
        assert_eq!(score(&state, &table(100.0), &metrics, &config()), 60);
    }

    #[test]
    fn trust_scales_the_score() {
        let state = BTreeMap::from([("a".into(), 100.0), ("b".into(), 100.0)]);
        let metrics = BTreeMap::from([("confidence".into(), 100.0)]);
        // 100 * 0.5 * 1.0 = 50
        assert_eq!(score(&state, &table(50.0), &metrics, &config()), 50);
    }

    #[test]
    fn score_never_leaves_bounds() {
        let state = BTreeMap::from([("a".into(), 100.0), ("b".into(), 100.0)]);
        let metrics = BTreeMap::from([("confidence".into(), 100.0)]);
        let value = score(&state, &table(100.0), &metrics, &config());
        assert!(value <= 100);
    }

    #[test]
    fn rating_scans_descending_tiers() {
        let tiers = config().rating_tiers;
        assert_eq!(rating(95, &tiers).grade, "A");
        assert_eq!(rating(90, &tiers).grade, "A");
        assert_eq!(rating(89, &tiers).grade, "B");
        assert_eq!(rating(12, &tiers).grade, "F");
        assert_eq!(rating(0, &tiers).grade, "F");
    }
}
