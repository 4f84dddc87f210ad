//! Scenario configuration
//!
//! A scenario family is pure data: dimensions with scoring weights, a
//! stakeholder roster with a relationship graph, a phased round script,
//! an adverse-event catalog, derived-metric definitions, and a rating
//! tier table. The engine never hardcodes content; it consumes one of
//! these values at construction time.

use crate::SimError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Tolerance when checking that dimension weights sum to 1.0.
pub const WEIGHT_TOLERANCE: f64 = 1e-6;

/// One named axis of organizational health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionSpec {
    pub name: String,
    /// Starting value, expected within [0, 100].
    pub initial: f64,
    /// Relative scoring weight; all weights in a family sum to 1.0.
    pub weight: f64,
}

/// A stakeholder identity with its baseline relationship seeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeholderSpec {
    pub id: String,
    pub name: String,
    /// Static influence copied into the relationship record, never mutated.
    pub influence: f64,
    pub trust: f64,
    pub alignment: f64,
}

/// Declared alliances and tensions between stakeholders.
///
/// Applied once at construction: alliance members each gain +5 trust,
/// tension members each lose 5 alignment. Pairs naming an unknown
/// stakeholder are silently skipped.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelationshipGraph {
    pub alliances: Vec<(String, String)>,
    pub tensions: Vec<(String, String)>,
}

/// One selectable choice within a round.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionSpec {
    pub id: String,
    pub text: String,
    /// Dimension deltas. Names absent from the family's state vector are
    /// ignored, which lets families share an option catalog.
    pub impact: BTreeMap<String, f64>,
    /// Probability in [0, 1] that this choice triggers an adverse event.
    pub risk: f64,
    /// Per-stakeholder reaction deltas, keyed by stakeholder id.
    pub reactions: BTreeMap<String, f64>,
}

/// One scripted decision point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundSpec {
    /// 1-indexed; the script is consumed in strictly increasing order.
    pub id: u32,
    pub phase: String,
    pub situation: String,
    pub options: Vec<OptionSpec>,
}

/// An adverse event template from the family's catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventTemplate {
    pub label: String,
    pub impact: BTreeMap<String, f64>,
}

/// Where a snapshot metric reads its value from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SnapshotSource {
    /// Mean of the named dimensions' current values.
    DimensionMean(Vec<String>),
    /// Mean trust across the whole stakeholder table.
    StakeholderTrustMean,
}

/// Recomputation strategy for one derived metric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum MetricShape {
    /// Direct function of current state/stakeholder values.
    Snapshot(SnapshotSource),
    /// `prior + current_dimension * blend`, an exponential accumulation.
    Accumulating { source: String, blend: f64 },
    /// `(round / total_rounds) * 100 * (key_dimension / 100)`.
    Progress { key_dimension: String },
}

/// One derived metric definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricSpec {
    pub name: String,
    pub shape: MetricShape,
}

/// One rating tier; tiers are scanned in descending `min_score` order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatingTier {
    pub min_score: u32,
    pub grade: String,
    pub title: String,
    pub description: String,
}

/// A complete scenario family definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub key: String,
    pub title: String,
    pub dimensions: Vec<DimensionSpec>,
    pub stakeholders: Vec<StakeholderSpec>,
    pub graph: RelationshipGraph,
    pub rounds: Vec<RoundSpec>,
    pub event_catalog: Vec<EventTemplate>,
    pub metrics: Vec<MetricSpec>,
    /// Name of the metric used as the scoring progress factor.
    pub progress_metric: String,
    pub rating_tiers: Vec<RatingTier>,
}

impl ScenarioConfig {
    pub fn total_rounds(&self) -> u32 {
        self.rounds.len() as u32
    }

    /// Validate the configuration. Any violation is fatal at instance
    /// construction; the engine refuses to run with partial state.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.dimensions.is_empty() {
            return Err(SimError::Config("scenario has no dimensions".into()));
        }
        let mut names = BTreeSet::new();
        for dim in &self.dimensions {
            if !names.insert(dim.name.as_str()) {
                return Err(SimError::Config(format!(
                    "duplicate dimension '{}'",
                    dim.name
                )));
            }
        }
        let weight_sum: f64 = self.dimensions.iter().map(|d| d.weight).sum();
        if (weight_sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(SimError::Config(format!(
                "dimension weights sum to {weight_sum}, expected 1.0"
            )));
        }

        if self.stakeholders.is_empty() {
            return Err(SimError::Config("scenario has no stakeholders".into()));
        }
        let mut ids = BTreeSet::new();
        for s in &self.stakeholders {
            if !ids.insert(s.id.as_str()) {
                return Err(SimError::Config(format!("duplicate stakeholder '{}'", s.id)));
            }
        }

        if self.rounds.is_empty() {
            return Err(SimError::Config("scenario has no rounds".into()));
        }
        for (index, round) in self.rounds.iter().enumerate() {
            if round.id != index as u32 + 1 {
                return Err(SimError::Config(format!(
                    "round ids must run 1..={}, found {} at position {}",
                    self.rounds.len(),
                    round.id,
                    index
                )));
            }
            if round.options.len() < 2 || round.options.len() > 6 {
                return Err(SimError::Config(format!(
                    "round {} has {} options, expected 2-6",
                    round.id,
                    round.options.len()
                )));
            }
            let mut option_ids = BTreeSet::new();
            for option in &round.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(SimError::Config(format!(
                        "round {} has duplicate option '{}'",
                        round.id, option.id
                    )));
                }
                if !(0.0..=1.0).contains(&option.risk) {
                    return Err(SimError::Config(format!(
                        "option '{}' has risk {} outside [0, 1]",
                        option.id, option.risk
                    )));
                }
            }
        }

        if self.event_catalog.is_empty() {
            return Err(SimError::Config("scenario has no event catalog".into()));
        }

        let mut metric_names = BTreeSet::new();
        for metric in &self.metrics {
            if !metric_names.insert(metric.name.as_str()) {
                return Err(SimError::Config(format!(
                    "duplicate metric '{}'",
                    metric.name
                )));
            }
            if let MetricShape::Accumulating { blend, .. } = metric.shape {
                if !(0.0..=1.0).contains(&blend) || blend == 0.0 {
                    return Err(SimError::Config(format!(
                        "metric '{}' has blend factor {} outside (0, 1]",
                        metric.name, blend
                    )));
                }
            }
        }
        if !metric_names.contains(self.progress_metric.as_str()) {
            return Err(SimError::Config(format!(
                "progress metric '{}' is not defined",
                self.progress_metric
            )));
        }

        if self.rating_tiers.is_empty() {
            return Err(SimError::Config("scenario has no rating tiers".into()));
        }
        for pair in self.rating_tiers.windows(2) {
            if pair[1].min_score >= pair[0].min_score {
                return Err(SimError::Config(
                    "rating tiers must be in strictly descending min_score order".into(),
                ));
            }
        }
        if self.rating_tiers.last().map(|t| t.min_score) != Some(0) {
            return Err(SimError::Config(
                "rating tiers must end with a floor tier at min_score 0".into(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_config() -> ScenarioConfig {
        ScenarioConfig {
            key: "test".into(),
            title: "Test Family".into(),
            dimensions: vec![
                DimensionSpec { name: "a".into(), initial: 50.0, weight: 0.5 },
                DimensionSpec { name: "b".into(), initial: 50.0, weight: 0.5 },
            ],
            stakeholders: vec![StakeholderSpec {
                id: "s1".into(),
                name: "Stakeholder One".into(),
                influence: 70.0,
                trust: 50.0,
                alignment: 50.0,
            }],
            graph: RelationshipGraph::default(),
            rounds: vec![RoundSpec {
                id: 1,
                phase: "Opening".into(),
                situation: "First call.".into(),
                options: vec![
                    OptionSpec {
                        id: "opt_a".into(),
                        text: "Act".into(),
                        impact: BTreeMap::from([("a".into(), 20.0)]),
                        risk: 0.0,
                        reactions: BTreeMap::new(),
                    },
                    OptionSpec {
                        id: "opt_b".into(),
                        text: "Wait".into(),
                        impact: BTreeMap::new(),
                        risk: 0.0,
                        reactions: BTreeMap::new(),
                    },
                ],
            }],
            event_catalog: vec![EventTemplate {
                label: "setback".into(),
                impact: BTreeMap::from([("a".into(), -10.0)]),
            }],
            metrics: vec![MetricSpec {
                name: "progress".into(),
                shape: MetricShape::Progress { key_dimension: "a".into() },
            }],
            progress_metric: "progress".into(),
            rating_tiers: vec![
                RatingTier {
                    min_score: 80,
                    grade: "A".into(),
                    title: "Strong".into(),
                    description: "Well played.".into(),
                },
                RatingTier {
                    min_score: 0,
                    grade: "F".into(),
                    title: "Failed".into(),
                    description: "It fell apart.".into(),
                },
            ],
        }
    }

    #[test]
    fn minimal_config_is_valid() {
        minimal_config().validate().unwrap();
    }

    #[test]
    fn weights_must_sum_to_one() {
        let mut config = minimal_config();
        config.dimensions[0].weight = 0.7;
        assert!(config.validate().is_err());
    }

    #[test]
    fn duplicate_dimensions_rejected() {
        let mut config = minimal_config();
        config.dimensions[1].name = "a".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn round_ids_must_be_contiguous_from_one() {
        let mut config = minimal_config();
        config.rounds[0].id = 2;
        assert!(config.validate().is_err());
    }

    #[test]
    fn option_risk_must_be_probability() {
        let mut config = minimal_config();
        config.rounds[0].options[0].risk = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn round_needs_at_least_two_options() {
        let mut config = minimal_config();
        config.rounds[0].options.truncate(1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn progress_metric_must_exist() {
        let mut config = minimal_config();
        config.progress_metric = "missing".into();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rating_tiers_need_floor() {
        let mut config = minimal_config();
        config.rating_tiers.pop();
        assert!(config.validate().is_err());
    }
}
