//! Derived-metric recomputation
//!
//! Metrics are recomputed in full after every decision from the current
//! state, stakeholder table, and round index. Three shapes exist: pure
//! snapshots, exponential accumulations carrying their prior value, and
//! round-fraction progress tied to a key dimension's health. Every result
//! clamps to [0, 100].

use crate::data::{clamp_health, MetricShape, MetricSpec, SnapshotSource, StakeholderRelationship};
use std::collections::BTreeMap;

pub fn recompute(
    specs: &[MetricSpec],
    state: &BTreeMap<String, f64>,
    stakeholders: &BTreeMap<String, StakeholderRelationship>,
    round_index: u32,
    total_rounds: u32,
    prior: &BTreeMap<String, f64>,
) -> BTreeMap<String, f64> {
    let mut next = BTreeMap::new();
    for spec in specs {
        let value = match &spec.shape {
            MetricShape::Snapshot(source) => snapshot_value(source, state, stakeholders),
            MetricShape::Accumulating { source, blend } => {
                let carried = prior.get(&spec.name).copied().unwrap_or(0.0);
                carried + state.get(source).copied().unwrap_or(0.0) * blend
            }
            MetricShape::Progress { key_dimension } => {
                let key = state.get(key_dimension).copied().unwrap_or(0.0);
                let fraction = if total_rounds == 0 {
                    0.0
                } else {
                    round_index as f64 / total_rounds as f64
                };
                fraction * 100.0 * (key / 100.0)
            }
        };
        next.insert(spec.name.clone(), clamp_health(value));
    }
    next
}

fn snapshot_value(
    source: &SnapshotSource,
    state: &BTreeMap<String, f64>,
    stakeholders: &BTreeMap<String, StakeholderRelationship>,
) -> f64 {
    match source {
        SnapshotSource::DimensionMean(names) => {
            let values: Vec<f64> = names
                .iter()
                .filter_map(|name| state.get(name).copied())
                .collect();
            if values.is_empty() {
                0.0
            } else {
                values.iter().sum::<f64>() / values.len() as f64
            }
        }
        SnapshotSource::StakeholderTrustMean => {
            if stakeholders.is_empty() {
                0.0
            } else {
                stakeholders.values().map(|r| r.trust).sum::<f64>() / stakeholders.len() as f64
            }
        }
    }
}
