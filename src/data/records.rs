//! Audit records and read-only snapshots
//!
//! Decision and event records are append-only and snapshot state by value,
//! so later decisions can never retroactively alter history.

use super::StakeholderRelationship;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Immutable log entry for one accepted decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub round: u32,
    pub phase: String,
    pub option_id: String,
    pub option_text: String,
    pub impact: BTreeMap<String, f64>,
    pub timestamp: DateTime<Utc>,
    /// Value snapshot of the state vector after this decision.
    pub state_after: BTreeMap<String, f64>,
    /// Value snapshot of the derived metrics after this decision.
    pub metrics_after: BTreeMap<String, f64>,
    pub event_occurred: bool,
}

/// Immutable log entry for one triggered adverse event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub round: u32,
    pub label: String,
    pub impact: BTreeMap<String, f64>,
    /// Id of the option whose risk roll triggered this event.
    pub triggered_by: String,
}

/// Rating tier resolved for a score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    pub grade: String,
    pub title: String,
    pub description: String,
}

/// Aggregate view over the stakeholder table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StakeholderHealth {
    pub mean_trust: f64,
    pub mean_alignment: f64,
    pub mean_satisfaction: f64,
    /// Stakeholder id with the lowest trust, for the debrief callout.
    pub weakest: Option<String>,
}

impl StakeholderHealth {
    pub fn from_table(table: &BTreeMap<String, StakeholderRelationship>) -> Self {
        if table.is_empty() {
            return Self {
                mean_trust: 0.0,
                mean_alignment: 0.0,
                mean_satisfaction: 0.0,
                weakest: None,
            };
        }
        let count = table.len() as f64;
        let weakest = table
            .iter()
            .min_by(|a, b| a.1.trust.total_cmp(&b.1.trust))
            .map(|(id, _)| id.clone());
        Self {
            mean_trust: table.values().map(|r| r.trust).sum::<f64>() / count,
            mean_alignment: table.values().map(|r| r.alignment).sum::<f64>() / count,
            mean_satisfaction: table.values().map(|r| r.satisfaction).sum::<f64>() / count,
            weakest,
        }
    }
}

/// Point-in-time summary for progress dashboards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarySnapshot {
    pub round: u32,
    pub total_rounds: u32,
    pub complete: bool,
    pub state: BTreeMap<String, f64>,
    pub metrics: BTreeMap<String, f64>,
    pub score: u32,
    pub rating: Rating,
    pub decision_count: usize,
    pub event_count: usize,
    pub stakeholder_health: StakeholderHealth,
}

/// Full immutable dump handed to the export collaborator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultsExport {
    pub scenario_key: String,
    pub scenario_title: String,
    pub complete: bool,
    pub final_state: BTreeMap<String, f64>,
    pub metrics: BTreeMap<String, f64>,
    pub score: u32,
    pub rating: Rating,
    pub decisions: Vec<DecisionRecord>,
    pub events: Vec<EventRecord>,
    pub stakeholders: BTreeMap<String, StakeholderRelationship>,
    pub exported_at: DateTime<Utc>,
}
