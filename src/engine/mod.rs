//! Simulation engine
//!
//! One [`Simulation`] instance owns a state vector, a stakeholder table,
//! derived metrics, a round pointer, and two append-only logs. The round
//! controller is a strict state machine: rounds are consumed in order,
//! one accepted decision per round, with a terminal `Complete` state. The
//! heavy lifting lives in pure functions (`decision`, `metrics`,
//! `scoring`); this module is the thin wrapper owning the mutable fields.

pub mod decision;
pub mod metrics;
pub mod random;
pub mod scoring;

use crate::data::{
    clamp_health, seed_relationships, DecisionRecord, EventRecord, Rating, ResultsExport,
    RoundSpec, ScenarioConfig, StakeholderHealth, StakeholderRelationship, SummarySnapshot,
};
use crate::SimError;
use random::{Clock, RiskSource, SeededRisk, SystemClock};
use std::collections::BTreeMap;
use tracing::info;

/// A single scenario run.
///
/// Not safe for concurrent submission from two callers; external
/// orchestration serializes decisions per instance. Distinct instances
/// are fully independent.
pub struct Simulation {
    config: ScenarioConfig,
    state: BTreeMap<String, f64>,
    stakeholders: BTreeMap<String, StakeholderRelationship>,
    metrics: BTreeMap<String, f64>,
    /// 1-indexed; greater than the round count once complete.
    current_round: u32,
    decisions: Vec<DecisionRecord>,
    events: Vec<EventRecord>,
    risk: Box<dyn RiskSource>,
    clock: Box<dyn Clock>,
}

impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("stakeholders", &self.stakeholders)
            .field("metrics", &self.metrics)
            .field("current_round", &self.current_round)
            .field("decisions", &self.decisions)
            .field("events", &self.events)
            .finish_non_exhaustive()
    }
}

impl Simulation {
    /// Build an instance from a validated configuration and injected
    /// randomness/time sources. Configuration violations are fatal here;
    /// the engine never runs with partial state.
    pub fn new(
        config: ScenarioConfig,
        risk: Box<dyn RiskSource>,
        clock: Box<dyn Clock>,
    ) -> Result<Self, SimError> {
        config.validate()?;

        let state: BTreeMap<String, f64> = config
            .dimensions
            .iter()
            .map(|dim| (dim.name.clone(), clamp_health(dim.initial)))
            .collect();
        let stakeholders = seed_relationships(&config.stakeholders, &config.graph);
        let metrics = metrics::recompute(
            &config.metrics,
            &state,
            &stakeholders,
            0,
            config.total_rounds(),
            &BTreeMap::new(),
        );

        Ok(Self {
            config,
            state,
            stakeholders,
            metrics,
            current_round: 1,
            decisions: Vec::new(),
            events: Vec::new(),
            risk,
            clock,
        })
    }

    /// Convenience constructor with a seeded risk source and the system
    /// clock; the same seed and decision sequence reproduce the same run.
    pub fn with_seed(config: ScenarioConfig, seed: u64) -> Result<Self, SimError> {
        Self::new(
            config,
            Box::new(SeededRisk::new(seed)),
            Box::new(SystemClock),
        )
    }

    pub fn config(&self) -> &ScenarioConfig {
        &self.config
    }

    pub fn state(&self) -> &BTreeMap<String, f64> {
        &self.state
    }

    pub fn stakeholders(&self) -> &BTreeMap<String, StakeholderRelationship> {
        &self.stakeholders
    }

    pub fn metrics(&self) -> &BTreeMap<String, f64> {
        &self.metrics
    }

    pub fn decisions(&self) -> &[DecisionRecord] {
        &self.decisions
    }

    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// 1-indexed number of the round awaiting a decision.
    pub fn round_number(&self) -> u32 {
        self.current_round
    }

    pub fn is_complete(&self) -> bool {
        self.current_round > self.config.total_rounds()
    }

    /// The round awaiting a decision, or `None` once complete.
    pub fn current_round(&self) -> Option<&RoundSpec> {
        if self.is_complete() {
            return None;
        }
        self.config.rounds.get(self.current_round as usize - 1)
    }

    /// Submit the decision for the current round. The only mutating entry
    /// point. Rejections (unknown option, already complete) return an
    /// error and leave the instance byte-for-byte unchanged.
    pub fn submit_option(&mut self, option_id: &str) -> Result<DecisionRecord, SimError> {
        if self.is_complete() {
            return Err(SimError::SimulationComplete);
        }
        let round = &self.config.rounds[self.current_round as usize - 1];
        let Some(option) = round.options.iter().find(|o| o.id == option_id) else {
            return Err(SimError::InvalidOption {
                round: round.id,
                option: option_id.to_string(),
            });
        };

        let option = option.clone();
        let round_id = round.id;
        let phase = round.phase.clone();

        decision::apply_impact(&mut self.state, &option.impact);
        decision::apply_reactions(&mut self.stakeholders, &option.reactions);
        let event = decision::roll_event(
            self.risk.as_mut(),
            &self.config.event_catalog,
            &option,
            round_id,
        );
        if let Some(record) = &event {
            // event impact lands on top of the option's own, same state
            decision::apply_impact(&mut self.state, &record.impact);
        }
        self.metrics = metrics::recompute(
            &self.config.metrics,
            &self.state,
            &self.stakeholders,
            round_id,
            self.config.total_rounds(),
            &self.metrics,
        );

        let record = DecisionRecord {
            round: round_id,
            phase,
            option_id: option.id.clone(),
            option_text: option.text.clone(),
            impact: option.impact.clone(),
            timestamp: self.clock.now(),
            state_after: self.state.clone(),
            metrics_after: self.metrics.clone(),
            event_occurred: event.is_some(),
        };
        if let Some(event) = event {
            self.events.push(event);
        }
        self.decisions.push(record.clone());
        self.current_round += 1;

        info!(
            round = round_id,
            option = %option.id,
            event = record.event_occurred,
            complete = self.is_complete(),
            "decision accepted"
        );
        Ok(record)
    }

    /// Current score; valid at any round, including before completion.
    pub fn score(&self) -> u32 {
        scoring::score(&self.state, &self.stakeholders, &self.metrics, &self.config)
    }

    pub fn rating(&self) -> Rating {
        scoring::rating(self.score(), &self.config.rating_tiers)
    }

    pub fn summary(&self) -> SummarySnapshot {
        SummarySnapshot {
            round: self.current_round.min(self.config.total_rounds()),
            total_rounds: self.config.total_rounds(),
            complete: self.is_complete(),
            state: self.state.clone(),
            metrics: self.metrics.clone(),
            score: self.score(),
            rating: self.rating(),
            decision_count: self.decisions.len(),
            event_count: self.events.len(),
            stakeholder_health: StakeholderHealth::from_table(&self.stakeholders),
        }
    }

    /// Full immutable dump for the export collaborator.
    pub fn export(&self) -> ResultsExport {
        ResultsExport {
            scenario_key: self.config.key.clone(),
            scenario_title: self.config.title.clone(),
            complete: self.is_complete(),
            final_state: self.state.clone(),
            metrics: self.metrics.clone(),
            score: self.score(),
            rating: self.rating(),
            decisions: self.decisions.clone(),
            events: self.events.clone(),
            stakeholders: self.stakeholders.clone(),
            exported_at: self.clock.now(),
        }
    }

    /// Discard the run and start over from the scenario configuration.
    /// Produces wholly fresh state, never a patched instance.
    pub fn reset(&mut self) {
        self.state = self
            .config
            .dimensions
            .iter()
            .map(|dim| (dim.name.clone(), clamp_health(dim.initial)))
            .collect();
        self.stakeholders = seed_relationships(&self.config.stakeholders, &self.config.graph);
        self.metrics = metrics::recompute(
            &self.config.metrics,
            &self.state,
            &self.stakeholders,
            0,
            self.config.total_rounds(),
            &BTreeMap::new(),
        );
        self.current_round = 1;
        self.decisions.clear();
        self.events.clear();
    }
}
