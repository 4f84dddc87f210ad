//! Scenario library
//!
//! Maps family keys to scenario configurations and builds simulation
//! instances from them. Ships two demo families; callers register their
//! own configurations for everything else.

pub mod crisis;
pub mod transformation;

use crate::data::{
    DimensionSpec, EventTemplate, OptionSpec, RatingTier, RoundSpec, ScenarioConfig,
    StakeholderSpec,
};
use crate::engine::random::{Clock, RiskSource};
use crate::engine::Simulation;
use crate::SimError;
use std::collections::BTreeMap;

// Construction shorthand shared by the built-in families.

fn dim(name: &str, initial: f64, weight: f64) -> DimensionSpec {
    DimensionSpec {
        name: name.into(),
        initial,
        weight,
    }
}

fn stakeholder(id: &str, name: &str, influence: f64, trust: f64, alignment: f64) -> StakeholderSpec {
    StakeholderSpec {
        id: id.into(),
        name: name.into(),
        influence,
        trust,
        alignment,
    }
}

fn opt(id: &str, text: &str, impact: &[(&str, f64)], risk: f64, reactions: &[(&str, f64)]) -> OptionSpec {
    OptionSpec {
        id: id.into(),
        text: text.into(),
        impact: impact.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
        risk,
        reactions: reactions.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
    }
}

fn round(id: u32, phase: &str, situation: &str, options: Vec<OptionSpec>) -> RoundSpec {
    RoundSpec {
        id,
        phase: phase.into(),
        situation: situation.into(),
        options,
    }
}

fn event(label: &str, impact: &[(&str, f64)]) -> EventTemplate {
    EventTemplate {
        label: label.into(),
        impact: impact.iter().map(|(k, v)| (k.to_string(), *v)).collect(),
    }
}

fn tier(min_score: u32, grade: &str, title: &str, description: &str) -> RatingTier {
    RatingTier {
        min_score,
        grade: grade.into(),
        title: title.into(),
        description: description.into(),
    }
}

/// Registry of scenario families, keyed by family string.
#[derive(Debug, Default)]
pub struct ScenarioLibrary {
    configs: BTreeMap<String, ScenarioConfig>,
}

impl ScenarioLibrary {
    /// Empty library; register configurations before use.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Library pre-loaded with the built-in demo families.
    pub fn builtin() -> Self {
        let mut library = Self::empty();
        library.register(crisis::create_crisis_scenario());
        library.register(transformation::create_transformation_scenario());
        library
    }

    /// Register a family under its configured key, replacing any previous
    /// entry with the same key.
    pub fn register(&mut self, config: ScenarioConfig) {
        self.configs.insert(config.key.clone(), config);
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.configs.keys().map(String::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&ScenarioConfig> {
        self.configs.get(key)
    }

    /// Build a seeded instance for a family. Unknown keys are fatal.
    pub fn create_instance(&self, key: &str, seed: u64) -> Result<Simulation, SimError> {
        let config = self
            .configs
            .get(key)
            .ok_or_else(|| SimError::UnknownScenario(key.to_string()))?;
        Simulation::with_seed(config.clone(), seed)
    }

    /// Build an instance with caller-supplied randomness and time sources.
    pub fn create_instance_with(
        &self,
        key: &str,
        risk: Box<dyn RiskSource>,
        clock: Box<dyn Clock>,
    ) -> Result<Simulation, SimError> {
        let config = self
            .configs
            .get(key)
            .ok_or_else(|| SimError::UnknownScenario(key.to_string()))?;
        Simulation::new(config.clone(), risk, clock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_families_are_valid() {
        let library = ScenarioLibrary::builtin();
        for key in library.keys() {
            library.get(key).unwrap().validate().unwrap();
        }
    }

    #[test]
    fn unknown_family_key_is_fatal() {
        let library = ScenarioLibrary::builtin();
        let err = library.create_instance("does_not_exist", 1).unwrap_err();
        assert!(matches!(err, SimError::UnknownScenario(_)));
    }

    #[test]
    fn registered_family_can_be_instantiated() {
        let library = ScenarioLibrary::builtin();
        let sim = library.create_instance("crisis_leadership", 7).unwrap();
        assert_eq!(sim.round_number(), 1);
        assert!(!sim.is_complete());
    }
}
