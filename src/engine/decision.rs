//! Decision processing
//!
//! Pure mutation steps for one accepted decision: apply the option's
//! dimension impact, propagate stakeholder reactions, and roll for an
//! adverse event. Unknown dimension or stakeholder references are
//! tolerated silently so scenario families can share option catalogs
//! across differently-shaped state vectors.

use crate::data::{clamp_health, EventRecord, EventTemplate, OptionSpec, StakeholderRelationship};
use crate::engine::random::RiskSource;
use std::collections::BTreeMap;

/// Apply a dimension-impact map to the state vector, clamping every
/// touched dimension. Names absent from the vector are ignored.
pub fn apply_impact(state: &mut BTreeMap<String, f64>, impact: &BTreeMap<String, f64>) {
    for (dimension, delta) in impact {
        if let Some(value) = state.get_mut(dimension) {
            *value = clamp_health(*value + delta);
        }
    }
}

/// Propagate an option's stakeholder-reaction map through the table.
/// Unknown stakeholder ids are ignored.
pub fn apply_reactions(
    table: &mut BTreeMap<String, StakeholderRelationship>,
    reactions: &BTreeMap<String, f64>,
) {
    for (id, change) in reactions {
        if let Some(relationship) = table.get_mut(id) {
            relationship.apply_reaction(*change);
        }
    }
}

/// Roll once against the option's risk. On a hit, pick one template
/// uniformly from the catalog and return the event record; the caller
/// applies its impact on top of the option's own.
pub fn roll_event(
    source: &mut dyn RiskSource,
    catalog: &[EventTemplate],
    option: &OptionSpec,
    round: u32,
) -> Option<EventRecord> {
    if catalog.is_empty() {
        return None;
    }
    let sample = source.roll();
    if sample >= option.risk {
        return None;
    }
    let template = &catalog[source.pick(catalog.len())];
    tracing::debug!(
        round,
        option = %option.id,
        event = %template.label,
        "adverse event triggered"
    );
    Some(EventRecord {
        round,
        label: template.label.clone(),
        impact: template.impact.clone(),
        triggered_by: option.id.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::random::{AlwaysFire, NeverFire};

    fn state() -> BTreeMap<String, f64> {
        BTreeMap::from([("a".into(), 50.0), ("b".into(), 90.0)])
    }

    fn option(risk: f64) -> OptionSpec {
        OptionSpec {
            id: "opt".into(),
            text: "Act".into(),
            impact: BTreeMap::new(),
            risk,
            reactions: BTreeMap::new(),
        }
    }

    #[test]
    fn impact_applies_and_clamps() {
        let mut state = state();
        apply_impact(
            &mut state,
            &BTreeMap::from([("a".into(), -70.0), ("b".into(), 25.0)]),
        );
        assert_eq!(state["a"], 0.0);
        assert_eq!(state["b"], 100.0);
    }

    #[test]
    fn unknown_dimension_is_ignored() {
        let mut state = state();
        apply_impact(&mut state, &BTreeMap::from([("phantom".into(), 40.0)]));
        assert_eq!(state.len(), 2);
        assert_eq!(state["a"], 50.0);
    }

    #[test]
    fn unknown_stakeholder_is_ignored() {
        let mut table = BTreeMap::new();
        apply_reactions(&mut table, &BTreeMap::from([("ghost".into(), 20.0)]));
        assert!(table.is_empty());
    }

    #[test]
    fn event_fires_when_roll_beats_risk() {
        let catalog = vec![EventTemplate {
            label: "setback".into(),
            impact: BTreeMap::from([("a".into(), -10.0)]),
        }];
        let event = roll_event(&mut AlwaysFire, &catalog, &option(0.3), 4).unwrap();
        assert_eq!(event.label, "setback");
        assert_eq!(event.round, 4);
        assert_eq!(event.triggered_by, "opt");
    }

    #[test]
    fn event_never_fires_at_zero_risk() {
        let catalog = vec![EventTemplate {
            label: "setback".into(),
            impact: BTreeMap::new(),
        }];
        // AlwaysFire rolls 0.0, but 0.0 < 0.0 does not hold
        assert!(roll_event(&mut AlwaysFire, &catalog, &option(0.0), 1).is_none());
    }

    #[test]
    fn event_suppressed_by_never_fire() {
        let catalog = vec![EventTemplate {
            label: "setback".into(),
            impact: BTreeMap::new(),
        }];
        assert!(roll_event(&mut NeverFire, &catalog, &option(1.0), 1).is_none());
    }
}
