//! Stakeholder relationships
//!
//! One mutable record per stakeholder, created at simulation construction
//! and mutated only by decision processing. Influence is a static copy of
//! the roster baseline.

use super::{clamp_health, RelationshipGraph, StakeholderSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Baseline satisfaction for a freshly seeded relationship.
pub const INITIAL_SATISFACTION: f64 = 60.0;
/// Baseline engagement for a freshly seeded relationship.
pub const INITIAL_ENGAGEMENT: f64 = 50.0;

/// Trust absorbs 60% of a reaction delta, satisfaction 40%.
const TRUST_SHARE: f64 = 0.6;
const SATISFACTION_SHARE: f64 = 0.4;

/// Reactions past this magnitude also nudge engagement by a fixed step.
/// The band is a hysteresis threshold, deliberately independent of the
/// trust/satisfaction scaling.
const ENGAGEMENT_THRESHOLD: f64 = 10.0;
const ENGAGEMENT_STEP: f64 = 5.0;

/// Mutable relationship record for one stakeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StakeholderRelationship {
    pub name: String,
    pub trust: f64,
    pub alignment: f64,
    pub satisfaction: f64,
    /// Static copy of the roster baseline; never mutated by decisions.
    pub influence: f64,
    pub engagement: f64,
}

impl StakeholderRelationship {
    fn seed(spec: &StakeholderSpec) -> Self {
        Self {
            name: spec.name.clone(),
            trust: clamp_health(spec.trust),
            alignment: clamp_health(spec.alignment),
            satisfaction: INITIAL_SATISFACTION,
            influence: spec.influence,
            engagement: INITIAL_ENGAGEMENT,
        }
    }

    /// Apply one option reaction delta.
    ///
    /// The two engagement checks are independent, not an else-branch:
    /// a change above +10 and below -10 can never both hold, but keeping
    /// them separate preserves the scripted behavior exactly.
    pub fn apply_reaction(&mut self, change: f64) {
        self.trust = clamp_health(self.trust + change * TRUST_SHARE);
        self.satisfaction = clamp_health(self.satisfaction + change * SATISFACTION_SHARE);
        if change > ENGAGEMENT_THRESHOLD {
            self.engagement = clamp_health(self.engagement + ENGAGEMENT_STEP);
        }
        if change < -ENGAGEMENT_THRESHOLD {
            self.engagement = clamp_health(self.engagement - ENGAGEMENT_STEP);
        }
    }
}

/// Build the relationship table from the roster, then apply the declared
/// alliance/tension graph. Pairs naming an unknown stakeholder are skipped.
pub fn seed_relationships(
    roster: &[StakeholderSpec],
    graph: &RelationshipGraph,
) -> BTreeMap<String, StakeholderRelationship> {
    let mut table: BTreeMap<String, StakeholderRelationship> = roster
        .iter()
        .map(|spec| (spec.id.clone(), StakeholderRelationship::seed(spec)))
        .collect();

    for (left, right) in &graph.alliances {
        if !table.contains_key(left) || !table.contains_key(right) {
            continue;
        }
        for id in [left, right] {
            let rel = table.get_mut(id).unwrap();
            rel.trust = clamp_health(rel.trust + 5.0);
        }
    }
    for (left, right) in &graph.tensions {
        if !table.contains_key(left) || !table.contains_key(right) {
            continue;
        }
        for id in [left, right] {
            let rel = table.get_mut(id).unwrap();
            rel.alignment = clamp_health(rel.alignment - 5.0);
        }
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(id: &str, trust: f64, alignment: f64) -> StakeholderSpec {
        StakeholderSpec {
            id: id.into(),
            name: format!("Stakeholder {id}"),
            influence: 70.0,
            trust,
            alignment,
        }
    }

    #[test]
    fn seeding_defaults() {
        let table = seed_relationships(&[spec("ceo", 55.0, 45.0)], &RelationshipGraph::default());
        let rel = &table["ceo"];
        assert_eq!(rel.trust, 55.0);
        assert_eq!(rel.alignment, 45.0);
        assert_eq!(rel.satisfaction, INITIAL_SATISFACTION);
        assert_eq!(rel.engagement, INITIAL_ENGAGEMENT);
        assert_eq!(rel.influence, 70.0);
    }

    #[test]
    fn alliances_raise_trust_for_both_members() {
        let graph = RelationshipGraph {
            alliances: vec![("a".into(), "b".into())],
            tensions: vec![],
        };
        let table = seed_relationships(&[spec("a", 50.0, 50.0), spec("b", 40.0, 50.0)], &graph);
        assert_eq!(table["a"].trust, 55.0);
        assert_eq!(table["b"].trust, 45.0);
    }

    #[test]
    fn tensions_lower_alignment_for_both_members() {
        let graph = RelationshipGraph {
            alliances: vec![],
            tensions: vec![("a".into(), "b".into())],
        };
        let table = seed_relationships(&[spec("a", 50.0, 50.0), spec("b", 50.0, 30.0)], &graph);
        assert_eq!(table["a"].alignment, 45.0);
        assert_eq!(table["b"].alignment, 25.0);
    }

    #[test]
    fn graph_pairs_with_unknown_ids_are_skipped() {
        let graph = RelationshipGraph {
            alliances: vec![("a".into(), "ghost".into())],
            tensions: vec![("ghost".into(), "a".into())],
        };
        let table = seed_relationships(&[spec("a", 50.0, 50.0)], &graph);
        assert_eq!(table["a"].trust, 50.0);
        assert_eq!(table["a"].alignment, 50.0);
    }

    #[test]
    fn reaction_splits_between_trust_and_satisfaction() {
        let mut rel = StakeholderRelationship::seed(&spec("s", 50.0, 50.0));
        rel.apply_reaction(10.0);
        assert_eq!(rel.trust, 56.0);
        assert_eq!(rel.satisfaction, 64.0);
        // +10 is not strictly above the threshold
        assert_eq!(rel.engagement, INITIAL_ENGAGEMENT);
    }

    #[test]
    fn large_reactions_nudge_engagement() {
        let mut rel = StakeholderRelationship::seed(&spec("s", 50.0, 50.0));
        rel.apply_reaction(11.0);
        assert_eq!(rel.engagement, 55.0);
        rel.apply_reaction(-11.0);
        assert_eq!(rel.engagement, 50.0);
    }

    #[test]
    fn reactions_clamp_at_bounds() {
        let mut rel = StakeholderRelationship::seed(&spec("s", 98.0, 50.0));
        for _ in 0..20 {
            rel.apply_reaction(15.0);
        }
        assert_eq!(rel.trust, 100.0);
        assert_eq!(rel.satisfaction, 100.0);
        assert_eq!(rel.engagement, 100.0);
        for _ in 0..60 {
            rel.apply_reaction(-15.0);
        }
        assert_eq!(rel.trust, 0.0);
        assert_eq!(rel.satisfaction, 0.0);
        assert_eq!(rel.engagement, 0.0);
    }
}
