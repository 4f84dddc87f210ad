//! Organizational transformation scenario
//!
//! An eight-round digital transformation at a regional insurer, from
//! diagnosis through embedding. Lighter than the crisis family; pairs
//! well with it for exercising shared option catalogs across different
//! dimension sets.

use super::{dim, event, opt, round, stakeholder, tier};
use crate::data::{
    MetricShape, MetricSpec, RelationshipGraph, ScenarioConfig, SnapshotSource,
};

/// Build the organizational transformation family.
pub fn create_transformation_scenario() -> ScenarioConfig {
    let rounds = vec![
        // ── Phase 1: Diagnosis ──
        round(
            1,
            "Diagnosis",
            "The board approved the transformation. Your first move sets the tone for two years.",
            vec![
                opt(
                    "listening_tour",
                    "Spend a month on a listening tour before announcing anything",
                    &[("change_readiness", 8.0), ("cultural_alignment", 6.0), ("business_performance", -2.0)],
                    0.1,
                    &[("frontline_voice", 10.0), ("ceo_sponsor", -4.0)],
                ),
                opt(
                    "big_announcement",
                    "Announce the full program with targets on day one",
                    &[("vision_clarity", 10.0), ("change_readiness", -6.0)],
                    0.35,
                    &[("ceo_sponsor", 8.0), ("frontline_voice", -8.0)],
                ),
                opt(
                    "pilot_first",
                    "Start with one quiet pilot in the claims division",
                    &[("delivery_capability", 6.0), ("vision_clarity", -3.0)],
                    0.15,
                    &[("division_head", 8.0)],
                ),
            ],
        ),
        round(
            2,
            "Diagnosis",
            "The capability audit is brutal: legacy systems and skills gaps everywhere. The CEO asks how bad it is.",
            vec![
                opt(
                    "full_transparency",
                    "Share the unvarnished audit with the whole leadership team",
                    &[("vision_clarity", 6.0), ("sponsor_support", 4.0), ("cultural_alignment", 3.0)],
                    0.15,
                    &[("ceo_sponsor", 8.0), ("it_lead", -5.0)],
                ),
                opt(
                    "softened_summary",
                    "Soften the findings to protect early momentum",
                    &[("sponsor_support", 3.0), ("vision_clarity", -5.0)],
                    0.4,
                    &[("it_lead", 5.0), ("ceo_sponsor", -6.0)],
                ),
                opt(
                    "external_benchmark",
                    "Commission an external benchmark before presenting anything",
                    &[("delivery_capability", 4.0), ("business_performance", -2.0)],
                    0.1,
                    &[("division_head", 4.0)],
                ),
            ],
        ),
        // ── Phase 2: Design ──
        round(
            3,
            "Design",
            "Two credible operating models are on the table: product-led squads or strengthened divisions.",
            vec![
                opt(
                    "squad_model",
                    "Commit to cross-functional squads and dissolve the old silos",
                    &[("delivery_capability", 10.0), ("cultural_alignment", -6.0)],
                    0.35,
                    &[("it_lead", 9.0), ("division_head", -11.0)],
                ),
                opt(
                    "hybrid_model",
                    "Pilot squads in two divisions, keep the rest intact",
                    &[("delivery_capability", 5.0), ("change_readiness", 4.0)],
                    0.15,
                    &[("division_head", 4.0), ("it_lead", 4.0)],
                ),
                opt(
                    "strengthen_divisions",
                    "Keep divisions and fund their own digital teams",
                    &[("cultural_alignment", 6.0), ("delivery_capability", -4.0)],
                    0.2,
                    &[("division_head", 10.0), ("it_lead", -7.0)],
                ),
            ],
        ),
        round(
            4,
            "Design",
            "HR warns that the reskilling budget covers barely half the affected roles.",
            vec![
                opt(
                    "reskill_all",
                    "Double the reskilling budget at the cost of the tooling roadmap",
                    &[("cultural_alignment", 8.0), ("change_readiness", 6.0), ("delivery_capability", -5.0)],
                    0.1,
                    &[("hr_lead", 11.0), ("frontline_voice", 9.0), ("it_lead", -6.0)],
                ),
                opt(
                    "targeted_reskill",
                    "Reskill critical roles, offer transitions for the rest",
                    &[("change_readiness", 3.0), ("business_performance", 3.0)],
                    0.2,
                    &[("hr_lead", 4.0)],
                ),
                opt(
                    "hire_over_train",
                    "Hire digital talent externally instead of retraining",
                    &[("delivery_capability", 8.0), ("cultural_alignment", -9.0), ("change_readiness", -5.0)],
                    0.45,
                    &[("frontline_voice", -12.0), ("hr_lead", -8.0), ("it_lead", 6.0)],
                ),
            ],
        ),
        // ── Phase 3: Rollout ──
        round(
            5,
            "Rollout",
            "The first squad release slips three weeks and a division head calls the model a failure.",
            vec![
                opt(
                    "defend_publicly",
                    "Defend the team publicly and publish the slip's root cause",
                    &[("cultural_alignment", 6.0), ("vision_clarity", 4.0)],
                    0.15,
                    &[("it_lead", 8.0), ("division_head", -6.0)],
                ),
                opt(
                    "quiet_fix",
                    "Fix the pipeline quietly and say nothing",
                    &[("delivery_capability", 3.0), ("vision_clarity", -4.0)],
                    0.3,
                    &[("division_head", 3.0)],
                ),
                opt(
                    "concede_ground",
                    "Return two squads to divisional control as a gesture",
                    &[("cultural_alignment", 3.0), ("delivery_capability", -7.0), ("vision_clarity", -5.0)],
                    0.35,
                    &[("division_head", 9.0), ("it_lead", -10.0)],
                ),
            ],
        ),
        round(
            6,
            "Rollout",
            "Mid-year results dip and the CFO-minded board members question the program's cost line.",
            vec![
                opt(
                    "value_evidence",
                    "Present per-initiative value tracking, including the failures",
                    &[("sponsor_support", 9.0), ("vision_clarity", 5.0)],
                    0.1,
                    &[("ceo_sponsor", 9.0)],
                ),
                opt(
                    "scope_cut",
                    "Cut the program's scope by a third to protect the P&L",
                    &[("business_performance", 7.0), ("change_readiness", -6.0), ("delivery_capability", -4.0)],
                    0.3,
                    &[("ceo_sponsor", 4.0), ("it_lead", -7.0)],
                ),
                opt(
                    "double_down",
                    "Ask the board for more budget against the original case",
                    &[("sponsor_support", -6.0), ("delivery_capability", 6.0)],
                    0.5,
                    &[("ceo_sponsor", -8.0)],
                ),
            ],
        ),
        // ── Phase 4: Embedding ──
        round(
            7,
            "Embedding",
            "Adoption is real but uneven. Claims thrives; underwriting quietly reverted to old workflows.",
            vec![
                opt(
                    "peer_exchange",
                    "Put underwriting staff inside the claims squads for a quarter",
                    &[("cultural_alignment", 8.0), ("change_readiness", 6.0), ("business_performance", -2.0)],
                    0.15,
                    &[("frontline_voice", 8.0), ("division_head", 4.0)],
                ),
                opt(
                    "mandate_tools",
                    "Decommission the legacy workflow tools on a hard date",
                    &[("delivery_capability", 6.0), ("cultural_alignment", -7.0)],
                    0.45,
                    &[("frontline_voice", -11.0), ("it_lead", 7.0)],
                ),
                opt(
                    "accept_pace",
                    "Let underwriting move at its own pace",
                    &[("cultural_alignment", 2.0), ("vision_clarity", -5.0), ("delivery_capability", -3.0)],
                    0.25,
                    &[("division_head", 5.0)],
                ),
            ],
        ),
        round(
            8,
            "Embedding",
            "The program formally ends this quarter. You choose what the organization keeps.",
            vec![
                opt(
                    "institutionalize",
                    "Fold the transformation office into line management with standing rituals",
                    &[("cultural_alignment", 9.0), ("delivery_capability", 5.0), ("vision_clarity", 4.0)],
                    0.05,
                    &[("ceo_sponsor", 7.0), ("hr_lead", 6.0), ("frontline_voice", 5.0)],
                ),
                opt(
                    "keep_office",
                    "Keep a permanent transformation office with its own budget",
                    &[("delivery_capability", 4.0), ("business_performance", -3.0), ("cultural_alignment", -4.0)],
                    0.25,
                    &[("division_head", -6.0), ("it_lead", 5.0)],
                ),
                opt(
                    "declare_done",
                    "Disband everything and declare the new normal",
                    &[("business_performance", 4.0), ("change_readiness", -8.0)],
                    0.4,
                    &[("hr_lead", -6.0), ("frontline_voice", -5.0)],
                ),
            ],
        ),
    ];

    ScenarioConfig {
        key: "organizational_transformation".into(),
        title: "Transformation: Two Years at Meridian Mutual".into(),
        dimensions: vec![
            dim("vision_clarity", 45.0, 0.25),
            dim("change_readiness", 40.0, 0.20),
            dim("delivery_capability", 35.0, 0.15),
            dim("cultural_alignment", 50.0, 0.15),
            dim("sponsor_support", 60.0, 0.15),
            dim("business_performance", 55.0, 0.10),
        ],
        stakeholders: vec![
            stakeholder("ceo_sponsor", "Elena Vasquez, CEO", 95.0, 65.0, 70.0),
            stakeholder("division_head", "Robert Ashworth, Underwriting Head", 75.0, 45.0, 40.0),
            stakeholder("hr_lead", "Priya Nair, Head of People", 65.0, 60.0, 65.0),
            stakeholder("it_lead", "Sam Okafor, CTO", 70.0, 55.0, 60.0),
            stakeholder("frontline_voice", "Staff Council Delegate", 55.0, 40.0, 45.0),
        ],
        graph: RelationshipGraph {
            alliances: vec![
                ("ceo_sponsor".into(), "hr_lead".into()),
                ("hr_lead".into(), "frontline_voice".into()),
            ],
            tensions: vec![
                ("division_head".into(), "it_lead".into()),
                ("frontline_voice".into(), "division_head".into()),
            ],
        },
        rounds,
        event_catalog: vec![
            event(
                "vendor_slip",
                &[("delivery_capability", -8.0), ("business_performance", -4.0)],
            ),
            event(
                "talent_poaching",
                &[("delivery_capability", -7.0), ("cultural_alignment", -4.0)],
            ),
            event(
                "rumor_mill",
                &[("change_readiness", -8.0), ("cultural_alignment", -5.0)],
            ),
            event(
                "board_impatience",
                &[("sponsor_support", -9.0), ("vision_clarity", -3.0)],
            ),
            event(
                "system_outage",
                &[("business_performance", -8.0), ("delivery_capability", -5.0)],
            ),
        ],
        metrics: vec![
            MetricSpec {
                name: "buy_in".into(),
                shape: MetricShape::Snapshot(SnapshotSource::StakeholderTrustMean),
            },
            MetricSpec {
                name: "organizational_health".into(),
                shape: MetricShape::Snapshot(SnapshotSource::DimensionMean(vec![
                    "cultural_alignment".into(),
                    "change_readiness".into(),
                ])),
            },
            MetricSpec {
                name: "adoption".into(),
                shape: MetricShape::Accumulating {
                    source: "change_readiness".into(),
                    blend: 0.1,
                },
            },
            MetricSpec {
                name: "transformation_progress".into(),
                shape: MetricShape::Progress {
                    key_dimension: "vision_clarity".into(),
                },
            },
        ],
        progress_metric: "transformation_progress".into(),
        rating_tiers: vec![
            tier(90, "A", "Transformation Architect", "The new ways of working outlived the program."),
            tier(80, "B", "Change Leader", "Most of the organization crossed the bridge with you."),
            tier(70, "C", "Partial Progress", "Pockets of the new model survive amid the old habits."),
            tier(55, "D", "Initiative Fatigue", "Another program the organization endured rather than embraced."),
            tier(0, "F", "Reverted", "Two years later, nothing changed but the org chart."),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transformation_config_validates() {
        create_transformation_scenario().validate().unwrap();
    }

    #[test]
    fn families_share_no_dimension_assumptions() {
        // Options from this family reference only its own dimensions, but
        // the engine tolerates foreign names; both facts keep catalogs
        // shareable across families.
        let config = create_transformation_scenario();
        let dims: Vec<&str> = config.dimensions.iter().map(|d| d.name.as_str()).collect();
        for round in &config.rounds {
            for option in &round.options {
                for name in option.impact.keys() {
                    assert!(dims.contains(&name.as_str()));
                }
            }
        }
    }
}
