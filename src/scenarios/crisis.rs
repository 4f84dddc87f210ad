//! Crisis leadership scenario
//!
//! A product-safety crisis at a mid-size manufacturer. Twelve rounds
//! across four phases, from the first emergency call to the post-crisis
//! reset. The script exercises all three metric shapes, the relationship
//! graph, and the full adverse-event catalog.

use super::{dim, event, opt, round, stakeholder, tier};
use crate::data::{
    MetricShape, MetricSpec, RelationshipGraph, ScenarioConfig, SnapshotSource,
};

/// Build the crisis leadership family.
pub fn create_crisis_scenario() -> ScenarioConfig {
    let rounds = vec![
        // ── Phase 1: Containment ──
        round(
            1,
            "Containment",
            "A batch defect is confirmed in your flagship product. The first injury report just landed.",
            vec![
                opt(
                    "full_recall",
                    "Order an immediate full recall before anyone asks for one",
                    &[("crisis_control", 12.0), ("financial_stability", -10.0), ("public_trust", 8.0)],
                    0.1,
                    &[("lead_regulator", 12.0), ("cfo", -8.0)],
                ),
                opt(
                    "quiet_fix",
                    "Fix the production line quietly and monitor complaints",
                    &[("financial_stability", 5.0), ("crisis_control", -8.0)],
                    0.45,
                    &[("cfo", 6.0), ("lead_regulator", -12.0)],
                ),
                opt(
                    "targeted_recall",
                    "Recall only the affected batch and publish the defect analysis",
                    &[("crisis_control", 8.0), ("public_trust", 4.0), ("financial_stability", -4.0)],
                    0.2,
                    &[("lead_regulator", 6.0)],
                ),
            ],
        ),
        round(
            2,
            "Containment",
            "A national outlet calls for comment. Your press liaison wants a decision within the hour.",
            vec![
                opt(
                    "own_the_story",
                    "Go on record yourself, admit the defect, outline the recall",
                    &[("media_standing", 10.0), ("public_trust", 8.0), ("crisis_control", 4.0)],
                    0.15,
                    &[("press_liaison", 12.0), ("board_chair", -4.0)],
                ),
                opt(
                    "written_statement",
                    "Release a lawyer-reviewed written statement only",
                    &[("media_standing", 2.0), ("regulatory_confidence", 3.0)],
                    0.2,
                    &[("press_liaison", -4.0)],
                ),
                opt(
                    "no_comment",
                    "Decline comment until the investigation concludes",
                    &[("media_standing", -10.0), ("crisis_control", -4.0)],
                    0.5,
                    &[("press_liaison", -12.0), ("board_chair", 4.0)],
                ),
            ],
        ),
        round(
            3,
            "Containment",
            "The emergency board session convenes. The chair wants a liability estimate you do not yet have.",
            vec![
                opt(
                    "honest_range",
                    "Present the honest wide range with explicit unknowns",
                    &[("crisis_control", 6.0), ("team_cohesion", 4.0)],
                    0.1,
                    &[("board_chair", 8.0), ("cfo", 6.0)],
                ),
                opt(
                    "low_anchor",
                    "Anchor low to keep the board calm and buy time",
                    &[("financial_stability", 4.0), ("crisis_control", -6.0)],
                    0.4,
                    &[("board_chair", 6.0), ("cfo", -11.0)],
                ),
                opt(
                    "defer_to_cfo",
                    "Hand the numbers to the CFO and focus on operations",
                    &[("operational_continuity", 6.0), ("team_cohesion", -3.0)],
                    0.15,
                    &[("cfo", 8.0), ("board_chair", -5.0)],
                ),
            ],
        ),
        // ── Phase 2: Stabilization ──
        round(
            4,
            "Stabilization",
            "The recall logistics are overwhelming the service network. Dealers are improvising.",
            vec![
                opt(
                    "surge_budget",
                    "Approve an emergency logistics budget and third-party processors",
                    &[("operational_continuity", 12.0), ("financial_stability", -8.0)],
                    0.1,
                    &[("ops_director", 10.0), ("cfo", -6.0)],
                ),
                opt(
                    "triage_regions",
                    "Triage by region, prioritizing markets with injury reports",
                    &[("operational_continuity", 6.0), ("crisis_control", 4.0)],
                    0.2,
                    &[("ops_director", 4.0)],
                ),
                opt(
                    "dealer_burden",
                    "Push handling costs onto the dealer network",
                    &[("financial_stability", 6.0), ("operational_continuity", -8.0), ("public_trust", -4.0)],
                    0.4,
                    &[("ops_director", -9.0)],
                ),
            ],
        ),
        round(
            5,
            "Stabilization",
            "The union demands assurances that no plant workers will be scapegoated for the defect.",
            vec![
                opt(
                    "public_assurance",
                    "Publicly commit to a blameless investigation",
                    &[("employee_morale", 10.0), ("team_cohesion", 6.0)],
                    0.1,
                    &[("union_rep", 14.0), ("board_chair", -4.0)],
                ),
                opt(
                    "private_assurance",
                    "Give the union a private commitment, nothing on record",
                    &[("employee_morale", 4.0)],
                    0.2,
                    &[("union_rep", 6.0)],
                ),
                opt(
                    "no_commitment",
                    "Refuse to prejudge the investigation's conclusions",
                    &[("employee_morale", -8.0), ("team_cohesion", -5.0)],
                    0.35,
                    &[("union_rep", -13.0), ("lead_regulator", 4.0)],
                ),
            ],
        ),
        round(
            6,
            "Stabilization",
            "The regulator opens a formal inquiry and requests internal quality records going back two years.",
            vec![
                opt(
                    "full_disclosure",
                    "Hand over everything, including the unflattering early audits",
                    &[("regulatory_confidence", 12.0), ("media_standing", -4.0)],
                    0.15,
                    &[("lead_regulator", 12.0), ("board_chair", -6.0)],
                ),
                opt(
                    "scoped_disclosure",
                    "Provide exactly what was requested, nothing more",
                    &[("regulatory_confidence", 5.0)],
                    0.2,
                    &[("lead_regulator", 4.0)],
                ),
                opt(
                    "slow_walk",
                    "Let legal slow-walk the production of records",
                    &[("regulatory_confidence", -10.0), ("crisis_control", -5.0)],
                    0.55,
                    &[("lead_regulator", -14.0), ("cfo", 4.0)],
                ),
            ],
        ),
        // ── Phase 3: Recovery ──
        round(
            7,
            "Recovery",
            "Recall completion passes 60%. Finance flags that quarterly guidance is no longer achievable.",
            vec![
                opt(
                    "early_warning",
                    "Pre-announce the miss with a detailed recovery bridge",
                    &[("financial_stability", -4.0), ("public_trust", 6.0), ("crisis_control", 5.0)],
                    0.1,
                    &[("cfo", 10.0), ("board_chair", 6.0)],
                ),
                opt(
                    "wait_for_quarter",
                    "Say nothing until the scheduled earnings call",
                    &[("financial_stability", 2.0), ("public_trust", -5.0)],
                    0.35,
                    &[("cfo", -7.0)],
                ),
                opt(
                    "aggressive_cuts",
                    "Protect guidance with across-the-board spending cuts",
                    &[("financial_stability", 8.0), ("employee_morale", -10.0), ("operational_continuity", -6.0)],
                    0.3,
                    &[("cfo", 6.0), ("union_rep", -12.0)],
                ),
            ],
        ),
        round(
            8,
            "Recovery",
            "An engineer's internal memo warning about the defect months earlier surfaces in the press.",
            vec![
                opt(
                    "acknowledge_failure",
                    "Acknowledge the missed warning and name the process fix",
                    &[("public_trust", 8.0), ("media_standing", 6.0), ("team_cohesion", 4.0)],
                    0.2,
                    &[("press_liaison", 8.0), ("union_rep", 8.0), ("board_chair", -5.0)],
                ),
                opt(
                    "context_statement",
                    "Stress that the memo was one signal among hundreds",
                    &[("media_standing", -3.0), ("regulatory_confidence", -4.0)],
                    0.35,
                    &[("lead_regulator", -6.0)],
                ),
                opt(
                    "investigate_leak",
                    "Launch a leak investigation before addressing the memo",
                    &[("employee_morale", -12.0), ("media_standing", -8.0)],
                    0.5,
                    &[("union_rep", -11.0), ("press_liaison", -8.0)],
                ),
            ],
        ),
        round(
            9,
            "Recovery",
            "The ops director proposes reopening the reworked line a week ahead of the audited schedule.",
            vec![
                opt(
                    "hold_schedule",
                    "Hold the audited schedule and eat the extra week",
                    &[("regulatory_confidence", 8.0), ("operational_continuity", -3.0)],
                    0.1,
                    &[("lead_regulator", 8.0), ("ops_director", -6.0)],
                ),
                opt(
                    "early_restart",
                    "Restart early with doubled inline inspection",
                    &[("operational_continuity", 10.0), ("financial_stability", 5.0), ("regulatory_confidence", -5.0)],
                    0.4,
                    &[("ops_director", 9.0), ("lead_regulator", -7.0)],
                ),
                opt(
                    "joint_review",
                    "Invite the regulator to co-review an early restart",
                    &[("regulatory_confidence", 5.0), ("operational_continuity", 5.0)],
                    0.2,
                    &[("lead_regulator", 6.0), ("ops_director", 4.0)],
                ),
            ],
        ),
        // ── Phase 4: Renewal ──
        round(
            10,
            "Renewal",
            "The inquiry closes with findings of process failure but no intent. The board debates leadership changes.",
            vec![
                opt(
                    "own_accountability",
                    "Take personal accountability and restructure quality reporting to the CEO",
                    &[("public_trust", 10.0), ("team_cohesion", 6.0), ("crisis_control", 5.0)],
                    0.1,
                    &[("board_chair", 8.0), ("union_rep", 6.0)],
                ),
                opt(
                    "replace_quality_head",
                    "Replace the head of quality and call it closure",
                    &[("crisis_control", 3.0), ("employee_morale", -8.0)],
                    0.3,
                    &[("board_chair", 5.0), ("union_rep", -9.0)],
                ),
                opt(
                    "no_changes",
                    "Declare the findings vindication and change nothing",
                    &[("public_trust", -8.0), ("regulatory_confidence", -6.0)],
                    0.45,
                    &[("lead_regulator", -8.0), ("press_liaison", -5.0)],
                ),
            ],
        ),
        round(
            11,
            "Renewal",
            "Marketing wants a major campaign to relaunch the brand. Finance calls it premature.",
            vec![
                opt(
                    "proof_first",
                    "Delay the campaign until six months of clean quality data exists",
                    &[("public_trust", 6.0), ("media_standing", 3.0)],
                    0.1,
                    &[("cfo", 7.0), ("press_liaison", -4.0)],
                ),
                opt(
                    "full_campaign",
                    "Launch the campaign now to reclaim lost share",
                    &[("financial_stability", 8.0), ("media_standing", 6.0), ("public_trust", -5.0)],
                    0.4,
                    &[("press_liaison", 8.0), ("cfo", -6.0)],
                ),
                opt(
                    "customer_letter",
                    "Replace the campaign with a direct letter from you to every affected customer",
                    &[("public_trust", 9.0), ("financial_stability", -2.0)],
                    0.15,
                    &[("press_liaison", 5.0)],
                ),
            ],
        ),
        round(
            12,
            "Renewal",
            "One year on, you present the crisis retrospective. The board asks what changes permanently.",
            vec![
                opt(
                    "systemic_reform",
                    "Commit to an independent safety board with published findings",
                    &[("regulatory_confidence", 10.0), ("public_trust", 8.0), ("crisis_control", 6.0)],
                    0.05,
                    &[("lead_regulator", 10.0), ("board_chair", 6.0), ("union_rep", 6.0)],
                ),
                opt(
                    "internal_reform",
                    "Strengthen internal audit and leave governance untouched",
                    &[("crisis_control", 5.0), ("regulatory_confidence", 3.0)],
                    0.15,
                    &[("board_chair", 4.0)],
                ),
                opt(
                    "move_on",
                    "Declare the crisis over and refocus entirely on growth",
                    &[("financial_stability", 6.0), ("regulatory_confidence", -5.0), ("employee_morale", -4.0)],
                    0.35,
                    &[("cfo", 6.0), ("lead_regulator", -7.0)],
                ),
            ],
        ),
    ];

    ScenarioConfig {
        key: "crisis_leadership".into(),
        title: "Crisis Leadership: The Batch 47 Recall".into(),
        dimensions: vec![
            dim("crisis_control", 35.0, 0.20),
            dim("public_trust", 50.0, 0.15),
            dim("financial_stability", 55.0, 0.15),
            dim("team_cohesion", 60.0, 0.10),
            dim("operational_continuity", 45.0, 0.10),
            dim("media_standing", 40.0, 0.10),
            dim("regulatory_confidence", 50.0, 0.10),
            dim("employee_morale", 55.0, 0.10),
        ],
        stakeholders: vec![
            stakeholder("board_chair", "Marianne Holt, Board Chair", 90.0, 55.0, 60.0),
            stakeholder("cfo", "Devi Raman, CFO", 80.0, 60.0, 65.0),
            stakeholder("union_rep", "Karl Jensen, Union Representative", 60.0, 40.0, 35.0),
            stakeholder("lead_regulator", "Agency Lead Inspector", 85.0, 50.0, 50.0),
            stakeholder("press_liaison", "Tomas Aguilar, Press Liaison", 50.0, 55.0, 60.0),
            stakeholder("ops_director", "Ingrid Bauer, Operations Director", 70.0, 65.0, 70.0),
        ],
        graph: RelationshipGraph {
            alliances: vec![
                ("board_chair".into(), "cfo".into()),
                ("ops_director".into(), "press_liaison".into()),
            ],
            tensions: vec![
                ("union_rep".into(), "cfo".into()),
                ("lead_regulator".into(), "board_chair".into()),
            ],
        },
        rounds,
        event_catalog: vec![
            event(
                "leaked_memo",
                &[("media_standing", -8.0), ("public_trust", -6.0)],
            ),
            event(
                "key_resignation",
                &[("team_cohesion", -10.0), ("operational_continuity", -5.0)],
            ),
            event(
                "regulator_probe",
                &[("regulatory_confidence", -9.0), ("crisis_control", -4.0)],
            ),
            event(
                "supplier_default",
                &[("operational_continuity", -10.0), ("financial_stability", -6.0)],
            ),
            event(
                "viral_backlash",
                &[("public_trust", -10.0), ("media_standing", -7.0)],
            ),
        ],
        metrics: vec![
            MetricSpec {
                name: "stakeholder_confidence".into(),
                shape: MetricShape::Snapshot(SnapshotSource::StakeholderTrustMean),
            },
            MetricSpec {
                name: "public_perception".into(),
                shape: MetricShape::Snapshot(SnapshotSource::DimensionMean(vec![
                    "public_trust".into(),
                    "media_standing".into(),
                ])),
            },
            MetricSpec {
                name: "momentum".into(),
                shape: MetricShape::Accumulating {
                    source: "crisis_control".into(),
                    blend: 0.08,
                },
            },
            MetricSpec {
                name: "recovery_progress".into(),
                shape: MetricShape::Progress {
                    key_dimension: "crisis_control".into(),
                },
            },
        ],
        progress_metric: "recovery_progress".into(),
        rating_tiers: vec![
            tier(90, "A", "Master of the Storm", "You turned a company-threatening crisis into proof of leadership."),
            tier(80, "B", "Steady Hand", "Serious damage, but trust and operations recovered under your watch."),
            tier(70, "C", "Weathered Through", "The company survived; several relationships did not."),
            tier(55, "D", "Bruised", "The crisis is over, and so is much of your credibility."),
            tier(0, "F", "Overwhelmed", "The crisis ran the company; you ran behind it."),
        ],
    }
}
