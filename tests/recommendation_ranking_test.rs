mod common;

use chrono::{DateTime, Utc};
use pretty_assertions::assert_eq;
use program_health::recommendations::rank;
use program_health::{
    generate_recommendations, group_snapshots, PortfolioInput, Priority, ProgramSnapshot,
};

fn portfolio() -> (Vec<ProgramSnapshot>, DateTime<Utc>) {
    let input: PortfolioInput = serde_json::from_str(common::PORTFOLIO_JSON).unwrap();
    let as_of = DateTime::parse_from_rfc3339(common::AS_OF)
        .unwrap()
        .with_timezone(&Utc);
    (group_snapshots(input), as_of)
}

#[test]
fn critical_items_lead_in_emission_order() {
    let (snapshots, as_of) = portfolio();

    let recs = generate_recommendations(&snapshots, as_of, None);
    let head: Vec<(&str, Option<i64>)> = recs
        .iter()
        .take(3)
        .map(|r| (r.title.as_str(), r.program_id))
        .collect();

    assert_eq!(
        head,
        vec![
            ("Create WBS", Some(2)),
            ("Resolve Blocked Dependencies", Some(3)),
            ("Implement Risk Response Plans", Some(3)),
        ]
    );
    assert_eq!(recs.len(), 15);
}

#[test]
fn priorities_never_increase_down_the_list() {
    let (snapshots, as_of) = portfolio();

    let recs = generate_recommendations(&snapshots, as_of, None);

    assert!(recs
        .windows(2)
        .all(|w| w[0].priority.weight() >= w[1].priority.weight()));
}

#[test]
fn portfolio_rules_rank_among_program_rules() {
    let (snapshots, as_of) = portfolio();

    let recs = generate_recommendations(&snapshots, as_of, None);
    let portfolio: Vec<(&str, Priority)> = recs
        .iter()
        .filter(|r| r.program_id.is_none())
        .map(|r| (r.title.as_str(), r.priority))
        .collect();

    assert_eq!(
        portfolio,
        vec![
            ("Perform Portfolio Risk Assessment", Priority::High),
            ("Establish PMO Governance", Priority::Medium),
        ]
    );
    // Last of the high group, after every program-level high item
    let risk_review = recs
        .iter()
        .position(|r| r.title == "Perform Portfolio Risk Assessment")
        .unwrap();
    assert_eq!(recs[risk_review + 1].priority, Priority::Medium);
}

#[test]
fn healthy_program_gets_no_advice() {
    let (snapshots, as_of) = portfolio();

    let recs = generate_recommendations(&snapshots, as_of, None);

    assert!(recs.iter().all(|r| r.program_id != Some(1)));
}

#[test]
fn limit_is_a_prefix_of_the_full_ranking() {
    let (snapshots, as_of) = portfolio();

    let full = generate_recommendations(&snapshots, as_of, None);
    let daily = generate_recommendations(&snapshots, as_of, Some(8));

    assert_eq!(daily.len(), 8);
    assert_eq!(daily.as_slice(), &full[..8]);
    assert_eq!(rank(full.clone(), Some(0)), vec![]);
    assert_eq!(rank(full.clone(), Some(100)), full);
}

#[test]
fn empty_portfolio_has_no_recommendations() {
    let recs = generate_recommendations(&[], Utc::now(), None);
    assert!(recs.is_empty());
}
