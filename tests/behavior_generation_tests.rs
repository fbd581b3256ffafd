//! Tests for behavior generation

use std::collections::HashMap;
use visitor_simulator::behavior::{targets_for, ACTION_TARGETS};
use visitor_simulator::*;

/// Every generated behavior has a positive duration inside its action range
#[test]
fn test_durations_follow_action_ranges() {
    let mut generator = BehaviorGenerator::with_seed(1);
    let visitor = VisitorId::new();

    for _ in 0..10_000 {
        let behavior = generator.generate_behavior(visitor);
        assert!(behavior.duration > 0);
        let range = match behavior.action {
            BehaviorAction::PageView => 30..150,
            BehaviorAction::Click => 1..6,
            BehaviorAction::FormInteraction => 60..240,
            BehaviorAction::Scroll => 10..40,
            BehaviorAction::Exit => panic!("exit is never generated"),
        };
        assert!(range.contains(&behavior.duration), "{:?}", behavior);
    }
}

/// Actions are picked uniformly across the four categories
#[test]
fn test_action_distribution() {
    let mut generator = BehaviorGenerator::with_seed(2);
    let visitor = VisitorId::new();
    let samples = 20_000;
    let mut counts: HashMap<BehaviorAction, usize> = HashMap::new();

    for _ in 0..samples {
        *counts.entry(generator.generate_behavior(visitor).action).or_default() += 1;
    }

    assert_eq!(counts.len(), ACTION_TARGETS.len());
    for count in counts.values() {
        let share = *count as f64 / samples as f64;
        assert!((share - 0.25).abs() < 0.02, "share {}", share);
    }
}

/// Targets come from the catalog of the chosen action
#[test]
fn test_targets_match_action() {
    let mut generator = BehaviorGenerator::with_seed(3);
    let visitor = VisitorId::new();

    for _ in 0..2_000 {
        let behavior = generator.generate_behavior(visitor);
        assert!(targets_for(behavior.action).contains(&behavior.target.as_str()));
    }
    assert!(targets_for(BehaviorAction::PageView).contains(&"dashboard"));
    assert!(targets_for(BehaviorAction::Click).contains(&"cta-button"));
}

/// The visitor id is carried through without validation
#[test]
fn test_visitor_id_not_validated() {
    let mut generator = BehaviorGenerator::new();
    let unknown = VisitorId::new();
    let behavior = generator.generate_behavior(unknown);
    assert_eq!(behavior.visitor_id, unknown);
}

/// Contact form submissions are long form interactions
#[test]
fn test_form_submission_event() {
    let visitor = VisitorId::new();
    let behavior = VisitorBehavior::form_submission(visitor);
    assert_eq!(behavior.action, BehaviorAction::FormInteraction);
    assert_eq!(behavior.target, "contact-form");
    assert_eq!(behavior.duration, 120);
}

/// Behavior JSON uses camelCase keys and snake_case actions
#[test]
fn test_behavior_serialization() {
    let behavior = BehaviorGenerator::with_seed(4).generate_behavior(VisitorId::new());
    let json = serde_json::to_value(&behavior).unwrap();

    assert!(json["id"].as_str().unwrap().starts_with("BHV_"));
    assert!(json["visitorId"].as_str().unwrap().starts_with("VIS_"));
    assert_eq!(json["action"], behavior.action.as_str());
}
