//! Tests for analytics recomputation

use chrono::{Duration, Utc};
use visitor_simulator::simulation::{recompute, AnalyticsAggregator, InterestCount};
use visitor_simulator::*;

fn persona(interests: &[&str], location: &str, duration: u32) -> VisitorPersona {
    let mut persona = PersonaGenerator::with_seed(1).generate_persona();
    persona.interests = interests.iter().map(|s| s.to_string()).collect();
    persona.location = location.to_string();
    persona.session_duration = duration;
    persona.timestamp = Utc::now();
    persona
}

const NO_BEHAVIORS: &[VisitorBehavior] = &[];

/// Zero visitors yield a zero average
#[test]
fn test_empty_average() {
    let analytics = recompute(&[], NO_BEHAVIORS, Utc::now());
    assert_eq!(analytics.total_visitors, 0);
    assert_eq!(analytics.avg_session_duration, 0);
    assert!(analytics.top_interests.is_empty());
}

/// Average of 100, 200 and 300 is 200
#[test]
fn test_average_session_duration() {
    let visitors = [
        persona(&["A", "B"], "Austin, TX", 100),
        persona(&["A", "B"], "Austin, TX", 200),
        persona(&["A", "B"], "Austin, TX", 300),
    ];
    assert_eq!(recompute(&visitors, NO_BEHAVIORS, Utc::now()).avg_session_duration, 200);
}

/// Interest counts {A:3, B:1, C:2} rank as A, C, B
#[test]
fn test_top_interest_ordering() {
    let visitors = [
        persona(&["A", "B"], "Austin, TX", 100),
        persona(&["A", "C"], "Austin, TX", 100),
        persona(&["A", "C"], "Austin, TX", 100),
    ];
    let analytics = recompute(&visitors, NO_BEHAVIORS, Utc::now());

    assert_eq!(
        analytics.top_interests,
        vec![
            InterestCount { interest: "A".to_string(), count: 3 },
            InterestCount { interest: "C".to_string(), count: 2 },
            InterestCount { interest: "B".to_string(), count: 1 },
        ]
    );
}

/// Top interests keep at most five entries and ties stay in first-seen order
#[test]
fn test_top_interests_truncated() {
    let visitors = [
        persona(&["A", "B", "C", "D"], "Austin, TX", 100),
        persona(&["E", "F", "G", "A"], "Austin, TX", 100),
    ];
    let analytics = recompute(&visitors, NO_BEHAVIORS, Utc::now());
    let names: Vec<_> = analytics.top_interests.iter().map(|i| i.interest.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C", "D", "E"]);
}

/// Locations are ranked and truncated to five
#[test]
fn test_location_breakdown() {
    let cities = ["Austin, TX", "Denver, CO", "Boston, MA", "Seattle, WA", "Berlin, DE", "London, UK"];
    let mut visitors: Vec<_> = cities.iter().map(|c| persona(&["A", "B"], c, 100)).collect();
    visitors.push(persona(&["A", "B"], "London, UK", 100));

    let analytics = recompute(&visitors, NO_BEHAVIORS, Utc::now());
    assert_eq!(analytics.location_breakdown.len(), 5);
    assert_eq!(analytics.location_breakdown[0].location, "London, UK");
    assert_eq!(analytics.location_breakdown[0].count, 2);
    assert_eq!(analytics.location_breakdown[1].location, "Austin, TX");
}

/// Only visitors newer than five minutes count as active
#[test]
fn test_active_visitors() {
    let now = Utc::now();
    let mut recent = persona(&["A", "B"], "Austin, TX", 100);
    recent.timestamp = now - Duration::minutes(4);
    let mut old = persona(&["A", "B"], "Austin, TX", 100);
    old.timestamp = now - Duration::minutes(6);

    let analytics = recompute(&[recent, old], NO_BEHAVIORS, now);
    assert_eq!(analytics.active_visitors, 1);
}

/// Recomputing unchanged inputs gives identical output
#[test]
fn test_recompute_idempotent() {
    let visitors = PersonaGenerator::with_seed(2).generate_personas(25);
    let mut generator = BehaviorGenerator::with_seed(3);
    let behaviors: Vec<_> = visitors.iter().map(|v| generator.generate_behavior(v.id)).collect();
    let now = Utc::now();

    let first = recompute(&visitors, &behaviors, now);
    let second = recompute(&visitors, &behaviors, now);
    assert_eq!(first, second);
    assert_eq!(first.total_behaviors, 25);
}

/// Device breakdown sums to the visitor count
#[test]
fn test_device_breakdown_totals() {
    let visitors = PersonaGenerator::with_seed(4).generate_personas(200);
    let analytics = recompute(&visitors, NO_BEHAVIORS, Utc::now());

    let total: usize = analytics.device_breakdown.iter().map(|d| d.count).sum();
    assert_eq!(total, 200);
    let share: f64 = DeviceType::ALL.iter().map(|d| analytics.device_share(*d)).sum();
    assert!((share - 100.0).abs() < 1e-9);
}

/// A narrower window and list size are honored
#[test]
fn test_custom_aggregator() {
    let now = Utc::now();
    let mut visitor = persona(&["A", "B", "C"], "Austin, TX", 100);
    visitor.timestamp = now - Duration::seconds(90);

    let aggregator = AnalyticsAggregator::new(Duration::seconds(60), 2);
    let analytics = aggregator.recompute(&[visitor], NO_BEHAVIORS, now);
    assert_eq!(analytics.active_visitors, 0);
    assert_eq!(analytics.top_interests.len(), 2);
}
