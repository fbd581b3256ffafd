//! Behavior event generation
//!
//! Picks an action category uniformly, a target from that category's catalog,
//! and a duration from the action's range.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::debug;

use crate::behavior::event::VisitorBehavior;
use crate::types::{BehaviorAction, VisitorId};

/// Action categories the generator picks from, each with its target catalog
pub const ACTION_TARGETS: [(BehaviorAction, &[&str]); 4] = [
    (BehaviorAction::PageView, &["home", "features", "dashboard", "contact", "about"]),
    (BehaviorAction::Click, &["cta-button", "nav-link", "feature-card", "demo-button"]),
    (BehaviorAction::FormInteraction, &["contact-form", "newsletter", "demo-request"]),
    (BehaviorAction::Scroll, &["hero-section", "features-section", "testimonials"]),
];

/// Target catalog for an action, empty for actions the generator never produces
pub fn targets_for(action: BehaviorAction) -> &'static [&'static str] {
    ACTION_TARGETS
        .iter()
        .find(|(candidate, _)| *candidate == action)
        .map(|(_, targets)| *targets)
        .unwrap_or(&[])
}

/// Generator for visitor behavior events
pub struct BehaviorGenerator {
    rng: StdRng,
}

impl fmt::Debug for BehaviorGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BehaviorGenerator").finish()
    }
}

impl Default for BehaviorGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl BehaviorGenerator {
    /// Create a new behavior generator seeded from OS entropy
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Create a new behavior generator with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Generate a behavior for `visitor_id`.
    ///
    /// The id is not checked against any persona collection.
    pub fn generate_behavior(&mut self, visitor_id: VisitorId) -> VisitorBehavior {
        let (action, targets) = ACTION_TARGETS[self.rng.gen_range(0..ACTION_TARGETS.len())];
        let target = targets[self.rng.gen_range(0..targets.len())];
        let duration = self.rng.gen_range(action.duration_range());

        let behavior = VisitorBehavior::new(visitor_id, action, target, duration);

        debug!(
            visitor = %visitor_id,
            action = %behavior.action,
            target = %behavior.target,
            duration = behavior.duration,
            "Generated visitor behavior"
        );

        behavior
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_target_catalogs() {
        assert_eq!(targets_for(BehaviorAction::PageView).len(), 5);
        assert_eq!(targets_for(BehaviorAction::Click).len(), 4);
        assert_eq!(targets_for(BehaviorAction::FormInteraction).len(), 3);
        assert_eq!(targets_for(BehaviorAction::Scroll).len(), 3);
        assert!(targets_for(BehaviorAction::Exit).is_empty());
    }

    #[test]
    fn test_generated_behaviors_respect_ranges() {
        let mut generator = BehaviorGenerator::with_seed(3);
        let visitor = VisitorId::new();

        for _ in 0..5_000 {
            let behavior = generator.generate_behavior(visitor);
            assert_eq!(behavior.visitor_id, visitor);
            assert!(behavior.duration > 0);
            assert!(behavior.has_expected_duration(), "{:?}", behavior);
            assert!(targets_for(behavior.action).contains(&behavior.target.as_str()));
            assert_ne!(behavior.action, BehaviorAction::Exit);
        }
    }

    #[test]
    fn test_click_duration_bounds() {
        let mut generator = BehaviorGenerator::with_seed(4);
        let visitor = VisitorId::new();
        let clicks: Vec<u32> = (0..5_000)
            .map(|_| generator.generate_behavior(visitor))
            .filter(|b| b.action == BehaviorAction::Click)
            .map(|b| b.duration)
            .collect();

        assert!(!clicks.is_empty());
        assert!(clicks.iter().all(|d| (1..6).contains(d)));
        assert!(clicks.contains(&1));
        assert!(clicks.contains(&5));
    }

    #[test]
    fn test_all_generated_actions_appear() {
        let mut generator = BehaviorGenerator::with_seed(5);
        let visitor = VisitorId::new();
        let actions: HashSet<_> =
            (0..1_000).map(|_| generator.generate_behavior(visitor).action).collect();
        assert_eq!(actions.len(), 4);
    }

    #[test]
    fn test_unknown_visitor_accepted() {
        let mut generator = BehaviorGenerator::new();
        let stranger = VisitorId::new();
        assert_eq!(generator.generate_behavior(stranger).visitor_id, stranger);
    }

    #[test]
    fn test_behavior_ids_unique() {
        let mut generator = BehaviorGenerator::with_seed(6);
        let visitor = VisitorId::new();
        let ids: HashSet<_> = (0..500).map(|_| generator.generate_behavior(visitor).id).collect();
        assert_eq!(ids.len(), 500);
    }
}
