//! Simulation driver
//!
//! Owns the simulation state and the generators, seeds the initial visitors
//! and advances the simulation one tick at a time. The driver is synchronous;
//! scheduling lives in [`crate::simulation::runner`].

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

use crate::behavior::{BehaviorGenerator, VisitorBehavior};
use crate::personalization::{contact_message, default_catalog, select_content, PersonalizationContent};
use crate::simulation::analytics::{AnalyticsAggregator, AnalyticsData};
use crate::simulation::snapshot::SimulationSnapshot;
use crate::simulation::state::SimulationState;
use crate::simulation::SimulationResult;
use crate::types::{SimulationConfig, VisitorId};
use crate::visitor::{PersonaGenerator, VisitorPersona};

/// What a single tick changed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Persona added this tick
    pub new_visitor: Option<VisitorId>,
    /// Whether the current visitor moved to the new persona
    pub switched_current: bool,
    /// Behaviors generated this tick
    pub behaviors_generated: usize,
    /// Behaviors evicted by the retention window
    pub evicted: usize,
}

/// Drives persona and behavior generation over a [`SimulationState`]
pub struct SimulationDriver {
    config: SimulationConfig,
    state: SimulationState,
    catalog: Vec<PersonalizationContent>,
    persona_generator: PersonaGenerator,
    behavior_generator: BehaviorGenerator,
    rng: StdRng,
}

impl std::fmt::Debug for SimulationDriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationDriver")
            .field("visitors", &self.state.visitors().len())
            .field("behaviors", &self.state.behaviors().len())
            .field("tick_count", &self.state.tick_count())
            .finish()
    }
}

impl SimulationDriver {
    /// Create a driver with an empty state.
    ///
    /// With a configured seed the driver RNG and both generators are seeded
    /// from it, so the sequence of draws is reproducible.
    #[instrument(skip(config), fields(seed = ?config.seed))]
    pub fn new(config: SimulationConfig) -> SimulationResult<Self> {
        config.validate()?;

        let (rng, persona_generator, behavior_generator) = match config.seed {
            Some(seed) => {
                info!("Using deterministic seed: {}", seed);
                (
                    StdRng::seed_from_u64(seed),
                    PersonaGenerator::with_seed(seed.wrapping_add(1)),
                    BehaviorGenerator::with_seed(seed.wrapping_add(2)),
                )
            }
            None => {
                debug!("Using entropy-based random seed");
                (StdRng::from_entropy(), PersonaGenerator::new(), BehaviorGenerator::new())
            }
        };

        let aggregator = AnalyticsAggregator::new(config.active_window(), config.top_n);

        Ok(Self {
            state: SimulationState::new(aggregator),
            catalog: default_catalog(),
            config,
            persona_generator,
            behavior_generator,
            rng,
        })
    }

    /// Replace the state with freshly generated visitors and pick one of them
    /// uniformly as the current visitor
    #[instrument(skip(self), fields(initial_visitors = self.config.initial_visitors))]
    pub fn initialize(&mut self) {
        let aggregator = AnalyticsAggregator::new(self.config.active_window(), self.config.top_n);
        self.state = SimulationState::new(aggregator);

        for persona in self.persona_generator.generate_personas(self.config.initial_visitors) {
            self.state.push_visitor(persona);
        }

        let visitors = self.state.visitors();
        let current = if visitors.is_empty() {
            None
        } else {
            Some(visitors[self.rng.gen_range(0..visitors.len())].id)
        };
        self.state.set_current_visitor_id(current);
        self.state.refresh_analytics(Utc::now());

        info!(
            visitors = self.state.visitors().len(),
            current = ?current.map(|id| id.to_string()),
            "Simulation initialized"
        );
    }

    /// Advance the simulation by one tick
    #[instrument(skip(self), fields(tick = self.state.tick_count() + 1))]
    pub fn tick(&mut self) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if self.rng.gen_bool(self.config.new_visitor_probability) {
            let persona = self.persona_generator.generate_persona();
            let id = persona.id;
            self.state.push_visitor(persona);
            outcome.new_visitor = Some(id);

            if self.rng.gen_bool(self.config.current_visitor_switch_probability) {
                self.state.set_current_visitor_id(Some(id));
                outcome.switched_current = true;
            }
        }

        let visitor_ids: Vec<VisitorId> = self.state.visitors().iter().map(|v| v.id).collect();
        for visitor_id in visitor_ids {
            if self.rng.gen_bool(self.config.behavior_probability) {
                let behavior = self.behavior_generator.generate_behavior(visitor_id);
                self.state.push_behavior(behavior);
                outcome.behaviors_generated += 1;
            }
        }

        outcome.evicted = self.state.trim_behaviors(self.config.behavior_retention);
        self.state.record_tick();
        self.state.refresh_analytics(Utc::now());

        debug!(
            new_visitor = outcome.new_visitor.is_some(),
            switched = outcome.switched_current,
            behaviors = outcome.behaviors_generated,
            evicted = outcome.evicted,
            "Tick complete"
        );

        outcome
    }

    /// Append an externally created persona
    pub fn add_visitor(&mut self, persona: VisitorPersona) {
        self.state.add_visitor(persona);
    }

    /// Append an externally created behavior; the retention window is not applied
    pub fn add_behavior(&mut self, behavior: VisitorBehavior) {
        self.state.add_behavior(behavior);
    }

    /// Change or clear the current visitor
    pub fn set_current_visitor(&mut self, persona: Option<&VisitorPersona>) {
        self.state.set_current_visitor(persona);
    }

    /// Record a contact form submission for the current visitor
    pub fn submit_contact_form(&mut self) -> Option<VisitorBehavior> {
        let visitor_id = self.state.current_visitor()?.id;
        let behavior = VisitorBehavior::form_submission(visitor_id);
        info!(visitor = %visitor_id, "Contact form submitted");
        self.state.add_behavior(behavior.clone());
        Some(behavior)
    }

    /// Current state
    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    /// Configuration the driver was built with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Latest analytics
    pub fn analytics(&self) -> &AnalyticsData {
        self.state.analytics()
    }

    /// Static personalization catalog
    pub fn personalization_catalog(&self) -> &[PersonalizationContent] {
        &self.catalog
    }

    /// Content variant for the current visitor
    pub fn current_content(&self) -> Option<&PersonalizationContent> {
        select_content(&self.catalog, self.state.current_visitor())
    }

    /// Detached copy of the state for presentation
    pub fn snapshot(&self) -> SimulationSnapshot {
        let current_visitor = self.state.current_visitor();
        SimulationSnapshot {
            taken_at: Utc::now(),
            tick_count: self.state.tick_count(),
            visitors: self.state.visitors().to_vec(),
            behaviors: self.state.behaviors().iter().cloned().collect(),
            current_visitor: current_visitor.cloned(),
            analytics: self.state.analytics().clone(),
            personalization: self.current_content().cloned(),
            contact_message: contact_message(current_visitor).to_string(),
        }
    }
}
