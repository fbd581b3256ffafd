//! Simulation state aggregate
//!
//! Holds the persona collection, the bounded behavior log, the current visitor
//! pointer and the analytics derived from them. Every public mutator leaves
//! the analytics consistent with the collections.

use chrono::{DateTime, Utc};
use std::collections::VecDeque;
use tracing::{debug, warn};

use crate::behavior::VisitorBehavior;
use crate::simulation::analytics::{AnalyticsAggregator, AnalyticsData};
use crate::types::VisitorId;
use crate::visitor::VisitorPersona;

/// Personas, behaviors, current visitor and derived analytics
#[derive(Debug, Clone, Default)]
pub struct SimulationState {
    visitors: Vec<VisitorPersona>,
    behaviors: VecDeque<VisitorBehavior>,
    current_visitor: Option<VisitorId>,
    analytics: AnalyticsData,
    aggregator: AnalyticsAggregator,
    tick_count: u64,
}

impl SimulationState {
    /// Create an empty state that derives analytics with `aggregator`
    pub fn new(aggregator: AnalyticsAggregator) -> Self {
        Self { aggregator, ..Self::default() }
    }

    /// All personas in creation order
    pub fn visitors(&self) -> &[VisitorPersona] {
        &self.visitors
    }

    /// Retained behaviors, oldest first
    pub fn behaviors(&self) -> &VecDeque<VisitorBehavior> {
        &self.behaviors
    }

    /// Latest analytics
    pub fn analytics(&self) -> &AnalyticsData {
        &self.analytics
    }

    /// Number of completed ticks
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Id the current visitor pointer holds, whether or not it resolves
    pub fn current_visitor_id(&self) -> Option<VisitorId> {
        self.current_visitor
    }

    /// The current visitor, if the pointer is set and the persona is known
    pub fn current_visitor(&self) -> Option<&VisitorPersona> {
        self.current_visitor.and_then(|id| self.find_visitor(id))
    }

    /// Look up a persona by id
    pub fn find_visitor(&self, id: VisitorId) -> Option<&VisitorPersona> {
        self.visitors.iter().find(|visitor| visitor.id == id)
    }

    /// Up to `n` behaviors, newest first
    pub fn recent_behaviors(&self, n: usize) -> Vec<&VisitorBehavior> {
        self.behaviors.iter().rev().take(n).collect()
    }

    /// Up to `n` personas, newest first
    pub fn recent_visitors(&self, n: usize) -> Vec<&VisitorPersona> {
        self.visitors.iter().rev().take(n).collect()
    }

    /// Append a persona and recompute analytics
    pub fn add_visitor(&mut self, persona: VisitorPersona) {
        self.push_visitor(persona);
        self.refresh_analytics(Utc::now());
    }

    /// Append a behavior without trimming and recompute analytics
    pub fn add_behavior(&mut self, behavior: VisitorBehavior) {
        self.push_behavior(behavior);
        self.refresh_analytics(Utc::now());
    }

    /// Point the current visitor at `persona`, or clear it with `None`
    pub fn set_current_visitor(&mut self, persona: Option<&VisitorPersona>) {
        if let Some(persona) = persona {
            if self.find_visitor(persona.id).is_none() {
                warn!(visitor = %persona.id, "Current visitor is not part of the simulation");
            }
        }
        self.set_current_visitor_id(persona.map(|p| p.id));
    }

    pub(crate) fn set_current_visitor_id(&mut self, id: Option<VisitorId>) {
        self.current_visitor = id;
    }

    pub(crate) fn push_visitor(&mut self, persona: VisitorPersona) {
        self.visitors.push(persona);
    }

    pub(crate) fn push_behavior(&mut self, behavior: VisitorBehavior) {
        self.behaviors.push_back(behavior);
    }

    /// Evict the oldest behaviors until at most `retention` remain; returns the
    /// number evicted
    pub(crate) fn trim_behaviors(&mut self, retention: usize) -> usize {
        let excess = self.behaviors.len().saturating_sub(retention);
        if excess > 0 {
            self.behaviors.drain(..excess);
            debug!(evicted = excess, retained = self.behaviors.len(), "Trimmed behavior log");
        }
        excess
    }

    pub(crate) fn record_tick(&mut self) {
        self.tick_count += 1;
    }

    pub(crate) fn refresh_analytics(&mut self, now: DateTime<Utc>) {
        self.analytics = self.aggregator.recompute(&self.visitors, &self.behaviors, now);
    }
}
