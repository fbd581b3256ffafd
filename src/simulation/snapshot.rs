//! Point-in-time copy of the simulation for presentation
//!
//! A snapshot is detached from the live state so it can be rendered or
//! serialized without holding the simulation lock.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::behavior::VisitorBehavior;
use crate::personalization::PersonalizationContent;
use crate::simulation::analytics::AnalyticsData;
use crate::simulation::error::SimulationResult;
use crate::types::{DeviceType, VisitorId};
use crate::visitor::VisitorPersona;

/// Activity stream length shown on the dashboard
pub const DASHBOARD_RECENT_BEHAVIORS: usize = 10;

/// Visitor cards shown on the dashboard
pub const DASHBOARD_RECENT_VISITORS: usize = 9;

/// Detached copy of everything the presentation layer reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationSnapshot {
    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,
    /// Completed ticks
    pub tick_count: u64,
    /// All personas, oldest first
    pub visitors: Vec<VisitorPersona>,
    /// Retained behaviors, oldest first
    pub behaviors: Vec<VisitorBehavior>,
    /// Resolved current visitor
    pub current_visitor: Option<VisitorPersona>,
    /// Analytics at the time of the snapshot
    pub analytics: AnalyticsData,
    /// Content variant selected for the current visitor
    pub personalization: Option<PersonalizationContent>,
    /// Contact page greeting for the current visitor
    pub contact_message: String,
}

impl SimulationSnapshot {
    /// Look up a persona by id
    pub fn find_visitor(&self, id: VisitorId) -> Option<&VisitorPersona> {
        self.visitors.iter().find(|visitor| visitor.id == id)
    }

    /// Up to `n` behaviors, newest first
    pub fn recent_behaviors(&self, n: usize) -> impl Iterator<Item = &VisitorBehavior> {
        self.behaviors.iter().rev().take(n)
    }

    /// Up to `n` personas, newest first
    pub fn recent_visitors(&self, n: usize) -> impl Iterator<Item = &VisitorPersona> {
        self.visitors.iter().rev().take(n)
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> SimulationResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Render a plain-text dashboard
    pub fn dashboard(&self) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail
        let _ = self.write_dashboard(&mut out);
        out
    }

    fn write_dashboard(&self, out: &mut String) -> std::fmt::Result {
        let analytics = &self.analytics;

        writeln!(out, "=== Visitor Analytics (tick {}) ===", self.tick_count)?;
        writeln!(out, "{}", analytics)?;
        writeln!(out)?;

        match &self.current_visitor {
            Some(visitor) => {
                writeln!(out, "Current visitor: {}", visitor.summary())?;
                writeln!(out, "  Interests: {}", visitor.interests.join(", "))?;
            }
            None => writeln!(out, "Current visitor: none")?,
        }
        if let Some(content) = &self.personalization {
            writeln!(out, "Showing: \"{}\" [{}]", content.content.headline, content.content.cta_text)?;
        }
        writeln!(out, "Contact: {}", self.contact_message)?;
        writeln!(out)?;

        writeln!(out, "Top interests:")?;
        for entry in &analytics.top_interests {
            writeln!(out, "  {:<14} {}", entry.interest, entry.count)?;
        }

        writeln!(out, "Devices:")?;
        for device in DeviceType::ALL {
            writeln!(
                out,
                "  {:<14} {} ({:.0}%)",
                device.as_str(),
                analytics.device_count(device),
                analytics.device_share(device)
            )?;
        }

        writeln!(out, "Top locations:")?;
        for entry in &analytics.location_breakdown {
            writeln!(out, "  {:<18} {}", entry.location, entry.count)?;
        }
        writeln!(out)?;

        writeln!(out, "Live activity:")?;
        for behavior in self.recent_behaviors(DASHBOARD_RECENT_BEHAVIORS) {
            let name = self
                .find_visitor(behavior.visitor_id)
                .map_or("(unknown visitor)", |visitor| visitor.name.as_str());
            writeln!(
                out,
                "  {} {:<18} {:<16} {:<14} {}s",
                behavior.timestamp.format("%H:%M:%S"),
                name,
                behavior.action,
                behavior.target,
                behavior.duration
            )?;
        }

        writeln!(out, "Recent visitors:")?;
        for visitor in self.recent_visitors(DASHBOARD_RECENT_VISITORS) {
            writeln!(
                out,
                "  {:<18} {:<3} {:<7} score {:>3}  {}",
                visitor.name,
                visitor.age,
                visitor.device_type,
                visitor.interaction_score,
                visitor.location
            )?;
        }

        Ok(())
    }
}
