//! Analytics aggregation
//!
//! Summary statistics are a pure function of the visitor and behavior
//! collections. Nothing here is mutated in place; the driver recomputes the
//! whole [`AnalyticsData`] after every change.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::behavior::VisitorBehavior;
use crate::types::{defaults, BehaviorAction, DeviceType};
use crate::visitor::VisitorPersona;

/// Occurrences of one interest across all visitors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterestCount {
    /// Interest name
    pub interest: String,
    /// Number of visitors listing it
    pub count: usize,
}

/// Visitors using one device type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceCount {
    /// Device type
    pub device: DeviceType,
    /// Number of visitors
    pub count: usize,
}

/// Visitors from one location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationCount {
    /// City string
    pub location: String,
    /// Number of visitors
    pub count: usize,
}

/// Behaviors of one action kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionCount {
    /// Action kind
    pub action: BehaviorAction,
    /// Number of retained behaviors
    pub count: usize,
}

/// Derived snapshot of the simulation collections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsData {
    /// Number of personas
    pub total_visitors: usize,
    /// Personas created inside the active window
    pub active_visitors: usize,
    /// Mean session duration in seconds, rounded
    pub avg_session_duration: u32,
    /// Most common interests, descending
    pub top_interests: Vec<InterestCount>,
    /// Visitors per device type, first-seen order
    pub device_breakdown: Vec<DeviceCount>,
    /// Most common locations, descending
    pub location_breakdown: Vec<LocationCount>,
    /// Number of retained behaviors
    pub total_behaviors: usize,
    /// Retained behaviors per action, first-seen order
    pub action_breakdown: Vec<ActionCount>,
}

impl AnalyticsData {
    /// Visitor count for a device type, 0 if none were seen
    pub fn device_count(&self, device: DeviceType) -> usize {
        self.device_breakdown
            .iter()
            .find(|entry| entry.device == device)
            .map_or(0, |entry| entry.count)
    }

    /// Percentage of visitors using `device`
    pub fn device_share(&self, device: DeviceType) -> f64 {
        if self.total_visitors == 0 {
            0.0
        } else {
            self.device_count(device) as f64 * 100.0 / self.total_visitors as f64
        }
    }
}

impl fmt::Display for AnalyticsData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total Visitors: {}", self.total_visitors)?;
        writeln!(f, "Active Now: {}", self.active_visitors)?;
        writeln!(f, "Avg Session: {}m", self.avg_session_duration / 60)?;
        write!(f, "Behaviors: {}", self.total_behaviors)
    }
}

/// Count occurrences preserving first-seen order
fn tally<K, I>(items: I) -> Vec<(K, usize)>
where
    K: Eq + Hash + Clone,
    I: IntoIterator<Item = K>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<(K, usize)> = Vec::new();

    for item in items {
        match positions.get(&item) {
            Some(&index) => counts[index].1 += 1,
            None => {
                positions.insert(item.clone(), counts.len());
                counts.push((item, 1));
            }
        }
    }

    counts
}

/// Sort descending by count (stable) and keep the first `limit`
fn top<K>(mut counts: Vec<(K, usize)>, limit: usize) -> Vec<(K, usize)> {
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

/// Recomputes [`AnalyticsData`] with a configurable window and top-N size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsAggregator {
    active_window: Duration,
    top_n: usize,
}

impl Default for AnalyticsAggregator {
    fn default() -> Self {
        Self::new(
            Duration::seconds(defaults::ACTIVE_WINDOW_SECS as i64),
            defaults::TOP_N,
        )
    }
}

impl AnalyticsAggregator {
    /// Create an aggregator counting visitors newer than `active_window` as active
    pub fn new(active_window: Duration, top_n: usize) -> Self {
        Self { active_window, top_n }
    }

    /// Trailing window for active visitors
    pub fn active_window(&self) -> Duration {
        self.active_window
    }

    /// Length of the top interest and location lists
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Derive analytics from the current collections as of `now`
    pub fn recompute<'a, B>(
        &self,
        visitors: &[VisitorPersona],
        behaviors: B,
        now: DateTime<Utc>,
    ) -> AnalyticsData
    where
        B: IntoIterator<Item = &'a VisitorBehavior>,
    {
        // A window reaching past the earliest representable instant counts everyone
        let cutoff = now.checked_sub_signed(self.active_window).unwrap_or(DateTime::<Utc>::MIN_UTC);
        let active_visitors = visitors.iter().filter(|v| v.timestamp > cutoff).count();

        let avg_session_duration = if visitors.is_empty() {
            0
        } else {
            let total: u64 = visitors.iter().map(|v| u64::from(v.session_duration)).sum();
            (total as f64 / visitors.len() as f64).round() as u32
        };

        let interests = tally(visitors.iter().flat_map(|v| v.interests.iter().cloned()));
        let top_interests = top(interests, self.top_n)
            .into_iter()
            .map(|(interest, count)| InterestCount { interest, count })
            .collect();

        let device_breakdown = tally(visitors.iter().map(|v| v.device_type))
            .into_iter()
            .map(|(device, count)| DeviceCount { device, count })
            .collect();

        let locations = tally(visitors.iter().map(|v| v.location.clone()));
        let location_breakdown = top(locations, self.top_n)
            .into_iter()
            .map(|(location, count)| LocationCount { location, count })
            .collect();

        let actions: Vec<BehaviorAction> = behaviors.into_iter().map(|b| b.action).collect();
        let total_behaviors = actions.len();
        let action_breakdown = tally(actions)
            .into_iter()
            .map(|(action, count)| ActionCount { action, count })
            .collect();

        AnalyticsData {
            total_visitors: visitors.len(),
            active_visitors,
            avg_session_duration,
            top_interests,
            device_breakdown,
            location_breakdown,
            total_behaviors,
            action_breakdown,
        }
    }
}

/// Recompute with the default five-minute window and top five lists
pub fn recompute<'a, B>(visitors: &[VisitorPersona], behaviors: B, now: DateTime<Utc>) -> AnalyticsData
where
    B: IntoIterator<Item = &'a VisitorBehavior>,
{
    AnalyticsAggregator::default().recompute(visitors, behaviors, now)
}
