//! Visitor persona entity
//!
//! A persona is a synthetic visitor profile. It is built once by the
//! [`PersonaGenerator`](crate::visitor::PersonaGenerator) and never changes afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{DeviceType, VisitorId};
use crate::visitor::catalog::ENGAGING_INTERESTS;

/// One simulated website visitor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorPersona {
    /// Unique identifier
    pub id: VisitorId,
    /// First and last name separated by a space
    pub name: String,
    /// Age in years (18-65)
    pub age: u8,
    /// City the visitor browses from
    pub location: String,
    /// Unique interests, normally 2-4 entries
    pub interests: Vec<String>,
    /// Device used for the session
    pub device_type: DeviceType,
    /// Session length in seconds
    pub session_duration: u32,
    /// Pages viewed during the session
    pub page_views: u32,
    /// Engagement score clamped to 0-100
    pub interaction_score: u8,
    /// When the persona was created
    pub timestamp: DateTime<Utc>,
}

impl VisitorPersona {
    /// Check whether the visitor lists the given interest
    pub fn has_interest(&self, interest: &str) -> bool {
        self.interests.iter().any(|i| i == interest)
    }

    /// Check whether the visitor shares at least one interest with `candidates`
    pub fn has_any_interest<S: AsRef<str>>(&self, candidates: &[S]) -> bool {
        candidates.iter().any(|c| self.has_interest(c.as_ref()))
    }

    /// Number of interests that count towards engagement
    pub fn engaging_interest_count(&self) -> usize {
        count_engaging(&self.interests)
    }

    /// Session duration in whole minutes
    pub fn session_minutes(&self) -> u32 {
        self.session_duration / 60
    }

    /// One-line summary for dashboards and logs
    pub fn summary(&self) -> String {
        format!(
            "{} ({}, {}, {}) - {}% engagement",
            self.name, self.age, self.location, self.device_type, self.interaction_score
        )
    }
}

pub(crate) fn count_engaging<S: AsRef<str>>(interests: &[S]) -> usize {
    interests.iter().filter(|i| ENGAGING_INTERESTS.contains(&i.as_ref())).count()
}
