//! Behavior event entity
//!
//! A behavior is one interaction performed by a visitor. The visitor id is a
//! weak reference: nothing guarantees the persona is still known when the
//! event is displayed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{BehaviorAction, BehaviorId, VisitorId};

/// Target recorded for a contact form submission
pub const CONTACT_FORM_TARGET: &str = "contact-form";

/// Seconds recorded for a contact form submission
pub const CONTACT_FORM_DURATION: u32 = 120;

/// One simulated interaction event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisitorBehavior {
    /// Unique identifier
    pub id: BehaviorId,
    /// Visitor that performed the interaction
    pub visitor_id: VisitorId,
    /// Kind of interaction
    pub action: BehaviorAction,
    /// Page or UI element affected
    pub target: String,
    /// Seconds spent on the interaction
    pub duration: u32,
    /// When the interaction happened
    pub timestamp: DateTime<Utc>,
}

impl VisitorBehavior {
    /// Create a behavior stamped with a fresh id and the current time
    pub fn new(
        visitor_id: VisitorId,
        action: BehaviorAction,
        target: impl Into<String>,
        duration: u32,
    ) -> Self {
        Self {
            id: BehaviorId::new(),
            visitor_id,
            action,
            target: target.into(),
            duration,
            timestamp: Utc::now(),
        }
    }

    /// Form interaction recorded when a visitor submits the contact form
    pub fn form_submission(visitor_id: VisitorId) -> Self {
        Self::new(
            visitor_id,
            BehaviorAction::FormInteraction,
            CONTACT_FORM_TARGET,
            CONTACT_FORM_DURATION,
        )
    }

    /// Whether the duration lies in the range generated for this action
    pub fn has_expected_duration(&self) -> bool {
        self.action.duration_range().contains(&self.duration)
    }
}
