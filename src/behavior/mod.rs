//! Behavior events and their generation
//!
//! # Overview
//!
//! - **VisitorBehavior**: one interaction (page view, click, form, scroll) by a visitor
//! - **BehaviorGenerator**: draws actions, targets and action-specific durations
//!
//! # Usage Example
//!
//! ```rust
//! use visitor_simulator::behavior::*;
//! use visitor_simulator::types::{BehaviorAction, VisitorId};
//!
//! let mut generator = BehaviorGenerator::with_seed(11);
//! let behavior = generator.generate_behavior(VisitorId::new());
//! assert!(behavior.action.duration_range().contains(&behavior.duration));
//!
//! let submission = VisitorBehavior::form_submission(behavior.visitor_id);
//! assert_eq!(submission.action, BehaviorAction::FormInteraction);
//! ```

pub mod event;
pub mod generator;

// Re-export all public types for convenience
pub use event::*;
pub use generator::*;
