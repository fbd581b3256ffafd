//! Visitor personas and their generation
//!
//! # Overview
//!
//! - **VisitorPersona**: immutable profile of one simulated visitor
//! - **PersonaGenerator**: draws personas from demographic and device distributions
//! - **catalog**: the fixed name, city and interest catalogs plus distribution weights
//!
//! # Usage Example
//!
//! ```rust
//! use visitor_simulator::visitor::*;
//!
//! let mut generator = PersonaGenerator::with_seed(7);
//! let persona = generator.generate_persona();
//!
//! assert!((18..=65).contains(&persona.age));
//! assert!(persona.interests.len() >= 2);
//! assert!(persona.interaction_score <= 100);
//! ```

pub mod catalog;
pub mod generator;
pub mod persona;

// Re-export all public types for convenience
pub use generator::{
    interaction_score, page_views, select_interests, session_duration, PersonaGenerator,
    MAX_INTERESTS, MIN_INTERESTS,
};
pub use persona::VisitorPersona;
