//! Visitor Simulator
//!
//! Procedural simulation of website visitors for demoing interest-based
//! personalization. Synthetic personas and their interaction events are
//! generated on a timer, and live analytics are derived from them.
//!
//! # Overview
//!
//! ## Key Features
//!
//! - **Persona Generation**: Weighted demographics, device mix, age-correlated interests
//!   and a derived engagement score
//! - **Behavior Generation**: Page views, clicks, form interactions and scrolls with
//!   action-specific durations
//! - **Scheduled Simulation**: Interval ticking with a bounded behavior log and clean
//!   cancellation
//! - **Live Analytics**: Active visitors, session averages, top interests, device and
//!   location breakdowns
//! - **Personalization**: Content variant and contact message selection for the current visitor
//!
//! ## Quick Start
//!
//! ```rust
//! use visitor_simulator::*;
//!
//! let config = SimulationConfig { seed: Some(42), ..Default::default() };
//! let mut driver = SimulationDriver::new(config)?;
//! driver.initialize();
//!
//! let analytics = driver.analytics();
//! assert_eq!(analytics.total_visitors, 5);
//! println!("Average session: {}s", analytics.avg_session_duration);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Identifiers, enums and configuration
//! - [`sampling`]: Weighted random selection
//! - [`visitor`]: Personas, catalogs and the persona generator
//! - [`behavior`]: Behavior events and the behavior generator
//! - [`personalization`]: Content variants and contact messages
//! - [`simulation`]: Driver, analytics, scheduling, snapshots, errors and logging
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │   Types     │    │  Sampling   │    │   Visitor   │
//! │             │    │             │    │             │
//! │ Identifiers │◄───┤ Weighted    │◄───┤ Personas    │
//! │ Enums       │    │ Index       │    │ Generator   │
//! │ Config      │    │             │    │             │
//! └─────────────┘    └─────────────┘    └─────────────┘
//!        ▲                                      ▲
//!        │                                      │
//! ┌─────────────┐    ┌─────────────┐    ┌─────────────┐
//! │  Behavior   │    │ Personal-   │    │ Simulation  │
//! │             │    │ ization     │    │             │
//! │ Events      │◄───┤ Content     │◄───┤ Driver      │
//! │ Generator   │    │ Messages    │    │ Analytics   │
//! └─────────────┘    └─────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod behavior;
pub mod personalization;
pub mod sampling;
pub mod simulation;
pub mod types;
pub mod visitor;

// Core types and identifiers
pub use types::{
    BehaviorAction, BehaviorId, ConfigValidationError, DeviceType, OutputFormat, SimulationConfig,
    VisitorId,
};

// Generators and entities
pub use behavior::{BehaviorGenerator, VisitorBehavior};
pub use sampling::weighted_index;
pub use visitor::{PersonaGenerator, VisitorPersona};

// Personalization
pub use personalization::{
    contact_message, default_catalog, select_content, ContentVariant, PersonalizationContent,
};

// Simulation types and functionality
pub use simulation::{
    recompute, AnalyticsAggregator, AnalyticsData, LoggingConfig, SimulationContext,
    SimulationDriver, SimulationError, SimulationHandle, SimulationResult, SimulationSnapshot,
    SimulationState, TickOutcome,
};
