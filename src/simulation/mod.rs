//! Simulation driving, scheduling and analytics
//!
//! # Overview
//!
//! - **SimulationDriver**: owns the state and generators, initializes and ticks
//! - **SimulationState**: personas, bounded behavior log, current visitor, analytics
//! - **AnalyticsAggregator**: pure recomputation of summary statistics
//! - **SimulationHandle / SimulationContext**: interval ticking with cancellation and
//!   scoped access for the presentation layer
//! - **SimulationSnapshot**: detached copy with a text dashboard renderer
//! - **SimulationError**: lifecycle and configuration errors
//!
//! # Usage Example
//!
//! ```rust
//! use visitor_simulator::simulation::*;
//! use visitor_simulator::types::*;
//!
//! let config = SimulationConfig { seed: Some(7), ..Default::default() };
//! let mut driver = SimulationDriver::new(config).unwrap();
//! driver.initialize();
//!
//! let outcome = driver.tick();
//! assert!(driver.state().behaviors().len() <= 50);
//! assert_eq!(driver.state().tick_count(), 1);
//! println!("{} behaviors this tick", outcome.behaviors_generated);
//! ```

pub mod analytics;
pub mod driver;
pub mod error;
pub mod logging;
pub mod runner;
pub mod snapshot;
pub mod state;

// Re-export all public types for convenience
pub use analytics::*;
pub use driver::*;
pub use error::*;
pub use logging::*;
pub use runner::*;
pub use snapshot::*;
pub use state::*;
