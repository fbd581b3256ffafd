//! Core types and identifiers for the visitor simulator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the simulation system.
//!
//! # Overview
//!
//! - **Identifiers**: UUID-based unique identifiers for personas and behavior events
//! - **Enums**: Device types, behavior actions and report formats
//! - **Configuration**: Simulation configuration with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use visitor_simulator::types::*;
//!
//! let visitor_id = VisitorId::new();
//! assert!(visitor_id.to_string().starts_with("VIS_"));
//!
//! let device: DeviceType = "mobile".parse().unwrap();
//! assert_eq!(device, DeviceType::Mobile);
//!
//! let config = SimulationConfig {
//!     tick_interval_ms: 500,
//!     ..Default::default()
//! };
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
