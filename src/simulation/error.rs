//! Error types and handling
//!
//! Generation and aggregation cannot fail; the errors here cover
//! configuration and lifecycle misuse.

use thiserror::Error;

use crate::types::ConfigValidationError;

/// Errors that can occur while running the simulation
#[derive(Debug, Error)]
pub enum SimulationError {
    /// Simulation state was accessed outside of a started context
    #[error("Simulation not initialized: {0}")]
    NotInitialized(String),

    /// The simulation was started twice
    #[error("Simulation already running")]
    AlreadyRunning,

    /// The simulation was started outside of a tokio runtime
    #[error("No async runtime available: {0}")]
    RuntimeUnavailable(String),

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ConfigurationError(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// Background tick task failed to shut down cleanly
    #[error("Tick task error: {0}")]
    TaskError(String),
}

impl From<ConfigValidationError> for SimulationError {
    fn from(error: ConfigValidationError) -> Self {
        SimulationError::ConfigurationError(error.to_string())
    }
}

impl From<tokio::runtime::TryCurrentError> for SimulationError {
    fn from(error: tokio::runtime::TryCurrentError) -> Self {
        SimulationError::RuntimeUnavailable(error.to_string())
    }
}

impl From<tokio::task::JoinError> for SimulationError {
    fn from(error: tokio::task::JoinError) -> Self {
        SimulationError::TaskError(error.to_string())
    }
}

impl SimulationError {
    /// Create a not-initialized error naming the operation that was attempted
    pub fn not_initialized(operation: impl Into<String>) -> Self {
        Self::NotInitialized(operation.into())
    }

    /// Create a configuration error
    pub fn configuration_error(msg: impl Into<String>) -> Self {
        Self::ConfigurationError(msg.into())
    }

    /// Check if the caller can continue after this error
    pub fn is_recoverable(&self) -> bool {
        match self {
            SimulationError::NotInitialized(_) => false,
            SimulationError::AlreadyRunning => true,
            SimulationError::RuntimeUnavailable(_) => false,
            SimulationError::ConfigurationError(_) => false,
            SimulationError::SerializationError(_) => true,
            SimulationError::TaskError(_) => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            SimulationError::NotInitialized(_) => "Lifecycle",
            SimulationError::AlreadyRunning => "Lifecycle",
            SimulationError::RuntimeUnavailable(_) => "Lifecycle",
            SimulationError::ConfigurationError(_) => "Configuration",
            SimulationError::SerializationError(_) => "Serialization",
            SimulationError::TaskError(_) => "Task",
        }
    }
}

/// Result type for simulation operations
pub type SimulationResult<T> = Result<T, SimulationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let error = SimulationError::not_initialized("visitors");
        assert!(matches!(error, SimulationError::NotInitialized(_)));
        assert_eq!(error.to_string(), "Simulation not initialized: visitors");

        let config_error = SimulationError::configuration_error("Invalid config");
        assert_eq!(config_error.to_string(), "Configuration validation failed: Invalid config");
    }

    #[test]
    fn test_error_from_validation() {
        let validation = ConfigValidationError::InvalidTopN(0);
        let error: SimulationError = validation.into();
        assert!(matches!(error, SimulationError::ConfigurationError(_)));
        assert!(error.to_string().contains("Top-N"));
    }

    #[test]
    fn test_error_from_serde() {
        let parse = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error: SimulationError = parse.into();
        assert_eq!(error.category(), "Serialization");
    }

    #[test]
    fn test_error_recoverability() {
        assert!(!SimulationError::not_initialized("x").is_recoverable());
        assert!(!SimulationError::configuration_error("x").is_recoverable());
        assert!(SimulationError::AlreadyRunning.is_recoverable());
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(SimulationError::not_initialized("x").category(), "Lifecycle");
        assert_eq!(SimulationError::AlreadyRunning.category(), "Lifecycle");
        assert_eq!(SimulationError::configuration_error("x").category(), "Configuration");
        assert_eq!(SimulationError::TaskError("x".into()).category(), "Task");
        assert_eq!(SimulationError::RuntimeUnavailable("x".into()).category(), "Lifecycle");
    }
}
