//! Unique identifier types for the visitor simulator
//!
//! This module contains UUID-based identifier types for visitor personas and
//! the behavior events they produce.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a simulated visitor persona
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VisitorId(pub Uuid);

impl VisitorId {
    /// Create a new random visitor ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for VisitorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for VisitorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VIS_{}", self.0.simple())
    }
}

impl Serialize for VisitorId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for VisitorId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let raw = s.strip_prefix("VIS_").unwrap_or(&s);
        let uuid = Uuid::parse_str(raw).map_err(serde::de::Error::custom)?;
        Ok(VisitorId(uuid))
    }
}

/// Unique identifier for a single behavior event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BehaviorId(pub Uuid);

impl BehaviorId {
    /// Create a new random behavior ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BehaviorId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BehaviorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BHV_{}", self.0.simple())
    }
}

impl Serialize for BehaviorId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for BehaviorId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let raw = s.strip_prefix("BHV_").unwrap_or(&s);
        let uuid = Uuid::parse_str(raw).map_err(serde::de::Error::custom)?;
        Ok(BehaviorId(uuid))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visitor_id_uniqueness() {
        let a = VisitorId::new();
        let b = VisitorId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn test_id_display_prefixes() {
        assert!(VisitorId::new().to_string().starts_with("VIS_"));
        assert!(BehaviorId::new().to_string().starts_with("BHV_"));
    }

    #[test]
    fn test_visitor_id_serde() {
        let id = VisitorId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));

        let parsed: VisitorId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_behavior_id_accepts_raw_uuid() {
        let uuid = Uuid::new_v4();
        let json = format!("\"{}\"", uuid);
        let parsed: BehaviorId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.0, uuid);
    }

    #[test]
    fn test_invalid_id_rejected() {
        let result: Result<VisitorId, _> = serde_json::from_str("\"VIS_not-a-uuid\"");
        assert!(result.is_err());
    }
}
