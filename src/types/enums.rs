//! Enumeration types for the visitor simulator
//!
//! This module contains the closed sets used by the simulation: device types,
//! behavior actions and report output formats.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Device a visitor browses from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    /// Desktop or laptop browser
    Desktop,
    /// Phone browser
    Mobile,
    /// Tablet browser
    Tablet,
}

impl DeviceType {
    /// All device types, in the order used by the device distribution
    pub const ALL: [DeviceType; 3] = [DeviceType::Desktop, DeviceType::Mobile, DeviceType::Tablet];

    /// Lowercase wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
        }
    }
}

impl fmt::Display for DeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for DeviceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "desktop" => Ok(DeviceType::Desktop),
            "mobile" | "phone" => Ok(DeviceType::Mobile),
            "tablet" => Ok(DeviceType::Tablet),
            _ => Err(format!("Unknown device type: {}", s)),
        }
    }
}

/// Kind of interaction recorded in a behavior event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorAction {
    /// Visitor opened a page
    PageView,
    /// Visitor clicked an element
    Click,
    /// Visitor filled in or submitted a form
    FormInteraction,
    /// Visitor scrolled through a section
    Scroll,
    /// Visitor left the site (never produced by the generator)
    Exit,
}

impl BehaviorAction {
    /// Snake-case wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            BehaviorAction::PageView => "page_view",
            BehaviorAction::Click => "click",
            BehaviorAction::FormInteraction => "form_interaction",
            BehaviorAction::Scroll => "scroll",
            BehaviorAction::Exit => "exit",
        }
    }

    /// Half-open range of durations, in seconds, for this action
    pub fn duration_range(&self) -> Range<u32> {
        match self {
            BehaviorAction::PageView => 30..150,
            BehaviorAction::Click => 1..6,
            BehaviorAction::FormInteraction => 60..240,
            BehaviorAction::Scroll => 10..40,
            BehaviorAction::Exit => 10..70,
        }
    }
}

impl fmt::Display for BehaviorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Output formats for the final simulation report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable dashboard
    Text,
    /// JSON snapshot of the simulation state
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "TEXT"),
            OutputFormat::Json => write!(f, "JSON"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_type_display() {
        assert_eq!(DeviceType::Desktop.to_string(), "desktop");
        assert_eq!(DeviceType::Mobile.to_string(), "mobile");
        assert_eq!(DeviceType::Tablet.to_string(), "tablet");
    }

    #[test]
    fn test_device_type_from_str() {
        assert_eq!("Desktop".parse::<DeviceType>().unwrap(), DeviceType::Desktop);
        assert_eq!("phone".parse::<DeviceType>().unwrap(), DeviceType::Mobile);
        assert!("watch".parse::<DeviceType>().is_err());
    }

    #[test]
    fn test_device_type_serde() {
        assert_eq!(serde_json::to_string(&DeviceType::Tablet).unwrap(), "\"tablet\"");
        let parsed: DeviceType = serde_json::from_str("\"mobile\"").unwrap();
        assert_eq!(parsed, DeviceType::Mobile);
    }

    #[test]
    fn test_behavior_action_serde() {
        assert_eq!(
            serde_json::to_string(&BehaviorAction::FormInteraction).unwrap(),
            "\"form_interaction\""
        );
        let parsed: BehaviorAction = serde_json::from_str("\"page_view\"").unwrap();
        assert_eq!(parsed, BehaviorAction::PageView);
    }

    #[test]
    fn test_behavior_action_duration_ranges() {
        assert_eq!(BehaviorAction::PageView.duration_range(), 30..150);
        assert_eq!(BehaviorAction::Click.duration_range(), 1..6);
        assert_eq!(BehaviorAction::FormInteraction.duration_range(), 60..240);
        assert_eq!(BehaviorAction::Scroll.duration_range(), 10..40);
        assert_eq!(BehaviorAction::Exit.duration_range(), 10..70);
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
        assert!("csv".parse::<OutputFormat>().is_err());
    }
}
