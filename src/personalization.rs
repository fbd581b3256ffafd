//! Personalized content variants
//!
//! Static content keyed by target interests. The presentation layer picks the
//! variant matching the current visitor and shows a tailored contact message.

use serde::{Deserialize, Serialize};

use crate::visitor::VisitorPersona;

/// Copy and styling of one content variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentVariant {
    /// Hero headline
    pub headline: String,
    /// Supporting paragraph
    pub description: String,
    /// Call-to-action button label
    pub cta_text: String,
    /// Background gradient classes
    pub background_color: String,
    /// Text colour classes
    pub text_color: String,
}

/// Content shown to visitors sharing any of `target_interests`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalizationContent {
    /// Catalog identifier
    pub id: String,
    /// Interests this variant is aimed at
    pub target_interests: Vec<String>,
    /// Copy and styling
    pub content: ContentVariant,
}

impl PersonalizationContent {
    /// Whether the visitor shares at least one target interest
    pub fn matches(&self, visitor: &VisitorPersona) -> bool {
        visitor.has_any_interest(&self.target_interests)
    }
}

fn variant(
    id: &str,
    target_interests: &[&str],
    headline: &str,
    description: &str,
    cta_text: &str,
    background_color: &str,
) -> PersonalizationContent {
    PersonalizationContent {
        id: id.to_string(),
        target_interests: target_interests.iter().map(|s| s.to_string()).collect(),
        content: ContentVariant {
            headline: headline.to_string(),
            description: description.to_string(),
            cta_text: cta_text.to_string(),
            background_color: background_color.to_string(),
            text_color: "text-white".to_string(),
        },
    }
}

/// The built-in content catalog; the first entry is the fallback
pub fn default_catalog() -> Vec<PersonalizationContent> {
    vec![
        variant(
            "1",
            &["Technology", "AI", "Software"],
            "Revolutionary AI Analytics",
            "Transform your business with cutting-edge artificial intelligence and data insights.",
            "Explore Tech Solutions",
            "from-blue-600 to-purple-600",
        ),
        variant(
            "2",
            &["Marketing", "Business", "Sales"],
            "Boost Your Marketing ROI",
            "Discover powerful tools to optimize your marketing campaigns and increase conversions.",
            "Start Growing Today",
            "from-green-500 to-teal-500",
        ),
        variant(
            "3",
            &["Healthcare", "Research", "Science"],
            "Advanced Healthcare Analytics",
            "Leverage AI to improve patient outcomes and streamline healthcare operations.",
            "Learn More",
            "from-red-500 to-pink-500",
        ),
    ]
}

/// Pick the first variant matching the visitor, falling back to the first entry.
///
/// Returns `None` only for an empty catalog.
pub fn select_content<'a>(
    catalog: &'a [PersonalizationContent],
    visitor: Option<&VisitorPersona>,
) -> Option<&'a PersonalizationContent> {
    visitor
        .and_then(|v| catalog.iter().find(|content| content.matches(v)))
        .or_else(|| catalog.first())
}

const BUSINESS_INTERESTS: [&str; 3] = ["Business", "Marketing", "Sales"];
const TECH_INTERESTS: [&str; 3] = ["Technology", "AI", "Software"];

/// Contact page greeting tailored to the visitor's interests
pub fn contact_message(visitor: Option<&VisitorPersona>) -> &'static str {
    match visitor {
        None => "Get in touch with our team",
        Some(v) if v.has_any_interest(&BUSINESS_INTERESTS) => {
            "Ready to transform your business with AI analytics?"
        }
        Some(v) if v.has_any_interest(&TECH_INTERESTS) => {
            "Let's discuss how our AI technology can help you"
        }
        Some(_) => "Discover how AI visitor simulation can benefit you",
    }
}
