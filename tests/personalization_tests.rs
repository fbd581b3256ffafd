//! Tests for personalized content selection

use visitor_simulator::*;

fn visitor_with(interests: &[&str]) -> VisitorPersona {
    let mut persona = PersonaGenerator::with_seed(4).generate_persona();
    persona.interests = interests.iter().map(|s| s.to_string()).collect();
    persona
}

/// Each catalog entry is reachable through one of its interests
#[test]
fn test_each_variant_selectable() {
    let catalog = default_catalog();
    for content in &catalog {
        let visitor = visitor_with(&[content.target_interests[2].as_str(), "Travel"]);
        assert_eq!(select_content(&catalog, Some(&visitor)).map(|c| &c.id), Some(&content.id));
    }
}

/// Visitors without matching interests see the first variant
#[test]
fn test_fallback_variant() {
    let catalog = default_catalog();
    let visitor = visitor_with(&["Travel", "Photography"]);
    let selected = select_content(&catalog, Some(&visitor)).unwrap();
    assert_eq!(selected.content.headline, "Revolutionary AI Analytics");
}

/// Contact greeting prefers business interests over tech
#[test]
fn test_contact_message_priority() {
    let both = visitor_with(&["Software", "Sales"]);
    assert_eq!(contact_message(Some(&both)), "Ready to transform your business with AI analytics?");

    let tech = visitor_with(&["AI", "Gaming"]);
    assert_eq!(contact_message(Some(&tech)), "Let's discuss how our AI technology can help you");

    assert_eq!(contact_message(None), "Get in touch with our team");
}

/// The driver picks content for its current visitor
#[test]
fn test_driver_current_content() {
    let mut driver = SimulationDriver::new(SimulationConfig { seed: Some(12), ..Default::default() }).unwrap();
    driver.initialize();

    let current = driver.state().current_visitor().cloned().unwrap();
    let expected = select_content(driver.personalization_catalog(), Some(&current)).cloned();
    assert_eq!(driver.current_content().cloned(), expected);

    let snapshot = driver.snapshot();
    assert_eq!(snapshot.personalization, expected);
    assert_eq!(snapshot.contact_message, contact_message(Some(&current)));
}
