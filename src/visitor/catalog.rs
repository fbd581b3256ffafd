//! Fixed catalogs the persona generator draws from

use crate::types::DeviceType;

/// First names, picked uniformly
pub const FIRST_NAMES: [&str; 20] = [
    "Emma", "Liam", "Olivia", "Noah", "Ava", "Ethan", "Sophia", "Mason", "Isabella", "William",
    "Mia", "James", "Charlotte", "Benjamin", "Amelia", "Lucas", "Harper", "Henry", "Evelyn",
    "Alexander",
];

/// Last names, picked uniformly
pub const LAST_NAMES: [&str; 20] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin",
];

/// Visitor cities, picked uniformly
pub const LOCATIONS: [&str; 20] = [
    "New York, NY",
    "Los Angeles, CA",
    "Chicago, IL",
    "Houston, TX",
    "Phoenix, AZ",
    "Philadelphia, PA",
    "San Antonio, TX",
    "San Diego, CA",
    "Dallas, TX",
    "San Jose, CA",
    "Austin, TX",
    "Jacksonville, FL",
    "Seattle, WA",
    "Denver, CO",
    "Boston, MA",
    "Nashville, TN",
    "London, UK",
    "Toronto, CA",
    "Sydney, AU",
    "Berlin, DE",
];

/// Full interest catalog
pub const INTERESTS: [&str; 20] = [
    "Technology",
    "AI",
    "Software",
    "Marketing",
    "Business",
    "Sales",
    "Healthcare",
    "Research",
    "Science",
    "Education",
    "Finance",
    "E-commerce",
    "Design",
    "Gaming",
    "Travel",
    "Food",
    "Sports",
    "Music",
    "Art",
    "Photography",
];

/// Interests favoured by visitors under 30
pub const TECH_AFFINITY: [&str; 5] = ["Technology", "AI", "Software", "Gaming", "Design"];

/// Interests favoured by visitors over 40
pub const BUSINESS_AFFINITY: [&str; 4] = ["Business", "Finance", "Healthcare", "Research"];

/// Interests that raise the interaction score
pub const ENGAGING_INTERESTS: [&str; 3] = ["Technology", "AI", "Software"];

/// Inclusive age brackets: 18-24, 25-34, 35-44, 45-54, 55-65
pub const AGE_BRACKETS: [(u8, u8); 5] = [(18, 24), (25, 34), (35, 44), (45, 54), (55, 65)];

/// Weight of each age bracket
pub const AGE_WEIGHTS: [f64; 5] = [0.1, 0.3, 0.4, 0.15, 0.05];

/// Device types paired with [`DEVICE_WEIGHTS`]
pub const DEVICES: [DeviceType; 3] = DeviceType::ALL;

/// Weight of each device type: desktop, mobile, tablet
pub const DEVICE_WEIGHTS: [f64; 3] = [0.6, 0.35, 0.05];

/// Chance that each tech-affinity interest is picked for a visitor under 30
pub const TECH_AFFINITY_PROBABILITY: f64 = 0.4;

/// Chance that each business-affinity interest is picked for a visitor over 40
pub const BUSINESS_AFFINITY_PROBABILITY: f64 = 0.3;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalogs_have_no_duplicates() {
        for catalog in [&FIRST_NAMES[..], &LAST_NAMES[..], &LOCATIONS[..], &INTERESTS[..]] {
            let unique: HashSet<_> = catalog.iter().collect();
            assert_eq!(unique.len(), catalog.len());
        }
    }

    #[test]
    fn test_affinity_subsets_are_in_catalog() {
        for interest in TECH_AFFINITY.iter().chain(BUSINESS_AFFINITY.iter()) {
            assert!(INTERESTS.contains(interest), "{} missing from catalog", interest);
        }
        for interest in ENGAGING_INTERESTS {
            assert!(INTERESTS.contains(&interest));
        }
    }

    #[test]
    fn test_weights_sum_to_one() {
        let age: f64 = AGE_WEIGHTS.iter().sum();
        let device: f64 = DEVICE_WEIGHTS.iter().sum();
        assert!((age - 1.0).abs() < 1e-9);
        assert!((device - 1.0).abs() < 1e-9);
        assert_eq!(AGE_BRACKETS.len(), AGE_WEIGHTS.len());
        assert_eq!(DEVICES.len(), DEVICE_WEIGHTS.len());
    }

    #[test]
    fn test_age_brackets_cover_range() {
        assert_eq!(AGE_BRACKETS.first().map(|b| b.0), Some(18));
        assert_eq!(AGE_BRACKETS.last().map(|b| b.1), Some(65));
        for window in AGE_BRACKETS.windows(2) {
            assert_eq!(window[0].1 + 1, window[1].0);
        }
    }
}
