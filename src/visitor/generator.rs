//! Persona generation
//!
//! Builds [`VisitorPersona`] values from the demographic and device
//! distributions in [`catalog`](crate::visitor::catalog), with age-correlated
//! interests and a derived engagement score.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fmt;
use tracing::debug;

use crate::sampling::weighted_index;
use crate::types::{DeviceType, VisitorId};
use crate::visitor::catalog::{
    AGE_BRACKETS, AGE_WEIGHTS, BUSINESS_AFFINITY, BUSINESS_AFFINITY_PROBABILITY, DEVICES,
    DEVICE_WEIGHTS, FIRST_NAMES, INTERESTS, LAST_NAMES, LOCATIONS, TECH_AFFINITY,
    TECH_AFFINITY_PROBABILITY,
};
use crate::visitor::persona::{count_engaging, VisitorPersona};

/// Smallest nominal interest count
pub const MIN_INTERESTS: usize = 2;
/// Largest nominal interest count (affinity picks may exceed it)
pub const MAX_INTERESTS: usize = 4;

/// Generator for synthetic visitor personas
pub struct PersonaGenerator {
    rng: StdRng,
}

impl fmt::Debug for PersonaGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PersonaGenerator").finish()
    }
}

impl Default for PersonaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonaGenerator {
    /// Create a new persona generator seeded from OS entropy
    pub fn new() -> Self {
        Self { rng: StdRng::from_entropy() }
    }

    /// Create a new persona generator with a specific seed for reproducible results
    pub fn with_seed(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }

    /// Generate one persona
    pub fn generate_persona(&mut self) -> VisitorPersona {
        let rng = &mut self.rng;

        let first_name = FIRST_NAMES[rng.gen_range(0..FIRST_NAMES.len())];
        let last_name = LAST_NAMES[rng.gen_range(0..LAST_NAMES.len())];

        let (low, high) = AGE_BRACKETS[weighted_index(&AGE_WEIGHTS, rng)];
        let age = rng.gen_range(low..=high);

        let device_type = DEVICES[weighted_index(&DEVICE_WEIGHTS, rng)];

        let interest_count = rng.gen_range(MIN_INTERESTS..=MAX_INTERESTS);
        let interests = select_interests(interest_count, age, rng);

        let session_duration = session_duration(device_type, age, rng.gen::<f64>() * 300.0);
        let page_views = page_views(session_duration, rng.gen_range(0..3));
        let interaction_score = interaction_score(
            age,
            &interests,
            session_duration,
            device_type,
            rng.gen_range(-10..10),
        );

        let location = LOCATIONS[rng.gen_range(0..LOCATIONS.len())];

        let persona = VisitorPersona {
            id: VisitorId::new(),
            name: format!("{} {}", first_name, last_name),
            age,
            location: location.to_string(),
            interests,
            device_type,
            session_duration,
            page_views,
            interaction_score,
            timestamp: Utc::now(),
        };

        debug!(
            visitor = %persona.id,
            age = persona.age,
            device = %persona.device_type,
            interests = persona.interests.len(),
            score = persona.interaction_score,
            "Generated visitor persona"
        );

        persona
    }

    /// Generate `count` personas
    pub fn generate_personas(&mut self, count: usize) -> Vec<VisitorPersona> {
        (0..count).map(|_| self.generate_persona()).collect()
    }
}

/// Pick unique interests with an age-correlated bias.
///
/// Visitors under 30 get each tech-affinity interest with probability 0.4,
/// visitors over 40 each business-affinity interest with probability 0.3.
/// The remaining slots up to `target` are filled uniformly from what is left.
/// Affinity picks are not capped by `target`, so a young visitor can end up
/// with five interests even when four were asked for.
pub fn select_interests<R: Rng + ?Sized>(target: usize, age: u8, rng: &mut R) -> Vec<String> {
    let mut pool: Vec<&str> = INTERESTS.to_vec();
    let mut selected: Vec<String> = Vec::with_capacity(target.max(MAX_INTERESTS));

    let affinity: Option<(&[&str], f64)> = if age < 30 {
        Some((&TECH_AFFINITY[..], TECH_AFFINITY_PROBABILITY))
    } else if age > 40 {
        Some((&BUSINESS_AFFINITY[..], BUSINESS_AFFINITY_PROBABILITY))
    } else {
        None
    };

    if let Some((subset, probability)) = affinity {
        for interest in subset {
            if rng.gen::<f64>() < probability {
                if let Some(position) = pool.iter().position(|i| i == interest) {
                    selected.push(pool.remove(position).to_string());
                }
            }
        }
    }

    while selected.len() < target && !pool.is_empty() {
        let index = rng.gen_range(0..pool.len());
        selected.push(pool.remove(index).to_string());
    }

    selected
}

/// Session length in seconds.
///
/// `extra` is the random part of the session, expected in `[0, 300)`.
pub fn session_duration(device: DeviceType, age: u8, extra: f64) -> u32 {
    let base = if device == DeviceType::Mobile { 120.0 } else { 200.0 };
    let age_factor = if age < 35 { 0.8 } else { 1.2 };
    ((base + extra) * age_factor).floor() as u32
}

/// Page views derived from session length, at least one
pub fn page_views(session_duration: u32, extra: u32) -> u32 {
    (session_duration / 60 + extra).max(1)
}

/// Engagement score clamped to 0-100.
///
/// `noise` is the random adjustment, expected in `[-10, 10)`.
pub fn interaction_score<S: AsRef<str>>(
    age: u8,
    interests: &[S],
    session_duration: u32,
    device: DeviceType,
    noise: i32,
) -> u8 {
    let mut score: i32 = 50;

    if session_duration > 300 {
        score += 20;
    } else if session_duration > 180 {
        score += 10;
    } else if session_duration < 60 {
        score -= 10;
    }

    score += 5 * count_engaging(interests) as i32;

    if (30..=50).contains(&age) {
        score += 10;
    }

    score += match device {
        DeviceType::Desktop => 5,
        DeviceType::Tablet => 2,
        DeviceType::Mobile => 0,
    };

    score += noise;

    score.clamp(0, 100) as u8
}
