//! The family's virtual pet and its stat arithmetic.
//!
//! All five stats live in `[0.0, 1.0]` and are clamped there after every
//! mutation.  Care actions and decay take an explicit `now` so the math is a
//! pure function of the current stats and the elapsed time since each
//! last-care timestamp; the caller owns the clock and the invocation cadence.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::*;

/// The family pet.  Owned by exactly one family and persisted only as part
/// of the family snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VirtualPet {
    pub name: String,
    pub species: PetSpecies,
    pub happiness: f64,
    pub hunger: f64,
    pub energy: f64,
    pub health: f64,
    pub training: f64,
    /// Age in days.
    pub age_days: u32,
    pub personality: PetPersonality,
    pub last_fed: DateTime<Utc>,
    pub last_played: DateTime<Utc>,
    pub last_trained: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub favorite_food: String,
    pub favorite_toy: String,
}

impl VirtualPet {
    /// Build a newborn pet with species-appropriate favorites.
    pub fn new(name: impl Into<String>, species: PetSpecies, personality: PetPersonality) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            species,
            happiness: 0.5,
            hunger: 0.5,
            energy: 1.0,
            health: 1.0,
            training: 0.0,
            age_days: 0,
            personality,
            last_fed: now,
            last_played: now,
            last_trained: now,
            created_at: now,
            favorite_food: species.favorite_food().into(),
            favorite_toy: species.favorite_toy().into(),
        }
    }

    /// Feeding fills the pet's belly and nudges mood and health up.
    pub fn feed(&mut self, now: DateTime<Utc>) {
        self.hunger = clamp(self.hunger + FEED_HUNGER_DELTA);
        self.happiness = clamp(self.happiness + FEED_HAPPINESS_DELTA);
        self.health = clamp(self.health + FEED_HEALTH_DELTA);
        self.last_fed = now;
    }

    /// Playing raises happiness at the cost of some energy.
    pub fn play(&mut self, now: DateTime<Utc>) {
        self.happiness = clamp(self.happiness + PLAY_HAPPINESS_DELTA);
        self.energy = clamp(self.energy - PLAY_ENERGY_COST);
        self.last_played = now;
    }

    /// Training builds skill and mood, costing more energy than play.
    pub fn train(&mut self, now: DateTime<Utc>) {
        self.training = clamp(self.training + TRAIN_TRAINING_DELTA);
        self.happiness = clamp(self.happiness + TRAIN_HAPPINESS_DELTA);
        self.energy = clamp(self.energy - TRAIN_ENERGY_COST);
        self.last_trained = now;
    }

    /// Resting restores energy and a little health.  Does not touch any
    /// last-care timestamp.
    pub fn rest(&mut self) {
        self.energy = clamp(self.energy + REST_ENERGY_DELTA);
        self.health = clamp(self.health + REST_HEALTH_DELTA);
    }

    /// One decay step, intended to be driven by an external scheduler at a
    /// bounded cadence.
    ///
    /// Hunger and happiness only drop once their respective neglect windows
    /// have elapsed; energy always drops; health drops while the pet is
    /// hungry or unhappy.  A single call applies each penalty at most once.
    pub fn decay(&mut self, now: DateTime<Utc>) {
        let since_fed = (now - self.last_fed).num_seconds();
        let since_played = (now - self.last_played).num_seconds();

        if since_fed > HUNGER_DECAY_AFTER_SECS {
            self.hunger = clamp(self.hunger - HUNGER_DECAY);
        }

        if since_played > HAPPINESS_DECAY_AFTER_SECS {
            self.happiness = clamp(self.happiness - HAPPINESS_DECAY);
        }

        self.energy = clamp(self.energy - ENERGY_DECAY);

        if self.hunger < NEGLECT_THRESHOLD || self.happiness < NEGLECT_THRESHOLD {
            self.health = clamp(self.health - HEALTH_DECAY);
        }
    }

    pub fn age_one_day(&mut self) {
        self.age_days += 1;
    }
}

fn clamp(v: f64) -> f64 {
    v.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PetSpecies {
    #[serde(rename = "Dog")]
    Dog,
    #[serde(rename = "Cat")]
    Cat,
    #[serde(rename = "Bird")]
    Bird,
    #[serde(rename = "Fish")]
    Fish,
    #[serde(rename = "Rabbit")]
    Rabbit,
    #[serde(rename = "Hamster")]
    Hamster,
    #[serde(rename = "Turtle")]
    Turtle,
}

impl PetSpecies {
    pub const ALL: [PetSpecies; 7] = [
        Self::Dog,
        Self::Cat,
        Self::Bird,
        Self::Fish,
        Self::Rabbit,
        Self::Hamster,
        Self::Turtle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dog => "Dog",
            Self::Cat => "Cat",
            Self::Bird => "Bird",
            Self::Fish => "Fish",
            Self::Rabbit => "Rabbit",
            Self::Hamster => "Hamster",
            Self::Turtle => "Turtle",
        }
    }

    pub fn favorite_food(&self) -> &'static str {
        match self {
            Self::Dog => "Dog Treats",
            Self::Cat => "Cat Food",
            Self::Bird => "Seeds",
            Self::Fish => "Fish Flakes",
            Self::Rabbit => "Carrots",
            Self::Hamster => "Hamster Pellets",
            Self::Turtle => "Turtle Food",
        }
    }

    pub fn favorite_toy(&self) -> &'static str {
        match self {
            Self::Dog => "Ball",
            Self::Cat => "Laser Pointer",
            Self::Bird => "Mirror",
            Self::Fish => "Bubble Maker",
            Self::Rabbit => "Tunnel",
            Self::Hamster => "Wheel",
            Self::Turtle => "Rock",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PetPersonality {
    #[serde(rename = "Friendly")]
    Friendly,
    #[serde(rename = "Shy")]
    Shy,
    #[serde(rename = "Energetic")]
    Energetic,
    #[serde(rename = "Lazy")]
    Lazy,
    #[serde(rename = "Curious")]
    Curious,
    #[serde(rename = "Protective")]
    Protective,
}

impl PetPersonality {
    pub const ALL: [PetPersonality; 6] = [
        Self::Friendly,
        Self::Shy,
        Self::Energetic,
        Self::Lazy,
        Self::Curious,
        Self::Protective,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Friendly => "Friendly",
            Self::Shy => "Shy",
            Self::Energetic => "Energetic",
            Self::Lazy => "Lazy",
            Self::Curious => "Curious",
            Self::Protective => "Protective",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn pet() -> VirtualPet {
        VirtualPet::new("Rex", PetSpecies::Dog, PetPersonality::Friendly)
    }

    #[test]
    fn feeding_caps_at_one() {
        let mut p = pet();
        p.hunger = 0.9;
        let now = Utc::now();
        p.feed(now);
        p.feed(now);
        p.feed(now);
        assert_eq!(p.hunger, 1.0);
        assert!(p.happiness <= 1.0 && p.health <= 1.0);
    }

    #[test]
    fn training_never_drops_energy_below_zero() {
        let mut p = pet();
        p.energy = 0.1;
        let now = Utc::now();
        p.train(now);
        p.train(now);
        assert_eq!(p.energy, 0.0);
    }

    #[test]
    fn decay_applies_hunger_penalty_after_window() {
        let now = Utc::now();
        let mut p = pet();
        p.hunger = 0.5;
        p.last_fed = now - Duration::seconds(4000);
        p.last_played = now; // happiness untouched
        p.decay(now);
        assert!((p.hunger - 0.45).abs() < 1e-9);
    }

    #[test]
    fn decay_leaves_hunger_alone_inside_window() {
        let now = Utc::now();
        let mut p = pet();
        p.hunger = 0.5;
        p.last_fed = now - Duration::seconds(3000);
        p.decay(now);
        assert!((p.hunger - 0.5).abs() < 1e-9);
    }

    #[test]
    fn decay_always_costs_energy() {
        let now = Utc::now();
        let mut p = pet();
        p.energy = 1.0;
        p.decay(now);
        assert!((p.energy - 0.98).abs() < 1e-9);
    }

    #[test]
    fn neglected_pet_loses_health() {
        let now = Utc::now();
        let mut p = pet();
        p.hunger = 0.2;
        p.health = 1.0;
        p.decay(now);
        assert!((p.health - 0.99).abs() < 1e-9);
    }

    #[test]
    fn healthy_pet_keeps_health_during_decay() {
        let now = Utc::now();
        let mut p = pet();
        p.hunger = 0.8;
        p.happiness = 0.8;
        p.health = 1.0;
        p.decay(now);
        assert_eq!(p.health, 1.0);
    }

    #[test]
    fn species_favorites_are_applied() {
        let p = VirtualPet::new("Whiskers", PetSpecies::Cat, PetPersonality::Curious);
        assert_eq!(p.favorite_food, "Cat Food");
        assert_eq!(p.favorite_toy, "Laser Pointer");
    }

    #[test]
    fn rest_restores_energy_and_health() {
        let mut p = pet();
        p.energy = 0.3;
        p.health = 0.85;
        p.rest();
        assert!((p.energy - 0.7).abs() < 1e-9);
        assert!((p.health - 0.95).abs() < 1e-9);
    }
}
