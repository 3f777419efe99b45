//! Shared constants: storage keys, simulated latencies, pet tuning values.

use std::time::Duration;

/// Storage key for the signed-in user snapshot.
pub const KEY_CURRENT_USER: &str = "currentUser";

/// Storage key for the current family snapshot.
pub const KEY_CURRENT_FAMILY: &str = "currentFamily";

/// Artificial latency for simulated auth and family operations.
pub const SIM_DELAY: Duration = Duration::from_secs(1);

/// Artificial latency for simulated message sends.
pub const SIM_MESSAGE_DELAY: Duration = Duration::from_millis(500);

/// How long a one-shot avatar animation (wave, point) stays active.
pub const ANIMATION_RESET_DELAY: Duration = Duration::from_secs(1);

/// Invite codes are drawn from this alphabet.
pub const INVITE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Invite code length in characters.
pub const INVITE_CODE_LEN: usize = 6;

/// Default key-location radius in meters.
pub const DEFAULT_KEY_LOCATION_RADIUS: f64 = 100.0;

// -- Pet care deltas --

pub const FEED_HUNGER_DELTA: f64 = 0.3;
pub const FEED_HAPPINESS_DELTA: f64 = 0.1;
pub const FEED_HEALTH_DELTA: f64 = 0.05;

pub const PLAY_HAPPINESS_DELTA: f64 = 0.2;
pub const PLAY_ENERGY_COST: f64 = 0.1;

pub const TRAIN_TRAINING_DELTA: f64 = 0.1;
pub const TRAIN_HAPPINESS_DELTA: f64 = 0.15;
pub const TRAIN_ENERGY_COST: f64 = 0.15;

pub const REST_ENERGY_DELTA: f64 = 0.4;
pub const REST_HEALTH_DELTA: f64 = 0.1;

// -- Pet decay tuning --

/// A pet unfed for longer than this starts losing hunger satisfaction.
pub const HUNGER_DECAY_AFTER_SECS: i64 = 3600;

/// A pet unplayed-with for longer than this starts losing happiness.
pub const HAPPINESS_DECAY_AFTER_SECS: i64 = 7200;

pub const HUNGER_DECAY: f64 = 0.05;
pub const HAPPINESS_DECAY: f64 = 0.03;
pub const ENERGY_DECAY: f64 = 0.02;
pub const HEALTH_DECAY: f64 = 0.01;

/// Below this hunger or happiness level the pet's health starts suffering.
pub const NEGLECT_THRESHOLD: f64 = 0.3;
