//! User-side domain records: the user itself, their avatar, locations and
//! activity status.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be persisted
//! as a JSON snapshot or handed to the remote API unchanged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::DEFAULT_KEY_LOCATION_RADIUS;

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A family member.
///
/// Created on sign-up and mutated by profile, location and activity updates.
/// Sign-out only drops the in-memory reference; the record itself is never
/// deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    /// Opaque unique identifier.
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub avatar: Avatar,
    /// Where the user last reported being, if anywhere.
    pub current_location: Option<Location>,
    /// Named points of interest ("Home", "Work", ...).
    pub key_locations: Vec<KeyLocation>,
    pub current_activity: Option<Activity>,
    /// Remote identifier of the family the user belongs to, if any.
    pub family_id: Option<String>,
    pub is_online: bool,
    pub last_seen: DateTime<Utc>,

    // Privacy settings
    pub share_location: bool,
    pub share_browsing: bool,
    pub share_activity: bool,
}

impl User {
    /// Build a fresh user with default privacy settings and an empty
    /// location book.
    pub fn new(name: impl Into<String>, email: impl Into<String>, avatar: Avatar) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            avatar,
            current_location: None,
            key_locations: Vec::new(),
            current_activity: None,
            family_id: None,
            is_online: false,
            last_seen: Utc::now(),
            share_location: true,
            share_browsing: false,
            share_activity: true,
        }
    }
}

// ---------------------------------------------------------------------------
// Avatar
// ---------------------------------------------------------------------------

/// Appearance descriptor owned by exactly one [`User`].
///
/// The four animation booleans are transient display state: wave and point
/// are one-shot triggers that an external scheduler resets shortly after
/// activation, so they carry no meaning in a persisted snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Avatar {
    pub name: String,
    pub skin_tone: String,
    pub hair_style: String,
    pub hair_color: String,
    pub eye_color: String,
    pub clothing: String,
    pub accessories: Vec<String>,

    // External avatar provider linkage
    pub use_external: bool,
    pub external_id: Option<String>,
    pub external_url: Option<String>,

    // Full-body properties
    pub body_type: String,
    pub height: String,
    pub pose: String,
    pub expression: String,
    pub outfit: String,
    pub shoes: String,

    // Animation states
    pub is_walking: bool,
    pub is_sitting: bool,
    pub is_waving: bool,
    pub is_pointing: bool,
}

impl Default for Avatar {
    fn default() -> Self {
        Self {
            name: String::new(),
            skin_tone: "light".into(),
            hair_style: "short".into(),
            hair_color: "brown".into(),
            eye_color: "brown".into(),
            clothing: "casual".into(),
            accessories: Vec::new(),
            use_external: false,
            external_id: None,
            external_url: None,
            body_type: "average".into(),
            height: "average".into(),
            pose: "standing".into(),
            expression: "happy".into(),
            outfit: "casual".into(),
            shoes: "sneakers".into(),
            is_walking: false,
            is_sitting: false,
            is_waving: false,
            is_pointing: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Locations
// ---------------------------------------------------------------------------

/// A point-in-time position report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    pub name: String,
    pub timestamp: DateTime<Utc>,
}

impl Location {
    pub fn new(latitude: f64, longitude: f64, name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            name: name.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A named, typed, radius-bounded point of interest associated with a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyLocation {
    pub id: Uuid,
    pub name: String,
    pub kind: LocationType,
    pub latitude: f64,
    pub longitude: f64,
    /// Geofence radius in meters.
    pub radius: f64,
}

impl KeyLocation {
    pub fn new(name: impl Into<String>, kind: LocationType, latitude: f64, longitude: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            latitude,
            longitude,
            radius: DEFAULT_KEY_LOCATION_RADIUS,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LocationType {
    #[serde(rename = "Home")]
    Home,
    #[serde(rename = "Work")]
    Work,
    #[serde(rename = "Gym")]
    Gym,
    #[serde(rename = "Store")]
    Store,
    #[serde(rename = "Restaurant")]
    Restaurant,
    #[serde(rename = "Other")]
    Other,
}

impl LocationType {
    pub const ALL: [LocationType; 6] = [
        Self::Home,
        Self::Work,
        Self::Gym,
        Self::Store,
        Self::Restaurant,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Work => "Work",
            Self::Gym => "Gym",
            Self::Store => "Store",
            Self::Restaurant => "Restaurant",
            Self::Other => "Other",
        }
    }
}

// ---------------------------------------------------------------------------
// Activity
// ---------------------------------------------------------------------------

/// What the user is currently up to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub kind: ActivityType,
    pub title: String,
    pub details: Option<String>,
    pub timestamp: DateTime<Utc>,
}

impl Activity {
    pub fn new(kind: ActivityType, title: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            details: None,
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ActivityType {
    #[serde(rename = "Watching")]
    Watching,
    #[serde(rename = "Shopping")]
    Shopping,
    #[serde(rename = "Working")]
    Working,
    #[serde(rename = "Exercising")]
    Exercising,
    #[serde(rename = "Eating")]
    Eating,
    #[serde(rename = "Relaxing")]
    Relaxing,
    #[serde(rename = "Other")]
    Other,
}

impl ActivityType {
    pub const ALL: [ActivityType; 7] = [
        Self::Watching,
        Self::Shopping,
        Self::Working,
        Self::Exercising,
        Self::Eating,
        Self::Relaxing,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Watching => "Watching",
            Self::Shopping => "Shopping",
            Self::Working => "Working",
            Self::Exercising => "Exercising",
            Self::Eating => "Eating",
            Self::Relaxing => "Relaxing",
            Self::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_round_trips_through_json() {
        let mut user = User::new("Ann", "ann@x.com", Avatar::default());
        user.key_locations
            .push(KeyLocation::new("Home", LocationType::Home, 48.85, 2.35));
        user.current_activity = Some(Activity::new(ActivityType::Working, "Working"));

        let bytes = serde_json::to_vec(&user).unwrap();
        let back: User = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, user);
    }

    #[test]
    fn enum_strings_match_wire_values() {
        assert_eq!(
            serde_json::to_string(&LocationType::Home).unwrap(),
            "\"Home\""
        );
        assert_eq!(
            serde_json::to_string(&ActivityType::Watching).unwrap(),
            "\"Watching\""
        );
        assert_eq!(ActivityType::ALL.len(), 7);
    }

    #[test]
    fn key_location_uses_default_radius() {
        let loc = KeyLocation::new("Gym", LocationType::Gym, 0.0, 0.0);
        assert_eq!(loc.radius, 100.0);
    }
}
