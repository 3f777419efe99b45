//! Messages and notifications exchanged inside a family.
//!
//! Both lists are append-only and scoped to the running session; neither is
//! persisted locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::{Activity, Location, User};

/// A single entry in the family feed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub id: Uuid,
    /// Sender snapshot at send time (a value, not a reference).
    pub sender: User,
    pub content: String,
    pub kind: MessageType,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub location: Option<Location>,
    pub activity: Option<Activity>,
}

impl Message {
    pub fn new(sender: User, content: impl Into<String>, kind: MessageType) -> Self {
        Self {
            id: Uuid::new_v4(),
            sender,
            content: content.into(),
            kind,
            timestamp: Utc::now(),
            is_read: false,
            location: None,
            activity: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum MessageType {
    #[serde(rename = "Text")]
    Text,
    #[serde(rename = "Location")]
    Location,
    #[serde(rename = "Activity")]
    Activity,
    #[serde(rename = "Notification")]
    Notification,
    #[serde(rename = "Arrival")]
    Arrival,
    #[serde(rename = "Departure")]
    Departure,
}

impl MessageType {
    pub const ALL: [MessageType; 6] = [
        Self::Text,
        Self::Location,
        Self::Activity,
        Self::Notification,
        Self::Arrival,
        Self::Departure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "Text",
            Self::Location => "Location",
            Self::Activity => "Activity",
            Self::Notification => "Notification",
            Self::Arrival => "Arrival",
            Self::Departure => "Departure",
        }
    }
}

/// An in-app notification shown to the family.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub kind: NotificationType,
    pub sender: User,
    pub timestamp: DateTime<Utc>,
    pub is_read: bool,
    pub action_required: bool,
}

impl Notification {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        kind: NotificationType,
        sender: User,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            body: body.into(),
            kind,
            sender,
            timestamp: Utc::now(),
            is_read: false,
            action_required: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum NotificationType {
    #[serde(rename = "Location Update")]
    LocationUpdate,
    #[serde(rename = "Activity Update")]
    ActivityUpdate,
    #[serde(rename = "Family Invite")]
    FamilyInvite,
    #[serde(rename = "Pet Care")]
    PetCare,
    #[serde(rename = "Family Activity")]
    FamilyActivity,
    #[serde(rename = "Arrival")]
    Arrival,
    #[serde(rename = "Departure")]
    Departure,
}

impl NotificationType {
    pub const ALL: [NotificationType; 7] = [
        Self::LocationUpdate,
        Self::ActivityUpdate,
        Self::FamilyInvite,
        Self::PetCare,
        Self::FamilyActivity,
        Self::Arrival,
        Self::Departure,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LocationUpdate => "Location Update",
            Self::ActivityUpdate => "Activity Update",
            Self::FamilyInvite => "Family Invite",
            Self::PetCare => "Pet Care",
            Self::FamilyActivity => "Family Activity",
            Self::Arrival => "Arrival",
            Self::Departure => "Departure",
        }
    }
}
