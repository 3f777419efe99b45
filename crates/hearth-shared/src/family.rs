//! Family domain records: the family itself, its shared house and the
//! activities planned together.
//!
//! A `Family` held by a client is a snapshot, not a live-synchronized
//! document.  `members` stores user values, so edits to one member's copy do
//! not propagate; an explicit fetch or local mutation plus persistence is
//! required.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::invite::InviteCode;
use crate::pet::VirtualPet;
use crate::user::{Activity, User};

// ---------------------------------------------------------------------------
// Family
// ---------------------------------------------------------------------------

/// A group of users sharing one house, an optional virtual pet and a list of
/// planned activities.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Family {
    pub id: Uuid,
    pub name: String,
    pub members: Vec<User>,
    pub house: House,
    pub pet: Option<VirtualPet>,
    pub activities: Vec<FamilyActivity>,
    /// Join token handed to prospective members.
    pub invite_code: InviteCode,
    pub created_at: DateTime<Utc>,
}

impl Family {
    /// Build a family around its founding member.
    pub fn new(name: impl Into<String>, founder: User, house: House) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            members: vec![founder],
            house,
            pet: None,
            activities: Vec::new(),
            invite_code: InviteCode::generate(),
            created_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// House
// ---------------------------------------------------------------------------

/// 2-D position in house coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// 2-D extent in house coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The virtual shared house.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct House {
    pub rooms: Vec<Room>,
    /// Furniture placed outside any room.
    pub furniture: Vec<Furniture>,
    pub theme: HouseTheme,
    pub name: String,
}

impl Default for House {
    fn default() -> Self {
        Self {
            rooms: Vec::new(),
            furniture: Vec::new(),
            theme: HouseTheme::Modern,
            name: "Family Home".into(),
        }
    }
}

impl House {
    /// The layout every new family starts with: a living room with a couch
    /// and a TV.
    pub fn starter() -> Self {
        let living_room = Room {
            id: Uuid::new_v4(),
            name: "Living Room".into(),
            kind: RoomType::LivingRoom,
            position: Point::new(0.0, 0.0),
            size: Size::new(300.0, 200.0),
            furniture: Vec::new(),
        };

        let couch = Furniture::new("Couch", FurnitureType::Couch, Point::new(50.0, 100.0));
        let tv = Furniture::new("TV", FurnitureType::Tv, Point::new(200.0, 50.0));

        Self {
            rooms: vec![living_room],
            furniture: vec![couch, tv],
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub kind: RoomType,
    pub position: Point,
    pub size: Size,
    pub furniture: Vec<Furniture>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoomType {
    #[serde(rename = "Living Room")]
    LivingRoom,
    #[serde(rename = "Kitchen")]
    Kitchen,
    #[serde(rename = "Bedroom")]
    Bedroom,
    #[serde(rename = "Bathroom")]
    Bathroom,
    #[serde(rename = "Dining Room")]
    DiningRoom,
    #[serde(rename = "Office")]
    Office,
    #[serde(rename = "Playroom")]
    Playroom,
}

impl RoomType {
    pub const ALL: [RoomType; 7] = [
        Self::LivingRoom,
        Self::Kitchen,
        Self::Bedroom,
        Self::Bathroom,
        Self::DiningRoom,
        Self::Office,
        Self::Playroom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LivingRoom => "Living Room",
            Self::Kitchen => "Kitchen",
            Self::Bedroom => "Bedroom",
            Self::Bathroom => "Bathroom",
            Self::DiningRoom => "Dining Room",
            Self::Office => "Office",
            Self::Playroom => "Playroom",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Furniture {
    pub id: Uuid,
    pub name: String,
    pub kind: FurnitureType,
    pub position: Point,
    pub is_occupied: bool,
    pub occupied_by: Option<User>,
    pub activity: Option<Activity>,
}

impl Furniture {
    pub fn new(name: impl Into<String>, kind: FurnitureType, position: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            position,
            is_occupied: false,
            occupied_by: None,
            activity: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FurnitureType {
    #[serde(rename = "Couch")]
    Couch,
    #[serde(rename = "TV")]
    Tv,
    #[serde(rename = "Dining Table")]
    DiningTable,
    #[serde(rename = "Bed")]
    Bed,
    #[serde(rename = "Desk")]
    Desk,
    #[serde(rename = "Chair")]
    Chair,
    #[serde(rename = "Bookshelf")]
    Bookshelf,
    #[serde(rename = "Kitchen Counter")]
    KitchenCounter,
}

impl FurnitureType {
    pub const ALL: [FurnitureType; 8] = [
        Self::Couch,
        Self::Tv,
        Self::DiningTable,
        Self::Bed,
        Self::Desk,
        Self::Chair,
        Self::Bookshelf,
        Self::KitchenCounter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Couch => "Couch",
            Self::Tv => "TV",
            Self::DiningTable => "Dining Table",
            Self::Bed => "Bed",
            Self::Desk => "Desk",
            Self::Chair => "Chair",
            Self::Bookshelf => "Bookshelf",
            Self::KitchenCounter => "Kitchen Counter",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum HouseTheme {
    #[serde(rename = "Modern")]
    Modern,
    #[serde(rename = "Cozy")]
    Cozy,
    #[serde(rename = "Minimalist")]
    Minimalist,
    #[serde(rename = "Rustic")]
    Rustic,
    #[serde(rename = "Colorful")]
    Colorful,
}

impl HouseTheme {
    pub const ALL: [HouseTheme; 5] = [
        Self::Modern,
        Self::Cozy,
        Self::Minimalist,
        Self::Rustic,
        Self::Colorful,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Modern => "Modern",
            Self::Cozy => "Cozy",
            Self::Minimalist => "Minimalist",
            Self::Rustic => "Rustic",
            Self::Colorful => "Colorful",
        }
    }
}

// ---------------------------------------------------------------------------
// Family activities
// ---------------------------------------------------------------------------

/// Something the family plans or does together.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FamilyActivity {
    pub id: Uuid,
    pub kind: FamilyActivityType,
    pub title: String,
    pub description: String,
    pub participants: Vec<User>,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub is_completed: bool,
}

impl FamilyActivity {
    pub fn new(
        kind: FamilyActivityType,
        title: impl Into<String>,
        description: impl Into<String>,
        start_time: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title: title.into(),
            description: description.into(),
            participants: Vec::new(),
            start_time,
            end_time: None,
            is_completed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum FamilyActivityType {
    #[serde(rename = "Dinner Together")]
    Dinner,
    #[serde(rename = "Puzzle")]
    Puzzle,
    #[serde(rename = "Movie Night")]
    Movie,
    #[serde(rename = "Game Night")]
    Game,
    #[serde(rename = "Pet Care")]
    PetCare,
    #[serde(rename = "Other")]
    Other,
}

impl FamilyActivityType {
    pub const ALL: [FamilyActivityType; 6] = [
        Self::Dinner,
        Self::Puzzle,
        Self::Movie,
        Self::Game,
        Self::PetCare,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dinner => "Dinner Together",
            Self::Puzzle => "Puzzle",
            Self::Movie => "Movie Night",
            Self::Game => "Game Night",
            Self::PetCare => "Pet Care",
            Self::Other => "Other",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::Avatar;

    #[test]
    fn starter_house_has_living_room_with_couch_and_tv() {
        let house = House::starter();
        assert_eq!(house.rooms.len(), 1);
        assert_eq!(house.rooms[0].kind, RoomType::LivingRoom);
        assert_eq!(house.rooms[0].size, Size::new(300.0, 200.0));

        let kinds: Vec<_> = house.furniture.iter().map(|f| f.kind).collect();
        assert_eq!(kinds, vec![FurnitureType::Couch, FurnitureType::Tv]);
        assert_eq!(house.theme, HouseTheme::Modern);
    }

    #[test]
    fn family_round_trips_through_json() {
        let founder = User::new("Ann", "ann@x.com", Avatar::default());
        let family = Family::new("Smiths", founder, House::starter());

        let bytes = serde_json::to_vec(&family).unwrap();
        let back: Family = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(back, family);
    }

    #[test]
    fn room_type_serializes_with_spaces() {
        assert_eq!(
            serde_json::to_string(&RoomType::LivingRoom).unwrap(),
            "\"Living Room\""
        );
        assert_eq!(
            serde_json::to_string(&FamilyActivityType::Dinner).unwrap(),
            "\"Dinner Together\""
        );
    }
}
