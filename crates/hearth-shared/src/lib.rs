//! # hearth-shared
//!
//! Domain model for the Hearth family-sharing application.
//!
//! Everything in this crate is a plain value type: users and their avatars,
//! families with their shared house and virtual pet, messages and
//! notifications.  All records derive `Serialize`/`Deserialize` so they can
//! be persisted as JSON snapshots and shipped over the remote API unchanged.
//! Behavior is limited to default-value construction, invite-code handling,
//! and the pet stat arithmetic (pure functions of an explicit clock).

pub mod constants;
pub mod family;
pub mod invite;
pub mod message;
pub mod pet;
pub mod user;

pub use family::{
    Family, FamilyActivity, FamilyActivityType, Furniture, FurnitureType, House, HouseTheme,
    Point, Room, RoomType, Size,
};
pub use invite::{InviteCode, InviteError};
pub use message::{Message, MessageType, Notification, NotificationType};
pub use pet::{PetPersonality, PetSpecies, VirtualPet};
pub use user::{Activity, ActivityType, Avatar, KeyLocation, Location, LocationType, User};
