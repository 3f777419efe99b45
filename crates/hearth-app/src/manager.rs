//! The application state manager.
//!
//! Every mutating operation of the client lives here.  Operations return
//! [`OpOutcome`] so callers can distinguish an applied mutation from a
//! skipped one (missing user, family or pet); remote and persistence
//! failures come back as errors and are also recorded in
//! [`SessionState::error_message`].

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use hearth_remote::RemoteFacade;
use hearth_shared::constants::ANIMATION_RESET_DELAY;
use hearth_shared::{
    Activity, Avatar, Family, FamilyActivity, Furniture, House, InviteCode, KeyLocation, Location,
    Message, MessageType, Notification, NotificationType, PetPersonality, PetSpecies, Room,
    VirtualPet,
};
use hearth_store::Database;

use crate::error::Result;
use crate::state::{AnimationKind, OpOutcome, SessionState, SkipReason};

/// The single orchestrator of client state.
///
/// Constructed with its collaborators injected; holds no globals.  Methods
/// take `&mut self`, so a multi-threaded embedder must serialize access
/// (mutex or actor) to preserve the single-writer guarantee.
pub struct AppManager {
    facade: RemoteFacade,
    db: Database,
    state: SessionState,
}

impl AppManager {
    pub fn new(facade: RemoteFacade, db: Database) -> Self {
        Self {
            facade,
            db,
            state: SessionState::new(),
        }
    }

    /// Read-only view of the session.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    // ------------------------------------------------------------------
    // Startup
    // ------------------------------------------------------------------

    /// Restore a previous session from local snapshots.
    ///
    /// A persisted user skips onboarding entirely and lands directly in the
    /// authenticated phase; the family snapshot is restored alongside if
    /// present.
    pub fn restore_session(&mut self) -> Result<OpOutcome> {
        let Some(user) = self.db.load_user()? else {
            debug!("no persisted session");
            return Ok(OpOutcome::Skipped(SkipReason::NothingPersisted));
        };

        info!(name = %user.name, "restored persisted session");
        self.state.current_user = Some(user);
        self.state.is_authenticated = true;
        self.state.is_onboarding = false;
        self.state.current_family = self.db.load_family()?;

        Ok(OpOutcome::Applied)
    }

    // ------------------------------------------------------------------
    // Authentication
    // ------------------------------------------------------------------

    /// Create an account and sign in as the new user.
    pub async fn create_account(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        avatar: Avatar,
    ) -> Result<OpOutcome> {
        self.state.is_loading = true;
        self.state.error_message = None;

        let result = self.facade.sign_up(name, email, password, avatar).await;
        self.state.is_loading = false;

        match result {
            Ok(user) => {
                info!(name = %user.name, "account created");
                self.db.save_user(&user)?;
                self.state.current_user = Some(user);
                self.state.is_authenticated = true;
                self.state.is_onboarding = false;
                Ok(OpOutcome::Applied)
            }
            Err(e) => {
                self.state.error_message = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Sign in to an existing account.  The facade applies the offline
    /// fallback policy; an error here means no session was established.
    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<OpOutcome> {
        self.state.is_loading = true;
        self.state.error_message = None;

        let result = self.facade.sign_in(email, password).await;
        self.state.is_loading = false;

        match result {
            Ok(user) => {
                info!(name = %user.name, "signed in");
                self.db.save_user(&user)?;
                self.state.current_user = Some(user);
                self.state.is_authenticated = true;
                self.state.is_onboarding = false;
                Ok(OpOutcome::Applied)
            }
            Err(e) => {
                self.state.error_message = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// End the session.  The remote sign-out degrades to a local clear on
    /// failure; local snapshots are left in place (sign-out drops only the
    /// in-memory session).
    pub async fn sign_out(&mut self) -> Result<OpOutcome> {
        self.facade.sign_out().await?;

        self.state = SessionState::new();
        info!("signed out");
        Ok(OpOutcome::Applied)
    }

    /// Clear the last recorded error message.
    pub fn clear_error(&mut self) {
        self.state.error_message = None;
    }

    // ------------------------------------------------------------------
    // Family management
    // ------------------------------------------------------------------

    /// Create a new family founded by the current user.
    pub async fn create_family(&mut self, name: &str) -> Result<OpOutcome> {
        let Some(user) = self.state.current_user.clone() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentUser));
        };

        self.state.is_loading = true;
        self.state.error_message = None;

        let result = self.facade.create_family(name, &user).await;
        self.state.is_loading = false;

        match result {
            Ok(family) => {
                info!(name = %family.name, code = %family.invite_code, "family created");
                self.adopt_family(family)?;
                Ok(OpOutcome::Applied)
            }
            Err(e) => {
                self.state.error_message = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Join an existing family by invite code.
    pub async fn join_family(&mut self, code: &str) -> Result<OpOutcome> {
        let code = InviteCode::parse(code)?;

        let Some(user) = self.state.current_user.clone() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentUser));
        };

        self.state.is_loading = true;
        self.state.error_message = None;

        let result = self.facade.join_family(&code, &user).await;
        self.state.is_loading = false;

        match result {
            Ok(family) => {
                info!(name = %family.name, "family joined");
                self.adopt_family(family)?;
                Ok(OpOutcome::Applied)
            }
            Err(e) => {
                self.state.error_message = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Make a freshly created or joined family current: stamp the user's
    /// family reference and persist both records.
    fn adopt_family(&mut self, family: Family) -> Result<()> {
        if let Some(user) = self.state.current_user.as_mut() {
            user.family_id = Some(family.id.to_string());
        }
        self.db.save_family(&family)?;
        self.state.current_family = Some(family);
        self.persist_user()?;
        Ok(())
    }

    /// Record a family invitation as a notification for the invited
    /// address.  Delivery is the backend's concern; this only mirrors the
    /// invite into the local notification feed.
    pub fn invite_to_family(&mut self, _email: &str) -> OpOutcome {
        let Some(user) = self.state.current_user.clone() else {
            return OpOutcome::Skipped(SkipReason::NoCurrentUser);
        };

        let body = format!("{} invited you to join their family", user.name);
        self.state.notifications.push(Notification::new(
            "Family Invitation",
            body,
            NotificationType::FamilyInvite,
            user,
        ));
        OpOutcome::Applied
    }

    // ------------------------------------------------------------------
    // Location & activity sharing
    // ------------------------------------------------------------------

    /// Report a new location: updates the user, appends a feed message and
    /// persists.  Every call appends, even if the location is unchanged.
    pub fn update_location(&mut self, location: Location) -> Result<OpOutcome> {
        let Some(user) = self.state.current_user.as_mut() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentUser));
        };

        user.current_location = Some(location.clone());

        let mut message = Message::new(
            user.clone(),
            format!("I'm at {}", location.name),
            MessageType::Location,
        );
        message.location = Some(location);
        self.state.messages.push(message);

        self.persist_user()?;
        Ok(OpOutcome::Applied)
    }

    /// Report a new activity: updates the user, appends a feed message and
    /// persists.
    pub fn update_activity(&mut self, activity: Activity) -> Result<OpOutcome> {
        let Some(user) = self.state.current_user.as_mut() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentUser));
        };

        user.current_activity = Some(activity.clone());

        let mut message = Message::new(
            user.clone(),
            format!("I'm {}", activity.title.to_lowercase()),
            MessageType::Activity,
        );
        message.activity = Some(activity);
        self.state.messages.push(message);

        self.persist_user()?;
        Ok(OpOutcome::Applied)
    }

    /// Add a named point of interest to the user's location book.
    pub fn add_key_location(&mut self, location: KeyLocation) -> Result<OpOutcome> {
        let Some(user) = self.state.current_user.as_mut() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentUser));
        };

        user.key_locations.push(location);
        self.persist_user()?;
        Ok(OpOutcome::Applied)
    }

    // ------------------------------------------------------------------
    // House management
    // ------------------------------------------------------------------

    pub fn update_house(&mut self, house: House) -> Result<OpOutcome> {
        let Some(family) = self.state.current_family.as_mut() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentFamily));
        };

        family.house = house;
        self.persist_family()?;
        Ok(OpOutcome::Applied)
    }

    pub fn add_room(&mut self, room: Room) -> Result<OpOutcome> {
        let Some(family) = self.state.current_family.as_mut() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentFamily));
        };

        family.house.rooms.push(room);
        self.persist_family()?;
        Ok(OpOutcome::Applied)
    }

    pub fn add_furniture(&mut self, furniture: Furniture) -> Result<OpOutcome> {
        let Some(family) = self.state.current_family.as_mut() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentFamily));
        };

        family.house.furniture.push(furniture);
        self.persist_family()?;
        Ok(OpOutcome::Applied)
    }

    // ------------------------------------------------------------------
    // Virtual pet
    // ------------------------------------------------------------------

    /// Give the family a pet.  Replaces any existing pet.
    pub fn create_pet(
        &mut self,
        name: &str,
        species: PetSpecies,
        personality: PetPersonality,
    ) -> Result<OpOutcome> {
        let Some(family) = self.state.current_family.as_mut() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentFamily));
        };

        info!(name, species = species.as_str(), "pet created");
        family.pet = Some(VirtualPet::new(name, species, personality));
        self.persist_family()?;
        Ok(OpOutcome::Applied)
    }

    pub fn feed_pet(&mut self) -> Result<OpOutcome> {
        let now = Utc::now();
        let pet_name = {
            let Some(family) = self.state.current_family.as_mut() else {
                return Ok(OpOutcome::Skipped(SkipReason::NoCurrentFamily));
            };
            let Some(pet) = family.pet.as_mut() else {
                return Ok(OpOutcome::Skipped(SkipReason::NoPet));
            };
            pet.feed(now);
            pet.name.clone()
        };

        self.persist_family()?;
        self.notify(
            "Pet Fed!",
            format!("{pet_name} is feeling better now!"),
            NotificationType::PetCare,
        );
        Ok(OpOutcome::Applied)
    }

    pub fn play_with_pet(&mut self) -> Result<OpOutcome> {
        let now = Utc::now();
        let pet_name = {
            let Some(family) = self.state.current_family.as_mut() else {
                return Ok(OpOutcome::Skipped(SkipReason::NoCurrentFamily));
            };
            let Some(pet) = family.pet.as_mut() else {
                return Ok(OpOutcome::Skipped(SkipReason::NoPet));
            };
            pet.play(now);
            pet.name.clone()
        };

        self.persist_family()?;
        self.notify(
            "Play Time!",
            format!("{pet_name} had a great time playing!"),
            NotificationType::PetCare,
        );
        Ok(OpOutcome::Applied)
    }

    pub fn train_pet(&mut self) -> Result<OpOutcome> {
        let now = Utc::now();
        let pet_name = {
            let Some(family) = self.state.current_family.as_mut() else {
                return Ok(OpOutcome::Skipped(SkipReason::NoCurrentFamily));
            };
            let Some(pet) = family.pet.as_mut() else {
                return Ok(OpOutcome::Skipped(SkipReason::NoPet));
            };
            pet.train(now);
            pet.name.clone()
        };

        self.persist_family()?;
        self.notify(
            "Training Progress!",
            format!("{pet_name} learned something new!"),
            NotificationType::PetCare,
        );
        Ok(OpOutcome::Applied)
    }

    pub fn rest_pet(&mut self) -> Result<OpOutcome> {
        let pet_name = {
            let Some(family) = self.state.current_family.as_mut() else {
                return Ok(OpOutcome::Skipped(SkipReason::NoCurrentFamily));
            };
            let Some(pet) = family.pet.as_mut() else {
                return Ok(OpOutcome::Skipped(SkipReason::NoPet));
            };
            pet.rest();
            pet.name.clone()
        };

        self.persist_family()?;
        self.notify(
            "Pet Rested!",
            format!("{pet_name} is feeling refreshed!"),
            NotificationType::PetCare,
        );
        Ok(OpOutcome::Applied)
    }

    /// One stat-decay step.  Driven by an external scheduler at a bounded
    /// cadence; the manager does not own the timer.
    pub fn update_pet_status(&mut self, now: DateTime<Utc>) -> Result<OpOutcome> {
        let Some(family) = self.state.current_family.as_mut() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentFamily));
        };
        let Some(pet) = family.pet.as_mut() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoPet));
        };

        pet.decay(now);
        self.persist_family()?;
        Ok(OpOutcome::Applied)
    }

    /// Advance the pet's age by one day.
    pub fn age_pet(&mut self) -> Result<OpOutcome> {
        let Some(family) = self.state.current_family.as_mut() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentFamily));
        };
        let Some(pet) = family.pet.as_mut() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoPet));
        };

        pet.age_one_day();
        self.persist_family()?;
        Ok(OpOutcome::Applied)
    }

    // ------------------------------------------------------------------
    // Messaging & notifications
    // ------------------------------------------------------------------

    /// Send a message through the facade and mirror it into the local feed.
    pub async fn send_message(&mut self, content: &str, kind: MessageType) -> Result<OpOutcome> {
        let Some(user) = self.state.current_user.clone() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentUser));
        };

        match self.facade.send_message(&user, content, kind).await {
            Ok(()) => {
                self.state
                    .messages
                    .push(Message::new(user, content, kind));
                Ok(OpOutcome::Applied)
            }
            Err(e) => {
                self.state.error_message = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Append a notification from the current user.
    pub fn add_notification(
        &mut self,
        title: &str,
        body: &str,
        kind: NotificationType,
    ) -> OpOutcome {
        let Some(user) = self.state.current_user.clone() else {
            return OpOutcome::Skipped(SkipReason::NoCurrentUser);
        };

        self.state
            .notifications
            .push(Notification::new(title, body, kind, user));
        OpOutcome::Applied
    }

    /// Flip the read flag on the first notification with the given id.
    /// Calling again on an already-read notification is a harmless
    /// re-apply.
    pub fn mark_notification_read(&mut self, id: Uuid) -> OpOutcome {
        match self.state.notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.is_read = true;
                OpOutcome::Applied
            }
            None => OpOutcome::Skipped(SkipReason::NotificationNotFound),
        }
    }

    /// Plan a family activity.
    pub fn create_family_activity(&mut self, activity: FamilyActivity) -> Result<OpOutcome> {
        let Some(family) = self.state.current_family.as_mut() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentFamily));
        };

        family.activities.push(activity);
        self.persist_family()?;
        Ok(OpOutcome::Applied)
    }

    // ------------------------------------------------------------------
    // Avatar
    // ------------------------------------------------------------------

    /// Replace the user's avatar wholesale.
    pub fn update_avatar(&mut self, avatar: Avatar) -> Result<OpOutcome> {
        let Some(user) = self.state.current_user.as_mut() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentUser));
        };

        user.avatar = avatar;
        self.persist_user()?;
        Ok(OpOutcome::Applied)
    }

    pub fn set_avatar_pose(&mut self, pose: &str) -> Result<OpOutcome> {
        self.set_avatar_field(|avatar| avatar.pose = pose.to_string())
    }

    pub fn set_avatar_expression(&mut self, expression: &str) -> Result<OpOutcome> {
        self.set_avatar_field(|avatar| avatar.expression = expression.to_string())
    }

    pub fn set_avatar_outfit(&mut self, outfit: &str) -> Result<OpOutcome> {
        self.set_avatar_field(|avatar| avatar.outfit = outfit.to_string())
    }

    fn set_avatar_field(&mut self, apply: impl FnOnce(&mut Avatar)) -> Result<OpOutcome> {
        let Some(user) = self.state.current_user.as_mut() else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentUser));
        };

        apply(&mut user.avatar);
        self.persist_user()?;
        Ok(OpOutcome::Applied)
    }

    /// Upload an avatar image and record the URL the blob store assigned.
    pub async fn upload_avatar(&mut self, image: &[u8]) -> Result<OpOutcome> {
        let Some(user_id) = self.state.current_user.as_ref().map(|u| u.id.to_string()) else {
            return Ok(OpOutcome::Skipped(SkipReason::NoCurrentUser));
        };

        match self.facade.upload_avatar(&user_id, image).await {
            Ok(url) => {
                if let Some(user) = self.state.current_user.as_mut() {
                    user.avatar.external_url = Some(url);
                }
                self.persist_user()?;
                Ok(OpOutcome::Applied)
            }
            Err(e) => {
                self.state.error_message = Some(e.to_string());
                Err(e.into())
            }
        }
    }

    /// Start a one-shot animation.  The flag goes up immediately and stays
    /// up until the deadline passes; re-triggering replaces the deadline,
    /// so a second wave mid-flight extends rather than races the first.
    /// Animation flags are never persisted.
    pub fn trigger_avatar_animation(&mut self, kind: AnimationKind) -> OpOutcome {
        let Some(user) = self.state.current_user.as_mut() else {
            return OpOutcome::Skipped(SkipReason::NoCurrentUser);
        };

        let deadline = Utc::now() + Duration::milliseconds(ANIMATION_RESET_DELAY.as_millis() as i64);
        match kind {
            AnimationKind::Wave => {
                user.avatar.is_waving = true;
                self.state.waving_until = Some(deadline);
            }
            AnimationKind::Point => {
                user.avatar.is_pointing = true;
                self.state.pointing_until = Some(deadline);
            }
        }
        OpOutcome::Applied
    }

    /// Reset expired one-shot animations.  Scheduler hook, like
    /// [`update_pet_status`](Self::update_pet_status).
    pub fn tick_animations(&mut self, now: DateTime<Utc>) -> OpOutcome {
        let Some(user) = self.state.current_user.as_mut() else {
            return OpOutcome::Skipped(SkipReason::NoCurrentUser);
        };

        if self.state.waving_until.is_some_and(|t| now >= t) {
            user.avatar.is_waving = false;
            self.state.waving_until = None;
        }
        if self.state.pointing_until.is_some_and(|t| now >= t) {
            user.avatar.is_pointing = false;
            self.state.pointing_until = None;
        }
        OpOutcome::Applied
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    fn persist_user(&mut self) -> Result<()> {
        if let Some(user) = &self.state.current_user {
            self.db.save_user(user)?;
        }
        Ok(())
    }

    fn persist_family(&mut self) -> Result<()> {
        if let Some(family) = &self.state.current_family {
            self.db.save_family(family)?;
        }
        Ok(())
    }

    fn notify(
        &mut self,
        title: &str,
        body: impl Into<String>,
        kind: NotificationType,
    ) {
        // Notifications need a sender; without a signed-in user they are
        // dropped, matching the precondition rules everywhere else.
        if let Some(user) = self.state.current_user.clone() {
            self.state
                .notifications
                .push(Notification::new(title, body, kind, user));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Phase;
    use hearth_remote::RemoteConfig;

    async fn manager() -> AppManager {
        let facade = RemoteFacade::new(&RemoteConfig::instant());
        let db = Database::open_in_memory().unwrap();
        AppManager::new(facade, db)
    }

    async fn signed_in_manager() -> AppManager {
        let mut m = manager().await;
        let outcome = m
            .create_account("Ann", "ann@x.com", "hunter2", Avatar::default())
            .await
            .unwrap();
        assert_eq!(outcome, OpOutcome::Applied);
        m
    }

    async fn family_manager() -> AppManager {
        let mut m = signed_in_manager().await;
        assert_eq!(m.create_family("Smiths").await.unwrap(), OpOutcome::Applied);
        m
    }

    #[tokio::test]
    async fn sign_up_establishes_the_session() {
        let m = signed_in_manager().await;

        let user = m.state().current_user.as_ref().unwrap();
        assert_eq!(user.name, "Ann");
        assert!(m.state().is_authenticated);
        assert!(!m.state().is_onboarding);
        assert!(!m.state().is_loading);
        assert_eq!(m.state().phase(), Phase::NoFamily);
    }

    #[tokio::test]
    async fn create_family_without_user_is_skipped() {
        let mut m = manager().await;
        let outcome = m.create_family("Smiths").await.unwrap();
        assert_eq!(outcome, OpOutcome::Skipped(SkipReason::NoCurrentUser));
        assert!(m.state().current_family.is_none());
    }

    #[tokio::test]
    async fn create_family_persists_and_links_the_user() {
        let mut m = family_manager().await;

        let family = m.state.current_family.as_ref().unwrap();
        assert_eq!(family.name, "Smiths");
        assert_eq!(
            m.state.current_user.as_ref().unwrap().family_id,
            Some(family.id.to_string())
        );
        assert!(m.db.load_family().unwrap().is_some());
        assert_eq!(m.state().phase(), Phase::WithFamily);
    }

    #[tokio::test]
    async fn join_family_rejects_malformed_codes() {
        let mut m = signed_in_manager().await;
        assert!(m.join_family("nope").await.is_err());
        assert!(m.state().current_family.is_none());
    }

    #[tokio::test]
    async fn join_family_accepts_a_valid_code() {
        let mut m = signed_in_manager().await;
        let outcome = m.join_family("ab12cd").await.unwrap();
        assert_eq!(outcome, OpOutcome::Applied);
        assert_eq!(m.state().current_family.as_ref().unwrap().name, "Sample Family");
    }

    #[tokio::test]
    async fn sign_out_clears_the_session_but_not_snapshots() {
        let mut m = family_manager().await;
        let _ = m.sign_out().await.unwrap();

        assert!(m.state().current_user.is_none());
        assert!(m.state().current_family.is_none());
        assert!(!m.state().is_authenticated);
        assert!(m.state().messages.is_empty());
        assert!(m.state().notifications.is_empty());

        // Snapshots survive; the next restore resumes the session.
        assert_eq!(m.restore_session().unwrap(), OpOutcome::Applied);
        assert!(m.state().is_authenticated);
    }

    #[tokio::test]
    async fn restore_session_with_empty_store_is_skipped() {
        let mut m = manager().await;
        assert_eq!(
            m.restore_session().unwrap(),
            OpOutcome::Skipped(SkipReason::NothingPersisted)
        );
        assert_eq!(m.state().phase(), Phase::Onboarding);
    }

    #[tokio::test]
    async fn feed_pet_without_pet_is_a_noop() {
        let mut m = family_manager().await;
        let outcome = m.feed_pet().unwrap();

        assert_eq!(outcome, OpOutcome::Skipped(SkipReason::NoPet));
        assert!(m.state().notifications.is_empty());
        assert!(m.db.load_family().unwrap().unwrap().pet.is_none());
    }

    #[tokio::test]
    async fn pet_care_applies_deltas_and_notifies() {
        let mut m = family_manager().await;
        let _ = m.create_pet("Rex", PetSpecies::Dog, PetPersonality::Friendly)
            .unwrap();

        assert_eq!(m.feed_pet().unwrap(), OpOutcome::Applied);

        let pet = m.state().current_family.as_ref().unwrap().pet.as_ref().unwrap();
        assert!((pet.hunger - 0.8).abs() < 1e-9);
        assert!((pet.happiness - 0.6).abs() < 1e-9);

        assert_eq!(m.state().notifications.len(), 1);
        assert_eq!(m.state().notifications[0].title, "Pet Fed!");

        // The persisted family carries the fed pet.
        let stored = m.db.load_family().unwrap().unwrap();
        assert!((stored.pet.unwrap().hunger - 0.8).abs() < 1e-9);
    }

    #[tokio::test]
    async fn pet_decay_is_persisted() {
        let mut m = family_manager().await;
        let _ = m.create_pet("Rex", PetSpecies::Dog, PetPersonality::Friendly)
            .unwrap();

        let now = Utc::now() + Duration::seconds(4000);
        assert_eq!(m.update_pet_status(now).unwrap(), OpOutcome::Applied);

        let stored = m.db.load_family().unwrap().unwrap();
        let pet = stored.pet.unwrap();
        assert!((pet.hunger - 0.45).abs() < 1e-9);
        assert!((pet.energy - 0.98).abs() < 1e-9);
        // No notification for background decay.
        assert!(m.state().notifications.is_empty());
    }

    #[tokio::test]
    async fn update_location_appends_a_message_every_time() {
        let mut m = signed_in_manager().await;
        let home = Location::new(48.85, 2.35, "Home");

        assert_eq!(m.update_location(home.clone()).unwrap(), OpOutcome::Applied);
        assert_eq!(m.update_location(home).unwrap(), OpOutcome::Applied);

        assert_eq!(m.state().messages.len(), 2);
        assert_eq!(m.state().messages[0].content, "I'm at Home");
        assert_eq!(m.state().messages[0].kind, MessageType::Location);

        let stored = m.db.load_user().unwrap().unwrap();
        assert_eq!(stored.current_location.as_ref().unwrap().name, "Home");
    }

    #[tokio::test]
    async fn update_activity_lowercases_the_title() {
        let mut m = signed_in_manager().await;
        let activity = Activity::new(hearth_shared::ActivityType::Watching, "Watching TV");

        let _ = m.update_activity(activity).unwrap();
        assert_eq!(m.state().messages[0].content, "I'm watching tv");
    }

    #[tokio::test]
    async fn mark_notification_read_is_idempotent() {
        let mut m = signed_in_manager().await;
        assert_eq!(
            m.add_notification("Hi", "there", NotificationType::FamilyInvite),
            OpOutcome::Applied
        );
        let id = m.state().notifications[0].id;

        assert_eq!(m.mark_notification_read(id), OpOutcome::Applied);
        assert_eq!(m.mark_notification_read(id), OpOutcome::Applied);

        let read: Vec<_> = m
            .state()
            .notifications
            .iter()
            .filter(|n| n.is_read)
            .collect();
        assert_eq!(read.len(), 1);

        assert_eq!(
            m.mark_notification_read(Uuid::new_v4()),
            OpOutcome::Skipped(SkipReason::NotificationNotFound)
        );
    }

    #[tokio::test]
    async fn send_message_mirrors_into_the_feed() {
        let mut m = signed_in_manager().await;
        let outcome = m.send_message("dinner at 7", MessageType::Text).await.unwrap();

        assert_eq!(outcome, OpOutcome::Applied);
        assert_eq!(m.state().messages.len(), 1);
        assert_eq!(m.state().messages[0].content, "dinner at 7");
    }

    #[tokio::test]
    async fn avatar_animation_trigger_and_tick() {
        let mut m = signed_in_manager().await;

        assert_eq!(
            m.trigger_avatar_animation(AnimationKind::Wave),
            OpOutcome::Applied
        );
        assert!(m.state().current_user.as_ref().unwrap().avatar.is_waving);
        let first_deadline = m.state().waving_until.unwrap();

        // Re-trigger replaces the deadline instead of racing it.
        let _ = m.trigger_avatar_animation(AnimationKind::Wave);
        assert!(m.state().waving_until.unwrap() >= first_deadline);

        // Before the deadline nothing resets.
        let _ = m.tick_animations(first_deadline - Duration::seconds(1));
        assert!(m.state().current_user.as_ref().unwrap().avatar.is_waving);

        // After the deadline the flag drops.
        let _ = m.tick_animations(Utc::now() + Duration::seconds(2));
        let user = m.state().current_user.as_ref().unwrap();
        assert!(!user.avatar.is_waving);
        assert!(m.state().waving_until.is_none());

        // The trigger was never persisted.
        let stored = m.db.load_user().unwrap().unwrap();
        assert!(!stored.avatar.is_waving);
    }

    #[tokio::test]
    async fn upload_avatar_records_the_assigned_url() {
        let mut m = signed_in_manager().await;
        let outcome = m.upload_avatar(&[0xFF, 0xD8]).await.unwrap();

        assert_eq!(outcome, OpOutcome::Applied);
        let user = m.state().current_user.as_ref().unwrap();
        assert_eq!(
            user.avatar.external_url.as_deref(),
            Some("https://via.placeholder.com/150")
        );
    }

    #[tokio::test]
    async fn house_edits_require_a_family() {
        let mut m = signed_in_manager().await;
        let outcome = m.update_house(House::starter()).unwrap();
        assert_eq!(outcome, OpOutcome::Skipped(SkipReason::NoCurrentFamily));
    }

    #[tokio::test]
    async fn add_room_extends_the_house() {
        let mut m = family_manager().await;
        let room = Room {
            id: Uuid::new_v4(),
            name: "Office".into(),
            kind: hearth_shared::RoomType::Office,
            position: hearth_shared::Point::new(310.0, 0.0),
            size: hearth_shared::Size::new(150.0, 150.0),
            furniture: Vec::new(),
        };

        assert_eq!(m.add_room(room).unwrap(), OpOutcome::Applied);
        let house = &m.state().current_family.as_ref().unwrap().house;
        assert_eq!(house.rooms.len(), 2);
    }
}
