//! Session state held by the [`AppManager`](crate::AppManager).

use chrono::{DateTime, Utc};

use hearth_shared::{Family, Message, Notification, User};

/// The client's entire mutable session.
///
/// Message and notification lists are append-only and preserve append
/// order; neither is persisted.  The animation deadlines back the one-shot
/// wave/point triggers: re-triggering replaces the deadline, and an
/// external scheduler drives the reset through
/// [`AppManager::tick_animations`](crate::AppManager::tick_animations).
#[derive(Debug, Default)]
pub struct SessionState {
    pub current_user: Option<User>,
    pub current_family: Option<Family>,
    pub is_authenticated: bool,
    pub is_onboarding: bool,
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub messages: Vec<Message>,
    pub notifications: Vec<Notification>,

    /// When the current wave animation expires, if one is active.
    pub waving_until: Option<DateTime<Utc>>,
    /// When the current point animation expires, if one is active.
    pub pointing_until: Option<DateTime<Utc>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            is_onboarding: true,
            ..Self::default()
        }
    }

    /// Coarse lifecycle phase derived from the session flags.
    pub fn phase(&self) -> Phase {
        if self.is_authenticated {
            if self.current_family.is_some() {
                Phase::WithFamily
            } else {
                Phase::NoFamily
            }
        } else if self.is_loading {
            Phase::Authenticating
        } else if self.is_onboarding {
            Phase::Onboarding
        } else {
            Phase::SignedOut
        }
    }
}

/// Coarse client lifecycle phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Onboarding,
    SignedOut,
    Authenticating,
    /// Signed in, not yet part of a family.
    NoFamily,
    /// Signed in with a family loaded.
    WithFamily,
}

/// What an operation actually did.
///
/// The original client silently ignored operations whose preconditions were
/// missing; `Skipped` keeps that no-op behavior while letting callers and
/// tests tell "nothing happened" apart from success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum OpOutcome {
    /// The operation ran and mutated state.
    Applied,
    /// A precondition was missing; state is untouched.
    Skipped(SkipReason),
}

/// Why an operation was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    NoCurrentUser,
    NoCurrentFamily,
    NoPet,
    NotificationNotFound,
    /// `restore_session` found no persisted user.
    NothingPersisted,
}

/// One-shot avatar animations driven through the deadline mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationKind {
    Wave,
    Point,
}
