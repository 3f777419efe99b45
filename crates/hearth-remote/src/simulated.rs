//! Simulated backend: fixed-delay locally fabricated successes.
//!
//! This is the behavior the client falls back to when no server is
//! configured or when a remote call fails with the offline-fallback policy
//! enabled.  It is also the test double for the facade and the state
//! manager.

use std::time::Duration;

use hearth_shared::{Avatar, Family, House, InviteCode, MessageType, User};

use crate::Result;

/// Placeholder URL returned for simulated avatar uploads.
const PLACEHOLDER_AVATAR_URL: &str = "https://via.placeholder.com/150";

/// A backend that never touches the network.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
    /// Shorter delay used for message sends.
    message_delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration, message_delay: Duration) -> Self {
        Self {
            delay,
            message_delay,
        }
    }

    /// Fabricate a new account from the request itself.
    pub async fn sign_up(&self, name: &str, email: &str, avatar: Avatar) -> Result<User> {
        tokio::time::sleep(self.delay).await;
        Ok(User::new(name, email, avatar))
    }

    /// Fabricate a session for any credentials.
    pub async fn sign_in(&self, email: &str) -> Result<User> {
        tokio::time::sleep(self.delay).await;
        Ok(User::new("Demo User", email, Avatar::default()))
    }

    pub async fn sign_out(&self) -> Result<()> {
        tokio::time::sleep(self.delay).await;
        Ok(())
    }

    /// Fabricate a family founded by the given user, complete with the
    /// starter house layout and a fresh invite code.
    pub async fn create_family(&self, name: &str, founder: &User) -> Result<Family> {
        tokio::time::sleep(self.delay).await;
        Ok(Family::new(name, founder.clone(), House::starter()))
    }

    /// Fabricate the family behind any invite code.
    pub async fn join_family(&self, _code: &InviteCode, joiner: &User) -> Result<Family> {
        tokio::time::sleep(self.delay).await;
        Ok(Family::new("Sample Family", joiner.clone(), House::starter()))
    }

    pub async fn send_message(&self, _content: &str, _kind: MessageType) -> Result<()> {
        tokio::time::sleep(self.message_delay).await;
        Ok(())
    }

    pub async fn upload_avatar(&self, _user_id: &str, _image: &[u8]) -> Result<String> {
        tokio::time::sleep(self.delay).await;
        Ok(PLACEHOLDER_AVATAR_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delays_are_stored_as_configured() {
        let backend =
            SimulatedBackend::new(Duration::from_secs(1), Duration::from_millis(500));
        assert_eq!(backend.delay, Duration::from_secs(1));
        assert_eq!(backend.message_delay, Duration::from_millis(500));
    }

    #[tokio::test]
    async fn sign_up_echoes_the_request() {
        let backend = SimulatedBackend::new(Duration::ZERO, Duration::ZERO);
        let user = backend
            .sign_up("Ann", "ann@x.com", Avatar::default())
            .await
            .unwrap();
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "ann@x.com");
    }

    #[tokio::test]
    async fn sign_in_fabricates_a_demo_user() {
        let backend = SimulatedBackend::new(Duration::ZERO, Duration::ZERO);
        let user = backend.sign_in("ann@x.com").await.unwrap();
        assert_eq!(user.name, "Demo User");
        assert_eq!(user.email, "ann@x.com");
    }

    #[tokio::test]
    async fn created_family_contains_the_founder() {
        let backend = SimulatedBackend::new(Duration::ZERO, Duration::ZERO);
        let founder = User::new("Ann", "ann@x.com", Avatar::default());
        let family = backend.create_family("Smiths", &founder).await.unwrap();

        assert_eq!(family.name, "Smiths");
        assert_eq!(family.members.len(), 1);
        assert_eq!(family.members[0].id, founder.id);
        assert!(!family.house.rooms.is_empty());
    }

    #[tokio::test]
    async fn joined_family_is_the_sample_family() {
        let backend = SimulatedBackend::new(Duration::ZERO, Duration::ZERO);
        let joiner = User::new("Bob", "bob@x.com", Avatar::default());
        let code = InviteCode::generate();
        let family = backend.join_family(&code, &joiner).await.unwrap();
        assert_eq!(family.name, "Sample Family");
    }
}
