//! The facade the state manager talks to.
//!
//! Dispatches each operation to the configured backend.  For sign-in and
//! family create/join the facade can substitute a simulated local success
//! when the remote call fails, governed by the offline-fallback policy in
//! [`RemoteConfig`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use hearth_shared::{Avatar, Family, InviteCode, MessageType, User};

use crate::config::RemoteConfig;
use crate::http::HttpBackend;
use crate::simulated::SimulatedBackend;
use crate::Result;

/// A server-side session handle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RemoteIdentity {
    pub id: String,
    pub email: String,
}

/// The configured primary backend.
#[derive(Debug, Clone)]
enum Backend {
    Simulated(SimulatedBackend),
    Http(HttpBackend),
}

/// Facade over the remote service.
///
/// Holds the primary backend plus a simulated twin used for the offline
/// fallback.  All calls are async and may suspend for the artificial delay
/// (simulation) or real network latency; none of them can be cancelled from
/// this layer.
#[derive(Debug, Clone)]
pub struct RemoteFacade {
    backend: Backend,
    simulated: SimulatedBackend,
    offline_fallback: bool,
}

impl RemoteFacade {
    pub fn new(config: &RemoteConfig) -> Self {
        let simulated =
            SimulatedBackend::new(config.simulated_delay, config.simulated_message_delay);

        let backend = match &config.server_url {
            Some(url) => Backend::Http(HttpBackend::new(url.clone())),
            None => Backend::Simulated(simulated.clone()),
        };

        Self {
            backend,
            simulated,
            offline_fallback: config.offline_fallback,
        }
    }

    /// Whether the facade delegates to a real server.
    pub fn is_remote(&self) -> bool {
        matches!(self.backend, Backend::Http(_))
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        avatar: Avatar,
    ) -> Result<User> {
        match &self.backend {
            Backend::Simulated(sim) => sim.sign_up(name, email, avatar).await,
            Backend::Http(http) => http.sign_up(name, email, password, &avatar).await,
        }
    }

    /// Sign in.  On remote failure with the offline fallback enabled, a
    /// simulated session is substituted and the error only logged.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        match &self.backend {
            Backend::Simulated(sim) => sim.sign_in(email).await,
            Backend::Http(http) => match http.sign_in(email, password).await {
                Ok(user) => Ok(user),
                Err(e) if self.offline_fallback => {
                    warn!(error = %e, "remote sign-in failed, using simulated session");
                    self.simulated.sign_in(email).await
                }
                Err(e) => Err(e),
            },
        }
    }

    /// Sign out.  Always degrades to local success: a failed remote
    /// sign-out must never keep the user signed in.
    pub async fn sign_out(&self) -> Result<()> {
        match &self.backend {
            Backend::Simulated(sim) => sim.sign_out().await,
            Backend::Http(http) => {
                if let Err(e) = http.sign_out().await {
                    warn!(error = %e, "remote sign-out failed, clearing locally");
                }
                Ok(())
            }
        }
    }

    /// Look up the current server-side session.  Simulation mode has no
    /// session store, so it always answers `None`.
    pub async fn current_identity(&self) -> Result<Option<RemoteIdentity>> {
        match &self.backend {
            Backend::Simulated(_) => Ok(None),
            Backend::Http(http) => http.current_identity().await,
        }
    }

    // ------------------------------------------------------------------
    // Family
    // ------------------------------------------------------------------

    pub async fn create_family(&self, name: &str, founder: &User) -> Result<Family> {
        match &self.backend {
            Backend::Simulated(sim) => sim.create_family(name, founder).await,
            Backend::Http(http) => match http.create_family(name, founder).await {
                Ok(family) => Ok(family),
                Err(e) if self.offline_fallback => {
                    warn!(error = %e, "remote family creation failed, fabricating locally");
                    self.simulated.create_family(name, founder).await
                }
                Err(e) => Err(e),
            },
        }
    }

    pub async fn join_family(&self, code: &InviteCode, joiner: &User) -> Result<Family> {
        match &self.backend {
            Backend::Simulated(sim) => sim.join_family(code, joiner).await,
            Backend::Http(http) => match http.join_family(code, joiner).await {
                Ok(family) => Ok(family),
                Err(e) if self.offline_fallback => {
                    warn!(error = %e, "remote family join failed, fabricating locally");
                    self.simulated.join_family(code, joiner).await
                }
                Err(e) => Err(e),
            },
        }
    }

    // ------------------------------------------------------------------
    // Messaging & blobs
    // ------------------------------------------------------------------

    pub async fn send_message(
        &self,
        sender: &User,
        content: &str,
        kind: MessageType,
    ) -> Result<()> {
        match &self.backend {
            Backend::Simulated(sim) => sim.send_message(content, kind).await,
            Backend::Http(http) => http.send_message(sender, content, kind).await,
        }
    }

    pub async fn upload_avatar(&self, user_id: &str, image: &[u8]) -> Result<String> {
        match &self.backend {
            Backend::Simulated(sim) => sim.upload_avatar(user_id, image).await,
            Backend::Http(http) => http.upload_avatar(user_id, image).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn facade_with_url(url: Option<&str>, fallback: bool) -> RemoteFacade {
        let config = RemoteConfig {
            server_url: url.map(String::from),
            offline_fallback: fallback,
            ..RemoteConfig::instant()
        };
        RemoteFacade::new(&config)
    }

    #[test]
    fn no_server_url_means_simulated() {
        assert!(!facade_with_url(None, true).is_remote());
        assert!(facade_with_url(Some("http://127.0.0.1:1"), true).is_remote());
    }

    #[tokio::test]
    async fn simulated_facade_has_no_session() {
        let facade = facade_with_url(None, true);
        assert_eq!(facade.current_identity().await.unwrap(), None);
    }

    // 127.0.0.1:1 refuses connections, exercising the remote-failure path
    // without any network dependency.
    #[tokio::test]
    async fn unreachable_server_falls_back_when_policy_is_on() {
        let facade = facade_with_url(Some("http://127.0.0.1:1"), true);
        let user = facade.sign_in("ann@x.com", "pw").await.unwrap();
        assert_eq!(user.name, "Demo User");
        assert_eq!(user.email, "ann@x.com");
    }

    #[tokio::test]
    async fn unreachable_server_surfaces_the_error_when_policy_is_off() {
        let facade = facade_with_url(Some("http://127.0.0.1:1"), false);
        assert!(facade.sign_in("ann@x.com", "pw").await.is_err());
    }

    #[tokio::test]
    async fn family_fallback_fabricates_around_the_founder() {
        let facade = facade_with_url(Some("http://127.0.0.1:1"), true);
        let founder = User::new("Ann", "ann@x.com", Avatar::default());
        let family = facade.create_family("Smiths", &founder).await.unwrap();
        assert_eq!(family.name, "Smiths");
        assert_eq!(family.members[0].id, founder.id);
    }

    #[tokio::test]
    async fn sign_out_degrades_to_local_success() {
        let facade = facade_with_url(Some("http://127.0.0.1:1"), false);
        facade.sign_out().await.unwrap();
    }
}
