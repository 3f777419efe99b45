//! HTTP backend: delegates every facade call to the remote service.
//!
//! The remote document schema is owned by the service; the field names used
//! here (`name`, `createdBy`, `createdAt`, `members`, `inviteCode`, `id`,
//! `email`, `isRead`, `timestamp`, `type`, `senderId`, `content`) must be
//! preserved exactly for compatibility with existing deployments.
//!
//! No client-side timeout is applied; callers that need one must add an
//! external timeout layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hearth_shared::{Avatar, Family, House, InviteCode, MessageType, User};

use crate::facade::RemoteIdentity;
use crate::{RemoteError, Result};

/// A backend that talks to a real Hearth service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    base_url: String,
    client: reqwest::Client,
}

// ---------------------------------------------------------------------------
// Wire documents
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
struct SignUpRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
    avatar: &'a Avatar,
}

#[derive(Debug, Serialize)]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct UserDoc {
    id: Uuid,
    name: String,
    email: String,
    avatar: Option<Avatar>,
}

impl UserDoc {
    fn into_user(self) -> User {
        let mut user = User::new(self.name, self.email, self.avatar.unwrap_or_default());
        user.id = self.id;
        user
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CreateFamilyRequest<'a> {
    name: &'a str,
    created_by: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JoinFamilyRequest<'a> {
    invite_code: &'a str,
    id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FamilyDoc {
    id: Uuid,
    name: String,
    members: Vec<UserDoc>,
    invite_code: String,
    created_at: DateTime<Utc>,
}

impl FamilyDoc {
    /// The wire document carries no house or pet; those live only in local
    /// snapshots, so a freshly fetched family starts with an empty house.
    fn into_family(self) -> Result<Family> {
        let invite_code = InviteCode::parse(&self.invite_code)?;
        Ok(Family {
            id: self.id,
            name: self.name,
            members: self.members.into_iter().map(UserDoc::into_user).collect(),
            house: House::default(),
            pet: None,
            activities: Vec::new(),
            invite_code,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendMessageRequest<'a> {
    id: Uuid,
    sender_id: Uuid,
    content: &'a str,
    #[serde(rename = "type")]
    kind: MessageType,
    timestamp: DateTime<Utc>,
    is_read: bool,
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    url: String,
}

// ---------------------------------------------------------------------------
// Backend
// ---------------------------------------------------------------------------

impl HttpBackend {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub async fn sign_up(
        &self,
        name: &str,
        email: &str,
        password: &str,
        avatar: &Avatar,
    ) -> Result<User> {
        let request = SignUpRequest {
            name,
            email,
            password,
            avatar,
        };

        let doc: UserDoc = self
            .post_json("/auth/signup", &request)
            .await?
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;

        Ok(doc.into_user())
    }

    pub async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        let request = SignInRequest { email, password };

        let doc: UserDoc = self
            .post_json("/auth/signin", &request)
            .await?
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;

        Ok(doc.into_user())
    }

    pub async fn sign_out(&self) -> Result<()> {
        self.post_json("/auth/signout", &serde_json::json!({})).await?;
        Ok(())
    }

    /// Look up the current server-side session, if any.
    pub async fn current_identity(&self) -> Result<Option<RemoteIdentity>> {
        let resp = self.client.get(self.url("/auth/session")).send().await?;

        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = check_status(resp).await?;

        let identity = resp
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(Some(identity))
    }

    pub async fn create_family(&self, name: &str, founder: &User) -> Result<Family> {
        let request = CreateFamilyRequest {
            name,
            created_by: founder.id,
        };

        let doc: FamilyDoc = self
            .post_json("/families", &request)
            .await?
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;

        doc.into_family()
    }

    pub async fn join_family(&self, code: &InviteCode, joiner: &User) -> Result<Family> {
        let request = JoinFamilyRequest {
            invite_code: code.as_str(),
            id: joiner.id,
        };

        let doc: FamilyDoc = self
            .post_json("/families/join", &request)
            .await?
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;

        doc.into_family()
    }

    pub async fn send_message(
        &self,
        sender: &User,
        content: &str,
        kind: MessageType,
    ) -> Result<()> {
        let request = SendMessageRequest {
            id: Uuid::new_v4(),
            sender_id: sender.id,
            content,
            kind,
            timestamp: Utc::now(),
            is_read: false,
        };

        self.post_json("/messages", &request).await?;
        Ok(())
    }

    /// Upload avatar image bytes; returns the public URL assigned by the
    /// blob store.
    pub async fn upload_avatar(&self, user_id: &str, image: &[u8]) -> Result<String> {
        let resp = self
            .client
            .post(self.url(&format!("/avatars/{user_id}")))
            .body(image.to_vec())
            .send()
            .await?;
        let resp = check_status(resp).await?;

        let upload: UploadResponse = resp
            .json()
            .await
            .map_err(|e| RemoteError::Decode(e.to_string()))?;
        Ok(upload.url)
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<reqwest::Response> {
        let resp = self.client.post(self.url(path)).json(body).send().await?;
        check_status(resp).await
    }
}

/// Map a non-success status into [`RemoteError::Status`], keeping whatever
/// the server put in the body as the message.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let message = resp.text().await.unwrap_or_default();
    Err(RemoteError::Status {
        status: status.as_u16(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joining_handles_trailing_slash() {
        let backend = HttpBackend::new("https://api.example.com/");
        assert_eq!(
            backend.url("/auth/signin"),
            "https://api.example.com/auth/signin"
        );
    }

    #[test]
    fn message_request_uses_the_document_field_names() {
        let request = SendMessageRequest {
            id: Uuid::nil(),
            sender_id: Uuid::nil(),
            content: "hi",
            kind: MessageType::Text,
            timestamp: Utc::now(),
            is_read: false,
        };

        let value = serde_json::to_value(&request).unwrap();
        let obj = value.as_object().unwrap();
        for field in ["id", "senderId", "content", "type", "timestamp", "isRead"] {
            assert!(obj.contains_key(field), "missing field {field}");
        }
        assert_eq!(obj["type"], "Text");
    }

    #[test]
    fn family_doc_decodes_the_wire_schema() {
        let json = serde_json::json!({
            "id": Uuid::new_v4(),
            "name": "Smiths",
            "members": [{
                "id": Uuid::new_v4(),
                "name": "Ann",
                "email": "ann@x.com",
                "avatar": null,
            }],
            "inviteCode": "AB12CD",
            "createdAt": Utc::now(),
        });

        let doc: FamilyDoc = serde_json::from_value(json).unwrap();
        let family = doc.into_family().unwrap();
        assert_eq!(family.name, "Smiths");
        assert_eq!(family.invite_code.as_str(), "AB12CD");
        assert!(family.house.rooms.is_empty());
    }
}
