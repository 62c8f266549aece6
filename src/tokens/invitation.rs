/// Team invitation payload
///
/// An invitation token's payload carries everything needed to join the
/// invitee to a team when the token is redeemed: who was invited, to which
/// team, with which role, and who sent it. The payload is serialized to
/// JSON for storage under an `invite:{invite_id}` key.
///
/// # Example
///
/// ```
/// use crewtask_core::tokens::{InvitePayload, TeamRole};
/// use uuid::Uuid;
///
/// # fn example() -> Result<(), serde_json::Error> {
/// let payload = InvitePayload {
///     email: "new@member.com".to_string(),
///     user_id: None,
///     role: TeamRole::Member,
///     team_id: Uuid::new_v4(),
///     inviter_name: "Alice".to_string(),
/// };
///
/// let json = payload.to_json()?;
/// let roundtrip = InvitePayload::from_json(&json)?;
/// assert_eq!(payload, roundtrip);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role the invitee will hold in the team once the invitation is accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamRole {
    /// Can manage members, invitations, and all team tasks
    Admin,

    /// Can work on assigned tasks
    Member,
}

impl TeamRole {
    /// Converts role to string for storage
    pub fn as_str(&self) -> &'static str {
        match self {
            TeamRole::Admin => "admin",
            TeamRole::Member => "member",
        }
    }
}

/// Payload stored under an invitation token key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitePayload {
    /// Email address the invitation was sent to
    pub email: String,

    /// Invitee's user ID, if they already have an account
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,

    /// Role granted on acceptance
    pub role: TeamRole,

    /// Team being joined
    pub team_id: Uuid,

    /// Display name of the inviting admin (for the invitation email)
    pub inviter_name: String,
}

impl InvitePayload {
    /// Serializes to JSON string for token storage
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes from a stored JSON payload
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_payload() -> InvitePayload {
        InvitePayload {
            email: "new@member.com".to_string(),
            user_id: Some(Uuid::new_v4()),
            role: TeamRole::Member,
            team_id: Uuid::new_v4(),
            inviter_name: "Alice".to_string(),
        }
    }

    #[test]
    fn test_team_role_as_str() {
        assert_eq!(TeamRole::Admin.as_str(), "admin");
        assert_eq!(TeamRole::Member.as_str(), "member");
    }

    #[test]
    fn test_payload_roundtrip() {
        let payload = sample_payload();
        let json = payload.to_json().unwrap();
        let roundtrip = InvitePayload::from_json(&json).unwrap();
        assert_eq!(payload, roundtrip);
    }

    #[test]
    fn test_payload_wire_field_names() {
        let payload = sample_payload();
        let json = payload.to_json().unwrap();

        assert!(json.contains("\"email\""));
        assert!(json.contains("\"userId\""));
        assert!(json.contains("\"teamId\""));
        assert!(json.contains("\"inviterName\""));
        assert!(json.contains("\"role\":\"member\""));
    }

    #[test]
    fn test_payload_without_user_id() {
        let mut payload = sample_payload();
        payload.user_id = None;

        let json = payload.to_json().unwrap();
        assert!(!json.contains("userId"));

        let roundtrip = InvitePayload::from_json(&json).unwrap();
        assert_eq!(roundtrip.user_id, None);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(InvitePayload::from_json("not json").is_err());
        assert!(InvitePayload::from_json("{}").is_err());
    }
}
