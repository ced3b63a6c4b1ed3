use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role value permitted past the sign-in gate. No other roles are modeled.
pub const ADMIN_ROLE: i32 = 0;

/// Projection of one `profiles` row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub role: i32,
}

impl UserProfile {
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// The signed-in user as the client sees it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
    pub role: i32,
}

/// Why the gate denied a freshly authenticated user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateDenyReason {
    /// A profile exists but its role is not the admin role.
    NotAllowed,
    /// The profile row is missing or the lookup failed.
    ProfileMissing,
}

impl GateDenyReason {
    pub fn message(&self) -> &'static str {
        match self {
            GateDenyReason::NotAllowed => "User is not allowed to login",
            GateDenyReason::ProfileMissing => "Profile not found",
        }
    }
}

/// Outcome of the post-authentication authorization check.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Allow,
    Deny {
        /// Whether the just-created upstream session must be revoked.
        revoke_session: bool,
        reason: GateDenyReason,
    },
}

/// Decide whether a freshly authenticated user may enter the dashboard.
///
/// Takes the result of the profile lookup that follows sign-in. Every
/// denying branch revokes the session: a user who cannot pass the gate
/// must not be left holding a live session, whether the profile row was
/// missing, the lookup failed, or the role was wrong.
pub fn evaluate_gate(lookup: Result<Option<UserProfile>, ()>) -> GateDecision {
    match lookup {
        Ok(Some(profile)) if profile.is_admin() => GateDecision::Allow,
        Ok(Some(_)) => GateDecision::Deny {
            revoke_session: true,
            reason: GateDenyReason::NotAllowed,
        },
        Ok(None) | Err(()) => GateDecision::Deny {
            revoke_session: true,
            reason: GateDenyReason::ProfileMissing,
        },
    }
}
