//! User model and the payloads of the account endpoints

use std::{fmt, str::FromStr};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role stored on every user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    #[default]
    Learner,
    Organizer,
    Admin,
}

impl Role {
    /// Get the role name as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Learner => "LEARNER",
            Role::Organizer => "ORGANIZER",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LEARNER" => Ok(Role::Learner),
            "ORGANIZER" => Ok(Role::Organizer),
            "ADMIN" => Ok(Role::Admin),
            other => Err(anyhow::anyhow!("Unknown role: {}", other)),
        }
    }
}

/// User entity
///
/// Deliberately not `Serialize`: the password hash must never leave the
/// service layer.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New user creation payload
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role: Role,
}

/// Profile update payload
///
/// `name` is always written. For `bio` and `avatar_url` the outer `None`
/// leaves the stored value alone and `Some(None)` clears it.
#[derive(Debug, Clone, Default)]
pub struct UpdateUser {
    pub name: String,
    pub bio: Option<Option<String>>,
    pub avatar_url: Option<Option<String>>,
}

/// Request for user registration
#[derive(Debug, Deserialize)]
pub struct RegisterUserRequest {
    pub email: String,
    pub password: String,
}

/// Response for user registration
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterUserResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: Option<Uuid>,
}

/// Request for user authentication
#[derive(Debug, Deserialize)]
pub struct AuthenticateUserRequest {
    pub email: String,
    pub password: String,
}

/// Outcome of an authentication attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthStatus {
    Success,
    Failure,
}

/// Response for user authentication
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthenticateUserResponse {
    pub status: AuthStatus,
    pub access_token: Option<String>,
    pub user_id: Option<Uuid>,
    pub error: Option<String>,
}

/// Query parameters for the profile view
#[derive(Debug, Deserialize)]
pub struct ViewProfileQuery {
    pub user_id: Uuid,
}

/// Response for the profile view
#[derive(Debug, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub bio: Option<String>,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: Option<String>,
    pub role: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
}

impl From<User> for UserProfileResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            bio: user.bio,
            avatar_url: user.avatar_url,
            role: user.role.as_str().to_string(),
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

/// Request for a profile edit
///
/// The email identifies the account and is not changed.
#[derive(Debug, Deserialize)]
pub struct EditProfileRequest {
    pub email: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

/// Outcome of a profile edit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileStatus {
    Success,
    Error,
}

/// Public view of an edited user
#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatedUser {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
}

impl From<User> for UpdatedUser {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            name: user.name,
            bio: user.bio,
            avatar_url: user.avatar_url,
        }
    }
}

/// Response for a profile edit
#[derive(Debug, Serialize, Deserialize)]
pub struct EditUserProfileResponse {
    pub status: ProfileStatus,
    pub message: Option<String>,
    pub updated_user: Option<UpdatedUser>,
}
