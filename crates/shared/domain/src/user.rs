//! User accounts and linked social logins.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN, ROLE_PREMIUM, ROLE_USER};
use crate::error::DomainError;

/// User roles enumeration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Premium,
    Admin,
}

impl UserRole {
    /// Check if this role has admin privileges
    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }

    /// Premium content is available to premium users and admins
    pub fn has_premium(&self) -> bool {
        matches!(self, UserRole::Premium | UserRole::Admin)
    }

    /// Stored column value
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::Premium => ROLE_PREMIUM,
            UserRole::User => ROLE_USER,
        }
    }
}

impl TryFrom<&str> for UserRole {
    type Error = DomainError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_PREMIUM => Ok(UserRole::Premium),
            ROLE_USER => Ok(UserRole::User),
            other => Err(DomainError::validation(format!("Unknown role: {other}"))),
        }
    }
}

impl From<UserRole> for String {
    fn from(role: UserRole) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional personal details kept on a user row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub alias: Option<String>,
    pub lastname: Option<String>,
    pub birth_day: Option<NaiveDate>,
    pub mobile_phone: Option<String>,
    pub address: Option<String>,
    pub country: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    /// Avatar image URL
    pub image: Option<String>,
    pub bio: Option<String>,
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: String,
    #[serde(flatten)]
    pub profile: UserProfile,
    pub is_active: bool,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Check if user has admin role
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Registration input carrying a plain text password
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    /// User email address
    pub email: String,
    /// User password (minimum 8 characters)
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub profile: UserProfile,
}

/// Insert payload with an already hashed password
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
    pub profile: UserProfile,
}

/// User update data transfer object.
///
/// `None` leaves a column unchanged; `profile` replaces every profile column.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUser {
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub is_active: Option<bool>,
    pub profile: Option<UserProfile>,
}

/// External login linked to a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialAccount {
    pub id: i32,
    pub user_id: i32,
    pub provider: Option<String>,
    pub social_id: Option<String>,
    pub access_token: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSocialAccount {
    pub user_id: i32,
    pub provider: Option<String>,
    pub social_id: Option<String>,
    pub access_token: Option<String>,
}
