//! Traveller accounts and their planning preferences.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use zeroize::Zeroizing;

use super::email::{EmailAddress, EmailValidationError};
use super::interests::{InterestSet, InterestSetValidationError};
use super::levels::BudgetTier;

/// Validation errors returned while building a [`User`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    InvalidId,
    EmptyName,
    Email(EmailValidationError),
    MissingPasswordHash,
    Interests(InterestSetValidationError),
    EmptyLanguage,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::Email(error) => write!(f, "email is invalid: {error}"),
            Self::MissingPasswordHash => write!(f, "password hash is required"),
            Self::Interests(error) => write!(f, "interests are invalid: {error}"),
            Self::EmptyLanguage => write!(f, "preferred language must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

impl From<EmailValidationError> for UserValidationError {
    fn from(value: EmailValidationError) -> Self {
        Self::Email(value)
    }
}

impl From<InterestSetValidationError> for UserValidationError {
    fn from(value: InterestSetValidationError) -> Self {
        Self::Interests(value)
    }
}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

impl UserId {
    /// Validate and construct a [`UserId`] from its string form.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let raw = id.as_ref();
        if raw.trim() != raw {
            return Err(UserValidationError::InvalidId);
        }
        Uuid::parse_str(raw)
            .map(Self)
            .map_err(|_| UserValidationError::InvalidId)
    }

    /// Wrap an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stored password hash.
///
/// The value is wiped from memory on drop and never printed.
#[derive(Clone)]
pub struct PasswordHash(Zeroizing<String>);

impl PasswordHash {
    /// Wrap an already-hashed credential.
    pub fn new(hash: impl Into<String>) -> Result<Self, UserValidationError> {
        let hash = hash.into();
        if hash.trim().is_empty() {
            return Err(UserValidationError::MissingPasswordHash);
        }
        Ok(Self(Zeroizing::new(hash)))
    }

    /// Expose the hash for verification.
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for PasswordHash {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for PasswordHash {}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(<redacted>)")
    }
}

/// Planning preferences attached to a user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UserPreferences {
    /// Interest tags used to rank activities.
    pub interests: InterestSet,
    /// Spending tier.
    pub budget: BudgetTier,
    /// Preferred language for generated content, e.g. `en`.
    pub language: String,
}

impl UserPreferences {
    /// Build preferences, rejecting a blank language.
    pub fn new(
        interests: InterestSet,
        budget: BudgetTier,
        language: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let language = language.into().trim().to_owned();
        if language.is_empty() {
            return Err(UserValidationError::EmptyLanguage);
        }
        Ok(Self {
            interests,
            budget,
            language,
        })
    }
}

/// Registered traveller.
///
/// ## Invariants
/// - `name` is non-empty once trimmed.
/// - `email` is a normalised [`EmailAddress`].
/// - `password_hash` is present on input and never serialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    id: UserId,
    name: String,
    email: EmailAddress,
    password_hash: PasswordHash,
    preferences: UserPreferences,
    created_at: DateTime<Utc>,
}

impl User {
    /// Build a new [`User`] from validated components.
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        email: EmailAddress,
        password_hash: PasswordHash,
        preferences: UserPreferences,
        created_at: DateTime<Utc>,
    ) -> Result<Self, UserValidationError> {
        let name = name.into().trim().to_owned();
        if name.is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self {
            id,
            name,
            email,
            password_hash,
            preferences,
            created_at,
        })
    }

    /// Stable user identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Login email.
    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    /// Stored credential.
    pub fn password_hash(&self) -> &PasswordHash {
        &self.password_hash
    }

    /// Planning preferences.
    pub fn preferences(&self) -> &UserPreferences {
        &self.preferences
    }

    /// Account creation time.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct UserDto {
    id: UserId,
    name: String,
    email: String,
    #[serde(default, skip_serializing)]
    password_hash: Option<String>,
    preferences: UserPreferences,
    created_at: DateTime<Utc>,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            name: value.name,
            email: value.email.into(),
            password_hash: None,
            preferences: value.preferences,
            created_at: value.created_at,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let password_hash = value
            .password_hash
            .ok_or(UserValidationError::MissingPasswordHash)
            .and_then(PasswordHash::new)?;
        let preferences = UserPreferences::new(
            value.preferences.interests,
            value.preferences.budget,
            value.preferences.language,
        )?;
        User::new(
            value.id,
            value.name,
            EmailAddress::new(value.email)?,
            password_hash,
            preferences,
            value.created_at,
        )
    }
}
