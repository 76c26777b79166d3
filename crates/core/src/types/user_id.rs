//! Canonical user identifier.
//!
//! Favorites are partitioned by the identifier an upstream identity provider
//! assigns to each user. That identifier is always a UUID, so anything that is
//! not the canonical hyphenated form points at a broken integration and is
//! rejected before it can scope data.

use core::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur when parsing a [`UserId`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum UserIdError {
    /// The input string is empty or only whitespace.
    #[error("user id cannot be empty")]
    Empty,
    /// The input is not a canonical hyphenated UUID.
    #[error("invalid user id format, expected a hyphenated UUID: {0:?}")]
    Malformed(String),
}

/// A validated user identifier.
///
/// ## Constraints
///
/// - Exactly 36 characters in the `8-4-4-4-12` layout
/// - Hex digits in either case, hyphens at positions 8, 13, 18 and 23
/// - Braced (`{...}`), URN (`urn:uuid:...`) and unhyphenated forms are rejected
///
/// ## Examples
///
/// ```
/// use weather_favorites_core::UserId;
///
/// assert!(UserId::parse("7f8c2a4e-1b3d-4c5e-9f60-718293a4b5c6").is_ok());
/// assert!(UserId::parse("not-a-uuid").is_err());
/// assert!(UserId::parse("").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid);

impl UserId {
    /// Length of the canonical hyphenated representation.
    pub const CANONICAL_LENGTH: usize = 36;

    const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

    /// Parse a `UserId` from its canonical string form.
    ///
    /// # Errors
    ///
    /// Returns [`UserIdError::Empty`] for empty or whitespace-only input and
    /// [`UserIdError::Malformed`] for anything that is not a hyphenated UUID.
    pub fn parse(s: &str) -> Result<Self, UserIdError> {
        if s.trim().is_empty() {
            return Err(UserIdError::Empty);
        }

        if !is_canonical_layout(s) {
            return Err(UserIdError::Malformed(s.to_owned()));
        }

        Uuid::try_parse(s)
            .map(Self)
            .map_err(|_| UserIdError::Malformed(s.to_owned()))
    }

    /// Wrap an already-parsed UUID.
    #[must_use]
    pub const fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// Get the underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

fn is_canonical_layout(s: &str) -> bool {
    s.len() == UserId::CANONICAL_LENGTH
        && s.bytes().enumerate().all(|(i, b)| {
            if UserId::HYPHEN_POSITIONS.contains(&i) {
                b == b'-'
            } else {
                b.is_ascii_hexdigit()
            }
        })
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl std::str::FromStr for UserId {
    type Err = UserIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for UserId {
    type Error = UserIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<UserId> for String {
    fn from(id: UserId) -> Self {
        id.to_string()
    }
}

impl From<UserId> for Uuid {
    fn from(id: UserId) -> Self {
        id.0
    }
}

// SQLx support (with postgres feature)
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for UserId {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Uuid as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Uuid as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for UserId {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let id = <Uuid as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self(id))
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for UserId {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <Uuid as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}
