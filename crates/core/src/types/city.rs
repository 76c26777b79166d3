//! City name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`CityName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CityNameError {
    /// The input string is empty or only whitespace.
    #[error("city name cannot be empty")]
    Empty,
    /// The input contains a NUL character, which text columns cannot store.
    #[error("city name cannot contain NUL characters")]
    ContainsNul,
}

/// The name of a favorited city.
///
/// Names are kept exactly as the caller supplied them. "Paris" and "paris"
/// are distinct favorites, and surrounding whitespace is preserved.
///
/// ## Constraints
///
/// - Must contain at least one non-whitespace character
/// - Must not contain `\0`
///
/// ## Examples
///
/// ```
/// use weather_favorites_core::CityName;
///
/// assert!(CityName::parse("Paris").is_ok());
/// assert!(CityName::parse("").is_err());
/// assert!(CityName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CityName(String);

impl CityName {
    /// Parse a `CityName` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is blank or contains a NUL character.
    pub fn parse(s: &str) -> Result<Self, CityNameError> {
        if s.trim().is_empty() {
            return Err(CityNameError::Empty);
        }

        if s.contains('\0') {
            return Err(CityNameError::ContainsNul);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the city name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `CityName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for CityName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for CityName {
    type Err = CityNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for CityName {
    type Error = CityNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<CityName> for String {
    fn from(city: CityName) -> Self {
        city.0
    }
}

impl AsRef<str> for CityName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
