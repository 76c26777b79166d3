//! Favorite city repository.
//!
//! Every operation is a single SQL statement on a pooled connection. The
//! `UNIQUE (user_id, city_name)` constraint in the schema is what guarantees at
//! most one row per pair; inserts never check for an existing row first.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use weather_favorites_core::{CityName, FavoriteEntry, UserId};

use super::RepositoryError;

/// Name of the uniqueness constraint over `(user_id, city_name)`.
///
/// Must match the constraint declared in the `create_favorite_city` migration.
pub const FAVORITE_UNIQUE_CONSTRAINT: &str = "favorite_city_user_city_key";

/// Row type for `weather.favorite_city` reads.
#[derive(Debug, sqlx::FromRow)]
struct FavoriteRow {
    user_id: Uuid,
    city_name: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<FavoriteRow> for FavoriteEntry {
    type Error = RepositoryError;

    fn try_from(row: FavoriteRow) -> Result<Self, Self::Error> {
        let city = CityName::parse(&row.city_name).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid city name in database: {e}"))
        })?;

        Ok(Self {
            user_id: UserId::from_uuid(row.user_id),
            city,
            notes: row.notes,
            created_at: row.created_at,
        })
    }
}

/// Repository for favorite city database operations.
pub struct FavoriteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> FavoriteRepository<'a> {
    /// Create a new favorite repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get all favorite city names for a user, ascending by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_cities(&self, user_id: &UserId) -> Result<Vec<String>, RepositoryError> {
        let cities = sqlx::query_scalar::<_, String>(
            r#"
            SELECT city_name
            FROM weather.favorite_city
            WHERE user_id = $1
            ORDER BY city_name COLLATE "C" ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(cities)
    }

    /// Get all favorite entries for a user, ascending by city name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a stored city name is invalid.
    pub async fn list_entries(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<FavoriteEntry>, RepositoryError> {
        let rows = sqlx::query_as::<_, FavoriteRow>(
            r#"
            SELECT user_id, city_name, notes, created_at
            FROM weather.favorite_city
            WHERE user_id = $1
            ORDER BY city_name COLLATE "C" ASC
            "#,
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(FavoriteEntry::try_from).collect()
    }

    /// Insert a new favorite.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the user already has this city.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(
        &self,
        user_id: &UserId,
        city: &CityName,
        notes: Option<&str>,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO weather.favorite_city (user_id, city_name, notes)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(user_id)
        .bind(city.as_str())
        .bind(notes)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if is_favorite_conflict(&e) {
                return RepositoryError::Conflict(format!("'{city}' is already in favorites"));
            }
            RepositoryError::Database(e)
        })?;

        tracing::debug!(
            user_id = %user_id,
            city = %city,
            rows = result.rows_affected(),
            "Inserted favorite city"
        );

        Ok(())
    }

    /// Delete a favorite.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the user has no such favorite.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, user_id: &UserId, city: &CityName) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            DELETE FROM weather.favorite_city
            WHERE user_id = $1 AND city_name = $2
            ",
        )
        .bind(user_id)
        .bind(city.as_str())
        .execute(self.pool)
        .await?;

        tracing::debug!(
            user_id = %user_id,
            city = %city,
            rows = result.rows_affected(),
            "Deleted favorite city"
        );

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

/// Whether `err` is a violation of exactly the favorites uniqueness constraint.
///
/// Other unique violations, check violations and connection failures are
/// storage faults, not duplicate favorites.
fn is_favorite_conflict(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err
        && db_err.is_unique_violation()
    {
        return db_err
            .constraint()
            .is_none_or(|name| name == FAVORITE_UNIQUE_CONSTRAINT);
    }
    false
}

#[cfg(test)]
mod tests {
    use std::borrow::Cow;
    use std::fmt;

    use sqlx::error::{DatabaseError, ErrorKind};

    use super::*;

    #[derive(Debug)]
    struct FakeDbError {
        unique: bool,
        constraint: Option<&'static str>,
    }

    impl fmt::Display for FakeDbError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("fake database error")
        }
    }

    impl std::error::Error for FakeDbError {}

    impl DatabaseError for FakeDbError {
        fn message(&self) -> &str {
            "fake database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(Cow::Borrowed(if self.unique { "23505" } else { "23514" }))
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn constraint(&self) -> Option<&str> {
            self.constraint
        }

        fn kind(&self) -> ErrorKind {
            if self.unique {
                ErrorKind::UniqueViolation
            } else {
                ErrorKind::CheckViolation
            }
        }
    }

    fn db_error(unique: bool, constraint: Option<&'static str>) -> sqlx::Error {
        sqlx::Error::Database(Box::new(FakeDbError { unique, constraint }))
    }

    #[test]
    fn test_favorite_unique_violation_is_conflict() {
        assert!(is_favorite_conflict(&db_error(
            true,
            Some(FAVORITE_UNIQUE_CONSTRAINT)
        )));
    }

    #[test]
    fn test_unnamed_unique_violation_is_conflict() {
        assert!(is_favorite_conflict(&db_error(true, None)));
    }

    #[test]
    fn test_other_unique_constraint_is_not_conflict() {
        assert!(!is_favorite_conflict(&db_error(
            true,
            Some("favorite_city_pkey")
        )));
    }

    #[test]
    fn test_check_violation_is_not_conflict() {
        assert!(!is_favorite_conflict(&db_error(
            false,
            Some("favorite_city_city_name_check")
        )));
    }

    #[test]
    fn test_non_database_errors_are_not_conflict() {
        assert!(!is_favorite_conflict(&sqlx::Error::PoolTimedOut));
        assert!(!is_favorite_conflict(&sqlx::Error::RowNotFound));
    }
}
