//! PostgreSQL implementation of ProfileRepository.
//!
//! Attendance and wishlist references are stored as websafe key strings in
//! `TEXT[]` columns, preserving list order.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::foundation::{ConferenceKey, DomainError, ErrorCode, SessionKey, UserId};
use crate::domain::profile::{Profile, TeeShirtSize};
use crate::ports::ProfileRepository;

use super::{corrupt_row, db_error};

pub(super) const PROFILE_COLUMNS: &str =
    "user_id, display_name, main_email, tee_shirt_size, conference_keys, wishlist_session_keys";

/// PostgreSQL implementation of ProfileRepository.
#[derive(Clone)]
pub struct PostgresProfileRepository {
    pool: PgPool,
}

impl PostgresProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileRepository for PostgresProfileRepository {
    async fn find(&self, user_id: &UserId) -> Result<Option<Profile>, DomainError> {
        let sql = format!("SELECT {} FROM profiles WHERE user_id = $1", PROFILE_COLUMNS);
        let row: Option<ProfileRow> = sqlx::query_as(&sql)
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch profile", e))?;

        row.map(Profile::try_from).transpose()
    }

    async fn create(&self, profile: &Profile) -> Result<bool, DomainError> {
        let row = ProfileRow::from(profile);
        let result = sqlx::query(
            r#"
            INSERT INTO profiles (
                user_id, display_name, main_email, tee_shirt_size,
                conference_keys, wishlist_session_keys
            ) VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO NOTHING
            "#,
        )
        .bind(&row.user_id)
        .bind(&row.display_name)
        .bind(&row.main_email)
        .bind(&row.tee_shirt_size)
        .bind(&row.conference_keys)
        .bind(&row.wishlist_session_keys)
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to create profile", e))?;

        Ok(result.rows_affected() == 1)
    }

    async fn update_details(
        &self,
        user_id: &UserId,
        display_name: &str,
        tee_shirt_size: TeeShirtSize,
    ) -> Result<(), DomainError> {
        let result = sqlx::query(
            "UPDATE profiles SET display_name = $2, tee_shirt_size = $3 WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .bind(display_name)
        .bind(tee_shirt_size.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update profile", e))?;

        if result.rows_affected() == 0 {
            return Err(profile_not_found(user_id));
        }
        Ok(())
    }

    async fn add_to_wishlist(
        &self,
        user_id: &UserId,
        session: &SessionKey,
    ) -> Result<bool, DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE profiles
            SET wishlist_session_keys = array_append(wishlist_session_keys, $2)
            WHERE user_id = $1 AND NOT ($2 = ANY(wishlist_session_keys))
            "#,
        )
        .bind(user_id.as_str())
        .bind(session.to_websafe())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to update wishlist", e))?;

        if result.rows_affected() == 1 {
            return Ok(true);
        }

        // Zero rows: either a duplicate or no profile at all.
        let exists: Option<i32> = sqlx::query_scalar("SELECT 1 FROM profiles WHERE user_id = $1")
            .bind(user_id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch profile", e))?;
        match exists {
            Some(_) => Ok(false),
            None => Err(profile_not_found(user_id)),
        }
    }
}

pub(super) fn profile_not_found(user_id: &UserId) -> DomainError {
    DomainError::new(ErrorCode::ProfileNotFound, "Profile does not exist")
        .with_detail("user_id", user_id.as_str())
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct ProfileRow {
    pub user_id: String,
    pub display_name: String,
    pub main_email: String,
    pub tee_shirt_size: String,
    pub conference_keys: Vec<String>,
    pub wishlist_session_keys: Vec<String>,
}

impl From<&Profile> for ProfileRow {
    fn from(profile: &Profile) -> Self {
        Self {
            user_id: profile.user_id.as_str().to_string(),
            display_name: profile.display_name.clone(),
            main_email: profile.main_email.clone(),
            tee_shirt_size: profile.tee_shirt_size.as_str().to_string(),
            conference_keys: profile
                .conference_keys_to_attend
                .iter()
                .map(ConferenceKey::to_websafe)
                .collect(),
            wishlist_session_keys: profile
                .session_keys_wishlist
                .iter()
                .map(SessionKey::to_websafe)
                .collect(),
        }
    }
}

impl TryFrom<ProfileRow> for Profile {
    type Error = DomainError;

    fn try_from(row: ProfileRow) -> Result<Self, Self::Error> {
        let user_id = UserId::new(row.user_id).map_err(|e| corrupt_row("profile user id", e))?;
        let tee_shirt_size: TeeShirtSize = row
            .tee_shirt_size
            .parse()
            .map_err(|e| corrupt_row("tee shirt size", e))?;

        let conference_keys_to_attend = row
            .conference_keys
            .iter()
            .map(|k| ConferenceKey::from_websafe(k))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| corrupt_row("conference key", e))?;
        let session_keys_wishlist = row
            .wishlist_session_keys
            .iter()
            .map(|k| SessionKey::from_websafe(k))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| corrupt_row("session key", e))?;

        Ok(Profile {
            user_id,
            display_name: row.display_name,
            main_email: row.main_email,
            tee_shirt_size,
            conference_keys_to_attend,
            session_keys_wishlist,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AuthenticatedUser, ConferenceId, SessionId};

    #[test]
    fn row_conversion_keeps_reference_order() {
        let user = AuthenticatedUser::new(UserId::new("u-1").unwrap(), "u@example.com", None);
        let mut profile = Profile::for_user(&user);
        let organizer = UserId::new("org").unwrap();
        let first = ConferenceKey::new(organizer.clone(), ConferenceId::new());
        let second = ConferenceKey::new(organizer, ConferenceId::new());
        profile.attend(first.clone());
        profile.attend(second.clone());
        profile
            .add_to_wishlist(SessionKey::new(first.clone(), SessionId::new()))
            .unwrap();

        let row = ProfileRow::from(&profile);
        assert_eq!(row.conference_keys[0], first.to_websafe());
        assert_eq!(row.tee_shirt_size, "NOT_SPECIFIED");

        let restored = Profile::try_from(row).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn corrupt_key_is_a_database_error() {
        let row = ProfileRow {
            user_id: "u-1".into(),
            display_name: "U".into(),
            main_email: "u@example.com".into(),
            tee_shirt_size: "M_M".into(),
            conference_keys: vec!["not a key".into()],
            wishlist_session_keys: vec![],
        };
        let err = Profile::try_from(row).unwrap_err();
        assert!(err.code.is_infrastructure());
    }
}
