//! PostgreSQL implementation of RegistrationLedger.
//!
//! Registration locks the conference row first and the profile row second,
//! always in that order, so concurrent registrations queue on the conference.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::conference::{apply_registration, Conference, ConferenceError, RegistrationAction};
use crate::domain::foundation::{ConferenceKey, DomainError, UserId};
use crate::domain::profile::Profile;
use crate::ports::RegistrationLedger;

use super::conference_repository::{ConferenceRow, CONFERENCE_COLUMNS};
use super::db_error;
use super::profile_repository::{profile_not_found, ProfileRow, PROFILE_COLUMNS};

#[derive(Clone)]
pub struct PostgresRegistrationLedger {
    pool: PgPool,
}

impl PostgresRegistrationLedger {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RegistrationLedger for PostgresRegistrationLedger {
    async fn apply(
        &self,
        user: &UserId,
        conference: &ConferenceKey,
        action: RegistrationAction,
    ) -> Result<bool, DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("Failed to begin transaction", e))?;

        let conference_sql = format!(
            "SELECT {} FROM conferences WHERE id = $1 AND organizer_user_id = $2 FOR UPDATE",
            CONFERENCE_COLUMNS
        );
        let conference_row: Option<ConferenceRow> = sqlx::query_as(&conference_sql)
            .bind(conference.id.as_uuid())
            .bind(conference.organizer.as_str())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to lock conference", e))?;
        let mut conf = match conference_row {
            Some(row) => Conference::try_from(row)?,
            None => return Err(ConferenceError::not_found(conference.to_websafe()).into()),
        };

        let profile_sql = format!(
            "SELECT {} FROM profiles WHERE user_id = $1 FOR UPDATE",
            PROFILE_COLUMNS
        );
        let profile_row: Option<ProfileRow> = sqlx::query_as(&profile_sql)
            .bind(user.as_str())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to lock profile", e))?;
        let mut profile = match profile_row {
            Some(row) => Profile::try_from(row)?,
            None => return Err(profile_not_found(user)),
        };

        // Dropping `tx` on an early return rolls the transaction back.
        let changed = apply_registration(&mut profile, &mut conf, action)?;
        if !changed {
            return Ok(false);
        }

        sqlx::query("UPDATE conferences SET seats_available = $2 WHERE id = $1")
            .bind(conf.key.id.as_uuid())
            .bind(conf.seats_available)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to update seats", e))?;

        let row = ProfileRow::from(&profile);
        sqlx::query("UPDATE profiles SET conference_keys = $2 WHERE user_id = $1")
            .bind(&row.user_id)
            .bind(&row.conference_keys)
            .execute(&mut *tx)
            .await
            .map_err(|e| db_error("Failed to update attendance", e))?;

        tx.commit()
            .await
            .map_err(|e| db_error("Failed to commit registration", e))?;

        Ok(true)
    }
}
