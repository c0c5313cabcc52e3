//! PostgreSQL implementation of SessionRepository.
//!
//! Each row carries its conference id and the conference organizer's id so a
//! full `SessionKey` can be rebuilt without a join.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::foundation::{
    ConferenceId, ConferenceKey, DomainError, SessionId, SessionKey, Timestamp, UserId,
};
use crate::domain::session::{Session, SessionQuery};
use crate::ports::SessionRepository;

use super::{corrupt_row, db_error};

const SESSION_COLUMNS: &str = "id, conference_id, organizer_user_id, name, highlights, speaker, \
     duration_minutes, session_type, date, start_time, created_at";

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn create(&self, session: &Session) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO sessions (
                id, conference_id, organizer_user_id, name, highlights, speaker,
                duration_minutes, session_type, date, start_time, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(session.key.id.as_uuid())
        .bind(session.conference().id.as_uuid())
        .bind(session.conference().organizer.as_str())
        .bind(&session.name)
        .bind(&session.highlights)
        .bind(&session.speaker)
        .bind(session.duration_minutes)
        .bind(&session.session_type)
        .bind(session.date)
        .bind(session.start_time)
        .bind(session.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert session", e))?;

        Ok(())
    }

    async fn find(&self, key: &SessionKey) -> Result<Option<Session>, DomainError> {
        let sql = format!(
            "SELECT {} FROM sessions \
             WHERE id = $1 AND conference_id = $2 AND organizer_user_id = $3",
            SESSION_COLUMNS
        );
        let row: Option<SessionRow> = sqlx::query_as(&sql)
            .bind(key.id.as_uuid())
            .bind(key.conference.id.as_uuid())
            .bind(key.conference.organizer.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch session", e))?;

        row.map(Session::try_from).transpose()
    }

    async fn find_many(&self, keys: &[SessionKey]) -> Result<Vec<Session>, DomainError> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = keys.iter().map(|k| *k.id.as_uuid()).collect();
        let sql = format!("SELECT {} FROM sessions WHERE id = ANY($1)", SESSION_COLUMNS);
        let rows: Vec<SessionRow> = sqlx::query_as(&sql)
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch sessions", e))?;

        let mut by_key = HashMap::with_capacity(rows.len());
        for row in rows {
            let session = Session::try_from(row)?;
            by_key.insert(session.key.clone(), session);
        }
        Ok(keys.iter().filter_map(|k| by_key.remove(k)).collect())
    }

    async fn find_by(&self, query: &SessionQuery) -> Result<Vec<Session>, DomainError> {
        let mut builder = QueryBuilder::new(format!("SELECT {} FROM sessions", SESSION_COLUMNS));
        push_conditions(&mut builder, query);
        builder.push(" ORDER BY created_at, id");

        let rows: Vec<SessionRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query sessions", e))?;

        rows.into_iter().map(Session::try_from).collect()
    }

    async fn count_by(&self, query: &SessionQuery) -> Result<usize, DomainError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM sessions");
        push_conditions(&mut builder, query);

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("Failed to count sessions", e))?;

        Ok(count.max(0) as usize)
    }
}

fn push_conditions(builder: &mut QueryBuilder<'static, Postgres>, query: &SessionQuery) {
    builder.push(" WHERE TRUE");
    if let Some(conference) = &query.conference {
        builder.push(" AND conference_id = ");
        builder.push_bind(*conference.id.as_uuid());
        builder.push(" AND organizer_user_id = ");
        builder.push_bind(conference.organizer.as_str().to_string());
    }
    if let Some(session_type) = &query.session_type {
        builder.push(" AND session_type = ");
        builder.push_bind(session_type.clone());
    }
    if let Some(speaker) = &query.speaker {
        builder.push(" AND speaker = ");
        builder.push_bind(speaker.clone());
    }
}

#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
    id: Uuid,
    conference_id: Uuid,
    organizer_user_id: String,
    name: String,
    highlights: Option<String>,
    speaker: Option<String>,
    duration_minutes: Option<i32>,
    session_type: Option<String>,
    date: Option<NaiveDate>,
    start_time: Option<NaiveTime>,
    created_at: DateTime<Utc>,
}

impl TryFrom<SessionRow> for Session {
    type Error = DomainError;

    fn try_from(row: SessionRow) -> Result<Self, Self::Error> {
        let organizer =
            UserId::new(row.organizer_user_id).map_err(|e| corrupt_row("organizer id", e))?;
        let conference = ConferenceKey::new(organizer, ConferenceId::from_uuid(row.conference_id));

        Ok(Session {
            key: SessionKey::new(conference, SessionId::from_uuid(row.id)),
            name: row.name,
            highlights: row.highlights,
            speaker: row.speaker,
            duration_minutes: row.duration_minutes,
            session_type: row.session_type,
            date: row.date,
            start_time: row.start_time,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}
