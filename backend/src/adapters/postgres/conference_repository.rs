//! PostgreSQL implementation of ConferenceRepository.
//!
//! Filter plans are translated into a parameterised `WHERE`/`ORDER BY` with
//! `sqlx::QueryBuilder`. Text comparisons and ordering use the `"C"`
//! collation so results agree with the byte-wise ordering of the in-memory
//! store.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::domain::conference::{Conference, FilterClause, FilterField, FilterValue, QueryPlan};
use crate::domain::foundation::{
    ConferenceId, ConferenceKey, DomainError, Timestamp, UserId,
};
use crate::ports::ConferenceRepository;

use super::{corrupt_row, db_error};

pub(super) const CONFERENCE_COLUMNS: &str = "id, organizer_user_id, name, description, city, \
     topics, start_date, end_date, month, max_attendees, seats_available, created_at";

/// PostgreSQL implementation of ConferenceRepository.
#[derive(Clone)]
pub struct PostgresConferenceRepository {
    pool: PgPool,
}

impl PostgresConferenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConferenceRepository for PostgresConferenceRepository {
    async fn create(&self, conference: &Conference) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO conferences (
                id, organizer_user_id, name, description, city, topics,
                start_date, end_date, month, max_attendees, seats_available, created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            "#,
        )
        .bind(conference.key.id.as_uuid())
        .bind(conference.organizer().as_str())
        .bind(&conference.name)
        .bind(&conference.description)
        .bind(&conference.city)
        .bind(&conference.topics)
        .bind(conference.start_date)
        .bind(conference.end_date)
        .bind(conference.month)
        .bind(conference.max_attendees)
        .bind(conference.seats_available)
        .bind(conference.created_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("Failed to insert conference", e))?;

        Ok(())
    }

    async fn find(&self, key: &ConferenceKey) -> Result<Option<Conference>, DomainError> {
        let sql = format!(
            "SELECT {} FROM conferences WHERE id = $1 AND organizer_user_id = $2",
            CONFERENCE_COLUMNS
        );
        let row: Option<ConferenceRow> = sqlx::query_as(&sql)
            .bind(key.id.as_uuid())
            .bind(key.organizer.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch conference", e))?;

        row.map(Conference::try_from).transpose()
    }

    async fn find_many(&self, keys: &[ConferenceKey]) -> Result<Vec<Conference>, DomainError> {
        if keys.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = keys.iter().map(|k| *k.id.as_uuid()).collect();
        let sql = format!(
            "SELECT {} FROM conferences WHERE id = ANY($1)",
            CONFERENCE_COLUMNS
        );
        let rows: Vec<ConferenceRow> = sqlx::query_as(&sql)
            .bind(&ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch conferences", e))?;

        let mut by_key = HashMap::with_capacity(rows.len());
        for row in rows {
            let conference = Conference::try_from(row)?;
            by_key.insert(conference.key.clone(), conference);
        }

        // Keep caller order; ids under a different organizer do not resolve.
        Ok(keys.iter().filter_map(|k| by_key.remove(k)).collect())
    }

    async fn find_by_organizer(&self, organizer: &UserId) -> Result<Vec<Conference>, DomainError> {
        let sql = format!(
            "SELECT {} FROM conferences WHERE organizer_user_id = $1 \
             ORDER BY name COLLATE \"C\", id",
            CONFERENCE_COLUMNS
        );
        let rows: Vec<ConferenceRow> = sqlx::query_as(&sql)
            .bind(organizer.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to fetch conferences by organizer", e))?;

        rows.into_iter().map(Conference::try_from).collect()
    }

    async fn query(&self, plan: &QueryPlan) -> Result<Vec<Conference>, DomainError> {
        let mut builder = select_for_plan(plan);
        let rows: Vec<ConferenceRow> = builder
            .build_query_as()
            .fetch_all(&self.pool)
            .await
            .map_err(|e| db_error("Failed to query conferences", e))?;

        rows.into_iter().map(Conference::try_from).collect()
    }
}

/// Builds the `SELECT` for a compiled filter plan.
fn select_for_plan(plan: &QueryPlan) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!(
        "SELECT {} FROM conferences WHERE TRUE",
        CONFERENCE_COLUMNS
    ));

    for clause in plan.clauses() {
        builder.push(" AND ");
        push_clause(&mut builder, clause);
    }

    builder.push(" ORDER BY ");
    if let Some(field) = plan.inequality_field() {
        builder.push(order_expression(field));
        builder.push(", ");
    }
    builder.push("name COLLATE \"C\", id");
    builder
}

fn push_clause(builder: &mut QueryBuilder<'static, Postgres>, clause: &FilterClause) {
    let symbol = clause.operator.symbol();
    match (clause.field, &clause.value) {
        (FilterField::City, FilterValue::Text(value)) => {
            builder.push(format!("city COLLATE \"C\" {} ", symbol));
            builder.push_bind(value.clone());
        }
        (FilterField::Topic, FilterValue::Text(value)) => {
            builder.push(format!(
                "EXISTS (SELECT 1 FROM unnest(topics) AS topic WHERE topic COLLATE \"C\" {} ",
                symbol
            ));
            builder.push_bind(value.clone());
            builder.push(")");
        }
        (FilterField::Month, FilterValue::Integer(value)) => {
            builder.push(format!("month {} ", symbol));
            builder.push_bind(*value);
        }
        (FilterField::MaxAttendees, FilterValue::Integer(value)) => {
            builder.push(format!("max_attendees {} ", symbol));
            builder.push_bind(*value);
        }
        // Clause parsing never pairs a field with the other value kind.
        _ => {
            builder.push("FALSE");
        }
    }
}

fn order_expression(field: FilterField) -> &'static str {
    match field {
        FilterField::City => "city COLLATE \"C\"",
        // An empty array has no minimum and sorts ahead of every topic.
        FilterField::Topic => {
            "(SELECT min(topic COLLATE \"C\") FROM unnest(topics) AS topic) NULLS FIRST"
        }
        FilterField::Month => "month",
        FilterField::MaxAttendees => "max_attendees",
    }
}

#[derive(Debug, sqlx::FromRow)]
pub(super) struct ConferenceRow {
    pub id: Uuid,
    pub organizer_user_id: String,
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    pub topics: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub month: i32,
    pub max_attendees: i32,
    pub seats_available: i32,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<ConferenceRow> for Conference {
    type Error = DomainError;

    fn try_from(row: ConferenceRow) -> Result<Self, Self::Error> {
        let organizer =
            UserId::new(row.organizer_user_id).map_err(|e| corrupt_row("organizer id", e))?;

        Ok(Conference {
            key: ConferenceKey::new(organizer, ConferenceId::from_uuid(row.id)),
            name: row.name,
            description: row.description,
            city: row.city,
            topics: row.topics,
            start_date: row.start_date,
            end_date: row.end_date,
            month: row.month,
            max_attendees: row.max_attendees,
            seats_available: row.seats_available,
            created_at: Timestamp::from_datetime(row.created_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_without_filters_orders_by_name() {
        let sql = select_for_plan(&QueryPlan::all()).sql().to_string();
        assert!(sql.ends_with("WHERE TRUE ORDER BY name COLLATE \"C\", id"));
    }

    #[test]
    fn inequality_field_orders_first() {
        let plan = QueryPlan::compile([
            ("CITY", "EQ", "London"),
            ("MAX_ATTENDEES", "GT", "5"),
        ])
        .unwrap();
        let sql = select_for_plan(&plan).sql().to_string();

        assert!(sql.contains("city COLLATE \"C\" = $1"));
        assert!(sql.contains("max_attendees > $2"));
        assert!(sql.ends_with("ORDER BY max_attendees, name COLLATE \"C\", id"));
    }

    #[test]
    fn topic_filter_matches_any_element() {
        let plan = QueryPlan::compile([("TOPIC", "NE", "Rust")]).unwrap();
        let sql = select_for_plan(&plan).sql().to_string();

        assert!(sql.contains("EXISTS (SELECT 1 FROM unnest(topics) AS topic"));
        assert!(sql.contains("min(topic COLLATE \"C\")"));
    }

    #[test]
    fn topic_order_puts_empty_topic_lists_first() {
        let plan = QueryPlan::compile([("TOPIC", "GT", "A")]).unwrap();
        let sql = select_for_plan(&plan).sql().to_string();

        assert!(sql.ends_with("AS topic) NULLS FIRST, name COLLATE \"C\", id"));
    }
}
