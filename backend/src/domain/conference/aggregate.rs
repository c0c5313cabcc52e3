//! Conference aggregate.
//!
//! # Invariants
//!
//! - `0 <= seats_available <= max_attendees` when created
//! - `seats_available` changes only through `take_seat`/`release_seat`
//! - `month` is the month of `start_date`, or 0 without a start date

use chrono::{Datelike, NaiveDate};

use crate::domain::foundation::{
    parse_date, ConferenceId, ConferenceKey, OwnedByUser, Timestamp, UserId, ValidationError,
};

use super::ConferenceError;

pub const DEFAULT_CITY: &str = "Default City";
pub const DEFAULT_TOPICS: [&str; 2] = ["Default", "Topic"];

/// Client-supplied fields for a new conference, before defaults are applied.
#[derive(Debug, Clone, Default)]
pub struct ConferenceDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub city: Option<String>,
    pub topics: Vec<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub max_attendees: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conference {
    pub key: ConferenceKey,
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    pub topics: Vec<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub month: i32,
    pub max_attendees: i32,
    pub seats_available: i32,
    pub created_at: Timestamp,
}

impl Conference {
    /// Builds a new conference owned by `organizer`, filling in defaults.
    pub fn create(organizer: UserId, draft: ConferenceDraft) -> Result<Self, ConferenceError> {
        let name = draft
            .name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or_else(|| ConferenceError::validation("name", "Conference 'name' field required"))?;

        let city = draft
            .city
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CITY.to_string());

        let topics = if draft.topics.is_empty() {
            DEFAULT_TOPICS.iter().map(|t| t.to_string()).collect()
        } else {
            draft.topics
        };

        let start_date = optional_date("startDate", draft.start_date.as_deref())?;
        let end_date = optional_date("endDate", draft.end_date.as_deref())?;
        let month = start_date.map(|d| d.month() as i32).unwrap_or(0);

        let max_attendees = draft.max_attendees.unwrap_or(0);
        if max_attendees < 0 {
            return Err(ValidationError::out_of_range(
                "maxAttendees",
                0,
                i32::MAX as i64,
                max_attendees as i64,
            )
            .into());
        }

        Ok(Self {
            key: ConferenceKey::new(organizer, ConferenceId::new()),
            name,
            description: draft.description.filter(|d| !d.is_empty()),
            city,
            topics,
            start_date,
            end_date,
            month,
            max_attendees,
            seats_available: max_attendees,
            created_at: Timestamp::now(),
        })
    }

    pub fn organizer(&self) -> &UserId {
        &self.key.organizer
    }

    pub fn has_seats(&self) -> bool {
        self.seats_available > 0
    }

    pub fn take_seat(&mut self) -> Result<(), ConferenceError> {
        if !self.has_seats() {
            return Err(ConferenceError::NoSeatsAvailable);
        }
        self.seats_available -= 1;
        Ok(())
    }

    pub fn release_seat(&mut self) {
        self.seats_available += 1;
    }
}

impl OwnedByUser for Conference {
    fn owner_id(&self) -> &UserId {
        &self.key.organizer
    }
}

fn optional_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => parse_date(field, v).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organizer() -> UserId {
        UserId::new("organizer-1").unwrap()
    }

    fn named(name: &str) -> ConferenceDraft {
        ConferenceDraft {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn create_applies_defaults() {
        let conf = Conference::create(organizer(), named("RustConf")).unwrap();

        assert_eq!(conf.city, "Default City");
        assert_eq!(conf.topics, vec!["Default", "Topic"]);
        assert_eq!(conf.month, 0);
        assert_eq!(conf.max_attendees, 0);
        assert_eq!(conf.seats_available, 0);
        assert!(conf.is_owner(&organizer()));
    }

    #[test]
    fn create_requires_name() {
        let err = Conference::create(organizer(), ConferenceDraft::default()).unwrap_err();
        assert_eq!(err.to_string(), "Conference 'name' field required");

        let err = Conference::create(organizer(), named("   ")).unwrap_err();
        assert!(matches!(err, ConferenceError::ValidationFailed { .. }));
    }

    #[test]
    fn seats_start_at_max_attendees() {
        let draft = ConferenceDraft {
            max_attendees: Some(25),
            ..named("PyCon")
        };
        let conf = Conference::create(organizer(), draft).unwrap();
        assert_eq!(conf.seats_available, 25);
    }

    #[test]
    fn month_derives_from_start_date() {
        let draft = ConferenceDraft {
            start_date: Some("2026-09-03T00:00:00".into()),
            end_date: Some("2026-09-05".into()),
            ..named("Strange Loop")
        };
        let conf = Conference::create(organizer(), draft).unwrap();

        assert_eq!(conf.month, 9);
        assert_eq!(conf.end_date, NaiveDate::from_ymd_opt(2026, 9, 5));
    }

    #[test]
    fn malformed_date_is_rejected() {
        let draft = ConferenceDraft {
            start_date: Some("next tuesday".into()),
            ..named("Bad Dates")
        };
        assert!(matches!(
            Conference::create(organizer(), draft),
            Err(ConferenceError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn negative_capacity_is_rejected() {
        let draft = ConferenceDraft {
            max_attendees: Some(-1),
            ..named("Negative")
        };
        assert!(Conference::create(organizer(), draft).is_err());
    }

    #[test]
    fn take_seat_stops_at_zero() {
        let draft = ConferenceDraft {
            max_attendees: Some(1),
            ..named("Tiny")
        };
        let mut conf = Conference::create(organizer(), draft).unwrap();

        conf.take_seat().unwrap();
        assert_eq!(conf.take_seat(), Err(ConferenceError::NoSeatsAvailable));
        assert_eq!(conf.seats_available, 0);

        conf.release_seat();
        assert_eq!(conf.seats_available, 1);
    }
}
