//! Wire forms for conference endpoints (camelCase JSON).

use serde::{Deserialize, Serialize};

use crate::application::handlers::conference::{ConferenceView, FilterInput};
use crate::domain::conference::ConferenceDraft;

/// Request body for `POST /api/conference`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConferenceForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub topics: Option<Vec<String>>,
    pub city: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub max_attendees: Option<i32>,
}

impl From<ConferenceForm> for ConferenceDraft {
    fn from(form: ConferenceForm) -> Self {
        ConferenceDraft {
            name: form.name,
            description: form.description,
            city: form.city,
            topics: form.topics.unwrap_or_default(),
            start_date: form.start_date,
            end_date: form.end_date,
            max_attendees: form.max_attendees,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceResponse {
    pub websafe_key: String,
    pub name: String,
    pub description: Option<String>,
    pub organizer_user_id: String,
    pub organizer_display_name: Option<String>,
    pub topics: Vec<String>,
    pub city: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub month: i32,
    pub max_attendees: i32,
    pub seats_available: i32,
}

impl From<ConferenceView> for ConferenceResponse {
    fn from(view: ConferenceView) -> Self {
        let conference = view.conference;
        Self {
            websafe_key: conference.key.to_websafe(),
            organizer_user_id: conference.organizer().to_string(),
            organizer_display_name: view.organizer_display_name,
            name: conference.name,
            description: conference.description,
            topics: conference.topics,
            city: conference.city,
            start_date: conference.start_date.map(|d| d.format("%Y-%m-%d").to_string()),
            end_date: conference.end_date.map(|d| d.format("%Y-%m-%d").to_string()),
            month: conference.month,
            max_attendees: conference.max_attendees,
            seats_available: conference.seats_available,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConferenceQueryFilter {
    pub field: String,
    pub operator: String,
    pub value: String,
}

impl From<ConferenceQueryFilter> for FilterInput {
    fn from(filter: ConferenceQueryFilter) -> Self {
        FilterInput::new(filter.field, filter.operator, filter.value)
    }
}

/// Request body for `POST /api/queryConferences`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConferenceQueryForm {
    pub filters: Vec<ConferenceQueryFilter>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conference::Conference;
    use crate::domain::foundation::UserId;

    #[test]
    fn form_accepts_partial_camel_case_body() {
        let form: ConferenceForm = serde_json::from_str(
            r#"{"name":"RustConf","maxAttendees":40,"startDate":"2026-09-10"}"#,
        )
        .unwrap();
        let draft = ConferenceDraft::from(form);

        assert_eq!(draft.name.as_deref(), Some("RustConf"));
        assert_eq!(draft.max_attendees, Some(40));
        assert!(draft.topics.is_empty());
    }

    #[test]
    fn response_renders_dates_and_key() {
        let conference = Conference::create(
            UserId::new("org").unwrap(),
            ConferenceDraft {
                name: Some("RustConf".into()),
                start_date: Some("2026-09-10".into()),
                ..Default::default()
            },
        )
        .unwrap();
        let websafe = conference.key.to_websafe();

        let response = ConferenceResponse::from(ConferenceView::new(conference, Some("Org".into())));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["websafeKey"], websafe);
        assert_eq!(json["startDate"], "2026-09-10");
        assert!(json["endDate"].is_null());
        assert_eq!(json["month"], 9);
        assert_eq!(json["organizerDisplayName"], "Org");
        assert_eq!(json["seatsAvailable"], 0);
    }

    #[test]
    fn query_form_defaults_to_no_filters() {
        let form: ConferenceQueryForm = serde_json::from_str("{}").unwrap();
        assert!(form.filters.is_empty());
    }
}
