//! Event model, search filter and the payloads of the event endpoints

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Event entity
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub event_type: Option<String>,
    pub organizer_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// New event creation payload
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    pub event_type: Option<String>,
    pub organizer_id: Uuid,
}

/// Sparse event update; `None` fields are left untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    /// `Some(None)` clears the type
    pub event_type: Option<Option<String>>,
}

impl UpdateEvent {
    /// Build an update from an edit request.
    ///
    /// Missing or blank title, description and location are not supplied,
    /// since those columns are required. The type is optional: a blank type
    /// clears it.
    pub fn from_request(request: EditEventRequest) -> Self {
        Self {
            title: supplied(request.title),
            description: supplied(request.description),
            date: request.date,
            location: supplied(request.location),
            event_type: request
                .event_type
                .map(|t| Some(t).filter(|t| !t.trim().is_empty())),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.date.is_none()
            && self.location.is_none()
            && self.event_type.is_none()
    }
}

fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Search criteria; each `None` criterion matches everything
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub keyword: Option<String>,
    pub date: Option<NaiveDate>,
    pub location: Option<String>,
    pub event_type: Option<String>,
}

impl EventFilter {
    /// Check an event against the filter.
    ///
    /// The keyword is matched case-insensitively against the title or the
    /// description. Date compares the UTC calendar day, location and type
    /// compare exactly.
    pub fn matches(&self, event: &Event) -> bool {
        if let Some(keyword) = &self.keyword {
            let keyword = keyword.to_lowercase();
            if !event.title.to_lowercase().contains(&keyword)
                && !event.description.to_lowercase().contains(&keyword)
            {
                return false;
            }
        }

        if let Some(date) = self.date {
            if event.date.date_naive() != date {
                return false;
            }
        }

        if let Some(location) = &self.location {
            if &event.location != location {
                return false;
            }
        }

        if let Some(event_type) = &self.event_type {
            if event.event_type.as_ref() != Some(event_type) {
                return false;
            }
        }

        true
    }
}

/// Request for event creation
#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    #[serde(rename = "type", default)]
    pub event_type: Option<String>,
}

/// Response for event creation
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateEventResponse {
    pub message: String,
    pub event_id: Uuid,
    pub title: String,
    pub date: DateTime<Utc>,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

/// Response for the event display
#[derive(Debug, Serialize, Deserialize)]
pub struct DisplayEventResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    #[serde(rename = "organizerId")]
    pub organizer_id: Uuid,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<Event> for DisplayEventResponse {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            date: event.date,
            location: event.location,
            event_type: event.event_type,
            organizer_id: event.organizer_id,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

/// Request for an event edit
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EditEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

/// Event as returned after an edit
#[derive(Debug, Serialize, Deserialize)]
pub struct EditedEvent {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: DateTime<Utc>,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

impl From<Event> for EditedEvent {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            date: event.date,
            location: event.location,
            event_type: event.event_type,
        }
    }
}

/// Response for an event edit
#[derive(Debug, Serialize, Deserialize)]
pub struct EditEventResponse {
    pub success: bool,
    pub message: String,
    pub edited_event: Option<EditedEvent>,
}

/// Response for an event deletion
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteEventResponse {
    pub success: bool,
    pub message: String,
}

/// Query parameters for the event search
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchEventsQuery {
    pub keywords: Option<String>,
    /// Calendar day, `YYYY-MM-DD`
    pub date: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub event_type: Option<String>,
}

/// Lightweight event returned by the search
#[derive(Debug, Serialize, Deserialize)]
pub struct EventSummary {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    #[serde(rename = "type")]
    pub event_type: String,
}

impl From<Event> for EventSummary {
    fn from(event: Event) -> Self {
        Self {
            id: event.id,
            title: event.title,
            description: event.description,
            date: event.date.format("%Y-%m-%d").to_string(),
            location: event.location,
            event_type: event.event_type.unwrap_or_default(),
        }
    }
}

/// Response for the event search
#[derive(Debug, Serialize, Deserialize)]
pub struct SearchEventsResponse {
    pub events: Vec<EventSummary>,
}
