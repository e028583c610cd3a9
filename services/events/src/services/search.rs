//! Event search

use chrono::NaiveDate;
use tracing::debug;

use super::{EventService, ServiceError, ServiceResult};
use crate::models::{EventFilter, EventSummary, SearchEventsQuery, SearchEventsResponse};

/// Turn a blank query parameter into "no criterion"
fn criterion(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl EventFilter {
    /// Build a filter from search query parameters
    pub fn from_query(query: SearchEventsQuery) -> ServiceResult<Self> {
        let date = criterion(query.date)
            .map(|d| {
                NaiveDate::parse_from_str(&d, "%Y-%m-%d").map_err(|_| {
                    ServiceError::Invalid(format!("Invalid date '{}', expected YYYY-MM-DD", d))
                })
            })
            .transpose()?;

        Ok(Self {
            keyword: criterion(query.keywords),
            date,
            location: criterion(query.location),
            event_type: criterion(query.event_type),
        })
    }
}

impl EventService {
    /// Find events by keyword, calendar day, location and type
    pub async fn search(&self, query: SearchEventsQuery) -> ServiceResult<SearchEventsResponse> {
        let filter = EventFilter::from_query(query)?;
        let events = self.events.search(&filter).await?;
        debug!("Search {:?} matched {} events", filter, events.len());

        Ok(SearchEventsResponse {
            events: events.into_iter().map(EventSummary::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::{
        models::{CreateEventRequest, NewUser, Role},
        repositories::{InMemoryStore, UserRepository},
    };

    async fn seeded_service() -> EventService {
        let store = InMemoryStore::new();
        let organizer = UserRepository::create(
            &store,
            &NewUser {
                email: "organizer@example.com".to_string(),
                password_hash: "hash".to_string(),
                role: Role::Organizer,
            },
        )
        .await
        .unwrap();
        let service = EventService::new(Arc::new(store));

        let events = [
            ("Science Fair", "Student projects", 31, "New York"),
            ("Robotics night", "Applied SCIENCE for everyone", 31, "New York"),
            ("Science Fair", "Student projects", 31, "Boston"),
            ("Science Fair", "Student projects", 30, "New York"),
            ("Jazz evening", "Live music", 31, "New York"),
        ];
        for (title, description, day, location) in events {
            service
                .create(
                    organizer.id,
                    CreateEventRequest {
                        title: title.to_string(),
                        description: description.to_string(),
                        date: Utc.with_ymd_and_hms(2023, 1, day, 19, 0, 0).unwrap(),
                        location: location.to_string(),
                        event_type: None,
                    },
                )
                .await
                .unwrap();
        }

        service
    }

    fn query(keywords: &str, date: &str, location: &str) -> SearchEventsQuery {
        SearchEventsQuery {
            keywords: Some(keywords.to_string()),
            date: Some(date.to_string()),
            location: Some(location.to_string()),
            event_type: None,
        }
    }

    #[tokio::test]
    async fn test_search_requires_every_criterion() {
        let service = seeded_service().await;

        let response = service
            .search(query("science", "2023-01-31", "New York"))
            .await
            .unwrap();

        let titles: Vec<_> = response.events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Science Fair", "Robotics night"]);
        assert!(response.events.iter().all(|e| e.location == "New York"));
        assert!(response.events.iter().all(|e| e.date == "2023-01-31"));
    }

    #[tokio::test]
    async fn test_search_without_criteria_lists_everything_in_order() {
        let service = seeded_service().await;

        let response = service.search(SearchEventsQuery::default()).await.unwrap();
        assert_eq!(response.events.len(), 5);
        assert_eq!(response.events[4].title, "Jazz evening");
    }

    #[tokio::test]
    async fn test_search_rejects_malformed_date() {
        let service = seeded_service().await;

        let result = service
            .search(query("science", "31/01/2023", "New York"))
            .await;
        assert!(matches!(result, Err(ServiceError::Invalid(_))));
    }

    #[test]
    fn test_blank_parameters_are_ignored() {
        let filter = EventFilter::from_query(SearchEventsQuery {
            keywords: Some("  ".to_string()),
            date: Some(String::new()),
            location: None,
            event_type: Some("talk".to_string()),
        })
        .unwrap();

        assert!(filter.keyword.is_none());
        assert!(filter.date.is_none());
        assert_eq!(filter.event_type.as_deref(), Some("talk"));
    }
}
