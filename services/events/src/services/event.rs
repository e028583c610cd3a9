//! Event create, display, edit and delete services

use std::sync::Arc;

use common::error::DatabaseError;
use tracing::{error, info};
use uuid::Uuid;

use super::{ServiceError, ServiceResult};
use crate::{
    models::{
        CreateEventRequest, CreateEventResponse, DeleteEventResponse, DisplayEventResponse,
        EditEventRequest, EditEventResponse, NewEvent, UpdateEvent,
    },
    repositories::EventRepository,
    validation::validate_required,
};

pub const EVENT_NOT_FOUND: &str = "No event found with the provided ID.";

/// Event operations, search included
#[derive(Clone)]
pub struct EventService {
    pub(super) events: Arc<dyn EventRepository>,
}

impl EventService {
    pub fn new(events: Arc<dyn EventRepository>) -> Self {
        Self { events }
    }

    /// Create an event organized by `organizer_id`
    pub async fn create(
        &self,
        organizer_id: Uuid,
        request: CreateEventRequest,
    ) -> ServiceResult<CreateEventResponse> {
        validate_required("Title", &request.title)
            .and_then(|_| validate_required("Location", &request.location))
            .map_err(ServiceError::Invalid)?;

        let event = self
            .events
            .create(&NewEvent {
                title: request.title,
                description: request.description,
                date: request.date,
                location: request.location,
                event_type: request.event_type.filter(|t| !t.trim().is_empty()),
                organizer_id,
            })
            .await?;

        info!("Event {} created by {}", event.id, organizer_id);
        Ok(CreateEventResponse {
            message: "Event successfully created.".to_string(),
            event_id: event.id,
            title: event.title,
            date: event.date,
            location: event.location,
            event_type: event.event_type,
        })
    }

    /// Fetch one event
    pub async fn display(&self, id: Uuid) -> ServiceResult<DisplayEventResponse> {
        self.events
            .find_by_id(id)
            .await?
            .map(DisplayEventResponse::from)
            .ok_or_else(|| ServiceError::NotFound("Event not found".to_string()))
    }

    /// Apply the supplied fields of `request` to an event
    pub async fn edit(&self, id: Uuid, request: EditEventRequest) -> EditEventResponse {
        let changes = UpdateEvent::from_request(request);
        if changes.is_empty() {
            return EditEventResponse {
                success: false,
                message: "No update information provided.".to_string(),
                edited_event: None,
            };
        }

        match self.events.update(id, &changes).await {
            Ok(Some(event)) => {
                info!("Event {} updated", id);
                EditEventResponse {
                    success: true,
                    message: "Event successfully updated".to_string(),
                    edited_event: Some(event.into()),
                }
            }
            Ok(None) => EditEventResponse {
                success: false,
                message: EVENT_NOT_FOUND.to_string(),
                edited_event: None,
            },
            Err(e) => {
                error!("Failed to update event {}: {}", id, e);
                let message = match e.downcast_ref::<DatabaseError>() {
                    Some(db_err) => {
                        format!("An error occurred while updating the event: {}", db_err)
                    }
                    None => format!("An unexpected error occurred: {}", e),
                };
                EditEventResponse {
                    success: false,
                    message,
                    edited_event: None,
                }
            }
        }
    }

    /// Delete an event; a missing id is reported, not raised
    pub async fn delete(&self, id: Uuid) -> DeleteEventResponse {
        match self.events.delete(id).await {
            Ok(true) => {
                info!("Event {} deleted", id);
                DeleteEventResponse {
                    success: true,
                    message: "Event successfully deleted.".to_string(),
                }
            }
            Ok(false) => DeleteEventResponse {
                success: false,
                message: EVENT_NOT_FOUND.to_string(),
            },
            Err(e) => {
                error!("Failed to delete event {}: {}", id, e);
                DeleteEventResponse {
                    success: false,
                    message: format!("An error occurred: {}", e),
                }
            }
        }
    }
}
