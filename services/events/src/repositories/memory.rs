//! In-memory store implementing every repository
//!
//! Keeps rows in insertion order and enforces the same constraints as the
//! PostgreSQL schema: unique emails, and foreign keys from events to users
//! and from feedback to events and users.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use common::error::DatabaseError;
use tokio::sync::Mutex;
use tracing::debug;
use uuid::Uuid;

use super::{EventRepository, FeedbackRepository, UserRepository};
use crate::models::{
    Event, EventFilter, Feedback, FeedbackWithAuthor, NewEvent, NewFeedback, NewUser, UpdateEvent,
    UpdateUser, User,
};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    events: Vec<Event>,
    feedback: Vec<Feedback>,
}

/// Store shared by clones; every operation holds the lock for its whole duration
#[derive(Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn constraint(message: impl Into<String>) -> anyhow::Error {
    DatabaseError::Constraint(message.into()).into()
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn create(&self, new_user: &NewUser) -> Result<User> {
        let mut tables = self.tables.lock().await;

        if tables.users.iter().any(|u| u.email == new_user.email) {
            return Err(constraint(format!(
                "duplicate key value violates unique constraint \"users_email_key\": {}",
                new_user.email
            )));
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            email: new_user.email.clone(),
            password_hash: new_user.password_hash.clone(),
            name: String::new(),
            bio: None,
            avatar_url: None,
            role: new_user.role,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());

        debug!("Stored user {} in memory", user.id);
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.email == email).cloned())
    }

    async fn update_profile(&self, email: &str, changes: &UpdateUser) -> Result<Option<User>> {
        let mut tables = self.tables.lock().await;

        let Some(user) = tables.users.iter_mut().find(|u| u.email == email) else {
            return Ok(None);
        };

        user.name = changes.name.clone();
        if let Some(bio) = &changes.bio {
            user.bio = bio.clone();
        }
        if let Some(avatar_url) = &changes.avatar_url {
            user.avatar_url = avatar_url.clone();
        }
        user.updated_at = Utc::now();

        Ok(Some(user.clone()))
    }
}

#[async_trait]
impl EventRepository for InMemoryStore {
    async fn create(&self, new_event: &NewEvent) -> Result<Event> {
        let mut tables = self.tables.lock().await;

        if !tables.users.iter().any(|u| u.id == new_event.organizer_id) {
            return Err(constraint(format!(
                "insert on \"events\" violates foreign key \"events_organizer_id_fkey\": {}",
                new_event.organizer_id
            )));
        }

        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            title: new_event.title.clone(),
            description: new_event.description.clone(),
            date: new_event.date,
            location: new_event.location.clone(),
            event_type: new_event.event_type.clone(),
            organizer_id: new_event.organizer_id,
            created_at: now,
            updated_at: now,
        };
        tables.events.push(event.clone());

        debug!("Stored event {} in memory", event.id);
        Ok(event)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>> {
        let tables = self.tables.lock().await;
        Ok(tables.events.iter().find(|e| e.id == id).cloned())
    }

    async fn update(&self, id: Uuid, changes: &UpdateEvent) -> Result<Option<Event>> {
        let mut tables = self.tables.lock().await;

        let Some(event) = tables.events.iter_mut().find(|e| e.id == id) else {
            return Ok(None);
        };

        if let Some(title) = &changes.title {
            event.title = title.clone();
        }
        if let Some(description) = &changes.description {
            event.description = description.clone();
        }
        if let Some(date) = changes.date {
            event.date = date;
        }
        if let Some(location) = &changes.location {
            event.location = location.clone();
        }
        if let Some(event_type) = &changes.event_type {
            event.event_type = event_type.clone();
        }
        event.updated_at = Utc::now();

        Ok(Some(event.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut tables = self.tables.lock().await;

        let before = tables.events.len();
        tables.events.retain(|e| e.id != id);
        let deleted = tables.events.len() < before;

        if deleted {
            tables.feedback.retain(|f| f.event_id != id);
        }

        Ok(deleted)
    }

    async fn search(&self, filter: &EventFilter) -> Result<Vec<Event>> {
        let tables = self.tables.lock().await;
        Ok(tables
            .events
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FeedbackRepository for InMemoryStore {
    async fn create(&self, new_feedback: &NewFeedback) -> Result<Feedback> {
        let mut tables = self.tables.lock().await;

        if !tables.events.iter().any(|e| e.id == new_feedback.event_id) {
            return Err(constraint(format!(
                "insert on \"feedback\" violates foreign key \"feedback_event_id_fkey\": {}",
                new_feedback.event_id
            )));
        }
        if let Some(user_id) = new_feedback.user_id {
            if !tables.users.iter().any(|u| u.id == user_id) {
                return Err(constraint(format!(
                    "insert on \"feedback\" violates foreign key \"feedback_user_id_fkey\": {}",
                    user_id
                )));
            }
        }

        let feedback = Feedback {
            id: Uuid::new_v4(),
            event_id: new_feedback.event_id,
            user_id: new_feedback.user_id,
            rating: new_feedback.rating,
            content: new_feedback.content.clone(),
            created_at: Utc::now(),
        };
        tables.feedback.push(feedback.clone());

        Ok(feedback)
    }

    async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<FeedbackWithAuthor>> {
        let tables = self.tables.lock().await;

        let rows = tables
            .feedback
            .iter()
            .filter(|f| f.event_id == event_id)
            .map(|f| FeedbackWithAuthor {
                feedback: f.clone(),
                author_id: f
                    .user_id
                    .and_then(|id| tables.users.iter().find(|u| u.id == id))
                    .map(|u| u.id),
            })
            .collect();

        Ok(rows)
    }
}
