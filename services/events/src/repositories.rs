//! Repositories for database operations
//!
//! Every repository returns `anyhow::Result`; failures raised by the store
//! itself carry a [`common::error::DatabaseError`] so services can tell them
//! apart from other errors with `downcast_ref`.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{
    Event, EventFilter, Feedback, FeedbackWithAuthor, NewEvent, NewFeedback, NewUser, UpdateEvent,
    UpdateUser, User,
};

pub mod event;
pub mod feedback;
pub mod memory;
pub mod user;

pub use event::PgEventRepository;
pub use feedback::PgFeedbackRepository;
pub use memory::InMemoryStore;
pub use user::PgUserRepository;

/// Persistence operations on users
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a user; a duplicate email is a constraint violation
    async fn create(&self, new_user: &NewUser) -> Result<User>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Apply a profile update, returning `None` when no user has that email
    async fn update_profile(&self, email: &str, changes: &UpdateUser) -> Result<Option<User>>;
}

/// Persistence operations on events
#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, new_event: &NewEvent) -> Result<Event>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>>;

    /// Apply a sparse update, returning `None` when the event does not exist
    async fn update(&self, id: Uuid, changes: &UpdateEvent) -> Result<Option<Event>>;

    /// Delete an event, returning whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool>;

    /// List the events matching the filter in insertion order
    async fn search(&self, filter: &EventFilter) -> Result<Vec<Event>>;
}

/// Persistence operations on feedback
#[async_trait]
pub trait FeedbackRepository: Send + Sync {
    async fn create(&self, new_feedback: &NewFeedback) -> Result<Feedback>;

    /// List the feedback of an event with its author resolved
    async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<FeedbackWithAuthor>>;
}
