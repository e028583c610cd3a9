//! Application state shared across handlers

use std::sync::Arc;

use sqlx::PgPool;

use crate::{
    repositories::{InMemoryStore, PgEventRepository, PgFeedbackRepository, PgUserRepository},
    services::{EventService, FeedbackService, UserService},
};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Pool checked by the health endpoint; `None` when running on the in-memory store
    pub db_pool: Option<PgPool>,
    pub user_service: UserService,
    pub event_service: EventService,
    pub feedback_service: FeedbackService,
}

impl AppState {
    /// Wire every service to PostgreSQL
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            user_service: UserService::new(Arc::new(PgUserRepository::new(pool.clone()))),
            event_service: EventService::new(Arc::new(PgEventRepository::new(pool.clone()))),
            feedback_service: FeedbackService::new(Arc::new(PgFeedbackRepository::new(
                pool.clone(),
            ))),
            db_pool: Some(pool),
        }
    }

    /// Wire every service to one shared in-memory store
    pub fn in_memory(store: InMemoryStore) -> Self {
        Self {
            db_pool: None,
            user_service: UserService::new(Arc::new(store.clone())),
            event_service: EventService::new(Arc::new(store.clone())),
            feedback_service: FeedbackService::new(Arc::new(store)),
        }
    }
}
