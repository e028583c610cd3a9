//! PostgreSQL feedback repository

use anyhow::Result;
use async_trait::async_trait;
use common::error::DatabaseError;
use sqlx::{PgPool, Row};
use tracing::info;
use uuid::Uuid;

use super::FeedbackRepository;
use crate::models::{Feedback, FeedbackWithAuthor, NewFeedback};

/// Feedback repository backed by PostgreSQL
#[derive(Clone)]
pub struct PgFeedbackRepository {
    pool: PgPool,
}

impl PgFeedbackRepository {
    /// Create a new feedback repository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FeedbackRepository for PgFeedbackRepository {
    async fn create(&self, new_feedback: &NewFeedback) -> Result<Feedback> {
        info!("Creating feedback for event: {}", new_feedback.event_id);

        let row = sqlx::query(
            r#"
            INSERT INTO feedback (event_id, user_id, rating, content)
            VALUES ($1, $2, $3, $4)
            RETURNING id, event_id, user_id, rating, content, created_at
            "#,
        )
        .bind(new_feedback.event_id)
        .bind(new_feedback.user_id)
        .bind(new_feedback.rating)
        .bind(&new_feedback.content)
        .fetch_one(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        Ok(Feedback {
            id: row.get("id"),
            event_id: row.get("event_id"),
            user_id: row.get("user_id"),
            rating: row.get("rating"),
            content: row.get("content"),
            created_at: row.get("created_at"),
        })
    }

    async fn list_for_event(&self, event_id: Uuid) -> Result<Vec<FeedbackWithAuthor>> {
        info!("Listing feedback for event: {}", event_id);

        let rows = sqlx::query(
            r#"
            SELECT f.id, f.event_id, f.user_id, f.rating, f.content, f.created_at,
                   u.id AS author_id
            FROM feedback f
            LEFT JOIN users u ON u.id = f.user_id
            WHERE f.event_id = $1
            ORDER BY f.created_at, f.id
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::from_query)?;

        let feedback = rows
            .into_iter()
            .map(|row| FeedbackWithAuthor {
                feedback: Feedback {
                    id: row.get("id"),
                    event_id: row.get("event_id"),
                    user_id: row.get("user_id"),
                    rating: row.get("rating"),
                    content: row.get("content"),
                    created_at: row.get("created_at"),
                },
                author_id: row.get("author_id"),
            })
            .collect();

        Ok(feedback)
    }
}
