//! Feedback model and the payloads of the feedback endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Feedback entity
#[derive(Debug, Clone)]
pub struct Feedback {
    pub id: Uuid,
    pub event_id: Uuid,
    pub user_id: Option<Uuid>,
    pub rating: i32,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Feedback row with its author resolved
#[derive(Debug, Clone)]
pub struct FeedbackWithAuthor {
    pub feedback: Feedback,
    /// Id of the associated user, `None` when no user record resolves
    pub author_id: Option<Uuid>,
}

/// New feedback creation payload
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub event_id: Uuid,
    pub user_id: Option<Uuid>,
    pub rating: i32,
    pub content: String,
}

/// Request for a feedback submission
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitFeedbackRequest {
    #[serde(rename = "eventId")]
    pub event_id: Uuid,
    pub rating: i32,
    pub content: String,
}

/// Response for a feedback submission
///
/// `feedbackId` is an empty string when the submission failed.
#[derive(Debug, Serialize, Deserialize)]
pub struct SubmitFeedbackResponse {
    pub success: bool,
    #[serde(rename = "feedbackId")]
    pub feedback_id: String,
    pub message: Option<String>,
}

/// One feedback entry in the feedback view
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackData {
    pub content: String,
    pub rating: i32,
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,
    pub anonymous: bool,
}

impl From<FeedbackWithAuthor> for FeedbackData {
    fn from(row: FeedbackWithAuthor) -> Self {
        Self {
            content: row.feedback.content,
            rating: row.feedback.rating,
            submitted_at: row.feedback.created_at.to_rfc3339(),
            anonymous: row.author_id.is_none(),
        }
    }
}

/// Response for the feedback view
#[derive(Debug, Serialize, Deserialize)]
pub struct FeedbackViewResponse {
    pub feedbacks: Vec<FeedbackData>,
}
