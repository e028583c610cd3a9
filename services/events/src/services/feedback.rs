//! Feedback submission and viewing

use std::sync::Arc;

use tracing::{error, info};
use uuid::Uuid;

use super::ServiceResult;
use crate::{
    models::{
        FeedbackData, FeedbackViewResponse, NewFeedback, SubmitFeedbackRequest,
        SubmitFeedbackResponse,
    },
    repositories::FeedbackRepository,
    validation::validate_rating,
};

/// Feedback operations
#[derive(Clone)]
pub struct FeedbackService {
    feedback: Arc<dyn FeedbackRepository>,
}

impl FeedbackService {
    pub fn new(feedback: Arc<dyn FeedbackRepository>) -> Self {
        Self { feedback }
    }

    /// Store feedback on an event; `author` is `None` for anonymous feedback
    pub async fn submit(
        &self,
        author: Option<Uuid>,
        request: SubmitFeedbackRequest,
    ) -> SubmitFeedbackResponse {
        if let Err(message) = validate_rating(request.rating) {
            return SubmitFeedbackResponse {
                success: false,
                feedback_id: String::new(),
                message: Some(message),
            };
        }

        let new_feedback = NewFeedback {
            event_id: request.event_id,
            user_id: author,
            rating: request.rating,
            content: request.content,
        };

        match self.feedback.create(&new_feedback).await {
            Ok(feedback) => {
                info!("Feedback {} submitted for event {}", feedback.id, feedback.event_id);
                SubmitFeedbackResponse {
                    success: true,
                    feedback_id: feedback.id.to_string(),
                    message: Some("Feedback submitted successfully.".to_string()),
                }
            }
            Err(e) => {
                error!("Failed to submit feedback for event {}: {}", request.event_id, e);
                SubmitFeedbackResponse {
                    success: false,
                    feedback_id: String::new(),
                    message: Some(e.to_string()),
                }
            }
        }
    }

    /// List the feedback of an event, flagging rows without an author
    pub async fn view(&self, event_id: Uuid) -> ServiceResult<FeedbackViewResponse> {
        let rows = self.feedback.list_for_event(event_id).await?;

        Ok(FeedbackViewResponse {
            feedbacks: rows.into_iter().map(FeedbackData::from).collect(),
        })
    }
}
