//! Event service routes

use axum::{
    Json, Router,
    extract::{Path, State},
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    extract::{AppJson, AppQuery},
    identity::Caller,
    models::{
        AuthenticateUserRequest, CreateEventRequest, EditEventRequest, EditProfileRequest,
        RegisterUserRequest, SearchEventsQuery, SubmitFeedbackRequest, ViewProfileQuery,
    },
    state::AppState,
};

/// Create the router for the event service
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/user/register", post(register_user))
        .route("/user/authenticate", post(authenticate_user))
        .route("/user/profile/view", get(view_profile))
        .route("/user/profile/edit", put(edit_profile))
        .route("/event/create", post(create_event))
        .route("/event/display/:id", get(display_event))
        .route("/event/edit/:id", put(edit_event))
        .route("/event/delete/:id", delete(delete_event))
        .route("/search/events", get(search_events))
        .route("/feedback/submit", post(submit_feedback))
        .route("/feedback/view/:event_id", get(view_feedback))
        .with_state(state)
}

fn parse_id(raw: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| ApiError::BadRequest(format!("Invalid id: {}", raw)))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let database = match &state.db_pool {
        Some(pool) => match common::database::health_check(pool).await {
            Ok(true) => "ok",
            _ => "unavailable",
        },
        None => "in-memory",
    };

    Json(json!({
        "status": "ok",
        "service": "events-service",
        "database": database,
    }))
}

/// User registration endpoint
pub async fn register_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterUserRequest>,
) -> impl IntoResponse {
    info!("Registration request for: {}", payload.email);
    Json(state.user_service.register(payload).await)
}

/// User authentication endpoint
pub async fn authenticate_user(
    State(state): State<AppState>,
    AppJson(payload): AppJson<AuthenticateUserRequest>,
) -> impl IntoResponse {
    info!("Authentication attempt for: {}", payload.email);
    Json(state.user_service.authenticate(payload).await)
}

/// Profile view endpoint
pub async fn view_profile(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<ViewProfileQuery>,
) -> ApiResult<impl IntoResponse> {
    let profile = state.user_service.view_profile(query.user_id).await?;
    Ok(Json(profile))
}

/// Profile edit endpoint
pub async fn edit_profile(
    State(state): State<AppState>,
    AppJson(payload): AppJson<EditProfileRequest>,
) -> impl IntoResponse {
    info!("Profile edit for: {}", payload.email);
    Json(state.user_service.edit_profile(payload).await)
}

/// Event creation endpoint; the caller becomes the organizer
pub async fn create_event(
    State(state): State<AppState>,
    caller: Caller,
    AppJson(payload): AppJson<CreateEventRequest>,
) -> ApiResult<impl IntoResponse> {
    let organizer_id = caller.require()?;
    info!("Event creation by organizer: {}", organizer_id);

    let created = state.event_service.create(organizer_id, payload).await?;
    Ok(Json(created))
}

/// Event display endpoint
pub async fn display_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    let event = state.event_service.display(id).await?;
    Ok(Json(event))
}

/// Event edit endpoint
pub async fn edit_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(payload): AppJson<EditEventRequest>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    info!("Edit request for event: {}", id);
    Ok(Json(state.event_service.edit(id, payload).await))
}

/// Event deletion endpoint
pub async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    info!("Delete request for event: {}", id);
    Ok(Json(state.event_service.delete(id).await))
}

/// Event search endpoint
pub async fn search_events(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<SearchEventsQuery>,
) -> ApiResult<impl IntoResponse> {
    let results = state.event_service.search(query).await?;
    Ok(Json(results))
}

/// Feedback submission endpoint; anonymous without a caller identity
pub async fn submit_feedback(
    State(state): State<AppState>,
    Caller(author): Caller,
    AppJson(payload): AppJson<SubmitFeedbackRequest>,
) -> impl IntoResponse {
    info!("Feedback submission for event: {}", payload.event_id);
    Json(state.feedback_service.submit(author, payload).await)
}

/// Feedback view endpoint
pub async fn view_feedback(
    State(state): State<AppState>,
    Path(event_id): Path<String>,
) -> ApiResult<impl IntoResponse> {
    let event_id = parse_id(&event_id)?;
    let feedback = state.feedback_service.view(event_id).await?;
    Ok(Json(feedback))
}
