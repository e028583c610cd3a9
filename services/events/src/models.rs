//! Domain entities and the request and response payloads of every endpoint

pub mod event;
pub mod feedback;
pub mod user;

// Re-export for convenience
pub use event::{
    CreateEventRequest, CreateEventResponse, DeleteEventResponse, DisplayEventResponse,
    EditEventRequest, EditEventResponse, EditedEvent, Event, EventFilter, EventSummary, NewEvent,
    SearchEventsQuery, SearchEventsResponse, UpdateEvent,
};
pub use feedback::{
    Feedback, FeedbackData, FeedbackViewResponse, FeedbackWithAuthor, NewFeedback,
    SubmitFeedbackRequest, SubmitFeedbackResponse,
};
pub use user::{
    AuthStatus, AuthenticateUserRequest, AuthenticateUserResponse, EditProfileRequest,
    EditUserProfileResponse, NewUser, ProfileStatus, RegisterUserRequest, RegisterUserResponse,
    Role, UpdateUser, UpdatedUser, User, UserProfileResponse, ViewProfileQuery,
};
