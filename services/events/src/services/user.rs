//! Registration, authentication and profile services

use std::sync::Arc;

use tracing::{error, info, warn};
use uuid::Uuid;

use super::{ServiceError, ServiceResult};
use crate::{
    models::{
        AuthStatus, AuthenticateUserRequest, AuthenticateUserResponse, EditProfileRequest,
        EditUserProfileResponse, NewUser, ProfileStatus, RegisterUserRequest,
        RegisterUserResponse, Role, UpdateUser, UserProfileResponse,
    },
    password::{hash_password, verify_dummy_password, verify_password},
    repositories::UserRepository,
    validation::{validate_email, validate_password},
};

/// Placeholder returned on successful authentication.
///
/// Token issuance is not implemented; callers identify themselves with the
/// `X-User-Id` header instead.
pub const ACCESS_TOKEN_STUB: &str = "generated_access_token_stub";

/// Same message for an unknown email and a wrong password
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Account operations
#[derive(Clone)]
pub struct UserService {
    users: Arc<dyn UserRepository>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self { users }
    }

    /// Register a new learner account
    pub async fn register(&self, request: RegisterUserRequest) -> RegisterUserResponse {
        if let Err(message) =
            validate_email(&request.email).and_then(|_| validate_password(&request.password))
        {
            return RegisterUserResponse {
                success: false,
                message,
                user_id: None,
            };
        }

        match self.try_register(&request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to register {}: {}", request.email, e);
                RegisterUserResponse {
                    success: false,
                    message: format!("Failed to create user: {}", e),
                    user_id: None,
                }
            }
        }
    }

    async fn try_register(
        &self,
        request: &RegisterUserRequest,
    ) -> anyhow::Result<RegisterUserResponse> {
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Ok(RegisterUserResponse {
                success: false,
                message: "User already exists.".to_string(),
                user_id: None,
            });
        }

        let password_hash = hash_password(&request.password)?;
        let user = self
            .users
            .create(&NewUser {
                email: request.email.clone(),
                password_hash,
                role: Role::Learner,
            })
            .await?;

        info!("Registered user {}", user.id);
        Ok(RegisterUserResponse {
            success: true,
            message: "User successfully created.".to_string(),
            user_id: Some(user.id),
        })
    }

    /// Check an email and password pair
    pub async fn authenticate(&self, request: AuthenticateUserRequest) -> AuthenticateUserResponse {
        let user = match self.users.find_by_email(&request.email).await {
            Ok(user) => user,
            Err(e) => {
                error!("Failed to look up {}: {}", request.email, e);
                return AuthenticateUserResponse {
                    status: AuthStatus::Failure,
                    access_token: None,
                    user_id: None,
                    error: Some(e.to_string()),
                };
            }
        };

        let verified = match &user {
            Some(user) => verify_password(&request.password, &user.password_hash),
            None => {
                verify_dummy_password(&request.password);
                false
            }
        };

        match user {
            Some(user) if verified => {
                info!("User {} authenticated", user.id);
                AuthenticateUserResponse {
                    status: AuthStatus::Success,
                    access_token: Some(ACCESS_TOKEN_STUB.to_string()),
                    user_id: Some(user.id),
                    error: None,
                }
            }
            _ => {
                warn!("Rejected credentials for {}", request.email);
                AuthenticateUserResponse {
                    status: AuthStatus::Failure,
                    access_token: None,
                    user_id: None,
                    error: Some(INVALID_CREDENTIALS.to_string()),
                }
            }
        }
    }

    /// Fetch the public profile of a user
    pub async fn view_profile(&self, user_id: Uuid) -> ServiceResult<UserProfileResponse> {
        self.users
            .find_by_id(user_id)
            .await?
            .map(UserProfileResponse::from)
            .ok_or_else(|| ServiceError::NotFound("User not found".to_string()))
    }

    /// Update name, bio and avatar of the user owning `request.email`.
    ///
    /// An absent bio or avatar keeps the stored value, an empty one clears it.
    pub async fn edit_profile(&self, request: EditProfileRequest) -> EditUserProfileResponse {
        match self.try_edit_profile(request).await {
            Ok(response) => response,
            Err(e) => {
                error!("Failed to edit profile: {}", e);
                EditUserProfileResponse {
                    status: ProfileStatus::Error,
                    message: Some(format!("An error occurred: {}", e)),
                    updated_user: None,
                }
            }
        }
    }

    async fn try_edit_profile(
        &self,
        request: EditProfileRequest,
    ) -> anyhow::Result<EditUserProfileResponse> {
        let not_found = || EditUserProfileResponse {
            status: ProfileStatus::Error,
            message: Some("User not found.".to_string()),
            updated_user: None,
        };

        if self.users.find_by_email(&request.email).await?.is_none() {
            return Ok(not_found());
        }

        let changes = UpdateUser {
            name: request.name,
            bio: request.bio.map(clear_if_empty),
            avatar_url: request.avatar_url.map(clear_if_empty),
        };

        let Some(user) = self.users.update_profile(&request.email, &changes).await? else {
            return Ok(not_found());
        };

        info!("Updated profile of user {}", user.id);
        Ok(EditUserProfileResponse {
            status: ProfileStatus::Success,
            message: Some("User profile updated successfully.".to_string()),
            updated_user: Some(user.into()),
        })
    }
}

fn clear_if_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
