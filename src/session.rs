//! Login and logout flows.

use std::sync::Arc;

use crate::backend::{ApiError, RegistryApi, SessionRequest};
use crate::constants::ROOT_PATH;
use crate::messages::Messages;
use crate::notifier::Notifier;

/// Moves the console to another location
pub trait Navigator: Send + Sync {
    fn redirect(&self, location: &str);
}

/// Why a login attempt did not redirect
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoginError {
    #[error("username and password are required")]
    MissingFields,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("login rejected with HTTP {0}")]
    Rejected(u16),

    #[error("login request failed: {0}")]
    Unreachable(String),
}

impl LoginError {
    /// Text for the login form's error line
    pub fn user_message(&self, messages: &Messages) -> &'static str {
        match self {
            LoginError::MissingFields => messages.login_missing_fields,
            LoginError::InvalidCredentials => messages.invalid_credentials,
            LoginError::Rejected(_) => messages.login_failed,
            LoginError::Unreachable(_) => messages.login_network_error,
        }
    }
}

impl From<ApiError> for LoginError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status: 401, .. } => LoginError::InvalidCredentials,
            ApiError::Status { status, .. } => LoginError::Rejected(status),
            other => LoginError::Unreachable(other.to_string()),
        }
    }
}

#[derive(Clone)]
pub struct SessionActions {
    api: Arc<dyn RegistryApi>,
    notifier: Notifier,
    navigator: Arc<dyn Navigator>,
    messages: &'static Messages,
}

impl SessionActions {
    pub fn new(
        api: Arc<dyn RegistryApi>,
        notifier: Notifier,
        navigator: Arc<dyn Navigator>,
        messages: &'static Messages,
    ) -> Self {
        Self {
            api,
            notifier,
            navigator,
            messages,
        }
    }

    /// Submit credentials once; redirects to the root on success.
    pub async fn login(&self, request: SessionRequest) -> Result<(), LoginError> {
        if request.username.trim().is_empty() || request.password.is_empty() {
            return Err(LoginError::MissingFields);
        }

        let username = request.username.clone();
        match self.api.login(request).await {
            Ok(()) => {
                log::info!("Logged in as {username}");
                self.navigator.redirect(ROOT_PATH);
                Ok(())
            }
            Err(err) => {
                log::warn!("Login as {username} failed: {err}");
                Err(LoginError::from(err))
            }
        }
    }

    /// End the session; on failure only a toast is shown.
    pub async fn logout(&self) -> Result<(), ApiError> {
        match self.api.logout().await {
            Ok(()) => {
                log::info!("Logged out");
                self.navigator.redirect(ROOT_PATH);
                Ok(())
            }
            Err(err) => {
                log::error!("Logout failed: {err}");
                self.notifier.error(self.messages.logout_failed);
                Err(err)
            }
        }
    }
}
