//! Session checks for bearer tokens

use crate::{
    error::{AppError, AppResult},
    repository::Repository,
};

#[derive(Clone)]
pub struct AuthService {
    repository: Repository,
}

impl AuthService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Require a stored session for this exact token.
    ///
    /// Tokens are only accepted while sign-in keeps their session row.
    pub async fn require_session(&self, token: &str) -> AppResult<()> {
        if self.repository.sessions.find_by_token(token).await?.is_none() {
            return Err(AppError::Authentication("No session for this token".to_string()));
        }
        Ok(())
    }
}
