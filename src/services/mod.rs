//! Business logic services

pub mod auth;
pub mod eligibility;
pub mod hotels;

use std::sync::Arc;

use crate::{error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub auth: auth::AuthService,
    pub eligibility: eligibility::EligibilityService,
    pub hotels: hotels::HotelsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        let store = Arc::new(repository.clone());
        Self {
            auth: auth::AuthService::new(repository.clone()),
            eligibility: eligibility::EligibilityService::new(store.clone()),
            hotels: hotels::HotelsService::new(store),
            repository,
        }
    }

    /// Check that the database answers
    pub async fn ping(&self) -> AppResult<()> {
        self.repository.ping().await
    }
}
