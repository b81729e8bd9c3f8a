//! Eligibility gate in front of hotel data

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::HotelAccess,
    repository::HotelStore,
};

#[derive(Clone)]
pub struct EligibilityService {
    store: Arc<dyn HotelStore>,
}

impl EligibilityService {
    pub fn new(store: Arc<dyn HotelStore>) -> Self {
        Self { store }
    }

    /// Check that a user may see hotels.
    ///
    /// Fails with `NotFound` when the user has no enrollment or no ticket,
    /// and with `PaymentRequired` when the ticket is reserved, remote, or
    /// does not include a hotel.
    pub async fn check(&self, user_id: i32) -> AppResult<()> {
        let enrollment = self
            .store
            .find_enrollment_by_user_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Enrollment not found".to_string()))?;

        let ticket = self
            .store
            .find_ticket_by_enrollment_id(enrollment.id)
            .await?
            .ok_or_else(|| AppError::NotFound("Ticket not found".to_string()))?;

        if HotelAccess::from(&ticket).requires_payment() {
            tracing::debug!(user_id, ticket_id = ticket.id, "hotel access denied");
            return Err(AppError::PaymentRequired(
                "Ticket does not grant hotel access".to_string(),
            ));
        }

        Ok(())
    }
}
