//! Hotels service

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{Hotel, HotelWithRooms},
    repository::HotelStore,
};

#[derive(Clone)]
pub struct HotelsService {
    store: Arc<dyn HotelStore>,
}

impl HotelsService {
    pub fn new(store: Arc<dyn HotelStore>) -> Self {
        Self { store }
    }

    /// List all hotels. An empty catalog is reported as `NotFound`.
    pub async fn list(&self) -> AppResult<Vec<Hotel>> {
        let hotels = self.store.find_all_hotels().await?;
        if hotels.is_empty() {
            return Err(AppError::NotFound("No hotels available".to_string()));
        }
        Ok(hotels)
    }

    /// Get a hotel with all of its rooms
    pub async fn get_with_rooms(&self, id: i32) -> AppResult<HotelWithRooms> {
        self.store
            .find_hotel_with_rooms(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", id)))
    }
}
