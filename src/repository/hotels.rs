//! Hotels repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Hotel, HotelWithRooms, Room},
};

#[derive(Clone)]
pub struct HotelsRepository {
    pool: Pool<Postgres>,
}

impl HotelsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all hotels in storage order
    pub async fn list(&self) -> AppResult<Vec<Hotel>> {
        let rows = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, image, created_at, updated_at FROM hotels ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Get hotel by ID, without rooms
    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Hotel>> {
        let hotel = sqlx::query_as::<_, Hotel>(
            "SELECT id, name, image, created_at, updated_at FROM hotels WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(hotel)
    }

    /// Rooms of a hotel in storage order
    pub async fn list_rooms(&self, hotel_id: i32) -> AppResult<Vec<Room>> {
        let rooms = sqlx::query_as::<_, Room>(
            r#"
            SELECT id, name, capacity, hotel_id, created_at, updated_at
            FROM rooms
            WHERE hotel_id = $1
            ORDER BY id
            "#,
        )
        .bind(hotel_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rooms)
    }

    /// Get hotel by ID together with its rooms
    pub async fn get_with_rooms(&self, id: i32) -> AppResult<Option<HotelWithRooms>> {
        let Some(hotel) = self.get_by_id(id).await? else {
            return Ok(None);
        };
        let rooms = self.list_rooms(hotel.id).await?;
        Ok(Some(HotelWithRooms::new(hotel, rooms)))
    }
}
