//! Repository layer for database operations

pub mod enrollments;
pub mod hotels;
pub mod sessions;
pub mod tickets;

use async_trait::async_trait;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{Enrollment, Hotel, HotelWithRooms, Ticket},
};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub enrollments: enrollments::EnrollmentsRepository,
    pub tickets: tickets::TicketsRepository,
    pub hotels: hotels::HotelsRepository,
    pub sessions: sessions::SessionsRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            enrollments: enrollments::EnrollmentsRepository::new(pool.clone()),
            tickets: tickets::TicketsRepository::new(pool.clone()),
            hotels: hotels::HotelsRepository::new(pool.clone()),
            sessions: sessions::SessionsRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Reads behind the eligibility gate and the hotel queries
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelStore: Send + Sync {
    async fn find_enrollment_by_user_id(&self, user_id: i32) -> AppResult<Option<Enrollment>>;

    /// Ticket of an enrollment, joined with its ticket type
    async fn find_ticket_by_enrollment_id(&self, enrollment_id: i32) -> AppResult<Option<Ticket>>;

    async fn find_all_hotels(&self) -> AppResult<Vec<Hotel>>;

    async fn find_hotel_by_id(&self, id: i32) -> AppResult<Option<Hotel>>;

    async fn find_hotel_with_rooms(&self, id: i32) -> AppResult<Option<HotelWithRooms>>;
}

#[async_trait]
impl HotelStore for Repository {
    async fn find_enrollment_by_user_id(&self, user_id: i32) -> AppResult<Option<Enrollment>> {
        self.enrollments.find_by_user_id(user_id).await
    }

    async fn find_ticket_by_enrollment_id(&self, enrollment_id: i32) -> AppResult<Option<Ticket>> {
        self.tickets.find_by_enrollment_id(enrollment_id).await
    }

    async fn find_all_hotels(&self) -> AppResult<Vec<Hotel>> {
        self.hotels.list().await
    }

    async fn find_hotel_by_id(&self, id: i32) -> AppResult<Option<Hotel>> {
        self.hotels.get_by_id(id).await
    }

    async fn find_hotel_with_rooms(&self, id: i32) -> AppResult<Option<HotelWithRooms>> {
        self.hotels.get_with_rooms(id).await
    }
}
