//! Tickets repository

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::{ticket::TicketRow, Ticket},
};

#[derive(Clone)]
pub struct TicketsRepository {
    pool: Pool<Postgres>,
}

impl TicketsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get the ticket held by an enrollment, with its ticket type
    pub async fn find_by_enrollment_id(&self, enrollment_id: i32) -> AppResult<Option<Ticket>> {
        let row = sqlx::query_as::<_, TicketRow>(
            r#"
            SELECT
                t.id, t.ticket_type_id, t.enrollment_id, t.status,
                t.created_at, t.updated_at,
                tt.name AS type_name,
                tt.price AS type_price,
                tt.is_remote AS type_is_remote,
                tt.includes_hotel AS type_includes_hotel,
                tt.created_at AS type_created_at,
                tt.updated_at AS type_updated_at
            FROM tickets t
            JOIN ticket_types tt ON tt.id = t.ticket_type_id
            WHERE t.enrollment_id = $1
            "#,
        )
        .bind(enrollment_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Ticket::from))
    }
}
