//! Enrollment, ticket and ticket type models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Event registration of a user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Enrollment {
    pub id: i32,
    pub user_id: i32,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Payment status of a ticket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "ticket_status", rename_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum TicketStatus {
    Reserved,
    Paid,
}

/// Ticket category
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: i32,
    pub name: String,
    pub price: i32,
    pub is_remote: bool,
    pub includes_hotel: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Ticket joined with its type
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: i32,
    pub ticket_type_id: i32,
    pub enrollment_id: i32,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub ticket_type: TicketType,
}

/// Flat row of `tickets JOIN ticket_types`
#[derive(Debug, FromRow)]
pub struct TicketRow {
    pub id: i32,
    pub ticket_type_id: i32,
    pub enrollment_id: i32,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub type_name: String,
    pub type_price: i32,
    pub type_is_remote: bool,
    pub type_includes_hotel: bool,
    pub type_created_at: DateTime<Utc>,
    pub type_updated_at: DateTime<Utc>,
}

impl From<TicketRow> for Ticket {
    fn from(row: TicketRow) -> Self {
        Self {
            id: row.id,
            ticket_type_id: row.ticket_type_id,
            enrollment_id: row.enrollment_id,
            status: row.status,
            created_at: row.created_at,
            updated_at: row.updated_at,
            ticket_type: TicketType {
                id: row.ticket_type_id,
                name: row.type_name,
                price: row.type_price,
                is_remote: row.type_is_remote,
                includes_hotel: row.type_includes_hotel,
                created_at: row.type_created_at,
                updated_at: row.type_updated_at,
            },
        }
    }
}

/// The part of a ticket that decides whether hotels may be shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HotelAccess {
    pub status: TicketStatus,
    pub is_remote: bool,
    pub includes_hotel: bool,
}

impl HotelAccess {
    /// True when the ticket is unpaid, remote, or does not include a hotel.
    /// All three cases are reported the same way.
    pub fn requires_payment(&self) -> bool {
        self.status == TicketStatus::Reserved || self.is_remote || !self.includes_hotel
    }
}

impl From<&Ticket> for HotelAccess {
    fn from(ticket: &Ticket) -> Self {
        Self {
            status: ticket.status,
            is_remote: ticket.ticket_type.is_remote,
            includes_hotel: ticket.ticket_type.includes_hotel,
        }
    }
}
