//! Data models for the hotels API

pub mod hotel;
pub mod ticket;
pub mod user;

// Re-export commonly used types
pub use hotel::{Hotel, HotelWithRooms, Room};
pub use ticket::{Enrollment, HotelAccess, Ticket, TicketStatus, TicketType};
pub use user::{Session, UserClaims};
