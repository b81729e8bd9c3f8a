//! Hotels API endpoints

use axum::{
    extract::{Path, State},
    Json,
};

use crate::{
    error::{AppError, AppResult},
    models::hotel::{Hotel, HotelWithRooms},
    AppState,
};

use super::HotelGuest;

/// List all hotels
#[utoipa::path(
    get,
    path = "/hotels",
    tag = "hotels",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All hotels", body = Vec<Hotel>),
        (status = 401, description = "Missing, invalid or sessionless token", body = crate::error::ErrorResponse),
        (status = 402, description = "Ticket does not grant hotel access", body = crate::error::ErrorResponse),
        (status = 404, description = "No enrollment, no ticket, or no hotels", body = crate::error::ErrorResponse)
    )
)]
pub async fn list_hotels(
    State(state): State<AppState>,
    _guest: HotelGuest,
) -> AppResult<Json<Vec<Hotel>>> {
    let hotels = state.services.hotels.list().await?;
    Ok(Json(hotels))
}

/// Get hotel by ID with its rooms
#[utoipa::path(
    get,
    path = "/hotels/{hotelId}",
    tag = "hotels",
    security(("bearer_auth" = [])),
    params(("hotelId" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel with rooms", body = HotelWithRooms),
        (status = 401, description = "Missing, invalid or sessionless token", body = crate::error::ErrorResponse),
        (status = 402, description = "Ticket does not grant hotel access", body = crate::error::ErrorResponse),
        (status = 404, description = "No enrollment, no ticket, or unknown hotel", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    _guest: HotelGuest,
    Path(hotel_id): Path<String>,
) -> AppResult<Json<HotelWithRooms>> {
    let id = parse_hotel_id(&hotel_id)
        .ok_or_else(|| AppError::NotFound(format!("Hotel {} not found", hotel_id)))?;
    let hotel = state.services.hotels.get_with_rooms(id).await?;
    Ok(Json(hotel))
}

/// Ids that are not positive integers cannot match any hotel
fn parse_hotel_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}
