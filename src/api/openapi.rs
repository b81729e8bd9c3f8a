//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{health, hotels};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hotels API",
        version = "0.1.0",
        description = "Hotel and room listings for holders of hotel-inclusive tickets"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Hotels
        hotels::list_hotels,
        hotels::get_hotel,
    ),
    components(
        schemas(
            crate::models::hotel::Hotel,
            crate::models::hotel::Room,
            crate::models::hotel::HotelWithRooms,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "hotels", description = "Hotels and rooms for eligible ticket holders")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
