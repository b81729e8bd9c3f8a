//! Router and fixture helpers

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use hotels_api::{
    api::create_router, config::AppConfig, models::{TicketStatus, UserClaims}, repository::Repository,
    services::Services, AppState,
};

pub struct TestApp {
    pub router: Router,
    pub state: AppState,
    pub pool: PgPool,
}

impl TestApp {
    pub fn new(pool: PgPool) -> Self {
        let config = AppConfig::default();
        let services = Services::new(Repository::new(pool.clone()));
        let state = AppState {
            config: Arc::new(config),
            services: Arc::new(services),
        };
        Self {
            router: create_router(state.clone()),
            state,
            pool,
        }
    }

    /// Send a GET request, optionally with a bearer token
    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().uri(uri);
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }
        let request = builder.body(Body::empty()).expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    pub async fn create_user(&self) -> i32 {
        sqlx::query_scalar(
            "INSERT INTO users (email, password) VALUES ('u' || nextval('users_id_seq') || '@example.com', 'x') RETURNING id",
        )
        .fetch_one(&self.pool)
        .await
        .expect("Failed to create user")
    }

    /// Token with a stored session
    pub async fn valid_token(&self, user_id: i32) -> String {
        let auth = &self.state.config.auth;
        let token = UserClaims::new(user_id, auth.jwt_expiration_hours)
            .create_token(&auth.jwt_secret)
            .expect("Failed to issue token");
        self.store_session(user_id, &token).await;
        token
    }

    pub async fn store_session(&self, user_id: i32, token: &str) {
        sqlx::query("INSERT INTO sessions (user_id, token) VALUES ($1, $2)")
            .bind(user_id)
            .bind(token)
            .execute(&self.pool)
            .await
            .expect("Failed to create session");
    }

    pub async fn create_enrollment(&self, user_id: i32) -> i32 {
        sqlx::query_scalar("INSERT INTO enrollments (user_id, name) VALUES ($1, 'Attendee') RETURNING id")
            .bind(user_id)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to create enrollment")
    }

    pub async fn create_ticket_type(&self, is_remote: bool, includes_hotel: bool) -> i32 {
        sqlx::query_scalar(
            "INSERT INTO ticket_types (name, price, is_remote, includes_hotel) VALUES ('Ticket', 250, $1, $2) RETURNING id",
        )
        .bind(is_remote)
        .bind(includes_hotel)
        .fetch_one(&self.pool)
        .await
        .expect("Failed to create ticket type")
    }

    pub async fn create_ticket(&self, enrollment_id: i32, ticket_type_id: i32, status: TicketStatus) {
        sqlx::query("INSERT INTO tickets (enrollment_id, ticket_type_id, status) VALUES ($1, $2, $3)")
            .bind(enrollment_id)
            .bind(ticket_type_id)
            .bind(status)
            .execute(&self.pool)
            .await
            .expect("Failed to create ticket");
    }

    pub async fn create_hotel(&self, name: &str) -> i32 {
        sqlx::query_scalar("INSERT INTO hotels (name, image) VALUES ($1, 'https://img.example/h.png') RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .expect("Failed to create hotel")
    }

    pub async fn create_room(&self, hotel_id: i32, number: i32) {
        sqlx::query("INSERT INTO rooms (name, capacity, hotel_id) VALUES ($1, 2, $2)")
            .bind(format!("Room {}", number))
            .bind(hotel_id)
            .execute(&self.pool)
            .await
            .expect("Failed to create room");
    }

    /// User holding a ticket with the given status and flags; returns a valid token
    pub async fn ticket_holder(&self, status: TicketStatus, is_remote: bool, includes_hotel: bool) -> String {
        let user_id = self.create_user().await;
        let token = self.valid_token(user_id).await;
        let enrollment_id = self.create_enrollment(user_id).await;
        let ticket_type_id = self.create_ticket_type(is_remote, includes_hotel).await;
        self.create_ticket(enrollment_id, ticket_type_id, status).await;
        token
    }
}
