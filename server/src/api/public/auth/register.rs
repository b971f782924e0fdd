use crate::api::{error_response, message_response, ErrorResponse, MessageResponse};
use crate::get_conn;
use crate::models::NewUser;
use crate::schema::users;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

fn required(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

#[utoipa::path(
    post,
    path = "/register",
    tag = "auth",
    request_body(content = RegisterRequest, example = json!({"username": "cook", "email": "cook@example.com", "password": "password"})),
    responses(
        (status = 201, description = "User created successfully", body = MessageResponse),
        (status = 400, description = "Missing fields or already registered", body = ErrorResponse)
    )
)]
pub async fn register(
    State(ctx): State<AppState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Ok(Json(req)) = body else {
        return error_response(StatusCode::BAD_REQUEST, "No data");
    };

    let (Some(username), Some(email), Some(password)) = (
        required(&req.username),
        required(&req.email),
        req.password.as_deref().filter(|p| !p.is_empty()),
    ) else {
        return error_response(
            StatusCode::BAD_REQUEST,
            "Username, email, and password are required.",
        );
    };

    let mut conn = get_conn!(ctx.pool);

    let email_taken = match users::table
        .filter(users::email.eq(email))
        .select(users::id)
        .first::<i32>(&mut conn)
        .optional()
    {
        Ok(existing) => existing.is_some(),
        Err(e) => {
            tracing::error!("Failed to look up user by email: {}", e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user");
        }
    };
    if email_taken {
        return error_response(StatusCode::BAD_REQUEST, "Email already registered");
    }

    let password_hash = match ctx.passwords.hash(password) {
        Ok(h) => h,
        Err(e) => {
            tracing::error!("Failed to hash password: {}", e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to hash password",
            );
        }
    };

    let new_user = NewUser {
        username,
        email,
        password_hash: &password_hash,
    };

    match diesel::insert_into(users::table)
        .values(&new_user)
        .execute(&mut conn)
    {
        Ok(_) => {
            tracing::info!(username, "registered new user");
            message_response(StatusCode::CREATED, "User registered successfully!")
        }
        Err(diesel::result::Error::DatabaseError(
            diesel::result::DatabaseErrorKind::UniqueViolation,
            _,
        )) => error_response(
            StatusCode::BAD_REQUEST,
            "Username or email already registered",
        ),
        Err(e) => {
            tracing::error!("Failed to create user: {}", e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to create user")
        }
    }
}
