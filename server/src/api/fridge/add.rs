use super::list::FridgeItemResponse;
use crate::api::{error_response, json_body, ErrorResponse};
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::{FridgeItem, NewFridgeItem};
use crate::schema::fridge_items;
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

pub const DEFAULT_BRAND: &str = "No Brand";
pub const DEFAULT_QUANTITY: &str = "0 items";

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AddFridgeItemRequest {
    pub item_name: Option<String>,
    /// Defaults to "No Brand"
    pub brand: Option<String>,
    /// Free text, defaults to "0 items"
    pub quantity: Option<String>,
}

#[utoipa::path(
    post,
    path = "/fridge/add",
    tag = "fridge",
    request_body(content = AddFridgeItemRequest, example = json!({"item_name": "Milk", "brand": "Acme", "quantity": "2 liters"})),
    responses(
        (status = 201, description = "Item added", body = FridgeItemResponse),
        (status = 400, description = "Missing item name", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn add_fridge_item(
    AuthUser(user): AuthUser,
    State(ctx): State<AppState>,
    body: Result<Json<AddFridgeItemRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match json_body(body) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let Some(item_name) = req.item_name.as_deref().filter(|n| !n.trim().is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "Item name is required");
    };

    let mut conn = get_conn!(ctx.pool);

    let new_item = NewFridgeItem {
        user_id: user.id,
        item_name,
        brand: Some(req.brand.as_deref().unwrap_or(DEFAULT_BRAND)),
        quantity: req.quantity.as_deref().unwrap_or(DEFAULT_QUANTITY),
        date_added: Utc::now().naive_utc(),
    };

    match diesel::insert_into(fridge_items::table)
        .values(&new_item)
        .returning(FridgeItem::as_returning())
        .get_result(&mut conn)
    {
        Ok(item) => (StatusCode::CREATED, Json(FridgeItemResponse::from(item))).into_response(),
        Err(e) => {
            tracing::error!("Failed to add fridge item: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to add fridge item",
            )
        }
    }
}
