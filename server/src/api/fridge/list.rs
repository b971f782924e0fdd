use crate::api::{error_response, ErrorResponse};
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::FridgeItem;
use crate::schema::fridge_items;
use crate::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

pub const DATE_ADDED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FridgeItemResponse {
    pub id: i32,
    pub item_name: String,
    pub brand: Option<String>,
    pub quantity: String,
    /// UTC, `YYYY-MM-DD HH:MM:SS`
    pub date_added: String,
}

impl From<FridgeItem> for FridgeItemResponse {
    fn from(item: FridgeItem) -> Self {
        Self {
            id: item.id,
            item_name: item.item_name,
            brand: item.brand,
            quantity: item.quantity,
            date_added: item.date_added.format(DATE_ADDED_FORMAT).to_string(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/fridge",
    tag = "fridge",
    responses(
        (status = 200, description = "The current user's fridge items", body = Vec<FridgeItemResponse>),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn list_fridge_items(
    AuthUser(user): AuthUser,
    State(ctx): State<AppState>,
) -> impl IntoResponse {
    let mut conn = get_conn!(ctx.pool);

    match fridge_items::table
        .filter(fridge_items::user_id.eq(user.id))
        .order(fridge_items::id.asc())
        .select(FridgeItem::as_select())
        .load(&mut conn)
    {
        Ok(items) => Json(
            items
                .into_iter()
                .map(FridgeItemResponse::from)
                .collect::<Vec<_>>(),
        )
        .into_response(),
        Err(e) => {
            tracing::error!("Failed to list fridge items: {}", e);
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to list fridge items",
            )
        }
    }
}
