use crate::api::{error_response, message_response, path_id, ErrorResponse, MessageResponse};
use crate::auth::AuthUser;
use crate::get_conn;
use crate::schema::fridge_items;
use crate::AppState;
use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::dsl::exists;
use diesel::prelude::*;
use serde::Deserialize;
use utoipa::ToSchema;

/// Fields left out keep their current value.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct EditFridgeItemRequest {
    pub item_name: Option<String>,
    pub brand: Option<String>,
    pub quantity: Option<String>,
}

#[derive(AsChangeset)]
#[diesel(table_name = fridge_items)]
struct FridgeItemChanges<'a> {
    item_name: Option<&'a str>,
    brand: Option<&'a str>,
    quantity: Option<&'a str>,
}

impl FridgeItemChanges<'_> {
    fn is_empty(&self) -> bool {
        self.item_name.is_none() && self.brand.is_none() && self.quantity.is_none()
    }
}

#[utoipa::path(
    post,
    path = "/fridge/edit/{item_id}",
    tag = "fridge",
    params(
        ("item_id" = i32, Path, description = "Fridge item ID")
    ),
    request_body = EditFridgeItemRequest,
    responses(
        (status = 200, description = "Item updated", body = MessageResponse),
        (status = 400, description = "Missing or invalid body", body = ErrorResponse),
        (status = 404, description = "Item not found or not owned by the caller", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn edit_fridge_item(
    AuthUser(user): AuthUser,
    State(ctx): State<AppState>,
    item_id: Result<Path<i32>, PathRejection>,
    body: Result<Json<EditFridgeItemRequest>, JsonRejection>,
) -> impl IntoResponse {
    let item_id = match path_id(item_id) {
        Ok(id) => id,
        Err(response) => return response,
    };
    let Ok(Json(req)) = body else {
        return error_response(StatusCode::BAD_REQUEST, "No data");
    };

    let mut conn = get_conn!(ctx.pool);

    let owned_item = fridge_items::table
        .filter(fridge_items::id.eq(item_id))
        .filter(fridge_items::user_id.eq(user.id));

    match diesel::select(exists(owned_item.clone())).get_result::<bool>(&mut conn) {
        Ok(true) => {}
        Ok(false) => {
            return error_response(StatusCode::NOT_FOUND, "Item not found or not yours")
        }
        Err(e) => {
            tracing::error!("Failed to look up fridge item {}: {}", item_id, e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update fridge item",
            );
        }
    }

    let changes = FridgeItemChanges {
        item_name: req.item_name.as_deref(),
        brand: req.brand.as_deref(),
        quantity: req.quantity.as_deref(),
    };

    if !changes.is_empty() {
        if let Err(e) = diesel::update(owned_item).set(&changes).execute(&mut conn) {
            tracing::error!("Failed to update fridge item {}: {}", item_id, e);
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to update fridge item",
            );
        }
    }

    message_response(StatusCode::OK, "Item updated successfully!")
}
