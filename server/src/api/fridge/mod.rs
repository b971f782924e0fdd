pub mod add;
pub mod delete;
pub mod edit;
pub mod list;
pub mod search_items;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for /fridge endpoints
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/fridge", get(list::list_fridge_items))
        .route("/fridge/add", post(add::add_fridge_item))
        .route("/fridge/edit/{item_id}", post(edit::edit_fridge_item))
        .route("/fridge/delete/{item_id}", post(delete::delete_fridge_item))
        .route(
            "/fridge/search_items_fridge",
            get(search_items::search_items_fridge),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        list::list_fridge_items,
        add::add_fridge_item,
        edit::edit_fridge_item,
        delete::delete_fridge_item,
        search_items::search_items_fridge,
    ),
    components(schemas(
        list::FridgeItemResponse,
        add::AddFridgeItemRequest,
        edit::EditFridgeItemRequest,
        search_items::ItemMatches,
    ))
)]
pub struct ApiDoc;
