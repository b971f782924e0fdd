use crate::api::{error_response, json_body, message_response, ErrorResponse, MessageResponse};
use crate::auth::AuthUser;
use crate::get_conn;
use crate::models::{NewRecipe, NewSavedRecipe, Recipe};
use crate::schema::{recipes, saved_recipes};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SaveRecipeRequest {
    /// External recipe id, as a number or a string of digits
    #[schema(value_type = Option<i64>)]
    pub recipe_id: Option<Value>,
    pub name: Option<String>,
    pub ingredients: Option<String>,
    pub instructions: Option<String>,
    pub image_url: Option<String>,
    pub youtube_url: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
enum RecipeIdError {
    Missing,
    Invalid,
}

/// Missing, null, zero, empty and `false` all count as absent.
fn parse_recipe_id(value: Option<&Value>) -> Result<i64, RecipeIdError> {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => Err(RecipeIdError::Missing),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(0) => Err(RecipeIdError::Missing),
            Some(id) if id > 0 => Ok(id),
            _ => Err(RecipeIdError::Invalid),
        },
        Some(Value::String(s)) => {
            let s = s.trim();
            if s.is_empty() {
                Err(RecipeIdError::Missing)
            } else if s.bytes().all(|b| b.is_ascii_digit()) {
                s.parse().map_err(|_| RecipeIdError::Invalid)
            } else {
                Err(RecipeIdError::Invalid)
            }
        }
        Some(_) => Err(RecipeIdError::Invalid),
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn find_recipe(conn: &mut SqliteConnection, external_id: i64) -> QueryResult<Option<Recipe>> {
    recipes::table
        .filter(recipes::recipe_id.eq(external_id))
        .select(Recipe::as_select())
        .first(conn)
        .optional()
}

/// Existing recipe row for `external_id`, created from the request if absent.
fn find_or_create_recipe(
    conn: &mut SqliteConnection,
    external_id: i64,
    req: &SaveRecipeRequest,
) -> QueryResult<Recipe> {
    if let Some(recipe) = find_recipe(conn, external_id)? {
        return Ok(recipe);
    }

    let new_recipe = NewRecipe {
        recipe_id: external_id,
        name: req.name.as_deref().unwrap_or("Untitled"),
        ingredients: req.ingredients.as_deref().unwrap_or(""),
        instructions: req.instructions.as_deref().unwrap_or(""),
        image_url: non_empty(&req.image_url),
        youtube_url: non_empty(&req.youtube_url),
    };

    match diesel::insert_into(recipes::table)
        .values(&new_recipe)
        .returning(Recipe::as_returning())
        .get_result(conn)
    {
        Ok(recipe) => Ok(recipe),
        // Lost a race with a concurrent save of the same recipe
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            find_recipe(conn, external_id)?.ok_or(DieselError::NotFound)
        }
        Err(e) => Err(e),
    }
}

#[utoipa::path(
    post,
    path = "/save_recipe",
    tag = "saved",
    request_body(content = SaveRecipeRequest, example = json!({"recipe_id": 42, "name": "Pasta", "ingredients": "pasta, egg", "instructions": "Boil.", "image_url": "", "youtube_url": ""})),
    responses(
        (status = 201, description = "Recipe saved", body = MessageResponse),
        (status = 400, description = "Missing recipe_id or already saved", body = ErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn save_recipe(
    AuthUser(user): AuthUser,
    State(ctx): State<AppState>,
    body: Result<Json<SaveRecipeRequest>, JsonRejection>,
) -> impl IntoResponse {
    let req = match json_body(body) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let external_id = match parse_recipe_id(req.recipe_id.as_ref()) {
        Ok(id) => id,
        Err(RecipeIdError::Missing) => {
            return error_response(StatusCode::BAD_REQUEST, "recipe_id is required")
        }
        Err(RecipeIdError::Invalid) => {
            return error_response(StatusCode::BAD_REQUEST, "recipe_id must be a positive integer")
        }
    };

    let mut conn = get_conn!(ctx.pool);

    let recipe = match find_or_create_recipe(&mut conn, external_id, &req) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to store recipe {}: {}", external_id, e);
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save recipe");
        }
    };

    match diesel::insert_into(saved_recipes::table)
        .values(&NewSavedRecipe {
            user_id: user.id,
            recipe_id: recipe.id,
        })
        .execute(&mut conn)
    {
        Ok(_) => message_response(StatusCode::CREATED, "Recipe saved successfully!"),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => {
            error_response(StatusCode::BAD_REQUEST, "Recipe already saved")
        }
        Err(e) => {
            tracing::error!("Failed to save recipe for user {}: {}", user.id, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to save recipe")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_recipe_id_forms() {
        assert_eq!(parse_recipe_id(Some(&json!(42))), Ok(42));
        assert_eq!(parse_recipe_id(Some(&json!("42"))), Ok(42));
        assert_eq!(parse_recipe_id(Some(&json!(" 7 "))), Ok(7));
        assert_eq!(
            parse_recipe_id(Some(&json!("5000000000"))),
            Ok(5_000_000_000)
        );
    }

    #[test]
    fn test_recipe_id_absent() {
        assert_eq!(parse_recipe_id(None), Err(RecipeIdError::Missing));
        assert_eq!(parse_recipe_id(Some(&json!(null))), Err(RecipeIdError::Missing));
        assert_eq!(parse_recipe_id(Some(&json!(0))), Err(RecipeIdError::Missing));
        assert_eq!(parse_recipe_id(Some(&json!(""))), Err(RecipeIdError::Missing));
    }

    #[test]
    fn test_recipe_id_invalid() {
        assert_eq!(parse_recipe_id(Some(&json!("abc"))), Err(RecipeIdError::Invalid));
        assert_eq!(parse_recipe_id(Some(&json!(-3))), Err(RecipeIdError::Invalid));
        assert_eq!(parse_recipe_id(Some(&json!(1.5))), Err(RecipeIdError::Invalid));
        assert_eq!(
            parse_recipe_id(Some(&json!("99999999999999999999"))),
            Err(RecipeIdError::Invalid)
        );
        assert_eq!(parse_recipe_id(Some(&json!([1]))), Err(RecipeIdError::Invalid));
    }
}
