use crate::api::{error_response, ErrorResponse};
use crate::corpus::suggest_names;
use crate::get_conn;
use crate::schema::recipes;
use crate::AppState;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    #[default]
    Ingredient,
    Name,
    /// Anything else; yields no suggestions.
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AutocompleteParams {
    /// Partial input, case-insensitive
    #[serde(default)]
    pub q: String,
    /// `ingredient` (default) or `name`
    #[serde(default, rename = "type")]
    #[param(value_type = Option<String>)]
    pub kind: SuggestionKind,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AutocompleteResponse {
    pub suggestions: Vec<String>,
}

/// LIKE pattern matching `query` anywhere, with wildcards in the input escaped.
fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[utoipa::path(
    get,
    path = "/autocomplete_recipes",
    tag = "search",
    params(AutocompleteParams),
    responses(
        (status = 200, description = "Up to 10 distinct suggestions", body = AutocompleteResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = []),
        ("cookie_auth" = [])
    )
)]
pub async fn autocomplete_recipes(
    State(ctx): State<AppState>,
    Query(params): Query<AutocompleteParams>,
) -> impl IntoResponse {
    let query = params.q.trim().to_lowercase();
    if query.is_empty() {
        return Json(AutocompleteResponse {
            suggestions: Vec::new(),
        })
        .into_response();
    }

    let suggestions = match params.kind {
        SuggestionKind::Ingredient => match ctx.corpus.ingredient_suggestions(&query) {
            Ok(s) => s,
            Err(e) => {
                tracing::error!("Ingredient autocomplete failed: {}", e);
                return error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to read recipe corpus",
                );
            }
        },
        SuggestionKind::Name => {
            let mut conn = get_conn!(ctx.pool);
            let names: Vec<String> = match recipes::table
                .filter(recipes::name.like(contains_pattern(&query)).escape('\\'))
                .order(recipes::id.asc())
                .select(recipes::name)
                .load(&mut conn)
            {
                Ok(n) => n,
                Err(e) => {
                    tracing::error!("Name autocomplete failed: {}", e);
                    return error_response(
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Failed to load recipe names",
                    );
                }
            };
            suggest_names(names.iter().map(String::as_str), &query)
        }
        SuggestionKind::Unknown => Vec::new(),
    };

    Json(AutocompleteResponse { suggestions }).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_pattern_escapes_wildcards() {
        assert_eq!(contains_pattern("egg"), "%egg%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn test_kind_parsing() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, rename = "type")]
            kind: SuggestionKind,
        }
        let parse = |s: &str| serde_json::from_str::<Wrapper>(s).unwrap().kind;
        assert_eq!(parse("{}"), SuggestionKind::Ingredient);
        assert_eq!(parse(r#"{"type": "name"}"#), SuggestionKind::Name);
        assert_eq!(parse(r#"{"type": "cuisine"}"#), SuggestionKind::Unknown);
    }
}
