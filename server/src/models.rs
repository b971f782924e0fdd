use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::users)]
pub struct NewUser<'a> {
    pub username: &'a str,
    pub email: &'a str,
    pub password_hash: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::sessions)]
pub struct NewSession<'a> {
    pub user_id: i32,
    pub token_hash: &'a str,
    pub expires_at: NaiveDateTime,
}

/// A recipe materialized in the store, either saved from the CSV corpus or
/// bulk-imported. `recipe_id` is the external corpus id.
#[derive(Queryable, Selectable, Serialize, ToSchema, Debug, Clone)]
#[diesel(table_name = crate::schema::recipes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Recipe {
    pub id: i32,
    pub recipe_id: i64,
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub image_url: Option<String>,
    pub youtube_url: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::recipes)]
pub struct NewRecipe<'a> {
    pub recipe_id: i64,
    pub name: &'a str,
    pub ingredients: &'a str,
    pub instructions: &'a str,
    pub image_url: Option<&'a str>,
    pub youtube_url: Option<&'a str>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::saved_recipes)]
pub struct NewSavedRecipe {
    pub user_id: i32,
    pub recipe_id: i32,
}

#[derive(Queryable, Selectable, Debug, Clone)]
#[diesel(table_name = crate::schema::fridge_items)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FridgeItem {
    pub id: i32,
    pub user_id: i32,
    pub item_name: String,
    pub brand: Option<String>,
    pub quantity: String,
    pub date_added: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::fridge_items)]
pub struct NewFridgeItem<'a> {
    pub user_id: i32,
    pub item_name: &'a str,
    pub brand: Option<&'a str>,
    pub quantity: &'a str,
    pub date_added: NaiveDateTime,
}
