//! Raw SQL that can't be expressed in Diesel's type-safe DSL.
//!
//! # Safety
//!
//! Nothing in this module takes user input.

use diesel::prelude::*;
use diesel::sql_types::Text;

/// Lists user tables in the SQLite catalog, hiding SQLite internals and
/// Diesel's migration bookkeeping.
///
/// # Why raw SQL?
/// `sqlite_master` is not part of the generated schema.
pub const LIST_TABLES_QUERY: &str = "SELECT name FROM sqlite_master \
    WHERE type = 'table' \
    AND name NOT LIKE 'sqlite_%' \
    AND name != '__diesel_schema_migrations' \
    ORDER BY name";

#[derive(QueryableByName)]
struct TableName {
    #[diesel(sql_type = Text)]
    name: String,
}

pub fn list_tables(conn: &mut SqliteConnection) -> QueryResult<Vec<String>> {
    let rows: Vec<TableName> = diesel::sql_query(LIST_TABLES_QUERY).load(conn)?;
    Ok(rows.into_iter().map(|row| row.name).collect())
}
