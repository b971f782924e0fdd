use diesel::prelude::*;
use serde::Serialize;

use super::{image_url, CorpusRecord};
use crate::models::NewRecipe;
use crate::schema::recipes;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImportStats {
    pub inserted: usize,
    pub skipped_incomplete: usize,
    pub skipped_duplicate: usize,
}

fn is_complete(record: &CorpusRecord) -> bool {
    !record.name.is_empty()
        && !record.ingredients.is_empty()
        && !record.instructions.is_empty()
        && !record.image_name.is_empty()
}

/// Materialize corpus records as recipes, in one transaction.
///
/// Records missing any text field are skipped, as are records whose external
/// id or name is already in the store (including earlier records of the same
/// batch).
pub fn import_records(
    conn: &mut SqliteConnection,
    records: &[CorpusRecord],
    image_base_url: &str,
) -> Result<ImportStats, diesel::result::Error> {
    conn.transaction(|conn| {
        let mut stats = ImportStats::default();

        for record in records {
            if !is_complete(record) {
                tracing::debug!(recipe_id = record.recipe_id, "skipping incomplete record");
                stats.skipped_incomplete += 1;
                continue;
            }

            let existing: Option<i32> = recipes::table
                .filter(
                    recipes::recipe_id
                        .eq(record.recipe_id)
                        .or(recipes::name.eq(&record.name)),
                )
                .select(recipes::id)
                .first(conn)
                .optional()?;

            if existing.is_some() {
                tracing::debug!(name = %record.name, "skipping duplicate recipe");
                stats.skipped_duplicate += 1;
                continue;
            }

            let image = image_url(image_base_url, &record.image_name);
            diesel::insert_into(recipes::table)
                .values(NewRecipe {
                    recipe_id: record.recipe_id,
                    name: &record.name,
                    ingredients: &record.ingredients,
                    instructions: &record.instructions,
                    image_url: Some(&image),
                    youtube_url: None,
                })
                .execute(conn)?;
            stats.inserted += 1;
        }

        Ok(stats)
    })
}
