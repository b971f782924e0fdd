use anyhow::{Context, Result};
use recipebox_server::corpus::{import_records, ImportStats, RecipeCorpus};
use recipebox_server::db::create_pool;
use std::path::Path;

/// Load the corpus at `csv` into the recipes table of `database_url`.
pub fn import_corpus(database_url: &str, csv: &Path, image_base_url: &str) -> Result<ImportStats> {
    let pool = create_pool(database_url)
        .with_context(|| format!("Failed to open database: {}", database_url))?;
    let corpus = RecipeCorpus::new(csv, image_base_url);

    let records = corpus
        .load_all()
        .with_context(|| format!("Failed to read corpus: {}", csv.display()))?;
    if records.is_empty() {
        tracing::warn!(path = %csv.display(), "corpus is empty, nothing to import");
    }

    let mut conn = pool.get().context("Failed to get database connection")?;
    let stats = import_records(&mut conn, &records, image_base_url.trim_end_matches('/'))
        .context("Import failed, no recipes were written")?;

    println!(
        "Imported {} recipes ({} incomplete, {} already present)",
        stats.inserted, stats.skipped_incomplete, stats.skipped_duplicate
    );

    Ok(stats)
}
