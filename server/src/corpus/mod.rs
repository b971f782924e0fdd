//! Flat-file recipe corpus (`Food.csv`) and fridge item catalog (`Item.csv`).
//!
//! The corpus is re-read from disk on every call. A missing file is logged
//! and behaves like an empty corpus.

pub mod autocomplete;
pub mod import;
pub mod items;

use std::fs::File;
use std::io;
use std::ops::ControlFlow;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

pub use autocomplete::{suggest_ingredients, suggest_names, MAX_SUGGESTIONS};
pub use import::{import_records, ImportStats};
pub use items::ItemCatalog;

#[derive(Error, Debug)]
pub enum CorpusError {
    #[error("Failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// One row of the corpus as read from disk, after id repair and trimming.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct CorpusRecord {
    pub recipe_id: i64,
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub image_name: String,
}

/// A corpus record shaped for search responses.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RecipeHit {
    pub recipe_id: i64,
    pub name: String,
    pub ingredients: String,
    pub instructions: String,
    pub image_url: String,
    /// Always empty; video links are resolved separately.
    pub youtube_url: String,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    #[serde(default)]
    recipe_id: Option<String>,
    #[serde(rename = "Title", default)]
    title: String,
    #[serde(rename = "Ingredients", default)]
    ingredients: String,
    #[serde(rename = "Instructions", default)]
    instructions: String,
    #[serde(rename = "Image_Name", default)]
    image_name: String,
}

/// Parse a corpus id cell. Only plain digit strings are accepted.
fn parse_recipe_id(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

impl CsvRow {
    /// `position` is the 1-based row number, used as the synthetic id when
    /// the row's own id is missing or malformed.
    fn into_record(self, position: usize) -> CorpusRecord {
        let recipe_id = parse_recipe_id(self.recipe_id.as_deref()).unwrap_or_else(|| {
            let synthetic = i64::try_from(position).unwrap_or(i64::MAX);
            tracing::warn!(
                raw = ?self.recipe_id,
                synthetic,
                "invalid recipe_id in corpus, using synthetic id"
            );
            synthetic
        });

        CorpusRecord {
            recipe_id,
            name: self.title.trim().to_string(),
            ingredients: self.ingredients.trim().to_string(),
            instructions: self.instructions.trim().to_string(),
            image_name: self.image_name.trim().to_string(),
        }
    }
}

/// Exports from spreadsheet tools often start with a UTF-8 BOM, which would
/// otherwise stick to the first header name.
pub(crate) fn strip_bom_from_headers<R: io::Read>(
    reader: &mut csv::Reader<R>,
) -> Result<(), csv::Error> {
    let headers = reader.headers()?.clone();
    if let Some(first) = headers.get(0) {
        if first.starts_with('\u{feff}') {
            let cleaned: csv::StringRecord = headers
                .iter()
                .map(|h| h.trim_start_matches('\u{feff}'))
                .collect();
            reader.set_headers(cleaned);
        }
    }
    Ok(())
}

/// Storage URL for a corpus image. Empty when the row has no image.
pub fn image_url(base_url: &str, image_name: &str) -> String {
    if image_name.is_empty() {
        return String::new();
    }
    format!("{}/{}.png", base_url.trim_end_matches('/'), image_name)
}

/// Lowercased, trimmed, non-empty terms of a comma-separated ingredient query.
pub fn parse_ingredient_terms(query: &str) -> Vec<String> {
    query
        .split(',')
        .map(|term| term.trim().to_lowercase())
        .filter(|term| !term.is_empty())
        .collect()
}

/// Handle to the recipe corpus file.
#[derive(Debug, Clone)]
pub struct RecipeCorpus {
    path: PathBuf,
    image_base_url: String,
}

impl RecipeCorpus {
    pub fn new(path: impl Into<PathBuf>, image_base_url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            image_base_url: image_base_url.into(),
        }
    }

    /// Visit every record in file order until `visit` breaks.
    fn scan<F>(&self, mut visit: F) -> Result<(), CorpusError>
    where
        F: FnMut(CorpusRecord) -> ControlFlow<()>,
    {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::error!(path = %self.path.display(), "recipe corpus does not exist");
                return Ok(());
            }
            Err(source) => {
                return Err(CorpusError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
        strip_bom_from_headers(&mut reader)?;

        for (index, row) in reader.deserialize::<CsvRow>().enumerate() {
            let row = match row {
                Ok(row) => row,
                Err(e) => {
                    tracing::warn!(row = index + 1, error = %e, "skipping unreadable corpus row");
                    continue;
                }
            };
            if visit(row.into_record(index + 1)).is_break() {
                break;
            }
        }

        Ok(())
    }

    fn hit(&self, record: CorpusRecord) -> RecipeHit {
        RecipeHit {
            image_url: image_url(&self.image_base_url, &record.image_name),
            recipe_id: record.recipe_id,
            name: record.name,
            ingredients: record.ingredients,
            instructions: record.instructions,
            youtube_url: String::new(),
        }
    }

    /// Every record in the corpus.
    pub fn load_all(&self) -> Result<Vec<CorpusRecord>, CorpusError> {
        let mut records = Vec::new();
        self.scan(|record| {
            records.push(record);
            ControlFlow::Continue(())
        })?;
        tracing::info!(count = records.len(), "loaded recipes from corpus");
        Ok(records)
    }

    /// Case-insensitive substring match on the title.
    pub fn search_by_name(&self, query: &str) -> Result<Vec<RecipeHit>, CorpusError> {
        let query = query.trim().to_lowercase();
        let mut hits = Vec::new();
        self.scan(|record| {
            if record.name.to_lowercase().contains(&query) {
                hits.push(self.hit(record));
            }
            ControlFlow::Continue(())
        })?;
        Ok(hits)
    }

    /// Records whose ingredient text contains every comma-separated term.
    pub fn search_by_ingredients(&self, query: &str) -> Result<Vec<RecipeHit>, CorpusError> {
        let terms = parse_ingredient_terms(query);
        let mut hits = Vec::new();
        self.scan(|record| {
            let ingredients = record.ingredients.to_lowercase();
            if terms.iter().all(|term| ingredients.contains(term.as_str())) {
                hits.push(self.hit(record));
            }
            ControlFlow::Continue(())
        })?;
        Ok(hits)
    }

    /// First record whose title equals `name`, ignoring case and surrounding
    /// whitespace.
    pub fn find_by_name(&self, name: &str) -> Result<Option<RecipeHit>, CorpusError> {
        let wanted = name.trim().to_lowercase();
        if wanted.is_empty() {
            return Ok(None);
        }

        let mut found = None;
        self.scan(|record| {
            if record.name.to_lowercase() == wanted {
                found = Some(record);
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })?;
        Ok(found.map(|record| self.hit(record)))
    }

    /// Ingredient tokens containing `query`, drawn from the whole corpus.
    pub fn ingredient_suggestions(&self, query: &str) -> Result<Vec<String>, CorpusError> {
        let mut ingredient_texts = Vec::new();
        self.scan(|record| {
            ingredient_texts.push(record.ingredients);
            ControlFlow::Continue(())
        })?;
        Ok(suggest_ingredients(
            ingredient_texts.iter().map(String::as_str),
            query,
        ))
    }
}
