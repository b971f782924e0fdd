use regex::Regex;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::LazyLock;

use super::{strip_bom_from_headers, CorpusError};

/// Matches "Keyword (type)" item names, e.g. "Milk (2%)".
static KEYWORD_WITH_TYPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*?)\s*\((.*?)\)").expect("item name regex"));

#[derive(Debug, Deserialize)]
struct ItemRow {
    #[serde(rename = "ItemName", default)]
    item_name: String,
}

/// Catalog of grocery item names (`Item.csv`) used to autocomplete fridge
/// entries.
#[derive(Debug, Clone)]
pub struct ItemCatalog {
    path: PathBuf,
}

impl ItemCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Vec<String>, CorpusError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::error!(path = %self.path.display(), "item catalog does not exist");
                return Ok(Vec::new());
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

        let mut items = Vec::new();
        for row in reader.deserialize::<ItemRow>() {
            match row {
                Ok(row) => items.push(row.item_name),
                Err(e) => tracing::warn!(error = %e, "skipping unreadable item row"),
            }
        }
        Ok(items)
    }

    /// Items containing `query`, grouped by keyword.
    ///
    /// "Milk (2%)" and "Milk (whole)" both land under "Milk" with types
    /// `["2%", "whole"]`; an item without a parenthesised type maps to `[""]`.
    pub fn search(&self, query: &str) -> Result<BTreeMap<String, Vec<String>>, CorpusError> {
        let query = query.trim().to_lowercase();
        let mut results: BTreeMap<String, Vec<String>> = BTreeMap::new();
        if query.is_empty() {
            return Ok(results);
        }

        for item in self.load()? {
            if !item.to_lowercase().contains(&query) {
                continue;
            }
            match KEYWORD_WITH_TYPE.captures(&item) {
                Some(caps) => {
                    let keyword = caps.get(1).map_or("", |m| m.as_str()).trim();
                    let item_type = caps.get(2).map_or("", |m| m.as_str()).trim();
                    results
                        .entry(keyword.to_string())
                        .or_default()
                        .push(item_type.to_string());
                }
                None => results
                    .entry(item.trim().to_string())
                    .or_default()
                    .push(String::new()),
            }
        }

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn catalog() -> (NamedTempFile, ItemCatalog) {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(
            b"ItemName\n\
              Milk (2%)\n\
              Milk (Whole)\n\
              Almond Milk\n\
              Eggs (Large)\n\
              Bread\n",
        )
        .unwrap();
        file.flush().unwrap();
        let catalog = ItemCatalog::new(file.path());
        (file, catalog)
    }

    #[test]
    fn test_groups_by_keyword() {
        let (_file, catalog) = catalog();
        let results = catalog.search("MILK").unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results["Milk"], vec!["2%", "Whole"]);
        assert_eq!(results["Almond Milk"], vec![""]);
    }

    #[test]
    fn test_matches_inside_type() {
        let (_file, catalog) = catalog();
        let results = catalog.search("large").unwrap();
        assert_eq!(results["Eggs"], vec!["Large"]);
    }

    #[test]
    fn test_empty_query_and_missing_file() {
        let (_file, catalog) = catalog();
        assert!(catalog.search("  ").unwrap().is_empty());

        let missing = ItemCatalog::new("/nonexistent/Item.csv");
        assert!(missing.search("milk").unwrap().is_empty());
    }
}
