use anyhow::{Context, Result};
use recipebox_server::corpus::{parse_ingredient_terms, RecipeCorpus};
use std::path::Path;

pub enum Query {
    Name(String),
    Ingredients(String),
}

pub fn search(csv: &Path, image_base_url: &str, query: &Query) -> Result<()> {
    let corpus = RecipeCorpus::new(csv, image_base_url.trim_end_matches('/'));

    if let Query::Ingredients(ingredients) = query {
        if parse_ingredient_terms(ingredients).is_empty() {
            anyhow::bail!("--ingredients must name at least one ingredient");
        }
    }

    let hits = match query {
        Query::Name(name) => corpus.search_by_name(name),
        Query::Ingredients(ingredients) => corpus.search_by_ingredients(ingredients),
    }
    .with_context(|| format!("Failed to search corpus: {}", csv.display()))?;

    println!("{}", serde_json::to_string_pretty(&hits)?);
    eprintln!("{} matching recipes", hits.len());

    Ok(())
}
