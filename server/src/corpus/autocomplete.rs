use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

/// Upper bound on suggestions returned for a single query.
pub const MAX_SUGGESTIONS: usize = 10;

static INGREDIENT_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9\-]+").expect("ingredient token regex"));

/// Distinct ingredient words containing `query`, in first-seen order.
///
/// Each ingredient text is lowercased and split into runs of letters, digits
/// and hyphens, so `"['whole milk', 'eggs']"` yields `whole`, `milk`, `eggs`.
pub fn suggest_ingredients<'a, I>(ingredient_texts: I, query: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    let mut suggestions = Vec::new();

    for text in ingredient_texts {
        let text = text.to_lowercase();
        if !text.contains(&query) {
            continue;
        }
        for token in INGREDIENT_TOKEN.find_iter(&text) {
            let token = token.as_str();
            if token.contains(&query) && seen.insert(token.to_string()) {
                suggestions.push(token.to_string());
                if suggestions.len() == MAX_SUGGESTIONS {
                    return suggestions;
                }
            }
        }
    }

    suggestions
}

/// Distinct recipe names containing `query` (case-insensitive), in
/// first-seen order.
pub fn suggest_names<'a, I>(names: I, query: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }

    let mut seen = HashSet::new();
    names
        .into_iter()
        .filter(|name| name.to_lowercase().contains(&query))
        .filter(|name| seen.insert(*name))
        .take(MAX_SUGGESTIONS)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_tokens() {
        let texts = [
            "['2 cups whole milk', '3 eggs']",
            "['1/2 cup buttermilk', 'almond-milk']",
        ];
        assert_eq!(
            suggest_ingredients(texts, "milk"),
            vec!["milk", "buttermilk", "almond-milk"]
        );
    }

    #[test]
    fn test_ingredient_query_is_case_insensitive() {
        assert_eq!(suggest_ingredients(["Fresh BASIL leaves"], " Bas "), vec!["basil"]);
    }

    #[test]
    fn test_ingredient_suggestions_are_capped_and_unique() {
        let text = (0..30)
            .map(|i| format!("salt{} salt{}", i % 15, i % 15))
            .collect::<Vec<_>>()
            .join(", ");
        let suggestions = suggest_ingredients([text.as_str(), text.as_str()], "salt");
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        let unique: HashSet<&String> = suggestions.iter().collect();
        assert_eq!(unique.len(), suggestions.len());
    }

    #[test]
    fn test_empty_query_has_no_suggestions() {
        assert!(suggest_ingredients(["milk"], "  ").is_empty());
        assert!(suggest_names(["Milkshake"], "").is_empty());
    }

    #[test]
    fn test_name_suggestions() {
        let names = ["Pasta", "Creamy Pasta Bake", "Pasta", "Soup", "pasta salad"];
        assert_eq!(
            suggest_names(names, "PASTA"),
            vec!["Pasta", "Creamy Pasta Bake", "pasta salad"]
        );
    }

    #[test]
    fn test_name_suggestions_are_capped() {
        let names: Vec<String> = (0..25).map(|i| format!("Stew {i}")).collect();
        let suggestions = suggest_names(names.iter().map(String::as_str), "stew");
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(suggestions[0], "Stew 0");
    }
}
