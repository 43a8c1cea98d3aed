use crate::domain::Product;

/// Case-insensitive substring match against name, category or description.
///
/// `folded_query` must already be lowercased.
pub fn matches(product: &Product, folded_query: &str) -> bool {
    product.name.to_lowercase().contains(folded_query)
        || product.category.name().to_lowercase().contains(folded_query)
        || product.description.to_lowercase().contains(folded_query)
}

/// Filters `corpus` down to the products matching `query`, keeping corpus
/// order. An empty query returns the whole corpus.
pub fn search(query: &str, corpus: &[Product]) -> Vec<Product> {
    let folded = query.to_lowercase();
    corpus
        .iter()
        .filter(|product| matches(product, &folded))
        .cloned()
        .collect()
}

/// Type-ahead suggestions: the first `limit` candidates containing the
/// transcript. An empty transcript suggests nothing.
pub fn suggestions(transcript: &str, candidates: &[String], limit: usize) -> Vec<String> {
    if transcript.is_empty() {
        return Vec::new();
    }
    let folded = transcript.to_lowercase();
    candidates
        .iter()
        .filter(|candidate| candidate.to_lowercase().contains(&folded))
        .take(limit)
        .cloned()
        .collect()
}
