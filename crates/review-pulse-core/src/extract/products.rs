//! Product mention extraction.

use crate::lexicons::PRODUCT_NOUNS;

use super::capitalize_first;

/// Find the products mentioned in `text`, in lexicon order.
///
/// Each hit has its first letter upper-cased ("t-shirt" becomes "T-shirt").
pub fn extract_products(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let lower = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for noun in PRODUCT_NOUNS.iter().filter(|noun| lower.contains(*noun)) {
        let formatted = capitalize_first(noun);
        if !found.contains(&formatted) {
            found.push(formatted);
        }
    }

    found
}
