//! Keyword extractors that recover review facets from free text.
//!
//! Each extractor is a pure function over a single review body. Matching is
//! case-insensitive substring search against the tables in
//! [`crate::lexicons`]; there are no failure modes, only "nothing found".

pub mod colors;
pub mod fabric;
pub mod products;
pub mod size_fit;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::review::SizeFit;

pub use colors::extract_colors;
pub use fabric::extract_fabric_quality;
pub use products::extract_products;
pub use size_fit::extract_size_fit;

/// Every facet an extractor can find in one piece of text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextFacets {
    /// Size-fit category, if any phrase matched.
    pub size_fit: Option<SizeFit>,
    /// Colors in discovery order.
    pub colors: Vec<String>,
    /// First fabric-quality keyword found.
    pub fabric_quality: Option<String>,
    /// Products in lexicon order.
    pub products: Vec<String>,
}

/// Run all four extractors over `text`.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn extract_facets(text: &str) -> TextFacets {
    TextFacets {
        size_fit: extract_size_fit(text),
        colors: extract_colors(text),
        fabric_quality: extract_fabric_quality(text).map(str::to_string),
        products: extract_products(text),
    }
}

/// Upper-case the first character of `s`, leaving the rest untouched.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Capitalize each space-separated word of `s`.
pub(crate) fn title_case(s: &str) -> String {
    s.split(' ').map(capitalize_first).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capitalize_first_handles_edge_cases() {
        assert_eq!(capitalize_first(""), "");
        assert_eq!(capitalize_first("t-shirt"), "T-shirt");
        assert_eq!(capitalize_first("coat"), "Coat");
    }

    #[test]
    fn title_case_capitalizes_every_word() {
        assert_eq!(title_case("forest green"), "Forest Green");
        assert_eq!(title_case("teal"), "Teal");
    }

    #[test]
    fn extract_facets_combines_extractors() {
        let facets =
            extract_facets("This navy blue jacket fits perfectly and feels luxurious.");
        assert_eq!(facets.size_fit, Some(SizeFit::TrueToSize));
        assert_eq!(facets.colors, vec!["Navy Blue"]);
        assert_eq!(facets.fabric_quality.as_deref(), Some("luxurious"));
        assert_eq!(facets.products, vec!["Jacket"]);
    }

    #[test]
    fn extract_facets_on_empty_text_is_empty() {
        assert_eq!(extract_facets(""), TextFacets::default());
    }
}
