//! Keyword lexicons for review facet extraction.
//!
//! Phrases are lower-case and matched as substrings of lower-cased review
//! text. The order of each list is significant: extractors iterate lists in
//! the order given here, so earlier entries win ties.

use std::sync::LazyLock;

/// Phrases signalling a garment fits as expected.
///
/// Tested before the small/large lists because these multi-word phrases are
/// more specific than the generic size words.
pub const TRUE_TO_SIZE_PHRASES: &[&str] = &[
    "true to size",
    "perfect fit",
    "fits well",
    "fits perfectly",
    "accurate size",
    "as expected",
    "fits great",
];

/// Phrases signalling a garment runs small.
pub const RUNS_SMALL_PHRASES: &[&str] = &[
    "small",
    "tight",
    "snug",
    "narrow",
    "petite",
    "runs small",
    "too small",
    "size up",
];

/// Phrases signalling a garment runs large.
pub const RUNS_LARGE_PHRASES: &[&str] = &[
    "large",
    "big",
    "loose",
    "baggy",
    "roomy",
    "runs large",
    "too large",
    "size down",
    "oversized",
];

/// Color names, including multi-word shades.
pub const COLOR_NAMES: &[&str] = &[
    "black",
    "white",
    "red",
    "blue",
    "green",
    "yellow",
    "orange",
    "purple",
    "pink",
    "navy",
    "navy blue",
    "beige",
    "cream",
    "ivory",
    "grey",
    "gray",
    "charcoal",
    "brown",
    "tan",
    "camel",
    "burgundy",
    "maroon",
    "coral",
    "olive",
    "olive green",
    "forest green",
    "teal",
    "turquoise",
    "gold",
    "silver",
    "rose",
    "lavender",
];

/// [`COLOR_NAMES`] ordered longest first.
///
/// The sort is stable, so colors of equal length keep their lexicon order.
pub static COLOR_NAMES_LONGEST_FIRST: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut sorted = COLOR_NAMES.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));
    sorted
});

/// Fabric-quality keywords with a favorable tone.
pub const FABRIC_POSITIVE: &[&str] = &[
    "exceptional",
    "luxurious",
    "premium",
    "high quality",
    "excellent",
    "soft",
    "comfortable",
    "durable",
    "breathable",
    "sustainable",
    "top-notch",
];

/// Fabric-quality keywords with a neutral tone.
pub const FABRIC_NEUTRAL: &[&str] = &["okay", "decent", "average", "fine", "acceptable", "standard"];

/// Fabric-quality keywords with an unfavorable tone.
pub const FABRIC_NEGATIVE: &[&str] = &[
    "cheap",
    "thin",
    "scratchy",
    "poor",
    "flimsy",
    "rough",
    "low quality",
];

/// Structured fabric labels that read as favorable but never appear in
/// [`FABRIC_POSITIVE`] because they are too generic to extract from text.
pub const FABRIC_POSITIVE_LABELS: &[&str] = &["high"];

/// Apparel and accessory nouns.
pub const PRODUCT_NOUNS: &[&str] = &[
    "sweater",
    "coat",
    "jacket",
    "jeans",
    "pants",
    "trousers",
    "shirt",
    "blouse",
    "dress",
    "skirt",
    "shorts",
    "top",
    "hoodie",
    "cardigan",
    "blazer",
    "suit",
    "turtleneck",
    "t-shirt",
    "polo",
    "vest",
    "scarf",
    "hat",
    "shoes",
    "boots",
    "sneakers",
    "heels",
    "sandals",
    "bag",
    "handbag",
    "purse",
    "belt",
    "watch",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicons_are_lowercase() {
        let all = TRUE_TO_SIZE_PHRASES
            .iter()
            .chain(RUNS_SMALL_PHRASES)
            .chain(RUNS_LARGE_PHRASES)
            .chain(COLOR_NAMES)
            .chain(FABRIC_POSITIVE)
            .chain(FABRIC_NEUTRAL)
            .chain(FABRIC_NEGATIVE)
            .chain(PRODUCT_NOUNS);
        for phrase in all {
            assert_eq!(*phrase, phrase.to_lowercase(), "{phrase} is not lower-case");
        }
    }

    #[test]
    fn longest_colors_come_first() {
        let sorted = &*COLOR_NAMES_LONGEST_FIRST;
        assert_eq!(sorted.len(), COLOR_NAMES.len());
        assert_eq!(sorted[0], "forest green");
        assert!(sorted.windows(2).all(|w| w[0].len() >= w[1].len()));
    }

    #[test]
    fn equal_length_colors_keep_lexicon_order() {
        let sorted = &*COLOR_NAMES_LONGEST_FIRST;
        let pos = |c: &str| sorted.iter().position(|s| *s == c).unwrap();
        // "black" and "white" are both five letters.
        assert!(pos("black") < pos("white"));
        assert!(pos("navy blue") < pos("turquoise"));
    }
}
