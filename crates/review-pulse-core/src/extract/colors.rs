//! Color mention extraction.

use crate::lexicons::COLOR_NAMES_LONGEST_FIRST;

use super::title_case;

/// Find the colors mentioned in `text`.
///
/// Longer color names are tried first. A name that contains, or is contained
/// in, a color already found is skipped, so "navy blue" is reported once and
/// not again as "navy" or "blue". Names come back Title Cased in discovery
/// order.
pub fn extract_colors(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    let lower = text.to_lowercase();
    let mut accepted: Vec<&str> = Vec::new();

    for &color in COLOR_NAMES_LONGEST_FIRST.iter() {
        if !lower.contains(color) {
            continue;
        }
        let overlaps = accepted
            .iter()
            .any(|found| found.contains(color) || color.contains(found));
        if !overlaps {
            accepted.push(color);
        }
    }

    accepted.into_iter().map(title_case).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multi_word_color_reported_once() {
        assert_eq!(extract_colors("My navy blue jacket"), vec!["Navy Blue"]);
    }

    #[test]
    fn several_colors_in_length_order() {
        assert_eq!(
            extract_colors("A black belt with a forest green scarf"),
            vec!["Forest Green", "Black"]
        );
    }

    #[test]
    fn overlapping_single_words_suppressed() {
        // "olive green" claims both "olive" and "green".
        assert_eq!(
            extract_colors("olive green pants, and the green one too"),
            vec!["Olive Green"]
        );
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(extract_colors("BURGUNDY and Teal"), vec!["Burgundy", "Teal"]);
    }

    #[test]
    fn no_colors_found() {
        assert!(extract_colors("Fast delivery, friendly staff.").is_empty());
        assert!(extract_colors("").is_empty());
    }
}
