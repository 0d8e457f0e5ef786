//! Size-fit detection.

use crate::lexicons::{RUNS_LARGE_PHRASES, RUNS_SMALL_PHRASES, TRUE_TO_SIZE_PHRASES};
use crate::review::SizeFit;

/// Categorize how a garment fits from the review text.
///
/// The true-to-size phrases are tested first, then runs-small, then
/// runs-large. The first list with any substring match decides, so
/// "fits perfectly but a little big" reads as true to size.
pub fn extract_size_fit(text: &str) -> Option<SizeFit> {
    if text.is_empty() {
        return None;
    }
    let lower = text.to_lowercase();

    [
        (SizeFit::TrueToSize, TRUE_TO_SIZE_PHRASES),
        (SizeFit::RunsSmall, RUNS_SMALL_PHRASES),
        (SizeFit::RunsLarge, RUNS_LARGE_PHRASES),
    ]
    .into_iter()
    .find(|(_, phrases)| phrases.iter().any(|p| lower.contains(p)))
    .map(|(fit, _)| fit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn true_to_size_wins_over_later_cues() {
        assert_eq!(
            extract_size_fit("fits perfectly but runs a little big"),
            Some(SizeFit::TrueToSize)
        );
    }

    #[test]
    fn small_beats_large() {
        assert_eq!(
            extract_size_fit("Too tight in the shoulders, large in the waist"),
            Some(SizeFit::RunsSmall)
        );
    }

    #[test]
    fn detects_runs_large() {
        assert_eq!(
            extract_size_fit("Very BAGGY, I should have sized down"),
            Some(SizeFit::RunsLarge)
        );
    }

    #[test]
    fn no_cue_is_unresolved() {
        assert_eq!(extract_size_fit("Lovely color and fast shipping."), None);
        assert_eq!(extract_size_fit(""), None);
    }
}
