//! SEO content analysis for blog posts.
//!
//! [`ContentAnalyzer`] scores a post's title, meta description, structure,
//! keyword usage, readability, technical factors, links and images against
//! fixed editorial bands, then blends them into an overall 0–100 score and
//! emits recommendations and prioritized opportunities. Analysis is a pure
//! function of the input and the injected [`SeoVocabulary`].

pub mod advice;
pub mod analyzer;
pub mod content;
pub mod technical;
pub mod text;
pub mod types;

pub use analyzer::ContentAnalyzer;
pub use blogpulse_core::SeoVocabulary;
pub use types::*;

/// Truncate a blended score into `[0, 100]`.
///
/// Weighted sums of whole-number bands can land a hair under the integer
/// they represent (e.g. `99.99999999999999`), so a tiny epsilon is added
/// before truncating.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_score(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    (value + 1e-9).floor().clamp(0.0, 100.0) as u8
}

/// `part / whole * 100`, or `0.0` when `whole` is zero.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_score_absorbs_rounding_drift() {
        assert_eq!(to_score(99.999_999_999_999_99), 100);
        assert_eq!(to_score(79.6), 79);
    }

    #[test]
    fn to_score_clamps() {
        assert_eq!(to_score(-3.0), 0);
        assert_eq!(to_score(250.0), 100);
        assert_eq!(to_score(f64::NAN), 0);
    }

    #[test]
    fn percentage_guards_zero_whole() {
        assert!((percentage(3, 0) - 0.0).abs() < f64::EPSILON);
        assert!((percentage(1, 4) - 25.0).abs() < f64::EPSILON);
    }
}
