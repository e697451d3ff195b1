//! Technical, link and image analyses.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::percentage;
use crate::types::{
    AnchorTextAnalysis, ContentInput, ExternalLinkStatus, Image, ImageAnalysis,
    InternalLinkStatus, LengthStatus, Link, LinkAnalysis, LoadTimeStatus, TechnicalAnalysis,
    UrlAnalysis, UrlStructure,
};

static CLEAN_URL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://[^/]+/[a-z0-9-]+/?$").expect("valid url regex"));

static GENERIC_FILE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(img|image|picture|photo)\d*$").expect("valid file name regex")
});

/// Anchors used on more than this share of links, in whole percent, are
/// flagged as over-optimized.
const OVER_OPTIMIZED_ANCHOR_PERCENT: usize = 30;

#[must_use]
pub fn analyze_url(url: &str, primary_keyword: &str) -> UrlAnalysis {
    let length = url.chars().count();
    let (length_score, length_status) = match length {
        0..=75 => (100, LengthStatus::Optimal),
        76..=100 => (80, LengthStatus::Good),
        _ => (60, LengthStatus::TooLong),
    };

    let url_lower = url.to_lowercase();
    let keyword_lower = primary_keyword.trim().to_lowercase();
    let (contains_keyword, keyword_score) = if keyword_lower.is_empty() {
        (false, 0)
    } else {
        let slug = keyword_lower.replace(' ', "-");
        if url_lower.contains(&slug) || url_lower.contains(&keyword_lower) {
            (true, 100)
        } else {
            (false, 30)
        }
    };

    let (structure, structure_score) = if CLEAN_URL.is_match(&url_lower) {
        (UrlStructure::Clean, 100)
    } else {
        (UrlStructure::Complex, 70)
    };

    UrlAnalysis {
        url: url.to_string(),
        length,
        length_score,
        length_status,
        contains_keyword,
        keyword_score,
        structure,
        structure_score,
    }
}

#[must_use]
pub fn analyze_technical(input: &ContentInput) -> TechnicalAnalysis {
    let has_schema_markup = !input.schema_markup.trim().is_empty();
    let has_canonical_url = !input.canonical_url.trim().is_empty();

    let (load_time_score, load_time_status) = if input.load_time > 0.0 {
        let (score, status) = if input.load_time <= 2.0 {
            (100, LoadTimeStatus::Excellent)
        } else if input.load_time <= 3.0 {
            (80, LoadTimeStatus::Good)
        } else if input.load_time <= 5.0 {
            (60, LoadTimeStatus::Fair)
        } else {
            (30, LoadTimeStatus::Poor)
        };
        (score, Some(status))
    } else {
        (50, None)
    };

    TechnicalAnalysis {
        url: analyze_url(&input.url, &input.primary_keyword),
        has_schema_markup,
        schema_score: if has_schema_markup { 100 } else { 0 },
        has_canonical_url,
        canonical_score: if has_canonical_url { 100 } else { 50 },
        load_time_score,
        load_time_status,
        is_mobile_responsive: input.mobile_responsive,
        mobile_score: if input.mobile_responsive { 100 } else { 0 },
    }
}

#[must_use]
pub fn analyze_links(internal: &[Link], external: &[Link]) -> LinkAnalysis {
    let internal_link_count = internal.len();
    let external_link_count = external.len();

    let (internal_link_score, internal_link_status) = match internal_link_count {
        3..=10 => (100, InternalLinkStatus::Optimal),
        1..=15 => (80, InternalLinkStatus::Good),
        0 => (20, InternalLinkStatus::Missing),
        _ => (60, InternalLinkStatus::TooMany),
    };

    let (external_link_score, external_link_status) = match external_link_count {
        2..=5 => (100, ExternalLinkStatus::Optimal),
        1..=8 => (80, ExternalLinkStatus::Good),
        0 => (40, ExternalLinkStatus::NoLinks),
        _ => (60, ExternalLinkStatus::TooMany),
    };

    LinkAnalysis {
        internal_link_count,
        external_link_count,
        internal_link_score,
        internal_link_status,
        external_link_score,
        external_link_status,
        anchor_text: analyze_anchor_texts(internal.iter().chain(external)),
    }
}

/// Anchor-text variety and over-optimization across a set of links.
///
/// Link totals include links with empty anchors; only non-empty anchors
/// are tallied.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_anchor_texts<'a>(links: impl IntoIterator<Item = &'a Link>) -> AnchorTextAnalysis {
    let mut total = 0usize;
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for link in links {
        total += 1;
        let anchor = link.anchor_text.trim().to_lowercase();
        if !anchor.is_empty() {
            *counts.entry(anchor).or_default() += 1;
        }
    }

    if total == 0 {
        return AnchorTextAnalysis::default();
    }

    let mut analysis = AnchorTextAnalysis {
        anchor_text_variety: counts.len(),
        ..AnchorTextAnalysis::default()
    };

    for (anchor, count) in &counts {
        let frequency = count * 100 / total;
        if frequency > analysis.max_anchor_frequency {
            analysis.max_anchor_frequency = frequency;
            analysis.most_used_anchor_text = Some(anchor.clone());
        }
        if frequency > OVER_OPTIMIZED_ANCHOR_PERCENT {
            analysis.over_optimized_anchors.push(anchor.clone());
        }
    }

    analysis.diversity_score = (counts.len() as f64 / total as f64 * 100.0).min(100.0);
    analysis
}

#[must_use]
pub fn analyze_images(images: &[Image]) -> ImageAnalysis {
    if images.is_empty() {
        return ImageAnalysis {
            image_score: 50.0,
            ..ImageAnalysis::default()
        };
    }

    let total = images.len();
    let images_with_alt_text = images
        .iter()
        .filter(|i| !i.alt_text.trim().is_empty())
        .count();
    let images_with_title = images.iter().filter(|i| !i.title.trim().is_empty()).count();
    let optimized_file_names = images
        .iter()
        .filter(|i| is_optimized_file_name(&i.file_name))
        .count();

    let alt_text_score = percentage(images_with_alt_text, total);
    let title_score = percentage(images_with_title, total);
    let file_name_score = percentage(optimized_file_names, total);

    ImageAnalysis {
        image_count: total,
        images_with_alt_text,
        images_with_title,
        optimized_file_names,
        alt_text_score,
        title_score,
        file_name_score,
        image_score: alt_text_score * 0.5 + title_score * 0.2 + file_name_score * 0.3,
    }
}

/// A descriptive, hyphenated file name such as `rust-error-handling.png`.
#[must_use]
pub fn is_optimized_file_name(file_name: &str) -> bool {
    let lower = file_name.to_lowercase();
    let stem = match lower.rfind('.') {
        Some(idx) if idx > 0 => &lower[..idx],
        _ => lower.as_str(),
    };

    if GENERIC_FILE_NAME.is_match(stem) {
        return false;
    }
    if stem.contains('_') || stem.contains(' ') {
        return false;
    }
    stem.chars().count() >= 3 && stem.chars().any(|c| c.is_ascii_lowercase())
}

#[cfg(test)]
#[path = "technical_test.rs"]
mod tests;
