//! On-page text analyses: title, meta description, structure, keyword usage
//! and readability.
//!
//! Vocabulary slices passed in here are expected to be lowercased already.

use blogpulse_core::LsiGroup;

use crate::text;
use crate::types::{
    DensityStatus, H1Status, H2Status, Heading, KeywordAnalysis, KeywordPosition, LengthStatus,
    MetaAnalysis, ReadabilityAnalysis, ReadingLevel, SecondaryKeyword, StructureAnalysis,
    TitleAnalysis, WordCountStatus,
};

/// Words of body text checked for an early primary keyword mention.
const INTRO_WORDS: usize = 100;

/// Substring matches of each vocabulary entry inside `haystack`, in
/// vocabulary order.
pub(crate) fn matched_terms(haystack: &str, vocabulary: &[String]) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|term| haystack.contains(term.as_str()))
        .cloned()
        .collect()
}

#[allow(clippy::cast_precision_loss)]
fn capped_points(matches: usize, per_match: f64) -> f64 {
    (matches as f64 * per_match).min(100.0)
}

#[must_use]
pub fn analyze_title(title: &str, primary_keyword: &str, power_words: &[String]) -> TitleAnalysis {
    let length = title.chars().count();
    let (length_score, length_status) = match length {
        50..=60 => (100, LengthStatus::Optimal),
        40..=69 => (80, LengthStatus::Good),
        0..=39 => (60, LengthStatus::TooShort),
        _ => (40, LengthStatus::TooLong),
    };

    let title_lower = title.to_lowercase();
    let keyword_lower = primary_keyword.trim().to_lowercase();

    let (contains, keyword_position, keyword_score) = if keyword_lower.is_empty() {
        (false, None, 50)
    } else if let Some(byte_idx) = title_lower.find(&keyword_lower) {
        let char_idx = title_lower[..byte_idx].chars().count();
        let half = title_lower.chars().count() / 2;
        let (position, score) = if char_idx == 0 {
            (KeywordPosition::Beginning, 100)
        } else if char_idx <= half {
            (KeywordPosition::Middle, 80)
        } else {
            (KeywordPosition::End, 60)
        };
        (true, Some(position), score)
    } else {
        (false, None, 20)
    };

    let power_words = matched_terms(&title_lower, power_words);
    let power_word_score = capped_points(power_words.len(), 20.0);

    TitleAnalysis {
        title: title.to_string(),
        length,
        length_score,
        length_status,
        contains_primary_keyword: contains,
        keyword_position,
        keyword_score,
        power_words,
        power_word_score,
    }
}

#[must_use]
pub fn analyze_meta(
    meta_description: &str,
    primary_keyword: &str,
    cta_phrases: &[String],
) -> MetaAnalysis {
    let length = meta_description.chars().count();
    let (length_score, length_status) = match length {
        150..=160 => (100, LengthStatus::Optimal),
        120..=170 => (80, LengthStatus::Good),
        0..=119 => (60, LengthStatus::TooShort),
        _ => (40, LengthStatus::TooLong),
    };

    let meta_lower = meta_description.to_lowercase();
    let keyword_lower = primary_keyword.trim().to_lowercase();
    let (contains, keyword_score) = if keyword_lower.is_empty() {
        (false, 50)
    } else if meta_lower.contains(&keyword_lower) {
        (true, 100)
    } else {
        (false, 20)
    };

    let call_to_action = cta_phrases
        .iter()
        .any(|phrase| meta_lower.contains(phrase.as_str()));

    MetaAnalysis {
        meta_description: meta_description.to_string(),
        length,
        length_score,
        length_status,
        contains_primary_keyword: contains,
        keyword_score,
        call_to_action,
        cta_score: if call_to_action { 100 } else { 30 },
    }
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_structure(content: &str, headings: &[Heading]) -> StructureAnalysis {
    let word_count = text::count_words(content);
    let (word_count_score, word_count_status) = match word_count {
        1000..=3000 => (100, WordCountStatus::Optimal),
        500..=3999 => (80, WordCountStatus::Good),
        0..=499 => (50, WordCountStatus::TooShort),
        _ => (70, WordCountStatus::VeryLong),
    };

    let count_level = |level: u8| headings.iter().filter(|h| h.level == level).count();
    let h1_count = count_level(1);
    let h2_count = count_level(2);
    let h3_count = count_level(3);

    let (h1_score, h1_status) = match h1_count {
        1 => (100, H1Status::Optimal),
        0 => (20, H1Status::Missing),
        _ => (60, H1Status::Multiple),
    };

    let (h2_score, h2_status) = match h2_count {
        2..=8 => (100, H2Status::Good),
        1 => (70, H2Status::Minimal),
        0 => (40, H2Status::Missing),
        _ => (80, H2Status::Many),
    };

    let paragraph_count = text::count_paragraphs(content);
    let avg_words_per_paragraph = if word_count == 0 || paragraph_count == 0 {
        0.0
    } else {
        word_count as f64 / paragraph_count as f64
    };
    let paragraph_score = if (50.0..=100.0).contains(&avg_words_per_paragraph) {
        100
    } else if (30.0..=150.0).contains(&avg_words_per_paragraph) {
        80
    } else {
        60
    };

    StructureAnalysis {
        word_count,
        word_count_score,
        word_count_status,
        h1_count,
        h1_score,
        h1_status,
        h2_count,
        h2_score,
        h2_status,
        h3_count,
        paragraph_count,
        avg_words_per_paragraph,
        paragraph_score,
    }
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_keywords(
    content: &str,
    primary_keyword: &str,
    secondary_keywords: &[String],
    lsi_groups: &[LsiGroup],
) -> KeywordAnalysis {
    let mut analysis = KeywordAnalysis {
        primary_keyword: primary_keyword.to_string(),
        ..KeywordAnalysis::default()
    };

    let word_count = text::count_words(content);
    if word_count == 0 {
        return analysis;
    }

    let content_lower = content.to_lowercase();
    let density_of = |count: usize| count as f64 / word_count as f64 * 100.0;

    let keyword_lower = primary_keyword.trim().to_lowercase();
    if !keyword_lower.is_empty() {
        let count = text::count_occurrences(&content_lower, &keyword_lower);
        let density = density_of(count);
        let (score, status) = if (1.0..=2.0).contains(&density) {
            (100, DensityStatus::Optimal)
        } else if (0.5..3.0).contains(&density) {
            (80, DensityStatus::Good)
        } else if density < 0.5 {
            (50, DensityStatus::TooLow)
        } else {
            (30, DensityStatus::TooHigh)
        };

        analysis.primary_keyword_count = count;
        analysis.primary_keyword_density = density;
        analysis.primary_keyword_score = score;
        analysis.primary_keyword_status = Some(status);

        let intro = text::first_n_words(content, INTRO_WORDS).to_lowercase();
        analysis.primary_keyword_in_intro = intro.contains(&keyword_lower);
        analysis.intro_keyword_score = if analysis.primary_keyword_in_intro {
            100
        } else {
            40
        };
    }

    analysis.secondary_keywords = secondary_keywords
        .iter()
        .filter(|kw| !kw.trim().is_empty())
        .map(|kw| {
            let count = text::count_occurrences(&content_lower, &kw.trim().to_lowercase());
            SecondaryKeyword {
                keyword: kw.clone(),
                count,
                density: density_of(count),
            }
        })
        .collect();

    analysis.lsi_keywords = lsi_terms(&content_lower, &keyword_lower, lsi_groups);
    analysis.lsi_score = capped_points(analysis.lsi_keywords.len(), 10.0);

    analysis
}

/// Related terms present in the content, drawn from every group whose
/// trigger appears in the primary keyword. Duplicates across groups are
/// reported once.
fn lsi_terms(content_lower: &str, keyword_lower: &str, groups: &[LsiGroup]) -> Vec<String> {
    if keyword_lower.is_empty() {
        return Vec::new();
    }

    let mut found: Vec<String> = Vec::new();
    for group in groups
        .iter()
        .filter(|g| keyword_lower.contains(g.trigger.as_str()))
    {
        for term in matched_terms(content_lower, &group.terms) {
            if !found.contains(&term) {
                found.push(term);
            }
        }
    }
    found
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn analyze_readability(content: &str, transition_words: &[String]) -> ReadabilityAnalysis {
    let sentence_count = text::count_sentences(content);
    let word_count = text::count_words(content);
    if sentence_count == 0 || word_count == 0 {
        return ReadabilityAnalysis::default();
    }

    let syllable_count = text::count_syllables(content);
    let avg_words_per_sentence = word_count as f64 / sentence_count as f64;
    let avg_syllables_per_word = syllable_count as f64 / word_count as f64;

    let flesch_raw = 206.835 - 1.015 * avg_words_per_sentence - 84.6 * avg_syllables_per_word;
    let flesch_score = flesch_raw.clamp(0.0, 100.0);
    let flesch_kincaid_grade = 0.39 * avg_words_per_sentence + 11.8 * avg_syllables_per_word - 15.59;

    let (reading_level, readability_score) = reading_level(flesch_score);

    let transitions = matched_terms(&content.to_lowercase(), transition_words);
    let transition_word_score = capped_points(transitions.len(), 15.0);

    ReadabilityAnalysis {
        sentence_count,
        word_count,
        syllable_count,
        avg_words_per_sentence,
        avg_syllables_per_word,
        flesch_score,
        flesch_kincaid_grade,
        reading_level: Some(reading_level),
        readability_score,
        sentence_lengths: text::sentence_lengths(content),
        transition_words: transitions,
        transition_word_score,
    }
}

fn reading_level(flesch: f64) -> (ReadingLevel, u8) {
    if flesch >= 90.0 {
        (ReadingLevel::VeryEasy, 100)
    } else if flesch >= 80.0 {
        (ReadingLevel::Easy, 90)
    } else if flesch >= 70.0 {
        (ReadingLevel::FairlyEasy, 80)
    } else if flesch >= 60.0 {
        (ReadingLevel::Standard, 70)
    } else if flesch >= 50.0 {
        (ReadingLevel::FairlyDifficult, 60)
    } else if flesch >= 30.0 {
        (ReadingLevel::Difficult, 40)
    } else {
        (ReadingLevel::VeryDifficult, 20)
    }
}

#[cfg(test)]
#[path = "content_test.rs"]
mod tests;
