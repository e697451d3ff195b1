//! Plain-text statistics shared by the structure, keyword and readability
//! analyses.

use std::sync::LazyLock;

use regex::Regex;

use crate::types::SentenceLengthAnalysis;

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid sentence regex"));

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").expect("valid paragraph regex"));

const VOWELS: &[char] = &['a', 'e', 'i', 'o', 'u', 'y'];

/// Whitespace-delimited token count.
#[must_use]
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Number of sentence terminators (runs of `.`, `!` or `?`).
///
/// Trailing text without a terminator is not a sentence.
#[must_use]
pub fn count_sentences(text: &str) -> usize {
    SENTENCE_END.find_iter(text).count()
}

/// Vowel-group syllable estimate summed over every word.
#[must_use]
pub fn count_syllables(text: &str) -> usize {
    text.split_whitespace().map(word_syllables).sum()
}

/// Syllables in a single token. Tokens with no ASCII letters count zero.
#[must_use]
pub fn word_syllables(token: &str) -> usize {
    let word: String = token
        .to_lowercase()
        .chars()
        .filter(char::is_ascii_lowercase)
        .collect();
    if word.is_empty() {
        return 0;
    }

    let mut syllables = 0;
    let mut prev_vowel = false;
    for ch in word.chars() {
        let vowel = VOWELS.contains(&ch);
        if vowel && !prev_vowel {
            syllables += 1;
        }
        prev_vowel = vowel;
    }

    // Silent trailing e.
    if word.ends_with('e') && syllables > 1 {
        syllables -= 1;
    }

    syllables.max(1)
}

/// The first `n` words joined by single spaces, or the whole text when it
/// has `n` words or fewer.
#[must_use]
pub fn first_n_words(text: &str, n: usize) -> String {
    if count_words(text) <= n {
        return text.to_string();
    }
    text.split_whitespace().take(n).collect::<Vec<_>>().join(" ")
}

/// Non-blank blocks separated by one or more blank lines.
#[must_use]
pub fn count_paragraphs(text: &str) -> usize {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|block| !block.trim().is_empty())
        .count()
}

/// Non-overlapping, case-insensitive occurrences of `needle` in `haystack`.
///
/// Both sides are expected to be lowercased already.
#[must_use]
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Word-count distribution over the sentences of `text`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sentence_lengths(text: &str) -> SentenceLengthAnalysis {
    let lengths: Vec<usize> = SENTENCE_END
        .split(text)
        .map(count_words)
        .filter(|&words| words > 0)
        .collect();

    let mut analysis = SentenceLengthAnalysis::default();
    if lengths.is_empty() {
        return analysis;
    }

    analysis.shortest_sentence = lengths.iter().copied().min().unwrap_or(0);
    analysis.longest_sentence = lengths.iter().copied().max().unwrap_or(0);
    analysis.average_length = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;

    for &len in &lengths {
        match len {
            0..=10 => analysis.short_sentences += 1,
            11..=20 => analysis.medium_sentences += 1,
            _ => analysis.long_sentences += 1,
        }
    }

    analysis
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_split_on_any_whitespace() {
        assert_eq!(count_words("  one\ttwo\nthree  "), 3);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   \n\t"), 0);
    }

    #[test]
    fn sentences_count_terminator_runs() {
        assert_eq!(count_sentences("Hello. World!"), 2);
        assert_eq!(count_sentences("Wait... what?!"), 2);
        assert_eq!(count_sentences("no terminator"), 0);
        assert_eq!(count_sentences(""), 0);
    }

    #[test]
    fn syllables_follow_vowel_groups() {
        assert_eq!(word_syllables("cat"), 1);
        assert_eq!(word_syllables("banana"), 3);
        assert_eq!(word_syllables("make"), 1);
        assert_eq!(word_syllables("the"), 1);
        assert_eq!(word_syllables("rhythm"), 1);
        assert_eq!(word_syllables("Beautiful,"), 3);
        assert_eq!(word_syllables("2024"), 0);
    }

    #[test]
    fn uppercase_letters_are_not_dropped() {
        assert_eq!(word_syllables("SEO"), word_syllables("seo"));
    }

    #[test]
    fn first_words_truncates_long_text() {
        assert_eq!(first_n_words("a b c d", 2), "a b");
        assert_eq!(first_n_words("a  b", 5), "a  b");
    }

    #[test]
    fn paragraphs_ignore_surplus_blank_lines() {
        assert_eq!(count_paragraphs("one\n\ntwo\n \n\nthree"), 3);
        assert_eq!(count_paragraphs("single block\nwrapped"), 1);
        assert_eq!(count_paragraphs(""), 0);
    }

    #[test]
    fn occurrences_ignore_empty_needle() {
        assert_eq!(count_occurrences("seo tips for seo", "seo"), 2);
        assert_eq!(count_occurrences("anything", ""), 0);
    }

    #[test]
    fn sentence_length_buckets() {
        let text = "Short one. \
            This sentence has exactly twelve words in it for the medium bucket. \
            This sentence is deliberately long so that it lands in the long bucket \
            because it has more than twenty words in total.";
        let analysis = sentence_lengths(text);
        assert_eq!(analysis.short_sentences, 1);
        assert_eq!(analysis.medium_sentences, 1);
        assert_eq!(analysis.long_sentences, 1);
        assert_eq!(analysis.shortest_sentence, 2);
        assert!(analysis.longest_sentence > 20);
    }

    #[test]
    fn sentence_lengths_of_empty_text_are_zero() {
        assert_eq!(sentence_lengths(""), SentenceLengthAnalysis::default());
    }
}
