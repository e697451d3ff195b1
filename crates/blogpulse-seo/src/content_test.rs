use blogpulse_core::SeoVocabulary;

use super::*;

fn vocab() -> SeoVocabulary {
    SeoVocabulary::default()
}

fn words(n: usize) -> String {
    vec!["word"; n].join(" ")
}

fn heading(level: u8) -> Heading {
    Heading {
        level,
        text: format!("Heading {level}"),
    }
}

// ---------------------------------------------------------------------------
// Title
// ---------------------------------------------------------------------------

#[test]
fn title_length_bands() {
    let v = vocab();
    let cases = [
        (55, 100, LengthStatus::Optimal),
        (50, 100, LengthStatus::Optimal),
        (60, 100, LengthStatus::Optimal),
        (40, 80, LengthStatus::Good),
        (69, 80, LengthStatus::Good),
        (39, 60, LengthStatus::TooShort),
        (0, 60, LengthStatus::TooShort),
        (70, 40, LengthStatus::TooLong),
    ];
    for (len, score, status) in cases {
        let title = "x".repeat(len);
        let analysis = analyze_title(&title, "", &v.power_words);
        assert_eq!(analysis.length, len);
        assert_eq!(analysis.length_score, score, "len {len}");
        assert_eq!(analysis.length_status, status, "len {len}");
    }
}

#[test]
fn title_length_counts_characters_not_bytes() {
    let analysis = analyze_title("café", "", &[]);
    assert_eq!(analysis.length, 4);
}

#[test]
fn keyword_at_start_scores_full() {
    let analysis = analyze_title("Content marketing tips", "content marketing", &[]);
    assert!(analysis.contains_primary_keyword);
    assert_eq!(analysis.keyword_position, Some(KeywordPosition::Beginning));
    assert_eq!(analysis.keyword_score, 100);
}

#[test]
fn keyword_in_first_half_is_middle() {
    let analysis = analyze_title("Ten seo tips for everyone today", "seo", &[]);
    assert_eq!(analysis.keyword_position, Some(KeywordPosition::Middle));
    assert_eq!(analysis.keyword_score, 80);
}

#[test]
fn keyword_past_half_is_end() {
    let analysis = analyze_title("Everything you wanted to know about seo", "seo", &[]);
    assert_eq!(analysis.keyword_position, Some(KeywordPosition::End));
    assert_eq!(analysis.keyword_score, 60);
}

#[test]
fn missing_keyword_scores_twenty() {
    let analysis = analyze_title("A post about cooking", "seo", &[]);
    assert!(!analysis.contains_primary_keyword);
    assert_eq!(analysis.keyword_position, None);
    assert_eq!(analysis.keyword_score, 20);
}

#[test]
fn no_configured_keyword_is_neutral() {
    let analysis = analyze_title("Anything", "  ", &[]);
    assert_eq!(analysis.keyword_score, 50);
    assert!(!analysis.contains_primary_keyword);
}

#[test]
fn power_words_are_capped_at_one_hundred() {
    let v = vocab();
    let analysis = analyze_title(
        "The ultimate complete guide: best top proven essential tips",
        "",
        &v.power_words,
    );
    assert!(analysis.power_words.len() >= 6);
    assert!((analysis.power_word_score - 100.0).abs() < f64::EPSILON);
}

// ---------------------------------------------------------------------------
// Meta
// ---------------------------------------------------------------------------

#[test]
fn meta_length_bands() {
    let cases = [
        (155, 100, LengthStatus::Optimal),
        (120, 80, LengthStatus::Good),
        (170, 80, LengthStatus::Good),
        (119, 60, LengthStatus::TooShort),
        (171, 40, LengthStatus::TooLong),
    ];
    for (len, score, status) in cases {
        let analysis = analyze_meta(&"m".repeat(len), "", &[]);
        assert_eq!(analysis.length_score, score, "len {len}");
        assert_eq!(analysis.length_status, status, "len {len}");
    }
}

#[test]
fn meta_keyword_and_cta() {
    let v = vocab();
    let analysis = analyze_meta(
        "Learn how SEO audits uncover quick wins",
        "seo",
        &v.cta_phrases,
    );
    assert!(analysis.contains_primary_keyword);
    assert_eq!(analysis.keyword_score, 100);
    assert!(analysis.call_to_action);
    assert_eq!(analysis.cta_score, 100);

    let analysis = analyze_meta("Nothing actionable here", "seo", &["learn".to_string()]);
    assert_eq!(analysis.keyword_score, 20);
    assert!(!analysis.call_to_action);
    assert_eq!(analysis.cta_score, 30);
}

// ---------------------------------------------------------------------------
// Structure
// ---------------------------------------------------------------------------

#[test]
fn word_count_bands() {
    let cases = [
        (1000, 100, WordCountStatus::Optimal),
        (3000, 100, WordCountStatus::Optimal),
        (500, 80, WordCountStatus::Good),
        (3999, 80, WordCountStatus::Good),
        (499, 50, WordCountStatus::TooShort),
        (4000, 70, WordCountStatus::VeryLong),
    ];
    for (n, score, status) in cases {
        let analysis = analyze_structure(&words(n), &[]);
        assert_eq!(analysis.word_count, n);
        assert_eq!(analysis.word_count_score, score, "words {n}");
        assert_eq!(analysis.word_count_status, status, "words {n}");
    }
}

#[test]
fn heading_bands() {
    let analysis = analyze_structure("", &[heading(1), heading(2), heading(2), heading(3)]);
    assert_eq!((analysis.h1_count, analysis.h1_score), (1, 100));
    assert_eq!(analysis.h1_status, H1Status::Optimal);
    assert_eq!((analysis.h2_count, analysis.h2_score), (2, 100));
    assert_eq!(analysis.h2_status, H2Status::Good);
    assert_eq!(analysis.h3_count, 1);

    let analysis = analyze_structure("", &[]);
    assert_eq!(analysis.h1_status, H1Status::Missing);
    assert_eq!(analysis.h1_score, 20);
    assert_eq!(analysis.h2_status, H2Status::Missing);
    assert_eq!(analysis.h2_score, 40);

    let analysis = analyze_structure("", &[heading(1), heading(1), heading(2)]);
    assert_eq!(analysis.h1_status, H1Status::Multiple);
    assert_eq!(analysis.h1_score, 60);
    assert_eq!(analysis.h2_status, H2Status::Minimal);
    assert_eq!(analysis.h2_score, 70);

    let many: Vec<Heading> = (0..9).map(|_| heading(2)).collect();
    let analysis = analyze_structure("", &many);
    assert_eq!(analysis.h2_status, H2Status::Many);
    assert_eq!(analysis.h2_score, 80);
}

#[test]
fn paragraph_average_bands() {
    let two_paragraphs = format!("{}\n\n{}", words(60), words(60));
    let analysis = analyze_structure(&two_paragraphs, &[]);
    assert_eq!(analysis.paragraph_count, 2);
    assert!((analysis.avg_words_per_paragraph - 60.0).abs() < f64::EPSILON);
    assert_eq!(analysis.paragraph_score, 100);

    let analysis = analyze_structure(&words(140), &[]);
    assert_eq!(analysis.paragraph_score, 80);

    let analysis = analyze_structure(&words(10), &[]);
    assert_eq!(analysis.paragraph_score, 60);
}

#[test]
fn empty_content_structure_has_zero_average() {
    let analysis = analyze_structure("", &[]);
    assert_eq!(analysis.word_count, 0);
    assert_eq!(analysis.paragraph_count, 0);
    assert!(analysis.avg_words_per_paragraph.abs() < f64::EPSILON);
    assert_eq!(analysis.paragraph_score, 60);
}

// ---------------------------------------------------------------------------
// Keywords
// ---------------------------------------------------------------------------

#[test]
fn density_bands() {
    // 200 words with k keyword mentions.
    let cases = [
        (3, 100, DensityStatus::Optimal),
        (2, 100, DensityStatus::Optimal),
        (4, 100, DensityStatus::Optimal),
        (1, 80, DensityStatus::Good),
        (5, 80, DensityStatus::Good),
        (0, 50, DensityStatus::TooLow),
        (6, 30, DensityStatus::TooHigh),
    ];
    for (mentions, score, status) in cases {
        let mut body: Vec<&str> = vec!["filler"; 200 - mentions];
        body.extend(std::iter::repeat_n("rust", mentions));
        let analysis = analyze_keywords(&body.join(" "), "Rust", &[], &[]);
        assert_eq!(analysis.primary_keyword_count, mentions);
        assert_eq!(analysis.primary_keyword_score, score, "mentions {mentions}");
        assert_eq!(analysis.primary_keyword_status, Some(status), "mentions {mentions}");
    }
}

#[test]
fn intro_mention_is_detected() {
    let body = format!("rust {}", words(150));
    let analysis = analyze_keywords(&body, "rust", &[], &[]);
    assert!(analysis.primary_keyword_in_intro);
    assert_eq!(analysis.intro_keyword_score, 100);

    let body = format!("{} rust", words(150));
    let analysis = analyze_keywords(&body, "rust", &[], &[]);
    assert!(!analysis.primary_keyword_in_intro);
    assert_eq!(analysis.intro_keyword_score, 40);
}

#[test]
fn secondary_keywords_are_reported_not_scored() {
    let body = "cargo builds crates and cargo tests crates quickly";
    let analysis = analyze_keywords(body, "", &["Cargo".into(), String::new()], &[]);
    assert_eq!(analysis.secondary_keywords.len(), 1);
    assert_eq!(analysis.secondary_keywords[0].keyword, "Cargo");
    assert_eq!(analysis.secondary_keywords[0].count, 2);
    assert_eq!(analysis.primary_keyword_score, 0);
    assert_eq!(analysis.primary_keyword_status, None);
}

#[test]
fn lsi_terms_follow_triggered_groups() {
    let v = vocab();
    let body = "Good ranking needs backlinks and a clear search engine strategy.";
    let analysis = analyze_keywords(body, "SEO strategy", &[], &v.lsi_groups);
    assert_eq!(
        analysis.lsi_keywords,
        vec!["search engine", "ranking", "backlinks"]
    );
    assert!((analysis.lsi_score - 30.0).abs() < f64::EPSILON);

    let analysis = analyze_keywords(body, "cooking", &[], &v.lsi_groups);
    assert!(analysis.lsi_keywords.is_empty());
}

#[test]
fn no_words_gives_zeroed_keyword_analysis() {
    let analysis = analyze_keywords("   ", "seo", &["tips".into()], &vocab().lsi_groups);
    assert_eq!(analysis.primary_keyword, "seo");
    assert_eq!(analysis.primary_keyword_count, 0);
    assert_eq!(analysis.primary_keyword_score, 0);
    assert_eq!(analysis.primary_keyword_status, None);
    assert!(analysis.secondary_keywords.is_empty());
}

// ---------------------------------------------------------------------------
// Readability
// ---------------------------------------------------------------------------

#[test]
fn simple_prose_reads_very_easy() {
    let body = "The cat sat. The dog ran. We had fun.";
    let analysis = analyze_readability(body, &[]);
    assert_eq!(analysis.sentence_count, 3);
    assert_eq!(analysis.word_count, 9);
    assert_eq!(analysis.syllable_count, 9);
    assert!((analysis.flesch_score - 100.0).abs() < f64::EPSILON);
    assert_eq!(analysis.reading_level, Some(ReadingLevel::VeryEasy));
    assert_eq!(analysis.readability_score, 100);
    assert!(analysis.flesch_kincaid_grade < 0.0);
}

#[test]
fn dense_prose_reads_very_difficult() {
    let body = "Interdisciplinary organizational communication necessitates \
        comprehensive institutional understanding regarding multifaceted \
        administrative responsibilities.";
    let analysis = analyze_readability(body, &[]);
    assert!(analysis.flesch_score.abs() < f64::EPSILON);
    assert_eq!(analysis.reading_level, Some(ReadingLevel::VeryDifficult));
    assert_eq!(analysis.readability_score, 20);
}

#[test]
fn reading_level_thresholds() {
    assert_eq!(reading_level(90.0), (ReadingLevel::VeryEasy, 100));
    assert_eq!(reading_level(80.0), (ReadingLevel::Easy, 90));
    assert_eq!(reading_level(70.0), (ReadingLevel::FairlyEasy, 80));
    assert_eq!(reading_level(60.0), (ReadingLevel::Standard, 70));
    assert_eq!(reading_level(50.0), (ReadingLevel::FairlyDifficult, 60));
    assert_eq!(reading_level(30.0), (ReadingLevel::Difficult, 40));
    assert_eq!(reading_level(29.9), (ReadingLevel::VeryDifficult, 20));
}

#[test]
fn transition_words_score_fifteen_each() {
    let v = vocab();
    let body = "It works. However, it is slow. Therefore we cache. For example, here.";
    let analysis = analyze_readability(body, &v.transition_words);
    assert_eq!(
        analysis.transition_words,
        vec!["however", "therefore", "for example"]
    );
    assert!((analysis.transition_word_score - 45.0).abs() < f64::EPSILON);
}

#[test]
fn text_without_sentences_is_zeroed() {
    assert_eq!(
        analyze_readability("no terminator here", &[]),
        ReadabilityAnalysis::default()
    );
    assert_eq!(analyze_readability("", &[]), ReadabilityAnalysis::default());
}
