use blogpulse_core::{LsiGroup, SeoVocabulary};

use crate::types::{ContentAnalysis, ContentInput};
use crate::{advice, content, technical, to_score};

// ---------------------------------------------------------------------------
// Section weights (percent, must sum to exactly 100)
// ---------------------------------------------------------------------------

const TITLE_WEIGHT: u32 = 15;
const META_WEIGHT: u32 = 10;
const STRUCTURE_WEIGHT: u32 = 20;
const KEYWORD_WEIGHT: u32 = 20;
const READABILITY_WEIGHT: u32 = 15;
const TECHNICAL_WEIGHT: u32 = 10;
const LINK_WEIGHT: u32 = 5;
const IMAGE_WEIGHT: u32 = 5;

const _: () = assert!(
    TITLE_WEIGHT
        + META_WEIGHT
        + STRUCTURE_WEIGHT
        + KEYWORD_WEIGHT
        + READABILITY_WEIGHT
        + TECHNICAL_WEIGHT
        + LINK_WEIGHT
        + IMAGE_WEIGHT
        == 100,
    "SEO section weights must sum to exactly 100"
);

fn share(weight: u32) -> f64 {
    f64::from(weight) / 100.0
}

/// Scores blog content for on-page SEO.
///
/// Holds only its vocabulary, so one analyzer can be shared across threads
/// and reused for any number of posts.
#[derive(Debug, Clone)]
pub struct ContentAnalyzer {
    vocabulary: SeoVocabulary,
}

impl Default for ContentAnalyzer {
    fn default() -> Self {
        Self::new(SeoVocabulary::default())
    }
}

impl ContentAnalyzer {
    /// Build an analyzer over `vocabulary`. Entries are matched
    /// case-insensitively.
    #[must_use]
    pub fn new(vocabulary: SeoVocabulary) -> Self {
        let lower = |words: Vec<String>| -> Vec<String> {
            words.into_iter().map(|w| w.trim().to_lowercase()).collect()
        };
        let vocabulary = SeoVocabulary {
            power_words: lower(vocabulary.power_words),
            cta_phrases: lower(vocabulary.cta_phrases),
            transition_words: lower(vocabulary.transition_words),
            lsi_groups: vocabulary
                .lsi_groups
                .into_iter()
                .map(|g| LsiGroup {
                    trigger: g.trigger.trim().to_lowercase(),
                    terms: lower(g.terms),
                })
                .collect(),
        };
        Self { vocabulary }
    }

    #[must_use]
    pub fn vocabulary(&self) -> &SeoVocabulary {
        &self.vocabulary
    }

    /// Run every sub-analysis and derive the overall score, recommendations
    /// and opportunities. Never fails; empty fields degrade to fallback
    /// scores.
    #[must_use]
    pub fn analyze(&self, input: &ContentInput) -> ContentAnalysis {
        let vocab = &self.vocabulary;

        let mut analysis = ContentAnalysis {
            content_id: input.id,
            title: input.title.clone(),
            url: input.url.clone(),
            overall_score: 0,
            title_analysis: content::analyze_title(
                &input.title,
                &input.primary_keyword,
                &vocab.power_words,
            ),
            meta_analysis: content::analyze_meta(
                &input.meta_description,
                &input.primary_keyword,
                &vocab.cta_phrases,
            ),
            structure_analysis: content::analyze_structure(&input.content, &input.headings),
            keyword_analysis: content::analyze_keywords(
                &input.content,
                &input.primary_keyword,
                &input.secondary_keywords,
                &vocab.lsi_groups,
            ),
            readability_analysis: content::analyze_readability(
                &input.content,
                &vocab.transition_words,
            ),
            technical_analysis: technical::analyze_technical(input),
            link_analysis: technical::analyze_links(&input.internal_links, &input.external_links),
            image_analysis: technical::analyze_images(&input.images),
            recommendations: Vec::new(),
            opportunities: Vec::new(),
        };

        analysis.overall_score = overall_score(&analysis);
        analysis.recommendations = advice::recommendations(&analysis);
        analysis.opportunities = advice::opportunities(&analysis);

        tracing::debug!(
            content_id = input.id,
            overall_score = analysis.overall_score,
            word_count = analysis.structure_analysis.word_count,
            recommendations = analysis.recommendations.len(),
            opportunities = analysis.opportunities.len(),
            "content analyzed"
        );

        analysis
    }
}

/// Weighted blend of the section scores, truncated into `[0, 100]`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn overall_score(analysis: &ContentAnalysis) -> u8 {
    let mean = |scores: &[u8]| -> f64 {
        scores.iter().copied().map(f64::from).sum::<f64>() / scores.len() as f64
    };

    let title = &analysis.title_analysis;
    let meta = &analysis.meta_analysis;
    let structure = &analysis.structure_analysis;
    let tech = &analysis.technical_analysis;
    let links = &analysis.link_analysis;

    let blended = mean(&[title.length_score, title.keyword_score]) * share(TITLE_WEIGHT)
        + mean(&[meta.length_score, meta.keyword_score]) * share(META_WEIGHT)
        + mean(&[
            structure.word_count_score,
            structure.h1_score,
            structure.h2_score,
        ]) * share(STRUCTURE_WEIGHT)
        + f64::from(analysis.keyword_analysis.primary_keyword_score) * share(KEYWORD_WEIGHT)
        + f64::from(analysis.readability_analysis.readability_score) * share(READABILITY_WEIGHT)
        + mean(&[tech.schema_score, tech.canonical_score, tech.load_time_score])
            * share(TECHNICAL_WEIGHT)
        + mean(&[links.internal_link_score, links.external_link_score]) * share(LINK_WEIGHT)
        + analysis.image_analysis.image_score * share(IMAGE_WEIGHT);

    to_score(blended)
}
