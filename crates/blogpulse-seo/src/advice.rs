//! Recommendations and prioritized opportunities derived from a finished
//! analysis. Both lists are produced in a fixed order.

use crate::types::{
    ContentAnalysis, DensityStatus, ExternalLinkStatus, H1Status, H2Status, InternalLinkStatus,
    LengthStatus, Level, Opportunity, OpportunityType,
};

/// Flesch score below which prose is flagged as hard to read.
const READABLE_FLESCH: f64 = 60.0;
/// Alt-text coverage (percent) below which images are flagged.
const ALT_TEXT_TARGET: f64 = 80.0;

#[must_use]
pub fn recommendations(analysis: &ContentAnalysis) -> Vec<String> {
    let mut out: Vec<&'static str> = Vec::new();
    let keyword_configured = !analysis.keyword_analysis.primary_keyword.trim().is_empty();

    let title = &analysis.title_analysis;
    match title.length_status {
        LengthStatus::TooShort => {
            out.push("Expand your title to 50-60 characters for optimal search engine display");
        }
        LengthStatus::TooLong => out.push(
            "Shorten your title to under 60 characters to avoid truncation in search results",
        ),
        LengthStatus::Optimal | LengthStatus::Good => {}
    }
    if keyword_configured && !title.contains_primary_keyword {
        out.push("Include your primary keyword in the title, preferably near the beginning");
    }

    let meta = &analysis.meta_analysis;
    match meta.length_status {
        LengthStatus::TooShort => out.push(
            "Expand your meta description to 150-160 characters for better search result display",
        ),
        LengthStatus::TooLong => {
            out.push("Shorten your meta description to under 160 characters");
        }
        LengthStatus::Optimal | LengthStatus::Good => {}
    }
    if !meta.call_to_action {
        out.push("Add a compelling call-to-action to your meta description");
    }

    let structure = &analysis.structure_analysis;
    match structure.h1_status {
        H1Status::Missing => out.push("Add an H1 heading to your content for better structure"),
        H1Status::Multiple => out.push("Use only one H1 heading per page"),
        H1Status::Optimal => {}
    }
    if structure.h2_status == H2Status::Missing {
        out.push("Add H2 subheadings to improve content structure and readability");
    }

    match analysis.keyword_analysis.primary_keyword_status {
        Some(DensityStatus::TooLow) => out.push("Increase primary keyword usage to 1-2% density"),
        Some(DensityStatus::TooHigh) => out.push(
            "Reduce primary keyword usage to avoid over-optimization (aim for 1-2% density)",
        ),
        _ => {}
    }

    if analysis.readability_analysis.flesch_score < READABLE_FLESCH {
        out.push("Improve readability by using shorter sentences and simpler words");
    }

    if !analysis.technical_analysis.has_schema_markup {
        out.push("Add schema markup to help search engines understand your content better");
    }

    let links = &analysis.link_analysis;
    if links.internal_link_status == InternalLinkStatus::Missing {
        out.push("Add 3-5 internal links to related content on your website");
    }
    if links.external_link_status == ExternalLinkStatus::NoLinks {
        out.push("Include 2-3 links to high-quality external sources for credibility");
    }

    let images = &analysis.image_analysis;
    if images.image_count > 0 && images.alt_text_score < ALT_TEXT_TARGET {
        out.push("Add descriptive alt text to all images for better accessibility and SEO");
    }

    out.into_iter().map(str::to_string).collect()
}

#[must_use]
pub fn opportunities(analysis: &ContentAnalysis) -> Vec<Opportunity> {
    let mut out = Vec::new();
    let keywords = &analysis.keyword_analysis;
    let keyword_configured = !keywords.primary_keyword.trim().is_empty();

    if keyword_configured && !analysis.title_analysis.contains_primary_keyword {
        out.push(opportunity(
            OpportunityType::TitleOptimization,
            (Level::High, Level::High, Level::Low),
            "Add primary keyword to title",
            "Including your primary keyword in the title can significantly improve rankings",
            "Edit the title to include your primary keyword, preferably at the beginning",
        ));
    }

    if keywords.primary_keyword_status == Some(DensityStatus::TooLow) {
        out.push(opportunity(
            OpportunityType::KeywordOptimization,
            (Level::High, Level::Medium, Level::Medium),
            "Increase keyword density",
            "Your primary keyword density is too low, which may affect rankings",
            "Naturally incorporate your primary keyword 2-3 more times in the content",
        ));
    }

    if analysis.structure_analysis.h2_count < 2 {
        out.push(opportunity(
            OpportunityType::ContentStructure,
            (Level::Medium, Level::Medium, Level::Low),
            "Add more H2 subheadings",
            "Proper heading structure improves both SEO and user experience",
            "Break your content into logical sections with descriptive H2 headings",
        ));
    }

    if analysis.link_analysis.internal_link_count < 3 {
        out.push(opportunity(
            OpportunityType::InternalLinking,
            (Level::Medium, Level::Medium, Level::Low),
            "Add internal links",
            "Internal links help search engines understand your site structure and keep users engaged",
            "Link to 3-5 related articles or pages on your website",
        ));
    }

    let images = &analysis.image_analysis;
    if images.image_count > 0 && images.alt_text_score < 100.0 {
        out.push(opportunity(
            OpportunityType::ImageOptimization,
            (Level::Low, Level::Low, Level::Low),
            "Optimize image alt text",
            "Alt text helps search engines understand your images and improves accessibility",
            "Add descriptive alt text to all images, including relevant keywords where appropriate",
        ));
    }

    if !analysis.technical_analysis.has_schema_markup {
        out.push(opportunity(
            OpportunityType::SchemaMarkup,
            (Level::Low, Level::Medium, Level::High),
            "Add schema markup",
            "Schema markup helps search engines better understand and display your content",
            "Implement appropriate schema markup (Article, BlogPosting, etc.) for your content type",
        ));
    }

    out
}

/// `levels` is `(priority, impact, effort)`.
fn opportunity(
    kind: OpportunityType,
    levels: (Level, Level, Level),
    title: &str,
    description: &str,
    action: &str,
) -> Opportunity {
    let (priority, impact, effort) = levels;
    Opportunity {
        kind,
        priority,
        impact,
        effort,
        title: title.to_string(),
        description: description.to_string(),
        action: action.to_string(),
    }
}
