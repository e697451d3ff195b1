use serde::{Deserialize, Serialize};

/// Declares a unit-only status enum that serializes as its snake_case label
/// and displays the same label.
macro_rules! status_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            #[must_use]
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

/// A blog post as assembled by the persistence layer for analysis.
///
/// Every field may be empty; analysis never fails on missing text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentInput {
    pub id: u64,
    pub title: String,
    pub url: String,
    pub meta_description: String,
    /// Body text. Paragraphs are separated by blank lines.
    pub content: String,
    pub primary_keyword: String,
    pub secondary_keywords: Vec<String>,
    pub headings: Vec<Heading>,
    pub internal_links: Vec<Link>,
    pub external_links: Vec<Link>,
    pub images: Vec<Image>,
    /// Raw JSON-LD or microdata; only presence is scored.
    pub schema_markup: String,
    pub canonical_url: String,
    /// Page load time in seconds. `0` means not measured.
    pub load_time: f64,
    pub mobile_responsive: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Heading {
    /// 1 through 6 for H1–H6.
    pub level: u8,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub url: String,
    pub anchor_text: String,
    pub is_dofollow: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    pub url: String,
    pub file_name: String,
    pub alt_text: String,
    pub title: String,
    /// Size in bytes.
    pub size: u64,
}

// ---------------------------------------------------------------------------
// Status labels
// ---------------------------------------------------------------------------

status_enum!(
    /// Band for title, meta description and URL lengths.
    LengthStatus {
        Optimal => "optimal",
        Good => "good",
        TooShort => "too_short",
        TooLong => "too_long",
    }
);

status_enum!(KeywordPosition {
    Beginning => "beginning",
    Middle => "middle",
    End => "end",
});

status_enum!(WordCountStatus {
    Optimal => "optimal",
    Good => "good",
    TooShort => "too_short",
    VeryLong => "very_long",
});

status_enum!(H1Status {
    Optimal => "optimal",
    Missing => "missing",
    Multiple => "multiple",
});

status_enum!(H2Status {
    Good => "good",
    Minimal => "minimal",
    Missing => "missing",
    Many => "many",
});

status_enum!(
    /// Primary keyword density band.
    DensityStatus {
        Optimal => "optimal",
        Good => "good",
        TooLow => "too_low",
        TooHigh => "too_high",
    }
);

status_enum!(
    /// Flesch Reading Ease bucket.
    ReadingLevel {
        VeryEasy => "very_easy",
        Easy => "easy",
        FairlyEasy => "fairly_easy",
        Standard => "standard",
        FairlyDifficult => "fairly_difficult",
        Difficult => "difficult",
        VeryDifficult => "very_difficult",
    }
);

status_enum!(LoadTimeStatus {
    Excellent => "excellent",
    Good => "good",
    Fair => "fair",
    Poor => "poor",
});

status_enum!(UrlStructure {
    Clean => "clean",
    Complex => "complex",
});

status_enum!(InternalLinkStatus {
    Optimal => "optimal",
    Good => "good",
    Missing => "missing",
    TooMany => "too_many",
});

status_enum!(ExternalLinkStatus {
    Optimal => "optimal",
    Good => "good",
    NoLinks => "none",
    TooMany => "too_many",
});

status_enum!(OpportunityType {
    TitleOptimization => "title_optimization",
    KeywordOptimization => "keyword_optimization",
    ContentStructure => "content_structure",
    InternalLinking => "internal_linking",
    ImageOptimization => "image_optimization",
    SchemaMarkup => "schema_markup",
});

status_enum!(
    /// Shared high/medium/low scale for opportunity priority, impact and effort.
    Level {
        High => "high",
        Medium => "medium",
        Low => "low",
    }
);

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleAnalysis {
    pub title: String,
    /// Length in characters.
    pub length: usize,
    pub length_score: u8,
    pub length_status: LengthStatus,
    pub contains_primary_keyword: bool,
    /// `None` when no primary keyword is configured or it is absent.
    pub keyword_position: Option<KeywordPosition>,
    pub keyword_score: u8,
    pub power_words: Vec<String>,
    pub power_word_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaAnalysis {
    pub meta_description: String,
    pub length: usize,
    pub length_score: u8,
    pub length_status: LengthStatus,
    pub contains_primary_keyword: bool,
    pub keyword_score: u8,
    pub call_to_action: bool,
    pub cta_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureAnalysis {
    pub word_count: usize,
    pub word_count_score: u8,
    pub word_count_status: WordCountStatus,
    pub h1_count: usize,
    pub h1_score: u8,
    pub h1_status: H1Status,
    pub h2_count: usize,
    pub h2_score: u8,
    pub h2_status: H2Status,
    pub h3_count: usize,
    pub paragraph_count: usize,
    pub avg_words_per_paragraph: f64,
    pub paragraph_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecondaryKeyword {
    pub keyword: String,
    pub count: usize,
    pub density: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub primary_keyword: String,
    pub primary_keyword_count: usize,
    /// Occurrences per hundred words.
    pub primary_keyword_density: f64,
    pub primary_keyword_score: u8,
    /// `None` when there is no body text or no primary keyword.
    pub primary_keyword_status: Option<DensityStatus>,
    pub primary_keyword_in_intro: bool,
    pub intro_keyword_score: u8,
    pub secondary_keywords: Vec<SecondaryKeyword>,
    pub lsi_keywords: Vec<String>,
    pub lsi_score: f64,
}

/// Distribution of sentence lengths, in words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SentenceLengthAnalysis {
    pub average_length: f64,
    pub shortest_sentence: usize,
    pub longest_sentence: usize,
    /// At most 10 words.
    pub short_sentences: usize,
    /// 11 to 20 words.
    pub medium_sentences: usize,
    /// More than 20 words.
    pub long_sentences: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityAnalysis {
    pub sentence_count: usize,
    pub word_count: usize,
    pub syllable_count: usize,
    pub avg_words_per_sentence: f64,
    pub avg_syllables_per_word: f64,
    /// Flesch Reading Ease clamped to `[0, 100]`.
    pub flesch_score: f64,
    pub flesch_kincaid_grade: f64,
    /// `None` when the text has no complete sentence.
    pub reading_level: Option<ReadingLevel>,
    pub readability_score: u8,
    pub sentence_lengths: SentenceLengthAnalysis,
    pub transition_words: Vec<String>,
    pub transition_word_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlAnalysis {
    pub url: String,
    pub length: usize,
    pub length_score: u8,
    pub length_status: LengthStatus,
    pub contains_keyword: bool,
    pub keyword_score: u8,
    pub structure: UrlStructure,
    pub structure_score: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAnalysis {
    pub url: UrlAnalysis,
    pub has_schema_markup: bool,
    pub schema_score: u8,
    pub has_canonical_url: bool,
    pub canonical_score: u8,
    pub load_time_score: u8,
    /// `None` when load time was not measured.
    pub load_time_status: Option<LoadTimeStatus>,
    pub is_mobile_responsive: bool,
    pub mobile_score: u8,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnchorTextAnalysis {
    /// Number of distinct non-empty anchor texts.
    pub anchor_text_variety: usize,
    pub most_used_anchor_text: Option<String>,
    /// Share of all links using the most common anchor, in whole percent.
    pub max_anchor_frequency: usize,
    /// Anchors used on more than 30% of links.
    pub over_optimized_anchors: Vec<String>,
    pub diversity_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkAnalysis {
    pub internal_link_count: usize,
    pub external_link_count: usize,
    pub internal_link_score: u8,
    pub internal_link_status: InternalLinkStatus,
    pub external_link_score: u8,
    pub external_link_status: ExternalLinkStatus,
    pub anchor_text: AnchorTextAnalysis,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub image_count: usize,
    pub images_with_alt_text: usize,
    pub images_with_title: usize,
    pub optimized_file_names: usize,
    pub alt_text_score: f64,
    pub title_score: f64,
    pub file_name_score: f64,
    pub image_score: f64,
}

/// A concrete, prioritized optimization task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Opportunity {
    #[serde(rename = "type")]
    pub kind: OpportunityType,
    pub priority: Level,
    pub impact: Level,
    pub effort: Level,
    pub title: String,
    pub description: String,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub content_id: u64,
    pub title: String,
    pub url: String,
    pub overall_score: u8,
    pub title_analysis: TitleAnalysis,
    pub meta_analysis: MetaAnalysis,
    pub structure_analysis: StructureAnalysis,
    pub keyword_analysis: KeywordAnalysis,
    pub readability_analysis: ReadabilityAnalysis,
    pub technical_analysis: TechnicalAnalysis,
    pub link_analysis: LinkAnalysis,
    pub image_analysis: ImageAnalysis,
    pub recommendations: Vec<String>,
    pub opportunities: Vec<Opportunity>,
}
