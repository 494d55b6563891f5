//! Data-driven classification tables for trend synthesis.
//!
//! Each table is an ordered list evaluated top to bottom; the first entry
//! whose needles match wins. Matching is a plain case-sensitive substring
//! check, consistent with the keyword difficulty scorer.

/// Baseline trend strength and search volume for a keyword segment.
#[derive(Debug, Clone, Copy)]
pub struct TrendProfile {
    pub needles: &'static [&'static str],
    pub base_trend: u32,
    pub base_volume: u64,
}

/// Segment baselines, highest-priority first. Base values are product
/// estimates and deliberately live in this one table.
pub const TREND_PROFILES: &[TrendProfile] = &[
    TrendProfile {
        needles: &["fintech", "blockchain"],
        base_trend: 85,
        base_volume: 32_000,
    },
    TrendProfile {
        needles: &["ai", "machine learning"],
        base_trend: 82,
        base_volume: 28_000,
    },
    TrendProfile {
        needles: &["web development"],
        base_trend: 70,
        base_volume: 22_000,
    },
    TrendProfile {
        needles: &["mobile app"],
        base_trend: 68,
        base_volume: 18_000,
    },
    TrendProfile {
        needles: &["saas"],
        base_trend: 64,
        base_volume: 12_000,
    },
    TrendProfile {
        needles: &["ecommerce"],
        base_trend: 60,
        base_volume: 15_000,
    },
];

pub const DEFAULT_PROFILE: TrendProfile = TrendProfile {
    needles: &[],
    base_trend: 50,
    base_volume: 8_000,
};

/// First matching profile in priority order, or the default.
pub fn profile_for(keyword: &str) -> &'static TrendProfile {
    TREND_PROFILES
        .iter()
        .find(|p| p.needles.iter().any(|n| keyword.contains(n)))
        .unwrap_or(&DEFAULT_PROFILE)
}

/// One related-query or related-topic template. `{}` in the pattern is
/// replaced with the keyword; the value is drawn uniformly from
/// `min_value..=max_value`.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionTemplate {
    pub pattern: &'static str,
    pub min_value: u32,
    pub max_value: u32,
}

/// Related-suggestion templates for a keyword segment. The segment set here
/// is intentionally coarser than [`TREND_PROFILES`]: suggestions split on
/// technical versus commercial intent, not on vertical.
#[derive(Debug, Clone, Copy)]
pub struct SuggestionProfile {
    pub needles: &'static [&'static str],
    pub queries: &'static [SuggestionTemplate],
    pub topics: &'static [SuggestionTemplate],
}

pub const SUGGESTION_PROFILES: &[SuggestionProfile] = &[
    SuggestionProfile {
        needles: &["development", "software", "app", "ai", "engineering"],
        queries: &[
            SuggestionTemplate { pattern: "best {} tools", min_value: 40, max_value: 95 },
            SuggestionTemplate { pattern: "{} tutorial", min_value: 30, max_value: 85 },
            SuggestionTemplate { pattern: "{} frameworks", min_value: 25, max_value: 80 },
            SuggestionTemplate { pattern: "open source {}", min_value: 20, max_value: 70 },
            SuggestionTemplate { pattern: "{} best practices", min_value: 15, max_value: 60 },
        ],
        topics: &[
            SuggestionTemplate { pattern: "Software development", min_value: 50, max_value: 100 },
            SuggestionTemplate { pattern: "Programming languages", min_value: 40, max_value: 90 },
            SuggestionTemplate { pattern: "Cloud computing", min_value: 30, max_value: 80 },
            SuggestionTemplate { pattern: "Developer tools", min_value: 25, max_value: 75 },
        ],
    },
    SuggestionProfile {
        needles: &["company", "services", "agency", "consulting"],
        queries: &[
            SuggestionTemplate { pattern: "{} near me", min_value: 40, max_value: 95 },
            SuggestionTemplate { pattern: "{} pricing", min_value: 30, max_value: 85 },
            SuggestionTemplate { pattern: "best {}", min_value: 25, max_value: 80 },
            SuggestionTemplate { pattern: "{} reviews", min_value: 20, max_value: 70 },
            SuggestionTemplate { pattern: "affordable {}", min_value: 15, max_value: 60 },
        ],
        topics: &[
            SuggestionTemplate { pattern: "Professional services", min_value: 50, max_value: 100 },
            SuggestionTemplate { pattern: "Small business", min_value: 40, max_value: 90 },
            SuggestionTemplate { pattern: "Outsourcing", min_value: 30, max_value: 80 },
            SuggestionTemplate { pattern: "Consulting", min_value: 25, max_value: 75 },
        ],
    },
];

pub const DEFAULT_SUGGESTIONS: SuggestionProfile = SuggestionProfile {
    needles: &[],
    queries: &[
        SuggestionTemplate { pattern: "what is {}", min_value: 30, max_value: 90 },
        SuggestionTemplate { pattern: "best {}", min_value: 25, max_value: 80 },
        SuggestionTemplate { pattern: "{} guide", min_value: 20, max_value: 70 },
        SuggestionTemplate { pattern: "{} examples", min_value: 15, max_value: 60 },
    ],
    topics: &[
        SuggestionTemplate { pattern: "Technology", min_value: 40, max_value: 90 },
        SuggestionTemplate { pattern: "Marketing", min_value: 30, max_value: 80 },
        SuggestionTemplate { pattern: "Business strategy", min_value: 25, max_value: 75 },
    ],
};

pub fn suggestions_for(keyword: &str) -> &'static SuggestionProfile {
    SUGGESTION_PROFILES
        .iter()
        .find(|p| p.needles.iter().any(|n| keyword.contains(n)))
        .unwrap_or(&DEFAULT_SUGGESTIONS)
}

/// Fixed category listings for the trending-by-category endpoint.
pub const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "technology",
        &[
            "ai development",
            "machine learning consulting",
            "web development",
            "mobile app development",
            "blockchain development",
        ],
    ),
    (
        "business",
        &[
            "saas platform",
            "ecommerce store",
            "digital marketing services",
            "business automation",
        ],
    ),
    (
        "finance",
        &["fintech startup", "blockchain payments", "crypto wallet"],
    ),
];

pub const DEFAULT_CATEGORY_KEYWORDS: &[&str] = &["software development"];

/// Keyword list for a category; unknown categories fall back to the default
/// single-keyword list.
pub fn category_keywords(category: &str) -> &'static [&'static str] {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, keywords)| *keywords)
        .unwrap_or(DEFAULT_CATEGORY_KEYWORDS)
}
