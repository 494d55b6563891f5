/// Additive difficulty modifiers, checked in order as case-sensitive
/// substring matches.
///
/// Matching is deliberately case-sensitive: keywords are lowercased upstream
/// before they reach this crate, and folding here would silently change
/// scores for callers that rely on the observed behavior.
const TERM_MODIFIERS: &[(&str, i32)] = &[
    ("development", 5),
    ("software", 3),
    ("custom", 8),
    ("company", -5),
    ("services", -3),
];

const BASELINE: i32 = 50;

/// Estimate ranking difficulty for a keyword on a 0–100 scale.
///
/// Long phrases read as more competitive commercial intent (+10 above 20
/// characters), very short ones as generic head terms (−5 below 10), and a
/// small table of commercial terms nudges the baseline either way.
pub fn difficulty(keyword: &str) -> u32 {
    let mut score = BASELINE;

    let len = keyword.chars().count();
    if len > 20 {
        score += 10;
    }
    if len < 10 {
        score -= 5;
    }

    for (needle, delta) in TERM_MODIFIERS {
        if keyword.contains(needle) {
            score += delta;
        }
    }

    let clamped = score.clamp(0, 100) as u32;
    debug_assert!(clamped <= 100, "difficulty {clamped} out of range [0, 100]");
    clamped
}
