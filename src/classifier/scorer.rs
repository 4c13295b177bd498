//! Per-category keyword scoring.

use crate::category::Category;
use crate::corpus::{normalize, KeywordCorpus};
use regex::Regex;

/// Sum of `occurrences(keyword) × group.weight` across all keyword groups of
/// `category`, matched whole-word and case-insensitively against the
/// normalized idea text.
///
/// Keywords are matched as written: they are escaped, not normalized, so a
/// keyword containing punctuation the normalizer strips (e.g. a hyphen)
/// cannot match. Multi-word keywords must appear contiguously. Repeated
/// mentions scale the score linearly; there is no upper bound.
pub fn score_category(corpus: &KeywordCorpus, text: &str, category: Category) -> f64 {
    let normalized = normalize(text);
    let mut score = 0.0;

    for group in corpus.groups(category) {
        for keyword in &group.keywords {
            let pattern = format!(r"(?i)\b{}\b", regex::escape(keyword));
            // Escaped literals always compile; skip rather than fail if not.
            let Ok(re) = Regex::new(&pattern) else {
                continue;
            };
            let hits = re.find_iter(&normalized).count();
            if hits > 0 {
                score += hits as f64 * group.weight;
            }
        }
    }

    score
}
