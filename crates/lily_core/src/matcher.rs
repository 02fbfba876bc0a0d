//! Fuzzy label matching seam.
//!
//! The router only needs one capability: best-scoring candidate for a
//! query, on a 0-100 scale. Any scorer satisfying `FuzzyMatcher` is
//! substitutable; the acceptance threshold belongs to the router, not
//! the matcher.

/// Best candidate with its similarity score (0-100).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMatch {
    pub label: String,
    pub score: u8,
}

pub trait FuzzyMatcher {
    /// Best-scoring candidate for `query`, or None when `candidates`
    /// is empty. Ties resolve to the earliest candidate.
    fn best_match(&self, query: &str, candidates: &[String]) -> Option<ScoredMatch>;
}

/// Default matcher: Jaro-Winkler similarity scaled to 0-100.
///
/// Queries are full sentences ("find sneakers under 50") while
/// candidate labels are short terms, so whole-string similarity alone
/// scores poorly. Each candidate is scored as the best of the
/// whole-query similarity and the per-token similarities.
#[derive(Debug, Clone, Copy, Default)]
pub struct JaroWinklerMatcher;

impl JaroWinklerMatcher {
    fn score(query: &str, candidate: &str) -> u8 {
        let whole = strsim::jaro_winkler(query, candidate);
        let best_token = query
            .split_whitespace()
            .map(|token| strsim::jaro_winkler(token, candidate))
            .fold(0.0_f64, f64::max);

        (whole.max(best_token) * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

impl FuzzyMatcher for JaroWinklerMatcher {
    fn best_match(&self, query: &str, candidates: &[String]) -> Option<ScoredMatch> {
        let query = query.to_lowercase();
        let mut best: Option<ScoredMatch> = None;

        for candidate in candidates {
            let score = Self::score(&query, &candidate.to_lowercase());
            let improved = match &best {
                Some(current) => score > current.score,
                None => true,
            };
            if improved {
                best = Some(ScoredMatch {
                    label: candidate.clone(),
                    score,
                });
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_exact_token_match_scores_high() {
        let matcher = JaroWinklerMatcher;
        let best = matcher
            .best_match("find sneakers under 50", &labels(&["sneakers", "boots"]))
            .unwrap();
        assert_eq!(best.label, "sneakers");
        assert_eq!(best.score, 100);
    }

    #[test]
    fn test_near_miss_scores_below_exact() {
        let matcher = JaroWinklerMatcher;
        let best = matcher
            .best_match("find sneekers", &labels(&["sneakers", "boots"]))
            .unwrap();
        assert_eq!(best.label, "sneakers");
        assert!(best.score >= 70, "typo should still score high: {}", best.score);
        assert!(best.score < 100);
    }

    #[test]
    fn test_empty_candidates() {
        let matcher = JaroWinklerMatcher;
        assert!(matcher.best_match("anything", &[]).is_none());
    }

    #[test]
    fn test_unrelated_query_scores_low() {
        let matcher = JaroWinklerMatcher;
        let best = matcher
            .best_match("what is the meaning of life", &labels(&["sneakers"]))
            .unwrap();
        assert!(best.score < 70, "unrelated query scored {}", best.score);
    }

    #[test]
    fn test_ties_resolve_to_earliest() {
        let matcher = JaroWinklerMatcher;
        let best = matcher
            .best_match("find shoes", &labels(&["shoes", "shoes "]))
            .unwrap();
        assert_eq!(best.label, "shoes");
    }

    #[test]
    fn test_case_insensitive() {
        let matcher = JaroWinklerMatcher;
        let best = matcher
            .best_match("Find SNEAKERS", &labels(&["sneakers"]))
            .unwrap();
        assert_eq!(best.score, 100);
    }
}
