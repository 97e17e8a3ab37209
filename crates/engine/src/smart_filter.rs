//! Contradiction filter
//!
//! Scans an assembled prompt for configured term pairs and, when both terms
//! of a pair are present, strips every whole-word occurrence of the second
//! term. The first term of a pair always wins. Pairs are checked in table
//! order; no built-in pair drops a term that another pair keeps, so checking
//! the running text and checking the unfiltered input give the same result.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::catalog::{Catalog, CatalogError, ContradictionPair};

#[derive(Clone)]
struct Rule {
    keep: Regex,
    drop: Regex,
    drop_term: String,
}

/// Compiled contradiction pairs plus the comma normalization passes
#[derive(Clone)]
pub struct SmartFilter {
    rules: Vec<Rule>,
    comma_runs: Regex,
    trailing_comma: Regex,
    leading_comma: Regex,
}

impl std::fmt::Debug for SmartFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmartFilter")
            .field("rules", &self.rules.len())
            .finish()
    }
}

fn whole_word(term: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(term.trim())))
        .case_insensitive(true)
        .build()
}

impl SmartFilter {
    pub fn new(pairs: &[ContradictionPair]) -> Result<Self, CatalogError> {
        let rules = pairs
            .iter()
            .map(|pair| {
                Ok(Rule {
                    keep: whole_word(&pair.keep)?,
                    drop: whole_word(&pair.drop)?,
                    drop_term: pair.drop.trim().to_string(),
                })
            })
            .collect::<Result<Vec<_>, regex::Error>>()?;

        Ok(Self {
            rules,
            comma_runs: Regex::new(r",(?:\s*,)+")?,
            trailing_comma: Regex::new(r",\s*$")?,
            leading_comma: Regex::new(r"^\s*,")?,
        })
    }

    /// Filter over the built-in contradiction pairs
    pub fn builtin() -> &'static SmartFilter {
        static BUILTIN: OnceLock<SmartFilter> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            SmartFilter::new(&Catalog::builtin().contradictions)
                .expect("built-in contradiction pairs compile")
        })
    }

    /// Number of compiled pairs
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Remove contradicting terms from `text`. Identity when `enabled` is false.
    pub fn apply(&self, text: &str, enabled: bool) -> String {
        if !enabled {
            return text.to_string();
        }

        let mut result = text.to_string();
        for rule in &self.rules {
            if rule.keep.is_match(&result) && rule.drop.is_match(&result) {
                debug!(term = %rule.drop_term, "Smart filter removed contradicting term");
                result = rule.drop.replace_all(&result, "").into_owned();
            }
        }

        self.normalize(&result)
    }

    fn normalize(&self, text: &str) -> String {
        let text = self.comma_runs.replace_all(text, ",");
        let text = self.trailing_comma.replace(&text, "");
        let text = self.leading_comma.replace(&text, "");
        text.trim().to_string()
    }
}

/// Apply the built-in contradiction filter
pub fn apply_smart_filter(text: &str, enabled: bool) -> String {
    SmartFilter::builtin().apply(text, enabled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_term_wins() {
        let out = apply_smart_filter("at night, darkness and city lights, noon", true);
        assert_eq!(out, "at night, darkness and city lights");

        let out = apply_smart_filter("Noon glare, NIGHT sky", true);
        assert!(!out.to_lowercase().contains("noon"));
        assert!(out.contains("NIGHT"));
    }

    #[test]
    fn test_no_pair_no_change() {
        let text = "in Tokyo, Japan, at noon, harsh overhead sun";
        assert_eq!(apply_smart_filter(text, true), text);
    }

    #[test]
    fn test_disabled_is_identity() {
        let text = "at night, noon, , ";
        assert_eq!(apply_smart_filter(text, false), text);
    }

    #[test]
    fn test_whole_words_only() {
        // "nightclub" is not "night", "earthen" is not "earth"
        let text = "nightclub at noon, space station, earthen walls";
        assert_eq!(apply_smart_filter(text, true), text);
    }

    #[test]
    fn test_phrase_pairs() {
        let out = apply_smart_filter("rain, clear sky, wet streets", true);
        assert_eq!(out, "rain, wet streets");

        let out = apply_smart_filter("midnight, warm golden hour lighting", true);
        assert_eq!(out, "midnight, warm  lighting");
    }

    #[test]
    fn test_multiple_pairs_fire() {
        let out = apply_smart_filter(
            "winter season, snow, summer, prehistoric beasts, modern city",
            true,
        );
        assert_eq!(out, "winter season, snow, prehistoric beasts,  city");
    }

    #[test]
    fn test_stray_commas_normalized() {
        let out = apply_smart_filter("noon, at night, , noon", true);
        assert_eq!(out, "at night");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "noon, at night, , noon",
            "ancient ruins, cyberpunk, , neon, cyberpunk",
            " , indoor, outdoor, ,",
            "a robot, --ar 16:9",
            "underwater desert , , ,",
        ];
        for sample in samples {
            let once = apply_smart_filter(sample, true);
            let twice = apply_smart_filter(&once, true);
            assert_eq!(once, twice, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn test_custom_pairs() {
        let filter = SmartFilter::new(&[ContradictionPair {
            keep: "sepia".into(),
            drop: "technicolor".into(),
        }])
        .unwrap();
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.apply("sepia tone, technicolor", true), "sepia tone");
        assert_eq!(filter.apply("at night, noon", true), "at night, noon");
    }

    #[test]
    fn test_builtin_has_all_pairs() {
        assert_eq!(SmartFilter::builtin().len(), 12);
    }
}
