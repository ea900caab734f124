//! Rule-driven candidate extraction
//!
//! Compiles the domain's term lexicon into a single case-insensitive
//! word-boundary scanner, then walks each record left to right. Target
//! language text is extracted once per record and attached to every
//! candidate from it.

use once_cell::sync::Lazy;
use regex::Regex;
use smallvec::SmallVec;

use crate::reference::{normalize, ReferenceTable};
use super::rules::{PositionRule, RuleSet};
use super::types::{Candidate, ContextFlags, TextRecord};

/// Year-like tokens: 19xx/20xx, parenthesized, and undated ND (19xx) forms
static YEAR_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"ND\s*\((?:19|20)\d{2}\)|\((?:19|20)\d{2}\)|(?:19|20)\d{2}").unwrap()
});

/// Scans text records and produces validation candidates
pub struct CandidateExtractor {
    rules: RuleSet,
    /// Combined lexicon scanner; None when the lexicon is empty or the
    /// rule set scans per character
    term_regex: Option<Regex>,
    /// Whole-word uncertainty scanner over lowercased text
    uncertainty_regex: Option<Regex>,
}

impl CandidateExtractor {
    /// Build an extractor for a rule set against a loaded table.
    ///
    /// The term lexicon is the table's source terms for the rule set's
    /// domain; rebuilding the extractor is required after a table swap.
    pub fn new(rules: RuleSet, table: &ReferenceTable) -> Self {
        let term_regex = if rules.per_character {
            None
        } else {
            let terms: Vec<&String> = table
                .source_terms(rules.domain)
                .iter()
                .chain(rules.extra_terms.iter())
                .collect();
            if terms.is_empty() {
                None
            } else {
                let mut alternates: Vec<String> =
                    terms.iter().map(|t| regex::escape(t.as_str())).collect();
                // Longest first so "Kiangnan Mint" wins over "Kiangnan"
                alternates.sort_by_key(|a| std::cmp::Reverse(a.len()));
                let pattern = format!(r"(?i)\b(?:{})\b", alternates.join("|"));
                Some(Regex::new(&pattern).expect("escaped term alternation"))
            }
        };

        let uncertainty_regex = if rules.uncertainty_words.is_empty() {
            None
        } else {
            let alternates: Vec<String> = rules
                .uncertainty_words
                .iter()
                .map(|w| regex::escape(w))
                .collect();
            let pattern = format!(r"\b(?:{})\b", alternates.join("|"));
            Some(Regex::new(&pattern).expect("escaped hedge word alternation"))
        };

        Self {
            rules,
            term_regex,
            uncertainty_regex,
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Extract all candidates from a record, left to right.
    ///
    /// Duplicate occurrences of the same term each produce their own
    /// candidate. An uncertainty hit does not stop extraction; it marks
    /// every candidate so the matcher suppresses them.
    pub fn extract(&self, record: &TextRecord, table: &ReferenceTable) -> Vec<Candidate> {
        let has_uncertainty = self.contains_uncertainty(&record.raw_text);

        if self.rules.per_character {
            return self.extract_characters(record, has_uncertainty);
        }

        let Some(term_regex) = &self.term_regex else {
            return Vec::new();
        };

        let year_pos = YEAR_REGEX.find(&record.raw_text).map(|m| m.start());
        let target_text = self.extract_target(&record.raw_text, table);

        let mut candidates = Vec::new();
        for m in term_regex.find_iter(&record.raw_text) {
            let follows_year = year_pos.is_some_and(|p| m.start() > p);
            if self.rules.position == PositionRule::AfterYear
                && !has_uncertainty
                && !follows_year
            {
                continue;
            }
            candidates.push(Candidate {
                record_id: record.id.clone(),
                span: (m.start(), m.end()),
                extracted_text: m.as_str().to_string(),
                target_text: target_text.clone(),
                flags: ContextFlags {
                    has_uncertainty,
                    follows_year,
                },
            });
        }
        candidates
    }

    /// Per-character extraction for the traditional-character domain.
    ///
    /// Every distinct Han character gets one candidate; the matcher decides
    /// whether its form is authentic.
    fn extract_characters(&self, record: &TextRecord, has_uncertainty: bool) -> Vec<Candidate> {
        let mut seen: SmallVec<[char; 32]> = SmallVec::new();
        let mut candidates = Vec::new();

        for (idx, ch) in record.raw_text.char_indices() {
            if !('\u{4e00}'..='\u{9fff}').contains(&ch) || seen.contains(&ch) {
                continue;
            }
            seen.push(ch);
            candidates.push(Candidate {
                record_id: record.id.clone(),
                span: (idx, idx + ch.len_utf8()),
                extracted_text: ch.to_string(),
                target_text: None,
                flags: ContextFlags {
                    has_uncertainty,
                    follows_year: false,
                },
            });
        }
        candidates
    }

    /// Whole-word uncertainty check with exception phrases masked out first
    fn contains_uncertainty(&self, text: &str) -> bool {
        let Some(regex) = &self.uncertainty_regex else {
            return false;
        };
        let mut lower = text.to_lowercase();
        for phrase in &self.rules.uncertainty_exceptions {
            while let Some(pos) = lower.find(phrase.as_str()) {
                let masked = " ".repeat(phrase.len());
                lower.replace_range(pos..pos + phrase.len(), &masked);
            }
        }
        regex.is_match(&lower)
    }

    /// Extract the record's target-language term.
    ///
    /// Domain patterns (mint-suffix forms) are tried first; otherwise the
    /// earliest known target term found in the normalized text wins, with
    /// the longest match breaking position ties.
    fn extract_target(&self, text: &str, table: &ReferenceTable) -> Option<String> {
        for pattern in &self.rules.target_patterns {
            if let Some(m) = pattern.find(text) {
                return Some(m.as_str().to_string());
            }
        }

        let normalized = normalize(text);
        let mut best: Option<(usize, &String)> = None;
        for target in table.target_terms(self.rules.domain) {
            if let Some(pos) = normalized.find(target.as_str()) {
                let better = match best {
                    None => true,
                    Some((best_pos, best_term)) => {
                        pos < best_pos || (pos == best_pos && target.len() > best_term.len())
                    }
                };
                if better {
                    best = Some((pos, target));
                }
            }
        }
        best.map(|(_, t)| t.clone())
    }
}
