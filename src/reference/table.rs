//! Immutable reference table with normalized lookup
//!
//! Loaded once per validation run. Duplicate identical rows collapse;
//! conflicting rows are a hard load error. Lookups are pure functions of
//! (source_term, domain) for the lifetime of the table.

use rustc_hash::FxHashMap;
use tracing::info;

use super::types::{Domain, LoadError, ReferenceEntry};

/// Normalize a term for table keys and comparisons.
///
/// Trims, collapses internal whitespace runs to a single space, and
/// lowercases ASCII. Chinese text passes through unchanged apart from
/// whitespace handling. Idempotent.
pub fn normalize(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    let mut last_was_space = false;
    for ch in term.trim().chars() {
        if ch.is_whitespace() {
            if !last_was_space {
                out.push(' ');
                last_was_space = true;
            }
        } else {
            out.push(ch.to_ascii_lowercase());
            last_was_space = false;
        }
    }
    out
}

/// The authoritative bilingual mapping, keyed by (normalized source, domain)
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    /// (normalized source_term, domain) -> authoritative target_term
    map: FxHashMap<(String, Domain), String>,
    /// Source terms per domain, in load order, original casing
    sources: FxHashMap<Domain, Vec<String>>,
    /// Target terms per domain, in load order
    targets: FxHashMap<Domain, Vec<String>>,
}

impl ReferenceTable {
    /// Load the table from already-parsed entries.
    ///
    /// Fails fast on the first conflicting (source_term, domain) key or empty
    /// term. Identical duplicates (after normalization) collapse silently.
    pub fn load(
        entries: impl IntoIterator<Item = ReferenceEntry>,
    ) -> Result<Self, LoadError> {
        let mut table = Self::default();

        for entry in entries {
            let source = normalize(&entry.source_term);
            let target = normalize(&entry.target_term);

            if source.is_empty() {
                return Err(LoadError::EmptySourceTerm {
                    domain: entry.domain,
                    target_term: entry.target_term,
                });
            }
            if target.is_empty() {
                return Err(LoadError::EmptyTargetTerm {
                    source_term: entry.source_term,
                    domain: entry.domain,
                });
            }

            let key = (source, entry.domain);
            match table.map.get(&key) {
                Some(existing) if existing != &target => {
                    return Err(LoadError::ConflictingEntry {
                        source_term: entry.source_term,
                        domain: entry.domain,
                        existing: existing.clone(),
                        incoming: target,
                    });
                }
                Some(_) => {} // identical duplicate, collapse
                None => {
                    table
                        .sources
                        .entry(entry.domain)
                        .or_default()
                        .push(entry.source_term.trim().to_string());
                    table.targets.entry(entry.domain).or_default().push(target.clone());
                    table.map.insert(key, target);
                }
            }
        }

        info!(entries = table.map.len(), "reference table loaded");
        Ok(table)
    }

    /// Look up the authoritative target term for a source term.
    ///
    /// The term is normalized before lookup, so incidental casing and
    /// whitespace differences do not matter.
    pub fn lookup(&self, term: &str, domain: Domain) -> Option<&str> {
        self.map
            .get(&(normalize(term), domain))
            .map(|s| s.as_str())
    }

    /// Source terms recognized for a domain, in load order
    pub fn source_terms(&self, domain: Domain) -> &[String] {
        self.sources.get(&domain).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Target terms known for a domain, in load order
    pub fn target_terms(&self, domain: Domain) -> &[String] {
        self.targets.get(&domain).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// Total number of mappings across all domains
    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mint(source: &str, target: &str) -> ReferenceEntry {
        ReferenceEntry::new(source, target, Domain::MintNames)
    }

    #[test]
    fn test_normalize_collapses_whitespace_and_case() {
        assert_eq!(normalize("  Kiangnan   Mint "), "kiangnan mint");
        assert_eq!(normalize("江南\u{3000}省造"), "江南 省造");
    }

    #[test]
    fn test_normalize_idempotent() {
        let once = normalize("  Central  MINT\t造幣總廠 ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_lookup_is_case_and_whitespace_insensitive() {
        let table = ReferenceTable::load([mint("Kiangnan", "江南")]).unwrap();
        assert_eq!(table.lookup("kiangnan", Domain::MintNames), Some("江南"));
        assert_eq!(table.lookup(" KIANGNAN ", Domain::MintNames), Some("江南"));
        assert_eq!(table.lookup("Kiangnan", Domain::CoinDescriptions), None);
    }

    #[test]
    fn test_conflicting_duplicate_is_load_error() {
        let err = ReferenceTable::load([mint("Kiangnan", "江南"), mint("Kiangnan", "江苏")])
            .unwrap_err();
        assert!(matches!(err, LoadError::ConflictingEntry { .. }));
    }

    #[test]
    fn test_identical_duplicate_collapses() {
        let table =
            ReferenceTable::load([mint("Kiangnan", "江南"), mint("kiangnan ", "江南")]).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.source_terms(Domain::MintNames).len(), 1);
    }

    #[test]
    fn test_empty_source_term_rejected() {
        let err = ReferenceTable::load([mint("   ", "江南")]).unwrap_err();
        assert!(matches!(err, LoadError::EmptySourceTerm { .. }));
    }
}
