//! The practical catalog: an immutable id → record table built once.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;

use super::id::PracticalId;
use super::practicals::PRACTICALS;

/// Language tag of every code sample in the catalog.
///
/// The samples are Scilab, which shares its surface syntax with MATLAB.
pub const CODE_LANGUAGE: &str = "matlab";

/// Title shown above every code sample.
pub const CODE_TITLE: &str = "Scilab Code";

/// One practical write-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PracticalRecord {
    /// Catalog key.
    pub id: PracticalId,
    /// Short title, e.g. "Linear Convolution".
    pub title: &'static str,
    /// One-line summary.
    pub description: &'static str,
    /// Theory prose as newline-separated paragraphs.
    pub theory: &'static str,
    /// Raw code sample, copied verbatim by the copy action.
    pub code: &'static str,
}

impl PracticalRecord {
    /// Theory split into display paragraphs. See [`paragraphs`].
    pub fn paragraphs(&self) -> Vec<&'static str> {
        paragraphs(self.theory)
    }
}

/// Split theory text into paragraphs, one per line.
///
/// Trailing whitespace is trimmed from each segment and blank segments at
/// the start and end are dropped. Blank segments between paragraphs are
/// kept so sections stay visually separated.
pub fn paragraphs(text: &str) -> Vec<&str> {
    let segments: Vec<&str> = text.split('\n').map(str::trim_end).collect();

    let Some(first) = segments.iter().position(|s| !s.is_empty()) else {
        return Vec::new();
    };
    let last = segments.iter().rposition(|s| !s.is_empty()).unwrap_or(first);

    segments[first..=last].to_vec()
}

/// Read-only table of all practicals keyed by id.
#[derive(Debug)]
pub struct Catalog {
    records: BTreeMap<PracticalId, PracticalRecord>,
}

impl Catalog {
    fn from_records(records: impl IntoIterator<Item = PracticalRecord>) -> Self {
        let mut map = BTreeMap::new();
        for record in records {
            let previous = map.insert(record.id, record);
            debug_assert!(previous.is_none(), "duplicate practical id in catalog");
        }
        Self { records: map }
    }

    /// Look up a practical by id.
    pub fn get(&self, id: PracticalId) -> Option<&PracticalRecord> {
        self.records.get(&id)
    }

    /// All practicals in id order.
    pub fn iter(&self) -> impl Iterator<Item = &PracticalRecord> {
        self.records.values()
    }

    /// Number of practicals.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog has no practicals.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::from_records(PRACTICALS));

/// The global practical catalog.
pub fn catalog() -> &'static Catalog {
    &CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_total_over_range() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 10);
        for id in PracticalId::all() {
            let record = catalog.get(id).expect("every id has a record");
            assert_eq!(record.id, id);
            assert!(!record.title.trim().is_empty());
            assert!(!record.description.trim().is_empty());
            assert!(!record.code.trim().is_empty());
            assert!(!record.paragraphs().is_empty());
        }
    }

    #[test]
    fn test_iter_is_in_id_order() {
        let ids: Vec<u8> = catalog().iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_paragraphs_trim_outer_blank_lines() {
        let text = "\nFirst line.\n\nSecond line.   \n    ";
        assert_eq!(paragraphs(text), vec!["First line.", "", "Second line."]);
    }

    #[test]
    fn test_paragraphs_keep_leading_indent() {
        let text = "- item\n  A ⊕ B\n";
        assert_eq!(paragraphs(text), vec!["- item", "  A ⊕ B"]);
    }

    #[test]
    fn test_paragraphs_handle_crlf_and_empty() {
        assert_eq!(paragraphs("a\r\nb\r\n"), vec!["a", "b"]);
        assert!(paragraphs("").is_empty());
        assert!(paragraphs("\n   \n\n").is_empty());
    }

    #[test]
    fn test_theory_has_no_surrounding_blank_paragraphs() {
        for record in catalog().iter() {
            let paragraphs = record.paragraphs();
            assert!(!paragraphs.first().unwrap().is_empty());
            assert!(!paragraphs.last().unwrap().is_empty());
        }
    }
}
