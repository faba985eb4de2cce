//! Student roster lookups.

use rollcall_models::StudentRecord;
use tracing::debug;

/// Prefix combined with a zero-padded section code to form the match token.
const SECTION_PREFIX: &str = "CSE-";

/// The student roster, immutable after construction.
///
/// Reads are side-effect-free, so the directory can be shared across
/// handlers without any locking.
#[derive(Debug, Default)]
pub struct StudentDirectory {
    records: Vec<StudentRecord>,
}

impl StudentDirectory {
    /// Builds a directory from records in load order.
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    /// Number of records in the roster.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Finds a student by exact roll number.
    ///
    /// Roll uniqueness is assumed, not enforced: on a duplicate, the first
    /// match in load order wins.
    pub fn find_by_roll(&self, roll: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|r| r.roll == roll)
    }

    /// Lists every student in the section named by `digits`.
    ///
    /// The code is zero-padded to two digits, so `"1"` and `"01"` are the
    /// same query. A record matches when its section field *contains* the
    /// `CSE-NN` token as a substring, not only on exact equality. Results
    /// sort ascending by roll number compared as strings.
    pub fn find_by_section(&self, digits: &str) -> Vec<&StudentRecord> {
        let token = format!("{}{:0>2}", SECTION_PREFIX, digits);

        let mut matches: Vec<&StudentRecord> = self
            .records
            .iter()
            .filter(|r| r.section.contains(&token))
            .collect();
        matches.sort_by(|a, b| a.roll.cmp(&b.roll));

        debug!(token = %token, count = matches.len(), "section lookup");
        matches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> StudentDirectory {
        StudentDirectory::new(vec![
            StudentRecord::new("22051799", "Bina", "CSE-01", "H2"),
            StudentRecord::new("22051701", "Asha", "CSE-01", "H1"),
            StudentRecord::new("220517100", "Chand", "CSE-01", "H3"),
            StudentRecord::new("22052201", "Dev", "CSE-02", "H1"),
        ])
    }

    #[test]
    fn test_find_by_roll_exact_match() {
        let dir = directory();
        let record = dir.find_by_roll("22051701").unwrap();
        assert_eq!(record.name, "Asha");
    }

    #[test]
    fn test_find_by_roll_missing() {
        let dir = directory();
        assert!(dir.find_by_roll("99999999").is_none());
    }

    #[test]
    fn test_find_by_roll_is_deterministic() {
        let dir = directory();
        let first = dir.find_by_roll("22051701").cloned();
        let second = dir.find_by_roll("22051701").cloned();
        assert_eq!(first, second);
    }

    #[test]
    fn test_find_by_roll_first_match_wins_on_duplicate() {
        let dir = StudentDirectory::new(vec![
            StudentRecord::new("22051701", "First", "CSE-01", "H1"),
            StudentRecord::new("22051701", "Second", "CSE-01", "H2"),
        ]);
        assert_eq!(dir.find_by_roll("22051701").unwrap().name, "First");
    }

    #[test]
    fn test_find_by_section_zero_pads() {
        let dir = directory();
        let bare = dir.find_by_section("1");
        let padded = dir.find_by_section("01");
        assert_eq!(bare, padded);
        assert_eq!(bare.len(), 3);
    }

    #[test]
    fn test_find_by_section_sorts_rolls_as_strings() {
        let dir = directory();
        let rolls: Vec<&str> = dir
            .find_by_section("1")
            .iter()
            .map(|r| r.roll.as_str())
            .collect();
        // "220517100" is numerically largest but sorts between the other two
        // under string comparison.
        assert_eq!(rolls, vec!["22051701", "220517100", "22051799"]);
    }

    #[test]
    fn test_find_by_section_no_matches() {
        let dir = directory();
        assert!(dir.find_by_section("9").is_empty());
    }

    #[test]
    fn test_find_by_section_substring_containment() {
        // A CSE-010 record contains the CSE-01 token and so matches a
        // section 01 query. Deliberate: matching is containment, not
        // equality.
        let dir = StudentDirectory::new(vec![
            StudentRecord::new("22051701", "Asha", "CSE-01", "H1"),
            StudentRecord::new("22051901", "Esha", "CSE-010", "H1"),
        ]);
        assert_eq!(dir.find_by_section("1").len(), 2);
        // "10" builds the token CSE-10, which CSE-010 does not contain, so
        // that record is only reachable through the section 01 query.
        assert!(dir.find_by_section("10").is_empty());
    }
}
