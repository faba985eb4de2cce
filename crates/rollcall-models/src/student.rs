//! Student roster records.

use serde::{Deserialize, Serialize};

/// One row of the student roster.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Roll number, 5-9 decimal digits. Kept as a string so leading zeros
    /// are significant and lookups compare exactly.
    pub roll: String,

    /// Student name.
    pub name: String,

    /// Section label, e.g. `CSE-01`.
    pub section: String,

    /// Hostel name.
    pub hostel: String,
}

impl StudentRecord {
    /// Creates a new student record.
    pub fn new(
        roll: impl Into<String>,
        name: impl Into<String>,
        section: impl Into<String>,
        hostel: impl Into<String>,
    ) -> Self {
        Self {
            roll: roll.into(),
            name: name.into(),
            section: section.into(),
            hostel: hostel.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_record_creation() {
        let record = StudentRecord::new("22051712", "Asha", "CSE-01", "H1");

        assert_eq!(record.roll, "22051712");
        assert_eq!(record.name, "Asha");
        assert_eq!(record.section, "CSE-01");
        assert_eq!(record.hostel, "H1");
    }

    #[test]
    fn test_roll_preserves_leading_zeros() {
        let record = StudentRecord::new("00517", "Ravi", "CSE-02", "H2");
        assert_eq!(record.roll, "00517");
    }

    #[test]
    fn test_student_record_serialization_roundtrip() {
        let record = StudentRecord::new("22051712", "Asha", "CSE-01", "H1");

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: StudentRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
