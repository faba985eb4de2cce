//! Roster loading from an Excel workbook.
//!
//! The roster is a single worksheet with a header row naming the columns
//! `roll`, `name`, `section`, `hostel` (any order, any case). Column
//! positions are resolved once from the header; rows become fixed-shape
//! [`StudentRecord`]s with no per-row column lookup.

use std::path::Path;

use calamine::{open_workbook, Data, Reader, Xlsx};
use rollcall_models::StudentRecord;
use tracing::warn;

use crate::error::{PersistenceError, Result};

/// Required header columns, in record-field order.
const COLUMNS: [&str; 4] = ["roll", "name", "section", "hostel"];

/// Loads the full roster from the workbook at `path`.
///
/// Reads the first worksheet. Fails if the workbook cannot be opened, has
/// no worksheet, or the header row is missing a required column; data rows
/// with an empty roll cell are skipped with a warning.
pub fn load_roster(path: &Path) -> Result<Vec<StudentRecord>> {
    let mut workbook: Xlsx<_> =
        open_workbook(path).map_err(|e: calamine::XlsxError| PersistenceError::WorkbookError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| PersistenceError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| PersistenceError::WorkbookError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let header = rows.next().ok_or(PersistenceError::MissingColumn {
        column: COLUMNS[0],
    })?;
    let columns = resolve_columns(header)?;

    let mut records = Vec::new();
    for (i, row) in rows.enumerate() {
        match record_from_row(row, &columns) {
            Some(record) => records.push(record),
            // +2: rows are 1-based in the sheet and the header is row 1.
            None => warn!(row = i + 2, "skipping roster row with empty roll"),
        }
    }
    Ok(records)
}

/// Resolves the header row to column indices for [`COLUMNS`].
fn resolve_columns(header: &[Data]) -> Result<[usize; 4]> {
    let mut indices = [0usize; 4];
    for (slot, column) in COLUMNS.iter().enumerate() {
        indices[slot] = header
            .iter()
            .position(|cell| cell_to_string(cell).eq_ignore_ascii_case(column))
            .ok_or(PersistenceError::MissingColumn { column })?;
    }
    Ok(indices)
}

/// Builds a record from one data row, or `None` if the roll cell is empty.
fn record_from_row(row: &[Data], columns: &[usize; 4]) -> Option<StudentRecord> {
    let cell = |slot: usize| {
        row.get(columns[slot])
            .map(cell_to_string)
            .unwrap_or_default()
    };

    let roll = cell(0);
    if roll.is_empty() {
        return None;
    }
    Some(StudentRecord::new(roll, cell(1), cell(2), cell(3)))
}

/// Coerces a cell to its string form.
///
/// Roll numbers must stay strings: text cells pass through unchanged so
/// leading zeros survive, and numeric cells print without a decimal point
/// when they hold a whole number (Excel stores roll numbers as floats like
/// `22051712.0`).
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(d) => d.to_string(),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
        Data::Error(_) | Data::Empty => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> Vec<Data> {
        vec![
            Data::String("roll".to_string()),
            Data::String("name".to_string()),
            Data::String("section".to_string()),
            Data::String("hostel".to_string()),
        ]
    }

    #[test]
    fn test_cell_coercion_whole_float() {
        assert_eq!(cell_to_string(&Data::Float(22051712.0)), "22051712");
    }

    #[test]
    fn test_cell_coercion_string_preserves_leading_zeros() {
        assert_eq!(cell_to_string(&Data::String("00517".to_string())), "00517");
    }

    #[test]
    fn test_cell_coercion_trims_text() {
        assert_eq!(cell_to_string(&Data::String(" CSE-01 ".to_string())), "CSE-01");
    }

    #[test]
    fn test_cell_coercion_empty_cell() {
        assert_eq!(cell_to_string(&Data::Empty), "");
    }

    #[test]
    fn test_resolve_columns_in_order() {
        let columns = resolve_columns(&header()).unwrap();
        assert_eq!(columns, [0, 1, 2, 3]);
    }

    #[test]
    fn test_resolve_columns_reordered_and_cased() {
        let shuffled = vec![
            Data::String("Name".to_string()),
            Data::String("HOSTEL".to_string()),
            Data::String("roll".to_string()),
            Data::String("Section".to_string()),
        ];
        let columns = resolve_columns(&shuffled).unwrap();
        assert_eq!(columns, [2, 0, 3, 1]);
    }

    #[test]
    fn test_resolve_columns_missing() {
        let partial = vec![
            Data::String("roll".to_string()),
            Data::String("name".to_string()),
        ];
        let err = resolve_columns(&partial).unwrap_err();
        assert!(matches!(
            err,
            PersistenceError::MissingColumn { column: "section" }
        ));
    }

    #[test]
    fn test_record_from_row_coerces_numeric_roll() {
        let columns = resolve_columns(&header()).unwrap();
        let row = vec![
            Data::Float(22051712.0),
            Data::String("Asha".to_string()),
            Data::String("CSE-01".to_string()),
            Data::String("H1".to_string()),
        ];

        let record = record_from_row(&row, &columns).unwrap();
        assert_eq!(record.roll, "22051712");
        assert_eq!(record.name, "Asha");
    }

    #[test]
    fn test_record_from_row_empty_roll_skipped() {
        let columns = resolve_columns(&header()).unwrap();
        let row = vec![
            Data::Empty,
            Data::String("Asha".to_string()),
            Data::String("CSE-01".to_string()),
            Data::String("H1".to_string()),
        ];

        assert!(record_from_row(&row, &columns).is_none());
    }

    #[test]
    fn test_record_from_row_short_row() {
        let columns = resolve_columns(&header()).unwrap();
        let row = vec![Data::String("22051712".to_string())];

        let record = record_from_row(&row, &columns).unwrap();
        assert_eq!(record.roll, "22051712");
        assert_eq!(record.hostel, "");
    }
}
