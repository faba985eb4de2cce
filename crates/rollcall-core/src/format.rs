//! Reply rendering for lookup results.

use rollcall_models::StudentRecord;

/// Maximum number of student blocks per outgoing message.
///
/// Telegram caps messages at 4096 characters; 30 three-line blocks stays
/// under the cap.
pub const SECTION_CHUNK_SIZE: usize = 30;

/// Reply for a roll number with no matching record.
pub const ROLL_NOT_FOUND: &str = "Roll number not found.";

/// Renders a roll-number lookup result as a four-line reply.
pub fn format_student(record: Option<&StudentRecord>) -> String {
    match record {
        Some(r) => format!(
            "Name - {}\nRoll No - {}\nSection - {}\nHostel - {}",
            r.name, r.roll, r.section, r.hostel
        ),
        None => ROLL_NOT_FOUND.to_string(),
    }
}

/// Renders section results as chunked message strings.
///
/// Each record becomes a three-line block with a trailing blank line; blocks
/// are grouped into chunks of at most [`SECTION_CHUNK_SIZE`] and each chunk
/// joined into one string. The caller sends each returned string as a
/// separate message, in order. An empty input yields no chunks; the caller
/// decides the "section not found" reply.
pub fn format_section_results(records: &[&StudentRecord]) -> Vec<String> {
    let blocks: Vec<String> = records
        .iter()
        .map(|r| {
            format!(
                "Name - {}\nRoll No - {}\nHostel - {}\n",
                r.name, r.roll, r.hostel
            )
        })
        .collect();

    blocks
        .chunks(SECTION_CHUNK_SIZE)
        .map(|chunk| chunk.join("\n"))
        .collect()
}
