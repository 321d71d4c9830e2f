// src/conference/loader.rs

use std::collections::HashSet;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, warn};

use crate::conference::record::Conference;
use crate::errors::{ConfdagError, Result};
use crate::fs::FileSystem;

/// Number of fields in every input line:
/// `name,area,submission_deadline,notification_date,page,column`.
pub const FIELDS_PER_LINE: usize = 6;

/// Read and parse the conference CSV at `path`.
pub fn load_conferences(fs: &dyn FileSystem, path: &Path) -> Result<Vec<Conference>> {
    let contents = fs.read_to_string(path)?;
    let conferences = parse_conferences(&contents)?;
    debug!(path = ?path, count = conferences.len(), "loaded conferences");
    Ok(conferences)
}

/// Parse headerless CSV text into conference records.
///
/// Each line is trimmed, then split on commas with no quoting or escaping.
/// The first bad line aborts the whole parse; nothing is skipped, blank
/// lines included.
pub fn parse_conferences(contents: &str) -> Result<Vec<Conference>> {
    let mut conferences = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (idx, raw) in contents.lines().enumerate() {
        let line = idx + 1;
        let record = split_line(raw.trim())?;

        let conference =
            parse_record(&record).map_err(|message| ConfdagError::Parse { line, message })?;

        if !seen.insert(conference.name().to_string()) {
            return Err(ConfdagError::Parse {
                line,
                message: format!("duplicate conference name '{}'", conference.name()),
            });
        }

        if !conference.has_valid_window() {
            warn!(
                conference = conference.name(),
                line,
                "notification date does not follow the submission deadline"
            );
        }

        conferences.push(conference);
    }

    Ok(conferences)
}

/// Split one trimmed line into its fields. A blank line is one empty field.
fn split_line(line: &str) -> Result<StringRecord> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::None)
        .from_reader(line.as_bytes());

    let mut record = StringRecord::new();
    if !reader.read_record(&mut record)? {
        record.push_field("");
    }
    Ok(record)
}

fn parse_record(record: &StringRecord) -> std::result::Result<Conference, String> {
    if record.len() != FIELDS_PER_LINE {
        return Err(format!(
            "expected {} fields, found {}",
            FIELDS_PER_LINE,
            record.len()
        ));
    }

    let name = &record[0];
    if name.is_empty() {
        return Err("conference name must not be empty".to_string());
    }

    Conference::new(
        name,
        &record[1],
        &record[4],
        &record[5],
        &record[2],
        &record[3],
    )
    .map_err(|err| err.to_string())
}
