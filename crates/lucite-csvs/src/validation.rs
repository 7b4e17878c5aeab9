/*!
# CSV Validation & I/O

Reading an investor CSV is all-or-nothing: either every data row validates and
the caller gets the full ordered list, or the first bad row aborts the read
with every reason found on that row. Blank lines, including lines of only
whitespace or separators, are skipped and do not count as rows.
*/

use crate::{
    errors::{CsvError, CsvResult},
    schemas::{InvestorRecord, InvestorRow, INVESTOR_CSV_HEADERS},
};
use csv::{ReaderBuilder, StringRecord, Writer};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

// ================================================================================================
// CSV Reading with Validation
// ================================================================================================

/// Read and validate an investor CSV file
pub fn read_investor_csv<P: AsRef<Path>>(path: P) -> CsvResult<Vec<InvestorRecord>> {
    let file = File::open(path)?;
    parse_investor_csv(file)
}

/// Validate investor rows from any reader.
///
/// Records come back in file order, which is the order they get minted in.
/// A file with a header and no data rows yields an empty list.
pub fn parse_investor_csv<R: Read>(reader: R) -> CsvResult<Vec<InvestorRecord>> {
    // Flexible so blank separator-only lines reach the blank check
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    // Validate headers
    let headers = rdr.headers()?.clone();
    validate_headers(headers.iter(), INVESTOR_CSV_HEADERS, "investor csv")?;

    let mut records = Vec::new();
    let mut row_number = 0;

    for result in rdr.records() {
        let raw: StringRecord = result?;
        if is_blank(&raw) {
            continue;
        }
        row_number += 1;

        if raw.len() != headers.len() {
            return Err(CsvError::SchemaValidation(format!(
                "investor csv: row {} has {} fields, expected {}",
                row_number,
                raw.len(),
                headers.len()
            )));
        }

        let row: InvestorRow = raw.deserialize(Some(&headers))?;
        match row.validate() {
            Ok(record) => records.push(record),
            Err(reasons) => {
                return Err(CsvError::InvalidRow {
                    row_number,
                    row: serde_json::to_string(&RawRow {
                        headers: &headers,
                        record: &raw,
                    })?,
                    reasons,
                });
            }
        }
    }

    Ok(records)
}

/// True when every field is empty or whitespace
fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

/// A raw row rendered as a JSON object in the file's own column order
struct RawRow<'a> {
    headers: &'a StringRecord,
    record: &'a StringRecord,
}

impl Serialize for RawRow<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.headers.len()))?;
        for (header, value) in self.headers.iter().zip(self.record.iter()) {
            map.serialize_entry(header, value)?;
        }
        map.end()
    }
}

// ================================================================================================
// CSV Writing
// ================================================================================================

/// Write investor rows with the canonical header
pub fn write_investor_csv<P: AsRef<Path>>(path: P, rows: &[InvestorRow]) -> CsvResult<()> {
    let file = File::create(path)?;
    let mut wtr = Writer::from_writer(file);

    // csv crate writes the header from the first serialized row
    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}

// ================================================================================================
// Header Validation
// ================================================================================================

/// Every expected column present exactly once, nothing else. Order is free.
fn validate_headers<'a, I>(actual: I, expected: &[&str], file_type: &str) -> CsvResult<()>
where
    I: Iterator<Item = &'a str>,
{
    let mut seen = HashSet::new();

    for header in actual {
        if !expected.contains(&header) {
            return Err(CsvError::SchemaValidation(format!(
                "{}: unrecognized column '{}'",
                file_type, header
            )));
        }
        if !seen.insert(header) {
            return Err(CsvError::SchemaValidation(format!(
                "{}: duplicate column '{}'",
                file_type, header
            )));
        }
    }

    for header in expected {
        if !seen.contains(header) {
            return Err(CsvError::SchemaValidation(format!(
                "{}: missing required column '{}'",
                file_type, header
            )));
        }
    }

    Ok(())
}

// ================================================================================================
// Tests
// ================================================================================================
