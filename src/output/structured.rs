//! Machine readable search results (JSON and CSV)

use super::OutputError;
use crate::config::SettingEnum;
use crate::search::SearchResult;
use crate::track::{TagField, format_duration};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct JsonResult<'r, 'a> {
    index: usize,
    path: &'a str,
    /// Playing time as `M:SS` or `H:MM:SS`
    duration: Option<String>,
    fields: JsonFields<'r, 'a>,
}

#[derive(Serialize)]
struct JsonCell<'r> {
    value: Option<&'r str>,
    matched: bool,
}

/// Every column keyed by nick, in display order
struct JsonFields<'r, 'a>(&'r SearchResult<'a>);

impl Serialize for JsonFields<'_, '_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TagField::ALL.len()))?;
        for field in TagField::ALL {
            let cell = JsonCell {
                value: self.0.display(field),
                matched: self.0.is_match(field),
            };
            map.serialize_entry(field.nick(), &cell)?;
        }
        map.end()
    }
}

/// Pretty printed JSON array, one object per result
///
/// # Errors
///
/// Returns `OutputError` if serialization or writing fails.
pub fn write_json<W: Write>(results: &[SearchResult<'_>], out: &mut W) -> Result<(), OutputError> {
    let rows: Vec<JsonResult<'_, '_>> = results
        .iter()
        .map(|result| JsonResult {
            index: result.index,
            path: &result.record().filename,
            duration: result.record().duration_secs.map(format_duration),
            fields: JsonFields(result),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &rows)?;
    writeln!(out)?;
    Ok(())
}

/// CSV with a header row of column headers
///
/// # Errors
///
/// Returns `OutputError` if writing fails.
pub fn write_csv<W: Write>(
    results: &[SearchResult<'_>],
    columns: &[TagField],
    out: &mut W,
) -> Result<(), OutputError> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(columns.iter().map(|field| field.header()))?;

    for result in results {
        writer.write_record(
            columns
                .iter()
                .map(|field| result.display(*field).unwrap_or_default()),
        )?;
    }
    writer.flush()?;
    Ok(())
}
