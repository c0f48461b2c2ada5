//! Row reader for the collision CSV sources
//!
//! Every source is read fully, decoded, tokenised with the `csv` crate and
//! returned as rows of trimmed cells. Rows are never filtered here: an empty
//! physical line comes back as an empty row, even though the `csv` reader
//! itself skips such lines.

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// A single CSV row with whitespace-trimmed cells
pub type Row = Vec<String>;

const UTF8_BOM: &[u8; 3] = b"\xEF\xBB\xBF";
const UTF16_LE_BOM: &[u8; 2] = b"\xFF\xFE";
const UTF16_BE_BOM: &[u8; 2] = b"\xFE\xFF";

/// Read a CSV file into rows
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Row>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::unreadable(path, e))?;
    let content = decode(&bytes).map_err(|reason| Error::unreadable(path, reason))?;
    tokenize(&content, path)
}

/// Read CSV rows from a string (useful for testing)
pub fn read_rows_str(content: &str, source_name: &str) -> Result<Vec<Row>> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    tokenize(content, Path::new(source_name))
}

/// Get a cell by column index; columns past the end of the row read as empty
pub fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}

/// Check whether every cell in the row is empty
pub fn is_blank(row: &[String]) -> bool {
    row.iter().all(|c| c.is_empty())
}

fn tokenize(content: &str, source: &Path) -> Result<Vec<Row>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true) // Sheets pad rows to different widths
        .from_reader(content.as_bytes());
    let mut records = csv_reader.records();

    let mut rows = Vec::new();
    for empty_line in line_layout(content) {
        if empty_line {
            rows.push(Row::new());
            continue;
        }
        let Some(result) = records.next() else {
            break;
        };
        let record = result.map_err(|e| Error::unreadable(source, e))?;
        rows.push(record.iter().map(|c| c.trim().to_string()).collect());
    }

    Ok(rows)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum LineState {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

/// One entry per CSV line, `true` when the line is empty.
///
/// Lines end at `\n`, `\r` or `\r\n` outside a quoted field; a quote only
/// opens a quoted field at the start of a field, as in the `csv` reader.
fn line_layout(content: &str) -> Vec<bool> {
    let mut layout = Vec::new();
    let mut state = LineState::FieldStart;
    let mut line_empty = true;
    let mut chars = content.chars().peekable();

    while let Some(ch) = chars.next() {
        let terminator = matches!(ch, '\n' | '\r') && state != LineState::Quoted;
        if terminator {
            if ch == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            layout.push(line_empty);
            line_empty = true;
            state = LineState::FieldStart;
            continue;
        }

        line_empty = false;
        state = match (state, ch) {
            (LineState::Quoted, '"') => LineState::QuoteInQuoted,
            (LineState::Quoted, _) => LineState::Quoted,
            (LineState::QuoteInQuoted, '"') => LineState::Quoted,
            (LineState::FieldStart, '"') => LineState::Quoted,
            (_, ',') => LineState::FieldStart,
            _ => LineState::Unquoted,
        };
    }
    if !line_empty {
        layout.push(false);
    }

    layout
}

/// Decode raw bytes, honouring a UTF-8 or UTF-16 byte-order mark
fn decode(bytes: &[u8]) -> std::result::Result<String, String> {
    if let Some(rest) = bytes.strip_prefix(UTF8_BOM) {
        return String::from_utf8(rest.to_vec()).map_err(|e| e.to_string());
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_LE_BOM) {
        return decode_utf16(rest, u16::from_le_bytes);
    }
    if let Some(rest) = bytes.strip_prefix(UTF16_BE_BOM) {
        return decode_utf16(rest, u16::from_be_bytes);
    }
    String::from_utf8(bytes.to_vec()).map_err(|e| e.to_string())
}

fn decode_utf16(bytes: &[u8], unit: fn([u8; 2]) -> u16) -> std::result::Result<String, String> {
    if bytes.len() % 2 != 0 {
        return Err("truncated UTF-16 input".to_string());
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| unit([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|e| e.to_string())
}
