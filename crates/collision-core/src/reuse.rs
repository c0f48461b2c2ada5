//! Parser for the profile reuse sheet

use crate::model::ReuseEntry;
use crate::reader::{cell, is_blank, Row};
use tracing::debug;

/// Header labels marking the sheet's title row, matched verbatim
pub const REUSE_HEADER_SENTINELS: &[&str] = &["Profile完全复用", "Profile复用"];

/// Parse reuse mapping rows
pub fn parse_reuse(rows: &[Row]) -> Vec<ReuseEntry> {
    let mut entries = Vec::new();

    for (row_idx, row) in rows.iter().enumerate() {
        if is_blank(row) {
            continue;
        }
        let entity = cell(row, 0);
        if REUSE_HEADER_SENTINELS.contains(&entity) {
            continue;
        }
        let profile = cell(row, 1);
        if entity.is_empty() || profile.is_empty() {
            debug!(row = row_idx + 1, "skipping incomplete reuse row");
            continue;
        }
        entries.push(ReuseEntry {
            entity_or_state: entity.to_string(),
            profile_name: profile.to_string(),
        });
    }

    entries
}
