//! Parser for the channel catalog sheet
//!
//! The sheet holds two tables stacked vertically. A row whose first cell is
//! `Trace Channels` or `Object Channels` switches the current section; the
//! same row is then read as data like any other row in that section.

use crate::model::{ObjectChannel, TraceChannel};
use crate::reader::{cell, is_blank, Row};
use tracing::debug;

pub const TRACE_SECTION: &str = "Trace Channels";
pub const OBJECT_SECTION: &str = "Object Channels";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Trace,
    Object,
}

impl Section {
    fn from_marker(first_cell: &str) -> Option<Self> {
        match first_cell {
            TRACE_SECTION => Some(Section::Trace),
            OBJECT_SECTION => Some(Section::Object),
            _ => None,
        }
    }
}

/// Trace and object channels in sheet order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChannelCatalog {
    pub trace_channels: Vec<TraceChannel>,
    pub object_channels: Vec<ObjectChannel>,
}

/// Parse channel catalog rows
pub fn parse_channels(rows: &[Row]) -> ChannelCatalog {
    let mut catalog = ChannelCatalog::default();
    let mut section: Option<Section> = None;

    for (row_idx, row) in rows.iter().enumerate() {
        if is_blank(row) {
            continue;
        }
        if let Some(marker) = Section::from_marker(cell(row, 0)) {
            section = Some(marker);
        }

        let name = cell(row, 1);
        match section {
            Some(_) if name.is_empty() => {
                debug!(row = row_idx + 1, "skipping channel row without a name");
            }
            Some(Section::Trace) => catalog.trace_channels.push(TraceChannel {
                name: name.to_string(),
                description: cell(row, 2).to_string(),
                ignore_semantics: cell(row, 3).to_string(),
                overlap_semantics: cell(row, 4).to_string(),
                block_semantics: cell(row, 5).to_string(),
            }),
            Some(Section::Object) => catalog.object_channels.push(ObjectChannel {
                name: name.to_string(),
                description: cell(row, 2).to_string(),
            }),
            None => {
                debug!(row = row_idx + 1, "skipping row before any section marker");
            }
        }
    }

    catalog
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reader::read_rows_str;

    fn parse(csv: &str) -> ChannelCatalog {
        parse_channels(&read_rows_str(csv, "channels.csv").unwrap())
    }

    #[test]
    fn test_parse_both_sections() {
        let catalog = parse(
            "Trace Channels\n\
             Trace Channels,Trace_Grab,Grab trace,Ignore,CanGrab,Block\n\
             Object Channels\n\
             Object Channels,Obj_PlayerHand,Player hand volume\n",
        );

        assert_eq!(catalog.trace_channels.len(), 1);
        let grab = &catalog.trace_channels[0];
        assert_eq!(grab.name, "Trace_Grab");
        assert_eq!(grab.description, "Grab trace");
        assert_eq!(grab.ignore_semantics, "Ignore");
        assert_eq!(grab.overlap_semantics, "CanGrab");
        assert_eq!(grab.block_semantics, "Block");

        assert_eq!(catalog.object_channels.len(), 1);
        assert_eq!(catalog.object_channels[0].name, "Obj_PlayerHand");
        assert_eq!(catalog.object_channels[0].description, "Player hand volume");
    }

    #[test]
    fn test_marker_row_without_name_adds_nothing() {
        let catalog = parse("Trace Channels,,,,\n,Trace_A,first\n");

        assert_eq!(catalog.trace_channels.len(), 1);
        assert_eq!(catalog.trace_channels[0].name, "Trace_A");
    }

    #[test]
    fn test_preserves_order_across_blank_rows() {
        let catalog = parse(
            "Trace Channels\n\
             ,Trace_B,b\n\
             ,,,\n\
             ,Trace_A,a\n\
             Object Channels\n\
             ,Obj_Z,z\n\
             ,,\n\
             ,Obj_Y,y\n",
        );

        let trace: Vec<&str> = catalog.trace_channels.iter().map(|c| c.name.as_str()).collect();
        let object: Vec<&str> = catalog.object_channels.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(trace, vec!["Trace_B", "Trace_A"]);
        assert_eq!(object, vec!["Obj_Z", "Obj_Y"]);
    }

    #[test]
    fn test_empty_name_with_description_dropped() {
        let catalog = parse("Trace Channels\n,,only a description,Ignore\n");

        assert!(catalog.trace_channels.is_empty());
    }

    #[test]
    fn test_rows_before_marker_ignored() {
        let catalog = parse("Header,Name,Desc\n,Stray,row\nObject Channels\n,Obj_A,a\n");

        assert!(catalog.trace_channels.is_empty());
        assert_eq!(catalog.object_channels.len(), 1);
    }

    #[test]
    fn test_short_trace_row_pads_with_empty() {
        let catalog = parse("Trace Channels\n,Trace_Short\n");

        let channel = &catalog.trace_channels[0];
        assert_eq!(channel.name, "Trace_Short");
        assert_eq!(channel.description, "");
        assert_eq!(channel.block_semantics, "");
    }

    #[test]
    fn test_section_can_switch_back() {
        let catalog = parse(
            "Object Channels\n,Obj_A,a\nTrace Channels\n,Trace_A,a\nObject Channels\n,Obj_B,b\n",
        );

        assert_eq!(catalog.trace_channels.len(), 1);
        assert_eq!(catalog.object_channels.len(), 2);
    }
}
