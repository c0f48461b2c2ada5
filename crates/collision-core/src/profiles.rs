//! Parser for the collision profile matrix
//!
//! The header row names one profile per column. Body rows are keyed by their
//! first cell: `Collision Enabled` and `Object Type` set scalar attributes,
//! any other key is a channel name whose cells are per-profile responses.

use crate::error::{Error, Result};
use crate::model::{Profile, ProfileMatrix};
use crate::reader::{is_blank, Row};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

pub const COLLISION_ENABLED_KEY: &str = "Collision Enabled";
pub const OBJECT_TYPE_KEY: &str = "Object Type";

/// Parse profile matrix rows
///
/// `source` is only used to name the input in errors.
pub fn parse_profiles<P: AsRef<Path>>(rows: &[Row], source: P) -> Result<ProfileMatrix> {
    let (header, body) = rows.split_first().ok_or_else(|| Error::EmptyMatrix {
        path: source.as_ref().to_path_buf(),
    })?;

    let profile_names: Vec<String> = header
        .iter()
        .skip(1)
        .filter(|name| !name.is_empty())
        .cloned()
        .collect();

    let mut profiles: BTreeMap<String, Profile> = profile_names
        .iter()
        .map(|name| (name.clone(), Profile::new(name.clone())))
        .collect();

    for (row_idx, row) in body.iter().enumerate() {
        if is_blank(row) {
            continue;
        }
        let Some((key, values)) = row.split_first() else {
            continue;
        };
        if key.is_empty() {
            debug!(row = row_idx + 2, "skipping matrix row without a key");
            continue;
        }

        // Values align with profiles by column position; a short row leaves
        // the trailing profiles untouched for this key.
        for (name, value) in profile_names.iter().zip(values) {
            let Some(profile) = profiles.get_mut(name) else {
                continue;
            };
            match key.as_str() {
                COLLISION_ENABLED_KEY => profile.collision_enabled = value.clone(),
                OBJECT_TYPE_KEY => profile.object_type = value.clone(),
                channel => profile.set_response(channel, value.as_str()),
            }
        }
    }

    Ok(ProfileMatrix {
        profile_names,
        profiles,
    })
}
