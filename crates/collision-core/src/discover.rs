//! Locate the three collision CSVs beneath a directory

use crate::config::{SourceSet, CHANNELS_FILE, OUTPUT_FILE, PROFILES_FILE, REUSE_FILE};
use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Walk `root` and pick the first file matching each canonical source name.
///
/// Entries are visited sorted by file name so the pick is stable. The output
/// path is always `root/CollisionDesign.md`.
pub fn discover_sources<P: AsRef<Path>>(root: P) -> Result<SourceSet> {
    let root = root.as_ref();
    let mut channels: Option<PathBuf> = None;
    let mut profiles: Option<PathBuf> = None;
    let mut reuse: Option<PathBuf> = None;

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let slot = match entry.file_name().to_str() {
            Some(CHANNELS_FILE) => &mut channels,
            Some(PROFILES_FILE) => &mut profiles,
            Some(REUSE_FILE) => &mut reuse,
            _ => continue,
        };
        if slot.is_none() {
            debug!(path = %entry.path().display(), "found collision source");
            *slot = Some(entry.into_path());
        }
    }

    let require = |found: Option<PathBuf>, name: &str| {
        found.ok_or_else(|| Error::SourceNotFound {
            name: name.to_string(),
            root: root.to_path_buf(),
        })
    };

    Ok(SourceSet {
        channels: require(channels, CHANNELS_FILE)?,
        profiles: require(profiles, PROFILES_FILE)?,
        reuse: require(reuse, REUSE_FILE)?,
        output: root.join(OUTPUT_FILE),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discover_nested_sources() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("Docs").join("Collision");
        fs::create_dir_all(&nested).unwrap();
        for name in [CHANNELS_FILE, PROFILES_FILE, REUSE_FILE] {
            fs::write(nested.join(name), "").unwrap();
        }
        fs::write(dir.path().join("unrelated.csv"), "").unwrap();

        let sources = discover_sources(dir.path()).unwrap();

        assert_eq!(sources.channels, nested.join(CHANNELS_FILE));
        assert_eq!(sources.profiles, nested.join(PROFILES_FILE));
        assert_eq!(sources.reuse, nested.join(REUSE_FILE));
        assert_eq!(sources.output, dir.path().join(OUTPUT_FILE));
    }

    #[test]
    fn test_discover_missing_source() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CHANNELS_FILE), "").unwrap();
        fs::write(dir.path().join(REUSE_FILE), "").unwrap();

        let err = discover_sources(dir.path()).unwrap_err();

        match err {
            Error::SourceNotFound { name, .. } => assert_eq!(name, PROFILES_FILE),
            other => panic!("unexpected error: {other}"),
        }
    }
}
