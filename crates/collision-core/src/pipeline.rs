//! Read, parse and render in one pass, and write or check the output

use crate::channels::parse_channels;
use crate::config::{DocConfig, SourceSet};
use crate::error::{Error, Result};
use crate::model::CollisionModel;
use crate::profiles::parse_profiles;
use crate::reader::read_rows;
use crate::render::render_document;
use crate::reuse::parse_reuse;
use std::fs;
use std::path::PathBuf;
use tracing::info;

/// Result of comparing the rendered document with the file on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate,
    Stale,
    Missing,
}

/// Parse all three sources into a model
pub fn load_model(sources: &SourceSet) -> Result<CollisionModel> {
    let catalog = parse_channels(&read_rows(&sources.channels)?);
    info!(
        path = %sources.channels.display(),
        trace = catalog.trace_channels.len(),
        object = catalog.object_channels.len(),
        "parsed channels"
    );

    let matrix = parse_profiles(&read_rows(&sources.profiles)?, &sources.profiles)?;
    info!(
        path = %sources.profiles.display(),
        profiles = matrix.profile_count(),
        "parsed profile matrix"
    );

    let reuse = parse_reuse(&read_rows(&sources.reuse)?);
    info!(path = %sources.reuse.display(), entries = reuse.len(), "parsed reuse mapping");

    Ok(CollisionModel {
        trace_channels: catalog.trace_channels,
        object_channels: catalog.object_channels,
        matrix,
        reuse,
    })
}

/// Render the document for a config without touching the output file
pub fn generate_document(config: &DocConfig) -> Result<String> {
    let model = load_model(&config.sources)?;
    Ok(render_document(&model, config))
}

/// Render and write the document to the configured output path
pub fn write_document(config: &DocConfig) -> Result<PathBuf> {
    let document = generate_document(config)?;
    let output = &config.sources.output;

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(output, document)?;
    info!(path = %output.display(), "wrote collision design document");

    Ok(output.clone())
}

/// Compare a freshly rendered document with the output file
pub fn check_document(config: &DocConfig) -> Result<CheckOutcome> {
    let document = generate_document(config)?;
    let output = &config.sources.output;

    let existing = match fs::read(output) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(CheckOutcome::Missing),
        Err(e) => return Err(Error::Io(e)),
    };

    if existing == document.as_bytes() {
        Ok(CheckOutcome::UpToDate)
    } else {
        Ok(CheckOutcome::Stale)
    }
}
