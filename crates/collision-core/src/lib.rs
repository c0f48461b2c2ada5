//! collision-core: Core library for the collision design document
//!
//! This library provides functionality to:
//! - Read the collision CSV sources into trimmed rows
//! - Parse the channel catalog, profile matrix and profile reuse sheets
//! - Render the parsed model as a Markdown document
//! - Locate the sources on disk and write or check the rendered document

pub mod channels;
pub mod config;
pub mod discover;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod profiles;
pub mod reader;
pub mod render;
pub mod reuse;

pub use channels::{parse_channels, ChannelCatalog};
pub use config::{DocConfig, SourceSet};
pub use discover::discover_sources;
pub use error::{Error, Result};
pub use model::{CollisionModel, ObjectChannel, Profile, ProfileMatrix, ReuseEntry, TraceChannel};
pub use pipeline::{check_document, generate_document, load_model, write_document, CheckOutcome};
pub use profiles::parse_profiles;
pub use reader::{read_rows, read_rows_str, Row};
pub use render::{escape_cell, render_document};
pub use reuse::parse_reuse;
