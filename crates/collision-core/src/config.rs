//! Document configuration: where the sources live and the prose around tables

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const CHANNELS_FILE: &str = "Trace Channels-Collision Channel.csv";
pub const PROFILES_FILE: &str = "Trace Channels-Collision Profile.csv";
pub const REUSE_FILE: &str = "Trace Channels-Profile Reuse.csv";
pub const OUTPUT_FILE: &str = "CollisionDesign.md";

/// Paths of the three CSV sources and the rendered document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceSet {
    pub channels: PathBuf,
    pub profiles: PathBuf,
    pub reuse: PathBuf,
    pub output: PathBuf,
}

impl Default for SourceSet {
    fn default() -> Self {
        Self {
            channels: PathBuf::from(CHANNELS_FILE),
            profiles: PathBuf::from(PROFILES_FILE),
            reuse: PathBuf::from(REUSE_FILE),
            output: PathBuf::from(OUTPUT_FILE),
        }
    }
}

impl SourceSet {
    /// Canonical file names inside `dir`
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::default().resolve_against(dir)
    }

    /// Join every relative path onto `base`
    pub fn resolve_against<P: AsRef<Path>>(self, base: P) -> Self {
        let base = base.as_ref();
        let join = |p: PathBuf| if p.is_absolute() { p } else { base.join(p) };
        Self {
            channels: join(self.channels),
            profiles: join(self.profiles),
            reuse: join(self.reuse),
            output: join(self.output),
        }
    }
}

/// Full configuration for one generated document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocConfig {
    pub sources: SourceSet,
    /// Directory quoted in the introduction as the home of the CSVs
    pub source_dir_label: String,
    /// Bullets under the design principles heading
    pub principles: Vec<String>,
    /// Trailing implementation notes; the section is omitted when empty
    pub notes: Vec<String>,
}

impl Default for DocConfig {
    fn default() -> Self {
        Self {
            sources: SourceSet::default(),
            source_dir_label: "Docs/Collision/".to_string(),
            principles: default_principles(),
            notes: Vec::new(),
        }
    }
}

impl DocConfig {
    /// Default configuration with the given sources
    pub fn with_sources(sources: SourceSet) -> Self {
        Self {
            sources,
            ..Self::default()
        }
    }

    /// Load a config file from JSON.
    ///
    /// Relative source paths resolve against the config file's directory.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::unreadable(path, e))?;
        let mut config: DocConfig = serde_json::from_str(&content)?;
        if let Some(dir) = path.parent() {
            config.sources = config.sources.resolve_against(dir);
        }
        Ok(config)
    }

    /// Save the config to JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

fn default_principles() -> Vec<String> {
    [
        "运行时切换“状态”只切换 Collision Profile；尽量避免逐个 ResponseToChannel 手动改。",
        "抓取/投射物检测都走固定的 Trace Channel（`Trace_Grab` / `Trace_Projectile`）。",
        "为“玩家手”单独定义 Object Channel（`Obj_PlayerHand`），用于背包/弓弦等交互区域的检测，避免用 Tag 分支。",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
