//! Markdown renderer for the collision design document
//!
//! Rendering is a pure function of the model and config: the same inputs
//! always give byte-identical output.

use crate::config::DocConfig;
use crate::model::{CollisionModel, Profile};
use std::path::Path;

/// Escape a value for a pipe-delimited table cell
pub fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").trim().to_string()
}

/// Format one table row, escaping every cell
pub fn table_row(cells: &[&str]) -> String {
    let escaped: Vec<String> = cells.iter().map(|c| escape_cell(c)).collect();
    format!("| {} |", escaped.join(" | "))
}

/// Render the full document
pub fn render_document(model: &CollisionModel, config: &DocConfig) -> String {
    let channels_file = file_label(&config.sources.channels);
    let profiles_file = file_label(&config.sources.profiles);
    let reuse_file = file_label(&config.sources.reuse);

    let mut lines: Vec<String> = Vec::new();

    lines.push("# 碰撞设计（以 CSV 为准）".to_string());
    lines.push(String::new());
    lines.push(
        "本文用于在 UE 里配置 Collision Channel / Collision Profile，并作为后续代码改造的依据。"
            .to_string(),
    );
    lines.push(format!(
        "所有表格内容以 `{}` 目录下 3 个 CSV 为“唯一真相”，不要在文档里手改表格而不改 CSV：",
        config.source_dir_label
    ));
    lines.push(format!(
        "- `{channels_file}`：Channel 定义与语义（Ignore/Overlap/Block 的含义）"
    ));
    lines.push(format!("- `{profiles_file}`：各 Collision Profile 的响应矩阵"));
    lines.push(format!("- `{reuse_file}`：同一实体在不同状态下复用哪个 Profile"));
    lines.push(String::new());

    lines.push("## 设计原则".to_string());
    lines.extend(config.principles.iter().map(|p| format!("- {p}")));
    lines.push(String::new());

    render_channels(model, &channels_file, &mut lines);
    render_profiles(model, &profiles_file, &mut lines);

    lines.push(format!("## Profile 复用（来自 {reuse_file}）"));
    lines.push(String::new());
    lines.push("| 实体/状态 | 使用的 Profile |".to_string());
    lines.push("|---|---|".to_string());
    for entry in &model.reuse {
        lines.push(table_row(&[entry.entity_or_state.as_str(), entry.profile_name.as_str()]));
    }
    lines.push(String::new());

    if !config.notes.is_empty() {
        lines.push("## 实现注意事项（后续改代码时遵守）".to_string());
        lines.extend(config.notes.iter().map(|n| format!("- {n}")));
        lines.push(String::new());
    }

    lines.join("\n")
}

fn render_channels(model: &CollisionModel, source_file: &str, lines: &mut Vec<String>) {
    lines.push(format!("## Channel（来自 {source_file}）"));
    lines.push(String::new());

    lines.push("### Trace Channels".to_string());
    lines.push("| Name | Description | Ignore 语义 | Overlap 语义 | Block 语义 |".to_string());
    lines.push("|---|---|---|---|---|".to_string());
    for channel in &model.trace_channels {
        lines.push(table_row(&[
            channel.name.as_str(),
            channel.description.as_str(),
            channel.ignore_semantics.as_str(),
            channel.overlap_semantics.as_str(),
            channel.block_semantics.as_str(),
        ]));
    }
    lines.push(String::new());

    lines.push("### Object Channels".to_string());
    lines.push("| Name | Description |".to_string());
    lines.push("|---|---|".to_string());
    for channel in &model.object_channels {
        lines.push(table_row(&[channel.name.as_str(), channel.description.as_str()]));
    }
    lines.push(String::new());
}

fn render_profiles(model: &CollisionModel, source_file: &str, lines: &mut Vec<String>) {
    lines.push(format!("## Collision Profile（来自 {source_file}）"));
    lines.push(String::new());
    lines.push(
        "说明：下面每个 Profile 都列出 `Collision Enabled`、`Object Type`，以及对各 Channel 的 Response。"
            .to_string(),
    );
    lines.push(String::new());

    let channel_order = model.matrix.canonical_channel_order();
    for profile in model.matrix.iter() {
        render_profile(profile, &channel_order, lines);
    }
}

fn render_profile(profile: &Profile, channel_order: &[String], lines: &mut Vec<String>) {
    lines.push(format!("### {}", profile.name));
    lines.push(format!("- Collision Enabled: `{}`", profile.collision_enabled));
    lines.push(format!("- Object Type: `{}`", profile.object_type));
    lines.push(String::new());
    lines.push("| Channel | Response |".to_string());
    lines.push("|---|---|".to_string());
    for channel in channel_order {
        let response = profile.response(channel).unwrap_or("");
        lines.push(table_row(&[channel.as_str(), response]));
    }
    lines.push(String::new());
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
