// ABOUTME: Export surface for generated ideas
// ABOUTME: Emits the stable JSON shape plus a plain-text share fallback

use crate::error::Result;
use crate::types::{ProjectCategory, ProjectIdea};
use devspark_core::Difficulty;
use serde::{Deserialize, Serialize};

/// The stable exported shape of an idea
///
/// Field set and casing are a compatibility contract; existing exports must
/// keep round-tripping.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaExport {
    pub title: String,
    pub description: String,
    pub stack: Vec<String>,
    pub features: Vec<String>,
    pub time_estimate: String,
    pub difficulty: Difficulty,
    pub category: ProjectCategory,
}

impl From<&ProjectIdea> for IdeaExport {
    fn from(idea: &ProjectIdea) -> Self {
        Self {
            title: idea.title.clone(),
            description: idea.description.clone(),
            stack: idea.stack.clone(),
            features: idea.features.clone(),
            time_estimate: idea.time_estimate.clone(),
            difficulty: idea.difficulty,
            category: idea.category,
        }
    }
}

/// Export content with download metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResult {
    pub content: String,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: usize,
}

/// Serialize an idea to its formatted JSON export
pub fn export_idea(idea: &ProjectIdea) -> Result<ExportResult> {
    let content = serde_json::to_string_pretty(&IdeaExport::from(idea))?;
    let size_bytes = content.len();

    Ok(ExportResult {
        content,
        file_name: format!("{}.json", file_stem(&idea.title)),
        mime_type: "application/json".to_string(),
        size_bytes,
    })
}

/// Plain-text form of an idea for clipboard sharing
pub fn share_text(idea: &ProjectIdea) -> String {
    format!(
        "{}\n\n{}\n\nTech Stack: {}",
        idea.title,
        idea.description,
        idea.stack.join(", ")
    )
}

fn file_stem(title: &str) -> String {
    title
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
        .to_lowercase()
}
