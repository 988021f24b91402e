// ABOUTME: Type definitions for idea generation
// ABOUTME: Defines project categories, generated ideas, saved ideas, and generation filters

use chrono::{DateTime, Utc};
use devspark_core::Difficulty;
use serde::{Deserialize, Serialize};

/// Category of a project template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectCategory {
    Web,
    Mobile,
    Game,
    Api,
    Tool,
}

impl ProjectCategory {
    /// All catalog categories, in catalog order
    pub const ALL: [ProjectCategory; 5] = [
        ProjectCategory::Web,
        ProjectCategory::Mobile,
        ProjectCategory::Game,
        ProjectCategory::Api,
        ProjectCategory::Tool,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectCategory::Web => "web",
            ProjectCategory::Mobile => "mobile",
            ProjectCategory::Game => "game",
            ProjectCategory::Api => "api",
            ProjectCategory::Tool => "tool",
        }
    }

    /// Parse a category key; unknown keys yield `None`
    pub fn parse(key: &str) -> Option<ProjectCategory> {
        match key {
            "web" => Some(ProjectCategory::Web),
            "mobile" => Some(ProjectCategory::Mobile),
            "game" => Some(ProjectCategory::Game),
            "api" => Some(ProjectCategory::Api),
            "tool" => Some(ProjectCategory::Tool),
            _ => None,
        }
    }
}

impl std::fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One generated project idea, immutable once returned
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdea {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Recommended technologies, at most 6, in composition order
    pub stack: Vec<String>,
    pub difficulty: Difficulty,
    pub features: Vec<String>,
    pub time_estimate: String,
    pub category: ProjectCategory,
    /// At most 8 tags
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

/// An idea the user chose to keep, produced by the caller, never by the engine
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedIdea {
    #[serde(flatten)]
    pub idea: ProjectIdea,
    pub saved_at: DateTime<Utc>,
    pub is_favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Optional overrides for one generation call
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Difficulty>,
    /// Category key; unknown keys fall back to the `web` catalog
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_estimate: Option<String>,
}
