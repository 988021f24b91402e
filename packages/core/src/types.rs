// ABOUTME: Profile type definitions for DevSpark
// ABOUTME: Defines the user profile, declared technologies, and imported external projects

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How the user learned (or is learning) to code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeveloperType {
    SelfTaught,
    Bootcamp,
    Professional,
    Student,
}

/// Overall skill level, also used as the difficulty of a generated idea
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Broad grouping of a declared technology
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TechCategory {
    Frontend,
    Backend,
    Database,
    Mobile,
    Devops,
    AiMl,
    Other,
}

/// Self-declared comfort with a single technology, distinct from overall skill level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    Learning,
    Familiar,
    Proficient,
    Expert,
}

/// One technology the user has declared, identified by `name` within a profile
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechStack {
    pub name: String,
    pub category: TechCategory,
    pub proficiency: Proficiency,
    /// 0-100 usage score, display-only annotation from the popularity table
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u8>,
}

/// Linked social account provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialProvider {
    Github,
    Gmail,
    Linkedin,
    Discord,
}

/// A linked (or linkable) social account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialConnection {
    pub provider: SocialProvider,
    pub connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Technologies imported from one external project resource, tagged with its source URL
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExternalProject {
    pub id: String,
    pub name: String,
    pub api_url: String,
    pub technologies: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_fetched: Option<DateTime<Utc>>,
}

/// The full user profile collected by the setup wizard
///
/// The idea engine treats this as read-only input. `stacks` must be non-empty
/// for idea generation to be meaningful; see `validation::validate_profile`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub developer_type: DeveloperType,
    pub skill_level: Difficulty,
    pub stacks: Vec<TechStack>,
    pub interests: Vec<String>,
    pub goals: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_connections: Option<Vec<SocialConnection>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_projects: Option<Vec<ExternalProject>>,
}

impl UserProfile {
    /// Names of all declared technologies, in declared order
    pub fn technology_names(&self) -> Vec<String> {
        self.stacks.iter().map(|stack| stack.name.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_wire_format() {
        assert_eq!(
            serde_json::to_string(&Difficulty::Beginner).unwrap(),
            "\"beginner\""
        );
        let parsed: Difficulty = serde_json::from_str("\"advanced\"").unwrap();
        assert_eq!(parsed, Difficulty::Advanced);
    }

    #[test]
    fn test_tech_category_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TechCategory::AiMl).unwrap(),
            "\"ai-ml\""
        );
        assert_eq!(
            serde_json::to_string(&TechCategory::Frontend).unwrap(),
            "\"frontend\""
        );
    }

    #[test]
    fn test_developer_type_kebab_case() {
        assert_eq!(
            serde_json::to_string(&DeveloperType::SelfTaught).unwrap(),
            "\"self-taught\""
        );
    }

    #[test]
    fn test_tech_stack_camel_case_fields() {
        let json = r#"{"name":"React","category":"frontend","proficiency":"proficient","popularity":85}"#;
        let stack: TechStack = serde_json::from_str(json).unwrap();
        assert_eq!(stack.name, "React");
        assert_eq!(stack.popularity, Some(85));
    }

    #[test]
    fn test_external_project_camel_case_fields() {
        let project = ExternalProject {
            id: "p1".to_string(),
            name: "Project 1".to_string(),
            api_url: "https://api.github.com/repos/a/b".to_string(),
            technologies: vec!["React".to_string()],
            last_fetched: None,
        };
        let json = serde_json::to_string(&project).unwrap();
        assert!(json.contains("\"apiUrl\""));
        assert!(!json.contains("lastFetched"));
    }

    #[test]
    fn test_technology_names_preserves_declared_order() {
        let profile = UserProfile {
            id: "u1".to_string(),
            developer_type: DeveloperType::SelfTaught,
            skill_level: Difficulty::Beginner,
            stacks: vec![
                TechStack {
                    name: "React".to_string(),
                    category: TechCategory::Frontend,
                    proficiency: Proficiency::Learning,
                    popularity: None,
                },
                TechStack {
                    name: "Node.js".to_string(),
                    category: TechCategory::Backend,
                    proficiency: Proficiency::Familiar,
                    popularity: None,
                },
            ],
            interests: vec![],
            goals: vec![],
            created_at: Utc::now(),
            social_connections: None,
            external_projects: None,
        };
        assert_eq!(profile.technology_names(), vec!["React", "Node.js"]);
    }
}
