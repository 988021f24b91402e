// ABOUTME: Profile validation for DevSpark
// ABOUTME: Gates idea generation on well-formed profiles with at least one declared technology

use crate::types::UserProfile;
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Profile has no declared technologies")]
    EmptyStacks,

    #[error("Technology name cannot be blank")]
    BlankTechnology,

    #[error("Duplicate technology in profile: {0}")]
    DuplicateTechnology(String),
}

/// Validate a profile before handing it to the idea engine
///
/// Technology names are the identity of a stack entry, so they must be
/// non-blank and unique within the profile.
pub fn validate_profile(profile: &UserProfile) -> Result<(), ValidationError> {
    if profile.stacks.is_empty() {
        return Err(ValidationError::EmptyStacks);
    }

    let mut seen = HashSet::new();
    for stack in &profile.stacks {
        if stack.name.trim().is_empty() {
            return Err(ValidationError::BlankTechnology);
        }
        if !seen.insert(stack.name.as_str()) {
            return Err(ValidationError::DuplicateTechnology(stack.name.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DeveloperType, Difficulty, Proficiency, TechCategory, TechStack};
    use chrono::Utc;

    fn profile_with_stacks(stacks: Vec<TechStack>) -> UserProfile {
        UserProfile {
            id: "u1".to_string(),
            developer_type: DeveloperType::Student,
            skill_level: Difficulty::Intermediate,
            stacks,
            interests: vec![],
            goals: vec![],
            created_at: Utc::now(),
            social_connections: None,
            external_projects: None,
        }
    }

    fn tech(name: &str) -> TechStack {
        TechStack {
            name: name.to_string(),
            category: TechCategory::Other,
            proficiency: Proficiency::Familiar,
            popularity: None,
        }
    }

    #[test]
    fn test_rejects_empty_stacks() {
        let profile = profile_with_stacks(vec![]);
        assert_eq!(
            validate_profile(&profile),
            Err(ValidationError::EmptyStacks)
        );
    }

    #[test]
    fn test_rejects_blank_technology_name() {
        let profile = profile_with_stacks(vec![tech("  ")]);
        assert_eq!(
            validate_profile(&profile),
            Err(ValidationError::BlankTechnology)
        );
    }

    #[test]
    fn test_rejects_duplicate_technology() {
        let profile = profile_with_stacks(vec![tech("React"), tech("React")]);
        assert_eq!(
            validate_profile(&profile),
            Err(ValidationError::DuplicateTechnology("React".to_string()))
        );
    }

    #[test]
    fn test_accepts_valid_profile() {
        let profile = profile_with_stacks(vec![tech("React"), tech("Node.js")]);
        assert!(validate_profile(&profile).is_ok());
    }
}
