// ABOUTME: Core types and utilities for DevSpark
// ABOUTME: Foundational package providing profile types shared across all DevSpark packages

pub mod types;
pub mod utils;
pub mod validation;

// Re-export main types
pub use types::{
    DeveloperType, Difficulty, ExternalProject, Proficiency, SocialConnection, SocialProvider,
    TechCategory, TechStack, UserProfile,
};

// Re-export utilities
pub use utils::{generate_idea_id, generate_profile_id};

// Re-export validation
pub use validation::{validate_profile, ValidationError};
