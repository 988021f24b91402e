// ABOUTME: Difficulty policy mapping skill level to time estimate and feature shaping
// ABOUTME: Fixed lookup table, one policy per difficulty level

use devspark_core::Difficulty;

/// Shaping rules for one difficulty level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DifficultyPolicy {
    pub time_estimate: &'static str,
    /// `None` keeps every template feature
    pub feature_limit: Option<usize>,
    /// Appended to the template description
    pub narrative_suffix: &'static str,
    /// Extra feature appended after truncation, if any
    pub bonus_feature: Option<&'static str>,
}

impl DifficultyPolicy {
    /// Keep the first `feature_limit` features of a template
    pub fn truncate_features(&self, features: &[&str]) -> Vec<String> {
        let keep = self.feature_limit.unwrap_or(features.len());
        features
            .iter()
            .take(keep)
            .map(|feature| (*feature).to_string())
            .collect()
    }
}

static BEGINNER: DifficultyPolicy = DifficultyPolicy {
    time_estimate: "1-2 weeks",
    feature_limit: Some(3),
    narrative_suffix: "Focus on core functionality with simple UI",
    bonus_feature: None,
};

static INTERMEDIATE: DifficultyPolicy = DifficultyPolicy {
    time_estimate: "2-4 weeks",
    feature_limit: Some(5),
    narrative_suffix: "Include user authentication and data persistence",
    bonus_feature: Some("User authentication and profiles"),
};

static ADVANCED: DifficultyPolicy = DifficultyPolicy {
    time_estimate: "1-3 months",
    feature_limit: None,
    narrative_suffix: "Implement advanced features like real-time updates and AI integration",
    bonus_feature: Some("Advanced analytics and reporting"),
};

/// Policy for a difficulty level
pub fn policy_for(difficulty: Difficulty) -> &'static DifficultyPolicy {
    match difficulty {
        Difficulty::Beginner => &BEGINNER,
        Difficulty::Intermediate => &INTERMEDIATE,
        Difficulty::Advanced => &ADVANCED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEATURES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

    #[test]
    fn test_beginner_policy() {
        let policy = policy_for(Difficulty::Beginner);
        assert_eq!(policy.time_estimate, "1-2 weeks");
        assert_eq!(policy.truncate_features(&FEATURES), vec!["a", "b", "c"]);
        assert_eq!(
            policy.narrative_suffix,
            "Focus on core functionality with simple UI"
        );
        assert_eq!(policy.bonus_feature, None);
    }

    #[test]
    fn test_intermediate_policy() {
        let policy = policy_for(Difficulty::Intermediate);
        assert_eq!(policy.time_estimate, "2-4 weeks");
        assert_eq!(policy.truncate_features(&FEATURES).len(), 5);
        assert_eq!(
            policy.bonus_feature,
            Some("User authentication and profiles")
        );
    }

    #[test]
    fn test_advanced_policy_keeps_all_features() {
        let policy = policy_for(Difficulty::Advanced);
        assert_eq!(policy.time_estimate, "1-3 months");
        assert_eq!(policy.truncate_features(&FEATURES).len(), FEATURES.len());
        assert_eq!(
            policy.bonus_feature,
            Some("Advanced analytics and reporting")
        );
    }

    #[test]
    fn test_truncation_handles_short_templates() {
        let policy = policy_for(Difficulty::Intermediate);
        assert_eq!(policy.truncate_features(&["only", "two"]).len(), 2);
    }
}
