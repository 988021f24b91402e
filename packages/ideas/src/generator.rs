// ABOUTME: Idea generator orchestrating catalog, stack, difficulty, and title variation
// ABOUTME: Produces one ProjectIdea per call from a user profile and optional filters

use crate::catalog::{self, ProjectTemplate};
use crate::difficulty::policy_for;
use crate::error::Result;
use crate::stack::compose_stack;
use crate::types::{GenerationFilters, ProjectCategory, ProjectIdea};
use chrono::Utc;
use devspark_core::{generate_idea_id, UserProfile};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

/// Maximum number of tags on a generated idea
pub const MAX_IDEA_TAGS: usize = 8;

/// Title nouns eligible for variation, with their replacement pool
const TITLE_NOUNS: [&str; 5] = ["Builder", "Platform", "Engine", "Tracker", "App"];
const TITLE_ALTERNATIVES: [&str; 5] = ["Hub", "Studio", "Manager", "System", "Tool"];

/// Generates project ideas from a user profile
///
/// Holds the random source for template selection, stack composition, and
/// title variation. Use `with_seed` to pin every selection in tests.
pub struct IdeaGenerator {
    rng: StdRng,
}

impl IdeaGenerator {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for tests and reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generate one idea; the profile must declare at least one technology
    pub fn generate(
        &mut self,
        profile: &UserProfile,
        filters: &GenerationFilters,
    ) -> Result<ProjectIdea> {
        let templates = match filters.category.as_deref() {
            Some(key) => catalog::templates_for(key),
            None => catalog::templates(self.infer_category(&profile.interests)),
        };
        let template = &templates[self.rng.gen_range(0..templates.len())];

        let difficulty = filters.difficulty.unwrap_or(profile.skill_level);
        let policy = policy_for(difficulty);

        let stack = compose_stack(&mut self.rng, &profile.technology_names())?;

        let mut features = policy.truncate_features(template.features);
        if let Some(bonus) = policy.bonus_feature {
            features.push(bonus.to_string());
        }

        let title = self.pick_title(template);

        let mut tags: Vec<String> = template.tags.iter().map(|tag| (*tag).to_string()).collect();
        tags.extend(profile.interests.iter().map(|interest| interest_tag(interest)));
        tags.push(difficulty.to_string());
        tags.truncate(MAX_IDEA_TAGS);

        let idea = ProjectIdea {
            id: generate_idea_id(),
            title,
            description: format!("{} {}", template.description, policy.narrative_suffix),
            stack,
            difficulty,
            features,
            time_estimate: filters
                .time_estimate
                .clone()
                .unwrap_or_else(|| policy.time_estimate.to_string()),
            category: template.category,
            tags,
            created_at: Utc::now(),
        };

        info!(
            "Generated {} idea \"{}\" at {} difficulty",
            idea.category, idea.title, idea.difficulty
        );
        Ok(idea)
    }

    /// Infer a category from interests with fixed precedence
    ///
    /// Interests only ever map to web, mobile, and game; api and tool are
    /// reachable through an explicit filter or the random fallback.
    fn infer_category(&mut self, interests: &[String]) -> ProjectCategory {
        if interests.iter().any(|i| i == "Web Development") {
            ProjectCategory::Web
        } else if interests.iter().any(|i| i == "Mobile Apps") {
            ProjectCategory::Mobile
        } else if interests.iter().any(|i| i == "Game Development") {
            ProjectCategory::Game
        } else {
            ProjectCategory::ALL[self.rng.gen_range(0..ProjectCategory::ALL.len())]
        }
    }

    /// Uniform choice between the template title and its varied form
    fn pick_title(&mut self, template: &ProjectTemplate) -> String {
        let varied = self.vary_title(template.title);
        if self.rng.gen_bool(0.5) {
            template.title.to_string()
        } else {
            varied
        }
    }

    /// Replace the first eligible noun with a random alternative
    ///
    /// Titles without an eligible noun come back unchanged, which makes both
    /// variation branches degenerate to the same value.
    fn vary_title(&mut self, title: &str) -> String {
        let earliest = TITLE_NOUNS
            .iter()
            .filter_map(|noun| title.find(noun).map(|at| (at, *noun)))
            .min_by_key(|(at, _)| *at);

        match earliest {
            Some((_, noun)) => {
                let alternative =
                    TITLE_ALTERNATIVES[self.rng.gen_range(0..TITLE_ALTERNATIVES.len())];
                title.replacen(noun, alternative, 1)
            }
            None => title.to_string(),
        }
    }
}

impl Default for IdeaGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Interests become tags lower-cased with whitespace runs hyphenated
fn interest_tag(interest: &str) -> String {
    interest
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
