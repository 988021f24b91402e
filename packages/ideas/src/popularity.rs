// ABOUTME: Technology popularity baseline and blending with external project signals
// ABOUTME: Scores are 0-100, display-only, and never affect selection probability

use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Mapping of technology name to 0-100 usage score
pub type PopularityTable = HashMap<String, u8>;

/// External signal weight when blending into an existing baseline score
const EXTERNAL_WEIGHT: f64 = 0.7;
const BASELINE_WEIGHT: f64 = 0.3;

/// Baseline usage scores observed across a reference set of starter projects
const BASELINE: &[(&str, u8)] = &[
    // Frontend
    ("JavaScript", 95),
    ("TypeScript", 78),
    ("React", 85),
    ("HTML/CSS", 92),
    ("Tailwind CSS", 68),
    ("Vue.js", 45),
    ("Angular", 35),
    ("Svelte", 25),
    ("Bootstrap", 42),
    ("Sass/SCSS", 38),
    // Backend
    ("Node.js", 82),
    ("Python", 75),
    ("Express.js", 65),
    ("Django", 35),
    ("Flask", 28),
    ("Java", 45),
    ("Spring Boot", 32),
    ("C#", 38),
    (".NET", 35),
    ("PHP", 48),
    ("Laravel", 25),
    ("Ruby", 18),
    ("Rails", 15),
    ("Go", 22),
    ("Rust", 12),
    // Database
    ("MongoDB", 58),
    ("PostgreSQL", 52),
    ("MySQL", 48),
    ("Redis", 35),
    ("SQLite", 42),
    ("Firebase", 55),
    ("Supabase", 38),
    ("DynamoDB", 18),
    // Mobile
    ("React Native", 45),
    ("Flutter", 38),
    ("Swift", 25),
    ("Kotlin", 22),
    ("Expo", 35),
    ("Ionic", 15),
    ("Xamarin", 8),
    // DevOps & Cloud
    ("Docker", 55),
    ("Kubernetes", 25),
    ("AWS", 48),
    ("Azure", 28),
    ("Google Cloud", 32),
    ("Vercel", 62),
    ("Netlify", 58),
    ("GitHub Actions", 45),
    ("Jenkins", 22),
    // AI & ML
    ("TensorFlow", 28),
    ("PyTorch", 25),
    ("Scikit-learn", 32),
    ("OpenAI API", 42),
    ("Hugging Face", 18),
    ("Pandas", 38),
    ("NumPy", 35),
    // Other
    ("GraphQL", 35),
    ("REST APIs", 88),
    ("WebSockets", 25),
    ("Electron", 18),
    ("Unity", 15),
    ("Blockchain", 12),
    ("Web3", 8),
];

/// Fresh copy of the baseline popularity table
pub fn baseline_popularity() -> PopularityTable {
    BASELINE
        .iter()
        .map(|(name, score)| ((*name).to_string(), *score))
        .collect()
}

/// Blend externally observed technology usage into a baseline table
///
/// Each technology's usage percentage is the share of external projects whose
/// list contains it. Technologies already in the baseline blend 70% external
/// and 30% baseline; new ones take the raw usage percentage. Technologies
/// absent from every list keep their baseline score. The input table is never
/// mutated; callers replace their working copy with the returned one.
pub fn blend_popularity(
    external_projects: &[Vec<String>],
    baseline: &PopularityTable,
) -> PopularityTable {
    let mut updated = baseline.clone();

    if external_projects.is_empty() {
        return updated;
    }

    let total_projects = external_projects.len() as f64;
    let mut project_counts: HashMap<&str, usize> = HashMap::new();
    for technologies in external_projects {
        let distinct: HashSet<&str> = technologies.iter().map(String::as_str).collect();
        for tech in distinct {
            *project_counts.entry(tech).or_insert(0) += 1;
        }
    }

    for (tech, count) in project_counts {
        let usage_pct = (count as f64 / total_projects) * 100.0;
        let score = match baseline.get(tech) {
            Some(base) => {
                (usage_pct * EXTERNAL_WEIGHT + f64::from(*base) * BASELINE_WEIGHT).round()
            }
            None => usage_pct.round(),
        };
        updated.insert(tech.to_string(), score as u8);
    }

    debug!(
        "Blended popularity from {} external projects",
        external_projects.len()
    );
    updated
}
