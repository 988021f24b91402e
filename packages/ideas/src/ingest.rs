// ABOUTME: Best-effort ingestion of technology names from external JSON resources
// ABOUTME: All transport, status, and parse failures collapse to an empty list

use reqwest::header::ACCEPT;
use reqwest::Client;
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;
use tracing::{info, warn};

/// Dependency-manifest key to display-name mapping
static DEPENDENCY_DISPLAY_NAMES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut map = HashMap::new();
        map.insert("react", "React");
        map.insert("vue", "Vue.js");
        map.insert("angular", "Angular");
        map.insert("svelte", "Svelte");
        map.insert("express", "Express.js");
        map.insert("django", "Django");
        map.insert("flask", "Flask");
        map.insert("mongodb", "MongoDB");
        map.insert("mongoose", "MongoDB");
        map.insert("postgresql", "PostgreSQL");
        map.insert("pg", "PostgreSQL");
        map.insert("mysql", "MySQL");
        map.insert("redis", "Redis");
        map.insert("firebase", "Firebase");
        map.insert("supabase", "Supabase");
        map.insert("tailwindcss", "Tailwind CSS");
        map.insert("bootstrap", "Bootstrap");
        map.insert("sass", "Sass/SCSS");
        map.insert("typescript", "TypeScript");
        map.insert("graphql", "GraphQL");
        map.insert("apollo", "GraphQL");
        map.insert("docker", "Docker");
        map.insert("aws-sdk", "AWS");
        map.insert("azure", "Azure");
        map.insert("gcp", "Google Cloud");
        map.insert("tensorflow", "TensorFlow");
        map.insert("pytorch", "PyTorch");
        map.insert("pandas", "Pandas");
        map.insert("numpy", "NumPy");
        map.insert("electron", "Electron");
        map.insert("react-native", "React Native");
        map.insert("flutter", "Flutter");
        map.insert("expo", "Expo");
        map
    });

/// Fetches technology lists from external project resources
///
/// One JSON GET per call, no follow-up requests, no retries, and no engine
/// timeout; transport behavior is left to the client configuration.
pub struct SignalClient {
    client: Client,
}

impl SignalClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    /// Extract technology names from an external JSON resource
    ///
    /// Never fails past this boundary: any transport failure, non-2xx status,
    /// or unparseable payload yields an empty list.
    pub async fn fetch_technologies(&self, api_url: &str) -> Vec<String> {
        match self.try_fetch(api_url).await {
            Ok(technologies) => {
                info!(
                    "Detected {} technologies from {}",
                    technologies.len(),
                    api_url
                );
                technologies
            }
            Err(err) => {
                warn!("Failed to fetch external project data from {}: {}", api_url, err);
                Vec::new()
            }
        }
    }

    async fn try_fetch(&self, api_url: &str) -> std::result::Result<Vec<String>, reqwest::Error> {
        let response = self
            .client
            .get(api_url)
            .header(ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?;

        let payload: Value = response.json().await?;
        Ok(extract_technologies(&payload))
    }
}

impl Default for SignalClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Pull technology names out of the common external payload shapes
///
/// Extraction order is fixed: repository `language`, `dependencies` keys,
/// `devDependencies` keys, then the `technologies` and `techStack` arrays.
/// Exact duplicates are dropped, keeping first-occurrence order.
pub fn extract_technologies(payload: &Value) -> Vec<String> {
    let mut technologies: Vec<String> = Vec::new();

    // GitHub repository API shape
    if let Some(language) = payload.get("language").and_then(Value::as_str) {
        technologies.push(language.to_string());
    }

    // package.json shape
    if let Some(dependencies) = payload.get("dependencies").and_then(Value::as_object) {
        technologies.extend(display_names(dependencies.keys()));
    }
    if let Some(dev_dependencies) = payload.get("devDependencies").and_then(Value::as_object) {
        technologies.extend(display_names(dev_dependencies.keys()));
    }

    // Custom shapes
    for field in ["technologies", "techStack"] {
        if let Some(entries) = payload.get(field).and_then(Value::as_array) {
            technologies.extend(
                entries
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string),
            );
        }
    }

    let mut seen = HashSet::new();
    technologies.retain(|tech| seen.insert(tech.clone()));
    technologies
}

/// Map dependency keys to display names; unmapped keys are dropped
fn display_names<'a>(keys: impl Iterator<Item = &'a String>) -> Vec<String> {
    keys.filter_map(|key| {
        let cleaned = key.to_lowercase();
        let cleaned = cleaned.trim_start_matches(['@', '^', '~']);
        DEPENDENCY_DISPLAY_NAMES
            .get(cleaned)
            .map(|name| (*name).to_string())
    })
    .collect()
}
