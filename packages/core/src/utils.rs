// ABOUTME: Shared utility functions for DevSpark
// ABOUTME: ID generation for profiles, external projects, and generated ideas

use chrono::Utc;
use rand::Rng;

/// Generate a unique profile or external-project ID (8-character format)
pub fn generate_profile_id() -> String {
    const CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    (0..8)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

/// Generate an idea ID from the current time plus a random base36 suffix
///
/// Uniqueness is best-effort: there is no collision check, so callers needing
/// strict uniqueness must layer their own.
pub fn generate_idea_id() -> String {
    const CHARSET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    let mut rng = rand::thread_rng();
    let suffix: String = (0..9)
        .map(|_| {
            let idx = rng.gen_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect();
    format!("idea-{}-{}", Utc::now().timestamp_millis(), suffix)
}
