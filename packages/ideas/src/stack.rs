// ABOUTME: Stack composer expanding a random primary technology into a coherent stack
// ABOUTME: Uses a fixed complementary-technology table, capped at 6 entries

use crate::error::{IdeaError, Result};
use rand::Rng;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Maximum number of technologies in a recommended stack
pub const MAX_STACK_TECHNOLOGIES: usize = 6;

/// How many extra declared technologies are appended after the complements
const MAX_ADDITIONAL_TECHNOLOGIES: usize = 2;

/// Fixed complementary-technology table, keyed by primary technology
static COMPLEMENTS: LazyLock<HashMap<&'static str, &'static [&'static str]>> =
    LazyLock::new(|| {
        let mut map: HashMap<&'static str, &'static [&'static str]> = HashMap::new();
        map.insert("JavaScript", &["JavaScript", "HTML/CSS"]);
        map.insert("TypeScript", &["TypeScript", "JavaScript", "HTML/CSS"]);
        map.insert("React", &["React", "JavaScript", "HTML/CSS"]);
        map.insert("Vue.js", &["Vue.js", "JavaScript", "HTML/CSS"]);
        map.insert("Angular", &["Angular", "TypeScript", "HTML/CSS"]);
        map.insert("Node.js", &["Node.js", "JavaScript"]);
        map.insert("Python", &["Python", "Flask"]);
        map.insert("Django", &["Django", "Python", "PostgreSQL"]);
        map.insert("Java", &["Java", "Spring Boot"]);
        map.insert("C#", &["C#", ".NET"]);
        map.insert("PHP", &["PHP", "Laravel", "MySQL"]);
        map.insert("React Native", &["React Native", "JavaScript"]);
        map.insert("Flutter", &["Flutter", "Firebase"]);
        map.insert("MongoDB", &["MongoDB", "Node.js"]);
        map.insert("PostgreSQL", &["PostgreSQL", "Node.js"]);
        map.insert("GraphQL", &["GraphQL", "Node.js"]);
        map.insert("Tailwind CSS", &["Tailwind CSS", "HTML/CSS"]);
        map
    });

/// Compose a recommended stack from the user's declared technologies
///
/// Picks a primary technology at random, expands it with complements from the
/// fixed table, then appends up to two more declared technologies. Repeated
/// calls with the same profile may yield different stacks; that variety is
/// intentional.
pub fn compose_stack<R: Rng>(rng: &mut R, declared: &[String]) -> Result<Vec<String>> {
    if declared.is_empty() {
        return Err(IdeaError::InvalidProfile(
            "profile has no declared technologies".to_string(),
        ));
    }

    let primary = declared[rng.gen_range(0..declared.len())].as_str();
    let mut stack = vec![primary.to_string()];

    if let Some(complements) = COMPLEMENTS.get(primary) {
        for tech in *complements {
            if !stack.iter().any(|existing| existing == tech) {
                stack.push((*tech).to_string());
            }
        }
    }

    let additional: Vec<String> = declared
        .iter()
        .filter(|tech| !stack.contains(tech))
        .take(MAX_ADDITIONAL_TECHNOLOGIES)
        .cloned()
        .collect();
    stack.extend(additional);

    stack.truncate(MAX_STACK_TECHNOLOGIES);
    Ok(stack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn names(techs: &[&str]) -> Vec<String> {
        techs.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_empty_declared_list_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let result = compose_stack(&mut rng, &[]);
        assert!(matches!(result, Err(IdeaError::InvalidProfile(_))));
    }

    #[test]
    fn test_single_technology_expands_with_complements() {
        let mut rng = StdRng::seed_from_u64(0);
        let stack = compose_stack(&mut rng, &names(&["React"])).unwrap();
        assert_eq!(stack, vec!["React", "JavaScript", "HTML/CSS"]);
    }

    #[test]
    fn test_unknown_technology_stands_alone() {
        let mut rng = StdRng::seed_from_u64(0);
        let stack = compose_stack(&mut rng, &names(&["COBOL"])).unwrap();
        assert_eq!(stack, vec!["COBOL"]);
    }

    #[test]
    fn test_stack_is_capped_and_unique() {
        let declared = names(&[
            "React",
            "Vue.js",
            "Angular",
            "Node.js",
            "Python",
            "Django",
            "PHP",
            "Flutter",
        ]);
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let stack = compose_stack(&mut rng, &declared).unwrap();
            assert!(!stack.is_empty());
            assert!(stack.len() <= MAX_STACK_TECHNOLOGIES);
            for (i, tech) in stack.iter().enumerate() {
                assert!(
                    !stack[i + 1..].contains(tech),
                    "duplicate {} in {:?}",
                    tech,
                    stack
                );
            }
        }
    }

    #[test]
    fn test_at_most_two_additional_declared_technologies() {
        // Primary is the only declared choice, so the rest of the declared
        // list can only enter through the additional-technology step.
        let declared = names(&["COBOL", "Fortran", "Ada", "Pascal"]);
        let mut rng = StdRng::seed_from_u64(0);
        let stack = compose_stack(&mut rng, &declared).unwrap();
        assert!(stack.len() <= 3);
        assert!(stack.iter().all(|tech| declared.contains(tech)));
    }

    #[test]
    fn test_primary_always_comes_from_declared_list() {
        let declared = names(&["Python", "Java"]);
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let stack = compose_stack(&mut rng, &declared).unwrap();
            assert!(declared.contains(&stack[0]));
        }
    }
}
