//! Roadmap Synthesis — turns the gateway's required skills into a per-skill gap list.
//!
//! Pure and deterministic: the same inputs always produce the same roadmap.
//!
//! Matching rule: a required skill counts as owned when any project keyword,
//! lower-cased, equals it or is a substring of it, or the other way round.
//! The rule over-matches on short tokens ("ai" matches "rails"). That is the
//! established behaviour and is kept as-is.

use crate::models::roadmap::{Roadmap, RoadmapSkill};

const SUGGESTION_PREFIX: &str = "Suggested: take related courses, projects, or tutorials to learn ";

// ────────────────────────────────────────────────────────────────────────────
// Input normalization
// ────────────────────────────────────────────────────────────────────────────

/// Splits comma-separated project keywords into trimmed, lower-cased tokens.
pub fn owned_skills(project_keywords: &str) -> Vec<String> {
    project_keywords
        .split(',')
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect()
}

/// Trims required skills and drops blanks. Source order is kept.
pub fn required_skills(skills: Option<&[String]>) -> Vec<&str> {
    skills
        .unwrap_or_default()
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Synthesis
// ────────────────────────────────────────────────────────────────────────────

/// Builds a roadmap with one entry per non-blank required skill.
pub fn synthesize_roadmap(
    required: Option<&[String]>,
    project_keywords: &str,
    goal_title: &str,
) -> Roadmap {
    let owned = owned_skills(project_keywords);

    let skills = required_skills(required)
        .into_iter()
        .map(|skill| {
            if covers(&owned, skill) {
                RoadmapSkill::owned(skill)
            } else {
                RoadmapSkill::missing(skill, suggestion_for(skill))
            }
        })
        .collect();

    Roadmap {
        goal: goal_title.to_string(),
        skills,
    }
}

fn covers(owned: &[String], skill: &str) -> bool {
    let lower = skill.to_lowercase();
    owned
        .iter()
        .any(|o| *o == lower || o.contains(lower.as_str()) || lower.contains(o.as_str()))
}

fn suggestion_for(skill: &str) -> String {
    format!("{SUGGESTION_PREFIX}{skill}.")
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_end_to_end_cs_profile() {
        let required = skills(&["Natural Language Processing", "TensorFlow", "React"]);
        let roadmap = synthesize_roadmap(
            Some(required.as_slice()),
            "natural language processing, chatbot, react",
            "AI Research Scientist",
        );

        assert_eq!(roadmap.goal, "AI Research Scientist");
        assert_eq!(
            roadmap.skills,
            vec![
                RoadmapSkill::owned("Natural Language Processing"),
                RoadmapSkill::missing(
                    "TensorFlow",
                    "Suggested: take related courses, projects, or tutorials to learn TensorFlow."
                        .to_string()
                ),
                RoadmapSkill::owned("React"),
            ]
        );
    }

    #[test]
    fn test_case_insensitive_match() {
        let roadmap = synthesize_roadmap(Some(skills(&["react"]).as_slice()), "React", "Frontend Engineer");
        assert!(roadmap.skills[0].has);
    }

    #[test]
    fn test_required_contained_in_owned_matches() {
        let roadmap =
            synthesize_roadmap(Some(skills(&["chatbot"]).as_slice()), "chatbot development", "Goal");
        assert!(roadmap.skills[0].has);
    }

    #[test]
    fn test_owned_contained_in_required_matches() {
        let roadmap = synthesize_roadmap(Some(skills(&["React Hooks"]).as_slice()), "react", "Goal");
        assert!(roadmap.skills[0].has);
    }

    #[test]
    fn test_acronym_does_not_match_expansion() {
        let roadmap =
            synthesize_roadmap(Some(skills(&["natural language processing"]).as_slice()), "nlp", "Goal");
        assert!(!roadmap.skills[0].has);
        assert!(roadmap.skills[0].suggestion.is_some());
    }

    #[test]
    fn test_short_token_over_matches() {
        let roadmap = synthesize_roadmap(Some(skills(&["Rails"]).as_slice()), "ai", "Goal");
        assert!(roadmap.skills[0].has);
    }

    #[test]
    fn test_absent_required_skills_yields_empty_roadmap() {
        let roadmap = synthesize_roadmap(None, "rust, go", "Backend Engineer");
        assert!(roadmap.skills.is_empty());
        assert_eq!(roadmap.goal, "Backend Engineer");
    }

    #[test]
    fn test_empty_required_skills_yields_empty_roadmap() {
        let roadmap = synthesize_roadmap(Some(&[][..]), "rust", "Backend Engineer");
        assert!(roadmap.skills.is_empty());
        assert_eq!(roadmap.goal, "Backend Engineer");
    }

    #[test]
    fn test_blank_required_skills_are_dropped_and_trimmed() {
        let required = skills(&["  Docker  ", "", "   ", "Kafka"]);
        let roadmap = synthesize_roadmap(Some(required.as_slice()), "", "Goal");
        let names: Vec<&str> = roadmap.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Docker", "Kafka"]);
    }

    #[test]
    fn test_order_is_preserved() {
        let required = skills(&["Zig", "Assembly", "Mojo"]);
        let roadmap = synthesize_roadmap(Some(required.as_slice()), "", "Goal");
        let names: Vec<&str> = roadmap.skills.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Zig", "Assembly", "Mojo"]);
    }

    #[test]
    fn test_blank_keywords_own_nothing() {
        let roadmap = synthesize_roadmap(Some(skills(&["Python"]).as_slice()), " , ,, ", "Goal");
        assert!(!roadmap.skills[0].has);
    }

    #[test]
    fn test_suggestion_uses_trimmed_original_casing() {
        let roadmap = synthesize_roadmap(Some(skills(&["  PyTorch "]).as_slice()), "", "Goal");
        assert_eq!(
            roadmap.skills[0].suggestion.as_deref(),
            Some("Suggested: take related courses, projects, or tutorials to learn PyTorch.")
        );
    }

    #[test]
    fn test_has_and_suggestion_are_exclusive() {
        let cases: Vec<(Vec<String>, &str)> = vec![
            (skills(&["A", "b", " c ", "", "Deep Learning"]), "a, deep"),
            (skills(&["SQL", "NoSQL", "GraphQL"]), "sql"),
            (skills(&["x"]), ""),
            (vec![], "anything"),
        ];
        for (required, keywords) in cases {
            let roadmap = synthesize_roadmap(Some(required.as_slice()), keywords, "Goal");
            assert_eq!(roadmap.skills.len(), required_skills(Some(required.as_slice())).len());
            for skill in &roadmap.skills {
                assert_eq!(skill.has, skill.suggestion.is_none(), "skill {}", skill.name);
            }
        }
    }

    #[test]
    fn test_synthesis_is_idempotent() {
        let required = skills(&["Rust", "Kubernetes", "gRPC"]);
        let first = synthesize_roadmap(Some(required.as_slice()), "rust, grpc services", "SRE");
        let second = synthesize_roadmap(Some(required.as_slice()), "rust, grpc services", "SRE");
        assert_eq!(first, second);
    }

    #[test]
    fn test_owned_skills_normalizes_tokens() {
        assert_eq!(
            owned_skills(" React ,NLP,, Chatbot "),
            vec!["react".to_string(), "nlp".to_string(), "chatbot".to_string()]
        );
    }
}
