//! Skill intake and job recommendation.
//!
//! `JobRecommender` is the seam between the user's skills and the ranked job
//! list the reports are built for. `PlaceholderRecommender` is the only
//! backend so far: it ignores the skills and returns a fixed list.

use tracing::debug;

use crate::models::JobTitleList;

/// Splits a comma-separated skills line. Pieces are trimmed; blank pieces
/// are dropped. Order and repeats are kept.
pub fn parse_skills(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Maps a user's skills to a ranked list of equivalent job titles.
pub trait JobRecommender {
    fn recommend(&self, skills: &[String]) -> JobTitleList;

    /// Short backend label for logs.
    fn backend(&self) -> &'static str;
}

/// Stand-in list used until a skills-to-jobs model is wired up.
pub const PLACEHOLDER_JOBS: [&str; 10] = [
    "Chemistry Teachers, Postsecondary",
    "Police Identification and Records Officers",
    "Insulation Workers, Floor, Ceiling, and Wall",
    "Special Education Teachers, Kindergarten",
    "Civil Engineers",
    "Marriage and Family Therapists",
    "Installation, Maintenance, and Repair Workers, All Other",
    "Weighers, Measurers, Checkers, and Samplers, Recordkeeping",
    "Infantry Officers",
    "Geodetic Surveyors",
];

pub struct PlaceholderRecommender;

impl JobRecommender for PlaceholderRecommender {
    fn recommend(&self, skills: &[String]) -> JobTitleList {
        debug!("Ignoring {} skills, returning placeholder list", skills.len());
        PLACEHOLDER_JOBS.iter().copied().collect()
    }

    fn backend(&self) -> &'static str {
        "placeholder"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skills_trims_each_piece() {
        let skills = parse_skills("Data Analysis,  Python , SQL");
        assert_eq!(skills, vec!["Data Analysis", "Python", "SQL"]);
    }

    #[test]
    fn test_parse_skills_drops_blank_pieces() {
        assert_eq!(parse_skills(" , Rust,,"), vec!["Rust"]);
        assert!(parse_skills("").is_empty());
        assert!(parse_skills("   ").is_empty());
    }

    #[test]
    fn test_parse_skills_keeps_duplicates_in_order() {
        assert_eq!(parse_skills("SQL, Python, SQL"), vec!["SQL", "Python", "SQL"]);
    }

    #[test]
    fn test_placeholder_ignores_skills() {
        let rec = PlaceholderRecommender;
        let a = rec.recommend(&[]);
        let b = rec.recommend(&parse_skills("Rust, Databricks"));

        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
        assert_eq!(a.iter().next(), Some("Chemistry Teachers, Postsecondary"));
        assert_eq!(a.iter().last(), Some("Geodetic Surveyors"));
    }

    #[test]
    fn test_placeholder_backend_label() {
        assert_eq!(PlaceholderRecommender.backend(), "placeholder");
    }
}
