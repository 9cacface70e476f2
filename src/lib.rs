//! Crafters Analytics - career comparison and skill-match service
//!
//! Two read-only views over the academic records database: a side-by-side diff
//! of two careers, and a rank-weighted score of how well a user's skills line up
//! with each enrollment cohort of a career.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{compare_programs, diff_attributes, match_categories, match_category};
pub use models::{CohortCategory, ComparisonTable, PerCategory, RankedSkill, UserSkillSet};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let user: UserSkillSet = [1].into_iter().collect();
        let score = match_category(&user, &[RankedSkill::new(1, "SQL", 3)]);
        assert_eq!(score, 100.0);
    }
}
