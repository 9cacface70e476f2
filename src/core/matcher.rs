use crate::core::weighting::balance_skills;
use crate::models::{PerCategory, RankedSkill, UserSkillSet};

/// Weighted skill mass of one cohort and the part of it the user covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryTotals {
    pub total: i64,
    pub matched: i64,
}

impl CategoryTotals {
    /// Match percentage rounded to two decimals, 0 when the cohort has no weight
    pub fn percentage(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }

        round_to_hundredths(self.matched as f64 / self.total as f64 * 100.0)
    }
}

/// Round to two decimals on the exact binary value, ties to even
#[inline]
fn round_to_hundredths(value: f64) -> f64 {
    format!("{:.2}", value).parse().unwrap_or(0.0)
}

/// Sum weighted counts for one cohort, overall and restricted to the user's skills
pub fn category_totals(user_skills: &UserSkillSet, ranked: &[RankedSkill]) -> CategoryTotals {
    balance_skills(ranked)
        .iter()
        .fold(CategoryTotals::default(), |mut acc, weighted| {
            let weighted_count = weighted.weighted_count();
            acc.total += weighted_count;
            if user_skills.contains(weighted.skill.skill_id) {
                acc.matched += weighted_count;
            }
            acc
        })
}

/// Match percentage of a user against one cohort's ranked skills
pub fn match_category(user_skills: &UserSkillSet, ranked: &[RankedSkill]) -> f64 {
    category_totals(user_skills, ranked).percentage()
}

/// Match percentage for every cohort category
///
/// Each category is weighted and summed on its own; nothing carries over between them.
pub fn match_categories(
    user_skills: &UserSkillSet,
    ranked: &PerCategory<Vec<RankedSkill>>,
) -> PerCategory<f64> {
    ranked.map(|skills| match_category(user_skills, skills))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_ranking() -> Vec<RankedSkill> {
        vec![
            RankedSkill::new(1, "SQL", 20),
            RankedSkill::new(2, "Python", 15),
            RankedSkill::new(3, "Go", 10),
            RankedSkill::new(4, "Rust", 5),
            RankedSkill::new(5, "C", 1),
        ]
    }

    #[test]
    fn test_weighted_example() {
        let user: UserSkillSet = [1, 3].into_iter().collect();
        let totals = category_totals(&user, &sample_ranking());

        assert_eq!(totals.total, 201);
        assert_eq!(totals.matched, 130);
        assert_eq!(totals.percentage(), 64.68);
    }

    #[test]
    fn test_no_user_skills() {
        let user = UserSkillSet::default();
        assert_eq!(match_category(&user, &sample_ranking()), 0.0);
    }

    #[test]
    fn test_empty_ranking_is_zero() {
        let user: UserSkillSet = [1, 2, 3].into_iter().collect();
        let totals = category_totals(&user, &[]);

        assert_eq!(totals.total, 0);
        assert_eq!(totals.percentage(), 0.0);
    }

    #[test]
    fn test_zero_counts_is_zero() {
        let user: UserSkillSet = [1].into_iter().collect();
        let ranked = vec![RankedSkill::new(1, "SQL", 0)];
        assert_eq!(match_category(&user, &ranked), 0.0);
    }

    #[test]
    fn test_superset_is_hundred() {
        let user: UserSkillSet = (1..=20).collect();
        assert_eq!(match_category(&user, &sample_ranking()), 100.0);
    }

    #[test]
    fn test_only_first_ten_ranks_count() {
        let mut ranked: Vec<RankedSkill> = (1..=10)
            .map(|id| RankedSkill::new(id, format!("skill-{}", id), 30 - id as i64))
            .collect();
        let user: UserSkillSet = [1, 11, 12].into_iter().collect();
        let before = category_totals(&user, &ranked);

        ranked.push(RankedSkill::new(11, "eleventh", 1_000));
        ranked.push(RankedSkill::new(12, "twelfth", 1_000));
        let after = category_totals(&user, &ranked);

        assert_eq!(before, after);
    }

    #[test]
    fn test_categories_are_independent() {
        let user: UserSkillSet = [1].into_iter().collect();
        let ranked = PerCategory {
            pursuing: vec![RankedSkill::new(1, "SQL", 4)],
            graduated: vec![RankedSkill::new(2, "Python", 4)],
            expelled: vec![],
            resigned: vec![RankedSkill::new(2, "Python", 1), RankedSkill::new(1, "SQL", 1)],
        };

        let result = match_categories(&user, &ranked);

        assert_eq!(result.pursuing, 100.0);
        assert_eq!(result.graduated, 0.0);
        assert_eq!(result.expelled, 0.0);
        // weights 5 and 4 -> 4 / 9
        assert_eq!(result.resigned, 44.44);
    }

    #[test]
    fn test_rounding_ties_go_to_even() {
        let pct = |matched, total| CategoryTotals { total, matched }.percentage();

        assert_eq!(pct(1, 32), 3.12);
        assert_eq!(pct(3, 32), 9.38);
        assert_eq!(pct(5, 32), 15.62);
        assert_eq!(pct(1, 8), 12.5);
        assert_eq!(pct(1, 16), 6.25);
    }

    #[test]
    fn test_power_of_two_total_from_ranking() {
        // weighted 20, 4, 3, 2, 1, 1, 1 -> total 32
        let ranked: Vec<RankedSkill> = [4, 1, 1, 1, 1, 1, 1]
            .iter()
            .enumerate()
            .map(|(i, &count)| RankedSkill::new(i as i32 + 1, format!("skill-{}", i + 1), count))
            .collect();
        let user: UserSkillSet = [7].into_iter().collect();
        let totals = category_totals(&user, &ranked);

        assert_eq!(totals, CategoryTotals { total: 32, matched: 1 });
        assert_eq!(totals.percentage(), 3.12);
    }
}
