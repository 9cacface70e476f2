// Core algorithm exports
pub mod differ;
pub mod matcher;
pub mod weighting;

pub use differ::{compare_programs, diff_attributes, diff_values, program_attributes};
pub use matcher::{category_totals, match_categories, match_category, CategoryTotals};
pub use weighting::{balance_skills, rank_multiplier, DECAY_WINDOW, MAX_RANKED_SKILLS};
