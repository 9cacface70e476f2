use crate::models::{RankedSkill, WeightedSkill};

/// Number of leading ranks that receive a decaying multiplier
pub const DECAY_WINDOW: usize = 5;

/// Hard cap on how many ranked skills take part in a category score
pub const MAX_RANKED_SKILLS: usize = 10;

/// Multiplier applied to ranks at or past the decay window
pub const FLAT_MULTIPLIER: i64 = 1;

/// Multiplier for a 0-based rank position
///
/// Rank 0 gets x5 and each following rank one less, down to x1 at rank 4.
/// Every rank after the decay window is flat x1.
#[inline]
pub fn rank_multiplier(rank: usize) -> i64 {
    if rank < DECAY_WINDOW {
        (DECAY_WINDOW - rank) as i64
    } else {
        FLAT_MULTIPLIER
    }
}

/// Attach rank multipliers to the head of a descending ranked list
///
/// Only the first `MAX_RANKED_SKILLS` entries survive; shorter lists are not padded.
pub fn balance_skills(ranked: &[RankedSkill]) -> Vec<WeightedSkill> {
    ranked
        .iter()
        .take(MAX_RANKED_SKILLS)
        .enumerate()
        .map(|(rank, skill)| WeightedSkill {
            skill: skill.clone(),
            weight: rank_multiplier(rank),
        })
        .collect()
}
