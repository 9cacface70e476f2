use serde::{Deserialize, Serialize};
use validator::Validate;

/// Form body for the career comparison endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompareCareersRequest {
    #[validate(range(min = 1))]
    pub career_id_1: i32,
    #[validate(range(min = 1))]
    pub career_id_2: i32,
}

/// Form body for the skill match endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CompareSkillsRequest {
    #[validate(length(min = 1))]
    pub user_id: String,
    pub career_id: i32,
}
