use serde::{Deserialize, Serialize};
use crate::models::domain::{Career, PerCategory, Skill};

/// Response for the skill match endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillMatchResponse {
    pub user_skills: Vec<Skill>,
    pub careers: Vec<Career>,
    pub percentage_of_pursuing_user_skills: f64,
    pub percentage_of_graduated_user_skills: f64,
    pub percentage_of_expelled_user_skills: f64,
    pub percentage_of_resigned_user_skills: f64,
}

impl SkillMatchResponse {
    pub fn new(user_skills: Vec<Skill>, careers: Vec<Career>, percentages: PerCategory<f64>) -> Self {
        Self {
            user_skills,
            careers,
            percentage_of_pursuing_user_skills: percentages.pursuing,
            percentage_of_graduated_user_skills: percentages.graduated,
            percentage_of_expelled_user_skills: percentages.expelled,
            percentage_of_resigned_user_skills: percentages.resigned,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
