// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    AttributeValue, Career, CohortCategory, ComparisonAttribute, ComparisonTable, Delta, DiffTriple,
    Faculty, PerCategory, ProgramProfile, RankedSkill, Skill, UserSkillSet, WeightedSkill,
};
pub use requests::{CompareCareersRequest, CompareSkillsRequest};
pub use responses::{ErrorResponse, HealthResponse, SkillMatchResponse};
