use serde::ser::{SerializeMap, SerializeTuple};
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashSet;

/// Enrollment status of a student within a career
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CohortCategory {
    Pursuing,
    Graduated,
    Expelled,
    Resigned,
}

impl CohortCategory {
    /// All categories in response order
    pub const ALL: [CohortCategory; 4] = [
        CohortCategory::Pursuing,
        CohortCategory::Graduated,
        CohortCategory::Expelled,
        CohortCategory::Resigned,
    ];

    /// Status value as stored in `users_careers.status`
    pub fn db_status(self) -> &'static str {
        match self {
            CohortCategory::Pursuing => "cursando",
            CohortCategory::Graduated => "graduado",
            CohortCategory::Expelled => "expulsado",
            CohortCategory::Resigned => "dimitido",
        }
    }
}

/// One value per cohort category
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerCategory<T> {
    pub pursuing: T,
    pub graduated: T,
    pub expelled: T,
    pub resigned: T,
}

impl<T> PerCategory<T> {
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(CohortCategory) -> T,
    {
        Self {
            pursuing: f(CohortCategory::Pursuing),
            graduated: f(CohortCategory::Graduated),
            expelled: f(CohortCategory::Expelled),
            resigned: f(CohortCategory::Resigned),
        }
    }

    pub fn get(&self, category: CohortCategory) -> &T {
        match category {
            CohortCategory::Pursuing => &self.pursuing,
            CohortCategory::Graduated => &self.graduated,
            CohortCategory::Expelled => &self.expelled,
            CohortCategory::Resigned => &self.resigned,
        }
    }

    /// Apply `f` to every slot independently
    pub fn map<U, F>(&self, mut f: F) -> PerCategory<U>
    where
        F: FnMut(&T) -> U,
    {
        PerCategory::from_fn(|category| f(self.get(category)))
    }
}

/// Skill occurrence count within one (career, status) cohort
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct RankedSkill {
    pub skill_id: i32,
    pub skill_name: Option<String>,
    pub count: i64,
}

impl RankedSkill {
    pub fn new(skill_id: i32, skill_name: impl Into<String>, count: i64) -> Self {
        Self {
            skill_id,
            skill_name: Some(skill_name.into()),
            count,
        }
    }
}

/// A ranked skill with its rank multiplier attached
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedSkill {
    pub skill: RankedSkill,
    pub weight: i64,
}

impl WeightedSkill {
    #[inline]
    pub fn weighted_count(&self) -> i64 {
        self.skill.count * self.weight
    }
}

/// Skill ids owned by the user being scored
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSkillSet(HashSet<i32>);

impl UserSkillSet {
    #[inline]
    pub fn contains(&self, skill_id: i32) -> bool {
        self.0.contains(&skill_id)
    }
}

impl FromIterator<i32> for UserSkillSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Scalar attribute value of a compared entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Integer(i64),
    Text(String),
    Null,
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        AttributeValue::Integer(value)
    }
}

impl From<Option<i32>> for AttributeValue {
    fn from(value: Option<i32>) -> Self {
        value.map_or(AttributeValue::Null, |v| AttributeValue::Integer(v as i64))
    }
}

impl From<Option<String>> for AttributeValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(AttributeValue::Null, AttributeValue::Text)
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Text(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Text(value.to_string())
    }
}

/// Named attribute belonging to one compared entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonAttribute {
    pub label: String,
    pub value: AttributeValue,
}

impl ComparisonAttribute {
    pub fn new(label: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Middle slot of a diff triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delta {
    Numeric(i64),
    Empty,
}

impl Serialize for Delta {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Delta::Numeric(value) => serializer.serialize_i64(*value),
            Delta::Empty => serializer.serialize_str(""),
        }
    }
}

/// `(value_a, delta, value_b)`, serialized as a three-element array
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffTriple {
    pub left: AttributeValue,
    pub delta: Delta,
    pub right: AttributeValue,
}

impl Serialize for DiffTriple {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut tuple = serializer.serialize_tuple(3)?;
        tuple.serialize_element(&self.left)?;
        tuple.serialize_element(&self.delta)?;
        tuple.serialize_element(&self.right)?;
        tuple.end()
    }
}

/// Label -> triple mapping that keeps insertion order on the wire
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonTable {
    rows: Vec<(String, DiffTriple)>,
}

impl ComparisonTable {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rows: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, triple: DiffTriple) {
        self.rows.push((label.into(), triple));
    }

    pub fn get(&self, label: &str) -> Option<&DiffTriple> {
        self.rows
            .iter()
            .find(|(row_label, _)| row_label == label)
            .map(|(_, triple)| triple)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|(label, _)| label.as_str())
    }
}

impl Serialize for ComparisonTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.rows.len()))?;
        for (label, triple) in &self.rows {
            map.serialize_entry(label, triple)?;
        }
        map.end()
    }
}

/// Row of the `careers` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Career {
    pub id: i32,
    pub name: Option<String>,
    pub description: Option<String>,
    pub semesters: Option<i32>,
    pub credits: Option<i32>,
    pub faculty_id: Option<i32>,
}

/// Row of the `faculties` table
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Faculty {
    pub id: i32,
    pub name: Option<String>,
}

/// Row of the `skills` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Skill {
    pub id: i32,
    pub name: Option<String>,
}

/// A career resolved to everything the comparison view shows
#[derive(Debug, Clone)]
pub struct ProgramProfile {
    pub name: Option<String>,
    pub faculty: Option<String>,
    pub description: Option<String>,
    pub semesters: Option<i32>,
    pub credits: Option<i32>,
    pub status_counts: PerCategory<i64>,
}

impl ProgramProfile {
    pub fn new(career: Career, faculty: Option<Faculty>, status_counts: PerCategory<i64>) -> Self {
        Self {
            name: career.name,
            faculty: faculty.and_then(|f| f.name),
            description: career.description,
            semesters: career.semesters,
            credits: career.credits,
            status_counts,
        }
    }
}
