use crate::models::{Career, CohortCategory, Faculty, PerCategory, RankedSkill, Skill};
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when interacting with PostgreSQL
#[derive(Debug, Error)]
pub enum PostgresError {
    #[error("SQLx error: {0}")]
    SqlxError(#[from] sqlx::Error),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Read-only access to the academic records database
///
/// Every query here hands the core already-aggregated input: resolved career
/// rows, status counts and per-cohort skill rankings.
#[derive(Debug, Clone)]
pub struct PostgresClient {
    pool: PgPool,
}

impl PostgresClient {
    /// Create a new PostgreSQL client from a connection string
    pub async fn new(
        database_url: &str,
        max_connections: u32,
        min_connections: u32,
        acquire_timeout: Duration,
        idle_timeout: Duration,
    ) -> Result<Self, PostgresError> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .min_connections(min_connections)
            .acquire_timeout(acquire_timeout)
            .idle_timeout(idle_timeout)
            .test_before_acquire(true)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    /// Create a new PostgreSQL client from settings
    pub async fn from_settings(
        url: &str,
        max_connections: Option<u32>,
        min_connections: Option<u32>,
        acquire_timeout_secs: Option<u64>,
        idle_timeout_secs: Option<u64>,
    ) -> Result<Self, PostgresError> {
        tracing::info!("Connecting to PostgreSQL");

        Self::new(
            url,
            max_connections.unwrap_or(10),
            min_connections.unwrap_or(1),
            Duration::from_secs(acquire_timeout_secs.unwrap_or(5)),
            Duration::from_secs(idle_timeout_secs.unwrap_or(600)),
        )
        .await
    }

    /// Fetch a career by id
    pub async fn get_career(&self, career_id: i32) -> Result<Career, PostgresError> {
        let query = r#"
            SELECT id, name, description, semesters, credits, faculty_id
            FROM careers
            WHERE id = $1
        "#;

        sqlx::query_as::<_, Career>(query)
            .bind(career_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| PostgresError::NotFound(format!("career {}", career_id)))
    }

    /// Fetch a faculty by id, `None` if it does not exist
    pub async fn get_faculty(&self, faculty_id: i32) -> Result<Option<Faculty>, PostgresError> {
        let query = r#"
            SELECT id, name
            FROM faculties
            WHERE id = $1
        "#;

        let faculty = sqlx::query_as::<_, Faculty>(query)
            .bind(faculty_id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(faculty)
    }

    /// All careers, in id order
    pub async fn all_careers(&self) -> Result<Vec<Career>, PostgresError> {
        let query = r#"
            SELECT id, name, description, semesters, credits, faculty_id
            FROM careers
            ORDER BY id
        "#;

        let careers = sqlx::query_as::<_, Career>(query)
            .fetch_all(&self.pool)
            .await?;

        Ok(careers)
    }

    /// Skills owned by a user
    pub async fn user_skills(&self, user_id: &str) -> Result<Vec<Skill>, PostgresError> {
        let query = r#"
            SELECT s.id, s.name
            FROM skills s
            JOIN users_skills us ON us.skill_id = s.id
            WHERE us.user_id = $1
        "#;

        let skills = sqlx::query_as::<_, Skill>(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!("User {} owns {} skills", user_id, skills.len());

        Ok(skills)
    }

    /// Number of students of a career in each enrollment status
    pub async fn count_by_status(&self, career_id: i32) -> Result<PerCategory<i64>, PostgresError> {
        let query = r#"
            SELECT
                COUNT(*) FILTER (WHERE status = $2) as pursuing,
                COUNT(*) FILTER (WHERE status = $3) as graduated,
                COUNT(*) FILTER (WHERE status = $4) as expelled,
                COUNT(*) FILTER (WHERE status = $5) as resigned
            FROM users_careers
            WHERE career_id = $1
        "#;

        let row = sqlx::query(query)
            .bind(career_id)
            .bind(CohortCategory::Pursuing.db_status())
            .bind(CohortCategory::Graduated.db_status())
            .bind(CohortCategory::Expelled.db_status())
            .bind(CohortCategory::Resigned.db_status())
            .fetch_one(&self.pool)
            .await?;

        Ok(PerCategory {
            pursuing: row.try_get("pursuing")?,
            graduated: row.try_get("graduated")?,
            expelled: row.try_get("expelled")?,
            resigned: row.try_get("resigned")?,
        })
    }

    /// Skills of one cohort ranked by how many of its students own them
    ///
    /// Equal counts come back in whatever order PostgreSQL groups them.
    pub async fn ranked_skills(
        &self,
        career_id: i32,
        category: CohortCategory,
    ) -> Result<Vec<RankedSkill>, PostgresError> {
        let query = r#"
            SELECT s.id AS skill_id, s.name AS skill_name, COUNT(s.id) AS count
            FROM skills s
            JOIN users_skills us ON us.skill_id = s.id
            JOIN users u ON u.uid = us.user_id
            JOIN users_careers uc ON uc.user_id = u.uid
            WHERE uc.career_id = $1 AND uc.status = $2
            GROUP BY s.id, s.name
            ORDER BY count DESC
        "#;

        let ranked = sqlx::query_as::<_, RankedSkill>(query)
            .bind(career_id)
            .bind(category.db_status())
            .fetch_all(&self.pool)
            .await?;

        tracing::debug!(
            "Career {} has {} ranked skills for {:?} students",
            career_id,
            ranked.len(),
            category
        );

        Ok(ranked)
    }

    /// Rankings for all four cohorts of a career, queried concurrently
    pub async fn ranked_skills_by_category(
        &self,
        career_id: i32,
    ) -> Result<PerCategory<Vec<RankedSkill>>, PostgresError> {
        let (pursuing, graduated, expelled, resigned) = tokio::try_join!(
            self.ranked_skills(career_id, CohortCategory::Pursuing),
            self.ranked_skills(career_id, CohortCategory::Graduated),
            self.ranked_skills(career_id, CohortCategory::Expelled),
            self.ranked_skills(career_id, CohortCategory::Resigned),
        )?;

        Ok(PerCategory {
            pursuing,
            graduated,
            expelled,
            resigned,
        })
    }

    /// Health check for the database connection
    pub async fn health_check(&self) -> Result<bool, PostgresError> {
        sqlx::query("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|_| true)
            .map_err(Into::into)
    }
}
