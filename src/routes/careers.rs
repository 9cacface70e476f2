use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{compare_programs, match_categories};
use crate::models::{
    Career, CompareCareersRequest, CompareSkillsRequest, HealthResponse, ProgramProfile,
    SkillMatchResponse, UserSkillSet,
};
use crate::routes::errors::ApiError;
use crate::services::{PostgresClient, PostgresError};
use std::sync::Arc;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub postgres: Arc<PostgresClient>,
}

/// Configure all career-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/", web::post().to(compare_careers))
        .route("/compare-skills", web::post().to(compare_skills));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let pg_healthy = state.postgres.health_check().await.unwrap_or(false);

    let status = if pg_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Load a career with its faculty and status counts
async fn load_program(postgres: &PostgresClient, career_id: i32) -> Result<ProgramProfile, PostgresError> {
    let career: Career = postgres.get_career(career_id).await?;

    let faculty = match career.faculty_id {
        Some(faculty_id) => postgres.get_faculty(faculty_id).await?,
        None => None,
    };
    if faculty.is_none() {
        tracing::warn!("Career {} has no resolvable faculty", career_id);
    }

    let status_counts = postgres.count_by_status(career_id).await?;

    Ok(ProgramProfile::new(career, faculty, status_counts))
}

/// Compare two careers
///
/// POST /
///
/// Form body: `career_id_1=<int>&career_id_2=<int>`
///
/// Responds with an object of `label -> [career_1, difference, career_2]`.
async fn compare_careers(
    state: web::Data<AppState>,
    form: web::Form<CompareCareersRequest>,
) -> Result<HttpResponse, ApiError> {
    form.validate()?;

    tracing::info!("Comparing careers {} and {}", form.career_id_1, form.career_id_2);

    let (first, second) = tokio::try_join!(
        load_program(&state.postgres, form.career_id_1),
        load_program(&state.postgres, form.career_id_2),
    )?;

    let comparison = compare_programs(&first, &second);

    Ok(HttpResponse::Ok().json(comparison))
}

/// Score a user's skills against each cohort of a career
///
/// POST /compare-skills
///
/// Form body: `user_id=<string>&career_id=<int>`
async fn compare_skills(
    state: web::Data<AppState>,
    form: web::Form<CompareSkillsRequest>,
) -> Result<HttpResponse, ApiError> {
    form.validate()?;

    let user_id = &form.user_id;
    let career_id = form.career_id;

    tracing::info!("Matching skills of user {} against career {}", user_id, career_id);

    let (user_skills, careers, ranked) = tokio::try_join!(
        state.postgres.user_skills(user_id),
        state.postgres.all_careers(),
        state.postgres.ranked_skills_by_category(career_id),
    )?;

    let owned: UserSkillSet = user_skills.iter().map(|skill| skill.id).collect();
    let percentages = match_categories(&owned, &ranked);

    tracing::info!(
        "User {} vs career {}: pursuing={} graduated={} expelled={} resigned={}",
        user_id,
        career_id,
        percentages.pursuing,
        percentages.graduated,
        percentages.expelled,
        percentages.resigned
    );

    Ok(HttpResponse::Ok().json(SkillMatchResponse::new(user_skills, careers, percentages)))
}
