use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::Matcher;
use crate::error::ApiError;
use crate::models::{EvaluateMatchRequest, HealthResponse, RankApplicantsRequest};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub matcher: Matcher,
    pub max_batch_size: usize,
    pub default_limit: usize,
}

impl AppState {
    pub fn new(matcher: Matcher, max_batch_size: usize, default_limit: usize) -> Self {
        Self {
            matcher,
            max_batch_size,
            default_limit,
        }
    }
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/evaluate", web::post().to(evaluate_match))
        .route("/matches/rank", web::post().to(rank_applicants));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Screen one applicant against one posting
///
/// POST /api/v1/matches/evaluate
///
/// Request body:
/// ```json
/// {
///   "posting": { "title": "string", "skillsRequired": ["string"], "...": "..." },
///   "applicant": { "name": "string", "skills": ["string"], "...": "..." },
///   "threshold": 80
/// }
/// ```
async fn evaluate_match(
    state: web::Data<AppState>,
    req: web::Json<EvaluateMatchRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for evaluate request: {:?}", errors);
        return Err(errors.into());
    }

    let threshold = req.threshold.unwrap_or(state.matcher.threshold());
    let evaluation = state
        .matcher
        .evaluate_with_threshold(&req.posting, &req.applicant, threshold);

    tracing::info!(
        "Evaluated applicant {}: score {} -> {}",
        req.applicant.id.as_deref().unwrap_or("<anonymous>"),
        evaluation.score,
        evaluation.decision
    );

    Ok(HttpResponse::Ok().json(evaluation))
}

/// Screen and rank a batch of applicants for one posting
///
/// POST /api/v1/matches/rank
///
/// Request body:
/// ```json
/// {
///   "posting": { "...": "..." },
///   "applicants": [{ "_id": "string", "name": "string", "...": "..." }],
///   "threshold": 80,
///   "limit": 20
/// }
/// ```
async fn rank_applicants(
    state: web::Data<AppState>,
    req: web::Json<RankApplicantsRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return Err(errors.into());
    }

    if req.applicants.len() > state.max_batch_size {
        return Err(ApiError::BatchTooLarge {
            size: req.applicants.len(),
            max: state.max_batch_size,
        });
    }

    let threshold = req.threshold.unwrap_or(state.matcher.threshold());
    let limit = req
        .limit
        .map(usize::from)
        .unwrap_or(state.default_limit);

    // Large batches are CPU-bound; keep them off the async worker
    let matcher = state.matcher.clone();
    let RankApplicantsRequest {
        posting, applicants, ..
    } = req.into_inner();
    let ranked = web::block(move || matcher.rank(&posting, &applicants, threshold, limit)).await?;

    tracing::info!(
        "Ranked {} applicants ({} proceed to recruiter), returning {}",
        ranked.total_applicants,
        ranked.proceed_count,
        ranked.results.len()
    );

    Ok(HttpResponse::Ok().json(ranked))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::json;

    fn app_state() -> web::Data<AppState> {
        web::Data::new(AppState::new(Matcher::with_defaults(), 3, 50))
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(App::new().configure(configure)).await;
        let req = test::TestRequest::get().uri("/health").to_request();
        let body: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.status, "healthy");
    }

    #[actix_web::test]
    async fn test_threshold_out_of_range() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/matches/evaluate")
            .set_json(json!({ "posting": {}, "applicant": {}, "threshold": 150 }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_batch_over_limit() {
        let app = test::init_service(App::new().app_data(app_state()).configure(configure)).await;
        let req = test::TestRequest::post()
            .uri("/matches/rank")
            .set_json(json!({ "posting": {}, "applicants": [{}, {}, {}, {}] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }
}
