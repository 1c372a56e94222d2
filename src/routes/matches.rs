use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::Matcher;
use crate::models::{
    CriteriaResponse, ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse,
    MatchOptions,
};
use crate::services::LenderCatalog;
use std::sync::Arc;

/// Fallback cap on returned matches when no `max_limit` is configured
const DEFAULT_MAX_LIMIT: usize = 500;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<LenderCatalog>,
    pub matcher: Matcher,
    pub default_limit: Option<usize>,
    pub max_limit: Option<usize>,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/criteria", web::get().to(list_criteria))
        .route("/lenders", web::get().to(list_lenders))
        .route("/lenders/{id}", web::get().to(get_lender));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let status = if state.catalog.is_empty() { "degraded" } else { "healthy" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        lenders: state.catalog.len(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "client": { "amount_considered": "$50,000", "personal_credit": "680" },
///   "program_type": "App Only",
///   "limit": 20
/// }
/// ```
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4();
    let max_limit = state.max_limit.unwrap_or(DEFAULT_MAX_LIMIT);
    let limit = req.limit.or(state.default_limit).map(|l| l.min(max_limit));

    let options = MatchOptions {
        program_type: req.program_type,
        limit,
    };

    let result = state
        .matcher
        .find_matches(state.catalog.lenders(), &req.client, &options);

    tracing::info!(
        %request_id,
        "Returning {} matches (from {} lenders)",
        result.matches.len(),
        result.total_lenders
    );

    HttpResponse::Ok().json(FindMatchesResponse {
        request_id,
        total_results: result.matches.len(),
        total_lenders: result.total_lenders,
        matches: result.matches,
    })
}

/// Criterion vocabulary with comparator kinds and weights
async fn list_criteria(state: web::Data<AppState>) -> impl Responder {
    let registry = state.matcher.registry();
    HttpResponse::Ok().json(CriteriaResponse {
        criteria: registry.definitions().to_vec(),
        default_weight: registry.default_weight(),
    })
}

/// Catalog listing without criteria
async fn list_lenders(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.catalog.summaries())
}

/// Single lender with its criteria
///
/// GET /api/v1/lenders/{id}
async fn get_lender(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    match state.catalog.get(&id) {
        Some(lender) => HttpResponse::Ok().json(lender),
        None => HttpResponse::NotFound().json(ErrorResponse {
            error: "Lender not found".to_string(),
            message: format!("No lender with id {}", id),
            status_code: 404,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    fn test_state() -> AppState {
        let catalog = LenderCatalog::from_json(
            r#"[{"id": "7", "name": "Summit", "program_type": "App Only",
                 "criteria": {"personal_credit": "650+"}}]"#,
        )
        .unwrap();
        AppState {
            catalog: Arc::new(catalog),
            matcher: Matcher::default(),
            default_limit: None,
            max_limit: Some(10),
        }
    }

    #[actix_web::test]
    async fn test_health_check_response() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.lenders, 1);
    }

    #[actix_web::test]
    async fn test_unknown_lender_is_404() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(test_state()))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get().uri("/lenders/99").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
    }
}
