use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::{infer_relation, score_breakdown, Suggester};
use crate::error::ApiError;
use crate::models::{
    ClassifyRequest, ClassifyResponse, HealthResponse, ScoreRequest, ScoreResponse,
    SuggestRequest, SuggestResponse,
};

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub suggester: Suggester,
    pub matching: MatchingSettings,
}

/// Configure all suggestion-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/suggestions", web::post().to(suggest))
        .route("/relations/classify", web::post().to(classify))
        .route("/score", web::post().to(score));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Suggest relatives for a new member
///
/// POST /api/v1/suggestions
///
/// Request body:
/// ```json
/// {
///   "member": { "id": "string", "lastName": "string", "parentsIds": ["string"] },
///   "members": [{ "id": "string" }],
///   "limit": 20
/// }
/// ```
async fn suggest(
    state: web::Data<AppState>,
    req: web::Json<SuggestRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for suggestions request: {:?}", errors);
        return Err(errors.into());
    }

    let max_limit = state.matching.max_limit;
    let limit = req.limit.unwrap_or(state.matching.default_limit);
    if limit > max_limit {
        tracing::info!("Rejecting suggestions request with limit {} (max {})", limit, max_limit);
        return Err(ApiError::LimitOutOfRange { limit, max: max_limit });
    }
    let limit = limit as usize;

    let request_id = uuid::Uuid::new_v4().to_string();

    tracing::info!(
        "Suggesting relatives for member {} among {} members, limit: {} (request {})",
        req.member.id,
        req.members.len(),
        limit,
        request_id
    );

    let mut suggestions = state.suggester.suggest(&req.member, &req.members);
    let total_results = suggestions.len();
    suggestions.truncate(limit);

    let response = SuggestResponse {
        request_id,
        suggestions,
        total_candidates: req.members.len(),
        total_results,
    };

    tracing::info!(
        "Returning {} suggestions for member {} ({} above threshold)",
        response.suggestions.len(),
        req.member.id,
        total_results
    );

    Ok(HttpResponse::Ok().json(response))
}

/// Classify the relation between two members
///
/// POST /api/v1/relations/classify
///
/// Either member may be omitted, which yields `unknown`.
async fn classify(req: web::Json<ClassifyRequest>) -> impl Responder {
    let relation = infer_relation(req.member.as_ref(), req.candidate.as_ref());

    tracing::debug!(
        "Classified {:?} -> {:?}: {:?}",
        req.member.as_ref().map(|m| &m.id),
        req.candidate.as_ref().map(|m| &m.id),
        relation
    );

    HttpResponse::Ok().json(ClassifyResponse {
        relation,
        label: relation.label(),
    })
}

/// Score one pair of members and report which signals fired
///
/// POST /api/v1/score
async fn score(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> Result<HttpResponse, ApiError> {
    req.validate()?;

    let breakdown = score_breakdown(&req.member, &req.candidate, state.suggester.points());

    tracing::debug!(
        "Scored {} against {}: {} (raw {})",
        req.member.id,
        req.candidate.id,
        breakdown.score,
        breakdown.raw_total
    );

    Ok(HttpResponse::Ok().json(ScoreResponse {
        score: breakdown.score,
        breakdown,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::configure_routes;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    fn app_state() -> AppState {
        AppState {
            suggester: Suggester::with_defaults(),
            matching: MatchingSettings::default(),
        }
    }

    #[actix_web::test]
    async fn test_health_check() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/api/v1/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
    }

    #[actix_web::test]
    async fn test_suggestions_ranked_and_limited() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/suggestions")
            .set_json(json!({
                "member": { "id": "n1", "lastName": "Dupont", "parentsIds": ["p1"] },
                "members": [
                    { "id": "n1", "lastName": "Dupont", "parentsIds": ["p1"] },
                    { "id": "a", "lastName": "Martin", "parentsIds": ["p1"] },
                    { "id": "b", "lastName": "dupont", "parentsIds": ["p1"] },
                    { "id": "c", "lastName": "Dupont" }
                ],
                "limit": 1
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["total_candidates"], 4);
        assert_eq!(body["total_results"], 2);
        assert_eq!(body["suggestions"].as_array().unwrap().len(), 1);
        assert_eq!(body["suggestions"][0]["member"]["id"], "b");
        assert_eq!(body["suggestions"][0]["score"], 100);
        assert_eq!(body["suggestions"][0]["relation"], "sibling");
    }

    #[actix_web::test]
    async fn test_suggestions_rejects_empty_id() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/suggestions")
            .set_json(json!({ "member": { "id": "" }, "members": [] }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_suggestions_rejects_out_of_range_limit() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure_routes),
        )
        .await;

        for limit in [0, 101] {
            let req = test::TestRequest::post()
                .uri("/api/v1/suggestions")
                .set_json(json!({ "member": { "id": "n1" }, "members": [], "limit": limit }))
                .to_request();
            let resp = test::call_service(&app, req).await;

            assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "limit {}", limit);
        }
    }

    #[actix_web::test]
    async fn test_suggestions_accepts_max_limit() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/suggestions")
            .set_json(json!({ "member": { "id": "n1" }, "members": [], "limit": 100 }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["total_results"], 0);
        assert_eq!(body["suggestions"], json!([]));
    }

    #[actix_web::test]
    async fn test_classify_missing_member() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/relations/classify")
            .set_json(json!({ "candidate": { "id": "e1" } }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["relation"], "unknown");
        assert_eq!(body["label"], "Unknown");
    }

    #[actix_web::test]
    async fn test_classify_parent() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/relations/classify")
            .set_json(json!({
                "member": { "id": "n1", "parentsIds": ["e1"] },
                "candidate": { "id": "e1" }
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["relation"], "parent");
    }

    #[actix_web::test]
    async fn test_score_breakdown() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(app_state()))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/v1/score")
            .set_json(json!({
                "member": { "id": "a", "lastName": "Martin", "nationality": "French" },
                "candidate": { "id": "b", "lastName": "martin", "nationality": ["Belgian", "French"] }
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["score"], 20);
        assert_eq!(body["breakdown"]["sameLastName"], true);
        assert_eq!(body["breakdown"]["sameNationality"], true);
        assert_eq!(body["breakdown"]["sharedRelatives"], json!([]));
    }
}
