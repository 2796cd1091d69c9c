//! # API REST
//!
//! REST API implementation for Collaboro.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status mapping)
//!
//! Uses `api-shared` for wire types and `collaboro-core` for all domain
//! logic. The discovery endpoints are read-only views over the immutable
//! catalog; the interest endpoint is the only write path.

use axum::{
    extract::{Path as AxumPath, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;
use utoipa::{IntoParams, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use api_shared::wire::{
    CreateInterestReq, CreateInterestRes, ErrorRes, HealthRes, ListOpportunitiesRes,
    ListServicePointsRes, MapPositionRes, OpportunityRes, ServicePointRes, TaskRes,
};
use api_shared::HealthService;
use collaboro_core::{
    query, CatalogRepository, CatalogResult, CoreConfig, FilterState, InMemoryCatalog,
    InMemoryInterestStore, InterestError, InterestRole, InterestStore, InterestSubmission,
    Opportunity, RadiusKm, ServicePoint, Task, TypeFilter,
};

type ApiError = (StatusCode, Json<ErrorRes>);

/// Application state shared across REST API handlers.
///
/// The catalog is immutable and shared; the interest store is the only
/// mutable state and sits behind a mutex because handlers run on a
/// multi-threaded runtime.
#[derive(Clone)]
pub struct AppState {
    repository: Arc<InMemoryCatalog>,
    interests: Arc<Mutex<InMemoryInterestStore>>,
    include_business_listings: bool,
}

impl AppState {
    /// Builds the application state from resolved configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`collaboro_core::CatalogError`] if the configured catalog
    /// fails to load or validate.
    pub fn from_config(config: &CoreConfig) -> CatalogResult<Self> {
        Ok(Self {
            repository: Arc::new(config.load_catalog()?),
            interests: Arc::new(Mutex::new(InMemoryInterestStore::new())),
            include_business_listings: config.include_business_listings(),
        })
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        list_opportunities,
        get_opportunity,
        list_service_points,
        create_interest,
    ),
    components(schemas(
        HealthRes,
        ErrorRes,
        ListOpportunitiesRes,
        OpportunityRes,
        TaskRes,
        MapPositionRes,
        ListServicePointsRes,
        ServicePointRes,
        CreateInterestReq,
        CreateInterestRes,
    ))
)]
struct ApiDoc;

/// Builds the REST router with all routes, documentation, and CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/opportunities", get(list_opportunities))
        .route("/opportunities/:id", get(get_opportunity))
        .route("/service-points", get(list_service_points))
        .route("/interest", post(create_interest))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Query parameters of the opportunity listing.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListOpportunitiesParams {
    /// Free-text query; blank means no text filter.
    pub search: Option<String>,
    /// One of 1, 3, 5, 10 (kilometres). Defaults to 3.
    pub radius_km: Option<u32>,
    /// `nonprofit`, `business`, or `all`. Defaults to `nonprofit`.
    #[serde(rename = "type")]
    pub type_filter: Option<String>,
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks.
#[axum::debug_handler]
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/opportunities",
    params(ListOpportunitiesParams),
    responses(
        (status = 200, description = "Visible opportunities for the filter state", body = ListOpportunitiesRes),
        (status = 400, description = "Invalid radius or type filter", body = ErrorRes)
    )
)]
/// List the opportunities visible under the given filter state
///
/// Runs the query engine over the catalog: capability gate, type filter,
/// radius, then text search, preserving catalog order. An empty result is a
/// normal outcome, not an error.
///
/// # Errors
/// Returns `400 Bad Request` if:
/// - `radius_km` is outside the closed set {1, 3, 5, 10}, or
/// - `type` is not one of `nonprofit`, `business`, `all`.
#[axum::debug_handler]
async fn list_opportunities(
    State(state): State<AppState>,
    Query(params): Query<ListOpportunitiesParams>,
) -> Result<Json<ListOpportunitiesRes>, ApiError> {
    let filter = filter_state(&state, params)?;
    let visible = query::visible(state.repository.opportunities(), &filter);

    Ok(Json(ListOpportunitiesRes {
        total: visible.len(),
        opportunities: visible.into_iter().map(opportunity_res).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/opportunities/{id}",
    params(
        ("id" = String, Path, description = "Opportunity identifier")
    ),
    responses(
        (status = 200, description = "Full opportunity record", body = OpportunityRes),
        (status = 404, description = "No opportunity with this id", body = ErrorRes)
    )
)]
/// Resolve one opportunity for detail display
///
/// Selection state is independent of the filtered list: an id that has been
/// filtered out of the visible set still resolves here. Only an id absent
/// from the catalog is a 404.
#[axum::debug_handler]
async fn get_opportunity(
    State(state): State<AppState>,
    AxumPath(id): AxumPath<String>,
) -> Result<Json<OpportunityRes>, ApiError> {
    match state.repository.resolve(&id) {
        Some(opportunity) => Ok(Json(opportunity_res(opportunity))),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorRes {
                message: format!("no opportunity with id {id}"),
            }),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/service-points",
    responses(
        (status = 200, description = "All recommended service points", body = ListServicePointsRes)
    )
)]
/// List the recommended safe meeting locations
#[axum::debug_handler]
async fn list_service_points(State(state): State<AppState>) -> Json<ListServicePointsRes> {
    Json(ListServicePointsRes {
        service_points: state
            .repository
            .service_points()
            .iter()
            .map(service_point_res)
            .collect(),
    })
}

#[utoipa::path(
    post,
    path = "/interest",
    request_body = CreateInterestReq,
    responses(
        (status = 201, description = "Interest recorded", body = CreateInterestRes),
        (status = 400, description = "Field validation failure", body = ErrorRes),
        (status = 409, description = "This email has already expressed interest", body = ErrorRes),
        (status = 429, description = "Same email resubmitted too quickly", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Record an expression of interest from the waitlist form
///
/// # Errors
/// Returns `400` for field-level validation failures (recoverable by user
/// correction), `409` when the email is already recorded, and `429` when the
/// same email was submitted less than a minute ago.
#[axum::debug_handler]
async fn create_interest(
    State(state): State<AppState>,
    Json(req): Json<CreateInterestReq>,
) -> Result<(StatusCode, Json<CreateInterestRes>), ApiError> {
    let role = match req.role.as_deref() {
        None => None,
        Some(value) => Some(parse_role(value)?),
    };

    let submission = InterestSubmission {
        first_name: req.first_name,
        email: req.email,
        role,
        neighborhood: req.neighborhood,
        motivation: req.motivation,
    };
    let email = collaboro_core::validation::canonical_email(&submission.email);

    let mut store = match state.interests.lock() {
        Ok(guard) => guard,
        Err(e) => {
            tracing::error!("interest store lock poisoned: {e}");
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorRes {
                    message: "Internal error".into(),
                }),
            ));
        }
    };

    match store.submit(submission) {
        Ok(id) => Ok((
            StatusCode::CREATED,
            Json(CreateInterestRes {
                id: id.to_string(),
                email,
            }),
        )),
        Err(e) => {
            tracing::warn!(error = %e, "interest submission rejected");
            Err((interest_status(&e), Json(ErrorRes { message: e.to_string() })))
        }
    }
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

/// Builds the validated filter state for a listing request.
///
/// Rejection happens here, at the boundary; the query engine itself accepts
/// every filter state it is given.
fn filter_state(state: &AppState, params: ListOpportunitiesParams) -> Result<FilterState, ApiError> {
    let radius = match params.radius_km {
        Some(km) => RadiusKm::try_from_km(km).map_err(bad_request)?,
        None => RadiusKm::default(),
    };

    let type_filter = match params.type_filter.as_deref() {
        Some(value) => value.parse::<TypeFilter>().map_err(bad_request)?,
        None => TypeFilter::default(),
    };

    Ok(FilterState {
        search: params.search.unwrap_or_default(),
        radius,
        type_filter,
        include_business_listings: state.include_business_listings,
    })
}

fn parse_role(value: &str) -> Result<InterestRole, ApiError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "volunteer" => Ok(InterestRole::Volunteer),
        "nonprofit" => Ok(InterestRole::Nonprofit),
        "business" => Ok(InterestRole::Business),
        other => Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorRes {
                message: format!("unknown role: {other}"),
            }),
        )),
    }
}

fn bad_request(error: impl std::fmt::Display) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorRes {
            message: error.to_string(),
        }),
    )
}

fn interest_status(error: &InterestError) -> StatusCode {
    match error {
        InterestError::DuplicateEmail => StatusCode::CONFLICT,
        InterestError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
        _ => StatusCode::BAD_REQUEST,
    }
}

fn opportunity_res(opportunity: &Opportunity) -> OpportunityRes {
    OpportunityRes {
        id: opportunity.id.clone(),
        name: opportunity.name.clone(),
        neighborhood: opportunity.neighborhood.clone(),
        opportunity_type: opportunity.opportunity_type.to_string(),
        verified: opportunity.verified,
        distance_km: opportunity.distance_km,
        categories: opportunity.categories.clone(),
        short_description: opportunity.short_description.clone(),
        tasks: opportunity.tasks.iter().map(task_res).collect(),
        map_position: MapPositionRes {
            x: opportunity.map_position.x.value(),
            y: opportunity.map_position.y.value(),
        },
    }
}

fn task_res(task: &Task) -> TaskRes {
    TaskRes {
        id: task.id.clone(),
        title: task.title.clone(),
        description: task.description.clone(),
        duration: task.duration.clone(),
        when: task.when.clone(),
        youth_friendly: task.youth_friendly,
    }
}

fn service_point_res(point: &ServicePoint) -> ServicePointRes {
    ServicePointRes {
        id: point.id.clone(),
        name: point.name.clone(),
        neighborhood: point.neighborhood.clone(),
        verified: point.verified,
        map_position: MapPositionRes {
            x: point.map_position.x.value(),
            y: point.map_position.y.value(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn app() -> Router {
        let state = AppState::from_config(&CoreConfig::default()).expect("seed loads");
        router(state)
    }

    fn gated_app() -> Router {
        let state =
            AppState::from_config(&CoreConfig::new(None, true)).expect("seed loads");
        router(state)
    }

    async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("request runs");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        let value = serde_json::from_slice(&bytes).expect("body is JSON");
        (status, value)
    }

    async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .expect("request builds"),
            )
            .await
            .expect("request runs");
        let status = response.status();
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body collects")
            .to_bytes();
        let value = serde_json::from_slice(&bytes).expect("body is JSON");
        (status, value)
    }

    #[tokio::test]
    async fn health_reports_alive() {
        let (status, body) = get_json(app(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["ok"], true);
    }

    #[tokio::test]
    async fn default_listing_shows_nearby_nonprofits() {
        let (status, body) = get_json(app(), "/opportunities").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 3);
        assert_eq!(body["opportunities"][0]["id"], "obnl-rosemont");
        assert_eq!(body["opportunities"][0]["type"], "nonprofit");
    }

    #[tokio::test]
    async fn unsupported_radius_is_rejected_at_the_boundary() {
        let (status, body) = get_json(app(), "/opportunities?radius_km=2").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"]
            .as_str()
            .expect("message is text")
            .contains("radius"));
    }

    #[tokio::test]
    async fn unknown_type_filter_is_rejected() {
        let (status, _) = get_json(app(), "/opportunities?type=cooperative").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn empty_result_is_a_valid_state() {
        let (status, body) = get_json(app(), "/opportunities?type=business&radius_km=1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn text_search_is_forwarded_to_the_engine() {
        let (status, body) =
            get_json(app(), "/opportunities?radius_km=10&search=paniers").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
        assert_eq!(body["opportunities"][0]["id"], "obnl-rosemont");
    }

    #[tokio::test]
    async fn capability_gate_hides_businesses_from_every_view() {
        let (status, body) =
            get_json(gated_app(), "/opportunities?type=all&radius_km=10").await;
        assert_eq!(status, StatusCode::OK);
        let listed = body["opportunities"].as_array().expect("array");
        assert!(listed.iter().all(|o| o["type"] == "nonprofit"));

        let (status, body) =
            get_json(gated_app(), "/opportunities?type=business&radius_km=10").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 0);
    }

    #[tokio::test]
    async fn detail_resolves_even_outside_the_visible_set() {
        // parcex sits at 4.8 km, outside the default 3 km radius, but detail
        // resolution is independent of the filtered list.
        let (status, body) = get_json(app(), "/opportunities/obnl-parcex").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Jardin collectif Parc-Extension");
        assert_eq!(body["categories"][0], "Environnement");
    }

    #[tokio::test]
    async fn unknown_id_is_not_found_not_an_error() {
        let (status, _) = get_json(app(), "/opportunities/nonexistent-id").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn service_points_are_listed() {
        let (status, body) = get_json(app(), "/service-points").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["service_points"]
                .as_array()
                .expect("array")
                .len(),
            3
        );
    }

    #[tokio::test]
    async fn valid_interest_is_created() {
        let (status, body) = post_json(
            app(),
            "/interest",
            serde_json::json!({
                "first_name": "Jeanne",
                "email": "Jeanne@Example.com",
                "role": "volunteer",
                "neighborhood": "Rosemont",
                "motivation": "Je veux aider les organismes de mon quartier."
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["email"], "jeanne@example.com");
    }

    #[tokio::test]
    async fn rapid_resubmission_is_throttled() {
        let app = app();
        let payload = serde_json::json!({
            "first_name": "Jeanne",
            "email": "jeanne@example.com",
            "role": "volunteer",
            "motivation": "Je veux aider les organismes de mon quartier."
        });
        let (status, _) = post_json(app.clone(), "/interest", payload.clone()).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) = post_json(app, "/interest", payload).await;
        assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    }

    #[tokio::test]
    async fn field_validation_failures_are_bad_requests() {
        let (status, body) = post_json(
            app(),
            "/interest",
            serde_json::json!({
                "first_name": "Jeanne",
                "email": "jeanne@example.com",
                "role": "volunteer",
                "motivation": "court"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"]
            .as_str()
            .expect("message is text")
            .contains("motivation"));
    }

    #[tokio::test]
    async fn missing_role_is_a_bad_request() {
        let (status, _) = post_json(
            app(),
            "/interest",
            serde_json::json!({
                "first_name": "Jeanne",
                "email": "jeanne@example.com",
                "motivation": "Je veux aider les organismes de mon quartier."
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn unknown_role_is_a_bad_request() {
        let (status, body) = post_json(
            app(),
            "/interest",
            serde_json::json!({
                "first_name": "Jeanne",
                "email": "jeanne@example.com",
                "role": "supervisor",
                "motivation": "Je veux aider les organismes de mon quartier."
            }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["message"]
            .as_str()
            .expect("message is text")
            .contains("role"));
    }
}
