use amenity_advisor::catalog::{Amenity, AmenityCatalog};
use amenity_advisor::config::AppConfig;
use amenity_advisor::error::AppError;
use amenity_advisor::listings::{
    InMemoryListingStore, ListingError, ListingService, NewProperty, NewTenantProfile, Property,
    PropertyId, TenantProfile,
};
use amenity_advisor::suggestions::{suggest, SuggestionCriteria};
use amenity_advisor::telemetry;
use axum::extract::{Path, Query, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use axum_prometheus::PrometheusMetricLayer;
use clap::{Args, Parser, Subcommand};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use serde_json::json;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
struct AppState {
    readiness: Arc<AtomicBool>,
    metrics: PrometheusHandle,
    catalog: Arc<AmenityCatalog>,
    listings: Arc<ListingService<InMemoryListingStore>>,
}

#[derive(Parser, Debug)]
#[command(
    name = "Amenity Advisor",
    about = "Run the amenity suggestion service or query it from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Query the amenity catalog and suggestion engine
    Amenities {
        #[command(subcommand)]
        command: AmenitiesCommand,
    },
}

#[derive(Args, Debug, Default)]
struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum AmenitiesCommand {
    /// Rank amenities for a tenant demographic
    Suggest(SuggestArgs),
    /// List the catalog's category vocabulary
    Categories,
}

#[derive(Args, Debug, Default)]
struct SuggestArgs {
    /// Amenity category to restrict to (e.g. fitness, work, luxury)
    #[arg(long)]
    category: Option<String>,
    /// Tenant lifestyle (e.g. "Young Professional")
    #[arg(long)]
    lifestyle: Option<String>,
    /// Tenant age range, lower bound first (e.g. 25-35)
    #[arg(long)]
    age_range: Option<String>,
    /// Tenant income range in any format containing digits (e.g. $100,000+)
    #[arg(long)]
    income_range: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CreateTenantProfileRequest {
    property_id: String,
    age_range: String,
    income_range: String,
    #[serde(default)]
    lifestyle: Option<String>,
    #[serde(default)]
    preferences: Vec<String>,
}

#[derive(Debug, Default, Deserialize)]
struct SuggestionQuery {
    category: Option<String>,
    lifestyle: Option<String>,
    age_range: Option<String>,
    income_range: Option<String>,
}

impl SuggestionQuery {
    /// A bare query string carries no criteria at all; anything else is a
    /// criteria object with the present fields applied.
    fn into_criteria(self) -> Option<SuggestionCriteria> {
        let criteria = SuggestionCriteria {
            category: self.category,
            lifestyle: self.lifestyle,
            age_range: self.age_range,
            income_range: self.income_range,
        };
        if criteria.is_empty() {
            None
        } else {
            Some(criteria)
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(err) = run_cli().await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

async fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => run_server(args).await,
        Command::Amenities {
            command: AmenitiesCommand::Suggest(args),
        } => run_suggest(args),
        Command::Amenities {
            command: AmenitiesCommand::Categories,
        } => run_categories(),
    }
}

async fn run_server(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(AtomicBool::new(false));

    // Seed before the listener binds so no request observes an empty catalog.
    let catalog = Arc::new(AmenityCatalog::new());
    let seeded = catalog.seed();
    info!(rows = seeded, "amenity catalog ready");

    let listings = Arc::new(ListingService::new(Arc::new(
        InMemoryListingStore::default(),
    )));
    let state = AppState {
        readiness: readiness_flag.clone(),
        metrics: prometheus_handle,
        catalog,
        listings,
    };

    let app = router(state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "amenity advisor ready");

    axum::serve(listener, app).await?;
    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route(
            "/api/v1/properties",
            post(create_property_endpoint).get(list_properties_endpoint),
        )
        .route(
            "/api/v1/properties/:id/tenant-profile",
            get(tenant_profile_endpoint),
        )
        .route(
            "/api/v1/tenant-profiles",
            post(create_tenant_profile_endpoint),
        )
        .route("/api/v1/amenities/suggestions", get(suggestions_endpoint))
        .route("/api/v1/amenities/categories", get(categories_endpoint))
        .with_state(state)
}

fn run_suggest(args: SuggestArgs) -> Result<(), AppError> {
    let catalog = AmenityCatalog::new();
    catalog.seed();

    let criteria = SuggestionCriteria {
        category: args.category,
        lifestyle: args.lifestyle,
        age_range: args.age_range,
        income_range: args.income_range,
    };
    let criteria = if criteria.is_empty() {
        None
    } else {
        Some(criteria)
    };
    let results = suggest(&catalog, criteria.as_ref());

    render_suggestions(criteria.as_ref(), &results);
    Ok(())
}

fn run_categories() -> Result<(), AppError> {
    let catalog = AmenityCatalog::new();
    catalog.seed();

    println!("Amenity categories");
    for category in catalog.categories() {
        println!("- {category}");
    }
    Ok(())
}

async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

async fn create_property_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<NewProperty>,
) -> Result<(StatusCode, Json<Property>), AppError> {
    let property = state.listings.create_property(payload)?;
    Ok((StatusCode::CREATED, Json(property)))
}

async fn list_properties_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<Property>>, AppError> {
    Ok(Json(state.listings.properties()?))
}

async fn tenant_profile_endpoint(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TenantProfile>, AppError> {
    let property_id = PropertyId(id);
    let profile = state
        .listings
        .tenant_profile(&property_id)?
        .ok_or(ListingError::PropertyNotFound(property_id))?;
    Ok(Json(profile))
}

async fn create_tenant_profile_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<CreateTenantProfileRequest>,
) -> Result<(StatusCode, Json<TenantProfile>), AppError> {
    let CreateTenantProfileRequest {
        property_id,
        age_range,
        income_range,
        lifestyle,
        preferences,
    } = payload;

    let profile = state.listings.create_tenant_profile(
        PropertyId(property_id),
        NewTenantProfile {
            age_range,
            income_range,
            lifestyle,
            preferences,
        },
    )?;
    Ok((StatusCode::CREATED, Json(profile)))
}

async fn suggestions_endpoint(
    State(state): State<AppState>,
    Query(query): Query<SuggestionQuery>,
) -> Json<Vec<Amenity>> {
    let criteria = query.into_criteria();
    Json(suggest(&state.catalog, criteria.as_ref()))
}

async fn categories_endpoint(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.catalog.categories())
}

fn render_suggestions(criteria: Option<&SuggestionCriteria>, results: &[Amenity]) {
    println!("Amenity suggestions");
    match criteria {
        Some(criteria) => {
            if let Some(category) = &criteria.category {
                println!("Category: {category}");
            }
            if let Some(lifestyle) = &criteria.lifestyle {
                println!("Lifestyle: {lifestyle}");
            }
            if let Some(age_range) = &criteria.age_range {
                println!("Age range: {age_range}");
            }
            if let Some(income_range) = &criteria.income_range {
                println!("Income range: {income_range}");
            }
        }
        None => println!("No criteria supplied; listing the full catalog"),
    }

    if results.is_empty() {
        println!("\nNo amenities matched");
        return;
    }

    println!("\n{} amenities", results.len());
    for amenity in results {
        let tags = amenity.target_demographics.join(", ");
        println!(
            "- {} [{}] est. cost {} | {}",
            amenity.name, amenity.category, amenity.estimated_cost, tags
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    fn test_state() -> AppState {
        static METRICS: OnceLock<PrometheusHandle> = OnceLock::new();
        let metrics = METRICS
            .get_or_init(|| PrometheusMetricLayer::pair().1)
            .clone();
        let catalog = Arc::new(AmenityCatalog::new());
        catalog.seed();
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics,
            catalog,
            listings: Arc::new(ListingService::new(Arc::new(
                InMemoryListingStore::default(),
            ))),
        }
    }

    fn sample_property() -> NewProperty {
        NewProperty {
            location: "500 Grand Ave, Des Moines".to_string(),
            units: 120,
            preferences: None,
            latitude: None,
            longitude: None,
        }
    }

    #[tokio::test]
    async fn property_then_profile_round_trip() {
        let state = test_state();

        let (status, Json(property)) =
            create_property_endpoint(State(state.clone()), Json(sample_property()))
                .await
                .expect("property created");
        assert_eq!(status, StatusCode::CREATED);

        let request = CreateTenantProfileRequest {
            property_id: property.id.0.clone(),
            age_range: "25-35".to_string(),
            income_range: "$85,000".to_string(),
            lifestyle: Some("Young Professional".to_string()),
            preferences: vec!["gym".to_string()],
        };
        let (status, Json(profile)) =
            create_tenant_profile_endpoint(State(state.clone()), Json(request))
                .await
                .expect("profile created");
        assert_eq!(status, StatusCode::CREATED);
        assert!(profile.ideal_tenant.contains("in 500 Grand Ave."));
        assert!(!profile.ideal_tenant.contains("Des Moines"));

        let Json(fetched) = tenant_profile_endpoint(State(state), Path(property.id.0))
            .await
            .expect("profile fetched");
        assert_eq!(fetched, profile);
    }

    #[tokio::test]
    async fn profile_for_unknown_property_is_404() {
        let state = test_state();
        let request = CreateTenantProfileRequest {
            property_id: "prop-424242".to_string(),
            age_range: "25-35".to_string(),
            income_range: "$85,000".to_string(),
            lifestyle: None,
            preferences: Vec::new(),
        };
        let err = create_tenant_profile_endpoint(State(state), Json(request))
            .await
            .expect_err("missing property rejected");
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn suggestions_endpoint_distinguishes_bare_queries() {
        let state = test_state();

        let Json(unbounded) =
            suggestions_endpoint(State(state.clone()), Query(SuggestionQuery::default())).await;
        assert_eq!(unbounded.len(), state.catalog.list_all().len());

        let query = SuggestionQuery {
            category: Some("fitness".to_string()),
            ..SuggestionQuery::default()
        };
        let Json(filtered) = suggestions_endpoint(State(state), Query(query)).await;
        assert!(!filtered.is_empty());
        assert!(filtered.iter().all(|amenity| amenity.category == "fitness"));
    }

    #[tokio::test]
    async fn health_route_responds_ok() {
        use tower::ServiceExt;

        let app = router(test_state());
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .expect("request built"),
            )
            .await
            .expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn duplicate_coordinates_conflict_over_http() {
        use tower::ServiceExt;

        let app = router(test_state());
        let body = json!({
            "location": "219 East Grand Ave, Des Moines",
            "units": 36,
            "latitude": 41.5868,
            "longitude": -93.6250
        })
        .to_string();
        let request = || {
            axum::http::Request::builder()
                .method("POST")
                .uri("/api/v1/properties")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body.clone()))
                .expect("request built")
        };

        let first = app.clone().oneshot(request()).await.expect("first insert");
        assert_eq!(first.status(), StatusCode::CREATED);

        let second = app.oneshot(request()).await.expect("second insert");
        assert_eq!(second.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn categories_endpoint_returns_sorted_vocabulary() {
        let state = test_state();
        let Json(categories) = categories_endpoint(State(state)).await;
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        assert!(categories.contains(&"luxury".to_string()));
    }
}
