use crate::app_state::{AppState, SharedAppState};
use crate::cli::CommandLineArgs;
use crate::error::EnergyError;
use crate::metrics;
use crate::models::{CountryEnergy, EnergyAverages, NumericField};

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::any::Any;
use std::sync::Arc;
use tower::Layer;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

/// The service served by [crate::server::serve].
pub type Service = NormalizePath<Router>;

/// Returns a [Service] over the dataset named by the command line arguments.
///
/// The dataset is loaded here, once.
pub fn service(args: &CommandLineArgs) -> Service {
    service_with_state(Arc::new(AppState::new(args)))
}

/// Returns a [Service] over existing application state.
pub fn service_with_state(state: SharedAppState) -> Service {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}

/// Returns the query API router.
pub fn router(state: SharedAppState) -> Router {
    with_layers(
        Router::new()
            .route("/countries", get(country_names))
            .route("/countries/:region", get(countries_in_region))
            .route("/energy/:country", get(country_energy))
            .route("/total-renewable", get(total_renewable))
            .route("/total-nonrenewable", get(total_non_renewable))
            .route("/total-energy", get(total_energy))
            .route("/regions", get(regions))
            .route("/energy-averages", get(energy_averages))
            .route("/metrics", get(metrics::metrics_handler)),
    )
    .with_state(state)
}

/// Wrap every route of `router` in request tracing and metrics, CORS and panic recovery.
fn with_layers<S>(router: Router<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router.layer(
        ServiceBuilder::new()
            .layer(
                TraceLayer::new_for_http()
                    .on_request(metrics::request_counter)
                    .on_response(metrics::record_response_metrics),
            )
            .layer(CorsLayer::permissive())
            .layer(CatchPanicLayer::custom(handle_panic)),
    )
}

/// Convert a panic in a handler into a 500 response.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let details = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic message".to_string()
    };
    EnergyError::Internal(format!("handler panicked: {}", details)).into_response()
}

async fn country_names(State(state): State<SharedAppState>) -> Json<Vec<String>> {
    Json(state.engine.country_names())
}

async fn country_energy(
    State(state): State<SharedAppState>,
    Path(country): Path<String>,
) -> Result<Json<CountryEnergy>, EnergyError> {
    state.engine.country_energy(&country).map(Json)
}

async fn total_renewable(State(state): State<SharedAppState>) -> Json<Vec<f64>> {
    Json(state.engine.field_values(NumericField::TotalRenewable))
}

async fn total_non_renewable(State(state): State<SharedAppState>) -> Json<Vec<f64>> {
    Json(state.engine.field_values(NumericField::TotalNonRenewable))
}

async fn total_energy(State(state): State<SharedAppState>) -> Json<Vec<f64>> {
    Json(state.engine.field_values(NumericField::TotalEnergy))
}

async fn regions(State(state): State<SharedAppState>) -> Json<Vec<String>> {
    Json(state.engine.regions())
}

async fn countries_in_region(
    State(state): State<SharedAppState>,
    Path(region): Path<String>,
) -> Json<Vec<String>> {
    Json(state.engine.countries_in_region(&region))
}

async fn energy_averages(
    State(state): State<SharedAppState>,
) -> Result<Json<EnergyAverages>, EnergyError> {
    state.engine.averages().map(Json)
}
