//! HTTP endpoint server using Axum

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::{error, info, warn, Level};

use crate::dashboard::{
    industry_comparison, stock_options, technical_view, DashboardError, IndustryAnalysis,
};
use crate::dataset::{parse_timestamp, DatasetCache, DatasetError, DateRange, Frame, MarketData};
use crate::dataset::DOWNLOAD_FILE_NAME;
use crate::indicators::{parse_indicator_list, IndicatorError, IndicatorRegistry};
use crate::metrics::Metrics;

const DEFAULT_PAGE_LIMIT: usize = 100;

#[derive(Clone)]
pub struct AppState {
    pub health: Arc<RwLock<HealthStatus>>,
    pub metrics: Arc<Metrics>,
    pub start_time: Arc<Instant>,
    pub dataset_path: Arc<PathBuf>,
    pub cache: Arc<DatasetCache>,
}

impl AppState {
    pub fn new(dataset_path: PathBuf, metrics: Arc<Metrics>) -> Self {
        Self {
            health: Arc::new(RwLock::new(HealthStatus::default())),
            metrics,
            start_time: Arc::new(Instant::now()),
            dataset_path: Arc::new(dataset_path),
            cache: Arc::new(DatasetCache::new()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct HealthStatus {
    pub status: String,
}

impl Default for HealthStatus {
    fn default() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}

type ApiError = (StatusCode, Json<Value>);
type ApiResult<T> = Result<T, ApiError>;

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (status, Json(json!({ "error": message.into() })))
}

fn dataset_error(e: DatasetError) -> ApiError {
    match e {
        DatasetError::FileNotFound(_) => {
            warn!(error = %e, "Dataset unavailable");
            api_error(StatusCode::SERVICE_UNAVAILABLE, e.to_string())
        }
        DatasetError::MissingColumn(_) => api_error(StatusCode::BAD_REQUEST, e.to_string()),
        DatasetError::Io(_) | DatasetError::Csv(_) => {
            error!(error = %e, "Failed to load dataset");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}

fn dashboard_error(e: DashboardError) -> ApiError {
    match e {
        DashboardError::UnknownTicker(_) => api_error(StatusCode::NOT_FOUND, e.to_string()),
        DashboardError::MissingColumns(_) | DashboardError::Indicator(_) => {
            api_error(StatusCode::BAD_REQUEST, e.to_string())
        }
    }
}

fn indicator_error(e: IndicatorError) -> ApiError {
    api_error(StatusCode::BAD_REQUEST, e.to_string())
}

/// Load the dataset through the cache off the async runtime.
async fn load_frame(state: &AppState) -> ApiResult<Arc<Frame>> {
    let cache = state.cache.clone();
    let path = state.dataset_path.clone();
    let frame = tokio::task::spawn_blocking(move || cache.load(&path))
        .await
        .map_err(|e| {
            error!(error = %e, "Dataset load task failed");
            api_error(StatusCode::INTERNAL_SERVER_ERROR, "dataset load task failed")
        })?
        .map_err(dataset_error)?;

    state.metrics.dataset_rows.set(frame.len() as i64);
    Ok(frame)
}

async fn load_market(state: &AppState) -> ApiResult<MarketData> {
    let frame = load_frame(state).await?;
    MarketData::from_frame(&frame).map_err(dataset_error)
}

fn parse_date_param(name: &str, value: &str) -> ApiResult<chrono::NaiveDateTime> {
    parse_timestamp(value).ok_or_else(|| {
        api_error(
            StatusCode::BAD_REQUEST,
            format!("invalid {} date: {}", name, value),
        )
    })
}

#[derive(Debug, Default, Deserialize)]
struct RangeQuery {
    start: Option<String>,
    end: Option<String>,
}

impl RangeQuery {
    /// Missing ends fall back to `bounds`; `None` when no end is known.
    fn resolve(&self, bounds: Option<DateRange>) -> ApiResult<Option<DateRange>> {
        let start = match &self.start {
            Some(s) => Some(parse_date_param("start", s)?),
            None => bounds.map(|b| b.start),
        };
        let end = match &self.end {
            Some(s) => Some(parse_date_param("end", s)?),
            None => bounds.map(|b| b.end),
        };
        Ok(start.zip(end).map(|(start, end)| DateRange::new(start, end)))
    }
}

pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let health = state.health.read().await;
    let uptime_seconds = state.start_time.elapsed().as_secs();
    Ok(Json(json!({
        "status": health.status,
        "uptime_seconds": uptime_seconds,
        "service": "stockdash"
    })))
}

pub async fn metrics_handler(State(state): State<AppState>) -> Result<String, StatusCode> {
    state
        .metrics
        .export()
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// Middleware to track HTTP request metrics
async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    state.metrics.http_requests_in_flight.inc();
    let response = next.run(request).await;
    let status = response.status();
    let duration = start.elapsed();
    state.metrics.http_requests_in_flight.dec();

    state.metrics.http_requests_total.inc();
    state
        .metrics
        .http_request_duration_seconds
        .observe(duration.as_secs_f64());

    if status.is_server_error() {
        error!(
            method = %method,
            path = %path,
            status = %status,
            duration_ms = duration.as_millis(),
            "HTTP request error"
        );
    }

    response
}

/// Row count, column count and column names
async fn dataset_details(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let frame = load_frame(&state).await?;
    Ok(Json(json!(frame.details())))
}

#[derive(Debug, Deserialize)]
struct RowsQuery {
    offset: Option<usize>,
    limit: Option<usize>,
}

async fn dataset_rows(
    State(state): State<AppState>,
    Query(params): Query<RowsQuery>,
) -> ApiResult<Json<Value>> {
    let frame = load_frame(&state).await?;
    let page = frame.page(
        params.offset.unwrap_or(0),
        params.limit.unwrap_or(DEFAULT_PAGE_LIMIT),
    );
    Ok(Json(json!(page)))
}

async fn dataset_download(State(state): State<AppState>) -> ApiResult<Response> {
    let frame = load_frame(&state).await?;
    let body = frame.to_csv_bytes().map_err(dataset_error)?;
    let disposition = format!("attachment; filename=\"{}\"", DOWNLOAD_FILE_NAME);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}

async fn list_indicators() -> Json<Value> {
    Json(json!(IndicatorRegistry::new().describe()))
}

async fn industry_overview(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let data = load_market(&state).await?;
    let analysis = IndustryAnalysis::new(&data).map_err(dashboard_error)?;
    Ok(Json(json!({
        "dates": analysis.available_dates(),
        "industries": analysis.available_industries(),
        "bounds": analysis.date_bounds(),
    })))
}

#[derive(Debug, Deserialize)]
struct VolumeQuery {
    date: String,
}

async fn industry_volume(
    State(state): State<AppState>,
    Query(params): Query<VolumeQuery>,
) -> ApiResult<Json<Value>> {
    let date = parse_date_param("date", &params.date)?;
    let data = load_market(&state).await?;
    let analysis = IndustryAnalysis::new(&data).map_err(dashboard_error)?;
    Ok(Json(json!({
        "date": date,
        "industries": analysis.volume_on(date),
    })))
}

#[derive(Debug, Deserialize)]
struct TrendQuery {
    industry: String,
    #[serde(flatten)]
    range: RangeQuery,
}

async fn industry_trend(
    State(state): State<AppState>,
    Query(params): Query<TrendQuery>,
) -> ApiResult<Json<Value>> {
    let data = load_market(&state).await?;
    let analysis = IndustryAnalysis::new(&data).map_err(dashboard_error)?;
    let bounds = analysis.industry_bounds(&params.industry);
    let range = params.range.resolve(bounds)?;
    Ok(Json(json!({
        "industry": params.industry,
        "bounds": bounds,
        "range": range,
        "points": analysis.industry_trend(&params.industry, range),
    })))
}

async fn industry_trends(
    State(state): State<AppState>,
    Query(params): Query<RangeQuery>,
) -> ApiResult<Json<Value>> {
    let data = load_market(&state).await?;
    let analysis = IndustryAnalysis::new(&data).map_err(dashboard_error)?;
    let bounds = analysis.date_bounds();
    let range = params.resolve(bounds)?;
    Ok(Json(json!({
        "bounds": bounds,
        "range": range,
        "points": analysis.all_trends(range),
    })))
}

async fn list_stocks(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let data = load_market(&state).await?;
    let options = stock_options(&data).map_err(dashboard_error)?;
    Ok(Json(json!(options)))
}

#[derive(Debug, Deserialize)]
struct ChartQuery {
    indicators: Option<String>,
    #[serde(flatten)]
    range: RangeQuery,
}

/// Indicator columns and chart layout for one ticker
async fn stock_chart(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    Query(params): Query<ChartQuery>,
) -> ApiResult<Json<Value>> {
    let indicators = parse_indicator_list(params.indicators.as_deref().unwrap_or(""))
        .map_err(indicator_error)?;
    let data = load_market(&state).await?;
    let bounds = DateRange::spanning(data.ticker_bars(&ticker, None).iter().map(|b| b.date));
    let range = params.range.resolve(bounds)?;

    for indicator in &indicators {
        state
            .metrics
            .indicator_requests_total
            .with_label_values(&[indicator.token()])
            .inc();
    }

    let view = technical_view(&data, &ticker, range, &indicators).map_err(dashboard_error)?;
    Ok(Json(json!(view)))
}

async fn stock_industry_comparison(
    State(state): State<AppState>,
    Path(ticker): Path<String>,
    Query(params): Query<RangeQuery>,
) -> ApiResult<Json<Value>> {
    let data = load_market(&state).await?;
    let bounds = DateRange::spanning(data.ticker_bars(&ticker, None).iter().map(|b| b.date));
    let range = params.resolve(bounds)?;
    let comparison = industry_comparison(&data, &ticker, range).map_err(dashboard_error)?;
    Ok(Json(json!(comparison)))
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/metrics", get(metrics_handler))
        .route("/api/dataset", get(dataset_details))
        .route("/api/dataset/rows", get(dataset_rows))
        .route("/api/dataset/download", get(dataset_download))
        .route("/api/indicators", get(list_indicators))
        .route("/api/industries", get(industry_overview))
        .route("/api/industries/volume", get(industry_volume))
        .route("/api/industries/trend", get(industry_trend))
        .route("/api/industries/trends", get(industry_trends))
        .route("/api/stocks", get(list_stocks))
        .route("/api/stocks/{ticker}/chart", get(stock_chart))
        .route(
            "/api/stocks/{ticker}/industry-comparison",
            get(stock_industry_comparison),
        )
        .layer(
            ServiceBuilder::new()
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
                        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                        .on_response(DefaultOnResponse::new().level(Level::DEBUG)),
                )
                .layer(axum::middleware::from_fn_with_state(
                    state.clone(),
                    metrics_middleware,
                ))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn start_server(port: u16, dataset_path: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let metrics = Arc::new(Metrics::new()?);
    info!(path = %dataset_path.display(), "Serving dataset");
    let state = AppState::new(dataset_path, metrics);

    let app = create_router(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!(port = port, "HTTP server listening on port {}", port);
    info!(
        "Metrics endpoint available at http://0.0.0.0:{}/metrics",
        port
    );
    axum::serve(listener, app).await?;

    Ok(())
}
