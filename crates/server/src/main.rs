// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use cinema_booking::{BookingConfig, DraftPolicy, FlowController};
use cinema_booking_api::{
    ApiError, ConfirmRequest, ConfirmResponse, ListFilmsResponse, SeatMapResponse,
    SelectFilmRequest, SessionResponse, ToggleSeatRequest, ToggleSeatResponse, confirm,
    list_films, proceed, seat_map, select_film, session_view, toggle_seat,
};
use cinema_booking_domain::{DEFAULT_COLS, DEFAULT_FILMS, DEFAULT_ROWS, Price};
use cinema_booking_persistence::Persistence;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Cinema Booking Server - HTTP server for a single cinema booking session
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Price of a Standard seat, e.g. "10" or "12.50"
    #[arg(long, default_value = "10")]
    base_price: Price,

    /// A film to offer. Repeat for each film; defaults to the built-in catalog.
    #[arg(long = "film")]
    films: Vec<String>,

    /// Number of seat rows
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    rows: u8,

    /// Number of seats per row
    #[arg(long, default_value_t = DEFAULT_COLS)]
    cols: u8,

    /// Refuse to confirm reservations with an empty customer name
    #[arg(long)]
    require_customer_name: bool,

    /// Refuse to confirm reservations with no seats selected
    #[arg(long)]
    require_seats: bool,
}

impl Args {
    /// Builds the booking configuration from the command line.
    fn booking_config(&self) -> Result<BookingConfig, cinema_booking::ConfigError> {
        let config: BookingConfig = if self.films.is_empty() {
            BookingConfig::new(&DEFAULT_FILMS, self.base_price)?
        } else {
            BookingConfig::new(&self.films, self.base_price)?
        };

        Ok(config
            .with_grid_size(self.rows, self.cols)?
            .with_draft_policy(DraftPolicy {
                require_customer_name: self.require_customer_name,
                require_seats: self.require_seats,
            }))
    }
}

/// Application state shared across handlers.
///
/// There is exactly one booking session per process. Every request takes the
/// lock, so commands are applied one at a time.
#[derive(Clone)]
struct AppState {
    /// The booking flow and its reservation store.
    flow: Arc<Mutex<FlowController<Persistence>>>,
}

/// Error response body.
#[derive(Debug, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::CommandNotAvailable { .. } => StatusCode::CONFLICT,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::PersistenceFailed { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/films` endpoint.
async fn handle_list_films(AxumState(app_state): AxumState<AppState>) -> Json<ListFilmsResponse> {
    let flow = app_state.flow.lock().await;
    Json(list_films(&flow))
}

/// Handler for GET `/session` endpoint.
async fn handle_session(AxumState(app_state): AxumState<AppState>) -> Json<SessionResponse> {
    let flow = app_state.flow.lock().await;
    Json(session_view(&flow))
}

/// Handler for GET `/seats` endpoint.
async fn handle_seat_map(AxumState(app_state): AxumState<AppState>) -> Json<SeatMapResponse> {
    let flow = app_state.flow.lock().await;
    Json(seat_map(&flow))
}

/// Handler for POST `/film` endpoint.
async fn handle_select_film(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<SelectFilmRequest>,
) -> Result<Json<SessionResponse>, HttpError> {
    info!(film = %request.film, "Handling select_film request");

    let mut flow = app_state.flow.lock().await;
    Ok(Json(select_film(&mut flow, &request)?))
}

/// Handler for POST `/proceed` endpoint.
///
/// Moves from the menu to seat selection, or from seat selection to
/// confirmation.
async fn handle_proceed(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<SessionResponse>, HttpError> {
    let mut flow = app_state.flow.lock().await;
    info!(stage = %flow.stage(), "Handling proceed request");
    Ok(Json(proceed(&mut flow)?))
}

/// Handler for POST `/seats/toggle` endpoint.
async fn handle_toggle_seat(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<ToggleSeatRequest>,
) -> Result<Json<ToggleSeatResponse>, HttpError> {
    let mut flow = app_state.flow.lock().await;
    Ok(Json(toggle_seat(&mut flow, request)?))
}

/// Handler for POST `/confirm` endpoint.
async fn handle_confirm(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<ConfirmRequest>,
) -> Result<Json<ConfirmResponse>, HttpError> {
    info!("Handling confirm request");

    let mut flow = app_state.flow.lock().await;
    Ok(Json(confirm(&mut flow, &request)?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/films", get(handle_list_films))
        .route("/session", get(handle_session))
        .route("/seats", get(handle_seat_map))
        .route("/film", post(handle_select_film))
        .route("/proceed", post(handle_proceed))
        .route("/seats/toggle", post(handle_toggle_seat))
        .route("/confirm", post(handle_confirm))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Cinema Booking Server");

    let config: BookingConfig = args.booking_config()?;
    info!(
        films = config.catalog().films().len(),
        base_price = %config.pricing().base_price(),
        rows = config.rows(),
        cols = config.cols(),
        "Loaded booking configuration"
    );

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let flow: FlowController<Persistence> = FlowController::new(Arc::new(config), persistence)?;

    let app_state: AppState = AppState {
        flow: Arc::new(Mutex::new(flow)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
