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
    Form, Json, Router,
    extract::{
        Path, State as AxumState,
        rejection::{FormRejection, PathRejection},
    },
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use clap::Parser;
use safeguard_api::{
    ApiError, DeliveryInfo, DeliveryRequest, DeliveryResponse, EmployeeInfo, EmployeeRequest,
    EmployeeResponse, EquipmentInfo, EquipmentRequest, EquipmentResponse,
    RemovedEquipmentResponse,
};
use safeguard_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};


/// `SafeGuard` Server - HTTP server for the `SafeGuard` EPI tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file.
    #[arg(short, long, default_value = "safeguard.db")]
    database: String,

    /// Use an isolated in-memory database instead of the file.
    #[arg(long)]
    in_memory: bool,

    /// Address to bind the server to
    #[arg(short, long, default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 5000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// Each request locks the persistence handle for the duration of its
/// transaction.
#[derive(Clone)]
struct AppState {
    /// The persistence layer.
    persistence: Arc<Mutex<Persistence>>,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Always `error`.
    status: String,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            status: String::from("error"),
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidInput { .. } | ApiError::DuplicateResource { .. } => {
                warn!(error = %err, "Request rejected");
                Self {
                    status: StatusCode::BAD_REQUEST,
                    message: err.to_string(),
                }
            }
            ApiError::ResourceNotFound { .. } => Self {
                status: StatusCode::NOT_FOUND,
                message: err.to_string(),
            },
            ApiError::ReferenceViolation { .. } | ApiError::Internal { .. } => {
                error!(error = %err, "Request failed");
                Self {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    message: err.to_string(),
                }
            }
        }
    }
}

impl From<FormRejection> for HttpError {
    fn from(rejection: FormRejection) -> Self {
        warn!(error = %rejection, "Malformed form body");
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for HttpError {
    fn from(rejection: PathRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: rejection.body_text(),
        }
    }
}

/// Every successful call answers 201 with a JSON body.
type Created<T> = Result<(StatusCode, Json<T>), HttpError>;

const fn created<T>(body: T) -> (StatusCode, Json<T>) {
    (StatusCode::CREATED, Json(body))
}

/// Handler for POST /addFuncionario endpoint.
async fn handle_add_employee(
    AxumState(app_state): AxumState<AppState>,
    form: Result<Form<EmployeeRequest>, FormRejection>,
) -> Created<EmployeeResponse> {
    let Form(request) = form?;
    info!(cpf = %request.cpf, "Handling add_employee request");

    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeResponse = safeguard_api::create_employee(&mut persistence, &request)?;
    drop(persistence);

    Ok(created(response))
}

/// Handler for GET /selectFuncionario endpoint.
async fn handle_select_employees(
    AxumState(app_state): AxumState<AppState>,
) -> Created<Vec<EmployeeInfo>> {
    info!("Handling select_employees request");

    let mut persistence = app_state.persistence.lock().await;
    let employees: Vec<EmployeeInfo> = safeguard_api::list_employees(&mut persistence)?;
    drop(persistence);

    Ok(created(employees))
}

/// Handler for PUT /updateFuncionario/{employee_id} endpoint.
async fn handle_update_employee(
    AxumState(app_state): AxumState<AppState>,
    path: Result<Path<i64>, PathRejection>,
    form: Result<Form<EmployeeRequest>, FormRejection>,
) -> Created<EmployeeResponse> {
    let Path(employee_id) = path?;
    let Form(request) = form?;
    info!(employee_id, cpf = %request.cpf, "Handling update_employee request");

    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeResponse =
        safeguard_api::update_employee(&mut persistence, employee_id, &request)?;
    drop(persistence);

    Ok(created(response))
}

/// Handler for DELETE /deleteFuncionario/{employee_id} endpoint.
async fn handle_delete_employee(
    AxumState(app_state): AxumState<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Created<EmployeeResponse> {
    let Path(employee_id) = path?;
    info!(employee_id, "Handling delete_employee request");

    let mut persistence = app_state.persistence.lock().await;
    let response: EmployeeResponse = safeguard_api::delete_employee(&mut persistence, employee_id)?;
    drop(persistence);

    Ok(created(response))
}

/// Handler for POST /addEpi endpoint.
async fn handle_add_equipment(
    AxumState(app_state): AxumState<AppState>,
    form: Result<Form<EquipmentRequest>, FormRejection>,
) -> Created<EquipmentResponse> {
    let Form(request) = form?;
    info!(name = %request.name, "Handling add_equipment request");

    let mut persistence = app_state.persistence.lock().await;
    let response: EquipmentResponse = safeguard_api::create_equipment(&mut persistence, &request)?;
    drop(persistence);

    Ok(created(response))
}

/// Handler for GET /selectEpi endpoint.
async fn handle_select_equipment(
    AxumState(app_state): AxumState<AppState>,
) -> Created<Vec<EquipmentInfo>> {
    info!("Handling select_equipment request");

    let mut persistence = app_state.persistence.lock().await;
    let items: Vec<EquipmentInfo> = safeguard_api::list_equipment(&mut persistence)?;
    drop(persistence);

    Ok(created(items))
}

/// Handler for PUT /updateEpi/{equipment_id} endpoint.
async fn handle_update_equipment(
    AxumState(app_state): AxumState<AppState>,
    path: Result<Path<i64>, PathRejection>,
    form: Result<Form<EquipmentRequest>, FormRejection>,
) -> Created<EquipmentResponse> {
    let Path(equipment_id) = path?;
    let Form(request) = form?;
    info!(equipment_id, name = %request.name, "Handling update_equipment request");

    let mut persistence = app_state.persistence.lock().await;
    let response: EquipmentResponse =
        safeguard_api::update_equipment(&mut persistence, equipment_id, &request)?;
    drop(persistence);

    Ok(created(response))
}

/// Handler for DELETE /deleteEpi/{equipment_id} endpoint.
async fn handle_delete_equipment(
    AxumState(app_state): AxumState<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Created<RemovedEquipmentResponse> {
    let Path(equipment_id) = path?;
    info!(equipment_id, "Handling delete_equipment request");

    let mut persistence = app_state.persistence.lock().await;
    let response: RemovedEquipmentResponse =
        safeguard_api::delete_equipment(&mut persistence, equipment_id)?;
    drop(persistence);

    Ok(created(response))
}

/// Handler for POST /addEntrega endpoint.
async fn handle_add_delivery(
    AxumState(app_state): AxumState<AppState>,
    form: Result<Form<DeliveryRequest>, FormRejection>,
) -> Created<DeliveryResponse> {
    let Form(request) = form?;
    info!(
        employee_id = request.employee_id,
        equipment_id = request.equipment_id,
        "Handling add_delivery request"
    );

    let mut persistence = app_state.persistence.lock().await;
    let response: DeliveryResponse = safeguard_api::create_delivery(&mut persistence, &request)?;
    drop(persistence);

    Ok(created(response))
}

/// Handler for GET /selectEntrega endpoint.
async fn handle_select_deliveries(
    AxumState(app_state): AxumState<AppState>,
) -> Created<Vec<DeliveryInfo>> {
    info!("Handling select_deliveries request");

    let mut persistence = app_state.persistence.lock().await;
    let deliveries: Vec<DeliveryInfo> = safeguard_api::list_deliveries(&mut persistence)?;
    drop(persistence);

    Ok(created(deliveries))
}

/// Handler for PUT /updateEntrega/{delivery_id} endpoint.
async fn handle_update_delivery(
    AxumState(app_state): AxumState<AppState>,
    path: Result<Path<i64>, PathRejection>,
    form: Result<Form<DeliveryRequest>, FormRejection>,
) -> Created<DeliveryResponse> {
    let Path(delivery_id) = path?;
    let Form(request) = form?;
    info!(delivery_id, "Handling update_delivery request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeliveryResponse =
        safeguard_api::update_delivery(&mut persistence, delivery_id, &request)?;
    drop(persistence);

    Ok(created(response))
}

/// Handler for DELETE /deleteEntrega/{delivery_id} endpoint.
async fn handle_delete_delivery(
    AxumState(app_state): AxumState<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Created<DeliveryResponse> {
    let Path(delivery_id) = path?;
    info!(delivery_id, "Handling delete_delivery request");

    let mut persistence = app_state.persistence.lock().await;
    let response: DeliveryResponse = safeguard_api::delete_delivery(&mut persistence, delivery_id)?;
    drop(persistence);

    Ok(created(response))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/addFuncionario", post(handle_add_employee))
        .route("/selectFuncionario", get(handle_select_employees))
        .route(
            "/updateFuncionario/{employee_id}",
            put(handle_update_employee),
        )
        .route(
            "/deleteFuncionario/{employee_id}",
            delete(handle_delete_employee),
        )
        .route("/addEpi", post(handle_add_equipment))
        .route("/selectEpi", get(handle_select_equipment))
        .route("/updateEpi/{equipment_id}", put(handle_update_equipment))
        .route("/deleteEpi/{equipment_id}", delete(handle_delete_equipment))
        .route("/addEntrega", post(handle_add_delivery))
        .route("/selectEntrega", get(handle_select_deliveries))
        .route("/updateEntrega/{delivery_id}", put(handle_update_delivery))
        .route("/deleteEntrega/{delivery_id}", delete(handle_delete_delivery))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing SafeGuard Server");

    let persistence: Persistence = if args.in_memory {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    } else {
        info!(path = %args.database, "Using file-based database");
        Persistence::new_with_file(&args.database)?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!(%addr, "Server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
