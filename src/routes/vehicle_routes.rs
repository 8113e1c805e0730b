use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::controllers::rental_controller::RentalController;
use crate::dto::response_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    AddVehicleRequest, RentVehicleRequest, ReturnVehicleRequest, ReturnVehicleResponse,
    VehicleResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(add_vehicle))
        .route("/", get(list_vehicles))
        .route("/rent", post(rent_vehicle))
        .route("/return", post(return_vehicle))
        .route("/report", get(fleet_report))
}

async fn add_vehicle(
    State(state): State<AppState>,
    Json(request): Json<AddVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = RentalController::new(state.fleet.clone());
    let response = controller.add_vehicle(request).await?;
    Ok(Json(response))
}

async fn rent_vehicle(
    State(state): State<AppState>,
    Json(request): Json<RentVehicleRequest>,
) -> Result<Json<ApiResponse<VehicleResponse>>, AppError> {
    let controller = RentalController::new(state.fleet.clone());
    let response = controller.rent_vehicle(request).await?;
    Ok(Json(response))
}

async fn return_vehicle(
    State(state): State<AppState>,
    Json(request): Json<ReturnVehicleRequest>,
) -> Result<Json<ApiResponse<ReturnVehicleResponse>>, AppError> {
    let controller = RentalController::new(state.fleet.clone());
    let response = controller.return_vehicle(request).await?;
    Ok(Json(response))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleResponse>>, AppError> {
    let controller = RentalController::new(state.fleet.clone());
    let response = controller.list_vehicles().await;
    Ok(Json(response))
}

async fn fleet_report(
    State(state): State<AppState>,
) -> Result<Json<Vec<String>>, AppError> {
    let controller = RentalController::new(state.fleet.clone());
    let response = controller.fleet_report().await;
    Ok(Json(response))
}
