//! Controller del ciclo de alquiler
//!
//! Este módulo contiene las cuatro operaciones del core: add, rent,
//! return y list. Cada operación toma el lock del inventario una sola
//! vez y muta como máximo un registro.

use std::sync::Arc;

use tokio::sync::RwLock;
use validator::Validate;

use crate::dto::response_dto::ApiResponse;
use crate::dto::vehicle_dto::{
    AddVehicleRequest, RentVehicleRequest, ReturnVehicleRequest, ReturnVehicleResponse,
    VehicleResponse,
};
use crate::models::vehicle::VehicleStatus;
use crate::repositories::fleet_repository::FleetRepository;
use crate::services::billing_service;
use crate::utils::datetime::parse_datetime;
use crate::utils::errors::{validation_error, AppError, AppResult};
use crate::utils::validation::{parse_price, validate_not_empty};

pub struct RentalController {
    fleet: Arc<RwLock<FleetRepository>>,
}

impl RentalController {
    pub fn new(fleet: Arc<RwLock<FleetRepository>>) -> Self {
        Self { fleet }
    }

    /// Agregar un vehículo nuevo a la flota
    pub async fn add_vehicle(
        &self,
        request: AddVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        // length(min) no cubre ids de solo espacios
        if validate_not_empty(&request.vehicle_id).is_err() {
            return Err(validation_error("vehicle_id", "vehicle_id is required"));
        }
        if validate_not_empty(&request.model).is_err() {
            return Err(validation_error("model", "model is required"));
        }

        let price_per_day = parse_price(&request.price_per_day)?;

        let mut fleet = self.fleet.write().await;
        let vehicle = fleet.add(request.vehicle_id, request.model, price_per_day);

        log::info!("Vehicle added: {}", vehicle.display_line());

        Ok(ApiResponse::success_with_message(
            VehicleResponse::from(vehicle),
            format!("Vehicle added: {}", vehicle.display_line()),
        ))
    }

    /// Alquilar el primer vehículo disponible con ese id
    pub async fn rent_vehicle(
        &self,
        request: RentVehicleRequest,
    ) -> AppResult<ApiResponse<VehicleResponse>> {
        request.validate()?;

        let pickup_at = parse_datetime(&request.pickup_at)?;

        let mut fleet = self.fleet.write().await;

        if let Some(vehicle) = fleet.find_first_available_mut(&request.vehicle_id) {
            vehicle.status = VehicleStatus::Rented;
            vehicle.pickup_at = Some(pickup_at);

            log::info!("Vehicle rented: {}", vehicle.display_line());

            return Ok(ApiResponse::success_with_message(
                VehicleResponse::from(&*vehicle),
                format!("Vehicle rented: {}", vehicle.display_line()),
            ));
        }

        // Sin coincidencia: diferenciar id desconocido de vehículo ya alquilado
        if fleet.contains_id(&request.vehicle_id) {
            log::warn!("Rent rejected, already rented: '{}'", request.vehicle_id);
            Err(AppError::AlreadyRented(request.vehicle_id))
        } else {
            log::warn!("Rent rejected, unknown vehicle: '{}'", request.vehicle_id);
            Err(AppError::UnknownVehicle(request.vehicle_id))
        }
    }

    /// Devolver el primer vehículo alquilado con ese id y calcular el costo
    pub async fn return_vehicle(
        &self,
        request: ReturnVehicleRequest,
    ) -> AppResult<ApiResponse<ReturnVehicleResponse>> {
        request.validate()?;

        let returned_at = parse_datetime(&request.returned_at)?;

        let mut fleet = self.fleet.write().await;

        if let Some(vehicle) = fleet.find_first_rented_mut(&request.vehicle_id) {
            // Un registro alquilado siempre tiene pickup; si no, el estado es inconsistente
            let pickup_at = vehicle.pickup_at.ok_or_else(|| {
                AppError::Inconsistency(format!(
                    "rented vehicle '{}' has no pickup timestamp",
                    vehicle.vehicle_id
                ))
            })?;

            let total_cost =
                billing_service::rental_cost(pickup_at, returned_at, vehicle.price_per_day);

            vehicle.status = VehicleStatus::Available;
            vehicle.returned_at = Some(returned_at);

            log::info!(
                "Vehicle returned: {} - Total Rental Cost: ${}",
                vehicle.display_line(),
                total_cost
            );

            return Ok(ApiResponse::success_with_message(
                ReturnVehicleResponse {
                    vehicle: VehicleResponse::from(&*vehicle),
                    total_cost,
                },
                format!(
                    "Vehicle returned: {} - Total Rental Cost: ${}",
                    vehicle.display_line(),
                    total_cost
                ),
            ));
        }

        if fleet.contains_id(&request.vehicle_id) {
            log::warn!("Return rejected, not rented: '{}'", request.vehicle_id);
            Err(AppError::NotRented(request.vehicle_id))
        } else {
            log::warn!("Return rejected, unknown vehicle: '{}'", request.vehicle_id);
            Err(AppError::UnknownVehicle(request.vehicle_id))
        }
    }

    /// Listado estructurado del inventario, en orden de inserción
    pub async fn list_vehicles(&self) -> Vec<VehicleResponse> {
        let fleet = self.fleet.read().await;
        fleet.vehicles().iter().map(VehicleResponse::from).collect()
    }

    /// Listado legible del inventario, una línea por vehículo
    pub async fn fleet_report(&self) -> Vec<String> {
        let fleet = self.fleet.read().await;
        fleet.vehicles().iter().map(|v| v.display_line()).collect()
    }
}
