use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::vehicle::{Vehicle, VehicleStatus};
use crate::utils::datetime::format_datetime;

// Request para agregar un vehículo a la flota
#[derive(Debug, Deserialize, Validate)]
pub struct AddVehicleRequest {
    #[validate(length(min = 1, max = 50))]
    pub vehicle_id: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    // Llega como texto de formulario y se parsea a Decimal
    pub price_per_day: String,
}

// Request para alquilar un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct RentVehicleRequest {
    #[validate(length(min = 1, max = 50))]
    pub vehicle_id: String,

    // dd-MM-yyyy HH:mm
    pub pickup_at: String,
}

// Request para devolver un vehículo
#[derive(Debug, Deserialize, Validate)]
pub struct ReturnVehicleRequest {
    #[validate(length(min = 1, max = 50))]
    pub vehicle_id: String,

    // dd-MM-yyyy HH:mm
    pub returned_at: String,
}

// Response de vehículo
#[derive(Debug, Serialize)]
pub struct VehicleResponse {
    pub vehicle_id: String,
    pub model: String,
    pub price_per_day: Decimal,
    pub status: VehicleStatus,
    pub pickup_at: Option<String>,
    pub returned_at: Option<String>,
}

impl From<&Vehicle> for VehicleResponse {
    fn from(vehicle: &Vehicle) -> Self {
        let format = |value: Option<NaiveDateTime>| value.map(format_datetime);

        Self {
            vehicle_id: vehicle.vehicle_id.clone(),
            model: vehicle.model.clone(),
            price_per_day: vehicle.price_per_day,
            status: vehicle.status,
            pickup_at: format(vehicle.pickup_at),
            returned_at: format(vehicle.returned_at),
        }
    }
}

// Response de devolución: vehículo actualizado + costo total del ciclo
#[derive(Debug, Serialize)]
pub struct ReturnVehicleResponse {
    pub vehicle: VehicleResponse,
    pub total_cost: Decimal,
}
