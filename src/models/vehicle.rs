//! Modelo de Vehicle
//!
//! Este módulo contiene el struct Vehicle y su ciclo de vida dentro de la
//! flota: Available --rent--> Rented --return--> Available, sin borrado.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::utils::datetime::format_datetime;

/// Estado del vehículo dentro de la flota
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleStatus {
    Available,
    Rented,
}

/// Registro de un vehículo de la flota
///
/// El `vehicle_id` lo suministra el caller y no se fuerza su unicidad:
/// los duplicados son válidos y las operaciones de ciclo de vida actúan
/// sobre la primera coincidencia en orden de inserción.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub vehicle_id: String,
    pub model: String,
    pub price_per_day: Decimal,
    pub status: VehicleStatus,
    /// Se conserva tras el return como residuo histórico del último ciclo
    pub pickup_at: Option<NaiveDateTime>,
    pub returned_at: Option<NaiveDateTime>,
}

impl Vehicle {
    pub fn new(vehicle_id: String, model: String, price_per_day: Decimal) -> Self {
        Self {
            vehicle_id,
            model,
            price_per_day,
            status: VehicleStatus::Available,
            pickup_at: None,
            returned_at: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.status == VehicleStatus::Available
    }

    /// Línea de presentación canónica del vehículo
    pub fn display_line(&self) -> String {
        match self.status {
            VehicleStatus::Available => format!(
                "{} - {} (${}/day) - Available",
                self.vehicle_id, self.model, self.price_per_day
            ),
            VehicleStatus::Rented => format!(
                "{} - {} (${}/day) - Rented, Pickup: {}, Return: {}",
                self.vehicle_id,
                self.model,
                self.price_per_day,
                self.pickup_at.map(format_datetime).unwrap_or_default(),
                self.returned_at.map(format_datetime).unwrap_or_default(),
            ),
        }
    }
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_line())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::datetime::parse_datetime;

    #[test]
    fn test_new_vehicle_is_available() {
        let vehicle = Vehicle::new("V001".to_string(), "Corolla".to_string(), Decimal::from(50));
        assert!(vehicle.is_available());
        assert_eq!(vehicle.status, VehicleStatus::Available);
        assert!(vehicle.pickup_at.is_none());
        assert!(vehicle.returned_at.is_none());
    }

    #[test]
    fn test_display_line_available() {
        let vehicle = Vehicle::new("V001".to_string(), "Corolla".to_string(), Decimal::from(50));
        assert_eq!(vehicle.display_line(), "V001 - Corolla ($50/day) - Available");
    }

    #[test]
    fn test_display_line_rented() {
        let mut vehicle =
            Vehicle::new("V001".to_string(), "Corolla".to_string(), Decimal::from(50));
        vehicle.status = VehicleStatus::Rented;
        vehicle.pickup_at = Some(parse_datetime("05-08-2026 14:30").unwrap());

        assert_eq!(
            vehicle.display_line(),
            "V001 - Corolla ($50/day) - Rented, Pickup: 05-08-2026 14:30, Return: "
        );
    }

    #[test]
    fn test_display_line_after_cycle_shows_available() {
        // Tras un return los timestamps históricos no se muestran
        let mut vehicle =
            Vehicle::new("V001".to_string(), "Corolla".to_string(), Decimal::from(50));
        vehicle.pickup_at = Some(parse_datetime("05-08-2026 14:30").unwrap());
        vehicle.returned_at = Some(parse_datetime("06-08-2026 14:30").unwrap());

        assert_eq!(vehicle.display_line(), "V001 - Corolla ($50/day) - Available");
    }
}
