//! Repositorio de la flota
//!
//! Este módulo contiene el almacén en memoria de los registros Vehicle.
//! Mantiene el orden de inserción y es el único dueño de la mutación;
//! no hay constraint de unicidad sobre `vehicle_id`.

use rust_decimal::Decimal;

use crate::models::vehicle::{Vehicle, VehicleStatus};

/// Inventario ordenado de vehículos, en memoria
#[derive(Debug, Default)]
pub struct FleetRepository {
    vehicles: Vec<Vehicle>,
}

impl FleetRepository {
    pub fn new() -> Self {
        Self { vehicles: Vec::new() }
    }

    /// Crear y agregar un vehículo al final del inventario
    ///
    /// El append es incondicional: los ids duplicados se aceptan y las
    /// operaciones posteriores resuelven por primera coincidencia.
    pub fn add(&mut self, vehicle_id: String, model: String, price_per_day: Decimal) -> &Vehicle {
        self.vehicles.push(Vehicle::new(vehicle_id, model, price_per_day));
        self.vehicles.last().unwrap()
    }

    /// Primer vehículo con ese id que esté disponible, en orden de inserción
    pub fn find_first_available_mut(&mut self, vehicle_id: &str) -> Option<&mut Vehicle> {
        self.vehicles
            .iter_mut()
            .find(|v| v.vehicle_id == vehicle_id && v.status == VehicleStatus::Available)
    }

    /// Primer vehículo con ese id que esté alquilado, en orden de inserción
    pub fn find_first_rented_mut(&mut self, vehicle_id: &str) -> Option<&mut Vehicle> {
        self.vehicles
            .iter_mut()
            .find(|v| v.vehicle_id == vehicle_id && v.status == VehicleStatus::Rented)
    }

    /// Existe algún registro con ese id, en cualquier estado
    pub fn contains_id(&self, vehicle_id: &str) -> bool {
        self.vehicles.iter().any(|v| v.vehicle_id == vehicle_id)
    }

    /// Vista ordenada de solo lectura del inventario completo
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}
