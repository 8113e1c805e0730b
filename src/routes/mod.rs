//! Rutas de la API
//!
//! Este módulo define los routers de Axum que exponen las operaciones
//! del sistema de alquiler.

pub mod vehicle_routes;
