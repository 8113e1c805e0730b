//! Repositorios del sistema
//!
//! Este módulo contiene el acceso a datos del inventario de la flota.

pub mod fleet_repository;
