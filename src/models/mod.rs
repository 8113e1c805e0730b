//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos de la flota de alquiler.

pub mod vehicle;
