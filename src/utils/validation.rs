//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos de entrada.

use rust_decimal::Decimal;
use validator::ValidationError;

use crate::utils::errors::AppError;

/// Validar que un string no esté vacío
pub fn validate_not_empty(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_empty");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + serde::Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Parsear el precio por día desde la entrada del caller
///
/// Acepta cualquier decimal no negativo; todo lo demás aborta la operación
/// con `InvalidPrice` sin crear registros.
pub fn parse_price(raw: &str) -> Result<Decimal, AppError> {
    let price: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| AppError::InvalidPrice(raw.to_string()))?;

    validate_non_negative(price).map_err(|_| AppError::InvalidPrice(raw.to_string()))?;

    Ok(price)
}
