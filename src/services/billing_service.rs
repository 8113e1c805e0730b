//! Servicio de facturación
//!
//! Este módulo contiene el cálculo puro del costo de un alquiler a partir
//! de los timestamps de pickup y return. La unidad de cobro es el día
//! completo: cualquier día parcial se factura entero.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;

/// Horas completas transcurridas entre pickup y return
///
/// Truncamiento entero hacia cero: los minutos sueltos dentro de una hora
/// se descartan antes de facturar.
pub fn rental_hours(pickup_at: NaiveDateTime, returned_at: NaiveDateTime) -> i64 {
    (returned_at - pickup_at).num_hours()
}

/// Costo total del alquiler en ciclos de 24 horas
///
/// `full_days = hours / 24` se cobran completos; si queda un resto de horas
/// se agrega un día adicional. Un alquiler de exactamente 0 horas cuesta 0.
pub fn rental_cost(
    pickup_at: NaiveDateTime,
    returned_at: NaiveDateTime,
    price_per_day: Decimal,
) -> Decimal {
    let hours = rental_hours(pickup_at, returned_at);
    let full_days = hours / 24;

    let mut total = Decimal::from(full_days) * price_per_day;
    if hours % 24 > 0 {
        total += price_per_day;
    }

    total
}
