//! Utilidades de fecha y hora
//!
//! Este módulo centraliza el formato fijo `dd-MM-yyyy HH:mm` con el que
//! el sistema serializa y parsea timestamps de pickup/return.

use chrono::NaiveDateTime;

/// Formato canónico de timestamps: precisión de minuto, hora local naive
pub const DATETIME_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Formatear un timestamp al formato canónico
pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format(DATETIME_FORMAT).to_string()
}

/// Parsear un timestamp desde el formato canónico
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value.trim(), DATETIME_FORMAT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_parse_datetime() {
        let parsed = parse_datetime("05-08-2026 14:30").unwrap();
        let expected = NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_datetime_trims_whitespace() {
        assert!(parse_datetime("  05-08-2026 14:30  ").is_ok());
    }

    #[test]
    fn test_parse_datetime_rejects_other_formats() {
        assert!(parse_datetime("2026-08-05 14:30").is_err());
        assert!(parse_datetime("05/08/2026 14:30").is_err());
        assert!(parse_datetime("05-08-2026").is_err());
        assert!(parse_datetime("").is_err());
    }

    #[test]
    fn test_format_round_trip() {
        let value = NaiveDate::from_ymd_opt(2026, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap();
        let formatted = format_datetime(value);
        assert_eq!(formatted, "31-12-2026 23:59");
        assert_eq!(parse_datetime(&formatted).unwrap(), value);
    }
}
