//! Display formatting for dates, amounts and flags (es-AR conventions)

use chrono::NaiveDate;

use crate::shared::list::CellValue;

/// Format ISO date or datetime string to DD/MM/YYYY
/// Example: "2024-03-15T14:02:26.123Z" -> "15/03/2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Format ISO datetime string to DD/MM/YYYY HH:MM
pub fn format_datetime(datetime_str: &str) -> String {
    if let Some((date_part, time_part)) = datetime_str.split_once('T') {
        let date = format_date(date_part);
        if date != date_part {
            let hhmm: String = time_part.chars().take(5).collect();
            return format!("{} {}", date, hhmm);
        }
    }
    format_date(datetime_str)
}

/// Number with "." as thousands separator and a decimal comma
///
/// ```
/// # use gestion_frontend::shared::format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    let mut result: String = grouped.chars().rev().collect();

    let is_zero = formatted.chars().all(|c| c == '0' || c == '.');
    if value < 0.0 && !is_zero {
        result.insert(0, '-');
    }
    match decimal_part {
        Some(d) => format!("{},{}", result, d),
        None => result,
    }
}

pub fn format_money(value: f64) -> String {
    format!("$ {}", format_number_with_decimals(value, 2))
}

pub fn format_bool(value: bool) -> &'static str {
    if value {
        "Sí"
    } else {
        "No"
    }
}

// Column formatters (`fn(&CellValue) -> String`)

pub fn money_cell(value: &CellValue) -> String {
    match value {
        CellValue::Number(n) => format_money(*n),
        other => other.to_string(),
    }
}

pub fn quantity_cell(value: &CellValue) -> String {
    match value {
        CellValue::Number(n) if n.fract() == 0.0 => format_number_with_decimals(*n, 0),
        CellValue::Number(n) => format_number_with_decimals(*n, 2),
        other => other.to_string(),
    }
}

pub fn active_cell(value: &CellValue) -> String {
    match value {
        CellValue::Bool(true) => "Activo".to_string(),
        CellValue::Bool(false) => "Inactivo".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15/03/2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15/03/2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_format_datetime() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15/03/2024 14:02");
        assert_eq!(format_datetime("2024-03-15"), "15/03/2024");
    }

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1.235");
        assert_eq!(format_number_with_decimals(1234.567, 2), "1.234,57");
        assert_eq!(format_number_with_decimals(1234567.0, 0), "1.234.567");
        assert_eq!(format_number_with_decimals(-1234.5, 2), "-1.234,50");
        assert_eq!(format_number_with_decimals(-0.001, 2), "0,00");
    }

    #[test]
    fn test_money_cell() {
        assert_eq!(money_cell(&CellValue::Number(1520.5)), "$ 1.520,50");
        assert_eq!(money_cell(&CellValue::Null), "");
    }

    #[test]
    fn test_quantity_cell() {
        assert_eq!(quantity_cell(&CellValue::Number(1200.0)), "1.200");
        assert_eq!(quantity_cell(&CellValue::Number(2.5)), "2,50");
    }
}
