//! Move-in date formatting for listing records.

use chrono::NaiveDate;

/// Converts a stored `YYYY-MM-DD` date into the `MMM YYYY` display form.
/// Invalid or empty input formats as an empty string.
pub fn format_start_date(raw: &str) -> String {
    match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        Ok(date) => date.format("%b %Y").to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_month_and_year() {
        assert_eq!(format_start_date("1999-10-06"), "Oct 1999");
        assert_eq!(format_start_date("2025-01-15"), "Jan 2025");
    }

    #[test]
    fn unusable_input_formats_empty() {
        assert_eq!(format_start_date(""), "");
        assert_eq!(format_start_date("next month"), "");
        assert_eq!(format_start_date("2024-13-40"), "");
    }
}
