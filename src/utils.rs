//! Formatting utilities for display

use chrono::NaiveDate;

/// Format an ISO date (`YYYY-MM-DD`) as a readable news date. Unparseable
/// input passes through untouched.
pub fn format_news_date(iso: &str) -> String {
    match NaiveDate::parse_from_str(iso, "%Y-%m-%d") {
        Ok(date) => date.format("%B %-d, %Y").to_string(),
        Err(_) => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_news_date_iso() {
        assert_eq!(format_news_date("2025-06-12"), "June 12, 2025");
        assert_eq!(format_news_date("2025-03-02"), "March 2, 2025");
    }

    #[test]
    fn test_format_news_date_passthrough_on_garbage() {
        assert_eq!(format_news_date("yesterday"), "yesterday");
        assert_eq!(format_news_date(""), "");
    }
}
