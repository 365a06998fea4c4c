use chrono::{DateTime, Utc};

/// Format a timestamp for list columns: "15.03.2024 14:02".
pub fn format_timestamp(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// Date-only variant: "15.03.2024".
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%d.%m.%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(
            format_timestamp(&ts("2024-03-15T14:02:26.123Z")),
            "15.03.2024 14:02"
        );
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&ts("2024-12-31T23:59:59Z")), "31.12.2024");
    }
}
