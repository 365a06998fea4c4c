//! Server timestamps are inconsistent: model and config records carry
//! ISO-8601 strings (sometimes without a timezone), dataset records carry
//! epoch seconds. The canonical client representation is `DateTime<Utc>`;
//! the conversion lives here, at the wire boundary.

/// Serde codec for `#[serde(with = "timestamp::flexible")]`.
pub mod flexible {
    use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::Value;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::String(s) => parse_iso(&s).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid timestamp string: {}", s))
            }),
            Value::Number(n) => n
                .as_i64()
                .and_then(|secs| Utc.timestamp_opt(secs, 0).single())
                .ok_or_else(|| serde::de::Error::custom("invalid epoch timestamp")),
            other => Err(serde::de::Error::custom(format!(
                "expected timestamp string or number, got {}",
                other
            ))),
        }
    }

    fn parse_iso(s: &str) -> Option<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Some(dt.with_timezone(&Utc));
        }
        // Naive datetimes (no offset) come from the backend's local store.
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .ok()
            .map(|naive| Utc.from_utc_datetime(&naive))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Datelike, Utc};
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Record {
        #[serde(with = "super::flexible")]
        created_at: DateTime<Utc>,
    }

    #[test]
    fn test_rfc3339_string() {
        let r: Record = serde_json::from_str(r#"{"created_at": "2024-03-15T14:02:26Z"}"#).unwrap();
        assert_eq!(r.created_at.to_rfc3339(), "2024-03-15T14:02:26+00:00");
    }

    #[test]
    fn test_naive_string() {
        let r: Record =
            serde_json::from_str(r#"{"created_at": "2024-03-15T14:02:26.123456"}"#).unwrap();
        assert_eq!(r.created_at.year(), 2024);
        assert_eq!(r.created_at.month(), 3);
    }

    #[test]
    fn test_epoch_seconds() {
        let r: Record = serde_json::from_str(r#"{"created_at": 1700000000}"#).unwrap();
        assert_eq!(r.created_at.to_rfc3339(), "2023-11-14T22:13:20+00:00");
    }

    #[test]
    fn test_rejects_other_shapes() {
        assert!(serde_json::from_str::<Record>(r#"{"created_at": true}"#).is_err());
        assert!(serde_json::from_str::<Record>(r#"{"created_at": "yesterday"}"#).is_err());
    }
}
