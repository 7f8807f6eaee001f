use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

/// Reads an optional `YYYY-MM-DD` date, treating `""` like an absent value.
pub fn deserialize_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt: Option<String> = Option::deserialize(deserializer)?;
    match opt {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid date `{}`, expected YYYY-MM-DD", s))),
        None => Ok(None),
    }
}
