use chrono::{DateTime, Utc};
use serde::de::Deserializer;
use serde::Deserialize;

/// Timestamps on the wire are milliseconds since the Unix epoch.
pub fn deserialize_millis<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let millis: i64 = Deserialize::deserialize(deserializer)?;
    DateTime::<Utc>::from_timestamp_millis(millis)
        .ok_or_else(|| serde::de::Error::custom("Invalid timestamp"))
}

/// Optional epoch-millisecond timestamp; the server writes `0` for "no value".
pub fn deserialize_option_millis<'de, D>(
    deserializer: D,
) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let millis: Option<i64> = Deserialize::deserialize(deserializer)?;
    match millis {
        None | Some(0) => Ok(None),
        Some(millis) => {
            let dt = DateTime::<Utc>::from_timestamp_millis(millis)
                .ok_or_else(|| serde::de::Error::custom("Invalid timestamp"))?;
            Ok(Some(dt))
        }
    }
}

/// Optional text fields arrive as empty strings rather than null.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

pub fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Record {
        #[serde(default, deserialize_with = "deserialize_option_millis")]
        predicted_arrival_time: Option<DateTime<Utc>>,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        color: Option<String>,
    }

    #[test]
    fn test_zero_millis_is_absent() {
        let record: Record = serde_json::from_value(json!({
            "predictedArrivalTime": 0,
            "color": "",
        }))
        .unwrap();

        assert_eq!(record.predicted_arrival_time, None);
        assert_eq!(record.color, None);
    }

    #[test]
    fn test_present_values_survive() {
        let record: Record = serde_json::from_value(json!({
            "predictedArrivalTime": 1_700_000_000_000i64,
            "color": "0000FF",
        }))
        .unwrap();

        assert_eq!(
            record.predicted_arrival_time.unwrap().timestamp_millis(),
            1_700_000_000_000
        );
        assert_eq!(record.color.as_deref(), Some("0000FF"));
    }
}
