use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::enums::EntityType;
use super::polyline::PolylineEntity;
use super::serde_helpers::{deserialize_millis, empty_string_as_none};
use super::Entity;

/// A single localized text value.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranslatedString {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub lang: Option<String>,
    pub value: String,
}

/// A window of time during which an alert applies, in seconds since the
/// Unix epoch. `0` on either end means the window is open on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub struct TimeWindow {
    #[serde(default)]
    pub from: i64,
    #[serde(default)]
    pub to: i64,
}

/// The parts of the network an alert applies to. All fields are optional;
/// whichever are present narrow the alert's scope.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AffectedEntity {
    #[serde(deserialize_with = "empty_string_as_none")]
    pub agency_id: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub application_id: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub direction_id: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub route_id: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub stop_id: Option<String>,
    #[serde(deserialize_with = "empty_string_as_none")]
    pub trip_id: Option<String>,
}

/// How service changes while an alert is in effect, e.g. a detour.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConditionDetails {
    pub diversion_stop_ids: Vec<String>,
    /// Path the diverted vehicles travel instead.
    pub diversion_path: Option<PolylineEntity>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Consequence {
    #[serde(deserialize_with = "empty_string_as_none")]
    pub condition: Option<String>,
    pub condition_details: Option<ConditionDetails>,
}

/// A service alert, from the `situations` block of the references section.
///
/// Situations carry their affected entities as bare identifiers; nothing on
/// a situation itself needs resolution.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Situation {
    pub id: String,
    /// When the alert was first published.
    #[serde(deserialize_with = "deserialize_millis")]
    pub creation_time: DateTime<Utc>,
    pub summary: Option<TranslatedString>,
    pub description: Option<TranslatedString>,
    pub url: Option<TranslatedString>,
    /// Machine-readable cause, e.g. `CONSTRUCTION`.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub reason: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub severity: Option<String>,
    #[serde(default)]
    pub active_windows: Vec<TimeWindow>,
    #[serde(default)]
    pub publication_windows: Vec<TimeWindow>,
    #[serde(default, rename = "allAffects")]
    pub affected_entities: Vec<AffectedEntity>,
    #[serde(default)]
    pub consequences: Vec<Consequence>,
}

impl Entity for Situation {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_type(&self) -> EntityType {
        EntityType::Situation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_situation() {
        let situation: Situation = serde_json::from_value(json!({
            "id": "1_1234",
            "creationTime": 1_700_000_000_000i64,
            "summary": { "lang": "en", "value": "Snow reroute" },
            "description": { "lang": "", "value": "Buses travel via 3rd Ave" },
            "reason": "HEAVY_SNOW_FALL",
            "severity": "severe",
            "activeWindows": [{ "from": 1_700_000_000, "to": 0 }],
            "allAffects": [{ "routeId": "1_100002", "stopId": "" }],
            "consequences": [{
                "condition": "detour",
                "conditionDetails": {
                    "diversionStopIds": ["1_9980"],
                    "diversionPath": { "points": "_p~iF~ps|U_ulLnnqC" }
                }
            }]
        }))
        .unwrap();

        assert_eq!(situation.summary.as_ref().unwrap().value, "Snow reroute");
        assert_eq!(
            situation.description.as_ref().unwrap().lang,
            None,
            "empty lang decodes as absent"
        );
        assert_eq!(situation.active_windows[0].to, 0);

        let affected = &situation.affected_entities[0];
        assert_eq!(affected.route_id.as_deref(), Some("1_100002"));
        assert_eq!(affected.stop_id, None);

        let details = situation.consequences[0]
            .condition_details
            .as_ref()
            .unwrap();
        assert_eq!(details.diversion_stop_ids, vec!["1_9980"]);
        assert!(details.diversion_path.as_ref().unwrap().line_string().is_some());
    }
}
