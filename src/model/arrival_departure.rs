use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::enums::EntityType;
use super::error::ResolutionError;
use super::references::{References, ResolveReferences};
use super::route::Route;
use super::serde_helpers::{
    default_true, deserialize_millis, deserialize_option_millis, empty_string_as_none,
};
use super::situation::Situation;
use super::stop::Stop;
use super::trip::Trip;

/// A single upcoming (or just-passed) vehicle arrival and departure at a
/// stop.
///
/// Scheduled times always carry a value; predicted times are absent unless a
/// real-time feed backs them (`0` on the wire).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalDeparture {
    route_id: String,
    trip_id: String,
    stop_id: String,
    /// Index of the stop within the trip's stop sequence.
    #[serde(default)]
    pub stop_sequence: i32,
    #[serde(default)]
    pub total_stops_in_trip: Option<u32>,
    /// Index of the trip within its block.
    #[serde(default)]
    pub block_trip_sequence: i32,
    /// Midnight of the service day the trip runs on.
    #[serde(deserialize_with = "deserialize_millis")]
    pub service_date: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_millis")]
    pub scheduled_arrival_time: DateTime<Utc>,
    #[serde(deserialize_with = "deserialize_millis")]
    pub scheduled_departure_time: DateTime<Utc>,
    /// Whether real-time data backs the predicted times.
    #[serde(default)]
    pub predicted: bool,
    #[serde(default, deserialize_with = "deserialize_option_millis")]
    pub predicted_arrival_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "deserialize_option_millis")]
    pub predicted_departure_time: Option<DateTime<Utc>>,
    /// When the real-time feed last reported on this trip.
    #[serde(default, deserialize_with = "deserialize_option_millis")]
    pub last_update_time: Option<DateTime<Utc>>,
    #[serde(default = "default_true")]
    pub arrival_enabled: bool,
    #[serde(default = "default_true")]
    pub departure_enabled: bool,
    /// How many stops the vehicle is away; negative once it has passed.
    #[serde(default)]
    pub number_of_stops_away: i32,
    /// Distance of the vehicle from the stop, in meters.
    #[serde(default)]
    pub distance_from_stop: f64,
    /// Route short name override for this trip, when the agency supplies one.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub route_short_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub route_long_name: Option<String>,
    /// Destination signage for this trip.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub trip_headsign: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub vehicle_id: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub status: Option<String>,
    #[serde(default)]
    situation_ids: Vec<String>,
    #[serde(skip)]
    route: Option<Arc<Route>>,
    #[serde(skip)]
    trip: Option<Arc<Trip>>,
    #[serde(skip)]
    stop: Option<Arc<Stop>>,
    #[serde(skip)]
    situations: Vec<Arc<Situation>>,
}

impl ArrivalDeparture {
    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    pub fn trip_id(&self) -> &str {
        &self.trip_id
    }

    pub fn stop_id(&self) -> &str {
        &self.stop_id
    }

    /// The route the arriving vehicle runs on. Absent only before resolution.
    pub fn route(&self) -> Option<&Route> {
        self.route.as_deref()
    }

    pub fn trip(&self) -> Option<&Trip> {
        self.trip.as_deref()
    }

    pub fn stop(&self) -> Option<&Stop> {
        self.stop.as_deref()
    }

    /// Service alerts attached to this arrival.
    pub fn situations(&self) -> &[Arc<Situation>] {
        &self.situations
    }

    /// The best known arrival time: predicted when available, scheduled
    /// otherwise.
    pub fn arrival_time(&self) -> DateTime<Utc> {
        self.predicted_arrival_time
            .unwrap_or(self.scheduled_arrival_time)
    }

    /// The best known departure time: predicted when available, scheduled
    /// otherwise.
    pub fn departure_time(&self) -> DateTime<Utc> {
        self.predicted_departure_time
            .unwrap_or(self.scheduled_departure_time)
    }
}

impl ResolveReferences for ArrivalDeparture {
    fn resolve_references(
        &mut self,
        references: &References,
        _region_identifier: Option<i64>,
    ) -> Result<(), ResolutionError> {
        self.route = Some(
            references
                .route(&self.route_id)
                .ok_or_else(|| ResolutionError::required(EntityType::Route, &self.route_id))?,
        );
        self.trip = Some(
            references
                .trip(&self.trip_id)
                .ok_or_else(|| ResolutionError::required(EntityType::Trip, &self.trip_id))?,
        );
        self.stop = Some(
            references
                .stop(&self.stop_id)
                .ok_or_else(|| ResolutionError::required(EntityType::Stop, &self.stop_id))?,
        );
        self.situations = references.situations(&self.situation_ids);
        Ok(())
    }
}
