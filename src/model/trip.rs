use std::sync::Arc;

use serde::Deserialize;

use super::enums::EntityType;
use super::error::ResolutionError;
use super::references::{References, ResolveReferences};
use super::route::Route;
use super::serde_helpers::empty_string_as_none;
use super::Entity;

/// A single scheduled run of a vehicle along a route, from the `trips` block
/// of the references section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub id: String,
    route_id: String,
    /// Identifier of the service calendar the trip runs on.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub service_id: Option<String>,
    /// Block of sequential trips run by the same vehicle.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub block_id: Option<String>,
    /// Shape tracing the trip's path, when the agency publishes one.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub shape_id: Option<String>,
    /// Direction of travel, `"0"` or `"1"`.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub direction_id: Option<String>,
    /// Text on the vehicle's signage identifying the destination.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub trip_headsign: Option<String>,
    /// Rider-facing text identifying the trip, e.g. a train number.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub trip_short_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub time_zone: Option<String>,
    #[serde(skip)]
    route: Option<Arc<Route>>,
}

impl Trip {
    pub fn route_id(&self) -> &str {
        &self.route_id
    }

    /// The route this trip runs along. Absent only before resolution.
    pub fn route(&self) -> Option<&Route> {
        self.route.as_deref()
    }
}

impl Entity for Trip {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_type(&self) -> EntityType {
        EntityType::Trip
    }
}

impl ResolveReferences for Trip {
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
        Ok(())
    }
}
