use std::fmt;
use std::sync::Arc;

use geo::Point;
use serde::Deserialize;

use super::enums::{Direction, EntityType, LocationType, WheelchairBoarding};
use super::error::ResolutionError;
use super::references::{References, ResolveReferences};
use super::route::Route;
use super::serde_helpers::empty_string_as_none;
use super::Entity;

/// A physical stop or station, from the `stops` block of the references
/// section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stop {
    pub id: String,
    /// Short code riders use to identify the stop, often posted on signage.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub code: Option<String>,
    /// Rider-facing name of the stop.
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    /// Compass heading riders face when boarding at the stop.
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub location_type: LocationType,
    #[serde(default)]
    pub wheelchair_boarding: WheelchairBoarding,
    #[serde(default)]
    route_ids: Vec<String>,
    #[serde(skip)]
    routes: Vec<Arc<Route>>,
}

impl Stop {
    pub fn location(&self) -> Point {
        Point::new(self.lon, self.lat)
    }

    pub fn route_ids(&self) -> &[String] {
        &self.route_ids
    }

    /// Routes serving this stop. Empty before resolution.
    pub fn routes(&self) -> &[Arc<Route>] {
        &self.routes
    }
}

impl Entity for Stop {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_type(&self) -> EntityType {
        EntityType::Stop
    }
}

impl ResolveReferences for Stop {
    fn resolve_references(
        &mut self,
        references: &References,
        _region_identifier: Option<i64>,
    ) -> Result<(), ResolutionError> {
        self.routes = references.routes(&self.route_ids);
        Ok(())
    }
}

impl fmt::Display for Stop {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
