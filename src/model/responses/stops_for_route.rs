use std::sync::Arc;

use serde::Deserialize;

use crate::model::enums::EntityType;
use crate::model::error::ResolutionError;
use crate::model::polyline::PolylineEntity;
use crate::model::references::{References, ResolveReferences};
use crate::model::route::Route;
use crate::model::stop::Stop;

/// The set of stops serving a route, the groupings the server organizes them
/// into (currently by direction of travel), and the polylines tracing the
/// route's path.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopsForRoute {
    route_id: String,
    #[serde(default)]
    polylines: Vec<PolylineEntity>,
    #[serde(default)]
    stop_ids: Vec<String>,
    #[serde(default)]
    stop_groupings: Vec<StopGrouping>,
    #[serde(skip)]
    route: Option<Arc<Route>>,
    #[serde(skip)]
    stops: Vec<Arc<Stop>>,
    #[serde(skip)]
    region_identifier: Option<i64>,
}

impl StopsForRoute {
    pub fn id(&self) -> &str {
        &self.route_id
    }

    /// The route this response is about. Absent only before resolution.
    pub fn route(&self) -> Option<&Route> {
        self.route.as_deref()
    }

    /// Every stop serving the route, in server order.
    pub fn stops(&self) -> &[Arc<Stop>] {
        &self.stops
    }

    /// Shapes tracing the full path of the route.
    pub fn polylines(&self) -> &[PolylineEntity] {
        &self.polylines
    }

    pub fn stop_groupings(&self) -> &[StopGrouping] {
        &self.stop_groupings
    }

    pub fn region_identifier(&self) -> Option<i64> {
        self.region_identifier
    }
}

impl ResolveReferences for StopsForRoute {
    fn resolve_references(
        &mut self,
        references: &References,
        region_identifier: Option<i64>,
    ) -> Result<(), ResolutionError> {
        self.route = Some(
            references
                .route(&self.route_id)
                .ok_or_else(|| ResolutionError::required(EntityType::Route, &self.route_id))?,
        );
        self.stops = references.stops(&self.stop_ids);
        self.stop_groupings
            .resolve_references(references, region_identifier)?;
        self.region_identifier = region_identifier;
        Ok(())
    }
}

/// A named clustering of a route's stops. Groupings resolve independently of
/// each other; nothing aggregates across siblings.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopGrouping {
    /// Whether the groups within carry a meaningful order.
    #[serde(default)]
    pub ordered: bool,
    /// What the grouping clusters by, e.g. `direction`.
    #[serde(rename = "type")]
    pub grouping_type: String,
    #[serde(default)]
    stop_groups: Vec<StopGroup>,
    #[serde(skip)]
    region_identifier: Option<i64>,
}

impl StopGrouping {
    pub fn stop_groups(&self) -> &[StopGroup] {
        &self.stop_groups
    }

    pub fn region_identifier(&self) -> Option<i64> {
        self.region_identifier
    }
}

impl ResolveReferences for StopGrouping {
    fn resolve_references(
        &mut self,
        references: &References,
        region_identifier: Option<i64>,
    ) -> Result<(), ResolutionError> {
        self.stop_groups
            .resolve_references(references, region_identifier)?;
        self.region_identifier = region_identifier;
        Ok(())
    }
}

/// The name of a stop group arrives as a nested object carrying both the
/// display name and the grouping type tag.
#[derive(Debug, Clone, Deserialize)]
struct StopGroupName {
    name: String,
    #[serde(rename = "type")]
    grouping_type: String,
}

/// One cluster of stops within a grouping, e.g. all northbound stops.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopGroup {
    pub id: String,
    name: StopGroupName,
    /// Shapes tracing the path of this group's portion of the route.
    #[serde(default)]
    polylines: Vec<PolylineEntity>,
    #[serde(default)]
    stop_ids: Vec<String>,
    #[serde(skip)]
    stops: Vec<Arc<Stop>>,
    #[serde(skip)]
    region_identifier: Option<i64>,
}

impl StopGroup {
    /// Rider-facing name of the group, e.g. "Northbound".
    pub fn name(&self) -> &str {
        &self.name.name
    }

    pub fn grouping_type(&self) -> &str {
        &self.name.grouping_type
    }

    pub fn polylines(&self) -> &[PolylineEntity] {
        &self.polylines
    }

    /// The stops in this group, in server order. Empty before resolution.
    pub fn stops(&self) -> &[Arc<Stop>] {
        &self.stops
    }

    pub fn region_identifier(&self) -> Option<i64> {
        self.region_identifier
    }
}

impl ResolveReferences for StopGroup {
    fn resolve_references(
        &mut self,
        references: &References,
        region_identifier: Option<i64>,
    ) -> Result<(), ResolutionError> {
        self.stops = references.stops(&self.stop_ids);
        self.region_identifier = region_identifier;
        Ok(())
    }
}
