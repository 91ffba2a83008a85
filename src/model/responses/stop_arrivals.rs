use std::sync::Arc;

use itertools::Itertools;
use serde::Deserialize;

use crate::model::arrival_departure::ArrivalDeparture;
use crate::model::enums::EntityType;
use crate::model::error::ResolutionError;
use crate::model::references::{References, ResolveReferences};
use crate::model::situation::Situation;
use crate::model::stop::Stop;
use crate::model::Entity;

/// Arrivals and departures at a single stop, along with nearby stops and any
/// active service alerts.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StopArrivals {
    /// Upcoming and just-passed vehicle arrivals and departures.
    #[serde(default)]
    arrivals_and_departures: Vec<ArrivalDeparture>,
    #[serde(default)]
    nearby_stop_ids: Vec<String>,
    #[serde(default)]
    situation_ids: Vec<String>,
    stop_id: String,
    #[serde(skip)]
    stop: Option<Arc<Stop>>,
    #[serde(skip)]
    nearby_stops: Vec<Arc<Stop>>,
    #[serde(skip)]
    situations: Vec<Arc<Situation>>,
}

impl StopArrivals {
    pub fn stop_id(&self) -> &str {
        &self.stop_id
    }

    /// The stop this response is about. Absent only before resolution.
    pub fn stop(&self) -> Option<&Stop> {
        self.stop.as_deref()
    }

    pub fn arrivals_and_departures(&self) -> &[ArrivalDeparture] {
        &self.arrivals_and_departures
    }

    /// Stops close to the subject stop, in server order.
    pub fn nearby_stops(&self) -> &[Arc<Stop>] {
        &self.nearby_stops
    }

    /// Service alerts for this stop.
    ///
    /// When the stop itself carries none, this is the union of the alerts
    /// attached to the individual arrivals. Recomputed on each call, so a
    /// direct list set by a later resolution always wins.
    pub fn situations(&self) -> Vec<Arc<Situation>> {
        if !self.situations.is_empty() {
            return self.situations.clone();
        }

        self.arrivals_and_departures
            .iter()
            .flat_map(|arrival| arrival.situations().iter().cloned())
            .unique_by(|situation| situation.id().to_string())
            .collect()
    }
}

impl ResolveReferences for StopArrivals {
    fn resolve_references(
        &mut self,
        references: &References,
        region_identifier: Option<i64>,
    ) -> Result<(), ResolutionError> {
        self.stop = Some(
            references
                .stop(&self.stop_id)
                .ok_or_else(|| ResolutionError::required(EntityType::Stop, &self.stop_id))?,
        );
        self.nearby_stops = references.stops(&self.nearby_stop_ids);
        self.situations = references.situations(&self.situation_ids);
        self.arrivals_and_departures
            .resolve_references(references, region_identifier)
    }
}
