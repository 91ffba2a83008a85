use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use super::agency::Agency;
use super::error::ResolutionError;
use super::route::Route;
use super::situation::Situation;
use super::stop::Stop;
use super::trip::Trip;
use super::Entity;

/// Anything holding by-ID references that must be swapped for live entity
/// handles before the object is handed to consumers.
///
/// Implementations fill every outgoing reference of `self` in one pass:
/// required single references fail with
/// [`ResolutionError::RequiredReferenceMissing`], collection references drop
/// entries missing from the table. Resolving a second time against the same
/// table rebinds the same handles, so the operation is idempotent.
pub trait ResolveReferences {
    fn resolve_references(
        &mut self,
        references: &References,
        region_identifier: Option<i64>,
    ) -> Result<(), ResolutionError>;
}

/// Collections resolve element-wise and fail fast, aborting the owner.
impl<T: ResolveReferences> ResolveReferences for Vec<T> {
    fn resolve_references(
        &mut self,
        references: &References,
        region_identifier: Option<i64>,
    ) -> Result<(), ResolutionError> {
        for item in self.iter_mut() {
            item.resolve_references(references, region_identifier)?;
        }
        Ok(())
    }
}

/// The `references` section of an API response, as it appears on the wire.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawReferences {
    pub agencies: Vec<Agency>,
    pub routes: Vec<Route>,
    pub situations: Vec<Situation>,
    pub stops: Vec<Stop>,
    pub trips: Vec<Trip>,
}

/// Per-response index of every entity the response may point to, keyed by
/// (entity type, ID).
///
/// Built once per payload; entities inside the table are linked to each
/// other during construction (routes to agencies, then stops and trips to
/// routes), and the table is read-only afterwards. Lookups hand out shared
/// handles owned by the table.
#[derive(Debug, Default)]
pub struct References {
    agencies: HashMap<String, Arc<Agency>>,
    routes: HashMap<String, Arc<Route>>,
    situations: HashMap<String, Arc<Situation>>,
    stops: HashMap<String, Arc<Stop>>,
    trips: HashMap<String, Arc<Trip>>,
}

impl References {
    pub fn new(raw: RawReferences) -> References {
        let mut references = References::default();

        references.agencies = index(raw.agencies);
        references.situations = index(raw.situations);

        // Routes before stops and trips, which point at them.
        let routes = resolve_and_index(raw.routes, &references);
        references.routes = routes;

        let stops = resolve_and_index(raw.stops, &references);
        references.stops = stops;

        let trips = resolve_and_index(raw.trips, &references);
        references.trips = trips;

        references
    }

    pub fn agency(&self, id: &str) -> Option<Arc<Agency>> {
        self.agencies.get(id).cloned()
    }

    pub fn route(&self, id: &str) -> Option<Arc<Route>> {
        self.routes.get(id).cloned()
    }

    pub fn situation(&self, id: &str) -> Option<Arc<Situation>> {
        self.situations.get(id).cloned()
    }

    pub fn stop(&self, id: &str) -> Option<Arc<Stop>> {
        self.stops.get(id).cloned()
    }

    pub fn trip(&self, id: &str) -> Option<Arc<Trip>> {
        self.trips.get(id).cloned()
    }

    /// Routes for the given IDs, in the given order. IDs missing from the
    /// table are dropped: upstream feeds are known to reference stale rows.
    pub fn routes(&self, ids: &[String]) -> Vec<Arc<Route>> {
        ids.iter().filter_map(|id| self.routes.get(id).cloned()).collect()
    }

    /// Situations for the given IDs, in the given order, missing IDs dropped.
    pub fn situations(&self, ids: &[String]) -> Vec<Arc<Situation>> {
        ids.iter()
            .filter_map(|id| self.situations.get(id).cloned())
            .collect()
    }

    /// Stops for the given IDs, in the given order, missing IDs dropped.
    pub fn stops(&self, ids: &[String]) -> Vec<Arc<Stop>> {
        ids.iter().filter_map(|id| self.stops.get(id).cloned()).collect()
    }
}

fn index<T: Entity>(records: Vec<T>) -> HashMap<String, Arc<T>> {
    records
        .into_iter()
        .map(|record| (record.id().to_string(), Arc::new(record)))
        .collect()
}

/// Link each record's own references, then index it. A record whose
/// required parent is missing is dropped rather than failing the response.
fn resolve_and_index<T>(records: Vec<T>, references: &References) -> HashMap<String, Arc<T>>
where
    T: Entity + ResolveReferences,
{
    let mut indexed = HashMap::with_capacity(records.len());
    for mut record in records {
        match record.resolve_references(references, None) {
            Ok(()) => {
                indexed.insert(record.id().to_string(), Arc::new(record));
            }
            Err(e) => {
                log::warn!("Dropping {} {}: {}", record.entity_type(), record.id(), e);
            }
        }
    }
    indexed
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn table() -> References {
        let raw: RawReferences = serde_json::from_value(json!({
            "agencies": [
                { "id": "1", "name": "Metro Transit", "url": "https://kingcounty.gov/metro", "timezone": "America/Los_Angeles" }
            ],
            "routes": [
                { "id": "1_100002", "agencyId": "1", "shortName": "10", "longName": "", "type": 3 },
                { "id": "1_100479", "agencyId": "1", "shortName": "49", "type": 3 },
                { "id": "1_999999", "agencyId": "404", "shortName": "ghost", "type": 3 }
            ],
            "stops": [
                {
                    "id": "1_1180", "code": "1180", "name": "3rd Ave & Pike St",
                    "lat": 47.6097, "lon": -122.33701, "direction": "W",
                    "locationType": 0, "wheelchairBoarding": "UNKNOWN",
                    "routeIds": ["1_100002", "1_gone", "1_100479"]
                }
            ],
            "trips": [
                { "id": "1_604138640", "routeId": "1_100479", "tripHeadsign": "University District" }
            ],
            "situations": []
        }))
        .unwrap();
        References::new(raw)
    }

    #[test]
    fn test_lookup_one() {
        let references = table();

        let route = references.route("1_100002").unwrap();
        assert_eq!(route.short_name.as_deref(), Some("10"));
        assert_eq!(route.long_name, None, "empty long name decodes as absent");
        assert!(references.route("1_nope").is_none());
    }

    #[test]
    fn test_lookup_many_drops_missing_and_keeps_order() {
        let references = table();

        let ids = vec![
            "1_100479".to_string(),
            "1_gone".to_string(),
            "1_100002".to_string(),
        ];
        let routes = references.routes(&ids);

        let found: Vec<&str> = routes.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(found, vec!["1_100479", "1_100002"]);
    }

    #[test]
    fn test_table_entities_are_linked() {
        let references = table();

        let route = references.route("1_100002").unwrap();
        assert_eq!(route.agency().unwrap().name, "Metro Transit");

        let stop = references.stop("1_1180").unwrap();
        let stop_routes: Vec<&str> = stop.routes().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(stop_routes, vec!["1_100002", "1_100479"]);

        let trip = references.trip("1_604138640").unwrap();
        assert_eq!(trip.route().unwrap().short_name.as_deref(), Some("49"));
    }

    #[test]
    fn test_orphaned_route_is_dropped() {
        let references = table();
        assert!(references.route("1_999999").is_none());
    }
}
