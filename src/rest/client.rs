use url::Url;

use super::error::{RestError, RestResult};
use crate::error::ObaResult;
use crate::model::responses::{
    decode_entry, decode_list, EntryResponse, ListResponse, StopArrivals, StopsForRoute,
};
use crate::model::route::Route;
use crate::model::stop::Stop;

/// Client for a OneBusAway-compatible REST API.
///
/// The client owns transport only: every endpoint method fetches the raw
/// body and hands it to the synchronous decode/resolve entry points in
/// [`crate::model::responses`].
#[derive(Clone)]
pub struct RestClient {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
    region_identifier: Option<i64>,
}

impl RestClient {
    pub fn new(base_url: &str, api_key: &str) -> RestResult<RestClient> {
        // A base without a trailing slash would swallow its last path
        // segment on join.
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| RestError::Init(e.to_string()))?;

        Ok(RestClient {
            client,
            base_url: Url::parse(&base_url)?,
            api_key: api_key.to_string(),
            region_identifier: None,
        })
    }

    /// Identifier of the region this client talks to, stamped onto resolved
    /// responses for consumers that key their storage by region.
    pub fn with_region_identifier(mut self, region_identifier: i64) -> RestClient {
        self.region_identifier = Some(region_identifier);
        self
    }

    fn url(&self, path: &str, query: &[(&str, String)]) -> RestResult<Url> {
        let mut url = self.base_url.join(path)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            for (name, value) in query {
                pairs.append_pair(name, value);
            }
        }
        Ok(url)
    }

    async fn get(&self, url: Url) -> RestResult<Vec<u8>> {
        log::debug!("Requesting {}", url);
        let response = self.client.get(url).send().await?;

        let body = response.bytes().await?;
        log::trace!("Response: {}", String::from_utf8_lossy(&body));

        Ok(body.to_vec())
    }

    /// Arrivals and departures at a stop within the given time window,
    /// in minutes relative to now.
    pub async fn arrivals_and_departures_for_stop(
        &self,
        stop_id: &str,
        minutes_before: u32,
        minutes_after: u32,
    ) -> ObaResult<EntryResponse<StopArrivals>> {
        let url = self.url(
            &format!("api/where/arrivals-and-departures-for-stop/{}.json", stop_id),
            &[
                ("minutesBefore", minutes_before.to_string()),
                ("minutesAfter", minutes_after.to_string()),
            ],
        )?;
        let body = self.get(url).await?;
        Ok(decode_entry(&body, self.region_identifier)?)
    }

    /// The stops serving a route, grouped by direction of travel.
    pub async fn stops_for_route(
        &self,
        route_id: &str,
    ) -> ObaResult<EntryResponse<StopsForRoute>> {
        let url = self.url(
            &format!("api/where/stops-for-route/{}.json", route_id),
            &[("includePolylines", "true".to_string())],
        )?;
        let body = self.get(url).await?;
        Ok(decode_entry(&body, self.region_identifier)?)
    }

    pub async fn stop(&self, stop_id: &str) -> ObaResult<EntryResponse<Stop>> {
        let url = self.url(&format!("api/where/stop/{}.json", stop_id), &[])?;
        let body = self.get(url).await?;
        Ok(decode_entry(&body, self.region_identifier)?)
    }

    /// Stops near a coordinate, optionally within an explicit radius in
    /// meters.
    pub async fn stops_for_location(
        &self,
        lat: f64,
        lon: f64,
        radius: Option<u32>,
    ) -> ObaResult<ListResponse<Stop>> {
        let mut query = vec![("lat", lat.to_string()), ("lon", lon.to_string())];
        if let Some(radius) = radius {
            query.push(("radius", radius.to_string()));
        }
        let url = self.url("api/where/stops-for-location.json", &query)?;
        let body = self.get(url).await?;
        Ok(decode_list(&body, self.region_identifier)?)
    }

    /// Routes near a coordinate, optionally filtered by a search query.
    pub async fn routes_for_location(
        &self,
        lat: f64,
        lon: f64,
        search_query: Option<&str>,
    ) -> ObaResult<ListResponse<Route>> {
        let mut query = vec![("lat", lat.to_string()), ("lon", lon.to_string())];
        if let Some(search_query) = search_query {
            query.push(("query", search_query.to_string()));
        }
        let url = self.url("api/where/routes-for-location.json", &query)?;
        let body = self.get(url).await?;
        Ok(decode_list(&body, self.region_identifier)?)
    }
}
