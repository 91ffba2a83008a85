mod stop_arrivals;
mod stops_for_route;

pub use stop_arrivals::StopArrivals;
pub use stops_for_route::{StopGroup, StopGrouping, StopsForRoute};

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::error::{ModelError, ModelResult};
use super::references::{RawReferences, References, ResolveReferences};
use super::serde_helpers::deserialize_option_millis;

/// Top-level wrapper every API response arrives in.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RestResponse<T> {
    #[serde(default)]
    code: Option<i32>,
    #[serde(default)]
    text: Option<String>,
    #[serde(default, deserialize_with = "deserialize_option_millis")]
    current_time: Option<DateTime<Utc>>,
    #[serde(default = "Option::default")]
    data: Option<T>,
}

/// Wire shape of a single-entry payload.
#[derive(Debug, Deserialize)]
struct EntryPayload<T> {
    entry: T,
    #[serde(default)]
    references: RawReferences,
}

/// Wire shape of a list payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListPayload<T> {
    list: Vec<T>,
    #[serde(default)]
    limit_exceeded: bool,
    #[serde(default)]
    out_of_range: bool,
    #[serde(default)]
    references: RawReferences,
}

/// A decoded, fully resolved single-entry response.
#[derive(Debug)]
pub struct EntryResponse<T> {
    /// Server clock at the time of the response.
    pub current_time: Option<DateTime<Utc>>,
    pub entry: T,
}

/// A decoded, fully resolved list response.
#[derive(Debug)]
pub struct ListResponse<T> {
    /// Server clock at the time of the response.
    pub current_time: Option<DateTime<Utc>>,
    pub list: Vec<T>,
    /// Whether the server truncated the list.
    pub limit_exceeded: bool,
    /// Whether the queried location falls outside the covered region.
    pub out_of_range: bool,
}

fn decode_body<T>(body: &[u8]) -> ModelResult<(Option<DateTime<Utc>>, T)>
where
    T: DeserializeOwned,
{
    let response: RestResponse<T> = serde_json::from_slice(body)?;

    if let Some(code) = response.code {
        if code != 200 {
            return Err(ModelError::Response(code, response.text.unwrap_or_default()));
        }
    }

    let data = response.data.ok_or_else(|| {
        ModelError::Response(response.code.unwrap_or_default(), "empty response body".to_string())
    })?;

    Ok((response.current_time, data))
}

/// Decode a single-entry response and resolve the entry against its
/// references section. A required reference missing from the section fails
/// the whole envelope.
pub fn decode_entry<T>(body: &[u8], region_identifier: Option<i64>) -> ModelResult<EntryResponse<T>>
where
    T: DeserializeOwned + ResolveReferences,
{
    let (current_time, payload) = decode_body::<EntryPayload<T>>(body)?;

    let references = References::new(payload.references);
    let mut entry = payload.entry;
    entry.resolve_references(&references, region_identifier)?;

    Ok(EntryResponse {
        current_time,
        entry,
    })
}

/// Decode a list response and resolve each element independently. An element
/// whose required references are missing is skipped; the rest of the batch
/// survives.
pub fn decode_list<T>(body: &[u8], region_identifier: Option<i64>) -> ModelResult<ListResponse<T>>
where
    T: DeserializeOwned + ResolveReferences,
{
    let (current_time, payload) = decode_body::<ListPayload<T>>(body)?;

    let references = References::new(payload.references);
    let mut list = Vec::with_capacity(payload.list.len());
    for mut item in payload.list {
        match item.resolve_references(&references, region_identifier) {
            Ok(()) => list.push(item),
            Err(e) => log::warn!("Skipping unresolvable list entry: {}", e),
        }
    }

    Ok(ListResponse {
        current_time,
        list,
        limit_exceeded: payload.limit_exceeded,
        out_of_range: payload.out_of_range,
    })
}
