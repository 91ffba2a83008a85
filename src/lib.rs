//! Client-side model layer for OneBusAway-compatible transit REST APIs.
//!
//! Responses arrive as a flat payload of entity IDs plus a `references`
//! side-table of full records. Decoding produces a typed envelope skeleton;
//! resolution weaves it into a fully linked object graph backed by shared
//! handles. Decoding and resolution are synchronous and side-effect-free;
//! the optional [`rest::client::RestClient`] adds transport on top.

pub mod error;
pub mod model;
pub mod rest;

#[cfg(test)]
mod test_utils;

pub use error::{ObaError, ObaResult};
pub use model::agency::Agency;
pub use model::arrival_departure::ArrivalDeparture;
pub use model::enums::{Direction, EntityType, LocationType, RouteType, WheelchairBoarding};
pub use model::error::{ModelError, ModelResult, ResolutionError};
pub use model::polyline::PolylineEntity;
pub use model::references::{RawReferences, References, ResolveReferences};
pub use model::responses::{
    decode_entry, decode_list, EntryResponse, ListResponse, StopArrivals, StopGroup,
    StopGrouping, StopsForRoute,
};
pub use model::route::Route;
pub use model::situation::Situation;
pub use model::stop::Stop;
pub use model::trip::Trip;
pub use model::Entity;
pub use rest::client::RestClient;
pub use rest::error::{RestError, RestResult};
