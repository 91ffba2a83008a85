use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use super::agency::Agency;
use super::enums::{EntityType, RouteType};
use super::error::ResolutionError;
use super::references::{References, ResolveReferences};
use super::serde_helpers::empty_string_as_none;
use super::Entity;

/// A commercial transit line, from the `routes` block of the references
/// section. Every route belongs to exactly one agency.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    pub id: String,
    agency_id: String,
    /// Short rider-facing name, often a number like "10" or "100X".
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub short_name: Option<String>,
    /// Descriptive name, generally including the route's destination.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub long_name: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub description: Option<String>,
    /// The mode of travel used on the route.
    #[serde(rename = "type")]
    pub route_type: RouteType,
    /// URL of a page describing the route.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub url: Option<String>,
    /// Route color matching the agency's public-facing material, as a hex
    /// string without a leading `#`.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub color: Option<String>,
    /// Legible color for text drawn against [`Route::color`].
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub text_color: Option<String>,
    #[serde(skip)]
    agency: Option<Arc<Agency>>,
}

impl Route {
    pub fn agency_id(&self) -> &str {
        &self.agency_id
    }

    /// The agency operating this route. Absent only before resolution.
    pub fn agency(&self) -> Option<&Agency> {
        self.agency.as_deref()
    }
}

impl Entity for Route {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_type(&self) -> EntityType {
        EntityType::Route
    }
}

impl ResolveReferences for Route {
    fn resolve_references(
        &mut self,
        references: &References,
        _region_identifier: Option<i64>,
    ) -> Result<(), ResolutionError> {
        self.agency = Some(
            references
                .agency(&self.agency_id)
                .ok_or_else(|| ResolutionError::required(EntityType::Agency, &self.agency_id))?,
        );
        Ok(())
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match (&self.long_name, &self.short_name) {
            (Some(long_name), _) => write!(f, "{}", long_name),
            (None, Some(short_name)) => write!(f, "{}", short_name),
            (None, None) => write!(f, "{}", self.id),
        }
    }
}
