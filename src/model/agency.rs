use std::fmt;

use serde::Deserialize;

use super::enums::EntityType;
use super::serde_helpers::empty_string_as_none;
use super::Entity;

/// A transit agency, from the `agencies` block of the references section.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub id: String,
    /// Full name of the agency.
    pub name: String,
    /// URL of the agency's website.
    pub url: String,
    /// Timezone in which the agency operates.
    pub timezone: String,
    /// Primary language used by the agency.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub lang: Option<String>,
    /// Customer service phone number.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub email: Option<String>,
    /// URL of a page where riders can purchase fares.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub fare_url: Option<String>,
    /// Legal disclaimer the agency requires to accompany its data.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub disclaimer: Option<String>,
    /// Whether the agency provides private (hire) service.
    #[serde(default)]
    pub private_service: bool,
}

impl Entity for Agency {
    fn id(&self) -> &str {
        &self.id
    }

    fn entity_type(&self) -> EntityType {
        EntityType::Agency
    }
}

impl fmt::Display for Agency {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
