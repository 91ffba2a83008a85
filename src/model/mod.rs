pub mod agency;
pub mod arrival_departure;
pub mod enums;
pub mod error;
pub mod polyline;
pub mod references;
pub mod responses;
pub mod route;
pub mod serde_helpers;
pub mod situation;
pub mod stop;
pub mod trip;

use std::sync::Arc;

use self::enums::EntityType;

/// Records addressable by identifier within a single API response
///
/// Identifiers are technical and unique per entity type within a region;
/// they should not be shown to riders.
pub trait Entity {
    /// Identifier of the record
    fn id(&self) -> &str;

    /// Which block of the references section the record belongs to
    fn entity_type(&self) -> EntityType;
}

impl<T: Entity> Entity for Arc<T> {
    fn id(&self) -> &str {
        self.as_ref().id()
    }

    fn entity_type(&self) -> EntityType {
        self.as_ref().entity_type()
    }
}
