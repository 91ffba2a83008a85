use super::enums::EntityType;

/// Failure while weaving a decoded response into a linked object graph.
#[derive(thiserror::Error, Debug)]
pub enum ResolutionError {
    /// A reference the response cannot stand without pointed at an entity
    /// absent from the references section.
    #[error("Missing required {0} reference: {1}")]
    RequiredReferenceMissing(EntityType, String),
}

impl ResolutionError {
    pub(crate) fn required(entity_type: EntityType, id: &str) -> Self {
        ResolutionError::RequiredReferenceMissing(entity_type, id.to_string())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ModelError {
    #[error("Deserialize error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("Error response: {0} {1}")]
    Response(i32, String),
}

pub type ModelResult<T> = Result<T, ModelError>;
