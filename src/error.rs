use crate::model::error::ModelError;
use crate::rest::error::RestError;

#[derive(thiserror::Error, Debug)]
pub enum ObaError {
    #[error("REST error: {0}")]
    Rest(#[from] RestError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),
}

pub type ObaResult<T> = Result<T, ObaError>;
