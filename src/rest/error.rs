#[derive(thiserror::Error, Debug)]
pub enum RestError {
    #[error("Init error: {0}")]
    Init(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

pub type RestResult<T> = Result<T, RestError>;
