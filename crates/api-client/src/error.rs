use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Failed to build the HTTP request: {0}")]
    RequestBuild(#[from] reqwest::Error),

    #[error("The API request returned an error (status {0}): {1}")]
    Api(u16, String),

    #[error("Failed to deserialize the API response: {0}")]
    Deserialization(String),
}
