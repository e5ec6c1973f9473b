use thiserror::Error;

/// Messages omit their `source`; it is reported as the next link in the chain.
#[derive(Debug, Error)]
pub enum ValetError {
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    #[error("Failed to decode calendar response")]
    Json(#[from] serde_json::Error),

    #[error("Invalid calendar date: {value:?}")]
    InvalidDate {
        value: String,
        #[source]
        source: Option<chrono::ParseError>,
    },

    #[error("Failed to build HTTP client")]
    Client(#[source] reqwest::Error),
}
