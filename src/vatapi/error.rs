use thiserror::Error;

#[derive(Error, Debug)]
pub enum VatApiError {
    #[error("Authentication failed. Check your API key: vatapi config set --api-key <key>")]
    Authentication,

    #[error("Access forbidden. Check your API permissions.")]
    Authorization,

    #[error("Resource not found.")]
    NotFound,

    #[error("Rate limit exceeded. Please wait before retrying.")]
    RateLimit,

    #[error("API Error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("No response from VAT API. Check your internet connection.")]
    Connectivity,

    #[error("VAT API key not configured.")]
    NotConfigured,

    #[error("{0}")]
    Usage(String),

    #[error("Unexpected response from VAT API: {0}")]
    UnexpectedResponse(String),

    #[error("Invalid API key: {0}")]
    InvalidApiKey(#[from] reqwest::header::InvalidHeaderValue),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Could not determine the configuration directory")]
    ConfigDir,
}

pub type Result<T> = std::result::Result<T, VatApiError>;
