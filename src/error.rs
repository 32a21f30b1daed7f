use thiserror::Error;

/// Everything that can stop a call log from being ingested.
///
/// Each variant renders to the free-text `message` of an error response.
#[derive(Debug, Error)]
pub enum IngestFailure {
    #[error("missing form field `data`")]
    MissingData,

    #[error("malformed form body: {0}")]
    MalformedForm(#[source] serde_urlencoded::de::Error),

    #[error("malformed multipart body: {0}")]
    MalformedMultipart(#[source] multer::Error),

    #[error("unreadable request body: {0}")]
    UnreadableBody(String),

    #[error("malformed JSON body: {0}")]
    MalformedJsonBody(#[source] serde_json::Error),

    #[error("request body must be a JSON object")]
    BodyNotAnObject,

    #[error("invalid JSON in `data`: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("`data` must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    #[error("invalid call log field: {0}")]
    InvalidField(#[source] serde_json::Error),

    #[error("{0:#}")]
    Storage(#[from] anyhow::Error),
}

/// A listing date bound that is not a calendar date.
#[derive(Debug, Error)]
#[error("invalid date `{value}`, expected YYYY-MM-DD")]
pub struct InvalidDate {
    pub value: String,
}
