use serde::{Deserialize, Deserializer, Serialize, de::Error as _};
use serde_json::Value;
use time::Date;

pub const DEFAULT_STATUS: &str = "Lead";

pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_ERROR: &str = "error";

/// A stored voice agent call log.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct CallLog {
    pub name: String,
    pub caller_name: String,
    pub phone_number: String,
    pub intent: String,
    pub summary: String,
    pub transcript: String,
    pub timestamp: String,
    pub status: String,
    pub creation: String,
}

/// The listing projection of a call log. Transcripts are left out.
#[derive(Debug, Clone, PartialEq, Serialize, sqlx::FromRow)]
pub struct CallLogSummary {
    pub name: String,
    pub caller_name: String,
    pub phone_number: String,
    pub intent: String,
    pub summary: String,
    pub status: String,
    pub creation: String,
}

/// A call log waiting to be inserted.
///
/// `timestamp` stays `None` when the caller did not supply one; the
/// repository stamps it with the insert time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCallLog {
    pub caller_name: String,
    pub phone_number: String,
    pub intent: String,
    pub summary: String,
    pub transcript: String,
    pub timestamp: Option<String>,
    pub status: String,
}

impl Default for NewCallLog {
    fn default() -> Self {
        Self {
            caller_name: String::new(),
            phone_number: String::new(),
            intent: String::new(),
            summary: String::new(),
            transcript: String::new(),
            timestamp: None,
            status: DEFAULT_STATUS.to_string(),
        }
    }
}

/// Recognised keys of the decoded `data` object. Anything else is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct CallLogPayload {
    #[serde(default, deserialize_with = "field_text")]
    pub caller_name: Option<String>,
    #[serde(default, deserialize_with = "field_text")]
    pub phone_number: Option<String>,
    #[serde(default, deserialize_with = "field_text")]
    pub intent: Option<String>,
    #[serde(default, deserialize_with = "field_text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "field_text")]
    pub transcript: Option<String>,
    #[serde(default, deserialize_with = "field_text")]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "field_text")]
    pub status: Option<String>,
}

// null falls back to the default, scalars keep their JSON text
fn field_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        v @ (Value::Bool(_) | Value::Number(_)) => Ok(Some(v.to_string())),
        Value::Array(_) => Err(D::Error::custom("expected text, found an array")),
        Value::Object(_) => Err(D::Error::custom("expected text, found an object")),
    }
}

impl From<CallLogPayload> for NewCallLog {
    fn from(payload: CallLogPayload) -> Self {
        Self {
            caller_name: payload.caller_name.unwrap_or_default(),
            phone_number: payload.phone_number.unwrap_or_default(),
            intent: payload.intent.unwrap_or_default(),
            summary: payload.summary.unwrap_or_default(),
            transcript: payload.transcript.unwrap_or_default(),
            timestamp: payload.timestamp,
            status: payload
                .status
                .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
        }
    }
}

/// Filters accepted by the listing endpoint, already normalised.
#[derive(Debug, Clone, PartialEq)]
pub struct CallLogFilter {
    pub status: Option<String>,
    pub search: Option<String>,
    /// Inclusive creation-date bounds
    pub created_from: Option<Date>,
    pub created_to: Option<Date>,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub message: String,
}

impl StatusResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_SUCCESS,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}
