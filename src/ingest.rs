use serde_json::Value;

use crate::{
    error::IngestFailure,
    form::FormDict,
    models::{CallLog, CallLogPayload, NewCallLog},
    repositories::call_log::CallLogRepository,
};

pub const DATA_FIELD: &str = "data";
pub const LOG_CREATED: &str = "Log created";

/// Decode the `data` field into a call log, filling defaults for absent keys.
pub fn parse_call_log(form: &FormDict) -> Result<NewCallLog, IngestFailure> {
    let raw = form.get(DATA_FIELD).ok_or(IngestFailure::MissingData)?;

    let value: Value = serde_json::from_str(raw).map_err(IngestFailure::InvalidJson)?;
    if !value.is_object() {
        return Err(IngestFailure::NotAnObject(value_kind(&value)));
    }

    let payload: CallLogPayload =
        serde_json::from_value(value).map_err(IngestFailure::InvalidField)?;

    Ok(payload.into())
}

pub async fn ingest(
    repo: &dyn CallLogRepository,
    form: &FormDict,
) -> Result<CallLog, IngestFailure> {
    let new_log = parse_call_log(form)?;

    Ok(repo.insert(&new_log).await?)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
