use axum::{Extension, Json, extract::Query, http::StatusCode};
use serde::Deserialize;
use time::{Date, macros::format_description};
use tracing::warn;

use crate::{
    error::InvalidDate,
    models::{CallLogFilter, CallLogSummary, DataResponse, StatusResponse},
    repositories::call_log::CallLogRepo,
};

const DEFAULT_LIMIT: u32 = 20;
const MAX_LIMIT: u32 = 500;

#[derive(Debug, Default, Deserialize)]
pub struct ListCallLogsParams {
    pub status: Option<String>,
    pub search: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn parse_date(value: Option<String>) -> Result<Option<Date>, InvalidDate> {
    non_empty(value)
        .map(|value| {
            Date::parse(value.trim(), format_description!("[year]-[month]-[day]"))
                .map_err(|_| InvalidDate { value })
        })
        .transpose()
}

impl TryFrom<ListCallLogsParams> for CallLogFilter {
    type Error = InvalidDate;

    fn try_from(params: ListCallLogsParams) -> Result<Self, Self::Error> {
        Ok(Self {
            status: non_empty(params.status),
            search: non_empty(params.search),
            created_from: parse_date(params.from)?,
            created_to: parse_date(params.to)?,
            limit: params.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as i64,
            offset: params.offset.unwrap_or(0) as i64,
        })
    }
}

pub async fn list_call_logs_handler(
    Extension(call_log_repo): Extension<CallLogRepo>,
    Query(params): Query<ListCallLogsParams>,
) -> Result<Json<DataResponse<Vec<CallLogSummary>>>, (StatusCode, Json<StatusResponse>)> {
    let filter = CallLogFilter::try_from(params)
        .map_err(|e| (StatusCode::BAD_REQUEST, Json(StatusResponse::error(e.to_string()))))?;

    call_log_repo
        .list(&filter)
        .await
        .map(|data| Json(DataResponse { data }))
        .map_err(|e| {
            warn!(msg = "Failed to list call logs", error = %e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse::error("Something went wrong")),
            )
        })
}
