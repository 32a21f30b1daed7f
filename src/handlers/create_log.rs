use axum::{
    Extension, Json,
    body::Bytes,
    extract::{RawQuery, rejection::BytesRejection},
    http::{HeaderMap, header::CONTENT_TYPE},
};
use tower_http::request_id::RequestId;
use tracing::{info, instrument, warn};

use crate::{
    error::IngestFailure,
    form::FormDict,
    ingest::{LOG_CREATED, ingest},
    models::StatusResponse,
    repositories::call_log::CallLogRepo,
    utils::{get_header, request_id_to_string},
};

/// Ingest one call log.
///
/// Always answers 200; failures of any kind come back as an error status
/// object carrying the failure text.
#[instrument(name = "handlers.create_log", skip_all)]
pub async fn create_log_handler(
    Extension(call_log_repo): Extension<CallLogRepo>,
    req_id: Option<Extension<RequestId>>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> Json<StatusResponse> {
    let req_id = req_id
        .map(|Extension(id)| request_id_to_string(&id))
        .unwrap_or_default();
    let content_type = get_header(&headers, &CONTENT_TYPE);

    let result = async {
        let body =
            body.map_err(|rejection| IngestFailure::UnreadableBody(rejection.body_text()))?;
        let form = FormDict::from_parts(query.as_deref(), &content_type, body).await?;
        ingest(call_log_repo.as_ref(), &form).await
    }
    .await;

    match result {
        Ok(log) => {
            info!(
                msg = "Call log created",
                %req_id,
                name = %log.name,
                status = %log.status,
            );

            Json(StatusResponse::success(LOG_CREATED))
        }
        Err(e) => {
            warn!(
                msg = "Rejecting call log",
                %req_id,
                error = %e,
            );

            Json(StatusResponse::error(e.to_string()))
        }
    }
}
