use axum::{Extension, Json, extract::Path, http::StatusCode};
use tracing::warn;

use crate::{
    models::{CallLog, DataResponse, StatusResponse},
    repositories::call_log::CallLogRepo,
};

pub async fn get_call_log_handler(
    Extension(call_log_repo): Extension<CallLogRepo>,
    Path(name): Path<String>,
) -> Result<Json<DataResponse<CallLog>>, (StatusCode, Json<StatusResponse>)> {
    match call_log_repo.get_by_name(&name).await {
        Ok(Some(log)) => Ok(Json(DataResponse { data: log })),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            Json(StatusResponse::error(format!(
                "Voice Agent Call Log {} not found",
                name
            ))),
        )),
        Err(e) => {
            warn!(msg = "Failed to fetch call log", %name, error = %e);

            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(StatusResponse::error("Something went wrong")),
            ))
        }
    }
}
