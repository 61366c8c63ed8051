//! HTTP handlers for job status.

use axum::Json;
use axum::extract::{Path, State};

use crate::api::dto::responses::JobResponse;
use crate::api::middleware::error_handler::ApiErrorResponse;
use crate::infrastructure::AppDependencies;
use crate::infrastructure::jobs::JobId;

/// GET /api/jobs/{job_id} - A job's status snapshot.
///
/// # Response
///
/// - `200 OK` - `{id, status, result, error}`; `result` is set once the job
///   finished, `error` once it failed
/// - `404 Not Found` - Unknown job id
pub async fn show(
    State(dependencies): State<AppDependencies>,
    Path(job_id): Path<String>,
) -> Result<Json<JobResponse>, ApiErrorResponse> {
    let record = dependencies
        .job_queue()
        .fetch(&JobId::from(job_id))
        .await?;

    Ok(Json(JobResponse {
        id: record.id.to_string(),
        status: record.status,
        result: record.result,
        error: record.error,
    }))
}
