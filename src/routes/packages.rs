//! Image-set export and download routes.
//!
//! ERROR HANDLING
//! ==============
//! Both endpoints answer failures with the JSON envelope the frontend
//! expects (`success`/`error`), carried on the mapped status code. Blocking
//! image and zip work runs on the blocking pool.

#[cfg(test)]
#[path = "packages_test.rs"]
mod packages_test;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};

use composer::net::{SaveImagesRequest, SaveImagesResponse};

use crate::services::package::{self, PackageError};
use crate::state::AppState;

/// `POST /save-images` — persist the four exported surfaces as PNGs.
pub async fn save_images(
    State(state): State<AppState>,
    Json(body): Json<SaveImagesRequest>,
) -> Result<Json<SaveImagesResponse>, Response> {
    let uploads_dir = state.config.uploads_dir.clone();
    let saved = tokio::task::spawn_blocking(move || package::save_images(&uploads_dir, &body))
        .await
        .map_err(task_failure)?
        .map_err(error_response)?;

    Ok(Json(SaveImagesResponse {
        success: true,
        error: None,
        directory: Some(saved.to_string_lossy().into_owned()),
    }))
}

/// `GET /download/{agency_id}` — the generated set as a ZIP attachment.
pub async fn download(
    State(state): State<AppState>,
    Path(agency_id): Path<String>,
) -> Result<Response, Response> {
    let uploads_dir = state.config.uploads_dir.clone();
    let id = agency_id.clone();
    let bytes = tokio::task::spawn_blocking(move || package::build_package(&uploads_dir, &id))
        .await
        .map_err(task_failure)?
        .map_err(error_response)?;

    let filename = format!("{}.zip", agency_id.trim());
    Ok((
        [
            (CONTENT_TYPE, "application/zip"),
            (CONTENT_DISPOSITION, &format!("attachment; filename=\"{filename}\"")),
        ],
        bytes,
    )
        .into_response())
}

fn error_response(err: PackageError) -> Response {
    let status = package_error_to_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, "package operation failed");
    }
    (status, Json(failure(err.to_string()))).into_response()
}

fn task_failure(err: tokio::task::JoinError) -> Response {
    tracing::error!(error = %err, "blocking package task failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(failure("internal error".to_owned())),
    )
        .into_response()
}

fn failure(message: String) -> SaveImagesResponse {
    SaveImagesResponse { success: false, error: Some(message), directory: None }
}

pub(crate) fn package_error_to_status(err: &PackageError) -> StatusCode {
    match err {
        PackageError::EmptyAgencyId
        | PackageError::InvalidAgencyId(_)
        | PackageError::MalformedDataUrl(_)
        | PackageError::Base64(_)
        | PackageError::Image(_) => StatusCode::BAD_REQUEST,
        PackageError::NotFound(_) => StatusCode::NOT_FOUND,
        PackageError::Io(_) | PackageError::Zip(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
