use std::io::Write;

use anyhow::Context;
use axum::{extract::Multipart, Json};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::document::ResumeDocument;
use crate::pipeline::parse_resume;
use crate::profile::ProfileResponse;
use crate::reader::read_resume;
use crate::routes::upload::{read_upload, UploadedResume};

/// POST /parse
/// Multipart upload (`file` field) → frontend profile payload.
pub async fn parse_handler(multipart: Multipart) -> Result<Json<ProfileResponse>, AppError> {
    let request_id = Uuid::new_v4();
    let upload = read_upload(multipart).await?;
    info!(
        %request_id,
        filename = %upload.filename,
        bytes = upload.data.len(),
        "Parsing uploaded resume"
    );

    let doc = tokio::task::spawn_blocking(move || spool_and_read(upload))
        .await
        .context("resume reader task failed")??;

    if !doc.has_text() {
        return Err(AppError::UnreadableDocument(format!(
            "request {request_id}: no text extracted"
        )));
    }

    let parsed = parse_resume(&doc);
    info!(%request_id, sections = parsed.sections.len(), "Parsed resume");
    Ok(Json(ProfileResponse::from(parsed)))
}

/// Writes the upload to a temp file carrying its extension, then reads it.
/// The temp file is removed when this returns.
fn spool_and_read(upload: UploadedResume) -> Result<ResumeDocument, AppError> {
    let mut file = tempfile::Builder::new()
        .prefix("folio-upload-")
        .suffix(&upload.suffix())
        .tempfile()
        .context("failed to create upload temp file")?;
    file.write_all(&upload.data)
        .context("failed to write upload temp file")?;

    read_resume(file.path()).map_err(|e| AppError::UnreadableDocument(e.to_string()))
}
