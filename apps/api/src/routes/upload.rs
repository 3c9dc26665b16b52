use std::path::Path;

use axum::extract::Multipart;
use bytes::Bytes;

use crate::errors::AppError;

pub const FILE_FIELD: &str = "file";
const DEFAULT_SUFFIX: &str = ".txt";

/// The uploaded resume, held in memory until it is spooled to disk.
pub struct UploadedResume {
    pub filename: String,
    pub data: Bytes,
}

impl UploadedResume {
    /// Temp-file suffix that keeps the reader's extension dispatch working.
    pub fn suffix(&self) -> String {
        Path::new(&self.filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{e}"))
            .unwrap_or_else(|| DEFAULT_SUFFIX.to_string())
    }
}

/// Pulls the `file` field out of the form. Other fields are ignored.
pub async fn read_upload(mut multipart: Multipart) -> Result<UploadedResume, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Failed to read form field: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read file data: {e}")))?;

        return Ok(UploadedResume { filename, data });
    }

    Err(AppError::Validation(format!(
        "Missing '{FILE_FIELD}' field in upload"
    )))
}
