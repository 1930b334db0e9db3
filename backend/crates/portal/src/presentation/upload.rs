//! Multipart Rebuilder
//!
//! Reads a browser form into a [`MultipartBody`]. Parts with a filename
//! become file parts (content type defaults to `application/octet-stream`),
//! everything else becomes a text part. Field order is kept.

use axum::extract::Multipart;
use platform::MultipartBody;

use crate::error::PortalResult;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

pub async fn read_multipart(mut multipart: Multipart) -> PortalResult<MultipartBody> {
    let mut body = MultipartBody::new();

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        body = match field.file_name().map(str::to_owned) {
            Some(file_name) => {
                let content_type = field
                    .content_type()
                    .unwrap_or(FALLBACK_CONTENT_TYPE)
                    .to_string();
                let bytes = field.bytes().await?;
                body.file(name, file_name, content_type, bytes.to_vec())
            }
            None => {
                let value = field.text().await?;
                body.text(name, value)
            }
        };
    }

    Ok(body)
}
