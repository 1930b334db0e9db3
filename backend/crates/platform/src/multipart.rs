//! Multipart Body Model
//!
//! Browser uploads are rebuilt field by field into a [`MultipartBody`],
//! which the backend client turns into a `reqwest` form. Field order is kept.

use reqwest::multipart::{Form, Part};

/// One field of a forwarded multipart form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MultipartField {
    Text {
        name: String,
        value: String,
    },
    File {
        name: String,
        file_name: String,
        content_type: String,
        bytes: Vec<u8>,
    },
}

impl MultipartField {
    pub fn name(&self) -> &str {
        match self {
            MultipartField::Text { name, .. } | MultipartField::File { name, .. } => name,
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, MultipartField::File { .. })
    }

    fn into_part(self) -> Result<(String, Part), reqwest::Error> {
        match self {
            MultipartField::Text { name, value } => Ok((name, Part::text(value))),
            MultipartField::File {
                name,
                file_name,
                content_type,
                bytes,
            } => {
                let part = Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(&content_type)?;
                Ok((name, part))
            }
        }
    }
}

/// Ordered multipart body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultipartBody {
    fields: Vec<MultipartField>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(MultipartField::Text {
            name: name.into(),
            value: value.into(),
        });
        self
    }

    pub fn file(
        mut self,
        name: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        self.push(MultipartField::File {
            name: name.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        });
        self
    }

    pub fn push(&mut self, field: MultipartField) {
        self.fields.push(field);
    }

    pub fn fields(&self) -> &[MultipartField] {
        &self.fields
    }

    pub fn file_count(&self) -> usize {
        self.fields.iter().filter(|f| f.is_file()).count()
    }

    pub fn text_count(&self) -> usize {
        self.fields.len() - self.file_count()
    }

    /// Convert into a `reqwest` form. Fails only on an unparsable content type.
    pub fn into_form(self) -> Result<Form, reqwest::Error> {
        self.fields
            .into_iter()
            .try_fold(Form::new(), |form, field| {
                let (name, part) = field.into_part()?;
                Ok(form.part(name, part))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let body = MultipartBody::new()
            .file("profilePicture", "me.png", "image/png", vec![0x89, 0x50])
            .text("userId", "42");

        assert_eq!(body.file_count(), 1);
        assert_eq!(body.text_count(), 1);
        assert_eq!(body.fields()[0].name(), "profilePicture");
        assert_eq!(body.fields()[1].name(), "userId");
    }

    #[test]
    fn test_into_form_rejects_bad_mime() {
        let body = MultipartBody::new().file("f", "a.bin", "not a mime", vec![1]);
        assert!(body.into_form().is_err());
    }

    #[test]
    fn test_into_form_accepts_valid_parts() {
        let body = MultipartBody::new()
            .file("f", "a.bin", "application/octet-stream", vec![1, 2, 3])
            .text("t", "v");
        let form = body.into_form().unwrap();
        assert!(form.boundary().len() > 0);
    }
}
