use axum::extract::{Multipart, multipart::MultipartError};
use rust_decimal::Decimal;
use shared::{domain::requests::UploadedFile, errors::HttpError};
use std::{collections::HashMap, str::FromStr};

/// Text fields and the single file part of a multipart form, fully buffered.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    file: Option<UploadedFile>,
}

impl MultipartForm {
    /// Reads every part. The part named `file_field` becomes the upload;
    /// an empty file part counts as no upload.
    pub async fn read(mut multipart: Multipart, file_field: &str) -> Result<Self, HttpError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(invalid_multipart)? {
            let Some(name) = field.name().map(str::to_owned) else {
                continue;
            };

            if name == file_field {
                let file_name = field.file_name().map(str::to_owned);
                let bytes = field.bytes().await.map_err(invalid_multipart)?;

                if !bytes.is_empty() {
                    form.file = Some(UploadedFile { file_name, bytes });
                }
            } else {
                let value = field.text().await.map_err(invalid_multipart)?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Missing fields read as the empty string.
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Missing or blank fields read as `None`.
    pub fn optional_text(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .filter(|value| !value.trim().is_empty())
            .cloned()
    }

    pub fn decimal(&self, name: &str) -> Result<Decimal, HttpError> {
        let raw = self.text(name);
        Decimal::from_str(raw.trim())
            .map_err(|_| HttpError::BadRequest(format!("{name}: must be a number")))
    }

    pub fn integer(&self, name: &str) -> Result<i32, HttpError> {
        let raw = self.text(name);
        raw.trim()
            .parse::<i32>()
            .map_err(|_| HttpError::BadRequest(format!("{name}: must be an integer")))
    }

    /// Only the exact string `"true"` is truthy.
    pub fn flag(&self, name: &str) -> bool {
        self.fields.get(name).is_some_and(|value| value == "true")
    }

    pub fn into_file(self) -> Option<UploadedFile> {
        self.file
    }

    #[cfg(test)]
    fn with_fields(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            file: None,
        }
    }
}

fn invalid_multipart(err: MultipartError) -> HttpError {
    HttpError::BadRequest(format!("Invalid multipart body: {}", err.body_text()))
}
