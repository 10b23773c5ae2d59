use crate::{
    abstract_trait::FileStorageTrait,
    domain::requests::{UploadKind, UploadedFile},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use uuid::Uuid;

/// Public URL prefix under which the upload root is served.
pub const UPLOAD_URL_PREFIX: &str = "/uploads";

const PAYMENTS_DIR: &str = "payments";
const MAX_EXTENSION_LEN: usize = 10;

/// Writes uploads below a root directory that the HTTP layer serves at
/// [`UPLOAD_URL_PREFIX`].
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub async fn init(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let storage = Self::new(root);

        tokio::fs::create_dir_all(&storage.root).await?;
        tokio::fs::create_dir_all(storage.root.join(PAYMENTS_DIR)).await?;

        info!("📁 Upload directory ready at {}", storage.root.display());
        Ok(storage)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

#[async_trait]
impl FileStorageTrait for LocalFileStorage {
    async fn save(&self, kind: UploadKind, file: &UploadedFile) -> Result<String, ServiceError> {
        let file_name = generate_file_name(kind, file.file_name.as_deref());

        let (dir, url) = match kind {
            UploadKind::ProductImage => (
                self.root.clone(),
                format!("{UPLOAD_URL_PREFIX}/{file_name}"),
            ),
            UploadKind::PaymentPhoto => (
                self.root.join(PAYMENTS_DIR),
                format!("{UPLOAD_URL_PREFIX}/{PAYMENTS_DIR}/{file_name}"),
            ),
        };

        tokio::fs::write(dir.join(&file_name), &file.bytes)
            .await
            .map_err(|e| {
                error!("❌ Failed to write upload {file_name}: {e:?}");
                ServiceError::Storage(e)
            })?;

        info!("📁 Stored upload {} ({} bytes)", url, file.bytes.len());
        Ok(url)
    }
}

pub fn generate_file_name(kind: UploadKind, original_name: Option<&str>) -> String {
    let id = Uuid::new_v4().simple();
    let ext = sanitized_extension(original_name);

    match kind {
        UploadKind::ProductImage => format!("{id}{ext}"),
        UploadKind::PaymentPhoto => format!("payment_{id}{ext}"),
    }
}

/// Keeps the client's extension only when it is short and alphanumeric.
fn sanitized_extension(original_name: Option<&str>) -> String {
    original_name
        .and_then(|name| Path::new(name).extension())
        .and_then(|ext| ext.to_str())
        .filter(|ext| {
            !ext.is_empty()
                && ext.len() <= MAX_EXTENSION_LEN
                && ext.chars().all(|c| c.is_ascii_alphanumeric())
        })
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default()
}
