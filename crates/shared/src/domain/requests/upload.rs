use axum::body::Bytes;

/// A file received from a multipart form, held in memory until stored.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadKind {
    ProductImage,
    PaymentPhoto,
}
