pub mod multipart;
pub mod validate;
