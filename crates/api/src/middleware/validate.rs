use axum::{
    Form, Json,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use shared::errors::{HttpError, ServiceError};
use validator::Validate;

/// Deserializes a JSON or URL-encoded body and runs its validation rules.
/// Every rejection is rendered as a 400 with the uniform error body.
pub struct ValidatedBody<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedBody<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let value = if is_form_encoded(&req) {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;
            value
        } else {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| HttpError::BadRequest(rejection.body_text()))?;
            value
        };

        value.validate().map_err(ServiceError::from)?;

        Ok(Self(value))
    }
}

fn is_form_encoded(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"))
}
