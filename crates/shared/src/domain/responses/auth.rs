use crate::model::User;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Public projection of a user; the password digest never leaves the service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserResponse {
    pub id: i32,
    pub email: String,
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        UserResponse {
            id: value.user_id,
            email: value.email,
            role: value.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserResponse,
}
