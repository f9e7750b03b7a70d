use serde::{Deserialize, Serialize};

/// Public representation of a user account, never carries the password
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub email: String,
    pub name: String,
}

/// Registration payload
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Partial profile update, absent fields are left unchanged
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UpdateUserDto {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Credentials exchanged for an authentication token
#[derive(Clone, Debug, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenRequestDto {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct TokenDto {
    pub token: String,
}
