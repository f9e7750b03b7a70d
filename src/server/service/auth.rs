//! Token authentication service.
//!
//! Exchanges credentials for the user's opaque token and resolves tokens presented on
//! protected routes back to their user.

use sea_orm::DatabaseConnection;

use crate::{
    model::user::TokenRequestDto,
    server::{
        data::{auth_token::AuthTokenRepository, user::UserRepository},
        error::{
            auth::AuthError,
            validation::{ValidationError, BLANK_FIELD, NON_FIELD_ERRORS, REQUIRED_FIELD},
            Error,
        },
        model::db::{AuthTokenModel, UserModel},
        service::is_unique_violation,
        util::{
            email::normalize_email,
            password::{burn_password_hash, verify_password},
            token::generate_token_key,
        },
    },
};

pub const INVALID_CREDENTIALS: &str = "Unable to authenticate with provided credentials.";

/// Service for issuing and resolving authentication tokens.
pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of AuthService.
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    /// Exchanges email & password for the user's authentication token.
    ///
    /// The first successful login creates the token, later logins return the same one.
    ///
    /// # Arguments
    /// - `payload` - Email & password credentials
    ///
    /// # Returns
    /// - `Ok(AuthTokenModel)` - The user's token
    /// - `Err(Error::ValidationError)` - Missing/blank fields, or credentials that don't match an
    ///   active user (reported under `non_field_errors`)
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_token(&self, payload: TokenRequestDto) -> Result<AuthTokenModel, Error> {
        let mut errors = ValidationError::new();

        let email = required_field(&mut errors, "email", payload.email);
        let password = required_field(&mut errors, "password", payload.password);

        errors.into_result()?;

        let (Some(email), Some(password)) = (email, password) else {
            return Err(Error::InternalError(
                "Token payload passed validation without email or password".to_string(),
            ));
        };

        let user_repository = UserRepository::new(self.db);

        let Some(user) = user_repository
            .find_by_email(&normalize_email(&email))
            .await?
        else {
            tracing::debug!("Token requested for unknown email");

            burn_password_hash(&password, self.bcrypt_cost).await?;

            return Err(ValidationError::field(NON_FIELD_ERRORS, INVALID_CREDENTIALS).into());
        };

        if !verify_password(&password, &user.password).await? {
            tracing::debug!(user_id = %user.id, "Token requested with wrong password");

            return Err(ValidationError::field(NON_FIELD_ERRORS, INVALID_CREDENTIALS).into());
        }

        if !user.is_active {
            tracing::debug!(user_id = %user.id, "Token requested for inactive user");

            return Err(ValidationError::field(NON_FIELD_ERRORS, INVALID_CREDENTIALS).into());
        }

        self.get_or_create_token(user.id).await
    }

    /// Resolves a token key to an active user.
    ///
    /// # Returns
    /// - `Ok(UserModel)` - The active user owning the token
    /// - `Err(Error::AuthError(AuthError::InvalidToken))` - Unknown key
    /// - `Err(Error::AuthError(AuthError::UserInactive))` - The owning user is deactivated
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn authenticate(&self, key: &str) -> Result<UserModel, Error> {
        let token_repository = AuthTokenRepository::new(self.db);

        let Some(user) = token_repository.find_user_by_key(key).await? else {
            return Err(AuthError::InvalidToken.into());
        };

        if !user.is_active {
            return Err(AuthError::UserInactive(user.id).into());
        }

        Ok(user)
    }

    async fn get_or_create_token(&self, user_id: i32) -> Result<AuthTokenModel, Error> {
        let token_repository = AuthTokenRepository::new(self.db);

        if let Some(token) = token_repository.get_by_user_id(user_id).await? {
            return Ok(token);
        }

        match token_repository
            .create(user_id, generate_token_key())
            .await
        {
            Ok(token) => {
                tracing::debug!(user_id = %user_id, "Created authentication token");

                Ok(token)
            }
            // A concurrent login created the token first
            Err(err) if is_unique_violation(&err) => token_repository
                .get_by_user_id(user_id)
                .await?
                .ok_or_else(|| {
                    Error::InternalError(format!(
                        "Token for user ID {} violated uniqueness but could not be found",
                        user_id
                    ))
                }),
            Err(err) => Err(err.into()),
        }
    }
}

fn required_field(
    errors: &mut ValidationError,
    field: &str,
    value: Option<String>,
) -> Option<String> {
    match value {
        None => {
            errors.add(field, REQUIRED_FIELD);
            None
        }
        Some(value) if value.trim().is_empty() => {
            errors.add(field, BLANK_FIELD);
            None
        }
        Some(value) => Some(value),
    }
}
