//! User account service.
//!
//! Registration and profile updates. Every write validates the full
//! payload first and reports all field problems together as a [`ValidationError`].

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        data::user::{UserChanges, UserRepository},
        error::{
            auth::AuthError,
            validation::{ValidationError, BLANK_FIELD, REQUIRED_FIELD},
            Error,
        },
        model::db::UserModel,
        service::is_unique_violation,
        util::{
            email::{is_valid_email, normalize_email},
            password::{hash_password, MAX_PASSWORD_BYTES, MIN_PASSWORD_LENGTH},
        },
    },
};

pub const DUPLICATE_EMAIL: &str = "user with this email already exists.";
pub const INVALID_EMAIL: &str = "Enter a valid email address.";

/// Service for managing user account operations.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    bcrypt_cost: u32,
}

impl<'a> UserService<'a> {
    /// Creates a new instance of UserService.
    ///
    /// # Arguments
    /// - `db` - Database connection reference
    /// - `bcrypt_cost` - Work factor used when hashing passwords
    pub fn new(db: &'a DatabaseConnection, bcrypt_cost: u32) -> Self {
        Self { db, bcrypt_cost }
    }

    /// Registers a new user account.
    ///
    /// The email is normalized before the uniqueness check so addresses differing only in
    /// domain case are treated as the same account.
    ///
    /// # Arguments
    /// - `payload` - Email, password and optional display name
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The created user, without the password
    /// - `Err(Error::ValidationError)` - Missing/blank/invalid email, email already registered,
    ///   or missing/short password. No user is persisted.
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn create_user(&self, payload: CreateUserDto) -> Result<UserDto, Error> {
        let mut errors = ValidationError::new();

        let email = validate_email(&mut errors, payload.email.as_deref(), true);
        let password = validate_password(&mut errors, payload.password.as_deref(), true);
        let name = payload.name.map(|name| name.trim().to_string());

        errors.into_result()?;

        let (Some(email), Some(password)) = (email, password) else {
            return Err(Error::InternalError(
                "Registration payload passed validation without email or password".to_string(),
            ));
        };

        let user_repository = UserRepository::new(self.db);

        if user_repository.find_by_email(&email).await?.is_some() {
            return Err(ValidationError::field("email", DUPLICATE_EMAIL).into());
        }

        let password_hash = hash_password(&password, self.bcrypt_cost).await?;

        let user = match user_repository
            .create(email, password_hash, name.unwrap_or_default())
            .await
        {
            Ok(user) => user,
            Err(err) if is_unique_violation(&err) => {
                return Err(ValidationError::field("email", DUPLICATE_EMAIL).into());
            }
            Err(err) => return Err(err.into()),
        };

        tracing::debug!(user_id = %user.id, "Registered new user");

        Ok(user_dto(user))
    }

    /// Partially updates the profile of `user_id`.
    ///
    /// Only fields present in the payload are validated and changed. A new password is
    /// hashed before storage; a new email must not belong to another account.
    ///
    /// # Returns
    /// - `Ok(UserDto)` - The updated profile
    /// - `Err(Error::ValidationError)` - A provided field is invalid
    /// - `Err(Error::AuthError)` - The user no longer exists
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn update_user(&self, user_id: i32, payload: UpdateUserDto) -> Result<UserDto, Error> {
        let mut errors = ValidationError::new();

        let email = validate_email(&mut errors, payload.email.as_deref(), false);
        let password = validate_password(&mut errors, payload.password.as_deref(), false);
        let name = payload.name.map(|name| name.trim().to_string());

        errors.into_result()?;

        let user_repository = UserRepository::new(self.db);

        if let Some(email) = &email {
            if let Some(existing) = user_repository.find_by_email(email).await? {
                if existing.id != user_id {
                    return Err(ValidationError::field("email", DUPLICATE_EMAIL).into());
                }
            }
        }

        let password_hash = match password {
            Some(password) => Some(hash_password(&password, self.bcrypt_cost).await?),
            None => None,
        };

        let changes = UserChanges {
            email,
            password_hash,
            name,
        };

        let user = match user_repository.update(user_id, changes).await {
            Ok(Some(user)) => user,
            Ok(None) => return Err(AuthError::InvalidToken.into()),
            Err(err) if is_unique_violation(&err) => {
                return Err(ValidationError::field("email", DUPLICATE_EMAIL).into());
            }
            Err(err) => return Err(err.into()),
        };

        tracing::debug!(user_id = %user.id, "Updated user profile");

        Ok(user_dto(user))
    }
}

pub(crate) fn user_dto(user: UserModel) -> UserDto {
    UserDto {
        email: user.email,
        name: user.name,
    }
}

/// Validates an optional email field, recording problems in `errors`.
///
/// Returns the normalized email when it is present and valid.
fn validate_email(
    errors: &mut ValidationError,
    email: Option<&str>,
    required: bool,
) -> Option<String> {
    match email {
        None => {
            if required {
                errors.add("email", REQUIRED_FIELD);
            }
            None
        }
        Some(email) if email.trim().is_empty() => {
            errors.add("email", BLANK_FIELD);
            None
        }
        Some(email) => {
            let email = normalize_email(email);

            if is_valid_email(&email) {
                Some(email)
            } else {
                errors.add("email", INVALID_EMAIL);
                None
            }
        }
    }
}

/// Validates an optional password field, recording problems in `errors`.
///
/// Passwords are never trimmed; surrounding whitespace is part of the secret.
fn validate_password(
    errors: &mut ValidationError,
    password: Option<&str>,
    required: bool,
) -> Option<String> {
    match password {
        None => {
            if required {
                errors.add("password", REQUIRED_FIELD);
            }
            None
        }
        Some(password) if password.trim().is_empty() => {
            errors.add("password", BLANK_FIELD);
            None
        }
        Some(password) if password.chars().count() < MIN_PASSWORD_LENGTH => {
            errors.add(
                "password",
                format!(
                    "Ensure this field has at least {} characters.",
                    MIN_PASSWORD_LENGTH
                ),
            );
            None
        }
        Some(password) if password.len() > MAX_PASSWORD_BYTES => {
            errors.add(
                "password",
                format!(
                    "Ensure this field has no more than {} bytes.",
                    MAX_PASSWORD_BYTES
                ),
            );
            None
        }
        Some(password) => Some(password.to_string()),
    }
}
