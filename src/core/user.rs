//! User business logic - Creation and lookup of identity records.
//!
//! Users are only ever created through [`create_user`] or [`create_superuser`],
//! which enforce that an email is present and that the stored credential is a
//! hash (or an unusable marker), never the raw password.

use crate::{
    core::password::{CredentialHolder, hash_password, make_unusable_password},
    entities::{User, user},
    errors::{Error, Result},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{Set, SqlErr, prelude::*};
use tracing::{debug, info, instrument, warn};

/// Additional attributes supplied when creating a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    /// Date of birth (required)
    pub birthday: NaiveDate,
    /// Display name, may be blank
    pub name: String,
}

impl NewUser {
    /// Creates attributes with a blank name.
    #[must_use]
    pub const fn new(birthday: NaiveDate) -> Self {
        Self {
            birthday,
            name: String::new(),
        }
    }

    /// Sets the display name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}

/// Creates a standard user with neither staff nor superuser status.
///
/// When `password` is `None` the user is given an unusable credential and
/// cannot log in until a password is set. Surrounding whitespace is trimmed
/// from `email` before it is validated and stored.
///
/// # Errors
/// Returns an error if:
/// - The email is empty or longer than 255 characters
/// - The name is longer than 30 characters
/// - A user with the same email already exists
/// - Hashing or the database insert fails
pub async fn create_user(
    db: &DatabaseConnection,
    email: &str,
    password: Option<&str>,
    fields: NewUser,
) -> Result<user::Model> {
    create_user_with_flags(db, email, password, false, false, fields).await
}

/// Creates a superuser.
///
/// Superusers are created without staff status, exactly like standard users.
/// Callers that need admin access must grant it separately. The email is
/// trimmed the same way as in [`create_user`].
///
/// # Errors
/// Returns an error if:
/// - The email is empty or longer than 255 characters
/// - The name is longer than 30 characters
/// - A user with the same email already exists
/// - Hashing or the database insert fails
pub async fn create_superuser(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
    fields: NewUser,
) -> Result<user::Model> {
    create_user_with_flags(db, email, Some(password), false, true, fields).await
}

/// Shared insert path for both user factories.
///
/// `email` is trimmed first, so the stored address may differ from the one
/// passed in; a whitespace-only email counts as empty.
#[instrument(skip(db, password, fields))]
async fn create_user_with_flags(
    db: &DatabaseConnection,
    email: &str,
    password: Option<&str>,
    is_staff: bool,
    is_superuser: bool,
    fields: NewUser,
) -> Result<user::Model> {
    let email = email.trim();
    if email.is_empty() {
        return Err(Error::Validation {
            message: "Users must have an email address".to_string(),
        });
    }

    if email.chars().count() > user::EMAIL_MAX_LENGTH {
        return Err(Error::Validation {
            message: format!(
                "Email must be at most {} characters",
                user::EMAIL_MAX_LENGTH
            ),
        });
    }

    if fields.name.chars().count() > user::NAME_MAX_LENGTH {
        return Err(Error::Validation {
            message: format!("Name must be at most {} characters", user::NAME_MAX_LENGTH),
        });
    }

    let credential = match password {
        Some(raw) => hash_password(raw)?,
        None => {
            debug!("No password supplied, storing an unusable credential");
            make_unusable_password()
        }
    };

    let now = Utc::now();
    let user = user::ActiveModel {
        email: Set(email.to_string()),
        name: Set(fields.name),
        birthday: Set(fields.birthday),
        password: Set(credential),
        is_staff: Set(is_staff),
        is_superuser: Set(is_superuser),
        last_login: Set(Some(now)),
        ..Default::default()
    };

    match user.insert(db).await {
        Ok(created) => {
            info!(user_id = created.id, "Created user");
            Ok(created)
        }
        Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            warn!("Email is already registered");
            Err(Error::EmailTaken {
                email: email.to_string(),
            })
        }
        Err(err) => Err(err.into()),
    }
}

/// Finds a user by ID.
pub async fn get_user_by_id(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Finds a user by their exact email address.
pub async fn get_user_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Returns the user with this email if `password` matches their credential.
///
/// Unknown emails, wrong passwords, and unusable credentials all yield `None`.
#[instrument(skip(db, password))]
pub async fn authenticate(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<Option<user::Model>> {
    let Some(user) = get_user_by_email(db, email.trim()).await? else {
        debug!("No user with this email");
        return Ok(None);
    };

    if user.check_password(password)? {
        Ok(Some(user))
    } else {
        debug!(user_id = user.id, "Password did not match");
        Ok(None)
    }
}

/// Loads a user that must exist.
pub(crate) async fn require_user(db: &DatabaseConnection, user_id: i64) -> Result<user::Model> {
    get_user_by_id(db, user_id)
        .await?
        .ok_or(Error::UserNotFound { id: user_id })
}
