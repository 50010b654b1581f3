use argon2::{
    password_hash::{rand_core::OsRng, SaltString},
    Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
};
use uuid::Uuid;

use crate::db::{self, Db, NewUser};
use crate::models::{SignUpBody, User};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Email already registered")]
    EmailExists,
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Other(String),
}

impl From<sqlx::Error> for AuthError {
    fn from(e: sqlx::Error) -> Self {
        AuthError::Other(e.to_string())
    }
}

impl From<chrono::ParseError> for AuthError {
    fn from(e: chrono::ParseError) -> Self {
        AuthError::Other(e.to_string())
    }
}

pub fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|h| h.to_string())
        .map_err(|e| AuthError::Other(e.to_string()))
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|h| Argon2::default().verify_password(password.as_bytes(), &h).is_ok())
        .unwrap_or(false)
}

/// Applies the same rules the sign-up form enforces.
fn validate(body: &SignUpBody) -> Result<(), AuthError> {
    if body.email.is_empty() || body.lastname.is_empty() || body.firstname.is_empty() {
        return Err(AuthError::InvalidInput("Required fields are missing".into()));
    }
    let checks = crate::models::PasswordChecks::new(&body.password, &body.lastname, &body.email);
    if checks.has_name_or_email {
        return Err(AuthError::InvalidInput(
            "Password must not contain your name or email address".into(),
        ));
    }
    if !checks.meets_min_length {
        return Err(AuthError::InvalidInput(format!(
            "Password must be at least {} characters",
            crate::models::PASSWORD_MIN_LENGTH
        )));
    }
    if !checks.has_number_or_symbol {
        return Err(AuthError::InvalidInput(
            "Password must contain a number or a symbol".into(),
        ));
    }
    Ok(())
}

pub async fn register(db: &Db, body: &SignUpBody) -> Result<User, AuthError> {
    validate(body)?;
    if db::get_user_by_email(db, &body.email).await?.is_some() {
        return Err(AuthError::EmailExists);
    }
    let id = Uuid::new_v4().to_string();
    let hash = hash_password(&body.password)?;
    db::create_user(
        db,
        &NewUser {
            id: &id,
            email: &body.email,
            lastname: &body.lastname,
            firstname: &body.firstname,
            password_hash: &hash,
            birthday: body.birthday,
        },
    )
    .await
    .map_err(|e| match e {
        // Another signup for the same email won the race
        sqlx::Error::Database(ref db_err) if db_err.is_unique_violation() => AuthError::EmailExists,
        e => e.into(),
    })?;

    let row = db::get_user_by_id(db, &id)
        .await?
        .ok_or_else(|| AuthError::Other("User was not stored".into()))?;
    Ok(row.to_user()?)
}

pub async fn login(db: &Db, email: &str, password: &str) -> Result<User, AuthError> {
    let row = db::get_user_by_email(db, email)
        .await?
        .ok_or(AuthError::InvalidCredentials)?;

    if !verify_password(password, &row.password_hash) {
        return Err(AuthError::InvalidCredentials);
    }
    Ok(row.to_user()?)
}
