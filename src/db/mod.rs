use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{FromRow, Pool, Sqlite};

use crate::models::User;

pub type Db = Pool<Sqlite>;

pub const DEFAULT_PROFILE_IMAGE: &str = "/static/image/user/default_user_profile_image.jpg";

const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

// User row as stored
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserRow {
    pub id: String,
    pub email: String,
    pub lastname: String,
    pub firstname: String,
    pub password_hash: String,
    pub birthday: String,
    pub profile_image: String,
    pub created_at: String,
}

impl UserRow {
    pub fn to_user(&self) -> Result<User, chrono::ParseError> {
        Ok(User {
            id: self.id.clone(),
            email: self.email.clone(),
            lastname: self.lastname.clone(),
            firstname: self.firstname.clone(),
            birthday: NaiveDate::parse_from_str(&self.birthday, BIRTHDAY_FORMAT)?,
            profile_image: self.profile_image.clone(),
        })
    }
}

pub struct NewUser<'a> {
    pub id: &'a str,
    pub email: &'a str,
    pub lastname: &'a str,
    pub firstname: &'a str,
    pub password_hash: &'a str,
    pub birthday: NaiveDate,
}

/// Opens the pool, creating the database file if it does not exist yet.
pub async fn create_pool(url: &str) -> Result<Db, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
    log::info!("Opening database at {url}");
    SqlitePoolOptions::new()
        .max_connections(20)
        .connect_with(options)
        .await
}

// Run migrations (create tables if not exist)
pub async fn run_migrations(db: &Db) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            email TEXT UNIQUE NOT NULL,
            lastname TEXT NOT NULL,
            firstname TEXT NOT NULL,
            password_hash TEXT NOT NULL,
            birthday TEXT NOT NULL,
            profile_image TEXT NOT NULL,
            created_at TEXT NOT NULL
        )
        "#,
    )
    .execute(db)
    .await?;
    Ok(())
}

// User queries
pub async fn get_user_by_email(db: &Db, email: &str) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE email = ?")
        .bind(email.to_lowercase())
        .fetch_optional(db)
        .await
}

pub async fn get_user_by_id(db: &Db, id: &str) -> Result<Option<UserRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM users WHERE id = ?")
        .bind(id)
        .fetch_optional(db)
        .await
}

pub async fn create_user(db: &Db, user: &NewUser<'_>) -> Result<(), sqlx::Error> {
    sqlx::query(
        "INSERT INTO users (id, email, lastname, firstname, password_hash, birthday, profile_image, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, datetime('now'))",
    )
    .bind(user.id)
    .bind(user.email.to_lowercase())
    .bind(user.lastname)
    .bind(user.firstname)
    .bind(user.password_hash)
    .bind(user.birthday.format(BIRTHDAY_FORMAT).to_string())
    .bind(DEFAULT_PROFILE_IMAGE)
    .execute(db)
    .await?;
    Ok(())
}

#[cfg(test)]
pub(crate) async fn memory_pool() -> Db {
    let db = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    run_migrations(&db).await.unwrap();
    db
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stored_user_reads_back() {
        let db = memory_pool().await;
        let birthday = NaiveDate::from_ymd_opt(1990, 12, 1).unwrap();
        create_user(
            &db,
            &NewUser {
                id: "u1",
                email: "Jane@Example.com",
                lastname: "Doe",
                firstname: "Jane",
                password_hash: "hash",
                birthday,
            },
        )
        .await
        .unwrap();

        let row = get_user_by_email(&db, "jane@example.com")
            .await
            .unwrap()
            .unwrap();
        let user = row.to_user().unwrap();
        assert_eq!(user.email, "jane@example.com");
        assert_eq!(user.birthday, birthday);
        assert_eq!(user.profile_image, DEFAULT_PROFILE_IMAGE);
        assert!(get_user_by_id(&db, "u1").await.unwrap().is_some());
        assert!(get_user_by_id(&db, "u2").await.unwrap().is_none());
    }
}
