//! Diesel-backed credential store.

use diesel::prelude::*;

use super::error::PersistenceError;
use super::models::{NewUserRow, UserRow};
use super::pool::DbPool;
use super::schema::users;

/// A registered user as read from the credential store.
#[derive(Debug, Clone)]
pub struct StoredUser {
    /// Store-assigned identifier; token subject at issuance.
    pub id: i32,
    /// Unique login key.
    pub email: String,
    /// Salted scrypt hash in PHC string format.
    pub password_hash: String,
}

impl From<UserRow> for StoredUser {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
        }
    }
}

/// Repository for user credential records.
#[derive(Clone)]
pub struct UserRepository {
    pool: DbPool,
}

impl UserRepository {
    /// Create a repository backed by the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Look up a user by login email.
    pub fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, PersistenceError> {
        let mut conn = self.pool.get()?;
        let row = users::table
            .filter(users::email.eq(email))
            .select(UserRow::as_select())
            .first::<UserRow>(&mut conn)
            .optional()?;
        Ok(row.map(StoredUser::from))
    }

    /// Create a user record. A duplicate email surfaces as a unique
    /// violation, which doubles as the conflict check under concurrent
    /// registration.
    pub fn insert(&self, email: &str, password_hash: &str) -> Result<StoredUser, PersistenceError> {
        let mut conn = self.pool.get()?;
        let row = NewUserRow {
            email,
            password_hash,
        };
        let stored = conn.transaction(|conn| {
            diesel::insert_into(users::table)
                .values(&row)
                .returning(UserRow::as_returning())
                .get_result::<UserRow>(conn)
        })?;
        Ok(StoredUser::from(stored))
    }
}
