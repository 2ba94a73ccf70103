//! User operations

use rusqlite::{params, OptionalExtension};

use super::{parse_datetime, Database};
use crate::error::{Error, Result};
use crate::models::User;

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

impl Database {
    /// Create a user, or return the existing id for this email
    pub fn upsert_user(&self, name: &str, email: &str) -> Result<i64> {
        let email = normalize_email(email);
        let name = name.trim();
        if email.is_empty() || name.is_empty() {
            return Err(Error::InvalidData(
                "User name and email are required".to_string(),
            ));
        }

        let conn = self.conn()?;

        let existing: Option<i64> = conn
            .query_row(
                "SELECT id FROM users WHERE email = ?",
                params![email],
                |row| row.get(0),
            )
            .optional()?;

        if let Some(id) = existing {
            return Ok(id);
        }

        conn.execute(
            "INSERT INTO users (name, email) VALUES (?, ?)",
            params![name, email],
        )?;

        Ok(conn.last_insert_rowid())
    }

    pub fn get_user(&self, id: i64) -> Result<Option<User>> {
        let conn = self.conn()?;
        let user = conn
            .query_row(
                "SELECT id, name, email, created_at FROM users WHERE id = ?",
                params![id],
                Self::row_to_user,
            )
            .optional()?;
        Ok(user)
    }

    pub fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let conn = self.conn()?;
        let user = conn
            .query_row(
                "SELECT id, name, email, created_at FROM users WHERE email = ?",
                params![normalize_email(email)],
                Self::row_to_user,
            )
            .optional()?;
        Ok(user)
    }

    pub fn list_users(&self) -> Result<Vec<User>> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare("SELECT id, name, email, created_at FROM users ORDER BY id")?;
        let users = stmt
            .query_map([], Self::row_to_user)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(users)
    }

    fn row_to_user(row: &rusqlite::Row) -> rusqlite::Result<User> {
        let created_at: String = row.get(3)?;
        Ok(User {
            id: row.get(0)?,
            name: row.get(1)?,
            email: row.get(2)?,
            created_at: parse_datetime(&created_at),
        })
    }
}
