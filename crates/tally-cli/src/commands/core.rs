//! Core command implementations and shared utilities
//!
//! This module contains:
//! - `open_db` - Shared utility to open the database
//! - `resolve_user` - Pick the user a command acts on
//! - `print_json` - Shared `--json` output
//! - `cmd_init` - Initialize the database

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tally_core::db::Database;
use tally_core::models::User;
use tally_core::Config;

/// Open database with encryption by default, or unencrypted if --no-encrypt
pub fn open_db(db_path: &Path, no_encrypt: bool) -> Result<Database> {
    let path_str = db_path
        .to_str()
        .context("Database path is not valid UTF-8")?;
    if no_encrypt {
        Database::new_unencrypted(path_str).context("Failed to open database (unencrypted)")
    } else {
        Database::new(path_str).context("Failed to open database")
    }
}

/// Find the user for `--user`, falling back to `[defaults].user`
pub fn resolve_user(db: &Database, user: Option<&str>, config: &Config) -> Result<User> {
    let email = user
        .or(config.default_user.as_deref())
        .context("No user selected. Pass --user <email> or set [defaults].user in the config file")?;

    db.get_user_by_email(email)?.ok_or_else(|| {
        anyhow::anyhow!(
            "User '{}' not found. Create it with: tally users add <name> {}",
            email,
            email
        )
    })
}

/// Pretty-print any serializable value
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn cmd_init(db_path: &Path, no_encrypt: bool) -> Result<()> {
    println!("🔧 Initializing database at {}...", db_path.display());

    let db = open_db(db_path, no_encrypt)?;

    if db.is_encrypted()? {
        println!("   🔒 Encryption: ENABLED");
    } else {
        println!("   ⚠️  Encryption: DISABLED (--no-encrypt)");
    }

    println!("✅ Database initialized successfully!");
    println!();
    println!("Next steps:");
    println!("  1. Add a user: tally users add \"Your Name\" you@example.com");
    println!("  2. Record transactions: tally -u you@example.com add --date 2024-01-05 --amount 1200 --kind expense --category Rent");
    println!("  3. Get advice: tally -u you@example.com recommend");

    Ok(())
}
