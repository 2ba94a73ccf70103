//! User command implementations

use anyhow::Result;
use tally_core::db::Database;

use super::print_json;

pub fn cmd_users_list(db: &Database, json: bool) -> Result<()> {
    let users = db.list_users()?;

    if json {
        return print_json(&users);
    }

    if users.is_empty() {
        println!("No users yet. Add one with:");
        println!("  tally users add \"Your Name\" you@example.com");
        return Ok(());
    }

    println!();
    println!("👤 Users");
    println!("   ─────────────────────────────────────────────");

    for user in users {
        println!("   [{}] {} <{}>", user.id, user.name, user.email);
    }

    Ok(())
}

pub fn cmd_users_add(db: &Database, name: &str, email: &str) -> Result<i64> {
    let existing = db.get_user_by_email(email)?;
    let id = db.upsert_user(name, email)?;

    if existing.is_some() {
        println!("User {} already exists (id {})", email.trim(), id);
    } else {
        println!("✅ Added user {} (id {})", email.trim(), id);
    }

    Ok(id)
}
