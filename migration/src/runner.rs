use colored::*;
use sea_orm::DatabaseConnection;
use sea_orm_migration::prelude::*;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

/// Applies every migration that has not been recorded yet, printing one
/// aligned status line per migration.
pub async fn run_pending(db: &DatabaseConnection) -> Result<(), DbErr> {
    let pending = <crate::Migrator as MigratorTrait>::get_pending_migrations(db).await?;

    if pending.is_empty() {
        println!("{}", "Nothing to migrate".dimmed());
        return Ok(());
    }

    println!("Running migrations...");
    for migration in pending {
        let name = migration.name().to_owned();
        let start = status_line("Applying", &name);

        match <crate::Migrator as MigratorTrait>::up(db, Some(1)).await {
            Ok(()) => done(start),
            Err(err) => {
                println!("{}", "failed".red());
                return Err(err);
            }
        }
    }

    Ok(())
}

/// Rolls back every applied migration, newest first.
pub async fn rollback_all(db: &DatabaseConnection) -> Result<(), DbErr> {
    let applied = <crate::Migrator as MigratorTrait>::get_applied_migrations(db).await?;

    for migration in applied.into_iter().rev() {
        let name = migration.name().to_owned();
        let start = status_line("Reverting", &name);

        match <crate::Migrator as MigratorTrait>::down(db, Some(1)).await {
            Ok(()) => done(start),
            Err(err) => {
                println!("{}", "failed".red());
                return Err(err);
            }
        }
    }

    Ok(())
}

/// Drops every table and re-applies the full migration list.
pub async fn fresh(db: &DatabaseConnection) -> Result<(), DbErr> {
    rollback_all(db).await?;
    run_pending(db).await
}

/// Deletes a SQLite database file. Returns `false` if there was nothing to delete.
pub fn remove_db_file(db_path: &Path) -> io::Result<bool> {
    if !db_path.exists() {
        return Ok(false);
    }
    fs::remove_file(db_path)?;
    Ok(true)
}

fn status_line(action: &str, name: &str) -> Instant {
    let name_str = format!("{} {}", action, name.bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    io::stdout().flush().ok();
    Instant::now()
}

fn done(start: Instant) {
    let time_str = format!("({:.2?})", start.elapsed()).dimmed();
    println!("{} {}", "done".green(), time_str);
}
