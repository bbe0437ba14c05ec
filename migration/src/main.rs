use migration::runner;
use std::{fs, path::Path, process};
use util::config::AppConfig;

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let command = std::env::args().nth(1);
    let sqlite_path = config.sqlite_path();

    if command.as_deref() == Some("clean") {
        match sqlite_path.as_deref() {
            Some(path) => match runner::remove_db_file(path) {
                Ok(true) => println!("Deleted DB: {}", path.display()),
                Ok(false) => println!("DB file does not exist: {}", path.display()),
                Err(err) => {
                    eprintln!("Failed to delete DB file: {err}");
                    process::exit(1);
                }
            },
            None => println!("DATABASE_URL is not a SQLite file, nothing to clean"),
        }
        return;
    }

    if let Some(path) = sqlite_path.as_deref() {
        create_db_dir(path);
    }

    let db = match sea_orm::Database::connect(config.database_dsn()).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("DB connection failed: {err}");
            process::exit(1);
        }
    };

    let result = match command.as_deref() {
        Some("fresh") => runner::fresh(&db).await,
        None | Some("up") => runner::run_pending(&db).await,
        Some(other) => {
            eprintln!("Unknown command `{other}` (expected up, fresh or clean)");
            process::exit(2);
        }
    };

    if let Err(err) = result {
        eprintln!("Migration failed: {err}");
        process::exit(1);
    }
}

fn create_db_dir(path: &Path) {
    if let Some(parent) = path.parent() {
        if let Err(err) = fs::create_dir_all(parent) {
            eprintln!("Failed to create DB directory: {err}");
            process::exit(1);
        }
    }
}
