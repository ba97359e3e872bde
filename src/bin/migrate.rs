use anyhow::{anyhow, Result};
use donstu_timetable_bot::config::Config;
use donstu_timetable_bot::storage::SqliteStore;
use std::env;
use std::io::{self, Write};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("migrate");

    match command {
        "migrate" | "up" => run_migrations().await,
        "check" => check_database().await,
        "reset" => reset_database().await,
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            print_help();
            std::process::exit(1);
        }
    }
}

async fn run_migrations() -> Result<()> {
    println!("🔧 DonSTU Timetable Bot - Session Store Migration Tool");
    println!("======================================================");

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    println!("📊 Database URL: {}", mask_url(&config.database_url));

    // Ensure data directory exists for SQLite
    if config.database_url.starts_with("sqlite:") {
        let db_path = config
            .database_url
            .strip_prefix("sqlite:")
            .unwrap_or(&config.database_url);
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.exists() {
                println!("📁 Creating directory: {}", parent.display());
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    println!("🚀 Running session store migrations...");

    let store = SqliteStore::connect(&config.database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    match store.run_migrations().await {
        Ok(_) => {
            println!("✅ Migrations completed successfully!");
        }
        Err(e) => {
            eprintln!("❌ Migration failed: {e}");
            std::process::exit(1);
        }
    }

    Ok(())
}

async fn check_database() -> Result<()> {
    println!("🔍 Checking database connection and schema...");

    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    println!("📊 Database URL: {}", mask_url(&config.database_url));

    let store = SqliteStore::connect(&config.database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    match check_tables(&store).await {
        Ok(tables) => {
            println!("✅ Database connection successful!");
            println!("📋 Found tables:");
            for table in tables {
                println!("  • {table}");
            }
        }
        Err(e) => {
            println!("⚠️  Database check failed: {e}");
            println!("💡 Try running 'migrate up' to create the schema");
        }
    }

    Ok(())
}

async fn reset_database() -> Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    println!("⚠️  This will delete ALL session data!");
    println!("📊 Database URL: {}", mask_url(&config.database_url));
    print!("Type 'yes' to continue: ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    if answer.trim() != "yes" {
        println!("Aborted.");
        return Ok(());
    }

    if let Some(db_path) = config.database_url.strip_prefix("sqlite:") {
        if Path::new(db_path).exists() {
            std::fs::remove_file(db_path)?;
            println!("🗑️  Removed {db_path}");
        }
    }

    run_migrations().await
}

async fn check_tables(store: &SqliteStore) -> Result<Vec<String>> {
    let tables = sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
    )
    .fetch_all(&store.pool)
    .await?;
    Ok(tables)
}

fn mask_url(url: &str) -> String {
    // Hide credentials if the URL ever carries any
    match url.split_once('@') {
        Some((_, rest)) => format!("***@{rest}"),
        None => url.to_string(),
    }
}

fn print_help() {
    println!("DonSTU Timetable Bot migration tool");
    println!();
    println!("Usage: migrate [COMMAND]");
    println!();
    println!("Commands:");
    println!("  migrate, up   Run pending migrations (default)");
    println!("  check         Check connection and list tables");
    println!("  reset         Delete the database and re-create the schema");
    println!("  help          Show this message");
}
