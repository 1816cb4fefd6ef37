use anyhow::{anyhow, Result};
use course_link_bot::config::database_url_from_env;
use course_link_bot::database::connection::DatabaseManager;
use course_link_bot::database::seed::{seed_demo, DEMO_CHAT_ID, DEMO_STUDENT_ID};
use std::env;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("migrate");

    match command {
        "migrate" | "up" => run_migrations().await.map(|_| ()),
        "check" => check_database().await,
        "seed" => seed_database().await,
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

async fn run_migrations() -> Result<DatabaseManager> {
    println!("🔧 Course Link Bot - Database Migration Tool");
    println!("============================================");

    dotenvy::dotenv().ok();
    let database_url = database_url_from_env();
    println!("📊 Database URL: {}", mask_url(&database_url));

    if let Some(db_path) = database_url.strip_prefix("sqlite:") {
        let db_path = db_path.trim_start_matches("//");
        if let Some(parent) = Path::new(db_path).parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                println!("📁 Creating directory: {}", parent.display());
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    let db_manager = DatabaseManager::new(&database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    println!("🚀 Running database migrations...");
    db_manager
        .run_migrations()
        .await
        .map_err(|e| anyhow!("Migration failed: {}", e))?;
    println!("✅ Migrations completed successfully!");

    Ok(db_manager)
}

async fn check_database() -> Result<()> {
    println!("🔍 Checking database connection and schema...");

    dotenvy::dotenv().ok();
    let database_url = database_url_from_env();
    println!("📊 Database URL: {}", mask_url(&database_url));

    let db_manager = DatabaseManager::new(&database_url)
        .await
        .map_err(|e| anyhow!("Failed to connect to database: {}", e))?;

    match list_tables(&db_manager).await {
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

async fn seed_database() -> Result<()> {
    let db_manager = run_migrations().await?;

    println!("🌱 Seeding demo student...");
    if seed_demo(&db_manager.pool).await? {
        println!("✅ Demo student {DEMO_STUDENT_ID} bound to chat {DEMO_CHAT_ID}");
    } else {
        println!("ℹ️  Demo student {DEMO_STUDENT_ID} already exists, nothing to do");
    }

    Ok(())
}

async fn list_tables(db_manager: &DatabaseManager) -> Result<Vec<String>> {
    let tables = sqlx::query_scalar::<_, String>(
        "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name"
    )
    .fetch_all(&db_manager.pool)
    .await?;

    Ok(tables)
}

fn mask_url(url: &str) -> String {
    if let Some(path) = url.strip_prefix("sqlite:") {
        if let Some(filename) = Path::new(path).file_name() {
            return format!("sqlite:.../{}", filename.to_string_lossy());
        }
    }
    url.to_string()
}

fn print_help() {
    println!("📚 Course Link Bot - Database Migration Tool");
    println!();
    println!("USAGE:");
    println!("    migrate [COMMAND]");
    println!();
    println!("COMMANDS:");
    println!("    migrate, up    Run database migrations (default)");
    println!("    check          Check database connection and schema");
    println!("    seed           Run migrations and insert a demo student");
    println!("    help           Show this help message");
    println!();
    println!("ENVIRONMENT:");
    println!("    DATABASE_URL   Database connection string (default: sqlite:./data/courses.db)");
    println!();
}
