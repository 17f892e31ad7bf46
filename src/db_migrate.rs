use agenda_api::config::ApiConfig;
use agenda_db::schema::initialize_database;
use color_eyre::eyre::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let config = ApiConfig::from_env()?;

    println!("Connecting to database...");
    // Create database connection pool
    let db_pool = agenda_db::create_pool(&config.database_url()).await?;

    // Initialize database schema
    println!("Initializing database schema...");
    initialize_database(&db_pool).await?;
    println!("Database schema initialized successfully.");

    Ok(())
}
