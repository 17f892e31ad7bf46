use eyre::Result;
use sqlx::{Pool, Postgres};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Postgres>) -> Result<()> {
    info!("Initializing database schema...");

    // Create agendamentos table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS agendamentos (
            id SERIAL PRIMARY KEY,
            nome VARCHAR(255) NOT NULL,
            data DATE NOT NULL,
            hora VARCHAR(255) NOT NULL,
            descricao TEXT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
