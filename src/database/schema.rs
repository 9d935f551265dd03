use sqlx::PgConnection;

use super::connection::ConnectionProvider;

const CREATE_MESSAGES_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS messages (
        id SERIAL PRIMARY KEY,
        text TEXT NOT NULL,
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Creates the `messages` table if it is missing. Never fails: startup goes
/// on without a schema and the gap shows up later as query errors.
pub async fn ensure_schema(connections: &ConnectionProvider) {
    let mut conn = match connections.acquire().await {
        Ok(conn) => conn,
        Err(e) => {
            tracing::warn!("Skipping database initialization: {}", e);
            return;
        }
    };

    let result = create_messages_table(&mut conn).await;
    conn.release().await;

    match result {
        Ok(()) => tracing::info!("Database initialized successfully"),
        Err(e) => tracing::error!("Database initialization error: {}", e),
    }
}

pub async fn create_messages_table(conn: &mut PgConnection) -> sqlx::Result<()> {
    sqlx::query(CREATE_MESSAGES_TABLE).execute(conn).await?;
    Ok(())
}
