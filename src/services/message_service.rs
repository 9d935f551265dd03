use sqlx::{Connection, PgConnection};

use crate::database::ConnectionProvider;
use crate::error::{Error, Result};
use crate::models::message::{Message, MessageId};

#[derive(Clone, Debug)]
pub struct MessageService {
    connections: ConnectionProvider,
}

impl MessageService {
    pub fn new(connections: ConnectionProvider) -> Self {
        Self { connections }
    }

    /// All messages, newest first.
    pub async fn list_messages(&self) -> Result<Vec<Message>> {
        let mut conn = self.connections.acquire().await?;
        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, text, created_at FROM messages
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&mut *conn)
        .await;
        conn.release().await;

        messages.map_err(Error::Query)
    }

    pub async fn insert_message(&self, text: &str) -> Result<MessageId> {
        let mut conn = self.connections.acquire().await?;
        let id = insert_returning_id(&mut conn, text).await;
        conn.release().await;

        let id = id.map_err(Error::Insert)?;
        tracing::info!(id, "Message saved");
        Ok(id)
    }

    /// Whether a connection can be opened right now.
    pub async fn ping(&self) -> bool {
        match self.connections.acquire().await {
            Ok(conn) => {
                conn.release().await;
                true
            }
            Err(_) => false,
        }
    }
}

async fn insert_returning_id(conn: &mut PgConnection, text: &str) -> sqlx::Result<MessageId> {
    let mut tx = conn.begin().await?;
    let (id,): (MessageId,) = sqlx::query_as(
        r#"
        INSERT INTO messages (text)
        VALUES ($1)
        RETURNING id
        "#,
    )
    .bind(text)
    .fetch_one(&mut *tx)
    .await?;
    tx.commit().await?;
    Ok(id)
}
