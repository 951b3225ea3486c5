use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;

const CREATE_TEXTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS texts (
        id SERIAL PRIMARY KEY,
        content TEXT NOT NULL
    );
"#;

/// Opens a single, unpooled connection to the PostgreSQL database.
///
/// Every caller owns the returned connection for the duration of one
/// operation and must hand it back to [`release`]. A failure here is logged
/// and is terminal for the current request; nothing retries.
pub async fn connect(settings: &DatabaseSettings) -> Result<PgConnection, DbError> {
    let options = PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .username(&settings.user)
        .password(&settings.password)
        .database(&settings.name);

    PgConnection::connect_with(&options).await.map_err(|e| {
        tracing::error!(
            error = %e,
            host = %settings.host,
            port = settings.port,
            "Error connecting to the database."
        );
        DbError::Connection(e)
    })
}

/// Closes a connection obtained from [`connect`].
///
/// A failed close only means the session was already gone, so it is logged
/// and swallowed.
pub async fn release(conn: PgConnection) {
    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "Failed to close database connection cleanly.");
    }
}

/// Ensures the `texts` table exists. Safe to run on every startup.
pub async fn ensure_schema(settings: &DatabaseSettings) -> Result<(), DbError> {
    let mut conn = connect(settings).await?;
    let result = sqlx::query(CREATE_TEXTS_TABLE).execute(&mut conn).await;
    release(conn).await;

    match result {
        Ok(_) => {
            tracing::info!("Table 'texts' checked/created successfully.");
            Ok(())
        }
        Err(source) => {
            tracing::error!(error = %source, "Error creating table.");
            Err(DbError::Query {
                operation: "create the texts table",
                source,
            })
        }
    }
}
