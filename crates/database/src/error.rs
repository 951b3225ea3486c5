use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to connect to the database: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Database statement failed while trying to {operation}: {source}")]
    Query {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Text content must not be empty.")]
    EmptyContent,
}

impl DbError {
    /// True when the store could not be reached at all, as opposed to a
    /// statement failing on an open connection.
    pub fn is_connection(&self) -> bool {
        matches!(self, DbError::Connection(_))
    }
}
