use rusqlite::ErrorCode;

/// Failures surfaced by the message store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached or could not complete the operation.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store refused the write, e.g. a constraint on the record failed.
    #[error("write rejected: {0}")]
    WriteRejected(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        match &e {
            rusqlite::Error::SqliteFailure(err, _)
                if matches!(
                    err.code,
                    ErrorCode::ConstraintViolation | ErrorCode::TypeMismatch | ErrorCode::TooBig
                ) =>
            {
                StoreError::WriteRejected(e.to_string())
            }
            rusqlite::Error::ToSqlConversionFailure(_) => StoreError::WriteRejected(e.to_string()),
            _ => StoreError::Unavailable(e.to_string()),
        }
    }
}
