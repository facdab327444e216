use diesel::result::DatabaseErrorKind;

#[derive(Debug)]
pub enum DataError {
    Connection(String),
    Migration(String),
    UniqueViolation(String),
    ForeignKeyViolation(String),
    NotNullViolation(String),
    CheckViolation(String),
    NotFound(String),
    Query(String),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Connection(msg) => write!(f, "connection error: {msg}"),
            DataError::Migration(msg) => write!(f, "migration error: {msg}"),
            DataError::UniqueViolation(msg) => write!(f, "unique constraint violation: {msg}"),
            DataError::ForeignKeyViolation(msg) => {
                write!(f, "foreign key constraint violation: {msg}")
            }
            DataError::NotNullViolation(msg) => write!(f, "not-null constraint violation: {msg}"),
            DataError::CheckViolation(msg) => write!(f, "check constraint violation: {msg}"),
            DataError::NotFound(msg) => write!(f, "not found: {msg}"),
            DataError::Query(msg) => write!(f, "query error: {msg}"),
        }
    }
}

impl std::error::Error for DataError {}

impl From<diesel::result::Error> for DataError {
    fn from(err: diesel::result::Error) -> Self {
        match err {
            diesel::result::Error::NotFound => DataError::NotFound("record not found".to_string()),
            diesel::result::Error::DatabaseError(kind, info) => {
                let message = info.message().to_string();
                match kind {
                    DatabaseErrorKind::UniqueViolation => DataError::UniqueViolation(message),
                    DatabaseErrorKind::ForeignKeyViolation => {
                        DataError::ForeignKeyViolation(message)
                    }
                    DatabaseErrorKind::NotNullViolation => DataError::NotNullViolation(message),
                    DatabaseErrorKind::CheckViolation => DataError::CheckViolation(message),
                    _ => DataError::Query(message),
                }
            }
            other => DataError::Query(other.to_string()),
        }
    }
}

impl From<diesel::r2d2::PoolError> for DataError {
    fn from(err: diesel::r2d2::PoolError) -> Self {
        DataError::Connection(err.to_string())
    }
}

impl From<diesel::r2d2::Error> for DataError {
    fn from(err: diesel::r2d2::Error) -> Self {
        DataError::Connection(err.to_string())
    }
}

impl DataError {
    pub fn is_unique_violation(&self) -> bool {
        matches!(self, DataError::UniqueViolation(_))
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(self, DataError::ForeignKeyViolation(_))
    }
}
