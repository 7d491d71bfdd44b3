use crate::domain::errors::DomainError;

pub(in crate::infrastructure::repositories) fn map_sqlx(err: sqlx::Error) -> DomainError {
    match err {
        sqlx::Error::RowNotFound => DomainError::NotFound("row not found".into()),
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            DomainError::Conflict(db.to_string())
        }
        other => DomainError::Persistence(other.to_string()),
    }
}
