// ABOUTME: Conversion from sqlx errors into the unified application error
// ABOUTME: Distinguishes missing rows and foreign-key violations from other store failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::RowNotFound => {
                Self::new(ErrorCode::ResourceNotFound, "Record not found").with_source(error)
            }
            sqlx::Error::Database(db_error) if db_error.is_foreign_key_violation() => {
                Self::in_use("Record is still referenced by other records").with_source(error)
            }
            _ => Self::database(format!("Database operation failed: {error}")).with_source(error),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_maps_to_404() {
        let error = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.http_status(), 404);
    }

    #[test]
    fn test_pool_errors_map_to_database_error() {
        let error = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(error.code, ErrorCode::DatabaseError);
        assert!(error.source.is_some());
    }
}
