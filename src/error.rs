//! Error types for pagination operations.

use thiserror::Error;

/// Errors that can occur while querying or paginating a record store.
#[derive(Debug, Error)]
pub enum Error {
	/// The underlying database query failed.
	#[error("Database error: {0}")]
	Database(#[from] sqlx::Error),

	/// A page size of zero was requested.
	#[error("Invalid page size: {0}")]
	InvalidPageSize(usize),

	/// A filter or ordering referenced a field the model does not have.
	#[error("Unknown field: {0}")]
	UnknownField(String),
}

/// Result type alias for pagination operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_invalid_page_size_display() {
		let error = Error::InvalidPageSize(0);
		assert_eq!(error.to_string(), "Invalid page size: 0");
	}

	#[rstest]
	fn test_unknown_field_display() {
		let error = Error::UnknownField("billing_hour".to_string());
		assert_eq!(error.to_string(), "Unknown field: billing_hour");
	}

	#[rstest]
	fn test_database_error_from() {
		let error: Error = sqlx::Error::RowNotFound.into();
		assert!(matches!(error, Error::Database(_)));
	}
}
