//! # Stratus Exception
//!
//! Error type shared by the Stratus console crates.
//!
//! Every fallible operation in the pagination core returns
//! [`Result<T>`], so callers only ever match on a single enum.

use thiserror::Error;

/// Error type for Stratus operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// An argument violated the documented input constraints
	///
	/// This is the only error kind raised by the page window calculator.
	#[error("Invalid argument: {0}")]
	InvalidArgument(String),

	/// A raw page parameter (typically from a query string) was rejected
	#[error("Invalid page: {0}")]
	InvalidPage(String),

	/// Settings failed validation
	#[error("Improperly configured: {0}")]
	ImproperlyConfigured(String),
}

impl Error {
	/// Shorthand for [`Error::InvalidArgument`]
	///
	/// # Examples
	///
	/// ```
	/// use stratus_exception::Error;
	///
	/// let err = Error::invalid_argument("items_per_page must be at least 1");
	/// assert_eq!(
	///     err.to_string(),
	///     "Invalid argument: items_per_page must be at least 1"
	/// );
	/// ```
	pub fn invalid_argument(message: impl Into<String>) -> Self {
		Self::InvalidArgument(message.into())
	}

	/// Returns true if this is an [`Error::InvalidArgument`]
	pub fn is_invalid_argument(&self) -> bool {
		matches!(self, Self::InvalidArgument(_))
	}
}

/// Result type for Stratus operations
pub type Result<T> = std::result::Result<T, Error>;
