//! Exception types shared by handlers, middleware and views.

use thiserror::Error;

/// Result type used throughout the request pipeline.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building requests or processing them.
///
/// Views and middleware propagate these unchanged; nothing in the
/// decorator layer wraps or rewrites an error produced further down.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
	/// Malformed request data (bad URI, bad header, ...).
	#[error("HTTP error: {0}")]
	Http(String),

	/// Requested resource does not exist.
	#[error("Not found: {0}")]
	NotFound(String),

	/// Unexpected failure inside a handler or view.
	#[error("Internal server error: {0}")]
	Internal(String),

	/// A component was set up with an invalid configuration.
	#[error("Improperly configured: {0}")]
	ImproperlyConfigured(String),

	/// Settings could not be deserialized.
	#[error("Settings error: {0}")]
	Settings(String),
}

impl Error {
	/// HTTP status code a host framework should answer with for this error.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_http::Error;
	///
	/// assert_eq!(Error::NotFound("page".into()).status_code(), 404);
	/// assert_eq!(Error::Http("bad uri".into()).status_code(), 400);
	/// assert_eq!(Error::Internal("boom".into()).status_code(), 500);
	/// ```
	pub fn status_code(&self) -> u16 {
		match self {
			Error::Http(_) => 400,
			Error::NotFound(_) => 404,
			Error::Internal(_) | Error::ImproperlyConfigured(_) | Error::Settings(_) => 500,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(Error::Http("x".into()), "HTTP error: x")]
	#[case(Error::NotFound("x".into()), "Not found: x")]
	#[case(Error::Internal("x".into()), "Internal server error: x")]
	#[case(Error::ImproperlyConfigured("x".into()), "Improperly configured: x")]
	#[case(Error::Settings("x".into()), "Settings error: x")]
	fn test_error_display(#[case] error: Error, #[case] expected: &str) {
		assert_eq!(error.to_string(), expected);
	}

	#[rstest]
	fn test_configuration_errors_are_server_errors() {
		assert_eq!(Error::ImproperlyConfigured("x".into()).status_code(), 500);
		assert_eq!(Error::Settings("x".into()).status_code(), 500);
	}
}
