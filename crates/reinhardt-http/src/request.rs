//! HTTP request representation.

mod mobile;
mod params;

pub use mobile::NoMobile;

use crate::{Error, Extensions, Result};
use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri, Version};
use std::collections::HashMap;

/// An incoming HTTP request as seen by handlers and views.
///
/// Besides the usual HTTP parts the request carries the mobile flag set by
/// upstream detection middleware ([`Request::is_mobile`]) and, once a
/// view opts out of mobile handling, the `NO_MOBILE` marker
/// ([`Request::is_no_mobile`]).
#[derive(Debug)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub version: Version,
	pub headers: HeaderMap,
	pub body: Bytes,
	pub path_params: HashMap<String, String>,
	pub query_params: HashMap<String, String>,
	pub extensions: Extensions,
	mobile: bool,
}

impl Request {
	/// Create a request from its raw parts. The mobile flag starts unset.
	pub fn new(method: Method, uri: Uri, version: Version, headers: HeaderMap, body: Bytes) -> Self {
		let query_params = Self::parse_query_params(&uri);
		Self {
			method,
			uri,
			version,
			headers,
			body,
			path_params: HashMap::new(),
			query_params,
			extensions: Extensions::new(),
			mobile: false,
		}
	}

	/// Start building a request.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_http::Request;
	/// use hyper::Method;
	///
	/// let request = Request::builder()
	///     .method(Method::GET)
	///     .uri("/articles/?page=2")
	///     .mobile(true)
	///     .build()
	///     .unwrap();
	///
	/// assert!(request.is_mobile());
	/// assert_eq!(request.path(), "/articles/");
	/// assert_eq!(request.query_params.get("page"), Some(&"2".to_string()));
	/// ```
	pub fn builder() -> RequestBuilder {
		RequestBuilder::default()
	}
}

/// Builder for [`Request`].
#[derive(Debug)]
pub struct RequestBuilder {
	method: Method,
	uri: String,
	version: Version,
	headers: HeaderMap,
	body: Bytes,
	path_params: HashMap<String, String>,
	mobile: bool,
}

impl Default for RequestBuilder {
	fn default() -> Self {
		Self {
			method: Method::GET,
			uri: "/".to_string(),
			version: Version::HTTP_11,
			headers: HeaderMap::new(),
			body: Bytes::new(),
			path_params: HashMap::new(),
			mobile: false,
		}
	}
}

impl RequestBuilder {
	pub fn method(mut self, method: Method) -> Self {
		self.method = method;
		self
	}

	pub fn uri(mut self, uri: impl Into<String>) -> Self {
		self.uri = uri.into();
		self
	}

	pub fn version(mut self, version: Version) -> Self {
		self.version = version;
		self
	}

	pub fn headers(mut self, headers: HeaderMap) -> Self {
		self.headers = headers;
		self
	}

	pub fn body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Set the mobile flag, as detection middleware would.
	pub fn mobile(mut self, mobile: bool) -> Self {
		self.mobile = mobile;
		self
	}

	/// Add a path parameter, as a router would after matching the URL.
	pub fn path_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.path_params.insert(key.into(), value.into());
		self
	}

	/// Build the request.
	///
	/// # Errors
	///
	/// Returns [`Error::Http`] when the URI cannot be parsed.
	pub fn build(self) -> Result<Request> {
		let uri: Uri = self
			.uri
			.parse()
			.map_err(|e| Error::Http(format!("invalid URI '{}': {}", self.uri, e)))?;
		let mut request = Request::new(self.method, uri, self.version, self.headers, self.body);
		request.path_params = self.path_params;
		request.set_mobile(self.mobile);
		Ok(request)
	}
}
