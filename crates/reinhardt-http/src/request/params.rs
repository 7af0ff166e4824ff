use super::Request;
use hyper::Uri;
use std::collections::HashMap;

impl Request {
	/// Parse query parameters from the URI.
	pub(super) fn parse_query_params(uri: &Uri) -> HashMap<String, String> {
		uri.query()
			.map(|q| {
				q.split('&')
					.filter(|pair| !pair.is_empty())
					.filter_map(|pair| {
						// Split on the first '=' only so values may contain '='
						let mut parts = pair.splitn(2, '=');
						Some((
							parts.next()?.to_string(),
							parts.next().unwrap_or("").to_string(),
						))
					})
					.collect()
			})
			.unwrap_or_default()
	}

	/// The request path, without the query string.
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Set a path parameter (used by routers for path variable extraction).
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_http::Request;
	///
	/// let mut request = Request::builder().uri("/articles/7/").build().unwrap();
	/// request.set_path_param("pk", "7");
	///
	/// assert_eq!(request.path_params.get("pk"), Some(&"7".to_string()));
	/// ```
	pub fn set_path_param(&mut self, key: impl Into<String>, value: impl Into<String>) {
		self.path_params.insert(key.into(), value.into());
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("/", &[])]
	#[case("/search?q=shoes", &[("q", "shoes")])]
	#[case("/search?q=a&page=2", &[("q", "a"), ("page", "2")])]
	#[case("/token?value=YWJj==", &[("value", "YWJj==")])]
	#[case("/flags?debug", &[("debug", "")])]
	#[case("/empty?&&", &[])]
	fn test_parse_query_params(#[case] uri: &str, #[case] expected: &[(&str, &str)]) {
		let uri: Uri = uri.parse().unwrap();
		let params = Request::parse_query_params(&uri);

		assert_eq!(params.len(), expected.len());
		for (key, value) in expected {
			assert_eq!(params.get(*key).map(String::as_str), Some(*value));
		}
	}
}
