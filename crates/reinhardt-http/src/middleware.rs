//! Middleware and handler traits for HTTP request processing.
//!
//! ## Handler
//!
//! ```rust
//! use reinhardt_http::{Handler, Request, Response, Result};
//! use async_trait::async_trait;
//!
//! struct Home;
//!
//! #[async_trait]
//! impl Handler for Home {
//!     async fn handle(&self, request: Request) -> Result<Response> {
//!         let body = if request.is_mobile() { "small" } else { "large" };
//!         Ok(Response::ok().with_body(body))
//!     }
//! }
//! ```
//!
//! ## Middleware
//!
//! Middleware wraps handlers to add cross-cutting concerns, such as setting
//! the mobile flag before the view runs:
//!
//! ```rust
//! use reinhardt_http::{Handler, Middleware, Request, Response, Result};
//! use async_trait::async_trait;
//! use std::sync::Arc;
//!
//! struct AlwaysMobile;
//!
//! #[async_trait]
//! impl Middleware for AlwaysMobile {
//!     async fn process(&self, mut request: Request, next: Arc<dyn Handler>) -> Result<Response> {
//!         request.set_mobile(true);
//!         next.handle(request).await
//!     }
//! }
//! ```

use async_trait::async_trait;
use std::sync::Arc;

use crate::{Request, Response, Result};

/// Handler trait for processing requests.
#[async_trait]
pub trait Handler: Send + Sync {
	/// Handles an HTTP request and produces a response.
	///
	/// # Errors
	///
	/// Returns an error if the request cannot be processed.
	async fn handle(&self, request: Request) -> Result<Response>;
}

#[async_trait]
impl<T: Handler + ?Sized> Handler for Arc<T> {
	async fn handle(&self, request: Request) -> Result<Response> {
		(**self).handle(request).await
	}
}

/// Middleware trait for request/response processing.
#[async_trait]
pub trait Middleware: Send + Sync {
	/// Processes a request through this middleware.
	///
	/// # Errors
	///
	/// Returns an error if the middleware or next handler fails.
	async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response>;

	/// Whether this middleware should run for the given request.
	///
	/// Defaults to `true`.
	fn should_continue(&self, _request: &Request) -> bool {
		true
	}
}

/// Middleware chain - composes multiple middleware into a single handler.
///
/// Middleware run in the order they were added; the first one added is the
/// outermost.
pub struct MiddlewareChain {
	middlewares: Vec<Arc<dyn Middleware>>,
	handler: Arc<dyn Handler>,
}

impl MiddlewareChain {
	/// Creates a new middleware chain around the given handler.
	pub fn new(handler: Arc<dyn Handler>) -> Self {
		Self {
			middlewares: Vec::new(),
			handler,
		}
	}

	/// Adds a middleware to the chain using builder pattern.
	pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
		self.middlewares.push(middleware);
		self
	}

	/// Adds a middleware to the chain.
	pub fn add_middleware(&mut self, middleware: Arc<dyn Middleware>) {
		self.middlewares.push(middleware);
	}
}

#[async_trait]
impl Handler for MiddlewareChain {
	async fn handle(&self, request: Request) -> Result<Response> {
		let active: Vec<_> = self
			.middlewares
			.iter()
			.rev()
			.filter(|mw| mw.should_continue(&request))
			.collect();

		tracing::trace!(
			active = active.len(),
			total = self.middlewares.len(),
			path = request.path(),
			"dispatching through middleware chain"
		);

		let mut current: Arc<dyn Handler> = self.handler.clone();
		for middleware in active {
			current = Arc::new(ComposedHandler {
				middleware: middleware.clone(),
				next: current,
			});
		}

		current.handle(request).await
	}
}

struct ComposedHandler {
	middleware: Arc<dyn Middleware>,
	next: Arc<dyn Handler>,
}

#[async_trait]
impl Handler for ComposedHandler {
	async fn handle(&self, request: Request) -> Result<Response> {
		self.middleware.process(request, self.next.clone()).await
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Error, NoMobile};
	use rstest::rstest;

	struct EchoHandler;

	#[async_trait]
	impl Handler for EchoHandler {
		async fn handle(&self, request: Request) -> Result<Response> {
			let kind = if request.is_mobile() { "mobile" } else { "desktop" };
			Ok(Response::ok().with_body(kind))
		}
	}

	struct OptOutHandler;

	#[async_trait]
	impl Handler for OptOutHandler {
		async fn handle(&self, request: Request) -> Result<Response> {
			request.mark_no_mobile();
			Ok(Response::ok())
		}
	}

	struct FailingHandler;

	#[async_trait]
	impl Handler for FailingHandler {
		async fn handle(&self, _request: Request) -> Result<Response> {
			Err(Error::Internal("view exploded".into()))
		}
	}

	// Flags every request whose User-Agent mentions "Mobile"
	struct UserAgentDetection;

	#[async_trait]
	impl Middleware for UserAgentDetection {
		async fn process(&self, mut request: Request, next: Arc<dyn Handler>) -> Result<Response> {
			let mobile = request
				.headers
				.get(hyper::header::USER_AGENT)
				.and_then(|v| v.to_str().ok())
				.is_some_and(|ua| ua.contains("Mobile"));
			request.set_mobile(mobile);
			next.handle(request).await
		}
	}

	// Adds `Vary: User-Agent` unless the view opted out
	struct VaryOnUserAgent;

	#[async_trait]
	impl Middleware for VaryOnUserAgent {
		async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response> {
			let extensions = request.extensions.clone();
			let response = next.handle(request).await?;
			if extensions.contains::<NoMobile>() {
				return Ok(response);
			}
			Ok(response.with_header("Vary", "User-Agent"))
		}
	}

	struct ApiOnly;

	#[async_trait]
	impl Middleware for ApiOnly {
		async fn process(&self, request: Request, next: Arc<dyn Handler>) -> Result<Response> {
			let response = next.handle(request).await?;
			let body = format!("api:{}", response.body_text());
			Ok(response.with_body(body))
		}

		fn should_continue(&self, request: &Request) -> bool {
			request.path().starts_with("/api/")
		}
	}

	fn request_with_agent(agent: &str) -> Request {
		let mut headers = hyper::HeaderMap::new();
		headers.insert(hyper::header::USER_AGENT, agent.parse().unwrap());
		Request::builder().uri("/").headers(headers).build().unwrap()
	}

	#[rstest]
	#[case("Mozilla/5.0 (iPhone) Mobile/15E148", "mobile")]
	#[case("Mozilla/5.0 (X11; Linux x86_64)", "desktop")]
	#[tokio::test]
	async fn test_detection_middleware_sets_flag(#[case] agent: &str, #[case] expected: &str) {
		let chain = MiddlewareChain::new(Arc::new(EchoHandler))
			.with_middleware(Arc::new(UserAgentDetection));

		let response = chain.handle(request_with_agent(agent)).await.unwrap();

		assert_eq!(response.body_text(), expected);
	}

	#[rstest]
	#[tokio::test]
	async fn test_vary_added_by_default() {
		let chain =
			MiddlewareChain::new(Arc::new(EchoHandler)).with_middleware(Arc::new(VaryOnUserAgent));

		let response = chain
			.handle(Request::builder().build().unwrap())
			.await
			.unwrap();

		assert_eq!(response.headers.get("vary").unwrap(), "User-Agent");
	}

	#[rstest]
	#[tokio::test]
	async fn test_vary_suppressed_after_opt_out() {
		let chain = MiddlewareChain::new(Arc::new(OptOutHandler))
			.with_middleware(Arc::new(VaryOnUserAgent));

		let response = chain
			.handle(Request::builder().build().unwrap())
			.await
			.unwrap();

		assert!(response.headers.get("vary").is_none());
	}

	#[rstest]
	#[tokio::test]
	async fn test_errors_pass_through_chain() {
		let chain = MiddlewareChain::new(Arc::new(FailingHandler))
			.with_middleware(Arc::new(UserAgentDetection))
			.with_middleware(Arc::new(VaryOnUserAgent));

		let result = chain.handle(Request::builder().build().unwrap()).await;

		assert_eq!(result.unwrap_err(), Error::Internal("view exploded".into()));
	}

	#[rstest]
	#[case("/api/items", "api:desktop")]
	#[case("/items", "desktop")]
	#[tokio::test]
	async fn test_conditional_middleware(#[case] path: &str, #[case] expected: &str) {
		let mut chain = MiddlewareChain::new(Arc::new(EchoHandler));
		chain.add_middleware(Arc::new(ApiOnly));

		let request = Request::builder().uri(path).build().unwrap();
		let response = chain.handle(request).await.unwrap();

		assert_eq!(response.body_text(), expected);
	}
}
