//! Opt-out marker decorator.

use async_trait::async_trait;
use reinhardt_http::{Request, Response, Result};

use crate::view::{View, ViewArgs};

/// Marks every request it handles as `NO_MOBILE` before delegating, so that
/// header middleware leaves `Vary` off the response.
///
/// The inner view's result, success or error, is returned as is.
#[derive(Debug)]
pub struct NotMobilized<V> {
	inner: V,
}

impl<V: View> NotMobilized<V> {
	pub fn new(inner: V) -> Self {
		Self { inner }
	}

	pub fn inner(&self) -> &V {
		&self.inner
	}
}

#[async_trait]
impl<V: View> View for NotMobilized<V> {
	async fn call(&self, request: Request, args: ViewArgs) -> Result<Response> {
		request.mark_no_mobile();
		tracing::trace!(view = self.inner.name(), "request marked NO_MOBILE");
		self.inner.call(request, args).await
	}

	fn name(&self) -> &str {
		self.inner.name()
	}
}

/// Decorate `view` so that its requests carry `NO_MOBILE`.
pub fn not_mobilized<V: View>(view: V) -> NotMobilized<V> {
	NotMobilized::new(view)
}
