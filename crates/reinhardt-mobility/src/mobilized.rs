//! Function-pair selecting decorator.
//!
//! ```
//! use reinhardt_http::{Request, Response};
//! use reinhardt_mobility::{View, ViewArgs, mobilized, view_fn};
//!
//! # tokio_test::block_on(async {
//! let desktop = view_fn("home", |_request: Request, _args: ViewArgs| async move {
//!     Ok(Response::ok().with_body("full page"))
//! });
//! let mobile = view_fn("home_mobile", |_request: Request, _args: ViewArgs| async move {
//!     Ok(Response::ok().with_body("compact page"))
//! });
//! let home = mobilized(desktop, mobile);
//!
//! let request = Request::builder().mobile(true).build().unwrap();
//! let response = home.call(request, ViewArgs::new()).await.unwrap();
//! assert_eq!(response.body_text(), "compact page");
//! # });
//! ```

use async_trait::async_trait;
use reinhardt_http::{Request, Response, Result};

use crate::view::{View, ViewArgs};

/// Holds the desktop view until the mobile counterpart is supplied.
#[derive(Debug)]
pub struct Mobilized<N> {
	normal: N,
}

impl<N: View> Mobilized<N> {
	pub fn new(normal: N) -> Self {
		Self { normal }
	}

	/// Pair the desktop view with `mobile`.
	pub fn wrap<M: View>(self, mobile: M) -> MobilizedView<N, M> {
		MobilizedView {
			normal: self.normal,
			mobile,
		}
	}
}

/// Dispatches each call to exactly one of two views, chosen by the
/// request's mobile flag.
///
/// Reports the mobile view's name.
#[derive(Debug)]
pub struct MobilizedView<N, M> {
	normal: N,
	mobile: M,
}

impl<N, M> MobilizedView<N, M> {
	pub fn normal(&self) -> &N {
		&self.normal
	}

	pub fn mobile(&self) -> &M {
		&self.mobile
	}
}

#[async_trait]
impl<N: View, M: View> View for MobilizedView<N, M> {
	async fn call(&self, request: Request, args: ViewArgs) -> Result<Response> {
		if request.is_mobile() {
			tracing::debug!(view = self.mobile.name(), "dispatching to mobile view");
			self.mobile.call(request, args).await
		} else {
			tracing::debug!(view = self.normal.name(), "dispatching to normal view");
			self.normal.call(request, args).await
		}
	}

	fn name(&self) -> &str {
		self.mobile.name()
	}
}

/// Serve `normal` to desktop requests and `mobile` to mobile requests.
pub fn mobilized<N: View, M: View>(normal: N, mobile: M) -> MobilizedView<N, M> {
	Mobilized::new(normal).wrap(mobile)
}
