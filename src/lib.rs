//! # Reinhardt Mobility
//!
//! Mobile-aware views for Reinhardt-style web projects.
//!
//! Upstream middleware decides whether a request comes from a mobile client
//! and sets the request's mobile flag. Views then use the decorators in
//! [`mobility`] to:
//!
//! - pick a `mobile/` template variant ([`MobileTemplate`]),
//! - pick a separate mobile view ([`mobilized`]),
//! - opt out of mobile handling, so header middleware skips `Vary`
//!   ([`not_mobilized`]).
//!
//! ## Feature Flags
//!
//! - `mobility` (default) - the view decorators
//!
//! Without `mobility` only the [`http`] primitives are exported.
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_mobility_web::prelude::*;
//!
//! # tokio_test::block_on(async {
//! let desktop = view_fn("home", |_request: Request, args: ViewArgs| async move {
//!     Ok(Response::ok().with_body(args.get("template").unwrap_or_default().to_string()))
//! })
//! .with_mobile_template(MobileTemplate::new("home/{mobile/}index.html").unwrap());
//!
//! let request = Request::builder().mobile(true).build().unwrap();
//! let response = desktop.call(request, ViewArgs::new()).await.unwrap();
//! assert_eq!(response.body_text(), "home/mobile/index.html");
//! # });
//! ```

pub mod http;
#[cfg(feature = "mobility")]
pub mod mobility;

pub use reinhardt_http::{
	Error, Extensions, Handler, Middleware, MiddlewareChain, NoMobile, Request, RequestBuilder,
	Response, Result,
};

#[cfg(feature = "mobility")]
pub use reinhardt_mobility::{
	FnView, MobileTemplate, MobileTemplateView, MobilitySettings, Mobilized, MobilizedView,
	NotMobilized, TemplatePattern, View, ViewArgs, ViewExt, ViewHandler, mobile_template,
	mobilized, not_mobilized, view_fn,
};

/// Prelude module for convenient imports
pub mod prelude {
	pub use crate::{
		Error, Handler, Middleware, MiddlewareChain, NoMobile, Request, Response, Result,
	};

	// External
	pub use async_trait::async_trait;

	#[cfg(feature = "mobility")]
	pub use crate::{
		MobileTemplate, MobilitySettings, View, ViewArgs, ViewExt, ViewHandler, mobile_template,
		mobilized, not_mobilized, view_fn,
	};
}
