//! # Reinhardt Mobility
//!
//! View decorators that branch on whether a request comes from a mobile
//! client. Detection itself happens upstream: some middleware sets the
//! request's mobile flag before the view runs, and these decorators only
//! read it.
//!
//! - [`MobileTemplate`] / [`mobile_template`]: inject a template path whose
//!   `{mobile/}` placeholder becomes `"mobile/"` or nothing.
//! - [`Mobilized`] / [`mobilized`]: choose between a desktop and a mobile view.
//! - [`NotMobilized`] / [`not_mobilized`]: set `NO_MOBILE` on the request so
//!   header middleware skips `Vary`.
//!
//! ## Example
//!
//! ```
//! use reinhardt_http::{Handler, MiddlewareChain, Request, Response};
//! use reinhardt_mobility::{MobileTemplate, ViewArgs, ViewExt, view_fn};
//! use std::sync::Arc;
//!
//! # tokio_test::block_on(async {
//! let render = view_fn("article", |_request: Request, args: ViewArgs| async move {
//!     let template = args.get("template").unwrap_or_default().to_string();
//!     Ok(Response::ok().with_body(format!("{} #{}", template, args.get("pk").unwrap_or("?"))))
//! });
//! let handler = render
//!     .with_mobile_template(MobileTemplate::new("news/{mobile/}article.html").unwrap())
//!     .into_handler();
//! let chain = MiddlewareChain::new(Arc::new(handler));
//!
//! let request = Request::builder()
//!     .uri("/news/3/")
//!     .path_param("pk", "3")
//!     .mobile(false)
//!     .build()
//!     .unwrap();
//! let response = chain.handle(request).await.unwrap();
//!
//! assert_eq!(response.body_text(), "news/article.html #3");
//! # });
//! ```

pub mod mobilized;
pub mod not_mobilized;
pub mod settings;
pub mod template;
pub mod view;

pub use mobilized::{Mobilized, MobilizedView, mobilized};
pub use not_mobilized::{NotMobilized, not_mobilized};
pub use settings::MobilitySettings;
pub use template::{
	DEFAULT_TEMPLATE_ARGUMENT, MOBILE_PLACEHOLDER, MOBILE_SEGMENT, MobileTemplate,
	MobileTemplateView, TemplatePattern, mobile_template,
};
pub use view::{FnView, View, ViewArgs, ViewExt, ViewHandler, view_fn};

pub use reinhardt_http::{Error, Result};
