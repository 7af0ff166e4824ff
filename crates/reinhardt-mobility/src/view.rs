//! The view abstraction the decorators wrap.
//!
//! A [`View`] receives the request together with its [`ViewArgs`], the
//! positional and named arguments a router or an outer decorator supplies.
//! Decorators are themselves views, so they nest freely:
//!
//! ```
//! use reinhardt_http::{Request, Response};
//! use reinhardt_mobility::{MobileTemplate, View, ViewArgs, ViewExt, view_fn};
//!
//! # tokio_test::block_on(async {
//! let view = view_fn("article_detail", |_request: Request, args: ViewArgs| async move {
//!     let template = args.get("template").unwrap_or_default().to_string();
//!     Ok(Response::ok().with_body(template))
//! })
//! .with_mobile_template(MobileTemplate::new("news/{mobile/}article.html").unwrap())
//! .not_mobilized();
//!
//! let request = Request::builder().mobile(true).build().unwrap();
//! let response = view.call(request, ViewArgs::new()).await.unwrap();
//!
//! assert_eq!(response.body_text(), "news/mobile/article.html");
//! assert_eq!(view.name(), "article_detail");
//! # });
//! ```

use async_trait::async_trait;
use reinhardt_http::{Handler, Request, Response, Result};
use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use crate::mobilized::{Mobilized, MobilizedView};
use crate::not_mobilized::NotMobilized;
use crate::template::{MobileTemplate, MobileTemplateView};

/// Arguments passed to a view alongside the request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewArgs {
	pub positional: Vec<String>,
	pub named: HashMap<String, String>,
}

impl ViewArgs {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a positional argument.
	pub fn with_arg(mut self, value: impl Into<String>) -> Self {
		self.positional.push(value.into());
		self
	}

	/// Set a named argument, replacing any previous value.
	pub fn with_named(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.named.insert(name.into(), value.into());
		self
	}

	/// Look up a named argument.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.named.get(name).map(String::as_str)
	}

	/// Named arguments taken from the path parameters a router extracted.
	pub fn from_path_params(params: &HashMap<String, String>) -> Self {
		Self {
			positional: Vec::new(),
			named: params.clone(),
		}
	}
}

/// A request handler that also receives call arguments.
#[async_trait]
pub trait View: Send + Sync {
	/// Handle the request.
	///
	/// # Errors
	///
	/// Whatever the view itself fails with; decorators never alter it.
	async fn call(&self, request: Request, args: ViewArgs) -> Result<Response>;

	/// Name identifying the view in logs. Decorators report the name of the
	/// view they wrap.
	fn name(&self) -> &str {
		std::any::type_name::<Self>()
	}
}

#[async_trait]
impl<T: View + ?Sized> View for Arc<T> {
	async fn call(&self, request: Request, args: ViewArgs) -> Result<Response> {
		(**self).call(request, args).await
	}

	fn name(&self) -> &str {
		(**self).name()
	}
}

#[async_trait]
impl<T: View + ?Sized> View for Box<T> {
	async fn call(&self, request: Request, args: ViewArgs) -> Result<Response> {
		(**self).call(request, args).await
	}

	fn name(&self) -> &str {
		(**self).name()
	}
}

/// View adapter for async functions and closures.
pub struct FnView<F> {
	name: String,
	func: F,
}

#[async_trait]
impl<F, Fut> View for FnView<F>
where
	F: Fn(Request, ViewArgs) -> Fut + Send + Sync,
	Fut: Future<Output = Result<Response>> + Send,
{
	async fn call(&self, request: Request, args: ViewArgs) -> Result<Response> {
		(self.func)(request, args).await
	}

	fn name(&self) -> &str {
		&self.name
	}
}

impl<F> std::fmt::Debug for FnView<F> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("FnView").field("name", &self.name).finish()
	}
}

/// Wrap an async function as a named [`View`].
pub fn view_fn<F, Fut>(name: impl Into<String>, func: F) -> FnView<F>
where
	F: Fn(Request, ViewArgs) -> Fut + Send + Sync,
	Fut: Future<Output = Result<Response>> + Send,
{
	FnView {
		name: name.into(),
		func,
	}
}

/// Exposes a [`View`] as a [`Handler`], so it can sit at the end of a
/// `MiddlewareChain`.
///
/// Path parameters become named arguments; no positional arguments are
/// passed.
#[derive(Debug)]
pub struct ViewHandler<V> {
	view: V,
}

impl<V: View> ViewHandler<V> {
	pub fn new(view: V) -> Self {
		Self { view }
	}

	pub fn view(&self) -> &V {
		&self.view
	}
}

#[async_trait]
impl<V: View> Handler for ViewHandler<V> {
	async fn handle(&self, request: Request) -> Result<Response> {
		let args = ViewArgs::from_path_params(&request.path_params);
		tracing::trace!(view = self.view.name(), path = request.path(), "calling view");
		self.view.call(request, args).await
	}
}

/// Decoration methods available on every [`View`].
pub trait ViewExt: View + Sized {
	/// Inject a template path chosen by the request's mobile flag.
	fn with_mobile_template(self, template: MobileTemplate) -> MobileTemplateView<Self> {
		template.wrap(self)
	}

	/// Serve `mobile` instead of `self` for mobile requests.
	fn mobilized_with<M: View>(self, mobile: M) -> MobilizedView<Self, M> {
		Mobilized::new(self).wrap(mobile)
	}

	/// Flag every request this view handles as `NO_MOBILE`.
	fn not_mobilized(self) -> NotMobilized<Self> {
		NotMobilized::new(self)
	}

	fn into_handler(self) -> ViewHandler<Self> {
		ViewHandler::new(self)
	}
}

impl<V: View> ViewExt for V {}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	struct StaticView;

	#[async_trait]
	impl View for StaticView {
		async fn call(&self, _request: Request, args: ViewArgs) -> Result<Response> {
			Ok(Response::ok().with_body(args.positional.join(",")))
		}
	}

	#[rstest]
	fn test_view_args_builders() {
		let args = ViewArgs::new()
			.with_arg("2024")
			.with_named("slug", "launch")
			.with_named("slug", "release");

		assert_eq!(args.positional, vec!["2024".to_string()]);
		assert_eq!(args.get("slug"), Some("release"));
		assert_eq!(args.get("missing"), None);
	}

	#[rstest]
	fn test_default_name_is_type_name() {
		assert!(StaticView.name().ends_with("StaticView"));
	}

	#[rstest]
	#[tokio::test]
	async fn test_shared_views_delegate() {
		let shared: Arc<dyn View> = Arc::new(StaticView);
		let boxed: Box<dyn View> = Box::new(StaticView);
		let args = ViewArgs::new().with_arg("a").with_arg("b");

		let from_arc = shared
			.call(Request::builder().build().unwrap(), args.clone())
			.await
			.unwrap();
		let from_box = boxed
			.call(Request::builder().build().unwrap(), args)
			.await
			.unwrap();

		assert_eq!(from_arc.body_text(), "a,b");
		assert_eq!(from_box.body_text(), "a,b");
		assert_eq!(shared.name(), boxed.name());
	}

	#[rstest]
	#[tokio::test]
	async fn test_view_handler_maps_path_params() {
		let handler = view_fn("user_detail", |_request: Request, args: ViewArgs| async move {
			Ok(Response::ok().with_body(format!(
				"{}:{}",
				args.positional.len(),
				args.get("id").unwrap_or("-")
			)))
		})
		.into_handler();

		let request = Request::builder()
			.uri("/users/9/")
			.path_param("id", "9")
			.build()
			.unwrap();
		let response = handler.handle(request).await.unwrap();

		assert_eq!(response.body_text(), "0:9");
		assert_eq!(handler.view().name(), "user_detail");
	}
}
