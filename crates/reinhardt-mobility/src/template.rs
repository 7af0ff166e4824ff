//! Template-selecting decorator.
//!
//! A template pattern holds the `{mobile/}` placeholder, which resolves to
//! `"mobile/"` for mobile requests and to nothing otherwise:
//!
//! | pattern | mobile | desktop |
//! |---|---|---|
//! | `a/{mobile/}b.html` | `a/mobile/b.html` | `a/b.html` |
//! | `{mobile/}home.html` | `mobile/home.html` | `home.html` |
//!
//! Braces follow the usual format-string rules: `{{` and `}}` stand for
//! literal braces, and any placeholder other than `{mobile/}` is rejected
//! when the pattern is parsed.

use async_trait::async_trait;
use reinhardt_http::{Error, Request, Response, Result};
use std::fmt;

use crate::settings::MobilitySettings;
use crate::view::{View, ViewArgs};

/// Name of the placeholder field inside a template pattern.
pub const MOBILE_PLACEHOLDER: &str = "mobile/";

/// Text substituted for the placeholder on mobile requests.
pub const MOBILE_SEGMENT: &str = "mobile/";

/// Named argument the resolved template is injected into by default.
pub const DEFAULT_TEMPLATE_ARGUMENT: &str = "template";

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
	Literal(String),
	Mobile,
}

/// A parsed template path pattern.
#[derive(Clone, PartialEq, Eq)]
pub struct TemplatePattern {
	source: String,
	segments: Vec<Segment>,
}

impl TemplatePattern {
	/// Parse a pattern.
	///
	/// # Errors
	///
	/// [`Error::ImproperlyConfigured`] for an unknown or unterminated
	/// placeholder, or a stray `}`.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_mobility::TemplatePattern;
	///
	/// let pattern = TemplatePattern::parse("a/{mobile/}b.html").unwrap();
	/// assert_eq!(pattern.resolve(true), "a/mobile/b.html");
	/// assert_eq!(pattern.resolve(false), "a/b.html");
	///
	/// assert!(TemplatePattern::parse("a/{lang}/b.html").is_err());
	/// ```
	pub fn parse(source: &str) -> Result<Self> {
		let mut segments = Vec::new();
		let mut literal = String::new();
		let mut chars = source.char_indices().peekable();

		while let Some((offset, c)) = chars.next() {
			match c {
				'{' if chars.peek().is_some_and(|&(_, next)| next == '{') => {
					chars.next();
					literal.push('{');
				}
				'{' => {
					let mut field = String::new();
					let mut closed = false;
					for (_, c) in chars.by_ref() {
						if c == '}' {
							closed = true;
							break;
						}
						field.push(c);
					}
					if !closed {
						return Err(Error::ImproperlyConfigured(format!(
							"unterminated placeholder at offset {} in template pattern '{}'",
							offset, source
						)));
					}
					if field != MOBILE_PLACEHOLDER {
						return Err(Error::ImproperlyConfigured(format!(
							"unknown placeholder '{{{}}}' in template pattern '{}'; only '{{{}}}' is supported",
							field, source, MOBILE_PLACEHOLDER
						)));
					}
					if !literal.is_empty() {
						segments.push(Segment::Literal(std::mem::take(&mut literal)));
					}
					segments.push(Segment::Mobile);
				}
				'}' if chars.peek().is_some_and(|&(_, next)| next == '}') => {
					chars.next();
					literal.push('}');
				}
				'}' => {
					return Err(Error::ImproperlyConfigured(format!(
						"single '}}' at offset {} in template pattern '{}'",
						offset, source
					)));
				}
				c => literal.push(c),
			}
		}
		if !literal.is_empty() {
			segments.push(Segment::Literal(literal));
		}

		Ok(Self {
			source: source.to_string(),
			segments,
		})
	}

	/// The pattern as written.
	pub fn as_str(&self) -> &str {
		&self.source
	}

	/// Whether the pattern contains the `{mobile/}` placeholder at all.
	pub fn has_placeholder(&self) -> bool {
		self.segments.contains(&Segment::Mobile)
	}

	/// Substitute the placeholder for a request with the given mobile flag.
	pub fn resolve(&self, mobile: bool) -> String {
		let replacement = if mobile { MOBILE_SEGMENT } else { "" };
		self.segments
			.iter()
			.map(|segment| match segment {
				Segment::Literal(text) => text.as_str(),
				Segment::Mobile => replacement,
			})
			.collect()
	}
}

impl fmt::Debug for TemplatePattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("TemplatePattern").field(&self.source).finish()
	}
}

impl fmt::Display for TemplatePattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.source)
	}
}

/// Configuration of the template-selecting decorator: the pattern and the
/// named argument that receives the resolved path.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MobileTemplate {
	pattern: TemplatePattern,
	argument: String,
}

impl MobileTemplate {
	/// Parse `pattern`, injecting into the `template` argument.
	///
	/// A pattern without the placeholder is accepted; every call then gets
	/// the pattern text unchanged.
	///
	/// # Errors
	///
	/// See [`TemplatePattern::parse`].
	pub fn new(pattern: &str) -> Result<Self> {
		let pattern = TemplatePattern::parse(pattern)?;
		if !pattern.has_placeholder() {
			tracing::debug!(
				pattern = pattern.as_str(),
				"template pattern has no {{mobile/}} placeholder; mobile and desktop share it"
			);
		}
		Ok(Self {
			pattern,
			argument: DEFAULT_TEMPLATE_ARGUMENT.to_string(),
		})
	}

	/// Parse `pattern`, injecting into the argument named by the settings.
	pub fn from_settings(pattern: &str, settings: &MobilitySettings) -> Result<Self> {
		Ok(Self::new(pattern)?.with_argument(settings.template_argument.clone()))
	}

	/// Inject into `argument` instead of `template`.
	pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
		self.argument = argument.into();
		self
	}

	pub fn pattern(&self) -> &TemplatePattern {
		&self.pattern
	}

	pub fn argument(&self) -> &str {
		&self.argument
	}

	/// The template path for this request.
	pub fn resolve(&self, request: &Request) -> String {
		self.pattern.resolve(request.is_mobile())
	}

	/// Decorate `view`.
	pub fn wrap<V: View>(self, view: V) -> MobileTemplateView<V> {
		MobileTemplateView {
			template: self,
			inner: view,
		}
	}
}

/// View produced by [`MobileTemplate::wrap`].
#[derive(Debug)]
pub struct MobileTemplateView<V> {
	template: MobileTemplate,
	inner: V,
}

impl<V> MobileTemplateView<V> {
	pub fn template(&self) -> &MobileTemplate {
		&self.template
	}

	pub fn inner(&self) -> &V {
		&self.inner
	}
}

#[async_trait]
impl<V: View> View for MobileTemplateView<V> {
	async fn call(&self, request: Request, mut args: ViewArgs) -> Result<Response> {
		let template = self.template.resolve(&request);
		tracing::debug!(
			view = self.inner.name(),
			mobile = request.is_mobile(),
			argument = self.template.argument(),
			template = template.as_str(),
			"selected template"
		);
		args.named.insert(self.template.argument.clone(), template);
		self.inner.call(request, args).await
	}

	fn name(&self) -> &str {
		self.inner.name()
	}
}

/// Decorate `view` with a template pattern injected into `template`.
///
/// # Errors
///
/// See [`TemplatePattern::parse`].
pub fn mobile_template<V: View>(pattern: &str, view: V) -> Result<MobileTemplateView<V>> {
	Ok(MobileTemplate::new(pattern)?.wrap(view))
}
