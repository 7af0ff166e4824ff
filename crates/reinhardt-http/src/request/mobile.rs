use super::Request;

/// Marker stored in the request extensions once a view opts out of mobile
/// handling.
///
/// Header middleware checks for it and skips adding `Vary` to the response.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoMobile;

impl Request {
	/// The `MOBILE` flag set by upstream detection middleware.
	pub fn is_mobile(&self) -> bool {
		self.mobile
	}

	/// Set the `MOBILE` flag.
	pub fn set_mobile(&mut self, mobile: bool) {
		self.mobile = mobile;
	}

	/// Set the `NO_MOBILE` flag.
	///
	/// The flag lives in the shared [`Extensions`](crate::Extensions), so a
	/// middleware holding a clone of `request.extensions` still sees it after
	/// the request has been handed to the view.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_http::{NoMobile, Request};
	///
	/// let request = Request::builder().build().unwrap();
	/// let extensions = request.extensions.clone();
	///
	/// request.mark_no_mobile();
	///
	/// assert!(request.is_no_mobile());
	/// assert!(extensions.contains::<NoMobile>());
	/// ```
	pub fn mark_no_mobile(&self) {
		self.extensions.insert(NoMobile);
	}

	/// The `NO_MOBILE` flag; `false` until [`Request::mark_no_mobile`] runs.
	pub fn is_no_mobile(&self) -> bool {
		self.extensions.contains::<NoMobile>()
	}
}
