//! # Reinhardt HTTP
//!
//! Request, response, handler and middleware primitives.
//!
//! The request carries the two flags the mobility decorators work with:
//!
//! - `MOBILE`, set by upstream detection middleware ([`Request::set_mobile`]),
//! - `NO_MOBILE`, set by views that opt out of mobile handling
//!   ([`Request::mark_no_mobile`]) and read by header middleware.

pub mod error;
pub mod extensions;
pub mod middleware;
pub mod request;
pub mod response;

pub use error::{Error, Result};
pub use extensions::Extensions;
pub use middleware::{Handler, Middleware, MiddlewareChain};
pub use request::{NoMobile, Request, RequestBuilder};
pub use response::Response;
