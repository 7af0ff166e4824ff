//! HTTP module.
//!
//! Request, response, handler and middleware primitives.
//!
//! # Examples
//!
//! ```rust
//! use reinhardt_mobility_web::http::Request;
//!
//! let request = Request::builder().uri("/").mobile(true).build().unwrap();
//! assert!(request.is_mobile());
//! assert!(!request.is_no_mobile());
//! ```

pub use reinhardt_http::*;
