//! Mobility module.
//!
//! View decorators that branch on the request's mobile flag.
//!
//! # Examples
//!
//! ```rust
//! use reinhardt_mobility_web::mobility::TemplatePattern;
//!
//! let pattern = TemplatePattern::parse("blog/{mobile/}post.html").unwrap();
//! assert_eq!(pattern.resolve(true), "blog/mobile/post.html");
//! ```

pub use reinhardt_mobility::*;
