//! # CourseHub Core
//!
//! Core types, errors, and utilities shared by every CourseHub crate.
//!
//! - [`errors`]: Field-keyed validation errors
//! - [`validation`]: Parsing raw JSON input into validated DTOs
//! - [`urls`]: Absolute URL resolution against the inbound request
//! - [`serde`]: Custom serde serialization/deserialization helpers
//!
//! # Example
//!
//! ```ignore
//! use coursehub_core::{RequestContext, ValidatedInput, resolve_url};
//!
//! let ValidatedInput(dto) = ValidatedInput::<LoginRequest>::from_value(body)?;
//!
//! let request = RequestContext::parse("http://testserver/api/courses/")?;
//! let url = resolve_url(Some("/media/img.png"), &schemes, Some(&request));
//! ```

pub mod errors;
pub mod serde;
pub mod urls;
pub mod validation;

// Re-export commonly used types at crate root
pub use errors::{NON_FIELD_ERRORS, REQUIRED_MESSAGE, ValidationError};
pub use urls::{RequestContext, UrlResolver, is_absolute_url, resolve_url};
pub use validation::ValidatedInput;
