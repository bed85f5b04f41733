//! Service layer for page-analyzer
//!
//! Centralizes business logic between the HTTP/CLI front ends and storage/fetch.

#![allow(missing_docs, reason = "Internal crate with self-explanatory API")]
#![allow(clippy::missing_errors_doc, reason = "Errors are self-explanatory from Result types")]
#![allow(missing_debug_implementations, reason = "Internal types")]
#![allow(clippy::implicit_return, reason = "Implicit return is idiomatic Rust")]
#![allow(clippy::question_mark_used, reason = "? operator is idiomatic Rust")]

mod check_service;
mod error;
mod url_service;

#[cfg(test)]
mod tests;

pub use check_service::CheckService;
pub use error::ServiceError;
pub use url_service::UrlService;
