//! Page fetching and SEO metadata extraction for page-analyzer.

mod client;
pub mod error;
mod extract;


pub use client::{FetchedPage, PageFetcher};
pub use error::{CheckFailure, FetchError};
pub use extract::extract_metadata;
