//! Core types shared across the build passes.

mod url;

pub use url::UrlPath;
