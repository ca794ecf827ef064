//! Batch resolver of article thumbnail URLs.
//!
//! Publishers declare a preview image in `og:image`-style meta tags, but the
//! value often arrives wrapped: behind CORS proxy prefixes, percent-encoded
//! one or more times, or pointed at a platform dynamic-image endpoint
//! (dev.to, Medium, Substack) instead of the original asset. The pipeline in
//! [`resolver`] unwinds those layers and probes the result before accepting
//! it; [`worker`] runs it over a dataset with bounded concurrency and
//! per-host pacing.

pub mod config;
pub mod dataset;
pub mod error;
pub mod models;
pub mod proxy;
pub mod resolver;
pub mod worker;
