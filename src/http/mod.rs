//! HTTP client module for backend checks
//!
//! Provides the HTTP capability used by the health and auth checks.

mod client;

pub use client::{HttpClient, HttpResponse};
