//! Middleware components for HTTP request processing.
//!
//! This module provides middleware that handles cross-cutting concerns such as
//! security headers and response caching policy. The components are layered with
//! Axum's routing system.

pub mod security_headers;
