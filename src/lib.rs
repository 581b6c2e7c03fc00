//! # PoolWart Backend Library
//!
//! This is the core library for PoolWart, a small service that manages the named
//! asset pools of a render pipeline (models, materials, HDRIs and lightsets).
//! Each pool is a flat collection of name/path records backed by SQLite, exposed
//! through a REST API.
//!
//! ## Architecture
//!
//! The application is built using:
//! - **Axum**: Modern web framework for HTTP server and routing
//! - **SQLx**: Asynchronous database operations with SQLite
//! - **Tokio**: Async runtime for concurrent operations
//! - **Serde**: Serialization/deserialization for JSON APIs
//!
//! ## Core Components
//!
//! - [`config`]: Application configuration management
//! - [`db`]: Database schema initialization
//! - [`error`]: Centralized error handling and HTTP error responses
//! - [`metrics`]: Application usage metrics
//! - [`middleware`]: HTTP middleware for security headers and caching policy
//! - [`routes`]: HTTP API endpoint handlers
//! - [`state`]: Shared application state and resource management
//! - [`types`]: Pool descriptors, data transfer objects and shared type definitions
//!
//! ## Features
//!
//! - Create and delete asset records per pool, deletion by name
//! - Combined listing of all four pools in one response
//! - Security headers and structured logging
//! - Comprehensive error handling with a JSON error envelope

pub mod config;
pub mod db;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
