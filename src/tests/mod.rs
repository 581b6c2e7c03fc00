//! Integration and unit tests for the PoolWart application.
//!
//! This module organizes all test modules for the application, providing
//! comprehensive test coverage for different components and functionality.
//!
//! ## Test Modules
//!
//! - **api_tests**: Pool endpoint tests (create, delete, combined listing)
//! - **error_tests**: Error handling and response envelope tests
//! - **config_tests**: Configuration loading and validation tests
//! - **db_tests**: Database schema and SQL behavior tests
//! - **health_api_tests**: Health check and metrics endpoint tests
//!
//! ## Running Tests
//!
//! Tests can be run using:
//! ```bash
//! cargo test
//! ```
//!
//! Individual test modules can be run with:
//! ```bash
//! cargo test api_tests
//! cargo test db_tests
//! # etc.
//! ```

pub mod db_tests;
pub mod health_api_tests;
