//! Common test infrastructure
//!
//! This module provides all the infrastructure needed for end-to-end tests.
//! Tests should only import from this module, not from internal submodules.
//!
//! # Example
//!
//! ```no_run
//! mod common;
//! use common::TestServer;
//! use reqwest::StatusCode;
//!
//! #[tokio::test]
//! async fn test_landing() {
//!     let server = TestServer::spawn().await;
//!
//!     let response = server.get("/").await;
//!     assert_eq!(response.status(), StatusCode::OK);
//! }
//! ```

mod constants;
mod fixtures;
mod server;

// Public API - this is what tests import
pub use constants::*;
pub use fixtures::{hidden_gem_title, AssetsFixture};
pub use server::TestServer;
