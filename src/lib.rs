//! Article Service Library
//!
//! A small REST service exposing create/read/update/delete over a single
//! collection of articles persisted to a flat JSON file.
//!
//! ## Modules
//! - **`store`**: The persistence layer. Defines the `ArticleStore` trait and its
//!   file-backed and in-memory implementations.
//! - **`api`**: The HTTP resource layer. Routes requests to store operations and maps
//!   values, absence and failures onto status codes.
//! - **`config`**: Command-line and environment configuration for the binary (`main.rs`).

pub mod api;
pub mod config;
pub mod store;
