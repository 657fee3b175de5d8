//! Contacts - HTTP service for the contact resource
//!
//! This crate provides:
//! - The axum router for `/api/contacts` and the landing page
//! - Layered configuration (defaults, TOML files, environment, CLI)
//! - Database, logging and sample-data setup
//! - The server loop with graceful shutdown

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::panic))]
#![warn(clippy::pedantic)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod db;
pub mod http;
pub mod logging;
pub mod seed;
pub mod server;

pub use config::{load_config, Config};
pub use http::router;
