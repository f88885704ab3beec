// Library root: re-exports all modules so integration tests and external
// consumers can access the crate's public API.

pub mod app;
pub mod auth;
pub mod config;
pub mod forms;
pub mod model;
pub mod query;
pub mod repository;
pub mod seed;
pub mod store;
pub mod tui;
