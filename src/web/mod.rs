//! HTTP server module.
//!
//! Serves the embedded browser UI at `/` and the JSON task API under `/api`.

mod server;
pub mod templates;

pub use server::{AppState, build_router, serve};
