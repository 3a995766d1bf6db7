//! bsdate API server module
//!
//! Provides the HTTP upload/download surface around the conversion pipeline.
//! Run with `bsdate-server`.

pub mod handlers;
pub mod server;

pub use server::run_api_server;
