//! Road operations image analysis service.
//!
//! Serves a single upload page, forwards the chosen road photograph to a
//! multimodal chat-completion endpoint and hands the returned report back
//! for display and download.

pub mod analysis;
pub mod client;
pub mod config;
pub mod error;
pub mod intake;
pub mod markdown;
pub mod page;
pub mod prompt;
pub mod report;
pub mod routes;

pub use routes::build_app;
