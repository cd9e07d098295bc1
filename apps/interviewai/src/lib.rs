//! # InterviewAI Library
//!
//! This library exposes the InterviewAI app modules for testing and
//! integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod cli;
pub mod config;
pub mod error;
pub mod forms;
pub mod progress;
pub mod server;
pub mod session;
pub mod views;

// Re-export interviewai_core for convenience
pub use interviewai_core;
