//! # CrewTask Core Library
//!
//! This crate contains the shared business logic of the CrewTask backend:
//! the ephemeral token lifecycle behind OTP registration, password reset,
//! and team invitations, and the checklist-driven task progress engine.
//!
//! The HTTP layer, persistence, authorization, and email transport live
//! outside this crate and consume it as a library. Both components here are
//! stateless per request: the token store talks to an injected storage
//! handle, and the progress engine is a pair of pure functions over task
//! values.
//!
//! ## Module Organization
//!
//! - `models`: Task status, checklist, and completion types
//! - `progress`: Progress/status derivation from checklist state
//! - `tokens`: Ephemeral token store (OTP, password reset, invitations)
//! - `storage`: Redis client wrapper
//! - `config`: Configuration management

pub mod config;
pub mod models;
pub mod progress;
pub mod storage;
pub mod tokens;

/// Current version of the CrewTask core library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
