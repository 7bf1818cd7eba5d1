//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate storage facade calls into use-case level APIs.
//! - Keep UI/FFI layers decoupled from persistence details.

pub mod goal_service;
