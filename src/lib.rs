//! Guardrails Library
//!
//! This crate provides the core functionality for evaluating shell commands
//! and project state against configurable guardrail rules.

pub mod cli;
pub mod config;
pub mod context;
pub mod error;
pub mod fix;
pub mod rules;

pub use error::GuardrailsError;
