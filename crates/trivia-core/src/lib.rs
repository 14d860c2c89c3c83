//! # trivia-core
//!
//! Core types shared across all trivia crates.
//!
//! This crate provides:
//! - Entity structs for questions and categories
//! - Request bodies as the boundary layer receives them
//! - Success payloads and the fixed error envelope
//! - The error-kind taxonomy (bad-request, not-found, method-not-allowed, internal-error)
//! - Reserved identifiers such as the "all categories" quiz sentinel

pub mod entities;
pub mod errors;
pub mod ids;
pub mod requests;
pub mod responses;
