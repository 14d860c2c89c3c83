//! # trivia-query
//!
//! Read and write paths over the trivia store: page windows, filtered
//! listings, quiz draws, and the assembler that turns every outcome into a
//! `{success, ...}` body or a fixed error envelope.
//!
//! [`api::TriviaApi`] is the entry point for boundary layers.

pub mod api;
pub mod error;
pub mod filter;
pub mod paginator;
pub mod quiz;
pub mod response;
pub mod seed;

#[cfg(test)]
mod test_support;

pub use api::{TriviaApi, parse_body};
pub use error::QueryError;
pub use paginator::{Page, PageWindow, Paginator};
pub use response::{Reply, ResponseAssembler};
