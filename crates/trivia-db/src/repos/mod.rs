//! Repository modules implementing store operations for trivia entities.
//!
//! Each module adds methods to `TriviaService` via `impl TriviaService` blocks.

pub mod category;
pub mod question;
