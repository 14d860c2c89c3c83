//! Entity structs for the trivia domain.
//!
//! Each entity maps to a table in the libSQL database (see
//! `trivia-db/migrations/001_initial.sql`). All structs derive `Serialize`,
//! `Deserialize`, and `JsonSchema` for JSON output and schema validation.

mod category;
mod question;

pub use category::Category;
pub use question::{NewQuestion, Question};
