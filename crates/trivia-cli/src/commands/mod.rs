pub mod categories;
pub mod dispatch;
pub mod questions;
pub mod quiz;
pub mod search;
pub mod seed;
